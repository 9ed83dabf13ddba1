//! Member scopes and kind filters.

use bitflags::bitflags;

use crate::member::{CallableMemberDescriptor, DeclarationDescriptor};

bitflags! {
    /// Selects which kinds of descriptors a scope query returns.
    ///
    /// ```
    /// use irverify_descriptors::DescriptorKindFilter;
    ///
    /// let callables = DescriptorKindFilter::CALLABLES;
    /// assert!(callables.contains(DescriptorKindFilter::FUNCTIONS));
    /// assert!(!callables.contains(DescriptorKindFilter::CLASSIFIERS));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DescriptorKindFilter: u8 {
        const FUNCTIONS = 1 << 0;
        const VARIABLES = 1 << 1;
        const CLASSIFIERS = 1 << 2;
        const CALLABLES = Self::FUNCTIONS.bits() | Self::VARIABLES.bits();
        const ALL = Self::CALLABLES.bits() | Self::CLASSIFIERS.bits();
    }
}

impl DescriptorKindFilter {
    /// Check if a descriptor passes this filter.
    pub fn accepts(self, descriptor: &DeclarationDescriptor) -> bool {
        let kind = match descriptor {
            DeclarationDescriptor::Function(_) => DescriptorKindFilter::FUNCTIONS,
            DeclarationDescriptor::Property(_) => DescriptorKindFilter::VARIABLES,
            DeclarationDescriptor::Classifier(_) => DescriptorKindFilter::CLASSIFIERS,
        };
        self.contains(kind)
    }
}

/// The unsubstituted member scope of a class.
///
/// Contains declared members, fake overrides and nested classifiers in the
/// order resolution produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberScope {
    descriptors: Vec<DeclarationDescriptor>,
}

impl MemberScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor.
    pub fn add(&mut self, descriptor: impl Into<DeclarationDescriptor>) {
        self.descriptors.push(descriptor.into());
    }

    /// All descriptors passing `filter`.
    pub fn descriptors_filtered(
        &self,
        filter: DescriptorKindFilter,
    ) -> impl Iterator<Item = &DeclarationDescriptor> {
        self.descriptors.iter().filter(move |d| filter.accepts(d))
    }

    /// All callable members passing `filter`.
    pub fn callables(
        &self,
        filter: DescriptorKindFilter,
    ) -> impl Iterator<Item = CallableMemberDescriptor<'_>> {
        self.descriptors_filtered(filter).filter_map(|d| d.as_callable())
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
