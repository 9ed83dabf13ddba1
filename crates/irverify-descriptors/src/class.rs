//! Class descriptors.

use irverify_core::{ClassId, ClassKind, Visibility};

use crate::member::{DeclarationDescriptor, FunctionDescriptor, PropertyDescriptor};
use crate::scope::MemberScope;

/// Resolved view of a class.
///
/// The member scope is what resolution computed for the class itself,
/// before any type substitution: declared members plus every fake override
/// the class inherits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Stable identity.
    pub id: ClassId,
    /// Kind of class.
    pub kind: ClassKind,
    /// Visibility of the class itself.
    pub visibility: Visibility,
    /// Direct supertypes.
    pub supertypes: Vec<ClassId>,
    member_scope: MemberScope,
}

impl ClassDescriptor {
    /// Create a public class descriptor with an empty scope.
    pub fn new(id: ClassId, kind: ClassKind) -> Self {
        Self {
            id,
            kind,
            visibility: Visibility::Public,
            supertypes: Vec::new(),
            member_scope: MemberScope::new(),
        }
    }

    // === Builder Methods ===

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_supertype(mut self, supertype: ClassId) -> Self {
        self.supertypes.push(supertype);
        self
    }

    pub fn with_function(mut self, function: FunctionDescriptor) -> Self {
        self.member_scope.add(function);
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.member_scope.add(property);
        self
    }

    /// Add a nested classifier to the scope.
    pub fn with_nested_class(mut self, nested: ClassId) -> Self {
        self.member_scope.add(DeclarationDescriptor::Classifier(nested));
        self
    }

    // === Query Methods ===

    /// Member scope before type substitution.
    pub fn unsubstituted_member_scope(&self) -> &MemberScope {
        &self.member_scope
    }

    /// Check if this describes an enum entry.
    pub fn is_enum_entry(&self) -> bool {
        self.kind.is_enum_entry()
    }
}
