//! Module descriptors and cross-module class lookup.
//!
//! A [`ModuleDescriptor`] owns the class descriptors resolution produced for
//! one module, plus handles to the modules it depends on. Lookups search the
//! module first and then its dependencies depth-first in declaration order,
//! returning the first match.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use irverify_core::{ClassHash, ClassId};

use crate::class::ClassDescriptor;

/// Errors raised while populating a module descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// A class with the same id is already registered in this module.
    #[error("class '{id}' is already registered in module '{module}'")]
    DuplicateClass { id: ClassId, module: String },
}

/// Read access to resolved class descriptors.
pub trait DescriptorLookup {
    /// Find a class descriptor by id.
    fn find_class(&self, id: &ClassId) -> Option<&ClassDescriptor>;
}

/// Resolved classes of one module.
#[derive(Debug, Default)]
pub struct ModuleDescriptor {
    name: String,
    /// Classes bucketed by hash; distinct ids with equal hashes share a bucket.
    classes: FxHashMap<ClassHash, Vec<ClassDescriptor>>,
    dependencies: Vec<Arc<ModuleDescriptor>>,
}

impl ModuleDescriptor {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: FxHashMap::default(),
            dependencies: Vec::new(),
        }
    }

    /// Module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a class descriptor.
    pub fn register_class(&mut self, class: ClassDescriptor) -> Result<(), DescriptorError> {
        let hash = class.id.class_hash();
        self.insert_class(hash, class)
    }

    /// Builder-style [`register_class`](Self::register_class).
    pub fn with_class(mut self, class: ClassDescriptor) -> Result<Self, DescriptorError> {
        self.register_class(class)?;
        Ok(self)
    }

    /// Add a dependency searched after this module's own classes.
    pub fn add_dependency(&mut self, dependency: Arc<ModuleDescriptor>) {
        self.dependencies.push(dependency);
    }

    pub fn with_dependency(mut self, dependency: Arc<ModuleDescriptor>) -> Self {
        self.add_dependency(dependency);
        self
    }

    /// Direct dependencies.
    pub fn dependencies(&self) -> &[Arc<ModuleDescriptor>] {
        &self.dependencies
    }

    /// Find a class declared in this module only.
    pub fn find_local_class(&self, id: &ClassId) -> Option<&ClassDescriptor> {
        self.class_in_bucket(id.class_hash(), id)
    }

    /// This module followed by its transitive dependencies, depth-first in
    /// declaration order.
    ///
    /// A module reachable through several paths appears once, at its first
    /// position.
    pub fn search_order(&self) -> Vec<&ModuleDescriptor> {
        let mut order = Vec::new();
        let mut visited = FxHashSet::default();
        self.collect_search_order(&mut order, &mut visited);
        order
    }

    /// Find a class in this module or any transitive dependency.
    pub fn find_class_across_dependencies(&self, id: &ClassId) -> Option<&ClassDescriptor> {
        self.search_order()
            .into_iter()
            .find_map(|module| module.find_local_class(id))
    }

    fn insert_class(
        &mut self,
        hash: ClassHash,
        class: ClassDescriptor,
    ) -> Result<(), DescriptorError> {
        let bucket = self.classes.entry(hash).or_default();
        if bucket.iter().any(|existing| existing.id == class.id) {
            return Err(DescriptorError::DuplicateClass {
                id: class.id,
                module: self.name.clone(),
            });
        }
        bucket.push(class);
        Ok(())
    }

    fn class_in_bucket(&self, hash: ClassHash, id: &ClassId) -> Option<&ClassDescriptor> {
        self.classes.get(&hash)?.iter().find(|c| &c.id == id)
    }

    fn collect_search_order<'a>(
        &'a self,
        order: &mut Vec<&'a ModuleDescriptor>,
        visited: &mut FxHashSet<*const ModuleDescriptor>,
    ) {
        if !visited.insert(self as *const ModuleDescriptor) {
            return;
        }
        order.push(self);
        for dependency in &self.dependencies {
            dependency.collect_search_order(order, visited);
        }
    }
}

impl DescriptorLookup for ModuleDescriptor {
    fn find_class(&self, id: &ClassId) -> Option<&ClassDescriptor> {
        self.find_class_across_dependencies(id)
    }
}
