//! Descriptor model.
//!
//! The resolved symbol-table view of a program, as produced by name and type
//! resolution before IR lowering. This crate only carries the data; nothing
//! here resolves names or computes overrides.
//!
//! - [`ModuleDescriptor`]: classes of one module plus its dependencies
//! - [`ClassDescriptor`]: one class and its unsubstituted member scope
//! - [`MemberScope`] / [`DescriptorKindFilter`]: filtered member queries
//! - [`CallableMemberDescriptor`]: borrowed view over functions and properties
//!
//! # Example
//!
//! ```
//! use irverify_core::{ClassId, ClassKind, builtins};
//! use irverify_descriptors::{
//!     ClassDescriptor, DescriptorKindFilter, DescriptorLookup, FunctionDescriptor,
//!     KotlinType, ModuleDescriptor,
//! };
//!
//! let id = ClassId::top_level("demo", "C");
//! let class = ClassDescriptor::new(id.clone(), ClassKind::Class).with_function(
//!     FunctionDescriptor::new("foo", id.clone(), KotlinType::class(builtins::int()))
//!         .fake_override(),
//! );
//! let module = ModuleDescriptor::new("main").with_class(class).unwrap();
//!
//! let found = module.find_class(&id).unwrap();
//! let callables = found
//!     .unsubstituted_member_scope()
//!     .callables(DescriptorKindFilter::CALLABLES)
//!     .count();
//! assert_eq!(callables, 1);
//! ```

mod class;
mod member;
mod module;
mod scope;
mod types;

pub use class::ClassDescriptor;
pub use member::{
    CallableKind, CallableMemberDescriptor, DeclarationDescriptor, FunctionDescriptor,
    PropertyDescriptor, ValueParameterDescriptor,
};
pub use module::{DescriptorError, DescriptorLookup, ModuleDescriptor};
pub use scope::{DescriptorKindFilter, MemberScope};
pub use types::{KotlinType, TypeConstructor, TypeParameterDescriptor};
