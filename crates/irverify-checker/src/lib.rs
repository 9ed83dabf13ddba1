//! Fake-override validation.
//!
//! Cross-checks the fake overrides materialized in an [`IrModule`] against
//! the ones the descriptor model computed for the same classes. The check runs
//! after IR lowering; any fault means the two models disagree about which
//! members a class inherits and compilation must not continue.
//!
//! ## Components
//!
//! - [`FakeOverrideChecker`]: walks a module and validates every class
//! - [`FakeOverrideValidator`]: compares one class with its descriptor
//! - [`OverriddenSymbolLinker`]: checks overridden-symbol edges
//! - [`SignatureMangler`]: [`IrMangler`] and [`DescriptorMangler`] produce
//!   comparable signatures for both models
//!
//! # Example
//!
//! ```
//! use irverify_checker::FakeOverrideChecker;
//! use irverify_core::{ClassId, ClassKind, builtins};
//! use irverify_descriptors::{ClassDescriptor, FunctionDescriptor, KotlinType, ModuleDescriptor};
//! use irverify_ir::{IrClass, IrFunction, IrModule, IrType};
//!
//! let id = ClassId::top_level("demo", "C");
//! let descriptors = ModuleDescriptor::new("main")
//!     .with_class(ClassDescriptor::new(id.clone(), ClassKind::Class).with_function(
//!         FunctionDescriptor::new("foo", id, KotlinType::class(builtins::int())).fake_override(),
//!     ))
//!     .unwrap();
//!
//! let mut module = IrModule::new("main");
//! let file = module.add_file("C.kt", "demo");
//! let class = module
//!     .add_class(file, IrClass::new("C", ClassKind::Class))
//!     .unwrap();
//! let foo = IrFunction::new("foo", IrType::class(builtins::int())).fake_override_of([]);
//! module.add_function(class, foo).unwrap();
//!
//! assert!(FakeOverrideChecker::new(&descriptors).check(&module).is_ok());
//! ```
//!
//! [`IrModule`]: irverify_ir::IrModule

mod checker;
mod config;
mod linker;
pub mod mangler;
mod output;
mod validator;

pub use checker::FakeOverrideChecker;
pub use config::{CheckerConfig, FailurePolicy, LinkCheckScope};
pub use linker::OverriddenSymbolLinker;
pub use mangler::{DescriptorMangler, IrMangler, IrMember, SignatureMangler};
pub use output::{CheckOutput, SkipReason, SkippedClass};
pub use validator::{ClassVerdict, FakeOverrideValidator, TieredSignatures};
