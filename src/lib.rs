//! irverify - consistency checks between the descriptor model and the IR.
//!
//! After IR lowering, every class carries the fake overrides that override
//! resolution materialized for it. This crate verifies that they agree with
//! the ones the descriptor model computed:
//!
//! - non-internal fake overrides must match exactly (as sorted signature sets)
//! - IR internal fake overrides must cover the descriptor ones
//! - every overridden-symbol edge of an IR fake override must point at a live
//!   class member
//!
//! The member crates are re-exported as [`core`], [`descriptors`], [`ir`] and
//! [`checker`]; [`prelude`] gathers the commonly used types.
//!
//! # Example
//!
//! ```
//! use irverify::prelude::*;
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
//! module.add_class(file, IrClass::new("C", ClassKind::Class)).unwrap();
//!
//! let err = irverify::verify_fake_overrides(&descriptors, &module).unwrap_err();
//! assert_eq!(err.class().as_str(), "demo.C");
//! ```

use tracing::info;

pub use irverify_checker as checker;
pub use irverify_core as core;
pub use irverify_descriptors as descriptors;
pub use irverify_ir as ir;

use irverify_checker::{CheckOutput, CheckerConfig, FakeOverrideChecker};
use irverify_core::FakeOverrideError;
use irverify_descriptors::DescriptorLookup;
use irverify_ir::IrModule;

pub mod prelude {
    pub use irverify_checker::{
        CheckOutput, CheckerConfig, FailurePolicy, FakeOverrideChecker, LinkCheckScope,
        OverriddenSymbolLinker, SkipReason,
    };
    pub use irverify_core::{
        ClassId, ClassKind, FakeOverrideError, FaultKind, FqName, MangleError, Visibility,
        builtins,
    };
    pub use irverify_descriptors::{
        ClassDescriptor, DescriptorLookup, FunctionDescriptor, KotlinType, ModuleDescriptor,
        PropertyDescriptor, TypeParameterDescriptor,
    };
    pub use irverify_ir::{
        DeclId, IrClass, IrFunction, IrModule, IrProperty, IrType, IrTypeParameter,
    };
}

/// Check `module` against `descriptors`, stopping at the first fault.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn verify_fake_overrides(
    descriptors: &dyn DescriptorLookup,
    module: &IrModule,
) -> Result<(), FakeOverrideError> {
    FakeOverrideChecker::new(descriptors).check(module)
}

/// Check `module` against `descriptors` with an explicit configuration.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn run_with_config(
    descriptors: &dyn DescriptorLookup,
    module: &IrModule,
    config: CheckerConfig,
) -> CheckOutput {
    let output = FakeOverrideChecker::new(descriptors)
        .with_config(config)
        .run(module);
    info!(
        target: "irverify",
        module = module.name(),
        validated = output.classes_validated,
        faults = output.faults.len(),
        "fake-override verification done"
    );
    output
}
