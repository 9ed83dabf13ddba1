//! Module-wide fake-override checker.
//!
//! Walks every class reachable outside function bodies and validates it with
//! [`FakeOverrideValidator`]. Local classes declared inside functions or
//! constructors are never reached.

use tracing::debug;

use irverify_core::FakeOverrideError;
use irverify_descriptors::{CallableMemberDescriptor, DescriptorLookup};
use irverify_ir::visitor::{IrVisitor, walk_class};
use irverify_ir::{DeclId, IrClass, IrConstructor, IrFunction, IrModule};

use crate::config::{CheckerConfig, FailurePolicy, LinkCheckScope};
use crate::linker::OverriddenSymbolLinker;
use crate::mangler::{DescriptorMangler, IrMangler, IrMember, SignatureMangler};
use crate::output::CheckOutput;
use crate::validator::{ClassVerdict, FakeOverrideValidator};

/// Validates fake overrides of an IR module against the descriptor model.
pub struct FakeOverrideChecker<'d, I = IrMangler, D = DescriptorMangler> {
    descriptors: &'d dyn DescriptorLookup,
    ir_mangler: I,
    descriptor_mangler: D,
    config: CheckerConfig,
}

impl<'d> FakeOverrideChecker<'d> {
    /// Create a checker with the default manglers and configuration.
    pub fn new(descriptors: &'d dyn DescriptorLookup) -> Self {
        Self::with_manglers(descriptors, IrMangler::new(), DescriptorMangler::new())
    }
}

impl<'d, I, D> FakeOverrideChecker<'d, I, D>
where
    I: for<'a> SignatureMangler<IrMember<'a>>,
    D: for<'a> SignatureMangler<CallableMemberDescriptor<'a>>,
{
    /// Create a checker with custom manglers.
    pub fn with_manglers(
        descriptors: &'d dyn DescriptorLookup,
        ir_mangler: I,
        descriptor_mangler: D,
    ) -> Self {
        Self {
            descriptors,
            ir_mangler,
            descriptor_mangler,
            config: CheckerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check the module, stopping at the first fault.
    ///
    /// Ignores the configured failure policy.
    pub fn check(&self, module: &IrModule) -> Result<(), FakeOverrideError> {
        self.walk(module, FailurePolicy::FailFast).into_result()
    }

    /// Check the module with the configured failure policy.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(&self, module: &IrModule) -> CheckOutput {
        self.walk(module, self.config.failure_policy)
    }

    fn walk(&self, module: &IrModule, policy: FailurePolicy) -> CheckOutput {
        debug!(target: "irverify", module = module.name(), ?policy, "checking fake overrides");
        let fail_fast = policy == FailurePolicy::FailFast;
        let mut walker = CheckWalker {
            validator: FakeOverrideValidator::new(
                self.descriptors,
                &self.ir_mangler,
                &self.descriptor_mangler,
                fail_fast,
            ),
            link_all: self.config.link_check_scope == LinkCheckScope::AllClasses,
            fail_fast,
            output: CheckOutput::default(),
        };
        walker.visit_module(module);
        debug!(
            target: "irverify",
            validated = walker.output.classes_validated,
            skipped = walker.output.classes_skipped.len(),
            faults = walker.output.faults.len(),
            "fake-override check finished"
        );
        walker.output
    }
}

/// Validates classes in traversal order.
struct CheckWalker<'c, I, D> {
    validator: FakeOverrideValidator<'c, I, D>,
    link_all: bool,
    fail_fast: bool,
    output: CheckOutput,
}

impl<I, D> CheckWalker<'_, I, D> {
    fn halted(&self) -> bool {
        self.fail_fast && !self.output.faults.is_empty()
    }
}

impl<I, D> IrVisitor for CheckWalker<'_, I, D>
where
    I: for<'a> SignatureMangler<IrMember<'a>>,
    D: for<'a> SignatureMangler<CallableMemberDescriptor<'a>>,
{
    fn visit_class(&mut self, module: &IrModule, id: DeclId, class: &IrClass) {
        if self.halted() {
            return;
        }
        let verdict = self.validator.validate(module, class, &mut self.output);
        if self.link_all && matches!(verdict, ClassVerdict::Skipped(_)) {
            let linker = OverriddenSymbolLinker::new(module);
            for fault in linker.class_faults(class) {
                self.output.faults.push(fault);
                if self.fail_fast {
                    break;
                }
            }
        }
        if self.halted() {
            return;
        }
        walk_class(self, module, id, class);
    }

    fn visit_function(&mut self, _: &IrModule, _: DeclId, _: &IrFunction) {}

    fn visit_constructor(&mut self, _: &IrModule, _: DeclId, _: &IrConstructor) {}
}
