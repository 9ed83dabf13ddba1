//! Fake-override validation of a single class.
//!
//! ## Algorithm
//!
//! 1. Skip classes without an id, without a descriptor, and enum entries
//! 2. Descriptor side: fake-override callables of the unsubstituted member
//!    scope, minus private and invisible members
//! 3. IR side: fake-override functions and properties the class declares
//! 4. Check overridden-symbol edges of the IR functions
//! 5. Split both sides into internal and everything else, mangle, sort
//! 6. Non-internal lists must be equal; IR internal must cover descriptor
//!    internal
//!
//! IR lowering may add internal fake overrides the descriptor model does not
//! see, which is why the internal tier is only a superset check.

use tracing::{debug, trace, warn};

use irverify_core::{
    FakeOverrideError, MangleError, OverridableMember, SignatureList, SignatureString,
};
use irverify_descriptors::{CallableMemberDescriptor, DescriptorKindFilter, DescriptorLookup};
use irverify_ir::{IrClass, IrModule};

use crate::linker::{OverriddenSymbolLinker, class_fq_name};
use crate::mangler::{IrMember, SignatureMangler};
use crate::output::{CheckOutput, SkipReason, SkippedClass};

/// What happened to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassVerdict {
    /// Compared against its descriptor; faults (if any) are in the output.
    Validated,
    Skipped(SkipReason),
}

/// Sorted signatures of one side, split by visibility tier.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TieredSignatures {
    pub internal: SignatureList,
    pub rest: SignatureList,
}

impl TieredSignatures {
    /// Mangle `members` and split them into tiers.
    ///
    /// Members that cannot be mangled are left out and pushed to `skipped`.
    pub fn collect<M, G>(
        mangler: &G,
        members: impl IntoIterator<Item = M>,
        skipped: &mut Vec<MangleError>,
    ) -> Self
    where
        M: OverridableMember,
        G: SignatureMangler<M>,
    {
        let mut internal: Vec<SignatureString> = Vec::new();
        let mut rest: Vec<SignatureString> = Vec::new();
        for member in members {
            match mangler.signature_string(&member) {
                Ok(signature) if member.visibility().is_internal() => internal.push(signature),
                Ok(signature) => rest.push(signature),
                Err(err) => {
                    warn!(
                        target: "irverify",
                        member = err.member(),
                        error = %err,
                        "skipping member without signature"
                    );
                    skipped.push(err);
                }
            }
        }
        Self {
            internal: SignatureList::sorted(internal),
            rest: SignatureList::sorted(rest),
        }
    }

    pub fn len(&self) -> usize {
        self.internal.len() + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compares the fake overrides of IR classes with their descriptors.
pub struct FakeOverrideValidator<'c, I, D> {
    descriptors: &'c dyn DescriptorLookup,
    ir_mangler: &'c I,
    descriptor_mangler: &'c D,
    fail_fast: bool,
}

impl<'c, I, D> FakeOverrideValidator<'c, I, D>
where
    I: for<'a> SignatureMangler<IrMember<'a>>,
    D: for<'a> SignatureMangler<CallableMemberDescriptor<'a>>,
{
    pub fn new(
        descriptors: &'c dyn DescriptorLookup,
        ir_mangler: &'c I,
        descriptor_mangler: &'c D,
        fail_fast: bool,
    ) -> Self {
        Self {
            descriptors,
            ir_mangler,
            descriptor_mangler,
            fail_fast,
        }
    }

    /// Validate one class, recording the outcome in `output`.
    ///
    /// In fail-fast mode at most one fault is recorded.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn validate(
        &self,
        module: &IrModule,
        class: &IrClass,
        output: &mut CheckOutput,
    ) -> ClassVerdict {
        let Some(class_id) = &class.class_id else {
            return skip(class, SkipReason::NoClassId, output);
        };
        let Some(descriptor) = self.descriptors.find_class(class_id) else {
            return skip(class, SkipReason::NoDescriptor, output);
        };
        if descriptor.is_enum_entry() {
            return skip(class, SkipReason::EnumEntry, output);
        }
        output.classes_validated += 1;
        let name = class_id.as_fq_name();
        let faults_before = output.faults.len();

        let descriptor_members = descriptor
            .unsubstituted_member_scope()
            .callables(DescriptorKindFilter::CALLABLES)
            .filter(|member| member.is_fake_override())
            .filter(|member| member.visibility().is_comparable());

        let ir_members: Vec<IrMember<'_>> = class
            .declarations
            .iter()
            .filter_map(|&id| module.declaration(id)?.as_overridable())
            .filter(|member| member.is_fake_override())
            .map(|member| IrMember::new(module, member))
            .collect();

        let linker = OverriddenSymbolLinker::new(module);
        for member in &ir_members {
            let Some(function) = member.member.as_function() else {
                continue;
            };
            for fault in linker.function_faults(name.clone(), member.member.id(), function) {
                output.faults.push(fault);
                if self.fail_fast {
                    return ClassVerdict::Validated;
                }
            }
        }

        let from_descriptors = TieredSignatures::collect(
            self.descriptor_mangler,
            descriptor_members,
            &mut output.members_skipped,
        );
        let from_ir =
            TieredSignatures::collect(self.ir_mangler, ir_members, &mut output.members_skipped);
        output.fake_overrides_compared += from_descriptors.len() + from_ir.len();

        if from_descriptors.rest != from_ir.rest {
            output.faults.push(FakeOverrideError::SignatureMismatch {
                class: name.clone(),
                descriptor: from_descriptors.rest,
                ir: from_ir.rest,
            });
            if self.fail_fast {
                return ClassVerdict::Validated;
            }
        }

        if !from_ir.internal.contains_all(&from_descriptors.internal) {
            output.faults.push(FakeOverrideError::InternalSignatureMismatch {
                class: name.clone(),
                descriptor: from_descriptors.internal,
                ir: from_ir.internal,
            });
        }

        if output.faults.len() == faults_before {
            trace!(target: "irverify", class = %name, "fake overrides consistent");
        }
        ClassVerdict::Validated
    }
}

fn skip(class: &IrClass, reason: SkipReason, output: &mut CheckOutput) -> ClassVerdict {
    let name = class_fq_name(class);
    debug!(target: "irverify", class = %name, %reason, "skipping fake-override validation");
    output.classes_skipped.push(SkippedClass { name, reason });
    ClassVerdict::Skipped(reason)
}
