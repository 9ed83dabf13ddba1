//! Mangler for the descriptor model.

use irverify_core::{MangleError, OverridableMember, SignatureString};
use irverify_descriptors::{CallableMemberDescriptor, KotlinType, TypeConstructor};

use super::{
    SignatureMangler, UNBOUNDED_ERASURE, erase_class, function_signature, property_signature,
    with_nullability,
};

/// Computes signatures of descriptor members.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorMangler;

impl DescriptorMangler {
    pub fn new() -> Self {
        Self
    }

    /// Erase a descriptor type.
    ///
    /// Type parameters carry their own bound, so erasure never needs the
    /// declaring scope.
    pub fn erase(&self, ty: &KotlinType) -> String {
        match &ty.constructor {
            TypeConstructor::Class(id) => erase_class(id, ty.nullable),
            TypeConstructor::TypeParameter(param) => {
                let bound = match &param.upper_bound {
                    Some(bound) => self.erase(bound),
                    None => UNBOUNDED_ERASURE.to_string(),
                };
                with_nullability(bound, ty.nullable)
            }
        }
    }
}

impl<'a> SignatureMangler<CallableMemberDescriptor<'a>> for DescriptorMangler {
    fn signature_string(
        &self,
        member: &CallableMemberDescriptor<'a>,
    ) -> Result<SignatureString, MangleError> {
        if member.containing_class().is_none() {
            return Err(MangleError::NoOwner {
                member: member.name().to_string(),
            });
        }
        let receiver = member.extension_receiver().map(|ty| self.erase(ty));

        let signature = match member {
            CallableMemberDescriptor::Function(f) => {
                let parameters: Vec<String> = f
                    .value_parameters
                    .iter()
                    .map(|p| self.erase(&p.ty))
                    .collect();
                function_signature(
                    receiver.as_deref(),
                    &f.name,
                    &parameters,
                    &self.erase(&f.return_type),
                )
            }
            CallableMemberDescriptor::Property(p) => {
                property_signature(receiver.as_deref(), &p.name, &self.erase(&p.ty))
            }
        };
        Ok(signature)
    }
}
