//! Mangler for the IR model.

use irverify_core::{MangleError, OverridableMember, SignatureString, Visibility};
use irverify_ir::{IrClassifier, IrModule, IrOverridableMember, IrType, TypeParameterScope};

use super::{
    SignatureMangler, UNBOUNDED_ERASURE, erase_class, function_signature, property_signature,
    with_nullability,
};

/// Bound chains longer than this are treated as unresolvable
/// (`T : U, U : T` would otherwise never terminate).
const MAX_BOUND_DEPTH: usize = 32;

/// An IR member together with the module its ids resolve in.
#[derive(Debug, Clone, Copy)]
pub struct IrMember<'a> {
    pub module: &'a IrModule,
    pub member: IrOverridableMember<'a>,
}

impl<'a> IrMember<'a> {
    pub fn new(module: &'a IrModule, member: IrOverridableMember<'a>) -> Self {
        Self { module, member }
    }
}

impl OverridableMember for IrMember<'_> {
    fn name(&self) -> &str {
        self.member.name()
    }

    fn visibility(&self) -> Visibility {
        self.member.visibility()
    }

    fn is_fake_override(&self) -> bool {
        self.member.is_fake_override()
    }
}

/// Computes signatures of IR members.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrMangler;

impl IrMangler {
    pub fn new() -> Self {
        Self
    }

    /// Member name with the synthetic `$<module>` suffix of internal members
    /// removed.
    pub fn erased_name<'n>(&self, name: &'n str, visibility: Visibility) -> &'n str {
        if visibility.is_internal() {
            name.split('$').next().unwrap_or(name)
        } else {
            name
        }
    }

    fn erase(
        &self,
        ty: &IrType,
        scope: TypeParameterScope<'_>,
        member: &str,
        depth: usize,
    ) -> Result<String, MangleError> {
        match &ty.classifier {
            IrClassifier::Class(id) => Ok(erase_class(id, ty.nullable)),
            IrClassifier::TypeParameter(index) => {
                let unresolved = || MangleError::UnresolvedTypeParameter {
                    member: member.to_string(),
                    index: *index,
                };
                if depth >= MAX_BOUND_DEPTH {
                    return Err(unresolved());
                }
                let (param, bound_scope) = scope
                    .resolve_with_bound_scope(*index)
                    .ok_or_else(unresolved)?;
                let bound = match param.erased_bound() {
                    Some(bound) => self.erase(bound, bound_scope, member, depth + 1)?,
                    None => UNBOUNDED_ERASURE.to_string(),
                };
                Ok(with_nullability(bound, ty.nullable))
            }
        }
    }
}

impl<'a> SignatureMangler<IrMember<'a>> for IrMangler {
    fn signature_string(&self, member: &IrMember<'a>) -> Result<SignatureString, MangleError> {
        let module = member.module;
        let id = member.member.id();
        let name = member.name();
        if module.parent_class(id).is_none() {
            return Err(MangleError::NoOwner {
                member: name.to_string(),
            });
        }

        let scope = module.type_parameter_scope(id);
        let erased_name = self.erased_name(name, member.visibility());
        let receiver = member
            .member
            .extension_receiver()
            .map(|ty| self.erase(ty, scope, name, 0))
            .transpose()?;

        let signature = match member.member {
            IrOverridableMember::Function(_, f) => {
                let parameters = f
                    .value_parameters
                    .iter()
                    .map(|p| self.erase(&p.ty, scope, name, 0))
                    .collect::<Result<Vec<_>, _>>()?;
                let return_type = self.erase(&f.return_type, scope, name, 0)?;
                function_signature(receiver.as_deref(), erased_name, &parameters, &return_type)
            }
            IrOverridableMember::Property(_, p) => {
                let ty = self.erase(&p.ty, scope, name, 0)?;
                property_signature(receiver.as_deref(), erased_name, &ty)
            }
        };
        Ok(signature)
    }
}
