//! Signature manglers.
//!
//! A mangler turns one overridable member into its [`SignatureString`]. The
//! descriptor and IR models each get their own mangler; both produce the same
//! canonical form so that their outputs can be compared directly:
//!
//! ```text
//! function:  [<receiver>.]name(<p1>,<p2>,...):<return>
//! property:  [<receiver>.]name:<type>
//! ```
//!
//! Types are erased: class types render as their fully qualified name with
//! type arguments dropped, nullable types get a trailing `?`, and type
//! parameters erase to their first upper bound (`kotlin.Any?` when unbounded).

mod descriptor;
mod ir;

pub use descriptor::DescriptorMangler;
pub use ir::{IrMangler, IrMember};

use irverify_core::{ClassId, MangleError, OverridableMember, SignatureString};

/// Computes canonical signatures for members of type `M`.
pub trait SignatureMangler<M: OverridableMember> {
    /// Signature of `member`, or an error for malformed input.
    fn signature_string(&self, member: &M) -> Result<SignatureString, MangleError>;
}

/// Erasure of an unbounded type parameter.
pub(crate) const UNBOUNDED_ERASURE: &str = "kotlin.Any?";

/// Erase a class type.
pub(crate) fn erase_class(id: &ClassId, nullable: bool) -> String {
    let mut erased = id.to_string();
    if nullable {
        erased.push('?');
    }
    erased
}

/// Apply the nullability of a type-parameter use to its erased bound.
pub(crate) fn with_nullability(mut erased: String, nullable: bool) -> String {
    if nullable && !erased.ends_with('?') {
        erased.push('?');
    }
    erased
}

pub(crate) fn function_signature(
    receiver: Option<&str>,
    name: &str,
    parameters: &[String],
    return_type: &str,
) -> SignatureString {
    let mut out = String::with_capacity(name.len() + return_type.len() + 16);
    if let Some(receiver) = receiver {
        out.push_str(receiver);
        out.push('.');
    }
    out.push_str(name);
    out.push('(');
    out.push_str(&parameters.join(","));
    out.push_str("):");
    out.push_str(return_type);
    SignatureString::new(out)
}

pub(crate) fn property_signature(receiver: Option<&str>, name: &str, ty: &str) -> SignatureString {
    let mut out = String::new();
    if let Some(receiver) = receiver {
        out.push_str(receiver);
        out.push('.');
    }
    out.push_str(name);
    out.push(':');
    out.push_str(ty);
    SignatureString::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use irverify_core::builtins;

    #[test]
    fn function_format() {
        let sig = function_signature(
            Some("kotlin.String"),
            "pad",
            &["kotlin.Int".to_string(), "kotlin.Any?".to_string()],
            "kotlin.String",
        );
        assert_eq!(
            sig.as_str(),
            "kotlin.String.pad(kotlin.Int,kotlin.Any?):kotlin.String"
        );
        let sig = function_signature(None, "f", &[], "kotlin.Unit");
        assert_eq!(sig.as_str(), "f():kotlin.Unit");
    }

    #[test]
    fn property_format() {
        let sig = property_signature(None, "size", "kotlin.Int");
        assert_eq!(sig.as_str(), "size:kotlin.Int");
        let sig = property_signature(Some("kotlin.Int"), "half", "kotlin.Double");
        assert_eq!(sig.as_str(), "kotlin.Int.half:kotlin.Double");
    }

    #[test]
    fn nullability_is_applied_once() {
        let number = || "kotlin.Number".to_string();
        assert_eq!(erase_class(&builtins::int(), true), "kotlin.Int?");
        assert_eq!(
            with_nullability(UNBOUNDED_ERASURE.to_string(), true),
            "kotlin.Any?"
        );
        assert_eq!(with_nullability(number(), true), "kotlin.Number?");
        assert_eq!(with_nullability(number(), false), "kotlin.Number");
    }
}
