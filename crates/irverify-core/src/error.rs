//! Error types for fake-override validation.
//!
//! ## Error Hierarchy
//!
//! ```text
//! FakeOverrideError   - fatal consistency faults
//! ├── DanglingOverriddenSymbol      (referential)
//! ├── UnboundOverriddenSymbol       (referential)
//! ├── OverriddenSymbolOutsideClass  (referential)
//! ├── SignatureMismatch             (non-internal sets differ)
//! └── InternalSignatureMismatch     (IR internal set is not a superset)
//!
//! MangleError         - a single member could not be mangled; the member is skipped
//! ```
//!
//! Classes that are skipped on purpose (no identifier, no descriptor, enum
//! entries) never produce an error.

use thiserror::Error;

use crate::{FqName, SignatureList};

/// Broad category of a [`FakeOverrideError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// An overridden-symbol edge does not point at a live member.
    Referential,
    /// Non-internal fake-override sets differ.
    SignatureMismatch,
    /// IR internal fake overrides do not cover the descriptor ones.
    InternalSuperset,
}

/// A consistency fault between the descriptor and IR models.
///
/// Every variant is fatal: the validated compilation must not continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakeOverrideError {
    /// An overridden symbol is bound but no longer listed in its parent class.
    #[error(
        "[IR VALIDATION] CHECK overridden symbols in {class}: {member} refers to {target} which is not a member of {parent}"
    )]
    DanglingOverriddenSymbol {
        /// Class owning the fake override.
        class: FqName,
        /// Rendered fake-override function.
        member: String,
        /// Rendered referenced declaration.
        target: String,
        /// Rendered class the target claims as parent.
        parent: String,
    },

    /// An overridden symbol does not resolve to any declaration of the module.
    #[error(
        "[IR VALIDATION] CHECK overridden symbols in {class}: {member} refers to unbound symbol {symbol}"
    )]
    UnboundOverriddenSymbol {
        /// Class owning the fake override.
        class: FqName,
        /// Rendered fake-override function.
        member: String,
        /// Rendered symbol id.
        symbol: String,
    },

    /// An overridden symbol resolves to a declaration whose parent is not a class.
    #[error(
        "[IR VALIDATION] CHECK overridden symbols in {class}: {member} refers to {target} which is not declared in a class"
    )]
    OverriddenSymbolOutsideClass {
        /// Class owning the fake override.
        class: FqName,
        /// Rendered fake-override function.
        member: String,
        /// Rendered referenced declaration.
        target: String,
    },

    /// Non-internal fake-override signature sets differ.
    #[error(
        "[IR VALIDATION] Fake override mismatch for {class}\n\tDescriptor based: {descriptor}\n\tIR based        : {ir}"
    )]
    SignatureMismatch {
        /// Class being validated.
        class: FqName,
        /// Sorted descriptor signatures.
        descriptor: SignatureList,
        /// Sorted IR signatures.
        ir: SignatureList,
    },

    /// IR internal fake overrides miss some descriptor internal fake overrides.
    #[error(
        "[IR VALIDATION] Internal fake override mismatch for {class}\n\tDescriptor based: {descriptor}\n\tIR based        : {ir}"
    )]
    InternalSignatureMismatch {
        /// Class being validated.
        class: FqName,
        /// Sorted descriptor internal signatures.
        descriptor: SignatureList,
        /// Sorted IR internal signatures.
        ir: SignatureList,
    },
}

impl FakeOverrideError {
    /// Fully qualified name of the offending class.
    pub fn class(&self) -> &FqName {
        match self {
            FakeOverrideError::DanglingOverriddenSymbol { class, .. }
            | FakeOverrideError::UnboundOverriddenSymbol { class, .. }
            | FakeOverrideError::OverriddenSymbolOutsideClass { class, .. }
            | FakeOverrideError::SignatureMismatch { class, .. }
            | FakeOverrideError::InternalSignatureMismatch { class, .. } => class,
        }
    }

    /// Category of this fault.
    pub fn kind(&self) -> FaultKind {
        match self {
            FakeOverrideError::DanglingOverriddenSymbol { .. }
            | FakeOverrideError::UnboundOverriddenSymbol { .. }
            | FakeOverrideError::OverriddenSymbolOutsideClass { .. } => FaultKind::Referential,
            FakeOverrideError::SignatureMismatch { .. } => FaultKind::SignatureMismatch,
            FakeOverrideError::InternalSignatureMismatch { .. } => FaultKind::InternalSuperset,
        }
    }

    /// Check if this is a referential fault.
    pub fn is_referential(&self) -> bool {
        self.kind() == FaultKind::Referential
    }
}

/// A member signature could not be computed.
///
/// Raised only for malformed input. Callers skip the member rather than
/// abort the traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MangleError {
    /// The member has no owning class.
    #[error("cannot mangle '{member}': no owning class")]
    NoOwner {
        /// Member name.
        member: String,
    },

    /// A type-parameter reference does not resolve.
    #[error("cannot mangle '{member}': type parameter #{index} does not resolve")]
    UnresolvedTypeParameter {
        /// Member name.
        member: String,
        /// Positional index that failed to resolve.
        index: u32,
    },
}

impl MangleError {
    /// Name of the member that failed to mangle.
    pub fn member(&self) -> &str {
        match self {
            MangleError::NoOwner { member }
            | MangleError::UnresolvedTypeParameter { member, .. } => member,
        }
    }
}
