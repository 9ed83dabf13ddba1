//! Errors raised while building or editing an IR module.

use thiserror::Error;

use crate::ids::{DeclId, FileId, IrParent};

/// An IR construction error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    /// The file id does not belong to this module.
    #[error("unknown file {0:?}")]
    UnknownFile(FileId),

    /// The declaration id is not bound in this module.
    #[error("unknown declaration {0}")]
    UnknownDeclaration(DeclId),

    /// The parent cannot hold children of this kind.
    #[error("{parent:?} cannot contain a {child}")]
    InvalidParent {
        /// The rejected parent.
        parent: IrParent,
        /// Kind of the child being attached.
        child: &'static str,
    },

    /// The declaration is not listed by its parent.
    #[error("declaration {0} is not attached to its parent")]
    NotAttached(DeclId),
}
