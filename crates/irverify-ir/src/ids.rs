//! Arena handles.
//!
//! Declarations live in a single arena owned by [`IrModule`](crate::IrModule)
//! and refer to each other through these ids. An id stays bound for the
//! lifetime of the module even when its declaration is detached from the
//! list that contained it.

use std::fmt;

/// Handle to a declaration in the module arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub(crate) u32);

impl DeclId {
    /// Raw index into the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create an id from a raw index.
    ///
    /// The id is not checked against any module; lookups with an unbound id
    /// return `None`.
    pub fn from_raw(raw: u32) -> Self {
        DeclId(raw)
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a file of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) u32);

impl FileId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a declaration is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IrParent {
    /// Top level of a file.
    File(FileId),
    /// Member of a class, or local to a function/initializer body.
    Declaration(DeclId),
}

impl From<FileId> for IrParent {
    fn from(id: FileId) -> Self {
        IrParent::File(id)
    }
}

impl From<DeclId> for IrParent {
    fn from(id: DeclId) -> Self {
        IrParent::Declaration(id)
    }
}
