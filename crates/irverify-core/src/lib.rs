//! Shared vocabulary for the fake-override validator.
//!
//! Both the descriptor model and the IR model speak in terms of the types
//! defined here:
//!
//! - [`FqName`] / [`ClassId`]: stable class identity across the two models
//! - [`ClassHash`]: deterministic 64-bit hash of a [`ClassId`], used as an index key
//! - [`Visibility`] / [`ClassKind`]: declaration metadata
//! - [`OverridableMember`]: capability shared by members of both models
//! - [`SignatureString`]: the canonical member identity produced by manglers
//! - [`FakeOverrideError`] / [`MangleError`]: the error taxonomy
//! - [`builtins`]: ids of the built-in classes

pub mod builtins;
mod class_id;
mod error;
mod kinds;
mod member;
mod signature;

pub use class_id::{ClassHash, ClassId, FqName};
pub use error::{FakeOverrideError, FaultKind, MangleError};
pub use kinds::{ClassKind, Visibility};
pub use member::OverridableMember;
pub use signature::{SignatureList, SignatureString, canonicalize};
