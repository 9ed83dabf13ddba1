//! IR model.
//!
//! The lowered tree representation of a module as it leaves override
//! resolution. This crate only carries the data and a traversal API; it does
//! not lower anything itself.
//!
//! - [`IrModule`]: files plus an arena of declarations addressed by [`DeclId`]
//! - [`IrClass`], [`IrFunction`], [`IrProperty`], ...: declaration payloads
//! - [`IrOverridableMember`]: borrowed view over functions and properties
//! - [`visitor`]: `IrVisitor` trait with `walk_*` helpers
//! - [`IrModule::render`]: one-line dumps for diagnostics

mod declarations;
mod error;
mod ids;
mod module;
mod render;
mod types;
pub mod visitor;

pub use declarations::{
    IrAnonymousInitializer, IrBody, IrClass, IrConstructor, IrDeclaration, IrDeclarationKind,
    IrDeclarationOrigin, IrFunction, IrOverridableMember, IrProperty, IrValueParameter,
};
pub use error::IrError;
pub use ids::{DeclId, FileId, IrParent};
pub use module::{IrFile, IrModule, TypeParameterScope};
pub use types::{IrClassifier, IrType, IrTypeArgument, IrTypeParameter};
pub use visitor::IrVisitor;
