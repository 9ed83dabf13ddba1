//! Lowered types.
//!
//! Unlike descriptor types, IR types refer to type parameters by position.
//! Position `i` first indexes the declaring function's own type parameters,
//! then continues into the owning class's (see
//! [`TypeParameterScope`](crate::TypeParameterScope)).

use irverify_core::ClassId;

/// A type parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrTypeParameter {
    pub name: String,
    /// Declared bounds; the first one is used for erasure.
    pub super_types: Vec<IrType>,
}

impl IrTypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_types: Vec::new(),
        }
    }

    pub fn with_bound(mut self, bound: IrType) -> Self {
        self.super_types.push(bound);
        self
    }

    /// The bound used for erasure.
    pub fn erased_bound(&self) -> Option<&IrType> {
        self.super_types.first()
    }
}

/// What an [`IrType`] refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrClassifier {
    Class(ClassId),
    /// Positional type-parameter reference.
    TypeParameter(u32),
}

/// A type argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrTypeArgument {
    /// `*`
    Star,
    Type(IrType),
}

/// A lowered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrType {
    pub classifier: IrClassifier,
    pub arguments: Vec<IrTypeArgument>,
    pub nullable: bool,
}

impl IrType {
    /// A non-null class type without arguments.
    pub fn class(id: ClassId) -> Self {
        Self {
            classifier: IrClassifier::Class(id),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// A reference to the type parameter at `index`.
    pub fn type_parameter(index: u32) -> Self {
        Self {
            classifier: IrClassifier::TypeParameter(index),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn with_argument(mut self, argument: IrType) -> Self {
        self.arguments.push(IrTypeArgument::Type(argument));
        self
    }

    pub fn with_star_argument(mut self) -> Self {
        self.arguments.push(IrTypeArgument::Star);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
