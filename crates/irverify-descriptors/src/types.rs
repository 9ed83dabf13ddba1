//! Resolved types of the descriptor model.

use irverify_core::ClassId;

/// A type parameter declared by a function or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameterDescriptor {
    /// Parameter name (`T`).
    pub name: String,
    /// Declared upper bound. `None` means `kotlin.Any?`.
    pub upper_bound: Option<Box<KotlinType>>,
}

impl TypeParameterDescriptor {
    /// Create an unbounded type parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upper_bound: None,
        }
    }

    /// Create a bounded type parameter.
    pub fn bounded(name: impl Into<String>, bound: KotlinType) -> Self {
        Self {
            name: name.into(),
            upper_bound: Some(Box::new(bound)),
        }
    }
}

/// What a [`KotlinType`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeConstructor {
    /// A class type.
    Class(ClassId),
    /// A reference to a type parameter; the descriptor carries its own bound.
    TypeParameter(TypeParameterDescriptor),
}

/// A fully resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinType {
    pub constructor: TypeConstructor,
    pub arguments: Vec<KotlinType>,
    pub nullable: bool,
}

impl KotlinType {
    /// A non-null class type without arguments.
    pub fn class(id: ClassId) -> Self {
        Self {
            constructor: TypeConstructor::Class(id),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// A type-parameter type.
    pub fn type_parameter(parameter: TypeParameterDescriptor) -> Self {
        Self {
            constructor: TypeConstructor::TypeParameter(parameter),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Add type arguments.
    pub fn with_arguments(mut self, arguments: Vec<KotlinType>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The class id, if this is a class type.
    pub fn class_id(&self) -> Option<&ClassId> {
        match &self.constructor {
            TypeConstructor::Class(id) => Some(id),
            TypeConstructor::TypeParameter(_) => None,
        }
    }
}
