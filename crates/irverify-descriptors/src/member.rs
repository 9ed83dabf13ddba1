//! Member descriptors: functions, properties and nested classifiers.

use irverify_core::{ClassId, OverridableMember, Visibility};

use crate::types::{KotlinType, TypeParameterDescriptor};

/// How a callable member came to exist in its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallableKind {
    /// Declared in the class body.
    #[default]
    Declaration,
    /// Inherited from one or more supertypes without being redeclared.
    FakeOverride,
    /// Generated for interface delegation (`by`).
    Delegation,
    /// Generated by the compiler (data class `copy`, enum `values`, ...).
    Synthesized,
}

/// A value parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueParameterDescriptor {
    pub name: String,
    pub ty: KotlinType,
}

impl ValueParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: KotlinType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A member function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Simple name.
    pub name: String,
    /// Visibility tier.
    pub visibility: Visibility,
    /// Origin of the member.
    pub kind: CallableKind,
    /// Class the member belongs to. `None` only for malformed input.
    pub containing_class: Option<ClassId>,
    /// Extension receiver type.
    pub extension_receiver: Option<KotlinType>,
    /// Declared type parameters.
    pub type_parameters: Vec<TypeParameterDescriptor>,
    /// Value parameters in declaration order.
    pub value_parameters: Vec<ValueParameterDescriptor>,
    /// Return type.
    pub return_type: KotlinType,
}

impl FunctionDescriptor {
    /// Create a declared, public, parameterless function.
    pub fn new(name: impl Into<String>, owner: ClassId, return_type: KotlinType) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            kind: CallableKind::Declaration,
            containing_class: Some(owner),
            extension_receiver: None,
            type_parameters: Vec::new(),
            value_parameters: Vec::new(),
            return_type,
        }
    }

    // === Builder Methods ===

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_kind(mut self, kind: CallableKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as a fake override.
    pub fn fake_override(self) -> Self {
        self.with_kind(CallableKind::FakeOverride)
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: KotlinType) -> Self {
        self.value_parameters.push(ValueParameterDescriptor::new(name, ty));
        self
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameterDescriptor) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_extension_receiver(mut self, receiver: KotlinType) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    /// Detach from the owning class.
    pub fn without_owner(mut self) -> Self {
        self.containing_class = None;
        self
    }
}

/// A member property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Simple name.
    pub name: String,
    /// Visibility tier.
    pub visibility: Visibility,
    /// Origin of the member.
    pub kind: CallableKind,
    /// Class the member belongs to. `None` only for malformed input.
    pub containing_class: Option<ClassId>,
    /// `var` rather than `val`.
    pub is_var: bool,
    /// Extension receiver type.
    pub extension_receiver: Option<KotlinType>,
    /// Property type.
    pub ty: KotlinType,
}

impl PropertyDescriptor {
    /// Create a declared, public, read-only property.
    pub fn new(name: impl Into<String>, owner: ClassId, ty: KotlinType) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            kind: CallableKind::Declaration,
            containing_class: Some(owner),
            is_var: false,
            extension_receiver: None,
            ty,
        }
    }

    // === Builder Methods ===

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_kind(mut self, kind: CallableKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as a fake override.
    pub fn fake_override(self) -> Self {
        self.with_kind(CallableKind::FakeOverride)
    }

    pub fn mutable(mut self) -> Self {
        self.is_var = true;
        self
    }

    pub fn with_extension_receiver(mut self, receiver: KotlinType) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    /// Detach from the owning class.
    pub fn without_owner(mut self) -> Self {
        self.containing_class = None;
        self
    }
}

/// Anything that can live in a class's member scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationDescriptor {
    Function(FunctionDescriptor),
    Property(PropertyDescriptor),
    /// A nested classifier, referenced by id.
    Classifier(ClassId),
}

impl DeclarationDescriptor {
    /// View as a callable member, if it is one.
    pub fn as_callable(&self) -> Option<CallableMemberDescriptor<'_>> {
        match self {
            DeclarationDescriptor::Function(f) => Some(CallableMemberDescriptor::Function(f)),
            DeclarationDescriptor::Property(p) => Some(CallableMemberDescriptor::Property(p)),
            DeclarationDescriptor::Classifier(_) => None,
        }
    }
}

impl From<FunctionDescriptor> for DeclarationDescriptor {
    fn from(f: FunctionDescriptor) -> Self {
        DeclarationDescriptor::Function(f)
    }
}

impl From<PropertyDescriptor> for DeclarationDescriptor {
    fn from(p: PropertyDescriptor) -> Self {
        DeclarationDescriptor::Property(p)
    }
}

/// Borrowed view over a callable member of either variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableMemberDescriptor<'a> {
    Function(&'a FunctionDescriptor),
    Property(&'a PropertyDescriptor),
}

impl<'a> CallableMemberDescriptor<'a> {
    /// Origin of the member.
    pub fn kind(&self) -> CallableKind {
        match self {
            CallableMemberDescriptor::Function(f) => f.kind,
            CallableMemberDescriptor::Property(p) => p.kind,
        }
    }

    /// Owning class.
    pub fn containing_class(&self) -> Option<&'a ClassId> {
        match self {
            CallableMemberDescriptor::Function(f) => f.containing_class.as_ref(),
            CallableMemberDescriptor::Property(p) => p.containing_class.as_ref(),
        }
    }

    /// Extension receiver type.
    pub fn extension_receiver(&self) -> Option<&'a KotlinType> {
        match self {
            CallableMemberDescriptor::Function(f) => f.extension_receiver.as_ref(),
            CallableMemberDescriptor::Property(p) => p.extension_receiver.as_ref(),
        }
    }
}

impl OverridableMember for CallableMemberDescriptor<'_> {
    fn name(&self) -> &str {
        match self {
            CallableMemberDescriptor::Function(f) => &f.name,
            CallableMemberDescriptor::Property(p) => &p.name,
        }
    }

    fn visibility(&self) -> Visibility {
        match self {
            CallableMemberDescriptor::Function(f) => f.visibility,
            CallableMemberDescriptor::Property(p) => p.visibility,
        }
    }

    fn is_fake_override(&self) -> bool {
        self.kind() == CallableKind::FakeOverride
    }
}
