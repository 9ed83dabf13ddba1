//! IR declaration nodes.
//!
//! Child lists (class members, body statements) hold [`DeclId`]s into the
//! module arena rather than owning their children. Overridden-symbol
//! references are also plain ids: they never keep their target alive and are
//! validated, not trusted.

use irverify_core::{ClassId, ClassKind, OverridableMember, Visibility};

use crate::ids::{DeclId, IrParent};
use crate::types::{IrType, IrTypeParameter};

/// Why a declaration exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IrDeclarationOrigin {
    /// Written in source.
    #[default]
    Defined,
    /// Materialized by override resolution for an inherited member.
    FakeOverride,
    /// Generated for interface delegation.
    Delegated,
    /// Any other compiler-generated declaration.
    Synthetic,
}

impl IrDeclarationOrigin {
    /// Uppercase marker used in dumps. `None` for source declarations.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            IrDeclarationOrigin::Defined => None,
            IrDeclarationOrigin::FakeOverride => Some("FAKE_OVERRIDE"),
            IrDeclarationOrigin::Delegated => Some("DELEGATED_MEMBER"),
            IrDeclarationOrigin::Synthetic => Some("SYNTHETIC"),
        }
    }
}

/// Local declarations of a function, property initializer or init block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrBody {
    pub statements: Vec<DeclId>,
}

/// A class, interface, object, enum class or enum entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrClass {
    pub name: String,
    /// Computed when the class is attached: `None` for local classes.
    pub class_id: Option<ClassId>,
    pub kind: ClassKind,
    pub visibility: Visibility,
    pub type_parameters: Vec<IrTypeParameter>,
    pub super_types: Vec<IrType>,
    /// Members in the order lowering emitted them.
    pub declarations: Vec<DeclId>,
}

impl IrClass {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            class_id: None,
            kind,
            visibility: Visibility::Public,
            type_parameters: Vec::new(),
            super_types: Vec::new(),
            declarations: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_type_parameter(mut self, parameter: IrTypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_super_type(mut self, super_type: IrType) -> Self {
        self.super_types.push(super_type);
        self
    }

    /// Check if `id` is listed as a member.
    pub fn declares(&self, id: DeclId) -> bool {
        self.declarations.contains(&id)
    }
}

/// A value parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrValueParameter {
    pub name: String,
    pub ty: IrType,
}

/// A simple (non-constructor) function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrFunction {
    pub name: String,
    pub visibility: Visibility,
    pub origin: IrDeclarationOrigin,
    pub extension_receiver: Option<IrType>,
    pub type_parameters: Vec<IrTypeParameter>,
    pub value_parameters: Vec<IrValueParameter>,
    pub return_type: IrType,
    /// Functions this one overrides, in supertype order.
    pub overridden_symbols: Vec<DeclId>,
    pub body: Option<IrBody>,
}

impl IrFunction {
    /// Create a public source function without parameters or body.
    pub fn new(name: impl Into<String>, return_type: IrType) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            origin: IrDeclarationOrigin::Defined,
            extension_receiver: None,
            type_parameters: Vec::new(),
            value_parameters: Vec::new(),
            return_type,
            overridden_symbols: Vec::new(),
            body: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_origin(mut self, origin: IrDeclarationOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Mark as a fake override of `overridden`.
    pub fn fake_override_of(mut self, overridden: impl IntoIterator<Item = DeclId>) -> Self {
        self.origin = IrDeclarationOrigin::FakeOverride;
        self.overridden_symbols.extend(overridden);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: IrType) -> Self {
        self.value_parameters.push(IrValueParameter {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_type_parameter(mut self, parameter: IrTypeParameter) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn with_extension_receiver(mut self, receiver: IrType) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    /// Give the function an (empty) body.
    pub fn with_body(mut self) -> Self {
        self.body.get_or_insert_with(IrBody::default);
        self
    }
}

/// A constructor. Never overridable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrConstructor {
    pub visibility: Visibility,
    pub value_parameters: Vec<IrValueParameter>,
    pub body: Option<IrBody>,
}

/// A property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrProperty {
    pub name: String,
    pub visibility: Visibility,
    pub origin: IrDeclarationOrigin,
    pub is_var: bool,
    pub extension_receiver: Option<IrType>,
    pub ty: IrType,
    /// Initializer expression body; may contain anonymous objects.
    pub initializer: Option<IrBody>,
}

impl IrProperty {
    pub fn new(name: impl Into<String>, ty: IrType) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            origin: IrDeclarationOrigin::Defined,
            is_var: false,
            extension_receiver: None,
            ty,
            initializer: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_origin(mut self, origin: IrDeclarationOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn fake_override(self) -> Self {
        self.with_origin(IrDeclarationOrigin::FakeOverride)
    }

    pub fn mutable(mut self) -> Self {
        self.is_var = true;
        self
    }

    pub fn with_extension_receiver(mut self, receiver: IrType) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }
}

/// An `init { }` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrAnonymousInitializer {
    pub body: IrBody,
}

/// The payload of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrDeclarationKind {
    Class(IrClass),
    Function(IrFunction),
    Constructor(IrConstructor),
    Property(IrProperty),
    AnonymousInitializer(IrAnonymousInitializer),
}

impl From<IrClass> for IrDeclarationKind {
    fn from(c: IrClass) -> Self {
        IrDeclarationKind::Class(c)
    }
}

impl From<IrFunction> for IrDeclarationKind {
    fn from(f: IrFunction) -> Self {
        IrDeclarationKind::Function(f)
    }
}

impl From<IrConstructor> for IrDeclarationKind {
    fn from(c: IrConstructor) -> Self {
        IrDeclarationKind::Constructor(c)
    }
}

impl From<IrProperty> for IrDeclarationKind {
    fn from(p: IrProperty) -> Self {
        IrDeclarationKind::Property(p)
    }
}

impl From<IrAnonymousInitializer> for IrDeclarationKind {
    fn from(i: IrAnonymousInitializer) -> Self {
        IrDeclarationKind::AnonymousInitializer(i)
    }
}

/// A declaration stored in the module arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrDeclaration {
    pub id: DeclId,
    pub parent: IrParent,
    pub kind: IrDeclarationKind,
}

impl IrDeclaration {
    pub fn as_class(&self) -> Option<&IrClass> {
        match &self.kind {
            IrDeclarationKind::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&IrFunction> {
        match &self.kind {
            IrDeclarationKind::Function(f) => Some(f),
            _ => None,
        }
    }

    /// View as an overridable member (function or property).
    pub fn as_overridable(&self) -> Option<IrOverridableMember<'_>> {
        match &self.kind {
            IrDeclarationKind::Function(f) => Some(IrOverridableMember::Function(self.id, f)),
            IrDeclarationKind::Property(p) => Some(IrOverridableMember::Property(self.id, p)),
            _ => None,
        }
    }

    /// Simple name; constructors and init blocks use their dump names.
    pub fn name(&self) -> &str {
        match &self.kind {
            IrDeclarationKind::Class(c) => &c.name,
            IrDeclarationKind::Function(f) => &f.name,
            IrDeclarationKind::Constructor(_) => "<init>",
            IrDeclarationKind::Property(p) => &p.name,
            IrDeclarationKind::AnonymousInitializer(_) => "<anonymous-init>",
        }
    }
}

/// Borrowed view over an overridable IR member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrOverridableMember<'a> {
    Function(DeclId, &'a IrFunction),
    Property(DeclId, &'a IrProperty),
}

impl<'a> IrOverridableMember<'a> {
    /// Arena id of the member.
    pub fn id(&self) -> DeclId {
        match self {
            IrOverridableMember::Function(id, _) | IrOverridableMember::Property(id, _) => *id,
        }
    }

    pub fn origin(&self) -> IrDeclarationOrigin {
        match self {
            IrOverridableMember::Function(_, f) => f.origin,
            IrOverridableMember::Property(_, p) => p.origin,
        }
    }

    pub fn extension_receiver(&self) -> Option<&'a IrType> {
        match self {
            IrOverridableMember::Function(_, f) => f.extension_receiver.as_ref(),
            IrOverridableMember::Property(_, p) => p.extension_receiver.as_ref(),
        }
    }

    /// The function, if this is one.
    pub fn as_function(&self) -> Option<&'a IrFunction> {
        match self {
            IrOverridableMember::Function(_, f) => Some(f),
            IrOverridableMember::Property(..) => None,
        }
    }
}

impl OverridableMember for IrOverridableMember<'_> {
    fn name(&self) -> &str {
        match self {
            IrOverridableMember::Function(_, f) => &f.name,
            IrOverridableMember::Property(_, p) => &p.name,
        }
    }

    fn visibility(&self) -> Visibility {
        match self {
            IrOverridableMember::Function(_, f) => f.visibility,
            IrOverridableMember::Property(_, p) => p.visibility,
        }
    }

    fn is_fake_override(&self) -> bool {
        self.origin() == IrDeclarationOrigin::FakeOverride
    }
}
