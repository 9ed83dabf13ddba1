//! IR modules: files plus the declaration arena.
//!
//! # Example
//!
//! ```
//! use irverify_core::{ClassId, ClassKind, builtins};
//! use irverify_ir::{IrClass, IrFunction, IrModule, IrType};
//!
//! let mut module = IrModule::new("main");
//! let file = module.add_file("Base.kt", "demo");
//! let base = module
//!     .add_class(file, IrClass::new("Base", ClassKind::Class))
//!     .unwrap();
//! let foo = module
//!     .add_function(base, IrFunction::new("foo", IrType::class(builtins::int())))
//!     .unwrap();
//!
//! let class = module.class(base).unwrap();
//! assert_eq!(class.class_id, Some(ClassId::top_level("demo", "Base")));
//! assert!(class.declares(foo));
//! assert_eq!(module.parent_class(foo).map(|(id, _)| id), Some(base));
//! ```

use irverify_core::{ClassId, FqName};

use crate::declarations::{
    IrAnonymousInitializer, IrBody, IrClass, IrConstructor, IrDeclaration, IrDeclarationKind,
    IrFunction, IrProperty,
};
use crate::error::IrError;
use crate::ids::{DeclId, FileId, IrParent};
use crate::types::IrTypeParameter;

/// A source file of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrFile {
    pub id: FileId,
    pub name: String,
    pub package: FqName,
    /// Top-level declarations in source order.
    pub declarations: Vec<DeclId>,
}

/// Type parameters visible from a declaration, addressed positionally.
///
/// Indices first cover the declaration's own parameters, then continue into
/// the owning class's.
#[derive(Debug, Clone, Copy)]
pub struct TypeParameterScope<'a> {
    own: &'a [IrTypeParameter],
    class: &'a [IrTypeParameter],
}

impl<'a> TypeParameterScope<'a> {
    fn empty() -> Self {
        Self {
            own: &[],
            class: &[],
        }
    }

    /// Resolve a positional reference.
    pub fn resolve(&self, index: u32) -> Option<&'a IrTypeParameter> {
        let index = index as usize;
        if index < self.own.len() {
            self.own.get(index)
        } else {
            self.class.get(index - self.own.len())
        }
    }

    /// Resolve a positional reference together with the scope its bounds are
    /// written in.
    ///
    /// Bounds of the declaration's own parameters live in this scope; bounds
    /// of class parameters only see the class's parameters.
    pub fn resolve_with_bound_scope(
        &self,
        index: u32,
    ) -> Option<(&'a IrTypeParameter, TypeParameterScope<'a>)> {
        let index = index as usize;
        if index < self.own.len() {
            Some((&self.own[index], *self))
        } else {
            let class_scope = TypeParameterScope {
                own: self.class,
                class: &[],
            };
            self.class
                .get(index - self.own.len())
                .map(|param| (param, class_scope))
        }
    }
}

/// A lowered module.
///
/// The module owns every declaration in a single arena. Files, classes and
/// bodies list their children by [`DeclId`].
#[derive(Debug, Clone, Default)]
pub struct IrModule {
    name: String,
    files: Vec<IrFile>,
    arena: Vec<IrDeclaration>,
}

impl IrModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            arena: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ==========================================================================
    // Files
    // ==========================================================================

    /// Add an empty file.
    pub fn add_file(&mut self, name: impl Into<String>, package: impl Into<FqName>) -> FileId {
        let id = FileId(self.files.len() as u32);
        self.files.push(IrFile {
            id,
            name: name.into(),
            package: package.into(),
            declarations: Vec::new(),
        });
        id
    }

    pub fn files(&self) -> &[IrFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&IrFile> {
        self.files.get(id.index())
    }

    // ==========================================================================
    // Declaration lookup
    // ==========================================================================

    /// Look up a declaration by id.
    pub fn declaration(&self, id: DeclId) -> Option<&IrDeclaration> {
        self.arena.get(id.index())
    }

    /// Look up a class by id.
    pub fn class(&self, id: DeclId) -> Option<&IrClass> {
        self.declaration(id).and_then(IrDeclaration::as_class)
    }

    /// Look up a function by id.
    pub fn function(&self, id: DeclId) -> Option<&IrFunction> {
        self.declaration(id).and_then(IrDeclaration::as_function)
    }

    /// The class a declaration is a member of.
    pub fn parent_class(&self, id: DeclId) -> Option<(DeclId, &IrClass)> {
        match self.declaration(id)?.parent {
            IrParent::Declaration(parent) => self.class(parent).map(|class| (parent, class)),
            IrParent::File(_) => None,
        }
    }

    /// Children of a declaration: class members or local declarations of a
    /// body.
    pub fn children(&self, id: DeclId) -> &[DeclId] {
        let Some(decl) = self.declaration(id) else {
            return &[];
        };
        match &decl.kind {
            IrDeclarationKind::Class(c) => &c.declarations,
            IrDeclarationKind::Function(f) => body_statements(f.body.as_ref()),
            IrDeclarationKind::Constructor(c) => body_statements(c.body.as_ref()),
            IrDeclarationKind::Property(p) => body_statements(p.initializer.as_ref()),
            IrDeclarationKind::AnonymousInitializer(i) => &i.body.statements,
        }
    }

    /// Type parameters visible from a declaration.
    pub fn type_parameter_scope(&self, id: DeclId) -> TypeParameterScope<'_> {
        let Some(decl) = self.declaration(id) else {
            return TypeParameterScope::empty();
        };
        match &decl.kind {
            IrDeclarationKind::Class(c) => TypeParameterScope {
                own: &c.type_parameters,
                class: &[],
            },
            IrDeclarationKind::Function(f) => TypeParameterScope {
                own: &f.type_parameters,
                class: self.class_type_parameters(id),
            },
            _ => TypeParameterScope {
                own: &[],
                class: self.class_type_parameters(id),
            },
        }
    }

    fn class_type_parameters(&self, id: DeclId) -> &[IrTypeParameter] {
        self.parent_class(id)
            .map(|(_, class)| class.type_parameters.as_slice())
            .unwrap_or(&[])
    }

    // ==========================================================================
    // Construction
    // ==========================================================================

    /// Attach a new declaration to `parent` and return its id.
    ///
    /// Classes get their [`ClassId`](irverify_core::ClassId) computed here:
    /// top-level and member classes inherit the path of their parent, classes
    /// declared inside a body are local and get none.
    pub fn add_declaration(
        &mut self,
        parent: impl Into<IrParent>,
        kind: impl Into<IrDeclarationKind>,
    ) -> Result<DeclId, IrError> {
        let parent = parent.into();
        let mut kind = kind.into();
        self.check_parent(parent, &kind)?;

        if let IrDeclarationKind::Class(class) = &mut kind {
            class.class_id = self.child_class_id(parent, &class.name);
        }

        let id = DeclId(self.arena.len() as u32);
        self.arena.push(IrDeclaration { id, parent, kind });
        self.children_mut(parent)?.push(id);
        Ok(id)
    }

    pub fn add_class(
        &mut self,
        parent: impl Into<IrParent>,
        class: IrClass,
    ) -> Result<DeclId, IrError> {
        self.add_declaration(parent, class)
    }

    pub fn add_function(
        &mut self,
        parent: impl Into<IrParent>,
        function: IrFunction,
    ) -> Result<DeclId, IrError> {
        self.add_declaration(parent, function)
    }

    pub fn add_property(
        &mut self,
        parent: impl Into<IrParent>,
        property: IrProperty,
    ) -> Result<DeclId, IrError> {
        self.add_declaration(parent, property)
    }

    pub fn add_constructor(
        &mut self,
        class: DeclId,
        constructor: IrConstructor,
    ) -> Result<DeclId, IrError> {
        self.add_declaration(class, constructor)
    }

    pub fn add_anonymous_initializer(&mut self, class: DeclId) -> Result<DeclId, IrError> {
        self.add_declaration(class, IrAnonymousInitializer::default())
    }

    /// Remove a declaration from its parent's list.
    ///
    /// The declaration stays bound in the arena, so ids referring to it still
    /// resolve; it is just no longer a member of anything.
    pub fn detach(&mut self, id: DeclId) -> Result<(), IrError> {
        let parent = self
            .declaration(id)
            .ok_or(IrError::UnknownDeclaration(id))?
            .parent;
        let children = self.children_mut(parent)?;
        let position = children
            .iter()
            .position(|&child| child == id)
            .ok_or(IrError::NotAttached(id))?;
        children.remove(position);
        Ok(())
    }

    fn check_parent(&self, parent: IrParent, kind: &IrDeclarationKind) -> Result<(), IrError> {
        let class_only = matches!(
            kind,
            IrDeclarationKind::Constructor(_) | IrDeclarationKind::AnonymousInitializer(_)
        );
        match parent {
            IrParent::File(file) => {
                self.file(file).ok_or(IrError::UnknownFile(file))?;
                if class_only {
                    return Err(IrError::InvalidParent {
                        parent,
                        child: kind_name(kind),
                    });
                }
            }
            IrParent::Declaration(decl) => {
                let parent_decl = self
                    .declaration(decl)
                    .ok_or(IrError::UnknownDeclaration(decl))?;
                if class_only && parent_decl.as_class().is_none() {
                    return Err(IrError::InvalidParent {
                        parent,
                        child: kind_name(kind),
                    });
                }
            }
        }
        Ok(())
    }

    fn child_class_id(&self, parent: IrParent, name: &str) -> Option<ClassId> {
        match parent {
            IrParent::File(file) => self
                .file(file)
                .map(|f| ClassId::top_level(f.package.clone(), name)),
            IrParent::Declaration(decl) => self
                .class(decl)
                .and_then(|outer| outer.class_id.as_ref())
                .map(|outer| outer.nested(name)),
        }
    }

    fn children_mut(&mut self, parent: IrParent) -> Result<&mut Vec<DeclId>, IrError> {
        match parent {
            IrParent::File(file) => self
                .files
                .get_mut(file.index())
                .map(|f| &mut f.declarations)
                .ok_or(IrError::UnknownFile(file)),
            IrParent::Declaration(decl) => {
                let parent_decl = self
                    .arena
                    .get_mut(decl.index())
                    .ok_or(IrError::UnknownDeclaration(decl))?;
                let list = match &mut parent_decl.kind {
                    IrDeclarationKind::Class(c) => &mut c.declarations,
                    IrDeclarationKind::Function(f) => {
                        &mut f.body.get_or_insert_with(IrBody::default).statements
                    }
                    IrDeclarationKind::Constructor(c) => {
                        &mut c.body.get_or_insert_with(IrBody::default).statements
                    }
                    IrDeclarationKind::Property(p) => {
                        &mut p.initializer.get_or_insert_with(IrBody::default).statements
                    }
                    IrDeclarationKind::AnonymousInitializer(i) => &mut i.body.statements,
                };
                Ok(list)
            }
        }
    }
}

fn body_statements(body: Option<&IrBody>) -> &[DeclId] {
    body.map(|b| b.statements.as_slice()).unwrap_or(&[])
}

fn kind_name(kind: &IrDeclarationKind) -> &'static str {
    match kind {
        IrDeclarationKind::Class(_) => "class",
        IrDeclarationKind::Function(_) => "function",
        IrDeclarationKind::Constructor(_) => "constructor",
        IrDeclarationKind::Property(_) => "property",
        IrDeclarationKind::AnonymousInitializer(_) => "anonymous initializer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IrType;
    use irverify_core::{ClassKind, builtins};

    fn int() -> IrType {
        IrType::class(builtins::int())
    }

    fn class(module: &mut IrModule, parent: impl Into<IrParent>, name: &str) -> DeclId {
        module
            .add_class(parent, IrClass::new(name, ClassKind::Class))
            .unwrap()
    }

    #[test]
    fn class_ids_follow_nesting() {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let outer = class(&mut module, file, "Outer");
        let inner = class(&mut module, outer, "Inner");

        assert_eq!(
            module.class(inner).unwrap().class_id,
            Some(ClassId::top_level("demo", "Outer").nested("Inner"))
        );
        assert_eq!(module.children(outer), &[inner]);
    }

    #[test]
    fn local_classes_have_no_id() {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let outer = class(&mut module, file, "Outer");
        let fun = module
            .add_function(outer, IrFunction::new("run", int()))
            .unwrap();
        let local = class(&mut module, fun, "Local");
        let nested_in_local = class(&mut module, local, "Nested");

        assert_eq!(module.class(local).unwrap().class_id, None);
        assert_eq!(module.class(nested_in_local).unwrap().class_id, None);
        assert_eq!(module.children(fun), &[local]);
        assert!(!module.class(outer).unwrap().declares(local));
    }

    #[test]
    fn constructors_require_class_parent() {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let err = module
            .add_declaration(file, IrConstructor::default())
            .unwrap_err();
        let IrError::InvalidParent { child, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(child, "constructor");

        let fun = module
            .add_function(file, IrFunction::new("top", int()))
            .unwrap();
        assert!(module.add_anonymous_initializer(fun).is_err());
    }

    #[test]
    fn unknown_parent_rejected() {
        let mut module = IrModule::new("main");
        let err = module
            .add_function(DeclId::from_raw(42), IrFunction::new("f", int()))
            .unwrap_err();
        assert_eq!(err, IrError::UnknownDeclaration(DeclId::from_raw(42)));
    }

    #[test]
    fn detach_keeps_declaration_bound() {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let base = class(&mut module, file, "Base");
        let foo = module
            .add_function(base, IrFunction::new("foo", int()))
            .unwrap();

        module.detach(foo).unwrap();
        assert!(!module.class(base).unwrap().declares(foo));
        assert!(module.function(foo).is_some());
        assert_eq!(module.parent_class(foo).map(|(id, _)| id), Some(base));
        assert_eq!(module.detach(foo), Err(IrError::NotAttached(foo)));
    }

    #[test]
    fn type_parameter_scope_spans_function_then_class() {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let boxed = IrClass::new("Box", ClassKind::Class)
            .with_type_parameter(IrTypeParameter::new("T"));
        let class = module.add_class(file, boxed).unwrap();
        let map = IrFunction::new("map", IrType::type_parameter(0))
            .with_type_parameter(IrTypeParameter::new("R"));
        let fun = module.add_function(class, map).unwrap();

        let scope = module.type_parameter_scope(fun);
        assert_eq!(scope.resolve(0).map(|p| p.name.as_str()), Some("R"));
        assert_eq!(scope.resolve(1).map(|p| p.name.as_str()), Some("T"));
        assert!(scope.resolve(2).is_none());
    }
}
