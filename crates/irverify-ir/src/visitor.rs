//! Visitor pattern for traversing an IR module.
//!
//! Each `visit_*` method is called when the corresponding node is reached.
//! The default implementations call the matching `walk_*` function, which
//! visits the node's children. Override a `visit_*` method and skip the
//! `walk_*` call to prune a subtree.
//!
//! # Example
//!
//! ```
//! use irverify_core::{ClassKind, builtins};
//! use irverify_ir::visitor::{IrVisitor, walk_class};
//! use irverify_ir::{DeclId, IrClass, IrFunction, IrModule, IrType};
//!
//! struct ClassCounter(usize);
//!
//! impl IrVisitor for ClassCounter {
//!     fn visit_class(&mut self, module: &IrModule, id: DeclId, class: &IrClass) {
//!         self.0 += 1;
//!         walk_class(self, module, id, class);
//!     }
//! }
//!
//! let mut module = IrModule::new("main");
//! let file = module.add_file("A.kt", "demo");
//! let outer = module
//!     .add_class(file, IrClass::new("Outer", ClassKind::Class))
//!     .unwrap();
//! module.add_class(outer, IrClass::new("Inner", ClassKind::Class)).unwrap();
//! let run = module
//!     .add_function(outer, IrFunction::new("run", IrType::class(builtins::unit())))
//!     .unwrap();
//! module.add_class(run, IrClass::new("Local", ClassKind::Class)).unwrap();
//!
//! let mut counter = ClassCounter(0);
//! counter.visit_module(&module);
//! assert_eq!(counter.0, 3);
//! ```

use crate::declarations::{
    IrAnonymousInitializer, IrClass, IrConstructor, IrDeclaration, IrDeclarationKind,
    IrFunction, IrProperty,
};
use crate::ids::DeclId;
use crate::module::{IrFile, IrModule};

/// Visitor trait for traversing IR declarations.
///
/// Children are addressed by id, so every method receives the module to
/// resolve them against.
pub trait IrVisitor: Sized {
    /// Visit the module root.
    fn visit_module(&mut self, module: &IrModule) {
        walk_module(self, module);
    }

    /// Visit a file.
    fn visit_file(&mut self, module: &IrModule, file: &IrFile) {
        walk_file(self, module, file);
    }

    /// Visit any declaration; dispatches on its kind.
    fn visit_declaration(&mut self, module: &IrModule, decl: &IrDeclaration) {
        walk_declaration(self, module, decl);
    }

    /// Visit a class.
    fn visit_class(&mut self, module: &IrModule, id: DeclId, class: &IrClass) {
        walk_class(self, module, id, class);
    }

    /// Visit a simple function.
    fn visit_function(&mut self, module: &IrModule, id: DeclId, function: &IrFunction) {
        walk_function(self, module, id, function);
    }

    /// Visit a constructor.
    fn visit_constructor(&mut self, module: &IrModule, id: DeclId, constructor: &IrConstructor) {
        walk_constructor(self, module, id, constructor);
    }

    /// Visit a property.
    fn visit_property(&mut self, module: &IrModule, id: DeclId, property: &IrProperty) {
        walk_property(self, module, id, property);
    }

    /// Visit an `init` block.
    fn visit_anonymous_initializer(
        &mut self,
        module: &IrModule,
        id: DeclId,
        initializer: &IrAnonymousInitializer,
    ) {
        walk_anonymous_initializer(self, module, id, initializer);
    }
}

// ============================================================================
// Walk functions
// ============================================================================

/// Visit every file of a module, in order.
pub fn walk_module<V: IrVisitor>(visitor: &mut V, module: &IrModule) {
    for file in module.files() {
        visitor.visit_file(module, file);
    }
}

/// Visit top-level declarations of a file.
pub fn walk_file<V: IrVisitor>(visitor: &mut V, module: &IrModule, file: &IrFile) {
    walk_children(visitor, module, &file.declarations);
}

/// Dispatch to the kind-specific visit method.
pub fn walk_declaration<V: IrVisitor>(visitor: &mut V, module: &IrModule, decl: &IrDeclaration) {
    match &decl.kind {
        IrDeclarationKind::Class(c) => visitor.visit_class(module, decl.id, c),
        IrDeclarationKind::Function(f) => visitor.visit_function(module, decl.id, f),
        IrDeclarationKind::Constructor(c) => visitor.visit_constructor(module, decl.id, c),
        IrDeclarationKind::Property(p) => visitor.visit_property(module, decl.id, p),
        IrDeclarationKind::AnonymousInitializer(i) => {
            visitor.visit_anonymous_initializer(module, decl.id, i)
        }
    }
}

/// Visit class members.
pub fn walk_class<V: IrVisitor>(
    visitor: &mut V,
    module: &IrModule,
    _id: DeclId,
    class: &IrClass,
) {
    walk_children(visitor, module, &class.declarations);
}

/// Visit local declarations of a function body.
pub fn walk_function<V: IrVisitor>(
    visitor: &mut V,
    module: &IrModule,
    _id: DeclId,
    function: &IrFunction,
) {
    if let Some(body) = &function.body {
        walk_children(visitor, module, &body.statements);
    }
}

/// Visit local declarations of a constructor body.
pub fn walk_constructor<V: IrVisitor>(
    visitor: &mut V,
    module: &IrModule,
    _id: DeclId,
    constructor: &IrConstructor,
) {
    if let Some(body) = &constructor.body {
        walk_children(visitor, module, &body.statements);
    }
}

/// Visit local declarations of a property initializer.
pub fn walk_property<V: IrVisitor>(
    visitor: &mut V,
    module: &IrModule,
    _id: DeclId,
    property: &IrProperty,
) {
    if let Some(initializer) = &property.initializer {
        walk_children(visitor, module, &initializer.statements);
    }
}

/// Visit local declarations of an `init` block.
pub fn walk_anonymous_initializer<V: IrVisitor>(
    visitor: &mut V,
    module: &IrModule,
    _id: DeclId,
    initializer: &IrAnonymousInitializer,
) {
    walk_children(visitor, module, &initializer.body.statements);
}

fn walk_children<V: IrVisitor>(visitor: &mut V, module: &IrModule, children: &[DeclId]) {
    for &child in children {
        if let Some(decl) = module.declaration(child) {
            visitor.visit_declaration(module, decl);
        }
    }
}
