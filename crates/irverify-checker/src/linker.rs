//! Overridden-symbol linker check.
//!
//! Every fake-override function lists the functions it overrides by
//! [`DeclId`]. An edge is consistent when the id:
//!
//! 1. is bound in the module arena,
//! 2. has a class as its parent, and
//! 3. is still listed in that class's declarations.
//!
//! A member removed from its class after override resolution (but still
//! referenced) fails the third condition and is reported as dangling.

use irverify_core::{FakeOverrideError, FqName};
use irverify_ir::visitor::{IrVisitor, walk_class};
use irverify_ir::{DeclId, IrClass, IrConstructor, IrDeclarationOrigin, IrFunction, IrModule};

/// Name used for a class in fault messages.
///
/// Local classes have no id and fall back to their simple name.
pub(crate) fn class_fq_name(class: &IrClass) -> FqName {
    match &class.class_id {
        Some(id) => id.as_fq_name(),
        None => FqName::new(class.name.clone()),
    }
}

/// Checks overridden-symbol edges of fake-override functions.
#[derive(Debug, Clone, Copy)]
pub struct OverriddenSymbolLinker<'m> {
    module: &'m IrModule,
}

impl<'m> OverriddenSymbolLinker<'m> {
    pub fn new(module: &'m IrModule) -> Self {
        Self { module }
    }

    /// Check every class the walker reaches.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(&self) -> Vec<FakeOverrideError> {
        let mut walker = LinkWalker {
            linker: *self,
            faults: Vec::new(),
        };
        walker.visit_module(self.module);
        walker.faults
    }

    /// Faults of every fake-override function declared by `class`, in
    /// declaration order.
    pub fn class_faults<'a>(
        &'a self,
        class: &'a IrClass,
    ) -> impl Iterator<Item = FakeOverrideError> + 'a {
        let name = class_fq_name(class);
        class
            .declarations
            .iter()
            .filter_map(move |&id| {
                let function = self.module.function(id)?;
                (function.origin == IrDeclarationOrigin::FakeOverride).then_some((id, function))
            })
            .flat_map(move |(id, function)| {
                self.function_faults(name.clone(), id, function)
            })
    }

    /// Faults of one fake-override function, in overridden-symbol order.
    pub fn function_faults<'a>(
        &'a self,
        class: FqName,
        id: DeclId,
        function: &'a IrFunction,
    ) -> impl Iterator<Item = FakeOverrideError> + 'a {
        function
            .overridden_symbols
            .iter()
            .filter_map(move |&symbol| self.check_edge(&class, id, symbol).err())
    }

    fn check_edge(
        &self,
        class: &FqName,
        member: DeclId,
        symbol: DeclId,
    ) -> Result<(), FakeOverrideError> {
        if self.module.declaration(symbol).is_none() {
            return Err(FakeOverrideError::UnboundOverriddenSymbol {
                class: class.clone(),
                member: self.module.render(member),
                symbol: symbol.to_string(),
            });
        }
        let Some((parent_id, parent)) = self.module.parent_class(symbol) else {
            return Err(FakeOverrideError::OverriddenSymbolOutsideClass {
                class: class.clone(),
                member: self.module.render(member),
                target: self.module.render(symbol),
            });
        };
        if !parent.declares(symbol) {
            return Err(FakeOverrideError::DanglingOverriddenSymbol {
                class: class.clone(),
                member: self.module.render(member),
                target: self.module.render(symbol),
                parent: self.module.render(parent_id),
            });
        }
        Ok(())
    }
}

/// Visits classes outside function bodies.
struct LinkWalker<'m> {
    linker: OverriddenSymbolLinker<'m>,
    faults: Vec<FakeOverrideError>,
}

impl IrVisitor for LinkWalker<'_> {
    fn visit_class(&mut self, module: &IrModule, id: DeclId, class: &IrClass) {
        self.faults.extend(self.linker.class_faults(class));
        walk_class(self, module, id, class);
    }

    fn visit_function(&mut self, _: &IrModule, _: DeclId, _: &IrFunction) {}

    fn visit_constructor(&mut self, _: &IrModule, _: DeclId, _: &IrConstructor) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use irverify_core::{ClassKind, FaultKind, builtins};
    use irverify_ir::{IrParent, IrProperty, IrType};

    fn int() -> IrType {
        IrType::class(builtins::int())
    }

    fn class(module: &mut IrModule, parent: impl Into<IrParent>, name: &str) -> DeclId {
        module
            .add_class(parent, IrClass::new(name, ClassKind::Class))
            .unwrap()
    }

    /// `open class Base { fun foo(): Int }` and `class Derived : Base` with a
    /// fake override of `foo`.
    fn hierarchy() -> (IrModule, DeclId, DeclId, DeclId) {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let base = class(&mut module, file, "Base");
        let foo = module
            .add_function(base, IrFunction::new("foo", int()))
            .unwrap();
        let derived = class(&mut module, file, "Derived");
        let fake_foo = IrFunction::new("foo", int()).fake_override_of([foo]);
        module.add_function(derived, fake_foo).unwrap();
        (module, base, derived, foo)
    }

    #[test]
    fn consistent_edges_pass() {
        let (module, ..) = hierarchy();
        assert!(OverriddenSymbolLinker::new(&module).run().is_empty());
    }

    #[test]
    fn detached_target_is_dangling() {
        let (mut module, _, derived, foo) = hierarchy();
        module.detach(foo).unwrap();

        let linker = OverriddenSymbolLinker::new(&module);
        let faults: Vec<_> = linker.class_faults(module.class(derived).unwrap()).collect();
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].kind(), FaultKind::Referential);
        match &faults[0] {
            FakeOverrideError::DanglingOverriddenSymbol {
                class,
                member,
                target,
                parent,
            } => {
                assert_eq!(class.as_str(), "demo.Derived");
                assert_eq!(
                    member,
                    "FUN FAKE_OVERRIDE name:foo visibility:public () returnType:kotlin.Int"
                );
                assert_eq!(
                    target,
                    "FUN name:foo visibility:public () returnType:kotlin.Int"
                );
                assert_eq!(parent, "CLASS CLASS name:Base visibility:public");
            }
            other => panic!("unexpected fault: {other}"),
        }
    }

    #[test]
    fn unbound_and_foreign_targets() {
        let mut module = IrModule::new("main");
        let file = module.add_file("A.kt", "demo");
        let top = module
            .add_function(file, IrFunction::new("top", int()))
            .unwrap();
        let class = class(&mut module, file, "C");
        let foo = IrFunction::new("foo", int()).fake_override_of([DeclId::from_raw(99), top]);
        module.add_function(class, foo).unwrap();

        let faults = OverriddenSymbolLinker::new(&module).run();
        assert!(matches!(
            &faults[0],
            FakeOverrideError::UnboundOverriddenSymbol { symbol, .. } if symbol == "#99"
        ));
        assert!(matches!(
            &faults[1],
            FakeOverrideError::OverriddenSymbolOutsideClass { .. }
        ));
        assert_eq!(faults.len(), 2);
    }

    #[test]
    fn classes_in_initializers_are_reached() {
        let (mut module, _, _, foo) = hierarchy();
        let file = module.files()[0].id;
        let holder = class(&mut module, file, "Holder");
        let prop = module
            .add_property(holder, IrProperty::new("p", int()))
            .unwrap();
        let local = class(&mut module, prop, "Local");
        let fake_foo = IrFunction::new("foo", int()).fake_override_of([foo]);
        module.add_function(local, fake_foo).unwrap();
        module.detach(foo).unwrap();

        let faults = OverriddenSymbolLinker::new(&module).run();
        let classes: Vec<_> = faults.iter().map(|f| f.class().as_str()).collect();
        assert_eq!(classes, vec!["demo.Derived", "Local"]);
    }
}
