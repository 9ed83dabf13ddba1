//! Integration tests for fake-override verification.
//!
//! Each test builds a descriptor module and an IR module describing the same
//! classes and checks the verdict through the public facade.

use std::sync::Arc;

use irverify::core::{SignatureList, SignatureString};
use irverify::prelude::*;

fn int() -> KotlinType {
    KotlinType::class(builtins::int())
}

fn string() -> KotlinType {
    KotlinType::class(builtins::string())
}

fn ir_int() -> IrType {
    IrType::class(builtins::int())
}

fn ir_string() -> IrType {
    IrType::class(builtins::string())
}

/// Builder for a single-file IR module in package `demo`.
struct IrBuilder {
    module: IrModule,
    file: irverify::ir::FileId,
}

impl IrBuilder {
    fn new() -> Self {
        let mut module = IrModule::new("main");
        let file = module.add_file("Demo.kt", "demo");
        Self { module, file }
    }

    fn class(&mut self, name: &str) -> DeclId {
        self.class_of_kind(name, ClassKind::Class)
    }

    fn class_of_kind(&mut self, name: &str, kind: ClassKind) -> DeclId {
        self.module
            .add_class(self.file, IrClass::new(name, kind))
            .unwrap()
    }

    fn nested(&mut self, parent: DeclId, name: &str, kind: ClassKind) -> DeclId {
        self.module
            .add_class(parent, IrClass::new(name, kind))
            .unwrap()
    }

    fn fun(&mut self, class: DeclId, name: &str, ret: IrType) -> DeclId {
        self.module
            .add_function(class, IrFunction::new(name, ret))
            .unwrap()
    }

    fn fake_fun(
        &mut self,
        class: DeclId,
        name: &str,
        ret: IrType,
        overridden: &[DeclId],
    ) -> DeclId {
        self.module
            .add_function(
                class,
                IrFunction::new(name, ret).fake_override_of(overridden.iter().copied()),
            )
            .unwrap()
    }

    fn internal_fake_fun(&mut self, class: DeclId, name: &str, ret: IrType) -> DeclId {
        self.module
            .add_function(
                class,
                IrFunction::new(name, ret)
                    .with_visibility(Visibility::Internal)
                    .fake_override_of([]),
            )
            .unwrap()
    }

    fn verify(&self, descriptors: &ModuleDescriptor) -> Result<(), FakeOverrideError> {
        irverify::verify_fake_overrides(descriptors, &self.module)
    }

    fn run(&self, descriptors: &ModuleDescriptor, config: CheckerConfig) -> CheckOutput {
        irverify::run_with_config(descriptors, &self.module, config)
    }
}

fn demo(name: &str) -> ClassId {
    ClassId::top_level("demo", name)
}

fn descriptor_class(id: &ClassId) -> ClassDescriptor {
    ClassDescriptor::new(id.clone(), ClassKind::Class)
}

fn fake_fun(owner: &ClassId, name: &str, ret: KotlinType) -> FunctionDescriptor {
    FunctionDescriptor::new(name, owner.clone(), ret).fake_override()
}

fn internal_fake_fun(owner: &ClassId, name: &str, ret: KotlinType) -> FunctionDescriptor {
    fake_fun(owner, name, ret).with_visibility(Visibility::Internal)
}

fn signatures(items: &[&str]) -> SignatureList {
    SignatureList::sorted(items.iter().map(|s| SignatureString::from(*s)))
}

/// Descriptors for `class C` with fake overrides `foo(): Int` and `bar(): String`.
fn foo_bar_descriptors() -> ModuleDescriptor {
    let c = demo("C");
    ModuleDescriptor::new("main")
        .with_class(
            descriptor_class(&c)
                .with_function(fake_fun(&c, "foo", int()))
                .with_function(fake_fun(&c, "bar", string())),
        )
        .unwrap()
}

// =============================================================================
// Signature-set comparison
// =============================================================================

#[test]
fn test_matching_sets_pass() {
    let descriptors = foo_bar_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    // Declaration order differs from the descriptor side.
    ir.fake_fun(c, "bar", ir_string(), &[]);
    ir.fake_fun(c, "foo", ir_int(), &[]);

    assert!(ir.verify(&descriptors).is_ok());
}

#[test]
fn test_missing_ir_member_is_mismatch() {
    let descriptors = foo_bar_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);

    let err = ir.verify(&descriptors).unwrap_err();
    assert_eq!(err.kind(), FaultKind::SignatureMismatch);
    match &err {
        FakeOverrideError::SignatureMismatch {
            class,
            descriptor,
            ir,
        } => {
            assert_eq!(class.as_str(), "demo.C");
            assert_eq!(
                descriptor,
                &signatures(&["foo():kotlin.Int", "bar():kotlin.String"])
            );
            assert_eq!(ir, &signatures(&["foo():kotlin.Int"]));
        }
        other => panic!("unexpected fault: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "[IR VALIDATION] Fake override mismatch for demo.C\n\
         \tDescriptor based: [bar():kotlin.String, foo():kotlin.Int]\n\
         \tIR based        : [foo():kotlin.Int]"
    );
}

#[test]
fn test_extra_ir_member_is_mismatch() {
    let c_id = demo("C");
    let class = descriptor_class(&c_id).with_function(fake_fun(&c_id, "foo", int()));
    let descriptors = ModuleDescriptor::new("main").with_class(class).unwrap();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.fake_fun(c, "foo", ir_string(), &[]);

    let err = ir.verify(&descriptors).unwrap_err();
    assert_eq!(err.kind(), FaultKind::SignatureMismatch);
}

#[test]
fn test_parameter_types_take_part_in_comparison() {
    let c_id = demo("C");
    let put = fake_fun(&c_id, "put", int()).with_parameter("v", string().nullable());
    let class = descriptor_class(&c_id).with_function(put);
    let descriptors = ModuleDescriptor::new("main").with_class(class).unwrap();

    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.module
        .add_function(
            c,
            IrFunction::new("put", ir_int())
                .with_parameter("v", ir_string())
                .fake_override_of([]),
        )
        .unwrap();

    let message = ir.verify(&descriptors).unwrap_err().to_string();
    assert!(message.contains("put(kotlin.String?):kotlin.Int"));
    assert!(message.contains("put(kotlin.String):kotlin.Int"));
}

#[test]
fn test_generic_members_match_across_models() {
    let c_id = demo("Box");
    let bound = KotlinType::class(ClassId::top_level("kotlin", "Number"));
    let t = KotlinType::type_parameter(TypeParameterDescriptor::bounded("T", bound));
    let get = fake_fun(&c_id, "get", t.clone()).with_parameter("fallback", t.nullable());
    let size = PropertyDescriptor::new("size", c_id.clone(), int()).fake_override();
    let boxed = descriptor_class(&c_id)
        .with_function(get)
        .with_property(size);
    let descriptors = ModuleDescriptor::new("main").with_class(boxed).unwrap();

    let mut ir = IrBuilder::new();
    let number = IrType::class(ClassId::top_level("kotlin", "Number"));
    let t = IrTypeParameter::new("T").with_bound(number);
    let class = IrClass::new("Box", ClassKind::Class).with_type_parameter(t);
    let c = ir.module.add_class(ir.file, class).unwrap();
    ir.module
        .add_function(
            c,
            IrFunction::new("get", IrType::type_parameter(0))
                .with_parameter("fallback", IrType::type_parameter(0).nullable())
                .fake_override_of([]),
        )
        .unwrap();
    ir.module
        .add_property(c, IrProperty::new("size", ir_int()).fake_override())
        .unwrap();

    assert!(ir.verify(&descriptors).is_ok());
}

// =============================================================================
// Internal tier
// =============================================================================

fn internal_descriptors() -> ModuleDescriptor {
    let c = demo("C");
    ModuleDescriptor::new("main")
        .with_class(
            descriptor_class(&c)
                .with_function(fake_fun(&c, "foo", int()))
                .with_function(internal_fake_fun(&c, "helper", int())),
        )
        .unwrap()
}

#[test]
fn test_internal_superset_passes() {
    let descriptors = internal_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.internal_fake_fun(c, "helper", ir_int());
    ir.internal_fake_fun(c, "extra", ir_string());

    assert!(ir.verify(&descriptors).is_ok());
}

#[test]
fn test_internal_violation_is_reported() {
    let descriptors = internal_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.internal_fake_fun(c, "extra", ir_string());

    let err = ir.verify(&descriptors).unwrap_err();
    assert_eq!(err.kind(), FaultKind::InternalSuperset);
    assert_eq!(
        err.to_string(),
        "[IR VALIDATION] Internal fake override mismatch for demo.C\n\
         \tDescriptor based: [helper():kotlin.Int]\n\
         \tIR based        : [extra():kotlin.String]"
    );
}

#[test]
fn test_internal_module_suffix_is_ignored() {
    let descriptors = internal_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.internal_fake_fun(c, "helper$main", ir_int());

    assert!(ir.verify(&descriptors).is_ok());
}

// =============================================================================
// Skipped classes
// =============================================================================

#[test]
fn test_class_without_descriptor_is_skipped() {
    let descriptors = ModuleDescriptor::new("main");
    let mut ir = IrBuilder::new();
    let c = ir.class("Unknown");
    ir.fake_fun(c, "foo", ir_int(), &[]);

    let output = ir.run(&descriptors, CheckerConfig::default());
    assert!(output.is_success());
    assert_eq!(output.classes_validated, 0);
    assert_eq!(output.skipped_for(SkipReason::NoDescriptor), 1);
    assert_eq!(output.classes_skipped[0].name.as_str(), "demo.Unknown");
}

#[test]
fn test_enum_entries_are_skipped() {
    let entry_id = demo("Color").nested("RED");
    let descriptors = ModuleDescriptor::new("main")
        .with_class(ClassDescriptor::new(demo("Color"), ClassKind::EnumClass))
        .unwrap()
        .with_class(
            ClassDescriptor::new(entry_id.clone(), ClassKind::EnumEntry)
                .with_function(fake_fun(&entry_id, "describe", string())),
        )
        .unwrap();

    let mut ir = IrBuilder::new();
    let color = ir.class_of_kind("Color", ClassKind::EnumClass);
    ir.nested(color, "RED", ClassKind::EnumEntry);

    let output = ir.run(&descriptors, CheckerConfig::default());
    assert!(output.is_success());
    assert_eq!(output.classes_validated, 1);
    assert_eq!(output.skipped_for(SkipReason::EnumEntry), 1);
}

#[test]
fn test_local_classes_in_functions_are_never_validated() {
    let descriptors = foo_bar_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.fake_fun(c, "bar", ir_string(), &[]);
    let helper = ir
        .module
        .add_function(c, IrFunction::new("helper", ir_int()).with_body())
        .unwrap();
    let local = ir.nested(helper, "Local", ClassKind::Class);
    ir.fake_fun(local, "ghost", ir_int(), &[DeclId::from_raw(1_000)]);

    let config = CheckerConfig::new().with_link_check_scope(LinkCheckScope::AllClasses);
    let output = ir.run(&descriptors, config);
    assert!(output.is_success());
    assert_eq!(output.classes_validated, 1);
    assert!(output.classes_skipped.is_empty());
}

#[test]
fn test_anonymous_class_in_initializer_is_skipped() {
    let descriptors = foo_bar_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.fake_fun(c, "bar", ir_string(), &[]);
    let prop = ir
        .module
        .add_property(c, IrProperty::new("listener", ir_int()))
        .unwrap();
    ir.nested(prop, "<no name provided>", ClassKind::Class);

    let output = ir.run(&descriptors, CheckerConfig::default());
    assert!(output.is_success());
    assert_eq!(output.skipped_for(SkipReason::NoClassId), 1);
}

// =============================================================================
// Overridden-symbol links
// =============================================================================

#[test]
fn test_dangling_reference_after_removal() {
    let base_id = demo("Base");
    let derived_id = demo("Derived");
    let descriptors = ModuleDescriptor::new("main")
        .with_class(descriptor_class(&base_id))
        .unwrap()
        .with_class(
            descriptor_class(&derived_id)
                .with_supertype(base_id)
                .with_function(fake_fun(&derived_id, "foo", int())),
        )
        .unwrap();

    let mut ir = IrBuilder::new();
    let base = ir.class("Base");
    let foo = ir.fun(base, "foo", ir_int());
    let derived = ir.class("Derived");
    ir.fake_fun(derived, "foo", ir_int(), &[foo]);

    assert!(ir.verify(&descriptors).is_ok());

    ir.module.detach(foo).unwrap();
    let err = ir.verify(&descriptors).unwrap_err();
    assert!(err.is_referential());
    assert_eq!(
        err.to_string(),
        "[IR VALIDATION] CHECK overridden symbols in demo.Derived: \
         FUN FAKE_OVERRIDE name:foo visibility:public () returnType:kotlin.Int refers to \
         FUN name:foo visibility:public () returnType:kotlin.Int which is not a member of \
         CLASS CLASS name:Base visibility:public"
    );
}

#[test]
fn test_standalone_linker_pass() {
    let mut ir = IrBuilder::new();
    let base = ir.class("Base");
    let foo = ir.fun(base, "foo", ir_int());
    let derived = ir.class("Derived");
    ir.fake_fun(derived, "foo", ir_int(), &[foo]);

    assert!(OverriddenSymbolLinker::new(&ir.module).run().is_empty());
    ir.module.detach(foo).unwrap();
    let faults = OverriddenSymbolLinker::new(&ir.module).run();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].class().as_str(), "demo.Derived");
}

// =============================================================================
// Descriptor lookup
// =============================================================================

#[test]
fn test_descriptor_found_in_dependency() {
    let c = demo("C");
    let class = descriptor_class(&c).with_function(fake_fun(&c, "foo", int()));
    let library = ModuleDescriptor::new("lib").with_class(class).unwrap();
    let descriptors = ModuleDescriptor::new("main").with_dependency(Arc::new(library));

    let mut ir = IrBuilder::new();
    let class = ir.class("C");
    let output = ir.run(&descriptors, CheckerConfig::default());
    assert_eq!(output.classes_validated, 1);
    assert_eq!(output.faults.len(), 1);

    ir.fake_fun(class, "foo", ir_int(), &[]);
    assert!(ir.verify(&descriptors).is_ok());
}

// =============================================================================
// Policies and determinism
// =============================================================================

#[test]
fn test_collect_all_reports_in_traversal_order() {
    let mut descriptors = ModuleDescriptor::new("main");
    for name in ["A", "B", "C"] {
        let id = demo(name);
        let class = descriptor_class(&id).with_function(fake_fun(&id, "foo", int()));
        descriptors.register_class(class).unwrap();
    }
    let inner = demo("B").nested("Inner");
    let class = descriptor_class(&inner).with_function(fake_fun(&inner, "foo", int()));
    descriptors.register_class(class).unwrap();

    let mut ir = IrBuilder::new();
    ir.class("A");
    let b = ir.class("B");
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);
    ir.nested(b, "Inner", ClassKind::Class);

    let output = ir.run(&descriptors, CheckerConfig::new().collect_all());
    let classes: Vec<_> = output
        .faults
        .iter()
        .map(|f| f.class().to_string())
        .collect();
    assert_eq!(classes, vec!["demo.A", "demo.B", "demo.B.Inner"]);
    assert_eq!(output.classes_validated, 4);

    let fail_fast = ir.run(&descriptors, CheckerConfig::default());
    assert_eq!(fail_fast.faults.len(), 1);
    assert_eq!(fail_fast.faults[0], output.faults[0]);
}

#[test]
fn test_check_is_idempotent() {
    let descriptors = foo_bar_descriptors();
    let mut ir = IrBuilder::new();
    let c = ir.class("C");
    ir.fake_fun(c, "foo", ir_int(), &[]);

    let checker = FakeOverrideChecker::new(&descriptors);
    let first = checker.check(&ir.module).unwrap_err();
    let second = checker.check(&ir.module).unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_canonicalization_is_stable() {
    let signatures = vec![
        SignatureString::from("z():kotlin.Int"),
        SignatureString::from("a(kotlin.Int):kotlin.Unit"),
        SignatureString::from("a():kotlin.Unit"),
    ];
    let once = SignatureList::sorted(signatures.clone());
    let twice = SignatureList::sorted(once.iter().cloned());
    assert_eq!(once, twice);
    assert_eq!(once, SignatureList::sorted(signatures.into_iter().rev()));
}
