//! Performance benchmarks for fake-override verification.
//!
//! Modules are generated synthetically: every class inherits the same set of
//! members from a shared base, so each one carries a fake override per
//! inherited member on both the descriptor and the IR side.
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- --profile-time 5
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use irverify::prelude::*;

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

fn int_type() -> KotlinType {
    KotlinType::class(builtins::int())
}

/// `classes` classes deriving from `Base`, which declares `members` functions.
fn generate(classes: usize, members: usize) -> (ModuleDescriptor, IrModule) {
    let mut descriptors = ModuleDescriptor::new("bench");
    let mut module = IrModule::new("bench");
    let file = module.add_file("Bench.kt", "bench");

    let base_id = ClassId::top_level("bench", "Base");
    let mut base_descriptor = ClassDescriptor::new(base_id.clone(), ClassKind::Class);
    let base = module
        .add_class(file, IrClass::new("Base", ClassKind::Class))
        .unwrap();
    let mut base_functions = Vec::with_capacity(members);
    for m in 0..members {
        let name = format!("member{m}");
        base_descriptor = base_descriptor.with_function(
            FunctionDescriptor::new(name.as_str(), base_id.clone(), int_type())
                .with_parameter("x", KotlinType::class(builtins::string())),
        );
        let id = module
            .add_function(
                base,
                IrFunction::new(name, IrType::class(builtins::int()))
                    .with_parameter("x", IrType::class(builtins::string())),
            )
            .unwrap();
        base_functions.push(id);
    }
    descriptors.register_class(base_descriptor).unwrap();

    for c in 0..classes {
        let name = format!("Derived{c}");
        let id = ClassId::top_level("bench", &name);
        let mut descriptor =
            ClassDescriptor::new(id.clone(), ClassKind::Class).with_supertype(base_id.clone());
        let class = module
            .add_class(file, IrClass::new(name, ClassKind::Class))
            .unwrap();
        for (m, &overridden) in base_functions.iter().enumerate() {
            let member = format!("member{m}");
            descriptor = descriptor.with_function(
                FunctionDescriptor::new(member.as_str(), id.clone(), int_type())
                    .with_parameter("x", KotlinType::class(builtins::string()))
                    .fake_override(),
            );
            module
                .add_function(
                    class,
                    IrFunction::new(member, IrType::class(builtins::int()))
                        .with_parameter("x", IrType::class(builtins::string()))
                        .fake_override_of([overridden]),
                )
                .unwrap();
        }
        descriptors.register_class(descriptor).unwrap();
    }

    (descriptors, module)
}

fn class_count_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let mut group = c.benchmark_group("checker/classes");
    for classes in [10, 100, 1_000] {
        let (descriptors, module) = generate(classes, 10);
        group.throughput(Throughput::Elements(classes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(classes), &module, |b, module| {
            let checker = FakeOverrideChecker::new(&descriptors);
            b.iter(|| {
                let result = checker.check(black_box(module));
                end_profiling_frame();
                black_box(result)
            });
        });
    }
    group.finish();
}

fn member_count_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("checker/members");
    for members in [1, 10, 100] {
        let (descriptors, module) = generate(50, members);
        group.throughput(Throughput::Elements(members as u64));
        group.bench_with_input(BenchmarkId::from_parameter(members), &module, |b, module| {
            let checker = FakeOverrideChecker::new(&descriptors)
                .with_config(CheckerConfig::new().collect_all());
            b.iter(|| {
                let output = checker.run(black_box(module));
                end_profiling_frame();
                black_box(output.fake_overrides_compared)
            });
        });
    }
    group.finish();
}

fn linker_benchmarks(c: &mut Criterion) {
    let (_, module) = generate(500, 20);
    c.bench_function("linker/500_classes", |b| {
        b.iter(|| {
            let linker = OverriddenSymbolLinker::new(black_box(&module));
            black_box(linker.run().len())
        });
    });
}

criterion_group!(
    benches,
    class_count_benchmarks,
    member_count_benchmarks,
    linker_benchmarks
);
criterion_main!(benches);
