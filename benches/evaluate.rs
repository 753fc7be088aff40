use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tank_mixing::scenario::reference_layouts;
use tank_mixing::{evaluate, evaluate_all, Scenario};

fn bench_evaluate(c: &mut Criterion) {
    let scenario = Scenario::default_example();
    c.bench_function("evaluate_default_example", |b| {
        b.iter(|| evaluate(black_box(&scenario)))
    });

    let layouts = reference_layouts();
    c.bench_function("evaluate_reference_layouts", |b| {
        b.iter(|| evaluate_all(black_box(&layouts)))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
