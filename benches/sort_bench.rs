use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stepsort::algorithm::Algorithm;
use stepsort::engine::Engine;
use stepsort::metrics::Metrics;
use stepsort::sorts;

fn bench_step_call(c: &mut Criterion) {
    let mut engine = Engine::new_with_seed(1024, 17).unwrap();
    engine.randomize();
    engine.select_algorithm(Algorithm::Bubble);

    c.bench_function("bubble_step_1024", |b| {
        b.iter(|| {
            if engine.step().unwrap() {
                // Run finished mid-measurement: reshuffle and keep stepping.
                engine.randomize();
            }
            black_box(engine.comparisons());
        })
    });
}

fn bench_instant_runs(c: &mut Criterion) {
    let mut source = Engine::new_with_seed(4096, 23).unwrap();
    source.randomize();
    let shuffled = source.snapshot();

    c.bench_function("quick_run_4096", |b| {
        b.iter(|| {
            let mut values = shuffled.clone();
            let mut metrics = Metrics::new();
            sorts::quick(black_box(&mut values), &mut metrics);
            black_box(metrics.comparisons());
        })
    });

    c.bench_function("merge_run_4096", |b| {
        b.iter(|| {
            let mut values = shuffled.clone();
            let mut metrics = Metrics::new();
            sorts::merge(black_box(&mut values), &mut metrics);
            black_box(metrics.comparisons());
        })
    });
}

criterion_group!(benches, bench_step_call, bench_instant_runs);
criterion_main!(benches);
