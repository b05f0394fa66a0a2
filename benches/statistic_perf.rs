use chartstat::{EvalOptions, Ewma, EwmaParams, MovingAverage, MovingAverageParams, Statistic, Strategy};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_statistics(c: &mut Criterion) {
    let x: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.01).sin()).collect();
    let offsets: Vec<i64> = (1..=10_000).step_by(10).collect();
    let ewma = Ewma::new(EwmaParams::new(0.2, 0.0).unwrap());
    let ma = MovingAverage::new(MovingAverageParams::new(50).unwrap());

    for (label, options) in [
        ("sequential", EvalOptions::sequential()),
        ("parallel", EvalOptions::default()),
        ("recursive", EvalOptions::default().with_strategy(Strategy::Recursive)),
    ] {
        c.bench_function(&format!("ewma_{label}"), |b| {
            b.iter(|| ewma.evaluate(black_box(&x), black_box(&offsets), &options).unwrap())
        });
        c.bench_function(&format!("moving_average_{label}"), |b| {
            b.iter(|| ma.evaluate(black_box(&x), black_box(&offsets), &options).unwrap())
        });
    }
}

criterion_group!(benches, bench_statistics);
criterion_main!(benches);
