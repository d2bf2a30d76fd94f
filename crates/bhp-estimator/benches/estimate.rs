use bhp_estimator::{generate_history_from, HeuristicEstimator, PredictionRequest, PropertyType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_estimate(c: &mut Criterion) {
    let estimator = HeuristicEstimator::default();
    let request = PredictionRequest::new(1200.0, "Koramangala", 2, 2)
        .expect("valid request")
        .with_property_type(PropertyType::Villa);

    c.bench_function("estimate_request", |b| {
        b.iter(|| estimator.estimate_request(black_box(&request)));
    });

    c.bench_function("estimate_unknown_location", |b| {
        b.iter(|| {
            estimator.estimate(
                black_box(1500.0),
                black_box("Nowhere"),
                black_box("3"),
                black_box("2"),
                black_box("Plot"),
            )
        });
    });
}

fn bench_history(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("history_12_months", |b| {
        b.iter(|| generate_history_from(black_box(11_466_000.0), 12, 3, &mut rng));
    });
}

criterion_group!(benches, bench_estimate, bench_history);
criterion_main!(benches);
