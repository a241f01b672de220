//! Criterion benchmarks for pricer_core closed-form pricing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricer_core::analytical::BlackScholesMerton;
use pricer_core::math::norm_cdf;
use pricer_core::types::ModelParameters;

fn bench_norm_cdf(c: &mut Criterion) {
    let xs: Vec<f64> = (0..100).map(|i| -5.0 + i as f64 * 0.1).collect();
    c.bench_function("norm_cdf_100", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(norm_cdf(black_box(x)));
            }
        });
    });
}

fn bench_bsm_call(c: &mut Criterion) {
    let params = ModelParameters::new(1868.99, 1870.0, 0.2979, 0.003866, 1.0 / 52.0, 0.0232)
        .expect("valid parameters");
    let model = BlackScholesMerton::new(params);
    c.bench_function("bsm_price_call", |b| {
        b.iter(|| black_box(&model).price_call());
    });
}

criterion_group!(benches, bench_norm_cdf, bench_bsm_call);
criterion_main!(benches);
