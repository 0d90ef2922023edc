use std::num::NonZeroUsize;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quaterp_core::{interpolate, Quat};

fn bench_interpolate(c: &mut Criterion) {
    let q1 = Quat::IDENTITY;
    let q2 = Quat::new(0.0, 0.0, std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2);

    for count in [8usize, 256, 4096] {
        let n = NonZeroUsize::new(count).unwrap();
        c.bench_function(&format!("interpolate_{count}"), |b| {
            b.iter(|| interpolate(black_box(q1), black_box(q2), n).unwrap())
        });
    }
}

criterion_group!(benches, bench_interpolate);
criterion_main!(benches);
