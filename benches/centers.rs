// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box; // Use std::hint::black_box
use trigon::geometry::{CenterKind, Triangle};

fn center_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("centers");

    let triangle = Triangle::default();

    for kind in CenterKind::ALL {
        group.bench_function(format!("{kind}").to_lowercase(), |b| {
            b.iter(|| {
                // Use black_box to prevent the compiler from optimizing away the call
                let _ = black_box(kind.position(black_box(&triangle)));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, center_benchmark);
criterion_main!(benches);
