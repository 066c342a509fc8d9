// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_strip_layout::{StripLayout, StripMetrics};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Extent between 200 and 800.
    fn extent(&mut self) -> f64 {
        200.0 + f64::from(self.next_u32() % 601)
    }
}

fn extents(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.extent()).collect()
}

fn bench_strip_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_strip_layout");

    for &n in &[16_usize, 256, 4_096] {
        let sizes = extents(n, 0x5EED_0000_0000_0001);
        let layout = StripLayout::new(&sizes, StripMetrics::default(), 1280.0);
        let active = n / 2;
        let centered = layout.centering_offset(active);

        group.bench_function(format!("centering_offset(n={n})"), |b| {
            b.iter(|| black_box(layout.centering_offset(black_box(active))));
        });

        group.bench_function(format!("closest_index(n={n})"), |b| {
            let mut drift = 0.0;
            b.iter(|| {
                drift = (drift + 37.0) % 900.0;
                black_box(layout.closest_index(black_box(centered - drift), active))
            });
        });

        group.bench_function(format!("frame(n={n})"), |b| {
            b.iter(|| black_box(layout.frame(black_box(active))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strip_layout);
criterion_main!(benches);
