// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_carousel::{AspectSample, Carousel, Item, SampleOutcome};

fn loaded(n: usize) -> Carousel {
    let mut carousel = Carousel::default();
    carousel.set_viewport(Size::new(1280.0, 800.0), 0.0);
    carousel.set_items(
        (0..n)
            .map(|i| Item::new(format!("{i}"), format!("{i}.jpg"), String::new()))
            .collect(),
    );
    let request = carousel
        .take_sample_request()
        .expect("non-empty carousel requests a sample");
    let samples = (0..n)
        .map(|i| AspectSample::Measured {
            ratio: 0.5 + (i % 7) as f64 * 0.25,
        })
        .collect();
    carousel.apply_sample(
        SampleOutcome {
            generation: request.generation,
            cross_axis_size: request.cross_axis_size,
            axis: request.axis,
            samples,
        },
        0.0,
    );
    carousel.set_active_index(n / 2, 0.0);
    carousel.drain_events();
    carousel
}

fn bench_carousel_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_carousel");

    for &n in &[16_usize, 256] {
        group.bench_function(format!("drag_60_moves(n={n})"), |b| {
            b.iter_batched(
                || loaded(n),
                |mut carousel| {
                    carousel.pointer_down(Point::new(640.0, 400.0), 1000.0);
                    for step in 1..=60 {
                        let t = 1000.0 + 16.0 * f64::from(step);
                        carousel.pointer_move(Point::new(640.0 - 8.0 * f64::from(step), 400.0), t);
                    }
                    carousel.pointer_up(2000.0);
                    black_box(carousel.drain_events())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_carousel_drag);
criterion_main!(benches);
