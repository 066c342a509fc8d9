// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel walkthrough.
//!
//! Drive a headless carousel through loading, a drag, a flick, a wheel burst
//! and a breakpoint crossing, printing every event a renderer would apply.
//! Image sizes are made up, so no files are needed.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_walkthrough`
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_demos --example carousel_walkthrough`

use kurbo::{Point, Size, Vec2};
use understory_carousel::{AspectSample, Carousel, CarouselEvent, Item, SampleOutcome};

const RATIOS: [f64; 6] = [1.5, 0.75, 1.0, 16.0 / 9.0, 0.8, 1.25];

fn answer(carousel: &mut Carousel, now: f64) {
    let Some(request) = carousel.take_sample_request() else {
        return;
    };
    let samples = request
        .image_refs
        .iter()
        .enumerate()
        .map(|(i, _)| match RATIOS.get(i) {
            Some(&ratio) => AspectSample::Measured { ratio },
            None => AspectSample::Fallback,
        })
        .collect();
    let outcome = SampleOutcome {
        generation: request.generation,
        cross_axis_size: request.cross_axis_size,
        axis: request.axis,
        samples,
    };
    carousel.apply_sample(outcome, now);
}

fn flush(label: &str, carousel: &mut Carousel) {
    println!("-- {label}");
    for event in carousel.drain_events() {
        match event {
            CarouselEvent::Layout(layout) => println!(
                "   layout {:?} offset={} motion={:?} reset_stale={} extents={:?}",
                layout.axis,
                layout.strip_offset,
                layout.motion,
                layout.reset_stale_axis,
                layout.extents
            ),
            other => println!("   {other:?}"),
        }
    }
}

fn main() {
    understory_demos::init_tracing();

    let items = RATIOS
        .iter()
        .enumerate()
        .map(|(i, _)| Item::new(format!("work-{i}"), format!("/works/{i}.jpg"), format!("Work {i}")))
        .collect();

    let mut carousel = Carousel::default();
    carousel.set_viewport(Size::new(1280.0, 800.0), 0.0);
    carousel.set_items(items);
    answer(&mut carousel, 5.0);
    flush("loaded", &mut carousel);

    // Slow drag left by 250px, then release.
    carousel.pointer_down(Point::new(700.0, 400.0), 1000.0);
    for step in 1..=25 {
        let t = 1000.0 + 40.0 * f64::from(step);
        carousel.pointer_move(Point::new(700.0 - 10.0 * f64::from(step), 400.0), t);
    }
    carousel.pointer_up(2010.0);
    flush("slow drag", &mut carousel);

    // Quick 60px flick to the right.
    carousel.pointer_down(Point::new(600.0, 400.0), 3000.0);
    carousel.pointer_move(Point::new(660.0, 400.0), 3040.0);
    carousel.pointer_up(3045.0);
    flush("flick", &mut carousel);

    // Trackpad burst: many small deltas, one step.
    for i in 0..12 {
        carousel.wheel(Vec2::new(0.0, 9.0), 4000.0 + f64::from(i) * 8.0);
    }
    flush("wheel burst", &mut carousel);

    // Shrink below the breakpoint: the strip turns vertical.
    carousel.set_viewport(Size::new(420.0, 860.0), 5000.0);
    answer(&mut carousel, 5020.0);
    flush("narrow viewport", &mut carousel);

    let indicator = carousel.indicator();
    println!(
        "active={} stems={:?}",
        carousel.active_index(),
        indicator
            .stems()
            .iter()
            .map(|stem| stem.width)
            .collect::<Vec<_>>()
    );
}
