// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for drag-release classification through the public `StripDrag` API.
//!
//! A release depends only on net movement and release velocity, never on the
//! path the pointer took to get there.

use kurbo::Point;
use understory_gesture::drag::StripDrag;
use understory_gesture::release::{
    GestureThresholds, NavigationIntent, ReleaseKind, StepDirection, classify_release,
};
use understory_strip_layout::{Axis, StripLayout, StripMetrics};

const EXTENTS: [f64; 6] = [420.0, 380.0, 512.0, 300.0, 640.0, 256.0];

fn release_after(path: &[(f64, f64)], active: usize) -> (ReleaseKind, NavigationIntent) {
    let layout = StripLayout::new(&EXTENTS, StripMetrics::default(), 1024.0);
    let mut drag = StripDrag::default();
    drag.begin(
        Axis::Horizontal,
        Point::new(500.0, 0.0),
        layout.centering_offset(active),
        0.0,
    );
    for &(x, t) in path {
        drag.update(Point::new(x, 0.0), t, &layout, active);
    }
    let release = drag.end(&layout, active).unwrap();
    (release.kind, release.intent)
}

#[test]
fn classification_matches_the_pure_classifier() {
    let thresholds = GestureThresholds::default();
    for distance in [-300.0, -40.0, -4.0, 0.0, 4.0, 40.0, 300.0] {
        for velocity in [-3.0, -0.6, -0.2, 0.0, 0.2, 0.6, 3.0] {
            let kind = classify_release(distance, velocity, &thresholds);
            if distance.abs() < thresholds.click_distance {
                assert_eq!(kind, ReleaseKind::Click);
            } else if velocity.abs() > thresholds.flick_velocity {
                assert!(matches!(kind, ReleaseKind::Flick(_)));
            } else {
                assert_eq!(kind, ReleaseKind::Snap);
            }
        }
    }
}

#[test]
fn wandering_path_ending_close_to_start_is_a_click() {
    let (kind, intent) = release_after(&[(300.0, 10.0), (700.0, 20.0), (502.0, 30.0)], 2);
    assert_eq!(kind, ReleaseKind::Click);
    assert_eq!(intent, NavigationIntent::Stay);
}

#[test]
fn long_slow_drag_snaps_multiple_slides() {
    // Four collapsed slots to the left at 0.1 px/ms.
    let path: Vec<(f64, f64)> = (1..=60)
        .map(|i| (500.0 - 10.0 * f64::from(i), 100.0 * f64::from(i)))
        .collect();
    let (kind, intent) = release_after(&path, 0);
    assert_eq!(kind, ReleaseKind::Snap);
    assert_eq!(intent, NavigationIntent::Commit(3));
}

#[test]
fn long_fast_drag_still_moves_one_slide() {
    let (kind, intent) = release_after(&[(100.0, 100.0), (-100.0, 110.0)], 0);
    assert_eq!(kind, ReleaseKind::Flick(StepDirection::Forward));
    assert_eq!(intent, NavigationIntent::Commit(1));
}

#[test]
fn backward_flick_at_the_start_rubber_bands() {
    let layout = StripLayout::new(&EXTENTS, StripMetrics::default(), 1024.0);
    let (kind, intent) = release_after(&[(560.0, 10.0)], 0);
    assert_eq!(kind, ReleaseKind::Flick(StepDirection::Backward));
    assert_eq!(
        intent,
        NavigationIntent::Return {
            offset: layout.centering_offset(0)
        }
    );
}
