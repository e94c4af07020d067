// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical orientation and external sync.
//!
//! A vertical slider reads larger values nearer the top. This shell drags
//! the handle upward, then mutates the bound value from the host side and
//! notifies the control so it repositions the handle.
//!
//! Run:
//! - `cargo run -p glissade_demos --example slider_vertical`

use glissade_control::{Axis, SharedValue, Slider, SliderConfig};
use kurbo::{Size, Vec2};

fn main() {
    let value = SharedValue::new(20.0);
    let config = SliderConfig {
        axis: Axis::Vertical,
        ..Default::default()
    };
    let mut slider =
        Slider::with_config(0.0, 100.0, value.clone(), config, 1.0).expect("valid slider");

    slider.layout(Size::new(24.0, 200.0));
    println!("value {} → handle y {}", value.get(), slider.position().y);

    // Dragging up (negative y) raises the value.
    slider.drag_moved(Vec2::new(0.0, -80.0));
    slider.drag_ended();
    println!("dragged 80 px up → value {}, handle y {}", value.get(), slider.position().y);

    // The host writes the value directly; the control only repositions.
    value.set(95.0);
    slider.value_changed();
    println!("host wrote 95 → handle y {}", slider.position().y);

    // Out-of-range host writes are corrected, not rejected.
    value.set(1000.0);
    slider.value_changed();
    println!("host wrote 1000 → value {}, handle y {}", value.get(), slider.position().y);
}
