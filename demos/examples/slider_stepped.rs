// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step quantization.
//!
//! Drags a stepped slider one pixel at a time and prints how the handle
//! tracks the pointer while the bound value snaps onto the step lattice.
//!
//! Run:
//! - `cargo run -p glissade_demos --example slider_stepped`

use glissade_control::{SharedValue, Slider, SliderConfig};
use kurbo::{Size, Vec2};

fn main() {
    let value = SharedValue::new(0.0);
    let mut slider = Slider::with_config(
        0.0,
        10.0,
        value.clone(),
        SliderConfig::default(),
        2.5,
    )
    .expect("valid slider");

    // 100 px over a width-10 span: 10 px per unit, 25 px per step.
    slider.layout(Size::new(100.0, 20.0));

    println!("pixel-by-pixel drag, step 2.5:");
    for px in 1..=60 {
        slider.drag_moved(Vec2::new(f64::from(px), 0.0));
        println!("  +{px:>2} px → handle x {:>4}, value {}", slider.position().x, value.get());
    }
    slider.drag_ended();
    println!("settled at value {}", value.get());
}
