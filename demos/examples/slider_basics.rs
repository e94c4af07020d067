// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! A minimal host shell: commit layout, replay a drag gesture as cumulative
//! translations, and read the bound value and paint geometry back after
//! each event.
//!
//! Run:
//! - `cargo run -p glissade_demos --example slider_basics`

use glissade_control::{SharedValue, Slider};
use kurbo::{Size, Vec2};

fn main() {
    // The host owns the value; the slider gets a shared handle.
    let value = SharedValue::new(0.0);
    let mut slider = Slider::new(-10.0, 10.0, value.clone()).expect("valid slider");

    // The host measured the control at 300×20.
    slider.layout(Size::new(300.0, 20.0));
    println!("laid out: value {}, handle {:?}", value.get(), slider.position());

    // A drag: each update reports translation since the gesture started.
    for dx in [15.0, 45.0, 90.0, 150.0] {
        slider.drag_moved(Vec2::new(dx, 0.0));
        println!("drag {dx:>5} px → value {:>5}, handle x {}", value.get(), slider.position().x);
    }
    slider.drag_ended();

    // Paint whatever the host likes from the visuals breakdown.
    let visuals = slider.visuals().expect("laid out");
    println!("track {:?}", visuals.track);
    println!("fill  {:?}", visuals.fill);
    println!("knob  {:?}", visuals.handle);
}
