// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_control --heading-base-level=0

//! Glissade Control: a host-agnostic slider.
//!
//! ## Overview
//!
//! This crate implements the interactive core of a slider: a draggable
//! handle on a track whose position encodes a numeric value inside a closed
//! span. It does not render and it does not listen for input. Instead, the
//! host UI delivers three kinds of events — layout commits, pointer-drag
//! updates, and external-value-change notifications — and reads back the
//! handle position and paint-ready [`Visuals`] after each one.
//!
//! ## Inputs
//!
//! - [`Slider::layout`]: the host's "layout committed" callback. Call it
//!   once initial geometry is known and again whenever geometry changes.
//! - [`Slider::drag_moved`] / [`Slider::drag_ended`]: a pointer-drag
//!   sequence. Each update carries the *cumulative* translation since the
//!   drag started, as host gesture recognizers report it; deltas are applied
//!   against the baseline captured at the previous layout or drag end.
//! - [`Slider::value_changed`]: the host (or another component) wrote the
//!   bound value. The handle is repositioned; the drag baseline is not.
//!
//! Events must be delivered in arrival order. The control is
//! single-threaded and never initiates work of its own.
//!
//! ## Value binding
//!
//! The bound value is owned by the host and shared through a
//! [`ValueBinding`]. The control reads it to position the handle and writes
//! drag-derived values through the same channel. [`SharedValue`] is a
//! ready-made single-threaded cell; the control's own writes are remembered
//! so an echo arriving back via [`Slider::value_changed`] is ignored rather
//! than re-triggering a sync.
//!
//! ## Clamping and stepping
//!
//! Every edge input is handled by clamping, not by signaling failure:
//! out-of-range values are silently corrected into the span, and drag
//! overshoot is pinned to the track run. Step quantization snaps
//! drag-derived values (and only those) onto the step lattice. The only
//! errors are construction-time validation ([`SliderError`]).
//!
//! ## Minimal usage
//!
//! ```
//! use glissade_control::{SharedValue, Slider};
//! use kurbo::{Size, Vec2};
//!
//! let value = SharedValue::new(5.0);
//! let mut slider = Slider::new(-10.0, 10.0, value.clone()).unwrap();
//!
//! // Layout commits: a 400×30 box, so a 400-pixel horizontal track.
//! slider.layout(Size::new(400.0, 30.0));
//! assert_eq!(slider.position().x, 300.0);
//!
//! // Drag 50 pixels right and release. The raw value 7.5 snaps onto the
//! // default step lattice (step 1).
//! slider.drag_moved(Vec2::new(50.0, 0.0));
//! slider.drag_ended();
//! assert_eq!(value.get(), 7.0);
//!
//! // Paint whatever the host likes.
//! let visuals = slider.visuals().unwrap();
//! assert_eq!(visuals.handle.center, slider.position());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Build with the `libm` feature
//! instead of the default `std` for no_std targets.

#![no_std]

extern crate alloc;

pub mod binding;
pub mod config;
pub mod slider;
pub mod visuals;

pub use binding::{SharedValue, ValueBinding};
pub use config::{Color, SliderConfig, SliderError};
pub use slider::{DragPhase, Slider};
pub use visuals::Visuals;

// Re-export the numeric core so hosts need only one import.
pub use glissade_scale::{Axis, Scale, Span, quantize};
