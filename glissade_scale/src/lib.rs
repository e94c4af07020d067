// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_scale --heading-base-level=0

//! Glissade Scale: the numeric core of a slider.
//!
//! Glissade Scale is a reusable building block for slider-like controls.
//!
//! - Map a value inside a closed [`Span`] to a pixel offset along a track, and back.
//! - Invert the mapping for vertical tracks so a larger value sits nearer the top.
//! - Quantize drag-derived values onto a fixed step lattice with [`quantize`].
//!
//! The mapping is total: values are clamped into the span and offsets into
//! `[0, length]` before conversion, so overshooting drag input can never
//! produce an out-of-range value. A degenerate span (`lower == upper`) maps
//! to the lower bound's position instead of dividing by zero.
//!
//! It works on plain `f64` and does not depend on any geometry crate.
//! Higher layers (like [`glissade_control`](https://docs.rs/glissade_control))
//! translate pointer gestures into offsets and feed them here.
//!
//! # Example
//!
//! ```rust
//! use glissade_scale::{Axis, Scale, Span};
//!
//! // A 400-pixel horizontal track over [-10, 10].
//! let scale = Scale::new(Span::new(-10.0, 10.0), 400.0, Axis::Horizontal);
//!
//! // Value 5.0 sits three quarters along the track.
//! assert_eq!(scale.offset_of(5.0), 300.0);
//! assert_eq!(scale.value_at(300.0), 5.0);
//!
//! // Overshoot is clamped, never out of range.
//! assert_eq!(scale.value_at(1e6), 10.0);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for spans, lengths, and offsets. Debug builds
//! may assert. Step quantization uses the sign-preserving `%` remainder of
//! the host float type.

#![no_std]

pub mod scale;
pub mod step;
pub mod types;

pub use scale::Scale;
pub use step::quantize;
pub use types::{Axis, Span};
