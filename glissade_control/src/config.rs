// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static configuration and construction-time validation.
//!
//! A [`SliderConfig`] is an immutable value object fixed for the lifetime of
//! one control instance. All validation happens when a
//! [`Slider`](crate::Slider) is constructed; after that, no operation can
//! fail (edge inputs are clamped, see the crate docs).

use color::palette;
use glissade_scale::Axis;
use thiserror::Error;

/// Solid sRGB color used by slider visuals.
///
/// This is the same `AlphaColor<Srgb>` that peniko re-exports as its color
/// type, so hosts on that stack can pass values through unchanged.
pub type Color = color::AlphaColor<color::Srgb>;

/// Visual and orientation parameters of a slider.
///
/// Everything here is presentation: only [`SliderConfig::axis`] affects the
/// value mapping. Sizes are in the host's logical pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Orientation of the track. Horizontal by default.
    pub axis: Axis,
    /// Color of the filled (value-side) portion of the track.
    pub on_tint: Color,
    /// Color of the unfilled portion of the track.
    pub off_tint: Color,
    /// Thickness of the track bar.
    pub bar_height: f64,
    /// Diameter of the draggable handle.
    pub handle_size: f64,
    /// Fill color of the handle.
    pub handle_color: Color,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            on_tint: palette::css::BLUE,
            off_tint: palette::css::BLACK,
            bar_height: 2.0,
            handle_size: 10.0,
            handle_color: palette::css::WHITE,
        }
    }
}

impl SliderConfig {
    /// The fixed extent the control reports across the active axis.
    ///
    /// Along the active axis the control imposes no intrinsic size (the host
    /// decides the track length); across it, the handle or the bar —
    /// whichever is thicker — sets the extent.
    pub fn cross_size(&self) -> f64 {
        self.handle_size.max(self.bar_height)
    }

    pub(crate) fn validate(&self) -> Result<(), SliderError> {
        for (name, value) in [
            ("bar_height", self.bar_height),
            ("handle_size", self.handle_size),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SliderError::NegativeSize { name, value });
            }
        }
        Ok(())
    }
}

/// Construction-time validation failures.
///
/// These are the only errors in the crate; every runtime edge case is
/// handled by clamping instead.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SliderError {
    /// The span's bounds are unordered (or NaN).
    #[error("span bounds are not ordered: [{lower}, {upper}]")]
    ReversedSpan {
        /// The offending lower bound.
        lower: f64,
        /// The offending upper bound.
        upper: f64,
    },
    /// The step is zero, negative, or non-finite. Quantization divides by
    /// the step, so it must be strictly positive.
    #[error("step must be positive and finite, got {0}")]
    InvalidStep(f64),
    /// A configured size is negative or non-finite.
    #[error("configured size must be finite and non-negative: {name} = {value}")]
    NegativeSize {
        /// Which configuration field was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}
