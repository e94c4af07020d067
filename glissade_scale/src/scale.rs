// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bidirectional value ↔ offset mapping.
//!
//! ## Overview
//!
//! A [`Scale`] relates a value inside a [`Span`] to a pixel offset along a
//! track of known length. The mapping is linear; for a vertical axis it is
//! inverted top-to-bottom so a larger value corresponds to a position nearer
//! the top, matching conventional vertical slider semantics.
//!
//! Both directions clamp their input first — values into the span, offsets
//! into `[0, length]` — so the round trip never escapes either domain.

use crate::types::{Axis, Span};

/// A linear mapping between a value span and a track of pixels.
///
/// Offsets are measured from the track start: the left edge for
/// [`Axis::Horizontal`], the top edge for [`Axis::Vertical`].
///
/// ## Degenerate inputs
///
/// - Zero-width span: every offset maps to the lower bound, and the lower
///   bound maps to its own position (offset `0` horizontally, `length`
///   vertically). The division by the span length is guarded; no NaN is
///   produced.
/// - Zero track length: [`Scale::value_at`] returns the lower bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    /// The value domain.
    pub span: Span,
    /// Track length in pixels along the active axis. Negative lengths are
    /// treated as zero.
    pub length: f64,
    /// Orientation of the track.
    pub axis: Axis,
}

impl Scale {
    /// Create a scale over `span` for a track of `length` pixels.
    pub fn new(span: Span, length: f64, axis: Axis) -> Self {
        debug_assert!(!length.is_nan(), "track length must not be NaN");
        Self {
            span,
            length: length.max(0.0),
            axis,
        }
    }

    /// The offset along the track for `value`.
    ///
    /// `value` is clamped into the span first, so the result always lies in
    /// `[0, length]`.
    pub fn offset_of(&self, value: f64) -> f64 {
        let fraction = if self.span.is_degenerate() {
            // Zero-width span: pin to the lower bound's position.
            0.0
        } else {
            (self.span.clamp(value) - self.span.lower()) / self.span.length()
        };
        match self.axis {
            Axis::Horizontal => self.length * fraction,
            Axis::Vertical => self.length * (1.0 - fraction),
        }
    }

    /// The value at `offset` pixels along the track.
    ///
    /// `offset` is clamped into `[0, length]` first, so the result always
    /// lies inside the span.
    pub fn value_at(&self, offset: f64) -> f64 {
        if self.span.is_degenerate() || self.length <= 0.0 {
            return self.span.lower();
        }
        let clamped = self.clamp_offset(offset);
        let fraction = match self.axis {
            Axis::Horizontal => clamped / self.length,
            Axis::Vertical => 1.0 - clamped / self.length,
        };
        self.span.lower() + fraction * self.span.length()
    }

    /// Clamp an offset into the track run `[0, length]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.length)
    }
}
