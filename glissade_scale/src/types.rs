// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive domain types: value spans and track axes.

/// A closed interval `[lower, upper]` over `f64`.
///
/// The span is the value domain of a slider. It is immutable for the
/// lifetime of a control instance; every value the scale produces lies
/// inside it.
///
/// Invariant: `lower <= upper`. The zero-width case `lower == upper` is
/// allowed and handled explicitly by [`Scale`](crate::Scale) (see
/// [`Span::is_degenerate`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    lower: f64,
    upper: f64,
}

impl Span {
    /// Create a span from its bounds.
    ///
    /// Debug builds assert `lower <= upper`; release builds trust the
    /// caller. Layers that accept untrusted bounds should validate first
    /// (the control crate rejects reversed spans at construction).
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!(lower <= upper, "span bounds must be ordered");
        Self { lower, upper }
    }

    /// The lower bound.
    pub const fn lower(self) -> f64 {
        self.lower
    }

    /// The upper bound.
    pub const fn upper(self) -> f64 {
        self.upper
    }

    /// The width of the span, `upper - lower`.
    pub fn length(self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the span has zero width.
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Whether `value` lies inside the span (bounds inclusive).
    pub fn contains(self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Clamp `value` into the span.
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

/// Orientation of a track: which screen dimension carries the value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Value runs left to right.
    #[default]
    Horizontal,
    /// Value runs bottom to top (larger value nearer the top).
    Vertical,
}

impl Axis {
    /// Select the component of an `(x, y)` pair that lies along this axis.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => x,
            Self::Vertical => y,
        }
    }

    /// Select the component of an `(x, y)` pair across this axis.
    pub fn pick_cross(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Horizontal => y,
            Self::Vertical => x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessors_and_length() {
        let s = Span::new(-10.0, 10.0);
        assert_eq!(s.lower(), -10.0);
        assert_eq!(s.upper(), 10.0);
        assert_eq!(s.length(), 20.0);
        assert!(!s.is_degenerate());
    }

    #[test]
    fn span_clamp_and_contains() {
        let s = Span::new(0.0, 5.0);
        assert_eq!(s.clamp(-1.0), 0.0);
        assert_eq!(s.clamp(7.5), 5.0);
        assert_eq!(s.clamp(2.5), 2.5);
        assert!(s.contains(0.0));
        assert!(s.contains(5.0));
        assert!(!s.contains(5.000001));
    }

    #[test]
    fn span_degenerate() {
        let s = Span::new(3.0, 3.0);
        assert!(s.is_degenerate());
        assert_eq!(s.length(), 0.0);
        assert_eq!(s.clamp(100.0), 3.0);
    }

    #[test]
    fn axis_pick_components() {
        assert_eq!(Axis::Horizontal.pick(1.0, 2.0), 1.0);
        assert_eq!(Axis::Vertical.pick(1.0, 2.0), 2.0);
        assert_eq!(Axis::Horizontal.pick_cross(1.0, 2.0), 2.0);
        assert_eq!(Axis::Vertical.pick_cross(1.0, 2.0), 1.0);
    }

    #[test]
    fn axis_default_is_horizontal() {
        assert_eq!(Axis::default(), Axis::Horizontal);
    }
}
