// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step quantization onto a fixed-increment lattice.

/// Quantize `value` onto the lattice of multiples of `step`.
///
/// Computes `rem = value % step` (the sign-preserving float remainder) and
/// returns `value - rem` when the remainder is nonzero, `value` unchanged
/// otherwise. The result is always a lattice multiple no further from zero
/// than `value`; for positive values this truncates toward the track start.
///
/// Requires `step > 0` and finite; debug builds assert. Callers that accept
/// untrusted steps must validate first (the control crate rejects
/// non-positive steps at construction).
///
/// Values already on the lattice pass through bit-exact:
///
/// ```rust
/// use glissade_scale::quantize;
/// assert_eq!(quantize(6.0, 2.0), 6.0);
/// assert_eq!(quantize(6.9, 2.0), 6.0);
/// assert_eq!(quantize(-6.9, 2.0), -6.0);
/// ```
pub fn quantize(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0 && step.is_finite(), "step must be positive");
    let rem = value % step;
    if rem == 0.0 { value } else { value - rem }
}
