// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider control: drag tracking and state synchronization.
//!
//! ## Overview
//!
//! [`Slider`] keeps three pieces of state consistent under three change
//! sources:
//!
//! - the bound value (host-owned, shared through a [`ValueBinding`]),
//! - the handle position (derived, never authoritative),
//! - the reference baseline (position/value snapshotted at the previous
//!   layout or drag end, the anchor for cumulative drag deltas).
//!
//! Layout commits recompute position from the value and reset the baseline.
//! Drag updates apply the cumulative translation against the baseline,
//! clamp to the track run, derive a value, quantize it, and write it out.
//! External value changes reposition the handle only; the baseline is
//! deliberately left alone (see [`Slider::value_changed`]).
//!
//! ## Drag state machine
//!
//! Idle → Dragging on the first drag update; Dragging → Settled on drag
//! end. Settled is behaviorally identical to Idle — it exists to mark that
//! a fresh baseline was captured. There is no cancellation beyond the drag
//! ending, and no concurrent drag streams are expected for one control.

use kurbo::{Point, Size, Vec2};

use glissade_scale::{Axis, Scale, Span, quantize};

use crate::binding::ValueBinding;
use crate::config::{SliderConfig, SliderError};

/// Phase of the drag tracker.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DragPhase {
    /// No drag seen yet.
    #[default]
    Idle,
    /// A drag is in progress; updates carry cumulative translation.
    Dragging,
    /// A drag ended and its end state became the new baseline.
    /// Behaviorally identical to [`DragPhase::Idle`].
    Settled,
}

/// Position/value pair captured at the previous layout or drag end.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Baseline {
    position: Point,
    value: f64,
}

/// A draggable slider mapping pointer position to a value in a closed span.
///
/// Construct with [`Slider::new`] (default configuration, step 1) or
/// [`Slider::with_config`]. The span, step, and configuration are fixed for
/// the lifetime of the control; the bound value lives behind `B`.
///
/// See the [crate docs](crate) for the host contract and a usage example.
#[derive(Clone, Debug)]
pub struct Slider<B: ValueBinding> {
    span: Span,
    step: f64,
    config: SliderConfig,
    binding: B,
    /// Measured bounding box; `None` until the first layout commit.
    size: Option<Size>,
    position: Point,
    baseline: Option<Baseline>,
    phase: DragPhase,
    /// The last value this control wrote itself. Used to recognize our own
    /// write echoing back through the host's change notification; consumed
    /// by the first notification it matches.
    committed: Option<f64>,
}

impl<B: ValueBinding> Slider<B> {
    /// Create a slider over `[lower, upper]` with the default configuration
    /// and a step of 1.
    ///
    /// Returns [`SliderError::ReversedSpan`] when the bounds are unordered
    /// or NaN. An out-of-span initial value in the binding is not an error;
    /// it is clamped at the first layout commit.
    pub fn new(lower: f64, upper: f64, binding: B) -> Result<Self, SliderError> {
        Self::with_config(lower, upper, binding, SliderConfig::default(), 1.0)
    }

    /// Create a slider with an explicit configuration and step.
    ///
    /// The step must be strictly positive and finite
    /// ([`SliderError::InvalidStep`]); configured sizes must be finite and
    /// non-negative ([`SliderError::NegativeSize`]).
    pub fn with_config(
        lower: f64,
        upper: f64,
        binding: B,
        config: SliderConfig,
        step: f64,
    ) -> Result<Self, SliderError> {
        if !(lower <= upper) {
            return Err(SliderError::ReversedSpan { lower, upper });
        }
        if !(step > 0.0 && step.is_finite()) {
            return Err(SliderError::InvalidStep(step));
        }
        config.validate()?;
        Ok(Self {
            span: Span::new(lower, upper),
            step,
            config,
            binding,
            size: None,
            position: Point::ZERO,
            baseline: None,
            phase: DragPhase::Idle,
            committed: None,
        })
    }

    /// Layout committed: the host measured the control at `size`.
    ///
    /// Derives the track length along the active axis, silently clamps the
    /// bound value into the span (writing the correction back), recomputes
    /// the handle position from the value, and resets the drag baseline.
    /// Call this again whenever geometry changes.
    pub fn layout(&mut self, size: Size) {
        self.size = Some(size);
        let raw = self.binding.get();
        let value = self.span.clamp(raw);
        if value != raw {
            self.binding.set(value);
            self.committed = Some(value);
        }
        let scale = self.scale_for(size);
        self.position = self.point_at(scale.offset_of(value), size);
        self.baseline = Some(Baseline {
            position: self.position,
            value,
        });
        log::debug!(
            "slider layout: {} px track, value {value}, handle at {:?}",
            scale.length,
            self.position
        );
    }

    /// A drag update: `translation` is the cumulative pointer displacement
    /// since the drag started.
    ///
    /// The first update of a gesture transitions the tracker to
    /// [`DragPhase::Dragging`]; the baseline read then stays fixed until
    /// [`Slider::drag_ended`]. The raw offset (baseline offset + the
    /// translation component along the axis) is clamped to the track run,
    /// converted to a value, quantized onto the step lattice, clamped into
    /// the span, and written through the binding. The handle takes the
    /// unstepped clamped offset, so it tracks the pointer while the value
    /// snaps; the two re-converge at the next layout or external write.
    ///
    /// Ignored before the first layout commit.
    pub fn drag_moved(&mut self, translation: Vec2) {
        let Some(size) = self.size else { return };
        let Some(baseline) = self.baseline else {
            return;
        };
        if self.phase != DragPhase::Dragging {
            self.phase = DragPhase::Dragging;
            log::debug!("slider drag begin at value {}", baseline.value);
        }
        let axis = self.config.axis;
        let scale = self.scale_for(size);
        let reference = axis.pick(baseline.position.x, baseline.position.y);
        let offset = scale.clamp_offset(reference + axis.pick(translation.x, translation.y));
        let value = self.span.clamp(quantize(scale.value_at(offset), self.step));
        self.binding.set(value);
        self.committed = Some(value);
        self.position = self.point_at(offset, size);
        log::trace!("slider drag: offset {offset}, value {value}");
    }

    /// The drag gesture ended.
    ///
    /// Overwrites the reference baseline with the current position and
    /// value, fixing the anchor for the next gesture, and settles the
    /// tracker. A no-op unless a drag is in progress.
    pub fn drag_ended(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let value = self.binding.get();
        self.baseline = Some(Baseline {
            position: self.position,
            value,
        });
        self.phase = DragPhase::Settled;
        log::debug!("slider drag end at value {value}");
    }

    /// The host reports that the bound value changed outside a drag.
    ///
    /// If the new value is merely this control's own write echoing back, the
    /// notification is ignored. Otherwise the value is clamped into the span
    /// (the correction written back if needed) and the handle repositioned.
    /// This is a display-only refresh: the drag baseline keeps its previous
    /// snapshot, so only layout commits and drag ends move the anchor.
    ///
    /// Echo suppression is one-shot per control write: the check consumes
    /// the remembered value, so a later genuine host write that happens to
    /// equal an old drag-derived value still syncs the handle.
    pub fn value_changed(&mut self) {
        let raw = self.binding.get();
        if self.committed.take() == Some(raw) {
            return;
        }
        let value = self.span.clamp(raw);
        if value != raw {
            self.binding.set(value);
            self.committed = Some(value);
        }
        let Some(size) = self.size else { return };
        let scale = self.scale_for(size);
        self.position = self.point_at(scale.offset_of(value), size);
    }

    /// The current bound value.
    pub fn value(&self) -> f64 {
        self.binding.get()
    }

    /// The handle center in the control's local coordinates.
    ///
    /// Derived state: recomputable from value, span, axis, and track
    /// length, and meaningless before the first layout commit.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The current drag phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The value span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The step increment.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The fixed extent the control reports across the active axis.
    ///
    /// See [`SliderConfig::cross_size`].
    pub fn cross_size(&self) -> f64 {
        self.config.cross_size()
    }

    /// The measured bounding box, if layout has committed.
    pub fn measured_size(&self) -> Option<Size> {
        self.size
    }

    /// The track length along the active axis, if layout has committed.
    pub fn track_length(&self) -> Option<f64> {
        self.size
            .map(|size| self.config.axis.pick(size.width, size.height))
    }

    /// The scale for the current measured size.
    pub fn scale(&self) -> Option<Scale> {
        self.size.map(|size| self.scale_for(size))
    }

    fn scale_for(&self, size: Size) -> Scale {
        let axis = self.config.axis;
        Scale::new(self.span, axis.pick(size.width, size.height), axis)
    }

    /// Place the handle at `offset` along the axis, pinned to the
    /// cross-axis center.
    fn point_at(&self, offset: f64, size: Size) -> Point {
        let cross = self.config.axis.pick_cross(size.width, size.height) / 2.0;
        match self.config.axis {
            Axis::Horizontal => Point::new(offset, cross),
            Axis::Vertical => Point::new(cross, offset),
        }
    }
}
