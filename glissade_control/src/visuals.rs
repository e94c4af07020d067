// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-ready slider geometry.
//!
//! The control does not render. [`Slider::visuals`] breaks the current
//! state down into three fills — the full track, the value-side run, and
//! the handle — that a host can blit with any renderer. Recompute after
//! every event; the pieces are plain kurbo shapes plus solid colors.

use kurbo::{Circle, Rect};

use glissade_scale::Axis;

use crate::binding::ValueBinding;
use crate::config::Color;
use crate::slider::Slider;

/// The visual pieces of a slider, in local coordinates and paint order.
///
/// The track bar is centered on the cross axis. The filled run covers the
/// value side of the handle: from the track start for horizontal sliders,
/// from the bottom for vertical ones (larger value, taller fill).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visuals {
    /// The whole track bar, painted first.
    pub track: Rect,
    /// The filled (value-side) run of the track, painted over it.
    pub fill: Rect,
    /// The handle disc, painted last.
    pub handle: Circle,
    /// Color for [`Visuals::fill`].
    pub on_tint: Color,
    /// Color for [`Visuals::track`].
    pub off_tint: Color,
    /// Color for [`Visuals::handle`].
    pub handle_color: Color,
}

impl<B: ValueBinding> Slider<B> {
    /// The paint-ready geometry for the current state, or `None` before the
    /// first layout commit.
    pub fn visuals(&self) -> Option<Visuals> {
        let size = self.measured_size()?;
        let config = self.config();
        let axis = config.axis;
        let length = axis.pick(size.width, size.height);
        let center = axis.pick_cross(size.width, size.height) / 2.0;
        let half_bar = config.bar_height / 2.0;
        let handle = Circle::new(self.position(), config.handle_size / 2.0);

        let (track, fill) = match axis {
            Axis::Horizontal => (
                Rect::new(0.0, center - half_bar, length, center + half_bar),
                Rect::new(0.0, center - half_bar, handle.center.x, center + half_bar),
            ),
            Axis::Vertical => (
                Rect::new(center - half_bar, 0.0, center + half_bar, length),
                Rect::new(center - half_bar, handle.center.y, center + half_bar, length),
            ),
        };

        Some(Visuals {
            track,
            fill,
            handle,
            on_tint: config.on_tint,
            off_tint: config.off_tint,
            handle_color: config.handle_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::SharedValue;
    use crate::config::SliderConfig;
    use kurbo::{Point, Size, Vec2};

    #[test]
    fn no_visuals_before_layout() {
        let slider = Slider::new(0.0, 1.0, SharedValue::new(0.0)).unwrap();
        assert!(slider.visuals().is_none());
    }

    #[test]
    fn horizontal_fill_runs_from_track_start_to_handle() {
        let mut slider = Slider::new(-10.0, 10.0, SharedValue::new(5.0)).unwrap();
        slider.layout(Size::new(400.0, 30.0));
        let v = slider.visuals().unwrap();

        assert_eq!(v.track, Rect::new(0.0, 14.0, 400.0, 16.0));
        assert_eq!(v.fill, Rect::new(0.0, 14.0, 300.0, 16.0));
        assert_eq!(v.handle, Circle::new(Point::new(300.0, 15.0), 5.0));
    }

    #[test]
    fn vertical_fill_rises_from_the_bottom() {
        let config = SliderConfig {
            axis: crate::Axis::Vertical,
            bar_height: 4.0,
            ..Default::default()
        };
        let mut slider =
            Slider::with_config(0.0, 100.0, SharedValue::new(75.0), config, 1.0).unwrap();
        slider.layout(Size::new(20.0, 200.0));
        let v = slider.visuals().unwrap();

        // Value 75 sits a quarter of the way down; the fill spans handle→bottom.
        assert_eq!(v.track, Rect::new(8.0, 0.0, 12.0, 200.0));
        assert_eq!(v.fill, Rect::new(8.0, 50.0, 12.0, 200.0));
        assert_eq!(v.handle.center, Point::new(10.0, 50.0));
    }

    #[test]
    fn fill_follows_the_unstepped_handle_during_drag() {
        let mut slider = Slider::with_config(
            -10.0,
            10.0,
            SharedValue::new(5.0),
            SliderConfig::default(),
            2.0,
        )
        .unwrap();
        slider.layout(Size::new(400.0, 30.0));
        slider.drag_moved(Vec2::new(1.0, 0.0));

        let v = slider.visuals().unwrap();
        assert_eq!(v.fill.x1, 301.0);
        assert_eq!(v.handle.center.x, 301.0);
    }

    #[test]
    fn colors_come_from_the_config() {
        let mut slider = Slider::new(0.0, 1.0, SharedValue::new(0.5)).unwrap();
        slider.layout(Size::new(100.0, 20.0));
        let v = slider.visuals().unwrap();
        let config = slider.config();
        assert_eq!(v.on_tint, config.on_tint);
        assert_eq!(v.off_tint, config.off_tint);
        assert_eq!(v.handle_color, config.handle_color);
    }
}
