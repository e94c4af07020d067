// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-owned value bindings.
//!
//! The bound value is the one resource the control shares with its host.
//! A [`ValueBinding`] is the two-way channel: the control reads through it
//! to position the handle and writes drag-derived values back through it.
//! Both sides run on the same single-threaded event loop, so updates are
//! atomic at the granularity of one event handler and no locking exists.

use alloc::rc::Rc;
use core::cell::Cell;

/// Read/write access to the host-owned slider value.
///
/// Implement this to adapt the control to whatever state mechanism the host
/// uses (an observable cell, a component field behind a setter, a reducer).
/// [`SharedValue`] is a ready-made implementation for plain shared state.
///
/// Hosts that observe the value from their own side should notify the
/// control of external writes via
/// [`Slider::value_changed`](crate::Slider::value_changed); the control
/// distinguishes its own echoed writes and ignores them.
pub trait ValueBinding {
    /// Read the current value.
    fn get(&self) -> f64;
    /// Overwrite the value.
    fn set(&mut self, value: f64);
}

/// A shared single-threaded cell holding the bound value.
///
/// Cloning shares the underlying cell, so the host keeps one handle and
/// hands another to the slider:
///
/// ```
/// use glissade_control::SharedValue;
///
/// let host = SharedValue::new(1.0);
/// let for_slider = host.clone();
/// host.set(3.5);
/// assert_eq!(for_slider.get(), 3.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedValue {
    cell: Rc<Cell<f64>>,
}

impl SharedValue {
    /// Create a cell holding `value`.
    pub fn new(value: f64) -> Self {
        Self {
            cell: Rc::new(Cell::new(value)),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> f64 {
        self.cell.get()
    }

    /// Overwrite the value from the host side.
    pub fn set(&self, value: f64) {
        self.cell.set(value);
    }
}

impl ValueBinding for SharedValue {
    fn get(&self) -> f64 {
        self.cell.get()
    }

    fn set(&mut self, value: f64) {
        self.cell.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_cell() {
        let a = SharedValue::new(2.0);
        let b = a.clone();
        a.set(7.25);
        assert_eq!(b.get(), 7.25);

        let mut shared = b.clone();
        let c: &mut dyn ValueBinding = &mut shared;
        c.set(-1.0);
        assert_eq!(a.get(), -1.0);
        assert_eq!(c.get(), -1.0);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(SharedValue::default().get(), 0.0);
    }
}
