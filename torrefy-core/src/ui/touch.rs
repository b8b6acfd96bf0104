//! Touch samples and edge-triggered press detection

use super::layout;
use super::layout::ButtonId;
use crate::view::ViewId;

/// A touch coordinate in panel space, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        TouchPoint { x, y }
    }
}

/// Turns raw per-tick touch samples into button presses.
///
/// Dispatch is edge-triggered: a press is eligible only on the
/// released→touched edge, so a touch held across many ticks yields at
/// most one button, and a no-touch sample must be seen before the next
/// press can fire. The caller never blocks waiting for release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchDispatcher {
    touched: bool,
}

impl TouchDispatcher {
    pub const fn new() -> Self {
        TouchDispatcher { touched: false }
    }

    /// Feed one touch sample for the active screen.
    ///
    /// Returns the first button of `view` whose hit-box contains the
    /// point, and only when this sample is the press edge.
    pub fn dispatch(&mut self, sample: Option<TouchPoint>, view: ViewId) -> Option<ButtonId> {
        match sample {
            Some(point) => {
                let press_edge = !self.touched;
                self.touched = true;
                if press_edge {
                    layout::hit_test(view, point)
                } else {
                    None
                }
            }
            None => {
                self.touched = false;
                None
            }
        }
    }

    /// Check if the last sample reported an active touch.
    pub fn is_held(&self) -> bool {
        self.touched
    }
}

impl Default for TouchDispatcher {
    fn default() -> Self {
        TouchDispatcher::new()
    }
}
