//! Panel button layout and hit testing
//!
//! One declarative table binds every button to the screen it is live in,
//! its hit-box, and the action it triggers. Dispatch walks the table in
//! order and the first containing hit-box wins.

use super::touch::TouchPoint;
use crate::view::{ButtonAction, ViewId};

/// Panel resolution, landscape.
pub const SCREEN_WIDTH: u16 = 320;
pub const SCREEN_HEIGHT: u16 = 240;

/// The fixed button set. Each button is live in exactly one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Main: the big setpoint readout doubles as the editor button.
    OpenConfig,
    /// Main: start the roast at the committed setpoint.
    StartRoast,
    /// Config: pending setpoint down one degree.
    DecrementTemp,
    /// Config: pending setpoint up one degree.
    IncrementTemp,
    /// Config: commit and return home.
    ConfirmTemp,
    /// Config: discard and return home.
    CancelConfig,
    /// Roast: abort the roast.
    StopRoast,
    /// Cool: abort the cool-down.
    StopCooling,
}

/// Axis-aligned hit-box in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Rect { x, y, w, h }
    }

    /// Half-open containment: left/top edges are inside, right/bottom out.
    pub fn contains(&self, point: TouchPoint) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }
}

/// One row of the panel layout.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutEntry {
    pub id: ButtonId,
    pub view: ViewId,
    pub bounds: Rect,
    pub action: ButtonAction,
}

/// The full panel layout, in dispatch order.
pub const LAYOUT: &[LayoutEntry] = &[
    LayoutEntry {
        id: ButtonId::OpenConfig,
        view: ViewId::Main,
        bounds: Rect::new(20, 30, 280, 100),
        action: ButtonAction::OpenConfig,
    },
    LayoutEntry {
        id: ButtonId::StartRoast,
        view: ViewId::Main,
        bounds: Rect::new(160, 165, 160, 75),
        action: ButtonAction::StartRoast,
    },
    LayoutEntry {
        id: ButtonId::DecrementTemp,
        view: ViewId::Config,
        bounds: Rect::new(20, 60, 60, 60),
        action: ButtonAction::Adjust(-1),
    },
    LayoutEntry {
        id: ButtonId::IncrementTemp,
        view: ViewId::Config,
        bounds: Rect::new(240, 60, 60, 60),
        action: ButtonAction::Adjust(1),
    },
    LayoutEntry {
        id: ButtonId::ConfirmTemp,
        view: ViewId::Config,
        bounds: Rect::new(160, 165, 160, 75),
        action: ButtonAction::ConfirmSetpoint,
    },
    LayoutEntry {
        id: ButtonId::CancelConfig,
        view: ViewId::Config,
        bounds: Rect::new(0, 165, 160, 75),
        action: ButtonAction::CancelSetpoint,
    },
    LayoutEntry {
        id: ButtonId::StopRoast,
        view: ViewId::Roast,
        bounds: Rect::new(0, 165, 170, 75),
        action: ButtonAction::StopRoast,
    },
    LayoutEntry {
        id: ButtonId::StopCooling,
        view: ViewId::Cool,
        bounds: Rect::new(0, 165, 170, 75),
        action: ButtonAction::StopCooling,
    },
];

/// First button of `view` whose hit-box contains `point`.
pub fn hit_test(view: ViewId, point: TouchPoint) -> Option<ButtonId> {
    LAYOUT
        .iter()
        .find(|entry| entry.view == view && entry.bounds.contains(point))
        .map(|entry| entry.id)
}

/// Action bound to `button` while `view` is active; `None` when the
/// button is not live in that view.
pub fn action(view: ViewId, button: ButtonId) -> Option<ButtonAction> {
    LAYOUT
        .iter()
        .find(|entry| entry.view == view && entry.id == button)
        .map(|entry| entry.action)
}
