//! View state machine definition
//!
//! Which screen is shown is a function of the current screen and an event.
//! Board-reported state moves the panel between Main, Roast, and Cool;
//! only local button presses move it in and out of Config. Start/stop
//! presses never change the screen directly — the board's next status
//! report does.

use super::events::{ButtonAction, ViewEvent};

/// Panel screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewId {
    /// Home screen: committed setpoint and the start button.
    Main,
    /// Setpoint editor.
    Config,
    /// Roast in progress; live temperature and the stop button.
    Roast,
    /// Cool-down in progress; live temperature and the stop button.
    Cool,
}

impl ViewId {
    /// Check if this screen shows the live chamber temperature.
    pub fn shows_live_temp(&self) -> bool {
        matches!(self, ViewId::Roast | ViewId::Cool)
    }

    /// Process an event and return the next screen.
    ///
    /// Total: every pair not named keeps the current screen. A `Fault`
    /// or unknown board state never moves the view.
    pub fn transition(self, event: ViewEvent) -> Self {
        use torrefy_protocol::BoardState::*;
        use ViewEvent::*;
        use ViewId::*;

        match (self, event) {
            // Local editor navigation
            (Main, Button(ButtonAction::OpenConfig)) => Config,
            (Config, Button(ButtonAction::ConfirmSetpoint)) => Main,
            (Config, Button(ButtonAction::CancelSetpoint)) => Main,

            // Board-driven process screens
            (Main, Board(Roasting)) => Roast,
            (Roast, Board(Cooling)) => Cool,
            (Roast, Board(Idle)) | (Cool, Board(Idle)) => Main,

            // Everything else stays put, including start/stop presses
            _ => self,
        }
    }
}
