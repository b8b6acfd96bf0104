//! Events that trigger view transitions

use torrefy_protocol::BoardState;

/// Semantic action bound to a button in the panel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    // Main screen
    /// Open the setpoint editor.
    OpenConfig,
    /// Command the board to roast at the committed setpoint.
    StartRoast,

    // Config screen
    /// Nudge the pending setpoint by the given whole degrees Fahrenheit.
    Adjust(i16),
    /// Commit the pending setpoint and leave the editor.
    ConfirmSetpoint,
    /// Discard the pending setpoint and leave the editor.
    CancelSetpoint,

    // Roast / cool screens
    /// Command the board to abort the roast.
    StopRoast,
    /// Command the board to abort the cool-down.
    StopCooling,
}

impl ButtonAction {
    /// Check if this action issues a command to the board.
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            ButtonAction::StartRoast | ButtonAction::StopRoast | ButtonAction::StopCooling
        )
    }

    /// Check if this action only touches panel-local state.
    pub fn is_local(&self) -> bool {
        !self.is_command()
    }
}

/// The two event classes the view machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ViewEvent {
    /// A dispatched button press.
    Button(ButtonAction),
    /// A board state carried by a successful status poll.
    Board(BoardState),
}
