//! Roaster board link trait

use torrefy_protocol::BoardState;

/// Errors a board transaction can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Transport fault: bus error, timeout, or short response. Transient;
    /// the control loop absorbs it and carries on.
    Communication,
    /// The board answered, but with the wrong ack byte.
    Rejected { expected: u8, got: u8 },
}

/// One successful status poll, converted for the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardStatus {
    /// Current chamber temperature in whole degrees Fahrenheit.
    pub temp_f: i16,
    /// Board state as reported; authoritative for the view machine.
    pub state: BoardState,
}

/// Command/query surface of the roaster board.
///
/// Every method is one synchronous write-then-read transaction against
/// the board; the link is released before the call returns, success or
/// not. Nothing retries: a failed command needs a fresh user press.
pub trait BoardLink {
    /// Read the setpoint stored on the board, in °F.
    fn read_setpoint(&mut self) -> Result<i16, LinkError>;

    /// Read current temperature and board state.
    fn poll_status(&mut self) -> Result<BoardStatus, LinkError>;

    /// Start a roast targeting `target_f` degrees Fahrenheit.
    fn start_roast(&mut self, target_f: i16) -> Result<(), LinkError>;

    /// Abort the active roast.
    fn stop_roast(&mut self) -> Result<(), LinkError>;

    /// Abort the cool-down.
    fn stop_cooling(&mut self) -> Result<(), LinkError>;
}

impl<T: BoardLink + ?Sized> BoardLink for &mut T {
    fn read_setpoint(&mut self) -> Result<i16, LinkError> {
        (**self).read_setpoint()
    }

    fn poll_status(&mut self) -> Result<BoardStatus, LinkError> {
        (**self).poll_status()
    }

    fn start_roast(&mut self, target_f: i16) -> Result<(), LinkError> {
        (**self).start_roast(target_f)
    }

    fn stop_roast(&mut self) -> Result<(), LinkError> {
        (**self).stop_roast()
    }

    fn stop_cooling(&mut self) -> Result<(), LinkError> {
        (**self).stop_cooling()
    }
}
