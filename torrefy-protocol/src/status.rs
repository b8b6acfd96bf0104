//! Status reporting from the roaster board

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Wire codes for the board state byte
const STATE_IDLE: u8 = 0x00;
const STATE_ROASTING: u8 = 0x02;
const STATE_COOLING: u8 = 0x03;

/// State of the roaster board as reported on every status poll.
///
/// The report is authoritative: the panel mirrors it and never infers a
/// state change on its own. Codes outside the table decode to [`Fault`].
///
/// [`Fault`]: BoardState::Fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardState {
    /// Heater and fan off, board waiting for a start command.
    Idle,
    /// Roast in progress.
    Roasting,
    /// Cool-down in progress.
    Cooling,
    /// Unknown or error code; the panel leaves the active view alone.
    Fault,
}

impl BoardState {
    /// Decode the state byte of a status reply. Total — unknown codes
    /// become `Fault` rather than an error.
    pub fn from_code(code: u8) -> Self {
        match code {
            STATE_IDLE => BoardState::Idle,
            STATE_ROASTING => BoardState::Roasting,
            STATE_COOLING => BoardState::Cooling,
            _ => BoardState::Fault,
        }
    }

    /// Returns true if the board reported a code the panel does not know.
    pub fn is_fault(&self) -> bool {
        matches!(self, BoardState::Fault)
    }
}

/// Decoded two-byte status reply: temperature then state code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatusReply {
    /// Current chamber temperature in whole degrees Celsius.
    pub celsius: u8,
    /// Board state decoded from the second byte.
    pub state: BoardState,
}

impl StatusReply {
    /// Decode a raw status response.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        StatusReply {
            celsius: bytes[0],
            state: BoardState::from_code(bytes[1]),
        }
    }
}
