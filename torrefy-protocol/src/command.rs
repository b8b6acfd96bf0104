//! Commands the panel can issue to the roaster board

/// Fixed I2C address of the roaster board.
pub const BOARD_ADDRESS: u8 = 0x08;

/// Longest request the protocol defines (opcode plus one argument byte).
pub const MAX_REQUEST_LEN: usize = 2;

// Command opcodes
pub const CMD_POLL_STATUS: u8 = 0x01;
pub const CMD_START_ROAST: u8 = 0x02;
pub const CMD_STOP_ROAST: u8 = 0x03;
pub const CMD_STOP_COOLING: u8 = 0x04;
pub const CMD_READ_SETPOINT: u8 = 0x05;

// Ack bytes returned by the board for state-changing commands
pub const ACK_START_ROAST: u8 = 0x33;
pub const ACK_STOP_ROAST: u8 = 0x34;
pub const ACK_STOP_COOLING: u8 = 0x35;

/// A single command in wire terms: request bytes, expected response length,
/// and the ack byte (if the command is acknowledged at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Read the setpoint stored on the board (one Celsius byte back).
    ReadSetpoint,
    /// Read current temperature and board state (two bytes back).
    PollStatus,
    /// Begin a roast targeting the given Celsius temperature.
    StartRoast { celsius: u8 },
    /// Abort the active roast.
    StopRoast,
    /// Abort the cool-down.
    StopCooling,
}

impl Command {
    /// Wire opcode for this command.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::ReadSetpoint => CMD_READ_SETPOINT,
            Command::PollStatus => CMD_POLL_STATUS,
            Command::StartRoast { .. } => CMD_START_ROAST,
            Command::StopRoast => CMD_STOP_ROAST,
            Command::StopCooling => CMD_STOP_COOLING,
        }
    }

    /// Encode the request into `buf`, returning the number of bytes written.
    pub fn encode(&self, buf: &mut [u8; MAX_REQUEST_LEN]) -> usize {
        buf[0] = self.opcode();
        match self {
            Command::StartRoast { celsius } => {
                buf[1] = *celsius;
                2
            }
            _ => 1,
        }
    }

    /// Exact number of response bytes the board sends back.
    pub fn response_len(&self) -> usize {
        match self {
            Command::PollStatus => 2,
            _ => 1,
        }
    }

    /// Ack byte the board answers with on success, if the command is
    /// acknowledged (reads return data instead of an ack).
    pub fn expected_ack(&self) -> Option<u8> {
        match self {
            Command::StartRoast { .. } => Some(ACK_START_ROAST),
            Command::StopRoast => Some(ACK_STOP_ROAST),
            Command::StopCooling => Some(ACK_STOP_COOLING),
            Command::ReadSetpoint | Command::PollStatus => None,
        }
    }
}
