//! Roaster control board link
//!
//! The control board hangs off the panel's I2C bus at address 0x08 and
//! speaks the request/response protocol defined in `torrefy-protocol`.
//! Every [`BoardLink`] method is a single write-then-read transaction
//! with a repeated start between the phases; nothing here retries.
//!
//! The board works in degrees Celsius, the panel in Fahrenheit, so this
//! driver also owns the unit conversion at the wire.

use embedded_hal::i2c::I2c;

use torrefy_core::traits::{BoardLink, BoardStatus, LinkError};
use torrefy_core::units;
use torrefy_protocol::{Command, StatusReply, BOARD_ADDRESS, MAX_REQUEST_LEN};

/// Driver for the roaster control board.
pub struct RoasterBoard<I2C> {
    i2c: I2C,
    /// 7-bit bus address of the board.
    address: u8,
}

impl<I2C: I2c> RoasterBoard<I2C> {
    /// Driver at the stock board address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, BOARD_ADDRESS)
    }

    /// Driver at a non-stock address (jumpered boards).
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// One command/response exchange on the bus.
    fn transact(&mut self, command: Command, response: &mut [u8]) -> Result<(), LinkError> {
        let mut request = [0u8; MAX_REQUEST_LEN];
        let len = command.encode(&mut request);
        self.i2c
            .write_read(self.address, &request[..len], response)
            .map_err(|_| LinkError::Communication)
    }

    /// Send a command whose only response is an ack byte.
    fn command(&mut self, command: Command) -> Result<(), LinkError> {
        let mut response = [0u8; 1];
        self.transact(command, &mut response)?;
        match command.expected_ack() {
            Some(expected) if response[0] != expected => Err(LinkError::Rejected {
                expected,
                got: response[0],
            }),
            _ => Ok(()),
        }
    }
}

impl<I2C: I2c> BoardLink for RoasterBoard<I2C> {
    fn read_setpoint(&mut self) -> Result<i16, LinkError> {
        let mut response = [0u8; 1];
        self.transact(Command::ReadSetpoint, &mut response)?;
        Ok(units::celsius_to_fahrenheit(i16::from(response[0])))
    }

    fn poll_status(&mut self) -> Result<BoardStatus, LinkError> {
        let mut response = [0u8; 2];
        self.transact(Command::PollStatus, &mut response)?;
        let reply = StatusReply::from_bytes(response);
        Ok(BoardStatus {
            temp_f: units::celsius_to_fahrenheit(i16::from(reply.celsius)),
            state: reply.state,
        })
    }

    fn start_roast(&mut self, target_f: i16) -> Result<(), LinkError> {
        // The wire carries one unsigned Celsius byte.
        let celsius = units::fahrenheit_to_celsius(target_f).clamp(0, 255) as u8;
        self.command(Command::StartRoast { celsius })
    }

    fn stop_roast(&mut self) -> Result<(), LinkError> {
        self.command(Command::StopRoast)
    }

    fn stop_cooling(&mut self) -> Result<(), LinkError> {
        self.command(Command::StopCooling)
    }
}
