//! Roaster Board Command Protocol
//!
//! This crate defines the I2C command protocol between the touch panel and
//! the roaster board (the daughter card driving the heater and fan). The
//! board is a single fixed-address device; every exchange is one
//! write-then-read transaction with no intermediate stop.
//!
//! # Protocol Overview
//!
//! ```text
//! ┌──────────────┬───────────────┬────────────────────┬──────┐
//! │ Command      │ Request bytes │ Response bytes     │ Ack  │
//! ├──────────────┼───────────────┼────────────────────┼──────┤
//! │ Poll status  │ 0x01          │ 2 (°C, state code) │ —    │
//! │ Start roast  │ 0x02, targetC │ 1                  │ 0x33 │
//! │ Stop roast   │ 0x03          │ 1                  │ 0x34 │
//! │ Stop cooling │ 0x04          │ 1                  │ 0x35 │
//! │ Read setpoint│ 0x05          │ 1 (°C)             │ —    │
//! └──────────────┴───────────────┴────────────────────┴──────┘
//! ```
//!
//! The board reports its state on every status poll and that report is
//! authoritative — the panel never infers roasting/cooling on its own.
//! Temperatures cross the wire as single unsigned Celsius bytes.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod status;

pub use command::{Command, BOARD_ADDRESS, MAX_REQUEST_LEN};
pub use status::{BoardState, StatusReply};
