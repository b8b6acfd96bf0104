//! Hardware drivers for the Torrefy roaster panel
//!
//! Concrete implementations of the seams defined in `torrefy-core`:
//!
//! - [`RoasterBoard`]: the roaster control board behind its I2C protocol
//! - [`Ft6236`]: FocalTech capacitive touch controller
//!
//! Drivers are generic over `embedded-hal` 1.0 bus traits, so they run
//! unchanged on any platform with a blocking I2C implementation.

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod touch;

pub use board::RoasterBoard;
pub use touch::Ft6236;
