//! Board-agnostic control logic for the Torrefy roaster panel
//!
//! This crate contains all panel logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware-seam traits (board link, display, sound, touch, light)
//! - View state machine for the panel screens
//! - Touch-to-button dispatch with edge triggering
//! - Setpoint editing (committed value plus working copy)
//! - The control loop tying the pieces together
//! - Temperature unit conversion and label formatting

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
pub mod setpoint;
pub mod traits;
pub mod ui;
pub mod units;
pub mod view;
