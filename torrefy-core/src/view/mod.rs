//! View state machine for the panel screens
//!
//! Defines which screen is active and the legal moves between screens.
//! The machine is explicit, finite, and deterministic; the roaster board's
//! reported state drives the roast/cool screens, local button presses
//! drive the config screen.

pub mod events;
pub mod machine;

pub use events::{ButtonAction, ViewEvent};
pub use machine::ViewId;
