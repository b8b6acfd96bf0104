//! Touch input mapping for the panel
//!
//! The layout table binds every button to the screen it lives in, its
//! hit-box, and its action; the dispatcher turns raw touch samples into
//! at most one press per physical touch.

pub mod layout;
pub mod touch;

pub use layout::{ButtonId, LayoutEntry, Rect, LAYOUT};
pub use touch::{TouchDispatcher, TouchPoint};
