//! Hardware-seam traits
//!
//! These traits define the interface between the panel logic and the
//! hardware it rides on: the roaster board link, the screen, the beeper,
//! the touch glass, and the light sensor. Every seam also carries a
//! `&mut T` blanket impl so callers can lend an implementation instead of
//! moving it.

pub mod board;
pub mod display;
pub mod light;
pub mod sound;
pub mod touch;

pub use board::{BoardLink, BoardStatus, LinkError};
pub use display::PanelDisplay;
pub use light::LightSensor;
pub use sound::{SoundPlayer, UiSound};
pub use touch::TouchScreen;
