//! Ambient light sensing trait
//!
//! The panel hardware carries a light sensor next to the screen. Nothing
//! in the control loop consumes it today; the seam exists so embeddings
//! can read it (e.g. for a backlight policy) through the same trait
//! vocabulary as the rest of the peripherals.

/// Reads ambient light level.
pub trait LightSensor {
    /// Transport error type of the underlying sensor.
    type Error;

    /// Raw ambient light reading. Scale is implementation-defined;
    /// larger means brighter.
    fn ambient(&mut self) -> Result<u16, Self::Error>;
}

impl<T: LightSensor + ?Sized> LightSensor for &mut T {
    type Error = T::Error;

    fn ambient(&mut self) -> Result<u16, Self::Error> {
        (**self).ambient()
    }
}
