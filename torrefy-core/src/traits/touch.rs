//! Touch sampling trait
//!
//! One question per tick: where is the finger right now, if anywhere?
//! Press/release edges are derived in [`crate::ui::TouchDispatcher`],
//! not here, so implementations stay stateless samplers.

use crate::ui::TouchPoint;

/// Samples the current touch position.
pub trait TouchScreen {
    /// Transport error type of the underlying controller.
    type Error;

    /// Current touch point in screen coordinates, or `None` when the
    /// surface is untouched.
    fn touch_point(&mut self) -> Result<Option<TouchPoint>, Self::Error>;
}

impl<T: TouchScreen + ?Sized> TouchScreen for &mut T {
    type Error = T::Error;

    fn touch_point(&mut self) -> Result<Option<TouchPoint>, Self::Error> {
        (**self).touch_point()
    }
}
