//! Display trait: the "show a named view" seam
//!
//! The panel never draws pixels. It names the screen to show and pushes
//! the three label values; what that means visually belongs entirely to
//! the implementation. The seam is infallible — a renderer that can fail
//! absorbs its own errors rather than feeding them back into the loop.

use crate::view::ViewId;

/// Rendering surface of the panel.
pub trait PanelDisplay {
    /// Make `view` the visible screen.
    fn show_view(&mut self, view: ViewId);

    /// Update the live chamber temperature readout. `None` means no
    /// current reading; renderers show the unknown sentinel, not a stale
    /// number.
    fn set_current_temp(&mut self, temp_f: Option<i16>);

    /// Update the committed setpoint readout on the home screen.
    fn set_setpoint(&mut self, temp_f: i16);

    /// Update the working-copy readout in the editor.
    fn set_pending_setpoint(&mut self, temp_f: i16);
}

impl<T: PanelDisplay + ?Sized> PanelDisplay for &mut T {
    fn show_view(&mut self, view: ViewId) {
        (**self).show_view(view)
    }

    fn set_current_temp(&mut self, temp_f: Option<i16>) {
        (**self).set_current_temp(temp_f)
    }

    fn set_setpoint(&mut self, temp_f: i16) {
        (**self).set_setpoint(temp_f)
    }

    fn set_pending_setpoint(&mut self, temp_f: i16) {
        (**self).set_pending_setpoint(temp_f)
    }
}
