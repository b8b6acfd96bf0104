//! Setpoint bookkeeping: the committed value and its working copy
//!
//! The committed setpoint is what a start-roast command sends to the
//! board. While the editor is open a working copy absorbs the ±1 presses;
//! it only becomes the committed value on an explicit confirm, and cancel
//! throws it away. All values are whole degrees Fahrenheit.

/// Committed setpoint plus the editor's working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetpointEditor {
    committed_f: i16,
    pending_f: Option<i16>,
}

impl SetpointEditor {
    pub const fn new(initial_f: i16) -> Self {
        SetpointEditor {
            committed_f: initial_f,
            pending_f: None,
        }
    }

    /// The committed setpoint in °F.
    pub fn setpoint_f(&self) -> i16 {
        self.committed_f
    }

    /// The working copy, while the editor is open.
    pub fn pending_f(&self) -> Option<i16> {
        self.pending_f
    }

    /// Check if the editor is open.
    pub fn is_open(&self) -> bool {
        self.pending_f.is_some()
    }

    /// Open the editor, seeding the working copy from the committed value.
    pub fn open(&mut self) {
        self.pending_f = Some(self.committed_f);
    }

    /// Nudge the working copy. Ignored while the editor is closed.
    pub fn adjust(&mut self, delta_f: i16) {
        if let Some(pending) = self.pending_f.as_mut() {
            *pending = pending.saturating_add(delta_f);
        }
    }

    /// Commit the working copy and close the editor. Returns the
    /// committed value.
    pub fn commit(&mut self) -> i16 {
        if let Some(pending) = self.pending_f.take() {
            self.committed_f = pending;
        }
        self.committed_f
    }

    /// Close the editor, discarding the working copy.
    pub fn cancel(&mut self) {
        self.pending_f = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_pending_from_committed() {
        let mut editor = SetpointEditor::new(75);
        assert!(!editor.is_open());
        assert_eq!(editor.pending_f(), None);

        editor.open();
        assert!(editor.is_open());
        assert_eq!(editor.pending_f(), Some(75));
        assert_eq!(editor.setpoint_f(), 75);
    }

    #[test]
    fn test_adjust_touches_pending_only() {
        let mut editor = SetpointEditor::new(75);
        editor.open();
        editor.adjust(1);
        editor.adjust(1);
        editor.adjust(1);
        assert_eq!(editor.pending_f(), Some(78));
        assert_eq!(editor.setpoint_f(), 75);

        editor.adjust(-5);
        assert_eq!(editor.pending_f(), Some(73));
        assert_eq!(editor.setpoint_f(), 75);
    }

    #[test]
    fn test_adjust_while_closed_is_ignored() {
        let mut editor = SetpointEditor::new(75);
        editor.adjust(10);
        assert_eq!(editor.setpoint_f(), 75);
        assert_eq!(editor.pending_f(), None);
    }

    #[test]
    fn test_commit_persists_and_closes() {
        let mut editor = SetpointEditor::new(75);
        editor.open();
        editor.adjust(3);
        assert_eq!(editor.commit(), 78);
        assert_eq!(editor.setpoint_f(), 78);
        assert!(!editor.is_open());

        // Commit with nothing pending keeps the committed value
        assert_eq!(editor.commit(), 78);
    }

    #[test]
    fn test_cancel_discards() {
        let mut editor = SetpointEditor::new(75);
        editor.open();
        editor.adjust(3);
        editor.cancel();
        assert_eq!(editor.setpoint_f(), 75);
        assert_eq!(editor.pending_f(), None);
        assert!(!editor.is_open());
    }

    #[test]
    fn test_adjust_saturates() {
        let mut editor = SetpointEditor::new(i16::MAX);
        editor.open();
        editor.adjust(1);
        assert_eq!(editor.pending_f(), Some(i16::MAX));
    }
}
