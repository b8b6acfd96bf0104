//! Audio feedback trait
//!
//! Fire-and-forget: the panel names the cue, the implementation decides
//! what (if anything) to do with it. A muted build implements this as a
//! no-op.

/// Short feedback cues the panel can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiSound {
    /// Button acknowledge, played on every accepted press.
    Tap,
    /// Attention cue for notable state changes.
    Beep,
}

/// Plays feedback cues.
pub trait SoundPlayer {
    fn play(&mut self, sound: UiSound);
}

impl<T: SoundPlayer + ?Sized> SoundPlayer for &mut T {
    fn play(&mut self, sound: UiSound) {
        (**self).play(sound)
    }
}
