//! Panel control loop
//!
//! [`Panel`] owns the view machine, the touch dispatcher, and the
//! setpoint editor, and drives them from a single entry point: the
//! embedding calls [`Panel::tick`] once per loop pass with the current
//! touch sample. Each tick dispatches at most one button press and, on a
//! throttled cadence, polls the roaster board for temperature and state.
//!
//! Link failures never stop the loop. A failed command or poll is
//! reported in the returned [`TickReport`] so the embedding can log it,
//! and the next tick proceeds as usual.

use crate::setpoint::SetpointEditor;
use crate::traits::{BoardLink, LinkError, PanelDisplay, SoundPlayer, UiSound};
use crate::ui::{layout, ButtonId, TouchDispatcher, TouchPoint};
use crate::view::{ButtonAction, ViewEvent, ViewId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default status poll cadence, in loop ticks.
pub const DEFAULT_POLL_TICKS: u16 = 10;

/// Setpoint assumed when the board cannot report one at startup (°F).
pub const DEFAULT_SETPOINT_F: i16 = 25;

/// Control loop tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Poll board status once every this many ticks. The first tick after
    /// startup always polls.
    pub status_poll_ticks: u16,
    /// Setpoint used when the startup read fails (°F).
    pub fallback_setpoint_f: i16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            status_poll_ticks: DEFAULT_POLL_TICKS,
            fallback_setpoint_f: DEFAULT_SETPOINT_F,
        }
    }
}

/// What one [`Panel::tick`] did.
///
/// Errors surface here instead of aborting the loop; the embedding
/// decides what to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Button press accepted this tick, if any.
    pub pressed: Option<ButtonId>,
    /// Error from the board command that press triggered.
    pub command_error: Option<LinkError>,
    /// Error from the status poll, when one ran and failed.
    pub poll_error: Option<LinkError>,
}

/// The panel control loop.
///
/// Generic over the three hardware seams it drives. Touch sampling stays
/// outside: the embedding reads its touch controller (and handles that
/// transport's errors) and hands the sample to [`Panel::tick`].
#[derive(Debug)]
pub struct Panel<B, D, S> {
    board: B,
    display: D,
    sound: S,
    config: PanelConfig,
    view: ViewId,
    touch: TouchDispatcher,
    setpoint: SetpointEditor,
    /// Ticks left until the next status poll.
    ticks_to_poll: u16,
}

impl<B, D, S> Panel<B, D, S>
where
    B: BoardLink,
    D: PanelDisplay,
    S: SoundPlayer,
{
    /// Create a panel on the home view with the fallback setpoint.
    pub fn new(board: B, display: D, sound: S, config: PanelConfig) -> Self {
        Self {
            board,
            display,
            sound,
            config,
            view: ViewId::Main,
            touch: TouchDispatcher::new(),
            setpoint: SetpointEditor::new(config.fallback_setpoint_f),
            ticks_to_poll: 0,
        }
    }

    /// Fetch the stored setpoint from the board and show the home view.
    ///
    /// On a link error the fallback setpoint stays in place and the error
    /// is returned for logging; the panel is operational either way.
    pub fn start(&mut self) -> Result<(), LinkError> {
        let result = self.board.read_setpoint();
        if let Ok(temp_f) = result {
            self.setpoint = SetpointEditor::new(temp_f);
        }
        self.display.set_setpoint(self.setpoint.setpoint_f());
        self.display.show_view(ViewId::Main);
        result.map(|_| ())
    }

    /// Run one loop pass: dispatch the touch sample, then poll the board
    /// if the cadence says so.
    pub fn tick(&mut self, sample: Option<TouchPoint>) -> TickReport {
        let mut report = TickReport::default();

        if let Some(button) = self.touch.dispatch(sample, self.view) {
            report.pressed = Some(button);
            report.command_error = self.press(button);
        }

        if self.ticks_to_poll == 0 {
            self.ticks_to_poll = self.config.status_poll_ticks.saturating_sub(1);
            report.poll_error = self.poll_status();
        } else {
            self.ticks_to_poll -= 1;
        }

        report
    }

    /// Currently shown view.
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Committed roast setpoint (°F).
    pub fn setpoint_f(&self) -> i16 {
        self.setpoint.setpoint_f()
    }

    /// Working-copy setpoint while the editor is open (°F).
    pub fn pending_setpoint_f(&self) -> Option<i16> {
        self.setpoint.pending_f()
    }

    /// Handle one accepted button press.
    fn press(&mut self, button: ButtonId) -> Option<LinkError> {
        let action = layout::action(self.view, button)?;
        self.sound.play(UiSound::Tap);

        let mut command_error = None;
        match action {
            ButtonAction::OpenConfig => {
                self.setpoint.open();
                self.redraw_pending();
            }
            ButtonAction::Adjust(delta_f) => {
                self.setpoint.adjust(delta_f);
                self.redraw_pending();
            }
            ButtonAction::ConfirmSetpoint => {
                let committed = self.setpoint.commit();
                self.display.set_setpoint(committed);
            }
            ButtonAction::CancelSetpoint => self.setpoint.cancel(),
            ButtonAction::StartRoast => {
                command_error = self.board.start_roast(self.setpoint.setpoint_f()).err();
            }
            ButtonAction::StopRoast => command_error = self.board.stop_roast().err(),
            ButtonAction::StopCooling => command_error = self.board.stop_cooling().err(),
        }

        self.apply(ViewEvent::Button(action));
        command_error
    }

    /// Poll the board and fold the reply into display and view state.
    fn poll_status(&mut self) -> Option<LinkError> {
        match self.board.poll_status() {
            Ok(status) => {
                self.display.set_current_temp(Some(status.temp_f));
                self.apply(ViewEvent::Board(status.state));
                None
            }
            Err(e) => {
                // Reading stays blank until a poll succeeds again.
                self.display.set_current_temp(None);
                Some(e)
            }
        }
    }

    /// Run `event` through the view machine, redrawing on a change.
    fn apply(&mut self, event: ViewEvent) {
        let next = self.view.transition(event);
        if next != self.view {
            self.view = next;
            self.display.show_view(next);
        }
    }

    fn redraw_pending(&mut self) {
        if let Some(pending) = self.setpoint.pending_f() {
            self.display.set_pending_setpoint(pending);
        }
    }
}
