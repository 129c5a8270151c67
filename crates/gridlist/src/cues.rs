//! Feedback cues for a terminal: a status flash, and the bell for errors.

use gridlist_core::{Cue, CueSink};

/// Ticks a cue name stays visible in the status bar.
const FLASH_TICKS: u32 = 15;

#[derive(Debug, Default)]
pub struct TerminalCues {
    flash: Option<(Cue, u32)>,
    bell: bool,
}

impl TerminalCues {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, cue: Cue) {
        tracing::debug!(?cue, "cue");
        self.flash = Some((cue, FLASH_TICKS));
    }

    /// The cue to show in the status bar, if one is still fresh.
    pub fn flash(&self) -> Option<Cue> {
        self.flash.map(|(cue, _)| cue)
    }

    /// Age the flash by one tick.
    pub fn tick(&mut self) {
        self.flash = match self.flash {
            Some((cue, ticks)) if ticks > 1 => Some((cue, ticks - 1)),
            _ => None,
        };
    }

    /// Whether the bell should ring; clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl CueSink for TerminalCues {
    fn play_cursor(&mut self) {
        self.record(Cue::Cursor);
    }

    fn play_ok(&mut self) {
        self.record(Cue::Ok);
    }

    fn play_cancel(&mut self) {
        self.record(Cue::Cancel);
    }

    fn play_buzzer(&mut self) {
        self.record(Cue::Buzzer);
        self.bell = true;
    }
}

pub fn cue_label(cue: Cue) -> &'static str {
    match cue {
        Cue::Cursor => "cursor",
        Cue::Ok => "ok",
        Cue::Cancel => "cancel",
        Cue::Buzzer => "buzzer",
    }
}
