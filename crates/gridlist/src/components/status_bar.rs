use gridlist_core::Cue;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::cues::cue_label;
use crate::keybindings::KeybindingsConfig;
use crate::state::AppState;
use crate::util::styles::{CUE_COLOR, HELP_COLOR, STATUS_COLOR, WARNING_COLOR};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(keybindings: &KeybindingsConfig) -> String {
        let nav = &keybindings.navigation;
        let actions = &keybindings.actions;
        format!(
            "{}/{}/{}/{}: move | {}/{}: page | {}: pick | {}: back | {}: quit | mouse: tap, drag, wheel",
            KeybindingsConfig::hint(&nav.up),
            KeybindingsConfig::hint(&nav.down),
            KeybindingsConfig::hint(&nav.left),
            KeybindingsConfig::hint(&nav.right),
            KeybindingsConfig::hint(&nav.page_up),
            KeybindingsConfig::hint(&nav.page_down),
            KeybindingsConfig::hint(&actions.confirm),
            KeybindingsConfig::hint(&actions.cancel),
            KeybindingsConfig::hint(&actions.quit),
        )
    }

    fn cue_span(cue: Cue) -> Span<'static> {
        let color = if cue == Cue::Buzzer {
            WARNING_COLOR
        } else {
            CUE_COLOR
        };
        Span::styled(format!("[{}] ", cue_label(cue)), Style::default().fg(color))
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = Vec::new();
        if let Some(cue) = state.cues.flash() {
            spans.push(Self::cue_span(cue));
        }

        match &state.status {
            Some(status) => spans.push(Span::styled(
                status.clone(),
                Style::default().fg(STATUS_COLOR),
            )),
            None => spans.push(Span::styled(
                Self::help_text(&state.keybindings),
                Style::default().fg(HELP_COLOR),
            )),
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
