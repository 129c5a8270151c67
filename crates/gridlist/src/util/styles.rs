//! Common styling for the demo widgets

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Border color of the list while it accepts input
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Help text color
pub const HELP_COLOR: Color = Color::DarkGray;

/// Status messages after a confirm
pub const STATUS_COLOR: Color = Color::Green;

/// Cue flashes; the buzzer uses [`WARNING_COLOR`]
pub const CUE_COLOR: Color = Color::Cyan;

pub const WARNING_COLOR: Color = Color::Red;

/// Create a bordered block whose border shows whether the list is active.
///
/// # Example
/// ```ignore
/// let block = focused_block("Palette", list.is_active());
/// let inner = block.inner(area);
/// frame.render_widget(block, area);
/// ```
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Scroll affordance shown in the block title.
pub fn arrows_label(up: bool, down: bool) -> &'static str {
    match (up, down) {
        (true, true) => " ▲▼ ",
        (true, false) => " ▲ ",
        (false, true) => " ▼ ",
        (false, false) => "",
    }
}

/// Style for an item cell.
pub fn item_style(color: Color, selected: bool, enabled: bool) -> Style {
    let mut style = Style::default().fg(color);
    if !enabled {
        style = style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    style
}
