//! Collaborator traits: what the list shows and how it sounds.

use crate::layout::{GridLayout, Rect};

/// Supplies the items a [`crate::SelectableList`] navigates.
///
/// Concrete lists (inventories, menus, status panels) implement this instead
/// of extending the list type.
pub trait ContentProvider {
    /// Where `draw_item` paints.
    type Canvas: ?Sized;

    fn max_items(&self) -> usize;

    fn max_cols(&self) -> usize {
        1
    }

    fn item_height(&self) -> f32;

    /// Defaults to filling the viewport width evenly across the columns.
    fn item_width(&self, viewport_width: f32, spacing: f32) -> f32 {
        GridLayout::fit_item_width(viewport_width, self.max_cols(), spacing)
    }

    /// Whether confirming the current selection is allowed.
    fn is_current_item_enabled(&self, _index: Option<usize>) -> bool {
        true
    }

    /// Paint one item. `rect` is content-local and already scrolled.
    fn draw_item(&self, index: usize, rect: Rect, canvas: &mut Self::Canvas);
}

/// Feedback cues emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Cursor,
    Ok,
    Cancel,
    Buzzer,
}

/// Fire-and-forget sink for feedback cues.
pub trait CueSink {
    fn play_cursor(&mut self);
    fn play_ok(&mut self);
    fn play_cancel(&mut self);
    fn play_buzzer(&mut self);

    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Cursor => self.play_cursor(),
            Cue::Ok => self.play_ok(),
            Cue::Cancel => self.play_cancel(),
            Cue::Buzzer => self.play_buzzer(),
        }
    }
}

/// Records cues in order; handy for hosts that batch feedback and for tests.
impl CueSink for Vec<Cue> {
    fn play_cursor(&mut self) {
        self.push(Cue::Cursor);
    }

    fn play_ok(&mut self) {
        self.push(Cue::Ok);
    }

    fn play_cancel(&mut self) {
        self.push(Cue::Cancel);
    }

    fn play_buzzer(&mut self) {
        self.push(Cue::Buzzer);
    }
}
