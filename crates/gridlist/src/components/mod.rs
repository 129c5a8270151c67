pub mod grid_view;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::AppState;

/// Trait for components that render a slice of the app state.
///
/// Input does not go through components: keys and pointer events are
/// collected by the input tracker and handed to the list once per tick.
pub trait Component {
    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
