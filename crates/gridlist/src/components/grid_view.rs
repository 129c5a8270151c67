use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use super::Component;
use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use crate::palette::PaletteCell;
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, arrows_label, focused_block, item_style};

const SWATCH: &str = "█ ";

/// The palette grid, painted from whatever the list draws this frame.
#[derive(Debug, Default)]
pub struct GridView {
    cells: Vec<PaletteCell>,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    fn title(state: &AppState) -> String {
        let list = &state.list;
        let arrows = list.arrows();
        let position = match list.index() {
            Some(index) => format!("{}/{}", index + 1, list.layout().item_count()),
            None => format!("-/{}", list.layout().item_count()),
        };
        format!(" Palette {position}{}", arrows_label(arrows.up, arrows.down))
    }
}

impl Component for GridView {
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let list = &state.list;
        let block = focused_block(&Self::title(state), list.is_active());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if !list.is_open() {
            return;
        }

        let buf = frame.buffer_mut();
        if list.layout().item_count() == 0 {
            buf.set_stringn(
                inner.x,
                inner.y,
                "No entries",
                usize::from(inner.width),
                Style::default().fg(HELP_COLOR),
            );
            return;
        }

        self.cells.clear();
        list.draw(&mut self.cells);
        let padding = list.geometry().padding;
        for cell in &self.cells {
            let selected = list.index() == Some(cell.index);
            paint_cell(buf, inner, padding, cell, selected);
        }
    }
}

/// Terminal cells covered by an item, clipped to `inner`.
///
/// Item rects are content-local layout units; `inner` is the list frame.
fn cell_area(inner: Rect, padding: f32, cell: &PaletteCell) -> Option<Rect> {
    let rect = cell.rect;
    let left = f32::from(inner.x) + ((padding + rect.x) / CELL_WIDTH).floor();
    let top = f32::from(inner.y) + ((padding + rect.y) / CELL_HEIGHT).round();
    let width = (rect.width / CELL_WIDTH).floor();
    let height = (rect.height / CELL_HEIGHT).round().max(1.0);

    let x0 = left.max(f32::from(inner.x));
    let y0 = top.max(f32::from(inner.y));
    let x1 = (left + width).min(f32::from(inner.right()));
    let y1 = (top + height).min(f32::from(inner.bottom()));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(Rect::new(
        x0 as u16,
        y0 as u16,
        (x1 - x0) as u16,
        (y1 - y0) as u16,
    ))
}

fn paint_cell(buf: &mut Buffer, inner: Rect, padding: f32, cell: &PaletteCell, selected: bool) {
    let Some(area) = cell_area(inner, padding, cell) else {
        return;
    };
    let style = item_style(cell.color, selected, cell.enabled);
    buf.set_style(area, style);
    buf.set_stringn(
        area.x,
        area.y,
        format!("{SWATCH}{}", cell.label),
        usize::from(area.width),
        style,
    );
}
