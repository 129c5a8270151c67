//! Demo content: a grid of named terminal colors.

use gridlist_core::{ContentProvider, Rect};
use ratatui::style::Color;

const BASE_NAMES: [&str; 12] = [
    "Crimson", "Amber", "Lime", "Teal", "Azure", "Indigo", "Violet", "Rose", "Ochre", "Moss",
    "Slate", "Coral",
];

/// Every entry at this stride is disabled, so confirming it buzzes.
const DISABLED_STRIDE: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Color,
    pub enabled: bool,
}

/// One item as placed by the list, ready for the grid view to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCell {
    pub index: usize,
    /// Content-local rect in layout units, already scrolled.
    pub rect: Rect,
    pub label: String,
    pub color: Color,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    columns: usize,
    item_height: f32,
}

impl Palette {
    /// Generate `count` entries cycling through the 6x6x6 color cube.
    pub fn generate(count: usize, columns: usize, item_height: f32) -> Self {
        let entries = (0..count)
            .map(|i| PaletteEntry {
                name: format!("{} {}", BASE_NAMES[i % BASE_NAMES.len()], i / BASE_NAMES.len() + 1),
                color: Color::Indexed(16 + (i % 216) as u8),
                enabled: i % DISABLED_STRIDE != DISABLED_STRIDE - 1,
            })
            .collect();
        Self {
            entries,
            columns: columns.max(1),
            item_height,
        }
    }

    pub fn entry(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentProvider for Palette {
    type Canvas = Vec<PaletteCell>;

    fn max_items(&self) -> usize {
        self.entries.len()
    }

    fn max_cols(&self) -> usize {
        self.columns
    }

    fn item_height(&self) -> f32 {
        self.item_height
    }

    fn is_current_item_enabled(&self, index: Option<usize>) -> bool {
        index
            .and_then(|i| self.entries.get(i))
            .is_some_and(|entry| entry.enabled)
    }

    fn draw_item(&self, index: usize, rect: Rect, canvas: &mut Self::Canvas) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        canvas.push(PaletteCell {
            index,
            rect,
            label: entry.name.clone(),
            color: entry.color,
            enabled: entry.enabled,
        });
    }
}
