//! Grid geometry for uniform-size items.
//!
//! `GridLayout` is pure: every query is a function of the configuration and,
//! where positions are involved, an explicit scroll offset. It knows nothing
//! about selection or input.
//!
//! Coordinates come in two flavours:
//! - **widget-local**: origin at the top-left of the widget frame, padding included
//! - **content-local**: origin at the top-left of the content area (inside padding)
//!
//! Item rects are content-local.

use std::ops::Range;

use crate::error::ListError;

/// Axis-aligned rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Owner-controlled part of the layout: the space the list is given.
///
/// Item count, columns and item size come from the content provider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListGeometry {
    /// Content area width, padding excluded.
    pub width: f32,
    /// Content area height, padding excluded.
    pub height: f32,
    pub spacing: f32,
    pub padding: f32,
}

/// Layout configuration for a grid of `item_count` items in `columns` columns.
///
/// Immutable between refreshes. Build with [`GridLayout::new`] and the
/// chained setters, then call [`GridLayout::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    columns: usize,
    item_count: usize,
    item_width: f32,
    item_height: f32,
    spacing: f32,
    viewport_width: f32,
    viewport_height: f32,
    padding: f32,
}

impl GridLayout {
    /// Create a layout with unit-size items and an empty viewport.
    ///
    /// A column count of zero is treated as one.
    pub fn new(columns: usize, item_count: usize) -> Self {
        Self {
            columns: columns.max(1),
            item_count,
            item_width: 1.0,
            item_height: 1.0,
            spacing: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            padding: 0.0,
        }
    }

    pub fn item_size(mut self, width: f32, height: f32) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Size of the content area, padding excluded.
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Reject metrics that cannot produce a grid.
    pub fn validate(&self) -> Result<(), ListError> {
        if !self.item_height.is_finite() || self.item_height <= 0.0 {
            return Err(ListError::InvalidLayout {
                field: "item_height",
                requirement: "positive and finite",
                value: self.item_height,
            });
        }

        let non_negative = [
            ("item_width", self.item_width),
            ("spacing", self.spacing),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("padding", self.padding),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ListError::InvalidLayout {
                    field,
                    requirement: "non-negative and finite",
                    value,
                });
            }
        }

        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn padding_size(&self) -> f32 {
        self.padding
    }

    /// Total number of rows: `ceil(item_count / columns)`.
    pub fn rows(&self) -> usize {
        self.item_count.div_ceil(self.columns)
    }

    /// Rows that fit fully in the viewport: `floor(viewport_height / item_height)`.
    pub fn page_rows(&self) -> usize {
        if self.item_height <= 0.0 {
            return 0;
        }
        (self.viewport_height / self.item_height).floor() as usize
    }

    /// Items in one full page.
    pub fn page_items(&self) -> usize {
        self.page_rows() * self.columns
    }

    /// Largest valid top row: `max(0, rows - page_rows)`.
    pub fn max_top_row(&self) -> usize {
        self.rows().saturating_sub(self.page_rows())
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.columns
    }

    pub fn column(&self, index: usize) -> usize {
        index % self.columns
    }

    /// True when all rows sit on a single page row (horizontal command bars).
    pub fn is_horizontal(&self) -> bool {
        self.page_rows() == 1
    }

    /// Content-local rect of `index` with the content scrolled by `scroll_y`.
    ///
    /// Valid for any index; callers bound-check against `item_count`.
    pub fn item_rect(&self, index: usize, scroll_y: f32) -> Rect {
        let x = self.column(index) as f32 * (self.item_width + self.spacing);
        let y = self.row(index) as f32 * self.item_height - scroll_y;
        Rect::new(x, y, self.item_width, self.item_height)
    }

    /// Visible rows include one row of slack for the partially visible bottom row.
    pub fn is_row_visible(&self, row: usize, top_row: usize) -> bool {
        row >= top_row && row <= top_row + self.page_rows()
    }

    /// Indices of items that can appear on screen when `top_row` is the first
    /// row and the content is shifted a further `origin_y` up.
    pub fn visible_range(&self, top_row: usize, origin_y: f32) -> Range<usize> {
        let start = (top_row * self.columns).min(self.item_count);
        if self.item_height <= 0.0 {
            return start..start;
        }
        let spanned = ((origin_y.max(0.0) + self.viewport_height) / self.item_height).ceil();
        let last_row = (top_row + spanned as usize).min(self.rows());
        let end = (last_row * self.columns).min(self.item_count);
        start..end.max(start)
    }

    /// Widget-local content area (inside padding).
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            self.viewport_width,
            self.viewport_height,
        )
    }

    /// Widget-local frame: the content area grown by the padding on every side.
    pub fn frame_rect(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.viewport_width + self.padding * 2.0,
            self.viewport_height + self.padding * 2.0,
        )
    }

    /// Item width that fits `columns` columns into the viewport.
    pub fn fit_item_width(viewport_width: f32, columns: usize, spacing: f32) -> f32 {
        let columns = columns.max(1) as f32;
        ((viewport_width + spacing) / columns - spacing).floor().max(0.0)
    }
}
