//! Selection state and grid movement rules.
//!
//! The movement functions only compute a target index; applying it (and the
//! visibility/notification side effects) is the list's job.

use crate::layout::GridLayout;

/// Current selection and the modes that suppress per-item movement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    /// Selected item, `None` when nothing is selected.
    pub index: Option<usize>,
    /// The cursor cannot move but a selection exists.
    pub cursor_fixed: bool,
    /// The selection spans every item.
    pub cursor_all: bool,
    /// Ticks since the last selection change.
    pub stay_count: u32,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a requested index into `[0, item_count - 1]`, `None` for an empty list.
    pub fn clamp_index(index: usize, item_count: usize) -> Option<usize> {
        match item_count {
            0 => None,
            n => Some(index.min(n - 1)),
        }
    }

    /// Target of moving one row down, if the move is allowed.
    pub fn down_target(&self, layout: &GridLayout, wrap: bool) -> Option<usize> {
        let n = layout.item_count();
        let cols = layout.columns();
        let Some(index) = self.index else {
            return Self::clamp_index(0, n);
        };
        if n == 0 {
            return None;
        }

        if index + cols < n {
            Some(index + cols)
        } else if wrap && cols == 1 {
            Some((index + cols) % n)
        } else {
            None
        }
    }

    /// Target of moving one row up, if the move is allowed.
    pub fn up_target(&self, layout: &GridLayout, wrap: bool) -> Option<usize> {
        let n = layout.item_count();
        let cols = layout.columns();
        let Some(index) = self.index else {
            return Self::clamp_index(0, n);
        };
        if n == 0 {
            return None;
        }

        if index >= cols {
            Some(index - cols)
        } else if wrap && cols == 1 {
            Some((index + n - cols) % n)
        } else {
            None
        }
    }

    /// Target of moving one column right; single-column lists never move sideways.
    pub fn right_target(&self, layout: &GridLayout, wrap: bool) -> Option<usize> {
        let n = layout.item_count();
        if layout.columns() < 2 || n == 0 {
            return None;
        }
        let Some(index) = self.index else {
            return Some(0);
        };

        if index + 1 < n {
            Some(index + 1)
        } else if wrap && layout.is_horizontal() {
            Some((index + 1) % n)
        } else {
            None
        }
    }

    /// Target of moving one column left; single-column lists never move sideways.
    pub fn left_target(&self, layout: &GridLayout, wrap: bool) -> Option<usize> {
        let n = layout.item_count();
        if layout.columns() < 2 || n == 0 {
            return None;
        }
        let Some(index) = self.index else {
            return Some(0);
        };

        if index > 0 {
            Some(index - 1)
        } else if wrap && layout.is_horizontal() {
            Some(n - 1)
        } else {
            None
        }
    }

    /// Top row and index after paging down, if another page exists.
    pub fn pagedown_target(&self, layout: &GridLayout, top_row: usize) -> Option<(usize, usize)> {
        let n = layout.item_count();
        if n == 0 || top_row + layout.page_rows() >= layout.rows() {
            return None;
        }
        let index = self.index.unwrap_or(0);
        let new_top = top_row + layout.page_rows();
        Some((new_top, (index + layout.page_items()).min(n - 1)))
    }

    /// Top row and index after paging up, if a previous page exists.
    pub fn pageup_target(&self, layout: &GridLayout, top_row: usize) -> Option<(usize, usize)> {
        if layout.item_count() == 0 || top_row == 0 {
            return None;
        }
        let index = self.index.unwrap_or(0);
        let new_top = top_row.saturating_sub(layout.page_rows());
        Some((new_top, index.saturating_sub(layout.page_items())))
    }
}
