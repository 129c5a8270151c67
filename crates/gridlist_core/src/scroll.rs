//! Row-aligned scrolling with a sub-row origin offset and momentum.
//!
//! Scroll position is split in two:
//! - `top_row`: whole rows, always in `[0, max_top_row]`. `scroll_y` is derived
//!   as `top_row * item_height`, so it is always an exact multiple of the row height.
//! - `origin_y`: drag displacement not yet resolved into a row change, in
//!   `[0, item_height)`. Renderers offset content by `scroll_y + origin_y`.
//!
//! Momentum is a short queue of recent per-tick drag deltas. While the
//! pointer is down the newest sample is the velocity; after release the
//! average is used and decays geometrically every tick.

use std::collections::VecDeque;

use crate::config::EngineConfig;
use crate::layout::GridLayout;

/// Whether "more content" affordances should show above and below the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollArrows {
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollEngine {
    top_row: usize,
    origin_y: f32,
    momentum: VecDeque<f32>,
    capacity: usize,
    decay: f32,
    min_speed: f32,
}

impl ScrollEngine {
    pub fn new(config: &EngineConfig) -> Self {
        let capacity = config.momentum_capacity.max(1);
        Self {
            top_row: 0,
            origin_y: 0.0,
            momentum: VecDeque::with_capacity(capacity),
            capacity,
            decay: config.momentum_decay,
            min_speed: config.momentum_min_speed,
        }
    }

    pub fn top_row(&self) -> usize {
        self.top_row
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Row-aligned scroll position.
    pub fn scroll_y(&self, layout: &GridLayout) -> f32 {
        self.top_row as f32 * layout.item_height()
    }

    /// Total distance the content is shifted up, sub-row offset included.
    pub fn content_offset(&self, layout: &GridLayout) -> f32 {
        self.scroll_y(layout) + self.origin_y
    }

    /// Clamp `row` into range and align to it. Returns `true` if `scroll_y` changed.
    ///
    /// The origin offset is always discarded.
    pub fn set_top_row(&mut self, row: usize, layout: &GridLayout) -> bool {
        let row = row.min(layout.max_top_row());
        let changed = row != self.top_row;
        self.top_row = row;
        self.origin_y = 0.0;
        changed
    }

    /// Scroll so that `row` is the last fully visible row.
    pub fn set_bottom_row(&mut self, row: usize, layout: &GridLayout) -> bool {
        let page_rows = layout.page_rows().max(1);
        self.set_top_row((row + 1).saturating_sub(page_rows), layout)
    }

    /// Re-apply bounds after the layout changed underneath us.
    pub fn clamp_to(&mut self, layout: &GridLayout) -> bool {
        if self.top_row > layout.max_top_row() {
            return self.set_top_row(self.top_row, layout);
        }
        if self.top_row == layout.max_top_row() {
            self.origin_y = 0.0;
        }
        false
    }

    /// Set the offset relative to the current top row.
    ///
    /// Whole rows in `oy` move `top_row`, the remainder becomes `origin_y`.
    /// Reaching either end stops dead: `top_row` is clamped and the origin
    /// snaps to zero, so nothing beyond the content is ever revealed.
    /// Returns `true` if `top_row` changed.
    pub fn set_oy(&mut self, oy: f32, layout: &GridLayout) -> bool {
        let height = layout.item_height();
        let mut whole = (oy / height).floor();
        let mut remainder = oy - whole * height;
        if remainder >= height {
            // float rounding on tiny negative offsets
            whole += 1.0;
            remainder = 0.0;
        }

        let previous = self.top_row;
        let max_top = layout.max_top_row() as i64;
        let target = self.top_row as i64 + whole as i64;

        if target < 0 {
            self.top_row = 0;
            self.origin_y = 0.0;
        } else if target > max_top || (target == max_top && remainder > 0.0) {
            self.top_row = max_top as usize;
            self.origin_y = 0.0;
        } else {
            self.top_row = target as usize;
            self.origin_y = remainder;
        }

        if self.top_row != previous {
            tracing::trace!(top_row = self.top_row, origin_y = self.origin_y, "row scrolled");
        }
        self.top_row != previous
    }

    /// Shift the content by `amount` (positive scrolls further down the list).
    pub fn gain_oy(&mut self, amount: f32, layout: &GridLayout) -> bool {
        self.set_oy(self.origin_y + amount, layout)
    }

    /// Record a drag delta, evicting the oldest sample when full.
    pub fn add_speed(&mut self, speed: f32) {
        if self.momentum.len() == self.capacity {
            self.momentum.pop_front();
        }
        self.momentum.push_back(speed);
    }

    /// Instantaneous velocity while touching, smoothed velocity once released.
    pub fn speed(&self, touching: bool) -> f32 {
        if touching {
            return self.momentum.back().copied().unwrap_or(0.0);
        }
        if self.momentum.is_empty() {
            return 0.0;
        }
        self.momentum.iter().sum::<f32>() / self.momentum.len() as f32
    }

    pub fn has_momentum(&self) -> bool {
        !self.momentum.is_empty()
    }

    pub fn clear_momentum(&mut self) {
        self.momentum.clear();
    }

    /// Advance released momentum by one tick.
    ///
    /// Returns `None` when there is nothing to apply (the queue is empty or
    /// the velocity just fell under the stop threshold and was cleared),
    /// otherwise `Some(row_changed)`.
    pub fn coast(&mut self, layout: &GridLayout) -> Option<bool> {
        if self.momentum.is_empty() {
            return None;
        }

        let speed = self.speed(false);
        if speed.abs() < self.min_speed {
            self.momentum.clear();
            return None;
        }

        let changed = self.gain_oy(speed, layout);
        for sample in self.momentum.iter_mut() {
            *sample *= self.decay;
        }
        Some(changed)
    }

    /// Back to the top with no motion.
    pub fn reset(&mut self) {
        self.top_row = 0;
        self.origin_y = 0.0;
        self.momentum.clear();
    }

    pub fn arrows(&self, layout: &GridLayout) -> ScrollArrows {
        ScrollArrows {
            up: self.top_row > 0 || self.origin_y > 0.0,
            down: self.top_row < layout.max_top_row(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20 rows of height 10, 5 visible: max top row 15.
    fn layout() -> GridLayout {
        GridLayout::new(1, 20).item_size(50.0, 10.0).viewport(50.0, 50.0)
    }

    fn engine() -> ScrollEngine {
        ScrollEngine::new(&EngineConfig::default())
    }

    #[test]
    fn test_set_top_row_clamps() {
        let layout = layout();
        let mut scroll = engine();
        assert!(scroll.set_top_row(100, &layout));
        assert_eq!(scroll.top_row(), 15);
        assert!(!scroll.set_top_row(100, &layout));
        assert_eq!(scroll.scroll_y(&layout), 150.0);
    }

    #[test]
    fn test_set_top_row_resets_origin() {
        let layout = layout();
        let mut scroll = engine();
        scroll.gain_oy(4.0, &layout);
        assert_eq!(scroll.origin_y(), 4.0);
        assert!(!scroll.set_top_row(0, &layout));
        assert_eq!(scroll.origin_y(), 0.0);
    }

    #[test]
    fn test_set_bottom_row() {
        let layout = layout();
        let mut scroll = engine();
        scroll.set_bottom_row(9, &layout);
        assert_eq!(scroll.top_row(), 5);
        scroll.set_bottom_row(2, &layout);
        assert_eq!(scroll.top_row(), 0);
    }

    #[test]
    fn test_set_oy_decomposes_rows() {
        let layout = layout();
        let mut scroll = engine();
        assert!(scroll.set_oy(27.0, &layout));
        assert_eq!(scroll.top_row(), 2);
        assert!((scroll.origin_y() - 7.0).abs() < 1e-4);

        // Negative offset borrows from the row above.
        assert!(scroll.set_oy(-3.0, &layout));
        assert_eq!(scroll.top_row(), 1);
        assert!((scroll.origin_y() - 7.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_oy_stops_at_top() {
        let layout = layout();
        let mut scroll = engine();
        assert!(!scroll.gain_oy(-4.0, &layout));
        assert_eq!(scroll.top_row(), 0);
        assert_eq!(scroll.origin_y(), 0.0);
    }

    #[test]
    fn test_set_oy_stops_at_bottom() {
        let layout = layout();
        let mut scroll = engine();
        scroll.set_top_row(15, &layout);
        assert!(!scroll.gain_oy(5.0, &layout));
        assert_eq!(scroll.top_row(), 15);
        assert_eq!(scroll.origin_y(), 0.0);

        scroll.set_top_row(14, &layout);
        scroll.gain_oy(25.0, &layout);
        assert_eq!(scroll.top_row(), 15);
        assert_eq!(scroll.origin_y(), 0.0);
    }

    #[test]
    fn test_momentum_queue_is_bounded() {
        let mut scroll = engine();
        for speed in [1.0, 2.0, 3.0, 4.0] {
            scroll.add_speed(speed);
        }
        assert_eq!(scroll.speed(true), 4.0);
        assert_eq!(scroll.speed(false), 3.0); // (2 + 3 + 4) / 3
    }

    #[test]
    fn test_coast_stops_below_threshold() {
        let layout = layout();
        let mut scroll = engine();
        scroll.add_speed(1.5);
        assert_eq!(scroll.coast(&layout), None);
        assert!(!scroll.has_momentum());
        assert_eq!(scroll.origin_y(), 0.0);
    }

    #[test]
    fn test_reset() {
        let layout = layout();
        let mut scroll = engine();
        scroll.set_top_row(4, &layout);
        scroll.gain_oy(3.0, &layout);
        scroll.add_speed(10.0);
        scroll.reset();
        assert_eq!(scroll.top_row(), 0);
        assert_eq!(scroll.origin_y(), 0.0);
        assert!(!scroll.has_momentum());
    }

    #[test]
    fn test_arrows() {
        let layout = layout();
        let mut scroll = engine();
        assert_eq!(scroll.arrows(&layout), ScrollArrows { up: false, down: true });
        scroll.gain_oy(2.0, &layout);
        assert!(scroll.arrows(&layout).up);
        scroll.set_top_row(15, &layout);
        assert_eq!(scroll.arrows(&layout), ScrollArrows { up: true, down: false });
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut scroll = engine();
        scroll.set_top_row(15, &layout());
        let smaller = GridLayout::new(1, 8).item_size(50.0, 10.0).viewport(50.0, 50.0);
        assert!(scroll.clamp_to(&smaller));
        assert_eq!(scroll.top_row(), 3);
    }
}
