//! Scenario tests for the list engine
//!
//! Tests are organized by topic:
//! - `navigation` - Selection, wrap-around and paging
//! - `scrolling` - Row alignment, clamping, momentum and hit testing
//! - `gestures` - Tap, drag, swipe, hover, wheel and edge nudges
//! - `handling` - Confirm/cancel dispatch and handler registration

mod scrolling;

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::config::EngineConfig;
use crate::handlers::HandlerSymbol;
use crate::input::{InputSnapshot, PointerSnapshot};
use crate::layout::{ListGeometry, Rect};
use crate::list::SelectableList;
use crate::provider::ContentProvider;

/// Fixed-size content with optional disabled entries.
pub(crate) struct Fixture {
    pub items: usize,
    pub columns: usize,
    pub item_height: f32,
    pub disabled: HashSet<usize>,
}

impl Fixture {
    pub fn column(items: usize) -> Self {
        Self {
            items,
            columns: 1,
            item_height: 10.0,
            disabled: HashSet::new(),
        }
    }

    pub fn grid(items: usize, columns: usize) -> Self {
        Self {
            columns,
            ..Self::column(items)
        }
    }
}

impl ContentProvider for Fixture {
    type Canvas = Vec<(usize, Rect)>;

    fn max_items(&self) -> usize {
        self.items
    }

    fn max_cols(&self) -> usize {
        self.columns
    }

    fn item_height(&self) -> f32 {
        self.item_height
    }

    fn is_current_item_enabled(&self, index: Option<usize>) -> bool {
        index.is_some_and(|i| !self.disabled.contains(&i))
    }

    fn draw_item(&self, index: usize, rect: Rect, canvas: &mut Self::Canvas) {
        canvas.push((index, rect));
    }
}

/// An open, active list whose content area is `rows` items tall and 100 wide.
pub(crate) fn active_list(fixture: Fixture, rows: usize) -> SelectableList<Fixture> {
    active_list_with(fixture, rows, EngineConfig::default())
}

pub(crate) fn active_list_with(
    fixture: Fixture,
    rows: usize,
    config: EngineConfig,
) -> SelectableList<Fixture> {
    let geometry = ListGeometry {
        width: 100.0,
        height: rows as f32 * fixture.item_height,
        ..ListGeometry::default()
    };
    let mut list = SelectableList::new(fixture, geometry, config).unwrap();
    list.activate();
    list.drain_events();
    list
}

/// Register a handler that counts its invocations.
pub(crate) fn counting_handler(
    list: &mut SelectableList<Fixture>,
    symbol: HandlerSymbol,
) -> Rc<Cell<u32>> {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    list.set_handler(symbol, move || counter.set(counter.get() + 1))
        .unwrap();
    calls
}

/// Pointer-only snapshot at `(x, y)` with the given stamp; keys are older.
pub(crate) fn pointer_at(x: f32, y: f32, stamp: u64) -> PointerSnapshot {
    PointerSnapshot {
        x,
        y,
        updated_at: stamp,
        ..PointerSnapshot::default()
    }
}

pub(crate) fn press(x: f32, y: f32) -> InputSnapshot {
    InputSnapshot {
        pointer: PointerSnapshot {
            triggered: true,
            pressed: true,
            ..pointer_at(x, y, 1)
        },
        ..InputSnapshot::default()
    }
}

pub(crate) fn hold(x: f32, y: f32) -> InputSnapshot {
    InputSnapshot {
        pointer: PointerSnapshot {
            pressed: true,
            moved: true,
            ..pointer_at(x, y, 1)
        },
        ..InputSnapshot::default()
    }
}

pub(crate) fn release(x: f32, y: f32) -> InputSnapshot {
    InputSnapshot {
        pointer: PointerSnapshot {
            released: true,
            ..pointer_at(x, y, 1)
        },
        ..InputSnapshot::default()
    }
}

pub(crate) fn idle() -> InputSnapshot {
    InputSnapshot::default()
}
