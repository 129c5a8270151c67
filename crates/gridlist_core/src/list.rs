//! The selectable list: selection, scroll and handlers behind one API.
//!
//! The per-tick input processing lives in `controller.rs`; this file holds
//! the state and the operations the owning widget calls directly.

use crate::config::EngineConfig;
use crate::error::ListError;
use crate::handlers::{HandlerSymbol, HandlerTable};
use crate::hit_test;
use crate::layout::{GridLayout, ListGeometry, Rect};
use crate::navigation::Navigation;
use crate::provider::ContentProvider;
use crate::scroll::{ScrollArrows, ScrollEngine};
use crate::touch::TouchState;

/// Notifications recorded for the owner, drained with [`SelectableList::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A selection was (re)applied; carries the resulting index.
    SelectionChanged(Option<usize>),
    /// The row-aligned scroll position changed or the content was refreshed.
    Redraw,
    /// Pending key/pointer state should be discarded by the input source.
    InputFlushed,
    Activated,
    Deactivated,
    HandlerInvoked(HandlerSymbol),
}

/// Navigation and scrolling engine for a grid of items supplied by `P`.
pub struct SelectableList<P: ContentProvider> {
    pub(crate) provider: P,
    pub(crate) config: EngineConfig,
    pub(crate) geometry: ListGeometry,
    pub(crate) layout: GridLayout,
    pub(crate) nav: Navigation,
    pub(crate) scroll: ScrollEngine,
    pub(crate) touch: TouchState,
    pub(crate) handlers: HandlerTable,
    pub(crate) events: Vec<ListEvent>,
    pub(crate) arrows: ScrollArrows,
    pub(crate) position: (f32, f32),
    pub(crate) open: bool,
    pub(crate) active: bool,
    /// The current selection came from hover and must not drive scrolling.
    pub(crate) hover_selecting: bool,
    pub(crate) wheel_accum: f32,
}

impl<P: ContentProvider> SelectableList<P> {
    /// Build a list over `provider`. Starts open, inactive, with nothing selected.
    pub fn new(provider: P, geometry: ListGeometry, config: EngineConfig) -> Result<Self, ListError> {
        let layout = Self::build_layout(&provider, &geometry)?;
        let scroll = ScrollEngine::new(&config);
        let arrows = scroll.arrows(&layout);

        Ok(Self {
            provider,
            config,
            geometry,
            layout,
            nav: Navigation::new(),
            scroll,
            touch: TouchState::Idle,
            handlers: HandlerTable::new(),
            events: Vec::new(),
            arrows,
            position: (0.0, 0.0),
            open: true,
            active: false,
            hover_selecting: false,
            wheel_accum: 0.0,
        })
    }

    fn build_layout(provider: &P, geometry: &ListGeometry) -> Result<GridLayout, ListError> {
        let layout = GridLayout::new(provider.max_cols(), provider.max_items())
            .item_size(
                provider.item_width(geometry.width, geometry.spacing),
                provider.item_height(),
            )
            .spacing(geometry.spacing)
            .viewport(geometry.width, geometry.height)
            .padding(geometry.padding);
        layout.validate()?;
        Ok(layout)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the content. Call [`Self::refresh`] after changing it.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn geometry(&self) -> ListGeometry {
        self.geometry
    }

    pub fn index(&self) -> Option<usize> {
        self.nav.index
    }

    pub fn stay_count(&self) -> u32 {
        self.nav.stay_count
    }

    pub fn top_row(&self) -> usize {
        self.scroll.top_row()
    }

    pub fn origin_y(&self) -> f32 {
        self.scroll.origin_y()
    }

    /// Arrow affordances as of the last tick.
    pub fn arrows(&self) -> ScrollArrows {
        self.arrows
    }

    pub fn touch_state(&self) -> &TouchState {
        &self.touch
    }

    pub fn has_momentum(&self) -> bool {
        self.scroll.has_momentum()
    }

    pub fn drain_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.events)
    }

    // =========================================================================
    // Open / active
    // =========================================================================

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_open_and_active(&self) -> bool {
        self.open && self.active
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.events.push(ListEvent::Activated);
        self.reselect();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.events.push(ListEvent::Deactivated);
        self.reselect();
    }

    pub fn cursor_fixed(&self) -> bool {
        self.nav.cursor_fixed
    }

    pub fn set_cursor_fixed(&mut self, fixed: bool) {
        self.nav.cursor_fixed = fixed;
    }

    pub fn cursor_all(&self) -> bool {
        self.nav.cursor_all
    }

    pub fn set_cursor_all(&mut self, all: bool) {
        self.nav.cursor_all = all;
    }

    pub fn is_cursor_movable(&self) -> bool {
        self.is_open_and_active()
            && !self.nav.cursor_fixed
            && !self.nav.cursor_all
            && self.layout.item_count() > 0
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select `index`, clamped to the last item.
    pub fn select(&mut self, index: usize) {
        self.set_index(Some(index));
    }

    pub fn deselect(&mut self) {
        self.set_index(None);
    }

    /// Re-run visibility and notification for the current index.
    pub fn reselect(&mut self) {
        self.set_index(self.nav.index);
    }

    pub(crate) fn set_index(&mut self, index: Option<usize>) {
        let clamped = index.and_then(|i| Navigation::clamp_index(i, self.layout.item_count()));
        if clamped != index {
            tracing::debug!(?index, ?clamped, "selection clamped to item range");
        }

        self.nav.index = clamped;
        self.nav.stay_count = 0;
        self.hover_selecting = false;
        self.ensure_cursor_visible();
        self.events.push(ListEvent::SelectionChanged(clamped));
    }

    /// Soft selection from pointer hover: no scrolling and no stay reset.
    pub(crate) fn hover_select(&mut self, index: usize) {
        self.nav.index = Navigation::clamp_index(index, self.layout.item_count());
        self.hover_selecting = true;
        self.events.push(ListEvent::SelectionChanged(self.nav.index));
    }

    pub fn cursor_down(&mut self, wrap: bool) {
        if !self.is_cursor_movable() {
            return;
        }
        if let Some(target) = self.nav.down_target(&self.layout, wrap) {
            self.set_index(Some(target));
        }
    }

    pub fn cursor_up(&mut self, wrap: bool) {
        if !self.is_cursor_movable() {
            return;
        }
        if let Some(target) = self.nav.up_target(&self.layout, wrap) {
            self.set_index(Some(target));
        }
    }

    pub fn cursor_right(&mut self, wrap: bool) {
        if !self.is_cursor_movable() {
            return;
        }
        if let Some(target) = self.nav.right_target(&self.layout, wrap) {
            self.set_index(Some(target));
        }
    }

    pub fn cursor_left(&mut self, wrap: bool) {
        if !self.is_cursor_movable() {
            return;
        }
        if let Some(target) = self.nav.left_target(&self.layout, wrap) {
            self.set_index(Some(target));
        }
    }

    pub fn cursor_pagedown(&mut self) {
        if !self.is_cursor_movable() {
            return;
        }
        if let Some((top_row, index)) = self.nav.pagedown_target(&self.layout, self.top_row()) {
            self.set_top_row(top_row);
            self.set_index(Some(index));
        }
    }

    pub fn cursor_pageup(&mut self) {
        if !self.is_cursor_movable() {
            return;
        }
        if let Some((top_row, index)) = self.nav.pageup_target(&self.layout, self.top_row()) {
            self.set_top_row(top_row);
            self.set_index(Some(index));
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Align the viewport to `row` (clamped). Returns `true` if it moved.
    pub fn set_top_row(&mut self, row: usize) -> bool {
        let changed = self.scroll.set_top_row(row, &self.layout);
        if changed {
            self.events.push(ListEvent::Redraw);
        }
        changed
    }

    pub fn set_bottom_row(&mut self, row: usize) -> bool {
        let changed = self.scroll.set_bottom_row(row, &self.layout);
        if changed {
            self.events.push(ListEvent::Redraw);
        }
        changed
    }

    pub fn reset_scroll(&mut self) {
        if self.scroll.top_row() != 0 {
            self.events.push(ListEvent::Redraw);
        }
        self.scroll.reset();
    }

    /// Scroll so the selected row is fully visible. No-op for hover selections.
    pub fn ensure_cursor_visible(&mut self) {
        if self.hover_selecting {
            return;
        }
        let Some(index) = self.nav.index else {
            return;
        };

        let row = self.layout.row(index);
        let top_row = self.scroll.top_row();
        let bottom_row = top_row + self.layout.page_rows().max(1) - 1;

        if row < top_row || (row == top_row && self.scroll.origin_y() > 0.0) {
            self.set_top_row(row);
        } else if row > bottom_row {
            self.set_bottom_row(row);
        }
    }

    /// Continuous scroll by `amount` units.
    pub(crate) fn scroll_by(&mut self, amount: f32) {
        if self.scroll.gain_oy(amount, &self.layout) {
            self.events.push(ListEvent::Redraw);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Content-local rect of `index` at the current scroll position.
    pub fn item_rect(&self, index: usize) -> Rect {
        self.layout
            .item_rect(index, self.scroll.content_offset(&self.layout))
    }

    /// Item under the widget-local point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        hit_test::hit_test(&self.layout, &self.scroll, x, y)
    }

    /// Screen position of the widget frame's top-left corner.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub(crate) fn to_local(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.position.0, y - self.position.1)
    }

    /// Change the space the list occupies and rebuild the layout.
    pub fn set_geometry(&mut self, geometry: ListGeometry) -> Result<(), ListError> {
        self.geometry = geometry;
        self.refresh()
    }

    /// Re-read the content provider and re-clamp scroll and selection.
    pub fn refresh(&mut self) -> Result<(), ListError> {
        self.layout = Self::build_layout(&self.provider, &self.geometry)?;
        self.scroll.clamp_to(&self.layout);

        let clamped = self
            .nav
            .index
            .and_then(|i| Navigation::clamp_index(i, self.layout.item_count()));
        if clamped != self.nav.index {
            self.set_index(clamped);
        }

        self.arrows = self.scroll.arrows(&self.layout);
        self.events.push(ListEvent::Redraw);
        Ok(())
    }

    /// Ask the provider to paint every visible item.
    pub fn draw(&self, canvas: &mut P::Canvas) {
        let visible = self
            .layout
            .visible_range(self.scroll.top_row(), self.scroll.origin_y());
        for index in visible {
            self.provider.draw_item(index, self.item_rect(index), canvas);
        }
    }

    // =========================================================================
    // Handlers
    // =========================================================================

    pub fn set_handler<F>(&mut self, symbol: HandlerSymbol, handler: F) -> Result<(), ListError>
    where
        F: FnMut() + 'static,
    {
        self.handlers.set(symbol, Box::new(handler))
    }

    pub fn remove_handler(&mut self, symbol: &HandlerSymbol) -> bool {
        self.handlers.remove(symbol)
    }

    pub fn is_handled(&self, symbol: &HandlerSymbol) -> bool {
        self.handlers.is_handled(symbol)
    }

    /// Invoke the handler for `symbol`, if one is registered.
    pub fn call_handler(&mut self, symbol: &HandlerSymbol) -> bool {
        let called = self.handlers.call(symbol);
        if called {
            self.events.push(ListEvent::HandlerInvoked(symbol.clone()));
        }
        called
    }
}
