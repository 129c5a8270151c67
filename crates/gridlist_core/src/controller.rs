//! Per-tick input processing.
//!
//! [`SelectableList::update`] runs once per tick in a fixed order: arrow
//! visibility, cursor keys, command handling, wheel, pointer gestures, and
//! finally the stay counter. Every step reads the same [`InputSnapshot`].

use crate::handlers::HandlerSymbol;
use crate::input::{Command, InputSnapshot, KeySnapshot, PointerSnapshot};
use crate::list::{ListEvent, SelectableList};
use crate::provider::{ContentProvider, CueSink};
use crate::touch::{Gesture, Release, SwipeDirection, TouchState};

impl<P: ContentProvider> SelectableList<P> {
    /// Advance the list by one tick.
    pub fn update<C: CueSink + ?Sized>(&mut self, input: &InputSnapshot, cues: &mut C) {
        self.arrows = self.scroll.arrows(&self.layout);
        self.process_cursor_move(&input.keys, cues);
        self.process_handling(&input.keys, cues);
        self.process_wheel(&input.pointer);
        self.process_touch(input, cues);
        self.nav.stay_count = self.nav.stay_count.saturating_add(1);
    }

    // =========================================================================
    // Keys
    // =========================================================================

    fn process_cursor_move<C: CueSink + ?Sized>(&mut self, keys: &KeySnapshot, cues: &mut C) {
        if !self.is_cursor_movable() {
            return;
        }

        let last = self.nav.index;
        if keys.is_repeated(Command::Down) {
            self.cursor_down(keys.is_triggered(Command::Down));
        }
        if keys.is_repeated(Command::Up) {
            self.cursor_up(keys.is_triggered(Command::Up));
        }
        if keys.is_repeated(Command::Right) {
            self.cursor_right(keys.is_triggered(Command::Right));
        }
        if keys.is_repeated(Command::Left) {
            self.cursor_left(keys.is_triggered(Command::Left));
        }
        if !self.is_handled(&HandlerSymbol::PageDown) && keys.is_triggered(Command::PageDown) {
            self.cursor_pagedown();
        }
        if !self.is_handled(&HandlerSymbol::PageUp) && keys.is_triggered(Command::PageUp) {
            self.cursor_pageup();
        }

        if self.nav.index != last {
            cues.play_cursor();
        }
    }

    fn process_handling<C: CueSink + ?Sized>(&mut self, keys: &KeySnapshot, cues: &mut C) {
        if !self.is_open_and_active() {
            return;
        }

        if keys.is_repeated(Command::Ok) && self.is_handled(&HandlerSymbol::Ok) {
            self.process_ok(cues);
        } else if keys.is_repeated(Command::Cancel) && self.is_handled(&HandlerSymbol::Cancel) {
            self.process_cancel(cues);
        } else if keys.is_triggered(Command::PageDown) && self.is_handled(&HandlerSymbol::PageDown)
        {
            self.process_page(HandlerSymbol::PageDown, cues);
        } else if keys.is_triggered(Command::PageUp) && self.is_handled(&HandlerSymbol::PageUp) {
            self.process_page(HandlerSymbol::PageUp, cues);
        }
    }

    /// Confirm the current selection. A disabled item only buzzes.
    pub fn process_ok<C: CueSink + ?Sized>(&mut self, cues: &mut C) {
        if !self.provider.is_current_item_enabled(self.nav.index) {
            tracing::debug!(index = ?self.nav.index, "confirm rejected: item disabled");
            cues.play_buzzer();
            return;
        }

        cues.play_ok();
        self.flush_input();
        self.deactivate();
        self.call_handler(&HandlerSymbol::Ok);
    }

    pub fn process_cancel<C: CueSink + ?Sized>(&mut self, cues: &mut C) {
        cues.play_cancel();
        self.flush_input();
        self.deactivate();
        self.call_handler(&HandlerSymbol::Cancel);
    }

    fn process_page<C: CueSink + ?Sized>(&mut self, symbol: HandlerSymbol, cues: &mut C) {
        cues.play_cursor();
        self.flush_input();
        self.deactivate();
        self.call_handler(&symbol);
    }

    /// Ask the host to drop pending key and pointer state. Consecutive
    /// requests within a tick collapse into one event.
    fn flush_input(&mut self) {
        if self.events.last() != Some(&ListEvent::InputFlushed) {
            self.events.push(ListEvent::InputFlushed);
        }
    }

    // =========================================================================
    // Wheel
    // =========================================================================

    fn process_wheel(&mut self, pointer: &PointerSnapshot) {
        if !self.is_open_and_active() {
            self.wheel_accum = 0.0;
            return;
        }

        let (x, y) = self.to_local(pointer.x, pointer.y);
        if !self.layout.frame_rect().contains(x, y) {
            self.wheel_accum = 0.0;
            return;
        }
        if pointer.wheel_y == 0.0 {
            return;
        }

        if self.wheel_accum != 0.0 && self.wheel_accum.signum() != pointer.wheel_y.signum() {
            self.wheel_accum = 0.0;
        }
        self.wheel_accum += pointer.wheel_y;

        let threshold = self.config.wheel_threshold;
        if self.wheel_accum >= threshold {
            self.wheel_accum = 0.0;
            self.set_top_row(self.top_row() + 1);
            self.pull_selection_into_view();
        } else if self.wheel_accum <= -threshold {
            self.wheel_accum = 0.0;
            self.set_top_row(self.top_row().saturating_sub(1));
            self.pull_selection_into_view();
        }
    }

    /// Move the selection to the nearest fully visible row, keeping its column.
    fn pull_selection_into_view(&mut self) {
        let Some(index) = self.nav.index else {
            return;
        };

        let columns = self.layout.columns();
        let top_row = self.top_row();
        let bottom_row = top_row + self.layout.page_rows().max(1) - 1;
        let row = self.layout.row(index).clamp(top_row, bottom_row);
        self.set_index(Some(row * columns + self.layout.column(index)));
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn process_touch<C: CueSink + ?Sized>(&mut self, input: &InputSnapshot, cues: &mut C) {
        if !self.is_open_and_active() {
            self.touch.reset();
            self.coast();
            return;
        }

        let pointer = &input.pointer;
        let (x, y) = self.to_local(pointer.x, pointer.y);

        if self.touch.is_touching() {
            if pointer.pressed && !pointer.released {
                self.continue_touch(x, y, cues);
            } else {
                self.end_touch(x, y, cues);
            }
            return;
        }

        if pointer.cancelled {
            if self.is_handled(&HandlerSymbol::Cancel) {
                self.process_cancel(cues);
            }
            return;
        }

        if pointer.triggered && self.layout.frame_rect().contains(x, y) {
            self.begin_touch(x, y, cues);
            if pointer.released {
                self.end_touch(x, y, cues);
            }
            return;
        }

        self.coast();
        if pointer.moved {
            self.process_hover(input, x, y);
        }
    }

    fn begin_touch<C: CueSink + ?Sized>(&mut self, x: f32, y: f32, cues: &mut C) {
        let inside_content = self.layout.content_rect().contains(x, y);
        let hit = self.hit_test(x, y);

        self.scroll.clear_momentum();
        self.touch.press(Gesture::new(x, y, inside_content, hit));

        if let Some(index) = hit {
            self.select_by_pointer(index, cues);
        }
    }

    fn continue_touch<C: CueSink + ?Sized>(&mut self, x: f32, y: f32, cues: &mut C) {
        let Some(step) = self.touch.track(x, y, self.config.drag_threshold) else {
            return;
        };

        if step.inside_content {
            self.scroll.add_speed(step.delta_y);
        }

        if step.started_drag {
            tracing::trace!("press became a drag");
            if step.inside_content {
                if let Some(gesture) = self.touch.gesture() {
                    let (_, dy) = gesture.displacement();
                    self.scroll_by(-dy);
                }
            }
        } else if step.dragging {
            if step.inside_content {
                self.scroll_by(step.delta_y);
            }
        } else if self.layout.frame_rect().contains(x, y) {
            match self.hit_test(x, y) {
                Some(index) => self.select_by_pointer(index, cues),
                None => self.nudge(y, cues),
            }
        }
    }

    /// Held press resting on the frame edge: step the cursor towards it.
    fn nudge<C: CueSink + ?Sized>(&mut self, y: f32, cues: &mut C) {
        if self.nav.stay_count < self.config.nudge_stay_ticks {
            return;
        }

        let frame = self.layout.frame_rect();
        let band = self.config.nudge_edge_band.max(self.layout.padding_size());
        let last = self.nav.index;
        if y < frame.y + band {
            self.cursor_up(false);
        } else if y >= frame.bottom() - band {
            self.cursor_down(false);
        }
        if self.nav.index != last {
            cues.play_cursor();
        }
    }

    fn end_touch<C: CueSink + ?Sized>(&mut self, x: f32, y: f32, cues: &mut C) {
        // Travel between the last held tick and the release still scrolls.
        if let TouchState::Dragging(gesture) = &self.touch
            && gesture.inside_content
            && gesture.last_y != y
        {
            let delta = gesture.last_y - y;
            self.scroll.add_speed(delta);
            self.scroll_by(delta);
        }

        let Some(release) = self.touch.release(x, y, &self.config) else {
            return;
        };

        match release {
            Release::Swipe(direction) => {
                self.scroll.clear_momentum();
                let symbol = match direction {
                    SwipeDirection::Left => HandlerSymbol::PageDown,
                    SwipeDirection::Right => HandlerSymbol::PageUp,
                };
                tracing::debug!(?direction, %symbol, "swipe");
                if self.is_handled(&symbol) {
                    self.process_page(symbol, cues);
                }
            }
            Release::Tap(gesture) => {
                self.scroll.clear_momentum();
                let hit = self.hit_test(x, y);
                let confirms = hit.is_some()
                    && hit == gesture.pressed_index
                    && hit == self.nav.index
                    && self.is_handled(&HandlerSymbol::Ok);
                if confirms {
                    self.process_ok(cues);
                }
                self.flush_input();
            }
            Release::Drag(_) => {
                tracing::trace!(speed = self.scroll.speed(false), "drag released");
            }
        }
    }

    fn select_by_pointer<C: CueSink + ?Sized>(&mut self, index: usize, cues: &mut C) {
        if !self.is_cursor_movable() || self.nav.index == Some(index) {
            return;
        }
        self.select(index);
        cues.play_cursor();
    }

    fn process_hover(&mut self, input: &InputSnapshot, x: f32, y: f32) {
        if !self.config.hover_select || !input.pointer_is_newer() || !self.is_cursor_movable() {
            return;
        }
        if let Some(index) = self.hit_test(x, y) {
            if self.nav.index != Some(index) {
                self.hover_select(index);
            }
        }
    }

    fn coast(&mut self) {
        if !matches!(self.touch, TouchState::Idle) {
            return;
        }
        if let Some(true) = self.scroll.coast(&self.layout) {
            self.events.push(ListEvent::Redraw);
        }
    }
}
