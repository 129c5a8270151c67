//! Collects terminal events between ticks into one [`InputSnapshot`].
//!
//! Most terminals report neither key releases nor auto-repeat, only a stream
//! of presses. A press of a command seen again within [`HOLD_TICKS`] is
//! therefore treated as a repeat of a held key rather than a fresh press.

use std::collections::HashMap;

use gridlist_core::{Command, InputSnapshot, KeySnapshot, PointerSnapshot};

use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use crate::event::{AppMouseEvent, KeyPhase, PointerAction};

/// A press within this many ticks of the previous one continues a hold.
pub const HOLD_TICKS: u64 = 2;

/// Wheel delta reported per notch, in layout units.
pub const WHEEL_NOTCH: f32 = 20.0;

#[derive(Debug, Default)]
pub struct InputTracker {
    tick: u64,
    /// Monotonic event counter shared by keys and pointer.
    stamp: u64,
    /// Tick at which each command was last pressed.
    held: HashMap<Command, u64>,
    keys: KeySnapshot,
    pointer: PointerSnapshot,
    button_down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_stamp(&mut self) -> u64 {
        self.stamp += 1;
        self.stamp
    }

    /// Record a key event bound to `command`.
    pub fn key(&mut self, command: Command, phase: KeyPhase) {
        match phase {
            KeyPhase::Press => {
                let held = self
                    .held
                    .get(&command)
                    .is_some_and(|&last| self.tick.saturating_sub(last) <= HOLD_TICKS);
                if held {
                    self.keys.repeat(command);
                } else {
                    self.keys.trigger(command);
                }
                self.held.insert(command, self.tick);
            }
            KeyPhase::Repeat => {
                self.keys.repeat(command);
                self.held.insert(command, self.tick);
            }
            KeyPhase::Release => {
                self.held.remove(&command);
                return;
            }
        }
        self.keys.updated_at = self.next_stamp();
    }

    /// Record a mouse event, converting its cell to layout units.
    pub fn mouse(&mut self, event: AppMouseEvent) {
        let (x, y) = cell_center(event.column, event.row);
        self.pointer.x = x;
        self.pointer.y = y;

        match event.action {
            PointerAction::PrimaryDown => {
                self.pointer.triggered = true;
                self.button_down = true;
            }
            PointerAction::PrimaryUp => {
                self.pointer.released = true;
                self.button_down = false;
            }
            PointerAction::Drag => {
                self.pointer.moved = true;
                self.button_down = true;
            }
            PointerAction::Moved => self.pointer.moved = true,
            PointerAction::SecondaryDown => self.pointer.cancelled = true,
            PointerAction::ScrollDown => self.pointer.wheel_y += WHEEL_NOTCH,
            PointerAction::ScrollUp => self.pointer.wheel_y -= WHEEL_NOTCH,
        }
        self.pointer.updated_at = self.next_stamp();
    }

    /// Close the current tick and return everything seen during it.
    pub fn snapshot(&mut self) -> InputSnapshot {
        self.pointer.pressed = self.button_down;

        let snapshot = InputSnapshot {
            keys: self.keys.clone(),
            pointer: self.pointer.clone(),
        };

        self.keys.clear();
        self.pointer.triggered = false;
        self.pointer.released = false;
        self.pointer.cancelled = false;
        self.pointer.moved = false;
        self.pointer.wheel_x = 0.0;
        self.pointer.wheel_y = 0.0;
        self.tick += 1;

        snapshot
    }

    /// Forget held keys and pending edges, e.g. after a command was handled.
    ///
    /// Pointer position and event stamps are kept so hover ordering survives.
    pub fn flush(&mut self) {
        self.held.clear();
        self.keys.clear();
        self.pointer.triggered = false;
        self.pointer.cancelled = false;
        self.pointer.wheel_y = 0.0;
    }
}

/// Layout-unit position of the center of a terminal cell.
pub fn cell_center(column: u16, row: u16) -> (f32, f32) {
    (
        (f32::from(column) + 0.5) * CELL_WIDTH,
        (f32::from(row) + 0.5) * CELL_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(action: PointerAction, column: u16, row: u16) -> AppMouseEvent {
        AppMouseEvent {
            action,
            column,
            row,
        }
    }

    #[test]
    fn test_first_press_triggers() {
        let mut tracker = InputTracker::new();
        tracker.key(Command::Down, KeyPhase::Press);

        let snapshot = tracker.snapshot();
        assert!(snapshot.keys.is_triggered(Command::Down));
        assert!(snapshot.keys.is_repeated(Command::Down));
    }

    #[test]
    fn test_quick_second_press_repeats() {
        let mut tracker = InputTracker::new();
        tracker.key(Command::Down, KeyPhase::Press);
        tracker.snapshot();
        tracker.snapshot();

        tracker.key(Command::Down, KeyPhase::Press);
        let snapshot = tracker.snapshot();
        assert!(!snapshot.keys.is_triggered(Command::Down));
        assert!(snapshot.keys.is_repeated(Command::Down));
    }

    #[test]
    fn test_press_after_gap_triggers_again() {
        let mut tracker = InputTracker::new();
        tracker.key(Command::Up, KeyPhase::Press);
        for _ in 0..4 {
            tracker.snapshot();
        }

        tracker.key(Command::Up, KeyPhase::Press);
        assert!(tracker.snapshot().keys.is_triggered(Command::Up));
    }

    #[test]
    fn test_release_and_repeat_phases() {
        let mut tracker = InputTracker::new();
        tracker.key(Command::Left, KeyPhase::Press);
        tracker.key(Command::Left, KeyPhase::Release);
        tracker.snapshot();

        tracker.key(Command::Left, KeyPhase::Press);
        assert!(tracker.snapshot().keys.is_triggered(Command::Left));

        tracker.key(Command::Left, KeyPhase::Repeat);
        let snapshot = tracker.snapshot();
        assert!(!snapshot.keys.is_triggered(Command::Left));
        assert!(snapshot.keys.is_repeated(Command::Left));
    }

    #[test]
    fn test_pointer_press_drag_release() {
        let mut tracker = InputTracker::new();
        tracker.mouse(mouse(PointerAction::PrimaryDown, 2, 1));
        let down = tracker.snapshot();
        assert!(down.pointer.triggered && down.pointer.pressed);
        assert_eq!((down.pointer.x, down.pointer.y), (20.0, 24.0));

        tracker.mouse(mouse(PointerAction::Drag, 2, 3));
        let drag = tracker.snapshot();
        assert!(!drag.pointer.triggered);
        assert!(drag.pointer.pressed && drag.pointer.moved);

        // Button still held with no new events.
        assert!(tracker.snapshot().pointer.pressed);

        tracker.mouse(mouse(PointerAction::PrimaryUp, 2, 3));
        let up = tracker.snapshot();
        assert!(up.pointer.released && !up.pointer.pressed);
    }

    #[test]
    fn test_wheel_notches_accumulate() {
        let mut tracker = InputTracker::new();
        tracker.mouse(mouse(PointerAction::ScrollDown, 0, 0));
        tracker.mouse(mouse(PointerAction::ScrollDown, 0, 0));
        assert_eq!(tracker.snapshot().pointer.wheel_y, 40.0);
        assert_eq!(tracker.snapshot().pointer.wheel_y, 0.0);

        tracker.mouse(mouse(PointerAction::ScrollUp, 0, 0));
        assert_eq!(tracker.snapshot().pointer.wheel_y, -20.0);
    }

    #[test]
    fn test_stamps_order_keys_and_pointer() {
        let mut tracker = InputTracker::new();
        tracker.key(Command::Down, KeyPhase::Press);
        tracker.mouse(mouse(PointerAction::Moved, 1, 1));
        assert!(tracker.snapshot().pointer_is_newer());

        tracker.key(Command::Down, KeyPhase::Press);
        assert!(!tracker.snapshot().pointer_is_newer());
    }

    #[test]
    fn test_flush_forgets_holds() {
        let mut tracker = InputTracker::new();
        tracker.key(Command::Ok, KeyPhase::Press);
        tracker.flush();
        assert!(!tracker.snapshot().keys.is_repeated(Command::Ok));

        tracker.key(Command::Ok, KeyPhase::Press);
        assert!(tracker.snapshot().keys.is_triggered(Command::Ok));
    }
}
