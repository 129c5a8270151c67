//! Per-tick input snapshots.
//!
//! The host samples its devices once per tick and hands the result to
//! [`crate::SelectableList::update`]. Nothing in the engine reads input any
//! other way.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Symbolic commands a discrete input source can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Ok,
    Cancel,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::PageUp,
        Command::PageDown,
        Command::Ok,
        Command::Cancel,
    ];
}

/// Key state for one tick.
///
/// `triggered` holds commands whose key went down this tick; `repeated` holds
/// commands whose key auto-repeated. A first press counts as a repeat too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeySnapshot {
    pub triggered: HashSet<Command>,
    pub repeated: HashSet<Command>,
    /// Monotonic stamp of the most recent key event.
    pub updated_at: u64,
}

impl KeySnapshot {
    pub fn is_triggered(&self, command: Command) -> bool {
        self.triggered.contains(&command)
    }

    pub fn is_repeated(&self, command: Command) -> bool {
        self.triggered.contains(&command) || self.repeated.contains(&command)
    }

    /// Mark a fresh press.
    pub fn trigger(&mut self, command: Command) {
        self.triggered.insert(command);
    }

    /// Mark an auto-repeat of a held key.
    pub fn repeat(&mut self, command: Command) {
        self.repeated.insert(command);
    }

    pub fn clear(&mut self) {
        self.triggered.clear();
        self.repeated.clear();
    }
}

/// Pointer state for one tick, in screen coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    pub x: f32,
    pub y: f32,
    /// The primary button went down this tick.
    pub triggered: bool,
    /// The primary button is held.
    pub pressed: bool,
    /// The primary button went up this tick.
    pub released: bool,
    /// The secondary button went down this tick.
    pub cancelled: bool,
    /// The pointer moved this tick.
    pub moved: bool,
    pub wheel_x: f32,
    pub wheel_y: f32,
    /// Monotonic stamp of the most recent pointer event.
    pub updated_at: u64,
}

/// Everything the engine reads in one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub keys: KeySnapshot,
    pub pointer: PointerSnapshot,
}

impl InputSnapshot {
    /// Convenience for key-only ticks.
    pub fn keys(triggered: &[Command]) -> Self {
        let mut snapshot = Self::default();
        for &command in triggered {
            snapshot.keys.trigger(command);
        }
        snapshot
    }

    /// Whether the pointer has been used more recently than the keyboard.
    pub fn pointer_is_newer(&self) -> bool {
        self.pointer.updated_at > self.keys.updated_at
    }
}
