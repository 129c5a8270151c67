//! Terminal event types the host reacts to.
//!
//! crossterm events are converted here so the rest of the host (key
//! matching, the input tracker) never depends on crossterm's modifier
//! bitflags or mouse event layout directly.

pub use crossterm::event::KeyCode;
use crossterm::event::{KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// How a key event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Press,
    /// Auto-repeat reported by terminals with the kitty keyboard protocol.
    Repeat,
    Release,
}

/// Keyboard event with flattened modifiers.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub phase: KeyPhase,
}

impl AppKeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
            phase: KeyPhase::Press,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_phase(mut self, phase: KeyPhase) -> Self {
        self.phase = phase;
        self
    }
}

impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            phase: match event.kind {
                KeyEventKind::Press => KeyPhase::Press,
                KeyEventKind::Repeat => KeyPhase::Repeat,
                KeyEventKind::Release => KeyPhase::Release,
            },
        }
    }
}

/// Mouse action, reduced to what the list understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    PrimaryDown,
    PrimaryUp,
    Drag,
    Moved,
    SecondaryDown,
    ScrollDown,
    ScrollUp,
}

/// Mouse event at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppMouseEvent {
    pub action: PointerAction,
    pub column: u16,
    pub row: u16,
}

impl AppMouseEvent {
    /// `None` for mouse events the list has no use for (middle button, horizontal wheel).
    pub fn from_crossterm(event: crossterm::event::MouseEvent) -> Option<Self> {
        let action = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerAction::PrimaryDown,
            MouseEventKind::Up(MouseButton::Left) => PointerAction::PrimaryUp,
            MouseEventKind::Drag(MouseButton::Left) => PointerAction::Drag,
            MouseEventKind::Moved => PointerAction::Moved,
            MouseEventKind::Down(MouseButton::Right) => PointerAction::SecondaryDown,
            MouseEventKind::ScrollDown => PointerAction::ScrollDown,
            MouseEventKind::ScrollUp => PointerAction::ScrollUp,
            _ => return None,
        };
        Some(Self {
            action,
            column: event.column,
            row: event.row,
        })
    }
}
