//! Terminal host for the `gridlist_core` selectable grid list
//!
//! Renders a palette of named colors as a scrolling grid with ratatui and
//! feeds keyboard, mouse and wheel input into the list once per tick.

// ============================================================================
// App modules
// ============================================================================

pub mod app;
pub mod components;
pub mod state;

// ============================================================================
// Host plumbing
// ============================================================================

pub mod config;
pub mod cues;
pub mod event;
pub mod input_tracker;
pub mod keybindings;
pub mod logging;
pub mod palette;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use keybindings::KeybindingsConfig;
pub use logging::init_logging;
