//! Selectable grid list engine
//!
//! This crate provides the navigation and scrolling core of a selectable list
//! widget. Hosts feed it one input snapshot per tick and draw whatever it reports.
//! It supports:
//! - Uniform grid layout with padding, spacing and a partially visible bottom row
//! - Keyboard navigation with wrap-around and paging
//! - Row-aligned scrolling with a sub-row offset and release momentum
//! - Pointer hit testing, tap/drag/swipe gestures, hover selection and wheel
//! - Named command handlers (`ok`, `cancel`, `pageup`, `pagedown`, custom)
//!
//! # Example
//!
//! ```ignore
//! use gridlist_core::{EngineConfig, HandlerSymbol, InputSnapshot, ListGeometry, SelectableList};
//!
//! let geometry = ListGeometry { width: 320.0, height: 240.0, spacing: 8.0, padding: 12.0 };
//! let mut list = SelectableList::new(my_provider, geometry, EngineConfig::default())?;
//! list.set_handler(HandlerSymbol::Ok, || println!("picked"))?;
//! list.activate();
//! list.select(0);
//!
//! let mut cues = Vec::new();
//! list.update(&InputSnapshot::default(), &mut cues);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
mod controller;
pub mod error;
pub mod handlers;
pub mod input;
pub mod layout;
pub mod list;
pub mod navigation;
pub mod provider;
pub mod scroll;
pub mod touch;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::EngineConfig;
pub use error::ListError;
pub use handlers::HandlerSymbol;
pub use input::{Command, InputSnapshot, KeySnapshot, PointerSnapshot};
pub use layout::{GridLayout, ListGeometry, Rect};
pub use list::{ListEvent, SelectableList};
pub use provider::{ContentProvider, Cue, CueSink};
pub use scroll::ScrollArrows;
pub use touch::TouchState;
