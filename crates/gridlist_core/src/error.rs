//! Errors raised while building a list or registering handlers.
//!
//! The per-tick path never fails: out-of-range state is clamped and unknown
//! commands are ignored. Only construction and registration return errors.

use thiserror::Error;

/// Errors produced by [`crate::SelectableList`] construction and handler registration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    /// A layout metric cannot produce a usable grid.
    #[error("invalid layout: {field} must be {requirement} (got {value})")]
    InvalidLayout {
        field: &'static str,
        requirement: &'static str,
        value: f32,
    },
    /// Custom handler names must not be empty.
    #[error("handler symbol must not be empty")]
    EmptyHandlerSymbol,
    /// Custom handler names must not shadow a built-in command.
    #[error("handler symbol `{0}` is reserved for a built-in command")]
    ReservedHandlerSymbol(String),
}
