//! Command handlers registered by the owning widget.

use std::collections::HashMap;
use std::fmt;

use crate::error::ListError;

/// Name under which a handler is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandlerSymbol {
    Ok,
    Cancel,
    PageUp,
    PageDown,
    /// Owner-defined command, invoked through [`crate::SelectableList::call_handler`].
    Custom(String),
}

impl HandlerSymbol {
    const BUILT_IN: [(&'static str, HandlerSymbol); 4] = [
        ("ok", HandlerSymbol::Ok),
        ("cancel", HandlerSymbol::Cancel),
        ("pageup", HandlerSymbol::PageUp),
        ("pagedown", HandlerSymbol::PageDown),
    ];

    /// Parse a symbol name; built-in names map to their variants.
    pub fn parse(name: &str) -> Result<Self, ListError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyHandlerSymbol);
        }
        Ok(Self::BUILT_IN
            .iter()
            .find(|(built_in, _)| built_in.eq_ignore_ascii_case(trimmed))
            .map(|(_, symbol)| symbol.clone())
            .unwrap_or_else(|| HandlerSymbol::Custom(trimmed.to_string())))
    }

    /// Reject custom names that are empty or spell a built-in command.
    pub fn validate(&self) -> Result<(), ListError> {
        let HandlerSymbol::Custom(name) = self else {
            return Ok(());
        };
        if name.trim().is_empty() {
            return Err(ListError::EmptyHandlerSymbol);
        }
        if Self::BUILT_IN
            .iter()
            .any(|(built_in, _)| built_in.eq_ignore_ascii_case(name.trim()))
        {
            return Err(ListError::ReservedHandlerSymbol(name.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for HandlerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerSymbol::Ok => write!(f, "ok"),
            HandlerSymbol::Cancel => write!(f, "cancel"),
            HandlerSymbol::PageUp => write!(f, "pageup"),
            HandlerSymbol::PageDown => write!(f, "pagedown"),
            HandlerSymbol::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// Zero-argument callback invoked when a command is processed.
pub type Handler = Box<dyn FnMut()>;

/// Symbol → callback mapping. Missing entries mean "unhandled".
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<HandlerSymbol, Handler>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for `symbol`.
    pub fn set(&mut self, symbol: HandlerSymbol, handler: Handler) -> Result<(), ListError> {
        symbol.validate()?;
        self.handlers.insert(symbol, handler);
        Ok(())
    }

    pub fn remove(&mut self, symbol: &HandlerSymbol) -> bool {
        self.handlers.remove(symbol).is_some()
    }

    pub fn is_handled(&self, symbol: &HandlerSymbol) -> bool {
        self.handlers.contains_key(symbol)
    }

    /// Invoke the handler for `symbol`. Returns `false` when none is registered.
    pub fn call(&mut self, symbol: &HandlerSymbol) -> bool {
        match self.handlers.get_mut(symbol) {
            Some(handler) => {
                tracing::debug!(%symbol, "invoking handler");
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
