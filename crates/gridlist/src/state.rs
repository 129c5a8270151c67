use std::cell::RefCell;
use std::rc::Rc;

use gridlist_core::{EngineConfig, HandlerSymbol, ListError, ListGeometry, SelectableList};
use ratatui::layout::Rect;

use crate::config::{CELL_HEIGHT, CELL_WIDTH, LayoutConfig};
use crate::cues::TerminalCues;
use crate::keybindings::KeybindingsConfig;
use crate::palette::Palette;

/// What a list handler asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Confirmed,
    Cancelled,
}

pub struct AppState {
    pub list: SelectableList<Palette>,
    pub keybindings: KeybindingsConfig,
    pub cues: TerminalCues,
    /// Outcome of the last confirm, shown in the status bar.
    pub status: Option<String>,
    pub exit: bool,
    layout: LayoutConfig,
    actions: Rc<RefCell<Vec<ListAction>>>,
}

impl AppState {
    pub fn new(
        palette: Palette,
        layout: LayoutConfig,
        engine: EngineConfig,
        keybindings: KeybindingsConfig,
    ) -> Result<Self, ListError> {
        let geometry = ListGeometry {
            spacing: layout.spacing,
            padding: layout.padding,
            ..ListGeometry::default()
        };
        let mut list = SelectableList::new(palette, geometry, engine)?;

        let actions = Rc::new(RefCell::new(Vec::new()));
        for (symbol, action) in [
            (HandlerSymbol::Ok, ListAction::Confirmed),
            (HandlerSymbol::Cancel, ListAction::Cancelled),
        ] {
            let queue = Rc::clone(&actions);
            list.set_handler(symbol, move || queue.borrow_mut().push(action))?;
        }

        list.activate();
        list.select(0);

        Ok(Self {
            list,
            keybindings,
            cues: TerminalCues::new(),
            status: None,
            exit: false,
            layout,
            actions,
        })
    }

    /// Size the list to the inside of its block at `inner` (terminal cells).
    pub fn fit_list(&mut self, inner: Rect) -> Result<(), ListError> {
        let padding = self.layout.padding;
        let geometry = ListGeometry {
            width: (f32::from(inner.width) * CELL_WIDTH - 2.0 * padding).max(0.0),
            height: (f32::from(inner.height) * CELL_HEIGHT - 2.0 * padding).max(0.0),
            spacing: self.layout.spacing,
            padding,
        };

        self.list.set_position(
            f32::from(inner.x) * CELL_WIDTH,
            f32::from(inner.y) * CELL_HEIGHT,
        );
        if geometry != self.list.geometry() {
            tracing::debug!(?geometry, "list resized");
            self.list.set_geometry(geometry)?;
        }
        Ok(())
    }

    /// Handler requests queued since the last call.
    pub fn take_actions(&self) -> Vec<ListAction> {
        std::mem::take(&mut *self.actions.borrow_mut())
    }

    /// Apply a handler request.
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Confirmed => {
                let picked = self
                    .list
                    .index()
                    .and_then(|index| self.list.provider().entry(index))
                    .map(|entry| entry.name.clone());
                if let Some(name) = picked {
                    tracing::info!(%name, "entry picked");
                    self.status = Some(format!("Picked {name}"));
                }
                self.list.activate();
            }
            ListAction::Cancelled => {
                tracing::info!("list cancelled");
                self.exit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use gridlist_core::{Command, InputSnapshot};

    use super::*;

    fn state() -> AppState {
        let layout = LayoutConfig::default();
        let palette = Palette::generate(40, layout.columns, layout.item_height());
        let mut state = AppState::new(
            palette,
            layout,
            EngineConfig::default(),
            KeybindingsConfig::default(),
        )
        .unwrap();
        state.fit_list(Rect::new(1, 1, 80, 10)).unwrap();
        state
    }

    #[test]
    fn test_fit_list_sizes_geometry() {
        let state = state();
        let geometry = state.list.geometry();
        // 80x10 cells less one row of padding on each side.
        assert_eq!(geometry.width, 608.0);
        assert_eq!(geometry.height, 128.0);
        assert_eq!(state.list.position(), (8.0, 16.0));
        assert_eq!(state.list.layout().page_rows(), 8);
    }

    #[test]
    fn test_confirm_reports_and_reactivates() {
        let mut state = state();
        state.list.select(2);
        state
            .list
            .update(&InputSnapshot::keys(&[Command::Ok]), &mut state.cues);

        let actions = state.take_actions();
        assert_eq!(actions, vec![ListAction::Confirmed]);
        assert!(!state.list.is_active());

        state.apply(ListAction::Confirmed);
        assert_eq!(state.status.as_deref(), Some("Picked Lime 1"));
        assert!(state.list.is_active());
        assert!(state.take_actions().is_empty());
    }

    #[test]
    fn test_disabled_entry_only_buzzes() {
        let mut state = state();
        state.list.select(6);
        state
            .list
            .update(&InputSnapshot::keys(&[Command::Ok]), &mut state.cues);

        assert!(state.take_actions().is_empty());
        assert!(state.cues.take_bell());
        assert!(state.list.is_active());
    }

    #[test]
    fn test_cancel_exits() {
        let mut state = state();
        state
            .list
            .update(&InputSnapshot::keys(&[Command::Cancel]), &mut state.cues);
        for action in state.take_actions() {
            state.apply(action);
        }
        assert!(state.exit);
    }
}
