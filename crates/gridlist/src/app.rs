use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use gridlist_core::{ListError, ListEvent};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Margin, Rect},
};

use crate::components::Component;
use crate::components::grid_view::GridView;
use crate::components::status_bar::StatusBar;
use crate::config::AppConfig;
use crate::event::{AppKeyEvent, AppMouseEvent, KeyPhase};
use crate::input_tracker::InputTracker;
use crate::keybindings::KeybindingsConfig;
use crate::palette::Palette;
use crate::state::AppState;

pub struct App {
    state: AppState,
    tracker: InputTracker,
    grid_view: GridView,
    status_bar: StatusBar,
    tick_rate: Duration,
    /// Inside of the grid block as of the last draw.
    list_inner: Rect,
}

impl App {
    pub fn new(
        config: &AppConfig,
        keybindings: KeybindingsConfig,
        items: usize,
    ) -> Result<Self, ListError> {
        let palette = Palette::generate(
            items,
            config.layout.columns,
            config.layout.item_height(),
        );
        let state = AppState::new(
            palette,
            config.layout.clone(),
            config.engine.clone(),
            keybindings,
        )?;

        Ok(Self {
            state,
            tracker: InputTracker::new(),
            grid_view: GridView::new(),
            status_bar: StatusBar::new(),
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
            list_inner: Rect::default(),
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        execute!(io::stdout(), EnableMouseCapture)?;
        let result = self.event_loop(terminal);
        execute!(io::stdout(), DisableMouseCapture)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut last_tick = Instant::now();
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.on_tick()?;
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let key = AppKeyEvent::from(key);
                if key.phase != KeyPhase::Release && self.state.keybindings.is_quit(&key) {
                    tracing::info!("quit requested");
                    self.state.exit = true;
                    return;
                }
                if let Some(command) = self.state.keybindings.command_for(&key) {
                    self.tracker.key(command, key.phase);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(mouse) = AppMouseEvent::from_crossterm(mouse) {
                    self.tracker.mouse(mouse);
                }
            }
            // Geometry follows the next draw.
            _ => {}
        }
    }

    /// Advance the list by one tick.
    fn on_tick(&mut self) -> color_eyre::Result<()> {
        self.state.fit_list(self.list_inner)?;

        let snapshot = self.tracker.snapshot();
        self.state.list.update(&snapshot, &mut self.state.cues);

        for event in self.state.list.drain_events() {
            match event {
                ListEvent::InputFlushed => self.tracker.flush(),
                ListEvent::HandlerInvoked(symbol) => tracing::debug!(%symbol, "handler invoked"),
                ListEvent::SelectionChanged(index) => tracing::trace!(?index, "selection"),
                _ => {}
            }
        }

        for action in self.state.take_actions() {
            self.state.apply(action);
        }

        if self.state.cues.take_bell() {
            ring_bell()?;
        }
        self.state.cues.tick();
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [list_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());
        self.list_inner = list_area.inner(Margin::new(1, 1));

        self.grid_view.render(frame, list_area, &self.state);
        self.status_bar.render(frame, status_area, &self.state);
    }
}

fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}
