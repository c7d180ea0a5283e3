//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Key Routing
//!
//! Events go to the first of these that applies:
//!
//! 1. **Ctrl+C** quits from anywhere.
//! 2. **Detail overlay** (navigator open): ←/→ plant, Tab/BackTab or i/c/s tab, Esc/q close.
//! 3. **Search** mode: the search bar gets the keys until Enter/Esc.
//! 4. **Browse** mode: list cursor and the single-key commands.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (care gauges filling): draws every ~30ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
pub mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::navigator::DetailTab;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::progress_bar::FILL_DURATION;
use crate::tui::components::{PlantListState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Palette;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Move through the list and use single-key commands.
    Browse,
    /// Type into the search bar. Enter or Esc returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub plant_list: PlantListState,
    pub search_bar: SearchBar,
    pub input_mode: InputMode,
    /// When the current detail plant or tab appeared. Drives the gauge fill.
    pub detail_shown_at: Option<Instant>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut plant_list = PlantListState::new();
        plant_list.reset(app.visible_ids().len());
        Self {
            plant_list,
            search_bar: SearchBar::new(
                app.view.search_term().to_string(),
                Palette::for_theme(app.theme),
            ),
            input_mode: InputMode::Browse,
            detail_shown_at: None,
        }
    }

    fn animating(&self, app: &App, now: Instant) -> bool {
        app.navigator.current_tab() == Some(DetailTab::Care)
            && self
                .detail_shown_at
                .is_some_and(|shown| now.saturating_duration_since(shown) < FILL_DURATION)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse scroll)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(app: App) -> std::io::Result<()> {
    let mut app = app;
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let animating = tui.animating(&app, now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Route one event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    // Resize just needs a redraw
    if event == TuiEvent::Resize {
        return false;
    }
    if event == TuiEvent::ForceQuit {
        return dispatch(app, tui, Action::Quit);
    }

    if app.navigator.is_open() {
        let action = match event {
            TuiEvent::CursorLeft => Some(Action::PreviousPlant),
            TuiEvent::CursorRight => Some(Action::NextPlant),
            TuiEvent::Tab => Some(Action::NextTab),
            TuiEvent::BackTab => Some(Action::PreviousTab),
            TuiEvent::InputChar('i') => Some(Action::SelectTab(DetailTab::Info)),
            TuiEvent::InputChar('c') => Some(Action::SelectTab(DetailTab::Care)),
            TuiEvent::InputChar('s') => Some(Action::SelectTab(DetailTab::Stats)),
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::ClosePlant),
            _ => None,
        };
        return action.is_some_and(|action| dispatch(app, tui, action));
    }

    match tui.input_mode {
        InputMode::Search => match tui.search_bar.handle_event(&event) {
            Some(SearchEvent::Changed(text)) => dispatch(app, tui, Action::SetSearchTerm(text)),
            Some(SearchEvent::Done) => {
                tui.input_mode = InputMode::Browse;
                false
            }
            None => false,
        },
        InputMode::Browse => {
            let len = app.visible_ids().len();
            let action = match event {
                TuiEvent::CursorUp => {
                    tui.plant_list.select_previous(len);
                    None
                }
                TuiEvent::CursorDown => {
                    tui.plant_list.select_next(len);
                    None
                }
                TuiEvent::InputChar('/') => {
                    tui.input_mode = InputMode::Search;
                    None
                }
                TuiEvent::Submit => tui
                    .plant_list
                    .selected()
                    .and_then(|i| app.visible_ids().get(i).copied())
                    .map(Action::OpenPlant),
                TuiEvent::InputChar('f') => Some(Action::CycleDifficultyFilter),
                TuiEvent::InputChar('s') => Some(Action::CycleSortKey),
                TuiEvent::InputChar('o') => Some(Action::ToggleSortOrder),
                TuiEvent::InputChar('r') => Some(Action::Shuffle),
                TuiEvent::InputChar('t') => Some(Action::ToggleTheme),
                TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
                _ => None,
            };
            action.is_some_and(|action| dispatch(app, tui, action))
        }
    }
}

/// Apply an action and sync presentation state with its effect.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Ok(Effect::Quit) => return true,
        Ok(Effect::ListChanged) => {
            debug!("List changed: {} plants", app.visible_ids().len());
            tui.plant_list.reset(app.visible_ids().len());
        }
        Ok(Effect::SelectionChanged) => {
            tui.detail_shown_at = app.navigator.is_open().then(Instant::now);
        }
        Ok(Effect::None) => {}
        Err(e) => {
            warn!("Rejected action: {}", e);
            app.status_message = e.to_string();
        }
    }
    false
}
