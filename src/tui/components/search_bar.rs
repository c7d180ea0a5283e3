//! # SearchBar Component
//!
//! Single-line search field above the plant list.
//!
//! ## Responsibilities
//!
//! - Capture text while focused (`/` focuses it from browse mode)
//! - Emit the new search text on every edit so the list filters as you type
//! - Hand focus back on Enter or Esc
//!
//! The buffer is internal state. `focused` and `palette` are props synced
//! from `TuiState` each frame.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const PLACEHOLDER: &str = "Search plants...";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Buffer changed; carries the full new text.
    Changed(String),
    /// User left the field (Enter or Esc).
    Done,
}

pub struct SearchBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
    /// Colors (Prop)
    pub palette: Palette,
}

impl SearchBar {
    pub fn new(initial: String, palette: Palette) -> Self {
        Self {
            buffer: initial,
            focused: false,
            palette,
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit | TuiEvent::Escape => Some(SearchEvent::Done),
            _ => None,
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            Style::default().fg(self.palette.border)
        } else {
            Style::default().fg(self.palette.muted)
        };
        let block = Block::bordered()
            .title(" Search ")
            .border_style(border)
            .title_style(border);

        let paragraph = if self.buffer.is_empty() && !self.focused {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(self.palette.muted))
        } else {
            Paragraph::new(self.buffer.as_str()).style(Style::default().fg(self.palette.text))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let text_width = u16::try_from(self.buffer.width()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(text_width).min(max_x);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}
