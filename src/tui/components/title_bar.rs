//! # TitleBar Component
//!
//! Top line: app name, how many plants are showing, and the status message.
//!
//! Stateless. All three props come from core `App` state and are handed in
//! every frame:
//!
//! 1. **Status message**: `"Botanical Haven | 3 of 6 plants | Sorted by Rating ↓"`
//! 2. **Default**: `"Botanical Haven | 6 of 6 plants"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TitleBar {
    pub status_message: String,
    pub shown: usize,
    pub total: usize,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(status_message: String, shown: usize, total: usize, palette: Palette) -> Self {
        Self {
            status_message,
            shown,
            total,
            palette,
        }
    }

    fn text(&self) -> String {
        let count = format!("{} of {} plants", self.shown, self.total);
        if self.status_message.is_empty() {
            format!(" | {count}")
        } else {
            format!(" | {count} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " Botanical Haven",
                Style::default()
                    .fg(self.palette.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.text(), Style::default().fg(self.palette.muted)),
        ]);
        frame.render_widget(line, area);
    }
}
