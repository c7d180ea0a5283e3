//! # Toolbar Component
//!
//! One line under the search field: difficulty chips on the left, the sort
//! indicator on the right. The active chip is highlighted.
//!
//! ```text
//!  All  Easy  Intermediate  Advanced          Sort: Rating ↓
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::core::view::{DifficultyFilter, SortKey, SortOrder};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct Toolbar {
    pub filter: DifficultyFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub palette: Palette,
}

impl Toolbar {
    fn chips(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(DifficultyFilter::CHIPS.len() * 2);
        for chip in DifficultyFilter::CHIPS {
            let style = if chip == self.filter {
                self.palette.chip_active
            } else {
                self.palette.chip_idle
            };
            spans.push(Span::styled(format!(" {} ", chip.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn sort_label(&self) -> String {
        format!("Sort: {} {} ", self.sort_key.label(), self.sort_order.arrow())
    }
}

impl Component for Toolbar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let sort_label = self.sort_label();
        let [chips_area, sort_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(sort_label.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(self.chips(), chips_area);
        frame.render_widget(
            Line::from(Span::styled(sort_label, Style::default().fg(self.palette.muted)))
                .right_aligned(),
            sort_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Difficulty;
    use crate::core::state::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_active_chip_is_highlighted() {
        let palette = Palette::for_theme(Theme::Light);
        let mut toolbar = Toolbar {
            filter: DifficultyFilter::Only(Difficulty::Easy),
            sort_key: SortKey::Rating,
            sort_order: SortOrder::Descending,
            palette,
        };

        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| toolbar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Intermediate"));
        assert!(text.contains("Sort: Rating ↓"));

        // " All " then a gap, so "Easy" starts at column 7.
        assert_eq!(buffer[(7, 0)].symbol(), "E");
        assert_eq!(buffer[(7, 0)].bg, palette.chip_active.bg.unwrap());
    }
}
