//! # Plant List Component
//!
//! The main browse view: one two-line card per visible plant.
//!
//! ```text
//!  🌿 Monstera Deliciosa                          ★★★★☆ 4.5
//!     Intermediate · Medium water, bright indirect light
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PlantListState` lives in `TuiState` and survives between frames
//! - `PlantList` is created each frame with borrowed state and the plants
//!   `derive` produced

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Plant;
use crate::tui::components::star_rating::StarRating;
use crate::tui::theme::{Palette, accent_color};

pub const EMPTY_MESSAGE: &str = "No plants found. Try adjusting your search or filters.";

/// Persistent cursor state for the list.
#[derive(Debug, Default)]
pub struct PlantListState {
    pub list_state: ListState,
}

impl PlantListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Put the cursor back on the first row after the list changed.
    pub fn reset(&mut self, len: usize) {
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let previous = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }
}

/// Transient render wrapper for the plant list.
pub struct PlantList<'a> {
    state: &'a mut PlantListState,
    plants: &'a [&'a Plant],
    palette: Palette,
}

impl<'a> PlantList<'a> {
    pub fn new(state: &'a mut PlantListState, plants: &'a [&'a Plant], palette: Palette) -> Self {
        Self {
            state,
            plants,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(" Plants ")
            .title_bottom(
                Line::from(" ↑↓ Move  Enter Open  / Search  f Filter  s Sort  o Order  r Shuffle  t Theme  q Quit ")
                    .centered(),
            )
            .padding(Padding::horizontal(1));

        if self.plants.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(self.palette.muted))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .plants
            .iter()
            .map(|plant| self.card(plant, inner_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(self.palette.highlight)
            .highlight_symbol("▌");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn card(&self, plant: &Plant, width: usize) -> ListItem<'static> {
        let stars = StarRating::new(plant.rating, self.palette.star).spans();
        let stars_width: usize = stars.iter().map(|s| s.content.width()).sum();

        let head = format!("{} {}", plant.icon, plant.name);
        let gap = width.saturating_sub(head.width() + stars_width + 1).max(1);

        let mut first = vec![
            Span::styled(
                head,
                Style::default()
                    .fg(accent_color(plant.accent))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(gap)),
        ];
        first.extend(stars);

        let second = Line::from(vec![
            Span::raw("   "),
            Span::styled(
                plant.difficulty.label(),
                Style::default().fg(self.palette.text),
            ),
            Span::styled(
                format!(" · {}", plant.care),
                Style::default().fg(self.palette.muted),
            ),
        ]);

        ListItem::new(vec![Line::from(first), second])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::state::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(plants: &[&Plant], state: &mut PlantListState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                PlantList::new(state, plants, Palette::for_theme(Theme::Light))
                    .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_cards() {
        let catalog = Catalog::builtin().unwrap();
        let plants: Vec<&Plant> = catalog.plants().iter().take(2).collect();
        let mut state = PlantListState::new();
        state.reset(plants.len());

        let text = render(&plants, &mut state);
        assert!(text.contains("Monstera Deliciosa"));
        assert!(text.contains("Snake Plant"));
        assert!(text.contains("Intermediate"));
        assert!(text.contains("4.8"));
    }

    #[test]
    fn test_empty_list_message() {
        let mut state = PlantListState::new();
        state.reset(0);
        let text = render(&[], &mut state);
        assert!(text.contains("No plants found."));
    }

    #[test]
    fn test_cursor_clamps_to_bounds() {
        let mut state = PlantListState::new();
        state.reset(3);
        state.select_previous(3);
        assert_eq!(state.selected(), Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let mut state = PlantListState::new();
        state.reset(0);
        assert_eq!(state.selected(), None);
        state.select_next(0);
        assert_eq!(state.selected(), None);
    }
}
