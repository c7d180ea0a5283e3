//! # Plant Detail Component
//!
//! Centered overlay for one plant, opened with Enter from the list.
//!
//! ```text
//! ┌ 3 / 6 ─────────────────────────────────────┐
//! │ 🌳 Fiddle Leaf Fig                          │
//! │    Advanced                                 │
//! │  Info │ Care │ Stats                        │
//! │ ...tab body...                              │
//! └──── ← Prev  → Next  Tab Switch  Esc Close ──┘
//! ```
//!
//! Stateless: the plant and tab come from the core `DetailNavigator`, the
//! gauge fill progress from the TUI animation clock.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Tabs, Wrap};

use crate::core::catalog::{MAX_NEEDS, Plant};
use crate::core::navigator::DetailTab;
use crate::tui::component::Component;
use crate::tui::components::progress_bar::ProgressBar;
use crate::tui::components::star_rating::StarRating;
use crate::tui::theme::{Palette, accent_color};

const HELP_TEXT: &str = " ← Prev  → Next  Tab Switch  i/c/s Jump  Esc Close ";

pub struct PlantDetail<'a> {
    pub plant: &'a Plant,
    pub tab: DetailTab,
    /// 1-based position in the catalog and catalog size, for the title.
    pub position: (usize, usize),
    pub palette: Palette,
    /// Gauge fill animation progress, 0..=1.
    pub fill: f64,
}

impl Component for PlantDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay);

        let accent = accent_color(self.plant.accent);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} / {} ", self.position.0, self.position.1))
            .title_bottom(Line::from(HELP_TEXT).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [header_area, tabs_area, _, body_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", self.plant.icon, self.plant.name),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("   {}", self.plant.difficulty),
                Style::default().fg(self.palette.muted),
            )),
        ]);
        frame.render_widget(header, header_area);

        let tabs = Tabs::new(DetailTab::ALL.iter().map(|t| t.label()))
            .select(self.tab.index())
            .style(Style::default().fg(self.palette.muted))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, tabs_area);

        match self.tab {
            DetailTab::Info => self.render_info(frame, body_area),
            DetailTab::Care => self.render_care(frame, body_area),
            DetailTab::Stats => self.render_stats(frame, body_area),
        }
    }
}

impl PlantDetail<'_> {
    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let text = Style::default().fg(self.palette.text);
        let mut lines = vec![
            Line::from(Span::styled(self.plant.description.clone(), text)),
            Line::default(),
            Line::from(vec![
                Span::styled("Humidity: ", Style::default().fg(Color::Blue)),
                Span::styled(format!("{}%", self.plant.humidity), text),
                Span::raw("    "),
                Span::styled("Temp: ", Style::default().fg(Color::Red)),
                Span::styled(self.plant.temperature.to_string(), text),
            ]),
            Line::default(),
        ];
        lines.push(Line::from(
            StarRating::new(self.plant.rating, self.palette.star).spans(),
        ));
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_care(&self, frame: &mut Frame, area: Rect) {
        let [water_area, _, light_area, _, care_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        ProgressBar {
            label: "Water Needs",
            value: self.plant.water_needs,
            max: MAX_NEEDS,
            color: Color::Blue,
            progress: self.fill,
        }
        .render(frame, water_area);

        ProgressBar {
            label: "Light Needs",
            value: self.plant.light_needs,
            max: MAX_NEEDS,
            color: Color::Yellow,
            progress: self.fill,
        }
        .render(frame, light_area);

        frame.render_widget(
            Paragraph::new(self.plant.care.as_str())
                .style(Style::default().fg(self.palette.text))
                .wrap(Wrap { trim: true }),
            care_area,
        );
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let label = Style::default().fg(self.palette.muted);
        let value = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD);

        let mut rating = vec![Span::styled(format!("{:<15}", "Rating:"), label)];
        rating.extend(StarRating::new(self.plant.rating, self.palette.star).spans());

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:<15}", "Difficulty:"), label),
                Span::styled(self.plant.difficulty.label(), value),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{:<15}", "Last Watered:"), label),
                Span::styled(
                    self.plant.last_watered.format("%b %d, %Y").to_string(),
                    value,
                ),
            ]),
            Line::default(),
            Line::from(rating),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
