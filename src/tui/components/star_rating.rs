//! # StarRating Component
//!
//! Five stars plus the numeric rating, e.g. `★★★★☆ 4.5`.
//!
//! Whole stars are filled, a fractional part shows as one colored outline
//! star, and the rest are dim outlines.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::catalog::MAX_RATING;
use crate::tui::component::Component;

const FULL: &str = "★";
const OUTLINE: &str = "☆";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarCounts {
    pub full: usize,
    pub half: bool,
    pub empty: usize,
}

/// Split a 0..=5 rating into filled, half and empty stars (always five in total).
pub fn star_counts(rating: f32) -> StarCounts {
    let rating = rating.clamp(0.0, MAX_RATING);
    let full = rating.floor() as usize;
    let half = rating.fract() > f32::EPSILON;
    let empty = MAX_RATING as usize - full - usize::from(half);
    StarCounts { full, half, empty }
}

pub struct StarRating {
    pub rating: f32,
    pub color: Color,
}

impl StarRating {
    pub fn new(rating: f32, color: Color) -> Self {
        Self { rating, color }
    }

    pub fn spans(&self) -> Vec<Span<'static>> {
        let counts = star_counts(self.rating);
        let filled = Style::default().fg(self.color);
        let mut spans = vec![Span::styled(FULL.repeat(counts.full), filled)];
        if counts.half {
            spans.push(Span::styled(OUTLINE, filled.add_modifier(Modifier::BOLD)));
        }
        spans.push(Span::styled(
            OUTLINE.repeat(counts.empty),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(format!(" {:.1}", self.rating)));
        spans
    }
}

impl Component for StarRating {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Line::from(self.spans()), area);
    }
}
