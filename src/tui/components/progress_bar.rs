//! # ProgressBar Component
//!
//! A labelled gauge for the 1..=3 water and light levels in the Care tab.
//! The fill grows from empty to its value over `FILL_DURATION` after the tab
//! is shown. The animation clock belongs to the caller. This component only
//! gets told how far along it is.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::LineGauge;
use std::time::Duration;

use crate::tui::component::Component;

pub const FILL_DURATION: Duration = Duration::from_millis(450);

/// Ease-out cubic on 0..=1.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Animation progress for `elapsed` time since the tab appeared.
pub fn fill_progress(elapsed: Duration) -> f64 {
    ease_out(elapsed.as_secs_f64() / FILL_DURATION.as_secs_f64())
}

pub struct ProgressBar {
    pub label: &'static str,
    pub value: u8,
    pub max: u8,
    pub color: Color,
    /// 0..=1, how much of the final fill to draw.
    pub progress: f64,
}

impl ProgressBar {
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (f64::from(self.value) / f64::from(self.max)).clamp(0.0, 1.0) * self.progress.clamp(0.0, 1.0)
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let gauge = LineGauge::default()
            .label(format!("{:<12}{}/{}", self.label, self.value, self.max))
            .filled_style(Style::default().fg(self.color))
            .unfilled_style(Style::default().fg(Color::DarkGray))
            .line_set(symbols::line::THICK)
            .ratio(self.ratio());
        frame.render_widget(gauge, area);
    }
}
