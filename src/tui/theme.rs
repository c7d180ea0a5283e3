//! Terminal colors for the light and dark themes, and for each plant's accent.

use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::Accent;
use crate::core::state::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub title: Color,
    pub chip_active: Style,
    pub chip_idle: Style,
    pub highlight: Style,
    pub star: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Green,
                title: Color::Green,
                chip_active: Style::default()
                    .fg(Color::White)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                chip_idle: Style::default().fg(Color::Green),
                highlight: Style::default()
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
                star: Color::Yellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                border: Color::LightGreen,
                title: Color::LightGreen,
                chip_active: Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
                chip_idle: Style::default().fg(Color::LightGreen),
                highlight: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                star: Color::LightYellow,
            },
        }
    }
}

/// Leading color of a plant's two-stop accent. Used for names and borders.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::GreenBlue => Color::Green,
        Accent::YellowGreen => Color::Yellow,
        Accent::BluePurple => Color::Blue,
        Accent::PurplePink => Color::Magenta,
        Accent::PinkRed => Color::LightRed,
        Accent::IndigoBlue => Color::LightBlue,
    }
}
