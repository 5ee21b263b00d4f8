//! Colour palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::model::{RiskLevel, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub danger: Color,
    pub warning: Color,
    pub ok: Color,
    pub muted: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Cyan,
                danger: Color::LightRed,
                warning: Color::Yellow,
                ok: Color::LightGreen,
                muted: Color::DarkGray,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                danger: Color::Red,
                warning: Color::Rgb(176, 112, 0),
                ok: Color::Green,
                muted: Color::Gray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn risk(&self, level: RiskLevel) -> Style {
        let color = match level {
            RiskLevel::Low => self.ok,
            RiskLevel::Medium => self.warning,
            RiskLevel::High => self.danger,
        };
        Style::default().fg(color)
    }
}
