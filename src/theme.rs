//! Color palette and level-to-color mapping.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub chip: Color,
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            primary: Color::Rgb(101, 91, 211),
            secondary: Color::Rgb(0, 200, 200),
            success: Color::Rgb(0, 200, 80),
            warning: Color::Rgb(230, 180, 0),
            error: Color::Rgb(220, 50, 50),
            info: Color::Rgb(0, 160, 220),
            text: Color::Rgb(230, 230, 230),
            text_dim: Color::Rgb(130, 130, 130),
            border: Color::Rgb(70, 70, 70),
            chip: Color::Rgb(0, 170, 170),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

pub fn notification_color(level: NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
