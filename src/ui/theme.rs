use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(0, 140, 186);
    pub const ACCENT_GREEN: Color = Color::Rgb(76, 175, 80);
    pub const ACCENT_ORANGE: Color = Color::Rgb(255, 152, 0);
    pub const BG_SURFACE: Color = Color::Rgb(30, 30, 36);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn question_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn option_normal() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn option_checked() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn option_cursor() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::BG_SURFACE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn feedback_correct() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn feedback_incorrect() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn button(color: Color) -> Style {
        Style::default().fg(Color::White).bg(color)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn score() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn timer() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
