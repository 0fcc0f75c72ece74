//! Color theme definitions for the viewer.

use ratatui::style::{Color, Modifier, Style};

/// A complete color theme for the viewer.
pub struct Theme {
    pub header_bar: Style,
    pub status_bar: Style,
    pub status_key: Style,
    pub list_selected: Style,
    pub list_normal: Style,
    pub icon: Style,
    pub name: Style,
    pub meta: Style,
    pub url: Style,
    pub empty_slot: Style,
    pub border: Style,
    pub popup: Style,
    pub popup_title: Style,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .bg(Color::Rgb(30, 30, 46)),
            status_bar: Style::default()
                .fg(Color::Rgb(150, 150, 170))
                .bg(Color::Rgb(30, 30, 46)),
            status_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 100)),
            list_normal: Style::default().fg(Color::Rgb(200, 200, 220)),
            icon: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            name: Style::default()
                .fg(Color::Rgb(220, 220, 230))
                .add_modifier(Modifier::BOLD),
            meta: Style::default().fg(Color::Rgb(150, 150, 170)),
            url: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            empty_slot: Style::default().fg(Color::Rgb(80, 80, 100)),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            popup: Style::default()
                .fg(Color::Rgb(220, 220, 230))
                .bg(Color::Rgb(20, 20, 35)),
            popup_title: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Return the active theme.
pub fn current_theme() -> Theme {
    Theme::dark()
}
