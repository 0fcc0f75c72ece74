//! Help popup listing keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::theme::current_theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SHORTCUTS: &[(&str, &str)] = &[
    ("j / Down", "Next attachment"),
    ("k / Up", "Previous attachment"),
    ("g / G", "First / last attachment"),
    ("Enter", "Open image gallery"),
    ("Left / h", "Previous image (gallery)"),
    ("Right / l", "Next image (gallery)"),
    ("Esc", "Close popup"),
    ("s", "Toggle simple image layout"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

/// Render the help popup centered on screen.
pub fn render(frame: &mut Frame) {
    let theme = current_theme();
    let screen = frame.area();

    let mut lines = vec![
        Line::from(Span::styled(format!(" attachview v{VERSION}"), theme.popup_title)),
        Line::from(""),
    ];
    for (key, desc) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {key:<12}"), theme.status_key),
            Span::styled(desc.to_string(), theme.popup),
        ]));
    }

    let width = 48.min(screen.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(screen.height.saturating_sub(2));
    let area = Rect::new(
        screen.x + screen.width.saturating_sub(width) / 2,
        screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .title(" Help ")
        .style(theme.popup);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
