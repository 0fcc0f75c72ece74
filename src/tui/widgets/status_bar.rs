//! Bottom status bar showing transient messages or keyboard hints.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::App;
use crate::tui::theme::current_theme;

use super::gallery_popup::summary;

/// Render the status bar with hints on the left and the scroll counter on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let right_text = format!("scrolls: {} ", app.scroll_events);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(right_text.len() as u16),
        ])
        .split(area);

    let content = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(format!(" {msg}"), theme.status_bar))
    } else {
        let mut spans = Vec::new();
        for (i, (key, desc)) in build_hints(app).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", theme.status_bar));
            }
            spans.push(Span::styled(format!(" {key}"), theme.status_key));
            spans.push(Span::styled(format!(":{desc}"), theme.status_bar));
        }
        let slots = app.slots();
        if let Some(meta) = slots
            .get(app.selected)
            .and_then(|s| s.preview.as_ref())
            .and_then(|p| p.metadata())
        {
            spans.push(Span::styled(format!("  {}", summary(meta)), theme.status_bar));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(content).style(theme.status_bar), chunks[0]);

    let right = Paragraph::new(Line::from(Span::styled(right_text, theme.border)))
        .alignment(Alignment::Right)
        .style(theme.status_bar);
    frame.render_widget(right, chunks[1]);
}

/// Hint pairs (key, description) for the current mode.
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.gallery_source.is_some() {
        vec![("←/→", "prev/next"), ("Esc", "close"), ("q", "quit")]
    } else {
        vec![
            ("j/k", "move"),
            ("Enter", "gallery"),
            ("s", "simple"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}
