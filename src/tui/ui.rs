//! Main render function that dispatches to widgets.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::app::App;
use super::theme::current_theme;
use super::widgets;

/// Render the entire frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = current_theme();

    // Vertical layout: header (1) + list (flex) + status (1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let mode = if app.options.simple { "simple" } else { "detailed" };
    let header = Paragraph::new(Line::from(Span::styled(
        format!(" attachview  {} attachment(s)  [{mode}]", app.attachments.len()),
        theme.header_bar,
    )))
    .style(theme.header_bar);
    frame.render_widget(header, vertical[0]);

    widgets::attachment_list::render(frame, app, vertical[1]);
    widgets::status_bar::render(frame, app, vertical[2]);

    // Popups (rendered on top of everything)
    if app.gallery_source.is_some() {
        widgets::gallery_popup::render(frame, app);
    }
    if app.show_help {
        widgets::help_popup::render(frame);
    }
}
