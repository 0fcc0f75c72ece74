//! Gallery popup: the visible image plus the strip of every image in the list.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use crate::render::{size_label, MetadataBlock};
use crate::resolve::FileResolver;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

use super::attachment_list::truncate_to_width;

/// Render the gallery popup centered on screen.
pub fn render(frame: &mut Frame, app: &App) {
    let Some(gallery) = app.gallery() else {
        return;
    };
    let theme = current_theme();
    let area = centered_rect(70, 60, frame.area());

    frame.render_widget(Clear, area);

    let title = format!(
        " Image {} of {} ",
        gallery.current_index() + 1,
        gallery.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .title(title)
        .style(theme.popup);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = gallery.current();
    let header_height = 3.min(inner.height);
    let header_area = Rect::new(inner.x, inner.y, inner.width, header_height);
    let strip_area = Rect::new(
        inner.x,
        inner.y + header_height,
        inner.width,
        inner.height.saturating_sub(header_height),
    );

    let download = app.resolver.resolve(current.url_or_empty());
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            truncate_to_width(current.display_name(), app.name_width),
            theme.name,
        )),
        Line::from(Span::styled(download, theme.url)),
        Line::from(Span::styled(
            current.size.map(size_label).unwrap_or_default(),
            theme.meta,
        )),
    ]);
    frame.render_widget(header, header_area);

    let rows: Vec<Row> = gallery
        .members()
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let visible = i == gallery.current_index();
            let style = if visible {
                theme.list_selected
            } else {
                theme.popup
            };
            Row::new(vec![
                Cell::from(if visible { ">" } else { " " }),
                Cell::from(format!("{}", i + 1)),
                Cell::from(truncate_to_width(
                    member.attachment.display_name(),
                    app.name_width,
                )),
                Cell::from(format!("#{}", member.source_index + 1)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(6),
        ],
    )
    .column_spacing(1);
    frame.render_widget(table, strip_area);
}

/// One-line summary of a metadata block, used in the status bar.
pub fn summary(meta: &MetadataBlock) -> String {
    match &meta.size_label {
        Some(size) => format!("{} ({size})", meta.name),
        None => meta.name.clone(),
    }
}

/// Calculate a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
