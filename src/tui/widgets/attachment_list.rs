//! Attachment list widget: every composed slot, in input order.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::compose::Slot;
use crate::render::{MetadataBlock, PreviewUnit};
use crate::resolve::{GlyphIconRenderer, Icon, IconRenderer};
use crate::tui::app::App;
use crate::tui::theme::{current_theme, Theme};

/// Render the list panel.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = current_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(format!(" Attachments ({}) ", app.attachments.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_span = (0, 0);
    for slot in app.slots() {
        let start = lines.len();
        let mut slot_lines = slot_lines(&slot, app.name_width, &theme);
        if slot.key.index == app.selected {
            for line in &mut slot_lines {
                line.style = theme.list_selected;
            }
            selected_span = (start, start + slot_lines.len());
        }
        lines.extend(slot_lines);
        for _ in 0..slot.margin_bottom {
            lines.push(Line::from(""));
        }
    }

    let height = inner.height as usize;
    let max_offset = lines.len().saturating_sub(height);
    let mut offset = app.scroll_offset.min(max_offset);
    if app.follow_selection {
        let (first, end) = selected_span;
        if first < offset {
            offset = first;
        } else if end > offset + height {
            offset = end.saturating_sub(height).min(first);
        }
    }
    app.scroll_offset = offset;

    let paragraph = Paragraph::new(lines)
        .style(theme.list_normal)
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, inner);
}

/// Lines drawn for one slot, excluding its bottom margin.
pub fn slot_lines(slot: &Slot<'_>, name_width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let icons = GlyphIconRenderer;
    let Some(preview) = &slot.preview else {
        return vec![Line::from(Span::styled(" ·  no preview", theme.empty_slot))];
    };

    match preview {
        PreviewUnit::Image(image) => {
            let badge = format!(
                " [image {}/{}]",
                image.gallery.current_index() + 1,
                image.gallery.len()
            );
            match &image.metadata {
                None => vec![Line::from(Span::styled(badge, theme.icon))],
                Some(meta) => metadata_lines(Span::styled(badge, theme.icon), meta, name_width, theme),
            }
        }
        PreviewUnit::Video(player) => vec![Line::from(vec![
            Span::styled(" ► ", theme.icon),
            Span::styled(format!("video ({}) ", player.mime_hint), theme.meta),
            Span::styled(player.src.clone(), theme.url),
        ])],
        PreviewUnit::File { icon, metadata } => metadata_lines(
            Span::styled(format!(" {}", icons.render_icon(*icon)), theme.icon),
            metadata,
            name_width,
            theme,
        ),
    }
}

fn metadata_lines(
    lead: Span<'static>,
    meta: &MetadataBlock,
    name_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let icons = GlyphIconRenderer;
    let mut lines = vec![
        Line::from(vec![
            lead,
            Span::raw(" "),
            Span::styled(truncate_to_width(&meta.name, name_width), theme.name),
            Span::styled(format!(" {}", icons.render_icon(Icon::DownArrow)), theme.meta),
        ]),
        Line::from(vec![
            Span::raw("     "),
            Span::styled(meta.download.clone(), theme.url),
        ]),
    ];

    let details: Vec<&str> = meta
        .size_label
        .as_deref()
        .into_iter()
        .chain(meta.additional_item.as_deref())
        .collect();
    if !details.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(details.join("  "), theme.meta),
        ]));
    }
    lines
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when
/// anything was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::model::Attachment;
    use crate::render::PreviewOptions;
    use crate::resolve::PassthroughResolver;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short.pdf", 20), "short.pdf");
        assert_eq!(truncate_to_width("a-very-long-name.pdf", 8), "a-very-…");
        assert_eq!(truncate_to_width("日本語ファイル", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_slot_lines_for_each_shape() {
        let theme = current_theme();
        let atts = vec![
            Attachment::new("a.jpg").with_type("image/jpeg"),
            Attachment::new("b.mp4").with_type("video/mp4"),
            Attachment::new("c.zip").with_type("application/zip").with_size(1500),
            Attachment::new("d.bin"),
        ];
        let options = PreviewOptions {
            additional_item: Some("seen".into()),
            ..PreviewOptions::default()
        };
        let slots = compose(&atts, &options, &PassthroughResolver);

        let image = slot_lines(&slots[0], 32, &theme);
        assert!(text(&image[0]).contains("[image 1/1]"));
        assert!(text(&image[0]).contains("a.jpg"));

        let video = slot_lines(&slots[1], 32, &theme);
        assert_eq!(video.len(), 1);
        assert!(text(&video[0]).contains("video/mp4"));

        let archive = slot_lines(&slots[2], 32, &theme);
        assert!(text(&archive[0]).contains("▣"));
        assert_eq!(text(&archive[2]).trim(), "Size: 2kB  seen");

        let empty = slot_lines(&slots[3], 32, &theme);
        assert!(text(&empty[0]).contains("no preview"));
    }

    #[test]
    fn test_bare_image_is_single_line() {
        let theme = current_theme();
        let atts = vec![Attachment::new("a.jpg").with_type("image/jpeg")];
        let options = PreviewOptions {
            simple: true,
            ..PreviewOptions::default()
        };
        let slots = compose(&atts, &options, &PassthroughResolver);
        let lines = slot_lines(&slots[0], 32, &theme);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]).trim(), "[image 1/1]");
    }
}
