use playbook::SystemEntry;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;

use crate::app::{App, compute_scroll_offset};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Systems ({}/{}) ", app.visible.len(), app.catalog.len()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner.height as usize;
    if visible_height == 0 {
        return;
    }

    if app.visible.is_empty() {
        let hint = Paragraph::new("No systems match")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    // Adjust scroll so cursor is always visible.
    let scroll_offset = compute_scroll_offset(app.cursor, app.list_scroll_offset, visible_height);

    let lines: Vec<Line> = app
        .visible_entries()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(idx, entry)| render_row(entry, idx == app.cursor, app.share.is_copied(&entry.id)))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if app.visible.len() > visible_height {
        let mut scrollbar_state = ScrollbarState::new(app.visible.len())
            .position(scroll_offset)
            .viewport_content_length(visible_height);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}

fn render_row<'a>(entry: &SystemEntry, is_selected: bool, is_copied: bool) -> Line<'a> {
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let badge_color = if entry.status.is_live() {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![
        Span::styled("\u{25cf} ", Style::default().fg(badge_color)),
        Span::styled(entry.title.clone(), style),
    ];
    if is_copied {
        spans.push(Span::styled(" \u{2713}", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}
