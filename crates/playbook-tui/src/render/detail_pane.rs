use playbook::has_link;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Design ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(entry) = app.selected_entry() else {
        let hint = Paragraph::new("Select a system to view its design")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    };

    let label_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);
    let badge_style = if entry.status.is_live() {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            entry.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!(" {} ", entry.status.to_string().to_uppercase()), badge_style),
    ]));
    lines.push(Line::from(""));

    let mut field = |label: &'static str, value: String, style: Style| {
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(value, style),
        ]));
    };

    field("Category:   ", entry.category.to_string(), value_style);
    if !entry.tags.is_empty() {
        field("Tags:       ", entry.tags.join(", "), value_style);
    }
    field("Complexity: ", entry.complexity.to_string(), value_style);
    field("Stack:      ", entry.stack_line(), value_style);
    field("Metrics:    ", entry.metrics.to_uppercase(), value_style);
    field("ID:         ", entry.id.to_string(), dim_style);

    lines.push(Line::from(""));
    for line in entry.description.lines() {
        lines.push(Line::from(line.to_owned()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(inner.width as usize),
        dim_style,
    )));

    let link_line = |label: &'static str, link: &str| {
        let value = if has_link(link) {
            Span::styled(link.to_owned(), Style::default().fg(Color::Blue))
        } else {
            Span::styled("not published yet", dim_style)
        };
        Line::from(vec![Span::styled(label, label_style), value])
    };
    lines.push(link_line("Design:     ", &entry.adr_link));
    lines.push(link_line("Simulation: ", &entry.sim_link));

    let share_url = app.share.location().share_url(&entry.id);
    let share_span = if app.share.is_copied(&entry.id) {
        Span::styled("\u{2713} copied", Style::default().fg(Color::Green))
    } else {
        Span::styled("c to copy", dim_style)
    };
    lines.push(Line::from(vec![
        Span::styled("Share:      ", label_style),
        Span::styled(share_url, value_style),
        Span::raw("  "),
        share_span,
    ]));

    let content_length = lines.len();
    let visible_height = inner.height as usize;

    let paragraph = Paragraph::new(lines)
        .scroll((app.detail_scroll, 0))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner);

    if content_length > visible_height {
        let mut scrollbar_state = ScrollbarState::new(content_length)
            .position(app.detail_scroll as usize)
            .viewport_content_length(visible_height);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}
