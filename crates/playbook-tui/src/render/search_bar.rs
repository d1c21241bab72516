use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

const PLACEHOLDER: &str = "Search blueprints...";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let prompt = Span::styled(
        " / ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![prompt, Span::raw(" ")];
    if app.search_query.is_empty() {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(&app.search_query, Style::default().fg(Color::White)));
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!("  {} match(es)", app.visible.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
