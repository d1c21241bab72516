use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::centered_rect_fixed;
use crate::app::App;

/// Area of the picker popup: one line per tab plus borders.
pub fn popup_area(area: Rect, app: &App) -> Rect {
    let popup_height = (app.tabs.len() as u16) + 2;
    let popup_width = 30u16.min(area.width.saturating_sub(4));
    centered_rect_fixed(popup_width, popup_height, area)
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let popup_area = popup_area(area, app);

    // Clear background under the popup.
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let normal_style = Style::default().fg(Color::White);
    let selected_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let count_style = Style::default().fg(Color::DarkGray);

    // Counts ignore the search term: they describe the tab, not the view.
    let counts = playbook::filter_counts(&app.catalog);

    let lines: Vec<Line> = app
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if app.filter_cursor == i {
                selected_style
            } else {
                normal_style
            };
            let count = counts
                .iter()
                .find(|(t, _)| t == tab)
                .map(|(_, c)| *c)
                .unwrap_or(0);
            let marker = if &app.active_filter == tab { "\u{2022}" } else { " " };

            Line::from(vec![
                Span::styled(format!("{marker} {}", tab.as_str()), style),
                Span::styled(format!(" ({count})"), count_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
