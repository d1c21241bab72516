mod detail_pane;
mod filter_overlay;
mod list_pane;
mod search_bar;
mod status_bar;

use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::app::{App, LayoutGeometry, Mode};

pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let outer = outer_layout(size);

    render_title_bar(frame, outer[0], app);
    render_tabs(frame, outer[1], app);

    let panes = pane_layout(outer[2]);
    list_pane::render(frame, panes[0], app);
    detail_pane::render(frame, panes[1], app);

    match app.mode {
        Mode::Search => search_bar::render(frame, outer[3], app),
        Mode::Normal | Mode::FilterPicker => status_bar::render(frame, outer[3], app),
    }

    if app.mode == Mode::FilterPicker {
        filter_overlay::render(frame, size, app);
    }
}

/// Title bar (1), filter tabs (1), main content, bottom bar (1).
fn outer_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area)
}

fn pane_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area)
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Blue);
    let filter_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" VK-SYSTEMS", title_style),
        Span::raw("  "),
        Span::styled("Architecture Portal", label_style),
    ];

    // Filters that have no tab of their own are only visible here.
    if app.active_tab().is_none() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("{{filter:{}}}", app.active_filter),
            filter_style,
        ));
    }

    if !app.search_query.is_empty() && app.mode != Mode::Search {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("{{search:{}}}", app.search_query),
            filter_style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = app
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.as_str().to_uppercase()))
        .collect();

    let mut tabs = Tabs::new(titles)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider("\u{2502}");
    if let Some(active) = app.active_tab() {
        tabs = tabs.select(active);
    }

    frame.render_widget(tabs, area);
}

/// Compute layout geometry for mouse hit testing.
/// This mirrors the layout calculations in render() but returns Rect values.
pub fn compute_layout(frame_size: Rect, app: &App) -> LayoutGeometry {
    let outer = outer_layout(frame_size);
    let panes = pane_layout(outer[2]);

    let list_inner = Block::default().borders(Borders::ALL).inner(panes[0]);
    let detail_inner = Block::default().borders(Borders::ALL).inner(panes[1]);

    let overlay = match app.mode {
        Mode::FilterPicker => Some(filter_overlay::popup_area(frame_size, app)),
        Mode::Normal | Mode::Search => None,
    };

    LayoutGeometry {
        list_inner,
        detail_inner,
        overlay,
    }
}

/// Helper to create a centered rectangle with fixed dimensions.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [vertical_area] = vertical.areas(area);
    let [centered] = horizontal.areas(vertical_area);
    centered
}
