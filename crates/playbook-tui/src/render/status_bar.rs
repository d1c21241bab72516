use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

const HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "navigate"),
    ("/", "search"),
    ("tab", "next filter"),
    ("f", "filters"),
    ("c", "copy link"),
    ("esc", "reset"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(msg) = &app.status_message {
        let style = if msg.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Line::from(Span::styled(format!(" {}", msg.text), style))
    } else {
        let hint_style = Style::default().fg(Color::DarkGray);
        let key_style = Style::default().fg(Color::Gray);
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in HINTS {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {label}  "), hint_style));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}
