use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode = match (app.mode, app.drag) {
        (Mode::Drag, Some(drag)) => format!(" MOVE {} \u{2192} {} ", drag.source + 1, drag.target + 1),
        (Mode::Navigate, _) | (Mode::Drag, None) => " NAVIGATE ".to_string(),
        (Mode::Add, _) => " ADD ".to_string(),
        (Mode::Edit, _) => " EDIT ".to_string(),
    };
    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  m move  J/K shift  q quit ".to_string(),
        Mode::Add => format!("Enter {}  Esc done ", app.labels().add_button.to_lowercase()),
        Mode::Drag => "j/k move  Enter drop  Esc cancel ".to_string(),
        Mode::Edit => format!("Esc {} ", app.labels().cancel_button.to_lowercase()),
    };
    let count = format!(" {} items", app.items().len());

    let mut spans = vec![
        Span::styled(
            mode,
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)),
    ];
    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let hint_width = unicode::display_width(&hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
