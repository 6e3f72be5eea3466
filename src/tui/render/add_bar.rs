use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the add input with its submit label
pub fn render_add_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Add;
    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button = format!(" [Enter] {} ", app.labels().add_button);
    let button_width = (unicode::display_width(&button) as u16).min(inner.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(button_width)])
        .split(inner);

    let button_style = if focused {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(button, button_style))),
        chunks[1],
    );

    let input_area = chunks[0];
    let width = input_area.width as usize;
    if app.add_input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            format!(" {}", app.labels().placeholder),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(placeholder, input_area);
    } else {
        // One leading space of padding, counted in the scroll math
        let cursor_col = app.add_input.cursor_col() + 1;
        let scroll = super::input_scroll(cursor_col, width);
        let input = Paragraph::new(Span::styled(
            format!(" {}", app.add_input.text()),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
        .scroll((0, scroll as u16));
        frame.render_widget(input, input_area);
    }

    if focused {
        let col = app.add_input.cursor_col() + 1;
        let x = col - super::input_scroll(col, width);
        frame.set_cursor_position((input_area.x + x as u16, input_area.y));
    }
}
