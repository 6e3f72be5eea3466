pub mod add_bar;
pub mod edit_dialog;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen: add bar, list, status row, and the edit dialog on top
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: add bar (3 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    add_bar::render_add_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Edit dialog (rendered on top of everything)
    if app.editor.session().is_open() {
        edit_dialog::render_edit_dialog(frame, app, area);
    }
}

/// Horizontal scroll that keeps a cursor at `cursor_col` inside `width` cells
pub(super) fn input_scroll(cursor_col: usize, width: usize) -> usize {
    cursor_col.saturating_sub(width.saturating_sub(1))
}
