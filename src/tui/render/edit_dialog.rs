use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

/// Render the edit dialog centered over `area`
pub fn render_edit_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let labels = app.labels();
    let behavior = app.editor.config().behavior;
    let bg = theme.background;

    let width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
    let height = DIALOG_HEIGHT.min(area.height);
    let popup_area = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", labels.dialog_title),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    if inner.height < 3 || inner.width < 4 {
        return;
    }

    // Input field: one row, framed by a dim underline
    let input_area = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, 1);
    let field_width = input_area.width as usize;
    let cursor_col = app.dialog_input.cursor_col();
    let scroll = super::input_scroll(cursor_col, field_width);
    let input = Paragraph::new(Span::styled(
        app.dialog_input.text().to_string(),
        Style::default().fg(theme.text_bright).bg(theme.selection_bg),
    ))
    .style(Style::default().bg(theme.selection_bg))
    .scroll((0, scroll as u16));
    frame.render_widget(input, input_area);
    frame.set_cursor_position((
        input_area.x + (cursor_col - scroll) as u16,
        input_area.y,
    ));

    // Buttons
    let save_key = if behavior.submit_on_enter { "Enter" } else { "^S" };
    let mut spans = vec![
        Span::styled(
            format!("[Esc] {}", labels.cancel_button),
            Style::default().fg(theme.dim).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
        Span::styled(
            format!("[{}] {}", save_key, labels.save_button),
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if behavior.delete_enabled {
        spans.push(Span::styled("   ", Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("[^D] {}", labels.delete_button),
            Style::default().fg(theme.red).bg(bg),
        ));
    }
    let buttons_y = inner.y + inner.height - 1;
    let buttons_area = Rect::new(inner.x + 1, buttons_y, inner.width - 2, 1);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        buttons_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EditorConfig, Preset};
    use crate::ops::editor::Intent;
    use crate::tui::render::test_helpers::*;
    use crate::tui::text_buffer::TextBuffer;

    fn open_dialog(app: &mut App) {
        let id = app.items().get(0).unwrap().id.clone();
        app.dispatch(Intent::EditOpen { id });
        let draft = app.editor.session().draft().unwrap().to_string();
        app.dialog_input = TextBuffer::with_text(&draft);
    }

    #[test]
    fn classic_dialog_has_no_delete() {
        let mut app = app_with(Preset::Classic, &["Quote 1"]);
        open_dialog(&mut app);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_edit_dialog(frame, &app, area);
        });
        assert!(output.contains(" Edit "));
        assert!(output.contains("Quote 1"));
        assert!(output.contains("[Esc] Cancel"));
        assert!(output.contains("[^S] Save"));
        assert!(!output.contains("Delete"));
    }

    #[test]
    fn keyboard_dialog_saves_on_enter_and_deletes() {
        let mut app = app_with(Preset::Keyboard, &["Quote 1"]);
        open_dialog(&mut app);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_edit_dialog(frame, &app, area);
        });
        assert!(output.contains("[Enter] Save"));
        assert!(output.contains("[^D] Delete"));
    }

    #[test]
    fn localized_labels() {
        let mut config = EditorConfig::preset(Preset::Deletable);
        config.labels.dialog_title = "Düzenle".into();
        config.labels.cancel_button = "İptal".into();
        config.labels.save_button = "Kaydet".into();
        config.labels.delete_button = "Sil".into();
        config.list.initial_items = vec!["Şarkı".into()];
        let mut app = App::new(config);
        open_dialog(&mut app);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_edit_dialog(frame, &app, area);
        });
        assert!(output.contains("Düzenle"));
        assert!(output.contains("[Esc] İptal"));
        assert!(output.contains("[^S] Kaydet"));
        assert!(output.contains("[^D] Sil"));
        assert!(output.contains("Şarkı"));
    }
}
