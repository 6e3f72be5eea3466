use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::drag::DragResult;
use crate::ops::editor::Intent;
use crate::tui::app::{App, DragState, Mode};
use crate::tui::text_buffer::TextBuffer;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.items().len();
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,

        // Quick move: shift the item one slot without entering drag mode
        (_, KeyCode::Char('J')) => quick_move(app, 1),
        (_, KeyCode::Char('K')) => quick_move(app, -1),
        (m, KeyCode::Down) if m.contains(KeyModifiers::SHIFT) => quick_move(app, 1),
        (m, KeyCode::Up) if m.contains(KeyModifiers::SHIFT) => quick_move(app, -1),

        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => app.cursor = len.saturating_sub(1),

        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) => app.mode = Mode::Add,
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => open_dialog(app),
        (_, KeyCode::Char('m')) | (_, KeyCode::Char(' ')) => {
            if app.cursor < len {
                app.drag = Some(DragState {
                    source: app.cursor,
                    target: app.cursor,
                });
                app.mode = Mode::Drag;
            }
        }
        _ => {}
    }
}

/// Open the edit dialog on the item under the cursor
fn open_dialog(app: &mut App) {
    let Some(id) = app.items().get(app.cursor).map(|item| item.id.clone()) else {
        return;
    };
    if app.dispatch(Intent::EditOpen { id }).is_changed() {
        let draft = app.editor.session().draft().unwrap_or_default().to_string();
        app.dialog_input = TextBuffer::with_text(&draft);
        app.mode = Mode::Edit;
    }
}

fn quick_move(app: &mut App, delta: isize) {
    let source = app.cursor;
    let Some(dest) = source.checked_add_signed(delta) else {
        return;
    };
    if app
        .dispatch(Intent::DragComplete(DragResult::dropped(source, dest)))
        .is_changed()
    {
        app.cursor = dest;
    }
}
