use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::editor::Intent;
use crate::tui::app::App;

use super::text::{TextEdit, edit_text};

pub(super) fn handle_dialog(app: &mut App, key: KeyEvent) {
    let behavior = app.editor.config().behavior;
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.dispatch(Intent::EditCancel);
        }
        (m, KeyCode::Char('s')) if m.contains(KeyModifiers::CONTROL) => {
            app.dispatch(Intent::EditSave);
        }
        (_, KeyCode::Enter) if behavior.submit_on_enter => {
            app.dispatch(Intent::EditSave);
        }
        (m, KeyCode::Char('d')) if m.contains(KeyModifiers::CONTROL) => {
            if behavior.delete_enabled {
                app.dispatch(Intent::Delete);
            }
        }
        _ => {
            if edit_text(&mut app.dialog_input, key) == TextEdit::Changed {
                sync_draft(app);
            }
        }
    }
}

/// Push the dialog's text into the edit session draft
pub(super) fn sync_draft(app: &mut App) {
    let text = app.dialog_input.text().to_string();
    app.dispatch(Intent::EditTextChange { text });
}
