use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::editor::Intent;
use crate::tui::app::{App, Mode};

use super::text::{TextEdit, edit_text};

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => submit(app),
        _ => {
            if edit_text(&mut app.add_input, key) == TextEdit::Unhandled {
                tracing::trace!(?key, "unhandled key in add mode");
            }
        }
    }
}

/// Raise an add request. The input is cleared only when the item was added.
fn submit(app: &mut App) {
    let text = app.add_input.text().to_string();
    if app.dispatch(Intent::Add { text }).is_changed() {
        app.add_input.clear();
        app.cursor = app.items().len().saturating_sub(1);
    }
}
