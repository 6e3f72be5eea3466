mod add;
mod dialog;
mod drag;
mod navigate;
mod text;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use add::handle_add;
use dialog::handle_dialog;
use drag::handle_drag;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Drag => handle_drag(app, key),
        Mode::Edit => handle_dialog(app, key),
    }
}

/// Handle a bracketed paste. Only text inputs accept it.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    match app.mode {
        Mode::Add => app.add_input.insert_str(text),
        Mode::Edit => {
            app.dialog_input.insert_str(text);
            dialog::sync_draft(app);
        }
        Mode::Navigate | Mode::Drag => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::model::{EditorConfig, Preset};

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(super) fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub(super) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    pub(super) fn app_with(preset: Preset, contents: &[&str]) -> App {
        let mut config = EditorConfig::preset(preset);
        config.list.initial_items = contents.iter().map(|s| s.to_string()).collect();
        App::new(config)
    }

    #[test]
    fn paste_goes_to_active_input() {
        let mut app = app_with(Preset::Keyboard, &[]);
        handle_paste(&mut app, "ignored");
        assert!(app.add_input.is_empty());

        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_paste(&mut app, "pasted\ntext");
        assert_eq!(app.add_input.text(), "pasted text");
    }

    #[test]
    fn paste_into_dialog_updates_draft() {
        let mut app = app_with(Preset::Keyboard, &["X"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_paste(&mut app, "YZ");
        assert_eq!(app.editor.session().draft(), Some("XYZ"));
    }

    #[test]
    fn full_round_trip_through_keys() {
        let mut app = app_with(Preset::Keyboard, &[]);
        handle_key(&mut app, key(KeyCode::Char('a')));
        type_str(&mut app, "first");
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, "second");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.items().contents(), vec!["first", "second"]);

        // Drag "second" to the top
        handle_key(&mut app, key(KeyCode::Char('m')));
        handle_key(&mut app, key(KeyCode::Char('k')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.items().contents(), vec!["second", "first"]);

        // Edit it
        handle_key(&mut app, key(KeyCode::Char('e')));
        type_str(&mut app, "!");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.items().contents(), vec!["second!", "first"]);
        assert_eq!(app.mode, Mode::Navigate);
    }
}
