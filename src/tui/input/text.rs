use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::text_buffer::TextBuffer;

/// What a key did to a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TextEdit {
    /// Text content changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// Not a text-editing key
    Unhandled,
}

/// Apply a line-editing key to `buf`.
pub(super) fn edit_text(buf: &mut TextBuffer, key: KeyEvent) -> TextEdit {
    let changed = |did: bool| if did { TextEdit::Changed } else { TextEdit::Moved };
    match (key.modifiers, key.code) {
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            changed(buf.delete_word_left())
        }
        (m, KeyCode::Backspace) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            changed(buf.delete_word_left())
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            buf.move_home();
            TextEdit::Moved
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            buf.move_end();
            TextEdit::Moved
        }
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            buf.insert_char(c);
            TextEdit::Changed
        }
        (_, KeyCode::Backspace) => changed(buf.backspace()),
        (_, KeyCode::Delete) => changed(buf.delete()),
        (_, KeyCode::Left) => {
            buf.move_left();
            TextEdit::Moved
        }
        (_, KeyCode::Right) => {
            buf.move_right();
            TextEdit::Moved
        }
        (_, KeyCode::Home) => {
            buf.move_home();
            TextEdit::Moved
        }
        (_, KeyCode::End) => {
            buf.move_end();
            TextEdit::Moved
        }
        _ => TextEdit::Unhandled,
    }
}
