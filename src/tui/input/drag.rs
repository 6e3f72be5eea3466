use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::drag::DragResult;
use crate::ops::editor::Intent;
use crate::tui::app::{App, Mode};

pub(super) fn handle_drag(app: &mut App, key: KeyEvent) {
    let Some(mut drag) = app.drag else {
        app.mode = Mode::Navigate;
        return;
    };
    let last = app.items().len().saturating_sub(1);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => drag.target = (drag.target + 1).min(last),
        KeyCode::Char('k') | KeyCode::Up => drag.target = drag.target.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => drag.target = 0,
        KeyCode::Char('G') | KeyCode::End => drag.target = last,
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char(' ') => {
            finish(app, DragResult::dropped(drag.source, drag.target), drag.target);
            return;
        }
        KeyCode::Esc => {
            finish(app, DragResult::cancelled(drag.source), drag.source);
            return;
        }
        _ => {}
    }
    app.drag = Some(drag);
}

/// Report the completed drag and leave drag mode with the cursor on `cursor`.
fn finish(app: &mut App, result: DragResult, cursor: usize) {
    app.drag = None;
    app.mode = Mode::Navigate;
    app.dispatch(Intent::DragComplete(result));
    app.cursor = cursor;
    app.clamp_cursor();
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::tests::{app_with, key};
    use crate::model::Preset;
    use crate::tui::app::{DragState, Mode};
    use crossterm::event::KeyCode;

    #[test]
    fn drop_moves_item() {
        let mut app = app_with(Preset::Classic, &["X", "Y", "Z"]);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.mode, Mode::Drag);
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.drag, Some(DragState { source: 0, target: 2 }));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.items().contents(), vec!["Y", "Z", "X"]);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.drag.is_none());
    }

    #[test]
    fn esc_cancels_without_moving() {
        let mut app = app_with(Preset::Classic, &["X", "Y", "Z"]);
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('m')));
        handle_key(&mut app, key(KeyCode::Char('G')));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.items().contents(), vec!["X", "Y", "Z"]);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn drag_needs_an_item() {
        let mut app = app_with(Preset::Classic, &[]);
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.mode, Mode::Navigate);
    }
}
