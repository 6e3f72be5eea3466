use serde::{Deserialize, Serialize};

use crate::model::config::EditorConfig;
use crate::model::item::{Item, ItemId, ItemList};
use crate::model::session::EditSession;

use super::Ignored;
use super::drag::{self, DragResult};
use super::list_ops::{self, IdSequence};
use super::session_ops;

/// A request raised by the view layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Add { text: String },
    EditOpen { id: ItemId },
    EditTextChange { text: String },
    EditSave,
    EditCancel,
    Delete,
    DragComplete(DragResult),
}

/// Result of applying one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum Applied {
    Changed,
    Ignored(Ignored),
}

impl Applied {
    pub fn is_changed(self) -> bool {
        self == Applied::Changed
    }
}

impl<T> From<Result<T, Ignored>> for Applied {
    fn from(result: Result<T, Ignored>) -> Self {
        match result {
            Ok(_) => Applied::Changed,
            Err(reason) => Applied::Ignored(reason),
        }
    }
}

/// Owns the current list snapshot and edit session.
///
/// Each intent runs to completion and swaps in the next snapshot; nothing
/// else holds a mutable reference to the list.
#[derive(Debug, Clone)]
pub struct Editor {
    items: ItemList,
    session: EditSession,
    ids: IdSequence,
    config: EditorConfig,
}

impl Editor {
    /// Create an editor seeded with `config.list.initial_items`.
    pub fn new(config: EditorConfig) -> Self {
        let mut ids = IdSequence::new();
        let mut items = ItemList::new();
        for content in &config.list.initial_items {
            let (next, _) = list_ops::add(&items, content, &mut ids);
            items = next;
        }
        Editor {
            items,
            session: EditSession::Closed,
            ids,
            config,
        }
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply one intent.
    pub fn apply(&mut self, intent: Intent) -> Applied {
        tracing::debug!(?intent, "applying intent");
        let applied = match intent {
            Intent::Add { text } => self.request_add(&text).into(),
            Intent::EditOpen { id } => self.request_edit_open(&id),
            Intent::EditTextChange { text } => self.request_edit_text_change(&text),
            Intent::EditSave => self.request_edit_save(),
            Intent::EditCancel => self.request_edit_cancel(),
            Intent::Delete => self.request_delete(),
            Intent::DragComplete(result) => self.on_drag_complete(result),
        };
        if let Applied::Ignored(reason) = applied {
            tracing::debug!(%reason, "intent ignored");
        }
        applied
    }

    /// Append a new item. Returns the created item.
    pub fn request_add(&mut self, text: &str) -> Result<Item, Ignored> {
        let (items, item) = list_ops::add(&self.items, text, &mut self.ids);
        let item = item.ok_or(Ignored::EmptyContent)?;
        self.items = items;
        Ok(item)
    }

    pub fn request_edit_open(&mut self, id: &ItemId) -> Applied {
        self.transition(|_, items| {
            session_ops::open_for(items, id).map(|next| (next, items.clone()))
        })
    }

    pub fn request_edit_text_change(&mut self, text: &str) -> Applied {
        self.transition(|session, items| {
            session_ops::edit_draft(session, text).map(|next| (next, items.clone()))
        })
    }

    pub fn request_edit_save(&mut self) -> Applied {
        self.transition(session_ops::save)
    }

    pub fn request_edit_cancel(&mut self) -> Applied {
        self.transition(|session, items| {
            session_ops::cancel(session).map(|next| (next, items.clone()))
        })
    }

    pub fn request_delete(&mut self) -> Applied {
        if !self.config.behavior.delete_enabled {
            return Applied::Ignored(Ignored::DeleteDisabled);
        }
        self.transition(session_ops::delete)
    }

    /// Entry point for the drag sequencer.
    pub fn on_drag_complete(&mut self, result: DragResult) -> Applied {
        match drag::on_drag_complete(&self.items, result) {
            Ok(items) => {
                self.items = items;
                Applied::Changed
            }
            Err(reason) => Applied::Ignored(reason),
        }
    }

    fn transition<F>(&mut self, step: F) -> Applied
    where
        F: FnOnce(&EditSession, &ItemList) -> Result<(EditSession, ItemList), Ignored>,
    {
        match step(&self.session, &self.items) {
            Ok((session, items)) => {
                self.session = session_ops::reconcile(session, &items);
                self.items = items;
                Applied::Changed
            }
            Err(reason) => Applied::Ignored(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::Preset;
    use pretty_assertions::assert_eq;

    fn editor_with(contents: &[&str]) -> Editor {
        let mut config = EditorConfig::default();
        config.list.initial_items = contents.iter().map(|s| s.to_string()).collect();
        Editor::new(config)
    }

    fn id_at(editor: &Editor, index: usize) -> ItemId {
        editor.items().get(index).unwrap().id.clone()
    }

    #[test]
    fn starts_empty_by_default() {
        let editor = Editor::new(EditorConfig::default());
        assert!(editor.items().is_empty());
        assert_eq!(editor.session(), &EditSession::Closed);
    }

    #[test]
    fn seeds_initial_items_skipping_blanks() {
        let editor = editor_with(&["X", "  ", "Y"]);
        assert_eq!(editor.items().contents(), vec!["X", "Y"]);
        assert_eq!(id_at(&editor, 0).as_str(), "id-0");
    }

    #[test]
    fn add_scenario() {
        let mut editor = editor_with(&["X"]);
        assert_eq!(
            editor.apply(Intent::Add { text: "  ".into() }),
            Applied::Ignored(Ignored::EmptyContent)
        );
        assert_eq!(editor.items().len(), 1);
        assert_eq!(editor.apply(Intent::Add { text: "Hello".into() }), Applied::Changed);
        assert_eq!(editor.items().contents(), vec!["X", "Hello"]);
    }

    #[test]
    fn drag_scenario() {
        let mut editor = editor_with(&["X", "Y", "Z"]);
        assert!(editor.apply(Intent::DragComplete(DragResult::dropped(0, 2))).is_changed());
        assert_eq!(editor.items().contents(), vec!["Y", "Z", "X"]);
        assert_eq!(
            editor.apply(Intent::DragComplete(DragResult::cancelled(0))),
            Applied::Ignored(Ignored::DragCancelled)
        );
    }

    #[test]
    fn edit_save_scenario() {
        let mut editor = editor_with(&["X", "Y", "Z"]);
        let b = id_at(&editor, 1);
        editor.apply(Intent::EditOpen { id: b.clone() });
        assert_eq!(editor.session().draft(), Some("Y"));
        editor.apply(Intent::EditTextChange { text: "Y2".into() });
        assert_eq!(editor.apply(Intent::EditSave), Applied::Changed);
        assert_eq!(editor.items().find(&b).unwrap().content, "Y2");
        assert_eq!(editor.session(), &EditSession::Closed);
    }

    #[test]
    fn edit_save_empty_scenario() {
        let mut editor = editor_with(&["X", "Y", "Z"]);
        let b = id_at(&editor, 1);
        editor.apply(Intent::EditOpen { id: b.clone() });
        editor.apply(Intent::EditTextChange { text: String::new() });
        assert_eq!(
            editor.apply(Intent::EditSave),
            Applied::Ignored(Ignored::EmptyContent)
        );
        assert_eq!(editor.items().find(&b).unwrap().content, "Y");
        assert!(editor.session().is_open());
    }

    #[test]
    fn cancel_leaves_items_untouched() {
        let mut editor = editor_with(&["X"]);
        let a = id_at(&editor, 0);
        editor.apply(Intent::EditOpen { id: a });
        editor.apply(Intent::EditTextChange { text: "changed".into() });
        assert!(editor.apply(Intent::EditCancel).is_changed());
        assert_eq!(editor.items().contents(), vec!["X"]);
        assert!(!editor.session().is_open());
    }

    #[test]
    fn delete_closes_session() {
        let mut editor = editor_with(&["X", "Y"]);
        let a = id_at(&editor, 0);
        editor.apply(Intent::EditOpen { id: a.clone() });
        assert!(editor.apply(Intent::Delete).is_changed());
        assert!(!editor.items().contains(&a));
        assert_eq!(editor.session(), &EditSession::Closed);
        assert_eq!(
            editor.apply(Intent::Delete),
            Applied::Ignored(Ignored::SessionClosed)
        );
    }

    #[test]
    fn delete_disabled_by_config() {
        let mut config = EditorConfig::preset(Preset::Classic);
        config.list.initial_items = vec!["X".into()];
        let mut editor = Editor::new(config);
        let a = id_at(&editor, 0);
        editor.apply(Intent::EditOpen { id: a });
        assert_eq!(
            editor.apply(Intent::Delete),
            Applied::Ignored(Ignored::DeleteDisabled)
        );
        assert_eq!(editor.items().len(), 1);
        assert!(editor.session().is_open());
    }

    #[test]
    fn open_retargets_open_session() {
        let mut editor = editor_with(&["X", "Y"]);
        let (a, b) = (id_at(&editor, 0), id_at(&editor, 1));
        editor.apply(Intent::EditOpen { id: a });
        editor.apply(Intent::EditOpen { id: b.clone() });
        assert_eq!(editor.session().active_item_id(), Some(&b));
        assert_eq!(editor.session().draft(), Some("Y"));
    }

    #[test]
    fn intents_deserialize_from_json() {
        let intents: Vec<Intent> = serde_json::from_str(
            r#"[
                {"intent": "add", "text": "Hello"},
                {"intent": "edit_open", "id": "id-0"},
                {"intent": "edit_text_change", "text": "Hi"},
                {"intent": "edit_save"},
                {"intent": "drag_complete", "source": {"index": 0}, "destination": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            intents,
            vec![
                Intent::Add { text: "Hello".into() },
                Intent::EditOpen { id: "id-0".into() },
                Intent::EditTextChange { text: "Hi".into() },
                Intent::EditSave,
                Intent::DragComplete(DragResult::cancelled(0)),
            ]
        );
    }
}
