use serde::Serialize;

use crate::model::item::ItemList;
use crate::model::session::EditSession;
use crate::ops::editor::{Applied, Intent};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson<'a> {
    /// 1-based position
    pub index: usize,
    pub id: &'a str,
    pub content: &'a str,
}

#[derive(Serialize)]
pub struct SnapshotJson<'a> {
    pub items: Vec<ItemJson<'a>>,
    pub session: &'a EditSession,
}

#[derive(Serialize)]
pub struct StepJson<'a> {
    pub step: usize,
    pub intent: &'a Intent,
    pub result: Applied,
}

#[derive(Serialize)]
pub struct ReplayJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepJson<'a>>>,
    #[serde(flatten)]
    pub snapshot: SnapshotJson<'a>,
}

pub fn snapshot_json<'a>(items: &'a ItemList, session: &'a EditSession) -> SnapshotJson<'a> {
    SnapshotJson {
        items: items
            .iter()
            .enumerate()
            .map(|(i, item)| ItemJson {
                index: i + 1,
                id: item.id.as_str(),
                content: &item.content,
            })
            .collect(),
        session,
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One line per item: position, id, content
pub fn format_items(items: &ItemList) -> Vec<String> {
    if items.is_empty() {
        return vec!["(list is empty)".to_string()];
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{:>3}  {}  {}", i + 1, item.id, item.content))
        .collect()
}

pub fn format_session(session: &EditSession) -> String {
    match session {
        EditSession::Closed => "session: closed".to_string(),
        EditSession::Open { item_id, draft } => {
            format!("session: editing {} (draft: {:?})", item_id, draft)
        }
    }
}

pub fn format_step(step: usize, intent: &Intent, applied: Applied) -> String {
    let name = match intent {
        Intent::Add { .. } => "add",
        Intent::EditOpen { .. } => "edit_open",
        Intent::EditTextChange { .. } => "edit_text_change",
        Intent::EditSave => "edit_save",
        Intent::EditCancel => "edit_cancel",
        Intent::Delete => "delete",
        Intent::DragComplete(_) => "drag_complete",
    };
    match applied {
        Applied::Changed => format!("{:>3}  {:<16}  changed", step, name),
        Applied::Ignored(reason) => format!("{:>3}  {:<16}  ignored ({})", step, name, reason),
    }
}
