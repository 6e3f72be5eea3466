use serde::Serialize;

use super::item::ItemId;

/// Transient state of the edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        item_id: ItemId,
        /// In-progress text, seeded from the item's content on open
        draft: String,
    },
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn active_item_id(&self) -> Option<&ItemId> {
        match self {
            EditSession::Open { item_id, .. } => Some(item_id),
            EditSession::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditSession::Open { draft, .. } => Some(draft),
            EditSession::Closed => None,
        }
    }
}
