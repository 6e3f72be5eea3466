//! Edit session transitions.
//!
//! `Closed --open_for--> Open --edit_draft--> Open --save|cancel|delete--> Closed`.
//! Each transition takes the current session (and list, where it touches the
//! store) and returns the next values, or the reason it was ignored.

use crate::model::item::{ItemId, ItemList};
use crate::model::session::EditSession;

use super::Ignored;
use super::list_ops;

/// Open a session on `id`, seeding the draft with the item's content.
///
/// Opening while another session is open retargets it. An id that is not in
/// the list is ignored so the session never points at a missing item.
pub fn open_for(list: &ItemList, id: &ItemId) -> Result<EditSession, Ignored> {
    let item = list.find(id).ok_or(Ignored::UnknownItem)?;
    Ok(EditSession::Open {
        item_id: item.id.clone(),
        draft: item.content.clone(),
    })
}

/// Replace the draft buffer. No store interaction.
pub fn edit_draft(session: &EditSession, text: &str) -> Result<EditSession, Ignored> {
    match session {
        EditSession::Open { item_id, .. } => Ok(EditSession::Open {
            item_id: item_id.clone(),
            draft: text.to_string(),
        }),
        EditSession::Closed => Err(Ignored::SessionClosed),
    }
}

/// Write the draft into the list and close.
/// An empty draft is ignored and the session stays open.
pub fn save(session: &EditSession, list: &ItemList) -> Result<(EditSession, ItemList), Ignored> {
    let EditSession::Open { item_id, draft } = session else {
        return Err(Ignored::SessionClosed);
    };
    if list_ops::normalize_content(draft).is_none() {
        return Err(Ignored::EmptyContent);
    }
    let list = list_ops::update_content(list, item_id, draft);
    Ok((EditSession::Closed, list))
}

/// Discard the draft and close.
pub fn cancel(session: &EditSession) -> Result<EditSession, Ignored> {
    match session {
        EditSession::Open { .. } => Ok(EditSession::Closed),
        EditSession::Closed => Err(Ignored::SessionClosed),
    }
}

/// Remove the session's item from the list and close.
pub fn delete(session: &EditSession, list: &ItemList) -> Result<(EditSession, ItemList), Ignored> {
    let EditSession::Open { item_id, .. } = session else {
        return Err(Ignored::SessionClosed);
    };
    Ok((EditSession::Closed, list_ops::remove(list, item_id)))
}

/// Close the session if its item is no longer in `list`.
pub fn reconcile(session: EditSession, list: &ItemList) -> EditSession {
    match session.active_item_id() {
        Some(id) if !list.contains(id) => EditSession::Closed,
        _ => session,
    }
}
