use serde::{Deserialize, Serialize};

use crate::model::item::ItemList;

use super::Ignored;
use super::list_ops;

/// A position reported by the drag source or drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub index: usize,
}

/// Completion event of a drag: where it started and, unless it was
/// cancelled or dropped outside the list, where it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragResult {
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragResult {
    pub fn dropped(source: usize, destination: usize) -> Self {
        DragResult {
            source: DragLocation { index: source },
            destination: Some(DragLocation { index: destination }),
        }
    }

    pub fn cancelled(source: usize) -> Self {
        DragResult {
            source: DragLocation { index: source },
            destination: None,
        }
    }
}

/// Apply a completed drag to `list`.
pub fn on_drag_complete(list: &ItemList, result: DragResult) -> Result<ItemList, Ignored> {
    let Some(destination) = result.destination else {
        return Err(Ignored::DragCancelled);
    };
    let (source, dest) = (result.source.index, destination.index);
    if source == dest {
        return Err(Ignored::SamePosition);
    }
    if source >= list.len() || dest >= list.len() {
        return Err(Ignored::OutOfRange);
    }
    Ok(list_ops::reorder(list, source, dest))
}
