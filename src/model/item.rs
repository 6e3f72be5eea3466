use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, immutable identifier of an item (e.g. `id-3`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// A single user-entered text entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
}

impl Item {
    pub fn new(id: ItemId, content: impl Into<String>) -> Self {
        Item {
            id,
            content: content.into(),
        }
    }
}

/// An ordered snapshot of items. Order defines render and drag position.
///
/// Snapshots are never mutated through shared references: every list
/// operation in `ops::list_ops` takes `&ItemList` and returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        ItemList::default()
    }

    /// Build a snapshot from items. Later duplicates of an id are dropped.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut list = ItemList::new();
        for item in items {
            if !list.contains(&item.id) {
                list.items.push(item);
            }
        }
        list
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<&ItemId> {
        self.items.iter().map(|item| &item.id).collect()
    }

    pub fn contents(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.content.as_str()).collect()
    }

    pub(crate) fn into_vec(self) -> Vec<Item> {
        self.items
    }

    /// Wrap a vector already known to hold unique ids.
    pub(crate) fn from_unique(items: Vec<Item>) -> Self {
        debug_assert!(
            {
                let mut seen = std::collections::HashSet::new();
                items.iter().all(|i| seen.insert(&i.id))
            },
            "duplicate item id in snapshot"
        );
        ItemList { items }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
