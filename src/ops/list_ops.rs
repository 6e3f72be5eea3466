use crate::model::item::{Item, ItemId, ItemList};

/// Generates `id-<n>` identifiers, skipping any already present in a list.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        IdSequence::default()
    }

    /// Produce an id not used by any item in `list`.
    pub fn next_for(&mut self, list: &ItemList) -> ItemId {
        loop {
            let id = ItemId::new(format!("id-{}", self.next));
            self.next += 1;
            if !list.contains(&id) {
                return id;
            }
        }
    }
}

/// Trimmed content, or None when nothing but whitespace remains.
pub fn normalize_content(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Append a new item with trimmed `content`.
/// Whitespace-only content is rejected: the list is returned unchanged with no item.
pub fn add(list: &ItemList, content: &str, ids: &mut IdSequence) -> (ItemList, Option<Item>) {
    let Some(content) = normalize_content(content) else {
        return (list.clone(), None);
    };
    let item = Item::new(ids.next_for(list), content);
    let mut items = list.clone().into_vec();
    items.push(item.clone());
    (ItemList::from_unique(items), Some(item))
}

/// Move the item at `source` to `dest`, shifting the items in between by one.
/// Out-of-range indices and `source == dest` leave the list unchanged.
pub fn reorder(list: &ItemList, source: usize, dest: usize) -> ItemList {
    if source == dest || source >= list.len() || dest >= list.len() {
        return list.clone();
    }
    let mut items = list.clone().into_vec();
    let moved = items.remove(source);
    items.insert(dest, moved);
    ItemList::from_unique(items)
}

/// Replace the content of the item with `id`. Order is untouched.
/// Unknown ids and whitespace-only content leave the list unchanged.
pub fn update_content(list: &ItemList, id: &ItemId, new_content: &str) -> ItemList {
    let Some(content) = normalize_content(new_content) else {
        return list.clone();
    };
    if !list.contains(id) {
        return list.clone();
    }
    let items = list
        .iter()
        .map(|item| {
            if &item.id == id {
                Item::new(item.id.clone(), content)
            } else {
                item.clone()
            }
        })
        .collect();
    ItemList::from_unique(items)
}

/// Remove the item with `id`, if present.
pub fn remove(list: &ItemList, id: &ItemId) -> ItemList {
    let items = list.iter().filter(|item| &item.id != id).cloned().collect();
    ItemList::from_unique(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_list() -> ItemList {
        ItemList::from_items(vec![
            Item::new("a".into(), "X"),
            Item::new("b".into(), "Y"),
            Item::new("c".into(), "Z"),
        ])
    }

    fn ids(list: &ItemList) -> Vec<&str> {
        list.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_add_appends_trimmed() {
        let mut seq = IdSequence::new();
        let (list, item) = add(&sample_list(), "  Hello  ", &mut seq);
        let item = item.unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(item.content, "Hello");
        assert_eq!(list.get(3), Some(&item));
    }

    #[test]
    fn test_add_whitespace_is_rejected() {
        let mut seq = IdSequence::new();
        let before = sample_list();
        for blank in ["", "  ", "\t\n"] {
            let (after, item) = add(&before, blank, &mut seq);
            assert!(item.is_none());
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut seq = IdSequence::new();
        let seeded = ItemList::from_items(vec![
            Item::new("id-0".into(), "taken"),
            Item::new("id-1".into(), "taken too"),
        ]);
        let (list, item) = add(&seeded, "fresh", &mut seq);
        assert_eq!(item.unwrap().id.as_str(), "id-2");
        let (list, item) = add(&list, "fresher", &mut seq);
        assert_eq!(item.unwrap().id.as_str(), "id-3");
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_reorder_forward() {
        let list = reorder(&sample_list(), 0, 2);
        assert_eq!(ids(&list), vec!["b", "c", "a"]);
        assert_eq!(list.contents(), vec!["Y", "Z", "X"]);
    }

    #[test]
    fn test_reorder_backward_is_a_move_not_a_swap() {
        let list = ItemList::from_items(vec![
            Item::new("a".into(), "1"),
            Item::new("b".into(), "2"),
            Item::new("c".into(), "3"),
            Item::new("d".into(), "4"),
        ]);
        let moved = reorder(&list, 3, 0);
        assert_eq!(ids(&moved), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let list = sample_list();
        assert_eq!(reorder(&list, 1, 1), list);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let list = sample_list();
        assert_eq!(reorder(&list, 0, 3), list);
        assert_eq!(reorder(&list, 7, 0), list);
        assert_eq!(reorder(&ItemList::new(), 0, 0), ItemList::new());
    }

    #[test]
    fn test_reorder_preserves_ids_for_all_pairs() {
        let list = sample_list();
        for i in 0..list.len() {
            for j in 0..list.len() {
                let moved = reorder(&list, i, j);
                let mut before = ids(&list);
                let mut after = ids(&moved);
                assert_eq!(moved.get(j).map(|x| &x.id), list.get(i).map(|x| &x.id));
                before.sort();
                after.sort();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_update_content() {
        let list = update_content(&sample_list(), &"b".into(), "Y2");
        assert_eq!(list.contents(), vec!["X", "Y2", "Z"]);
        assert_eq!(ids(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_content_trims() {
        let list = update_content(&sample_list(), &"a".into(), "  X2 ");
        assert_eq!(list.get(0).unwrap().content, "X2");
    }

    #[test]
    fn test_update_content_noop_cases() {
        let list = sample_list();
        assert_eq!(update_content(&list, &"b".into(), "   "), list);
        assert_eq!(update_content(&list, &"missing".into(), "new"), list);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let once = remove(&sample_list(), &"b".into());
        assert_eq!(ids(&once), vec!["a", "c"]);
        let twice = remove(&once, &"b".into());
        assert_eq!(twice, once);
    }

    #[test]
    fn test_operations_leave_input_untouched() {
        let list = sample_list();
        let snapshot = list.clone();
        let mut seq = IdSequence::new();
        let _ = add(&list, "new", &mut seq);
        let _ = reorder(&list, 0, 2);
        let _ = update_content(&list, &"a".into(), "changed");
        let _ = remove(&list, &"a".into());
        assert_eq!(list, snapshot);
    }
}
