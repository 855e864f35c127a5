use std::collections::HashSet;

use crate::domain::entities::record::Record;

/// Selected records, keyed by id. Full records are kept so callers can act on
/// them directly (bulk export, bulk delete).
#[derive(Debug, Clone)]
pub struct Selection<T> {
    items: Vec<T>,
    ids: HashSet<String>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
        }
    }
}

impl<T: Record> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Ids in selection order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id().to_string()).collect()
    }

    /// Adds `item`, or removes the entry with the same id.
    pub fn toggle(&mut self, item: &T) {
        if self.ids.remove(item.id()) {
            self.items.retain(|selected| selected.id() != item.id());
        } else {
            self.ids.insert(item.id().to_string());
            self.items.push(item.clone());
        }
    }

    /// Clears the selection when its size equals the number of distinct
    /// `items`, otherwise replaces the selection with exactly `items`. Prior
    /// entries outside `items` are dropped, not merged. Repeated ids in
    /// `items` count once, so the clear check differs from `items.len()`
    /// only when `items` holds duplicates.
    pub fn toggle_all(&mut self, items: &[T]) {
        let distinct = dedup_by_id(items);
        if self.items.len() == distinct.len() {
            self.clear();
            return;
        }
        self.ids = distinct.iter().map(|item| item.id().to_string()).collect();
        self.items = distinct;
    }

    /// Whether the header checkbox for `items` should render checked.
    pub fn is_all_selected(&self, items: &[T]) -> bool {
        !items.is_empty() && items.iter().all(|item| self.is_selected(item.id()))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }
}

fn dedup_by_id<T: Record>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.id().to_string()))
        .cloned()
        .collect()
}
