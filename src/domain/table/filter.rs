use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::table::debounce::Debouncer;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Exact-match field filters plus a debounced free-text search.
#[derive(Debug, Clone)]
pub struct FilterState {
    initial_filters: BTreeMap<String, FieldValue>,
    filters: BTreeMap<String, FieldValue>,
    search_fields: Vec<String>,
    search_query: String,
    applied_query: String,
    debouncer: Debouncer<String>,
}

impl FilterState {
    pub fn new(
        initial_filters: BTreeMap<String, FieldValue>,
        search_fields: Vec<String>,
        search_delay: Duration,
    ) -> Self {
        let initial_filters: BTreeMap<String, FieldValue> = initial_filters
            .into_iter()
            .filter(|(_, value)| !value.is_blank())
            .collect();
        Self {
            filters: initial_filters.clone(),
            initial_filters,
            search_fields,
            search_query: String::new(),
            applied_query: String::new(),
            debouncer: Debouncer::new(search_delay),
        }
    }

    /// Sets an exact-match constraint, or clears it for `Null`/empty text.
    pub fn set_filter(&mut self, field: &str, value: FieldValue) {
        if value.is_blank() {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), value);
        }
    }

    pub fn filter_value(&self, field: &str) -> Option<&FieldValue> {
        self.filters.get(field)
    }

    pub fn active_filters(&self) -> &BTreeMap<String, FieldValue> {
        &self.filters
    }

    /// Query as typed. It only takes effect once [`FilterState::poll_search`]
    /// sees it settle.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Query currently used for matching.
    pub fn applied_query(&self) -> &str {
        &self.applied_query
    }

    pub fn set_search_query(&mut self, query: &str, now: Instant) {
        self.search_query = query.to_string();
        self.debouncer.push(self.search_query.clone(), now);
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Applies the typed query if it has been stable long enough.
    /// Returns `true` when the applied query changed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => self.apply_query(query),
            None => false,
        }
    }

    /// Applies any pending query immediately.
    pub fn flush_search(&mut self) -> bool {
        match self.debouncer.flush() {
            Some(query) => self.apply_query(query),
            None => false,
        }
    }

    fn apply_query(&mut self, query: String) -> bool {
        if self.applied_query == query {
            return false;
        }
        self.applied_query = query;
        true
    }

    /// Restores the initial filters and drops the search query, pending or not.
    pub fn reset(&mut self) {
        self.filters = self.initial_filters.clone();
        self.search_query.clear();
        self.applied_query.clear();
        self.debouncer.cancel();
    }

    pub fn matches<T: Record>(&self, item: &T) -> bool {
        let fields_match = self
            .filters
            .iter()
            .all(|(field, expected)| item.field(field) == *expected);
        if !fields_match {
            return false;
        }

        if self.applied_query.is_empty() || self.search_fields.is_empty() {
            return true;
        }

        let needle = self.applied_query.to_lowercase();
        self.search_fields.iter().any(|field| {
            item.field(field)
                .search_text()
                .is_some_and(|haystack| haystack.contains(&needle))
        })
    }

    /// Keeps the items passing every filter, in input order.
    pub fn apply<T: Record>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(BTreeMap::new(), Vec::new(), DEFAULT_SEARCH_DEBOUNCE)
    }
}
