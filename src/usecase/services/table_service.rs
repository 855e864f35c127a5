use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::table::filter::{FilterState, DEFAULT_SEARCH_DEBOUNCE};
use crate::domain::table::pagination::{PageInfo, Pagination, DEFAULT_PAGE_SIZE};
use crate::domain::table::selection::Selection;
use crate::domain::table::sort::{sort_records, SortState};

/// Per-screen table configuration.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub initial_sort: Option<SortState>,
    pub initial_filters: BTreeMap<String, FieldValue>,
    pub search_fields: Vec<String>,
    pub page_size: usize,
    pub search_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            initial_sort: None,
            initial_filters: BTreeMap::new(),
            search_fields: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            search_delay: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl TableOptions {
    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|field| field.to_string()).collect();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    pub fn with_filter(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.initial_filters.insert(field.to_string(), value.into());
        self
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }
}

/// One computed snapshot of the table for a source collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page_info: PageInfo,
    pub sort: SortState,
    pub filters: BTreeMap<String, FieldValue>,
    pub search_query: String,
    pub selected_ids: Vec<String>,
}

/// Sort, filter, paginate and select over a caller-owned collection.
///
/// The service never stores the source rows; every [`TableService::view`]
/// call recomputes from the slice it is given. Changing the sort or filters
/// leaves `page` alone, so a shrinking result can leave the cursor past the
/// last page until the caller moves it.
#[derive(Debug, Clone)]
pub struct TableService<T> {
    sort: SortState,
    filter: FilterState,
    pagination: Pagination,
    selection: Selection<T>,
}

impl<T: Record> TableService<T> {
    pub fn new(options: TableOptions) -> Self {
        Self {
            sort: options.initial_sort.unwrap_or_default(),
            filter: FilterState::new(
                options.initial_filters,
                options.search_fields,
                options.search_delay,
            ),
            pagination: Pagination::new(1, options.page_size),
            selection: Selection::new(),
        }
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn set_filter(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.filter.set_filter(field, value.into());
    }

    pub fn set_search_query(&mut self, query: &str, now: Instant) {
        self.filter.set_search_query(query, now);
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.filter.search_deadline()
    }

    /// Applies a settled search query. Returns `true` when results may change.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        self.filter.poll_search(now)
    }

    pub fn flush_search(&mut self) -> bool {
        self.filter.flush_search()
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    /// Moves `page` back into range for the current filtered count. Never
    /// called implicitly.
    pub fn clamp_page(&mut self, source: &[T]) {
        let total = self.filtered_items(source).len();
        self.pagination = self.pagination.clamped(total);
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous_page();
    }

    pub fn next_page(&mut self, source: &[T]) {
        let total = self.filtered_items(source).len();
        self.pagination.next_page(total);
    }

    pub fn toggle_selection(&mut self, item: &T) {
        self.selection.toggle(item);
    }

    pub fn toggle_all(&mut self, items: &[T]) {
        self.selection.toggle_all(items);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Sorted then filtered rows, before pagination.
    pub fn filtered_items(&self, source: &[T]) -> Vec<T> {
        let sorted = sort_records(source, &self.sort);
        self.filter.apply(&sorted)
    }

    pub fn view(&self, source: &[T]) -> TableView<T> {
        let filtered = self.filtered_items(source);
        let filtered_count = filtered.len();
        let window = self.pagination.window(filtered_count);
        let items = filtered[window].to_vec();

        debug!(
            total = source.len(),
            filtered = filtered_count,
            page = self.pagination.page,
            shown = items.len(),
            "table view recomputed"
        );

        TableView {
            items,
            total_count: source.len(),
            filtered_count,
            page_info: self.pagination.info(filtered_count),
            sort: self.sort.clone(),
            filters: self.filter.active_filters().clone(),
            search_query: self.filter.search_query().to_string(),
            selected_ids: self.selection.selected_ids(),
        }
    }
}
