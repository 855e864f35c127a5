use std::time::Instant;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::domain::entities::record::{FieldValue, Record};
use crate::usecase::services::table_service::{TableOptions, TableService, TableView};

/// Reactive handle over a [`TableService`] bound to a source signal.
///
/// The search box is debounced here: every keystroke cancels the pending
/// settle task and schedules a new one at the service's search deadline.
pub struct UseTable<T: 'static> {
    source: Signal<Vec<T>>,
    service: Signal<TableService<T>>,
    settle_task: Signal<Option<Task>>,
    view: Memo<TableView<T>>,
}

impl<T: 'static> Clone for UseTable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UseTable<T> {}

impl<T: 'static> PartialEq for UseTable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.service == other.service
    }
}

pub fn use_table<T>(source: Signal<Vec<T>>, options: TableOptions) -> UseTable<T>
where
    T: Record + PartialEq + 'static,
{
    let service = use_signal(move || TableService::new(options));
    let mut settle_task = use_signal(|| None::<Task>);
    let view = use_memo(move || service.read().view(&source.read()));

    use_drop(move || {
        if let Ok(mut pending) = settle_task.try_write() {
            if let Some(task) = pending.take() {
                task.cancel();
            }
        }
    });

    UseTable {
        source,
        service,
        settle_task,
        view,
    }
}

impl<T> UseTable<T>
where
    T: Record + PartialEq + 'static,
{
    pub fn view(&self) -> TableView<T> {
        self.view.read().clone()
    }

    pub fn filtered_items(&self) -> Vec<T> {
        self.service.read().filtered_items(&self.source.read())
    }

    pub fn selected_items(&self) -> Vec<T> {
        self.service.read().selection().items().to_vec()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.service.read().is_selected(id)
    }

    pub fn is_all_selected(&self, items: &[T]) -> bool {
        self.service.read().selection().is_all_selected(items)
    }

    pub fn filter_value(&self, field: &str) -> Option<FieldValue> {
        self.service.read().filter().filter_value(field).cloned()
    }

    pub fn toggle_sort(&self, field: &str) {
        let mut service = self.service;
        service.write().toggle_sort(field);
    }

    pub fn set_filter(&self, field: &str, value: impl Into<FieldValue>) {
        let mut service = self.service;
        service.write().set_filter(field, value);
    }

    pub fn set_search_query(&self, query: &str) {
        let mut service = self.service;
        service.write().set_search_query(query, Instant::now());
        let deadline = service.peek().search_deadline();
        self.schedule_settle(deadline);
    }

    /// Applies the typed query without waiting for the debounce delay.
    pub fn flush_search(&self) {
        self.cancel_settle();
        let mut service = self.service;
        service.write().flush_search();
    }

    pub fn reset_filters(&self) {
        self.cancel_settle();
        let mut service = self.service;
        service.write().reset_filters();
    }

    pub fn set_page(&self, page: usize) {
        let mut service = self.service;
        service.write().set_page(page);
    }

    pub fn set_page_size(&self, page_size: usize) {
        let mut service = self.service;
        service.write().set_page_size(page_size);
    }

    /// Pulls the page cursor back into range for the current result set.
    pub fn clamp_page(&self) {
        let mut service = self.service;
        let source = self.source.peek();
        service.write().clamp_page(&source);
    }

    pub fn previous_page(&self) {
        let mut service = self.service;
        service.write().previous_page();
    }

    pub fn next_page(&self) {
        let mut service = self.service;
        let source = self.source.peek();
        service.write().next_page(&source);
    }

    pub fn toggle_selection(&self, item: &T) {
        let mut service = self.service;
        service.write().toggle_selection(item);
    }

    pub fn toggle_all(&self, items: &[T]) {
        let mut service = self.service;
        service.write().toggle_all(items);
    }

    pub fn clear_selection(&self) {
        let mut service = self.service;
        service.write().clear_selection();
    }

    fn cancel_settle(&self) {
        let mut settle_task = self.settle_task;
        if let Some(task) = settle_task.write().take() {
            task.cancel();
        };
    }

    fn schedule_settle(&self, deadline: Option<Instant>) {
        self.cancel_settle();
        let Some(deadline) = deadline else {
            return;
        };

        let mut service = self.service;
        let task = spawn(async move {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
            service.write().poll_search(Instant::now());
        });
        let mut settle_task = self.settle_task;
        settle_task.set(Some(task));
    }
}
