use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::domain::entities::property::sample_properties;
use crate::domain::entities::record::{FieldValue, Record};
use crate::domain::table::sort::{SortDirection, SortState};
use crate::infra::export::fs_sink::FsExportSink;
use crate::usecase::ports::export::ExportSink;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::table_service::{TableOptions, TableService};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("estate-{prefix}-{nanos}"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Person {
    id: String,
    name: String,
    age: i64,
}

impl Record for Person {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::from(self.name.as_str()),
            "age" => FieldValue::Integer(self.age),
            _ => FieldValue::Null,
        }
    }
}

fn people() -> Vec<Person> {
    [("1", "Bob", 30), ("2", "Ann", 25), ("3", "Cid", 25)]
        .iter()
        .map(|(id, name, age)| Person {
            id: id.to_string(),
            name: name.to_string(),
            age: *age,
        })
        .collect()
}

fn names(items: &[Person]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn sort_by_age_keeps_input_order_among_ties() {
    let source = people();
    let mut table = TableService::new(TableOptions::default());

    table.toggle_sort("age");
    let view = table.view(&source);

    assert_eq!(view.sort, SortState::by("age", SortDirection::Asc));
    assert_eq!(names(&view.items), vec!["Ann", "Cid", "Bob"]);
}

#[test]
fn search_on_name_matches_single_record() {
    let source = people();
    let options = TableOptions::default()
        .with_search_fields(&["name"])
        .with_search_delay(Duration::from_millis(300));
    let mut table = TableService::new(options);
    let start = Instant::now();

    table.toggle_sort("age");
    table.set_search_query("an", start);
    table.poll_search(start + Duration::from_millis(300));
    let view = table.view(&source);

    assert_eq!(names(&view.items), vec!["Ann"]);
    assert_eq!(view.filtered_count, 1);
}

#[test]
fn second_page_of_one_on_sorted_list() {
    let source = people();
    let mut table = TableService::new(TableOptions::default().with_page_size(1));

    table.toggle_sort("age");
    table.set_page(2);
    let view = table.view(&source);

    assert_eq!(names(&view.items), vec!["Cid"]);
    assert_eq!((view.page_info.from, view.page_info.to), (2, 2));
    assert!(view.page_info.can_next_page);
    assert!(view.page_info.can_previous_page);
}

#[test]
fn sort_toggle_then_desc_reverses_groups_but_not_ties() {
    let source = people();
    let mut table = TableService::new(TableOptions::default());

    table.toggle_sort("age");
    table.toggle_sort("age");
    let view = table.view(&source);

    assert_eq!(view.sort.direction, SortDirection::Desc);
    assert_eq!(names(&view.items), vec!["Bob", "Ann", "Cid"]);
}

#[test]
fn export_writes_selected_properties_to_disk() {
    let temp_dir = unique_test_dir("export");
    let properties = sample_properties();
    let mut table = TableService::new(TableOptions::default());
    table.set_filter("city", "York");
    let york = table.filtered_items(&properties);
    table.toggle_all(&york);

    let service = ExportService::new(Arc::new(FsExportSink::new(&temp_dir)));
    let outcome = service
        .export_to_csv(table.selection().items(), "york")
        .expect("export should succeed");

    assert_eq!(outcome.path, temp_dir.join("york.csv"));
    assert_eq!(outcome.rows, 3);

    let written = fs::read_to_string(&outcome.path).expect("should read export");
    let mut lines = written.lines();
    let header = lines.next().expect("header row should exist");
    assert!(header.starts_with("\"Address City\",\"Address Postal Code\",\"Address Street\",\"Id\""));
    assert!(header.contains("\"Tags 1\""));
    assert_eq!(lines.count(), 3);
    assert!(written.contains("\"Elm House\""));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn export_sink_creates_missing_directories() {
    let temp_dir = unique_test_dir("nested").join("a").join("b");

    let path = FsExportSink::new(&temp_dir)
        .deliver("empty", "")
        .expect("delivery should succeed");

    assert!(path.exists(), "export file should be created");
    fs::remove_dir_all(temp_dir.parent().and_then(|p| p.parent()).expect("temp root"))
        .expect("should cleanup temp dir");
}
