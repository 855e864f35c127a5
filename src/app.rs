use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::entities::property::{Property, PropertyStatus};
use crate::domain::entities::record::FieldValue;
use crate::domain::table::pagination::PAGE_SIZE_OPTIONS;
use crate::domain::table::sort::{SortDirection, SortState};
use crate::infra::export::fs_sink::{csv_file_name, FsExportSink};
use crate::ui::hooks::use_table::{use_table, UseTable};
use crate::ui::state::app_state::AppState;
use crate::usecase::services::export_service::{default_export_name, ExportService};
use crate::usecase::services::table_service::TableOptions;

const SEARCH_FIELDS: [&str; 5] = ["name", "city", "street", "manager", "units"];

struct ColumnDef {
    field: &'static str,
    label: &'static str,
}

const COLUMNS: [ColumnDef; 6] = [
    ColumnDef { field: "name", label: "Name" },
    ColumnDef { field: "city", label: "City" },
    ColumnDef { field: "status", label: "Status" },
    ColumnDef { field: "units", label: "Units" },
    ColumnDef { field: "monthly_rent", label: "Rent" },
    ColumnDef { field: "manager", label: "Manager" },
];

fn sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if !sort.is_sorted_by(field) {
        return "";
    }
    match sort.direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

/// Asks for a destination next to `export_dir` and writes `rows` there.
fn export_rows(export_dir: &Path, rows: &[Property], prefix: &str) -> String {
    if rows.is_empty() {
        return "Nothing to export".to_string();
    }

    let suggested = csv_file_name(&default_export_name(prefix));
    let Some(target) = FileDialog::new()
        .set_directory(export_dir)
        .set_file_name(suggested)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return "Export cancelled".to_string();
    };

    let dir = target.parent().unwrap_or(export_dir).to_path_buf();
    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(prefix)
        .to_string();

    let service = ExportService::new(Arc::new(FsExportSink::new(dir)));
    match service.export_to_csv(rows, &file_name) {
        Ok(outcome) => format!(
            "Exported {} rows to {}",
            outcome.rows,
            outcome.path.display()
        ),
        Err(err) => format!("Export failed: {err}"),
    }
}

#[component]
fn Pager(table: UseTable<Property>) -> Element {
    let info = table.view().page_info;

    rsx! {
        div {
            style: "display: flex; gap: 6px; align-items: center; padding: 8px 0;",
            span { "{info.from}–{info.to} of {info.total}" }
            button {
                disabled: !info.can_previous_page,
                onclick: move |_| table.previous_page(),
                "‹"
            }
            {info.page_numbers.iter().map(|&number| {
                let weight = if number == info.page { "bold" } else { "normal" };
                rsx!(
                    button {
                        key: "{number}",
                        style: "font-weight: {weight};",
                        onclick: move |_| table.set_page(number),
                        "{number}"
                    }
                )
            })}
            button {
                disabled: !info.can_next_page,
                onclick: move |_| table.next_page(),
                "›"
            }
            select {
                value: "{info.page_size}",
                onchange: move |event| {
                    if let Ok(page_size) = event.value().parse::<usize>() {
                        table.set_page_size(page_size);
                        table.clamp_page();
                    }
                },
                {PAGE_SIZE_OPTIONS.iter().map(|size| rsx!(
                    option { key: "{size}", value: "{size}", "{size} / page" }
                ))}
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let AppState {
        properties,
        mut busy,
        mut status,
    } = AppState::new();

    let table = use_table(
        properties,
        TableOptions::default()
            .with_search_fields(&SEARCH_FIELDS)
            .with_page_size(config.page_size)
            .with_search_delay(config.search_debounce),
    );
    let view = table.view();
    let page_items = view.items.clone();
    let all_on_page_selected = table.is_all_selected(&page_items);
    let status_filter = match table.filter_value("status") {
        Some(FieldValue::Text(value)) => value,
        _ => String::new(),
    };
    let selected_count = view.selected_ids.len();

    let export_dir_for_selected = config.export_dir.clone();
    let export_dir_for_filtered = config.export_dir.clone();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                input {
                    r#type: "search",
                    placeholder: "Search name, city, street, manager…",
                    value: "{view.search_query}",
                    oninput: move |event| {
                        table.set_search_query(&event.value());
                        table.set_page(1);
                    },
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            table.flush_search();
                        }
                    },
                }
                select {
                    value: "{status_filter}",
                    onchange: move |event| {
                        table.set_filter("status", event.value());
                        table.set_page(1);
                    },
                    option { value: "", "All statuses" }
                    {PropertyStatus::ALL.iter().map(|status| rsx!(
                        option { key: "{status.as_str()}", value: "{status.as_str()}", "{status.label()}" }
                    ))}
                }
                button {
                    onclick: move |_| {
                        table.reset_filters();
                        table.set_page(1);
                    },
                    "Reset filters"
                }
                button {
                    disabled: busy() || selected_count == 0,
                    onclick: move |_| {
                        *busy.write() = true;
                        let rows = table.selected_items();
                        let message = export_rows(&export_dir_for_selected, &rows, "properties-selected");
                        info!(rows = rows.len(), "{message}");
                        status.set(message);
                        *busy.write() = false;
                    },
                    "Export selected ({selected_count})"
                }
                button {
                    disabled: busy() || view.filtered_count == 0,
                    onclick: move |_| {
                        *busy.write() = true;
                        let rows = table.filtered_items();
                        let message = export_rows(&export_dir_for_filtered, &rows, "properties");
                        info!(rows = rows.len(), "{message}");
                        status.set(message);
                        *busy.write() = false;
                    },
                    "Export filtered ({view.filtered_count})"
                }
                button {
                    disabled: selected_count == 0,
                    onclick: move |_| table.clear_selection(),
                    "Clear selection"
                }
            }

            table {
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        th {
                            input {
                                r#type: "checkbox",
                                checked: all_on_page_selected,
                                onclick: move |_| table.toggle_all(&page_items),
                            }
                        }
                        {COLUMNS.iter().map(|column| {
                            let field = column.field;
                            let arrow = sort_indicator(&view.sort, field);
                            rsx!(
                                th {
                                    key: "{field}",
                                    style: "text-align: left; cursor: pointer; padding: 6px; border-bottom: 1px solid #ccc;",
                                    onclick: move |_| table.toggle_sort(field),
                                    "{column.label}{arrow}"
                                }
                            )
                        })}
                    }
                }
                tbody {
                    {view.items.iter().map(|item| {
                        let row = item.clone();
                        let checked = view.selected_ids.contains(&row.id);
                        let background = if checked { "#eef4ff" } else { "transparent" };
                        let manager = row.manager.clone().unwrap_or_default();
                        rsx!(
                            tr {
                                key: "{item.id}",
                                style: "background: {background};",
                                td {
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onclick: move |_| table.toggle_selection(&row),
                                    }
                                }
                                td { style: "padding: 6px;", "{item.name}" }
                                td { style: "padding: 6px;", "{item.address.city}" }
                                td { style: "padding: 6px;", "{item.status.label()}" }
                                td { style: "padding: 6px; text-align: right;", "{item.units}" }
                                td { style: "padding: 6px; text-align: right;", "{item.monthly_rent:.2}" }
                                td { style: "padding: 6px;", "{manager}" }
                            }
                        )
                    })}
                }
            }

            if view.items.is_empty() {
                p { "No properties match the current filters." }
            }

            Pager { table }

            footer {
                style: "padding-top: 8px; color: #555;",
                "{status}"
            }
        }
    }
}
