use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;

use crate::infra::export::flatten::{flatten_record, title_case_header};

/// Flattened rows plus the sorted union of their keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTable {
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

pub fn flatten_all<T: Serialize>(records: &[T]) -> Result<FlatTable> {
    let mut rows = Vec::with_capacity(records.len());
    let mut columns = BTreeSet::new();
    for (idx, record) in records.iter().enumerate() {
        let value = serde_json::to_value(record)
            .with_context(|| format!("failed to serialize record #{}", idx + 1))?;
        let row = flatten_record(&value);
        columns.extend(row.keys().cloned());
        rows.push(row);
    }

    Ok(FlatTable {
        columns: columns.into_iter().collect(),
        rows,
    })
}

/// Renders a flat table as CSV: every field quoted, `"` doubled, each line
/// terminated by `\n`, Title Case header row first. A table without columns
/// renders as an empty payload.
pub fn render_csv(table: &FlatTable) -> Result<String> {
    if table.columns.is_empty() {
        return Ok(String::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(table.columns.iter().map(|key| title_case_header(key)))
        .context("failed to write csv header")?;

    for row in &table.rows {
        writer
            .write_record(
                table
                    .columns
                    .iter()
                    .map(|key| row.get(key).map(String::as_str).unwrap_or("")),
            )
            .context("failed to write csv row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush csv writer: {}", err.error()))?;
    String::from_utf8(bytes).context("csv output is not valid utf-8")
}

pub fn records_to_csv<T: Serialize>(records: &[T]) -> Result<String> {
    let table = flatten_all(records)?;
    render_csv(&table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quotes_every_field_and_doubles_quotes() {
        let records = vec![json!({"id": "1", "name": "Acme, \"Inc\""})];

        let csv = records_to_csv(&records).expect("csv should render");

        assert_eq!(csv, "\"Id\",\"Name\"\n\"1\",\"Acme, \"\"Inc\"\"\"\n");
    }

    #[test]
    fn columns_are_the_union_of_all_rows() {
        let records = vec![
            json!({"id": "1", "name": "Harbor View"}),
            json!({"id": "2", "parking": {"spaces": 4}}),
        ];

        let csv = records_to_csv(&records).expect("csv should render");

        assert_eq!(
            csv,
            "\"Id\",\"Name\",\"Parking Spaces\"\n\
             \"1\",\"Harbor View\",\"\"\n\
             \"2\",\"\",\"4\"\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        let records: Vec<serde_json::Value> = Vec::new();

        assert_eq!(records_to_csv(&records).expect("csv should render"), "");
    }

    #[test]
    fn flatten_all_collects_sorted_columns() {
        let records = vec![json!({"b": 1}), json!({"a": {"z": 2}})];

        let table = flatten_all(&records).expect("flatten should succeed");

        assert_eq!(table.columns, vec!["a_z", "b"]);
        assert_eq!(table.rows.len(), 2);
    }
}
