use std::collections::BTreeMap;

use serde_json::Value;

/// Flattens a nested JSON object into a single-level row.
///
/// Nested objects extend the key with `<key>_`, array elements get a 1-based
/// index (`tags_1`, `units_2_label`), `null` becomes an empty string. Keys
/// that collide after flattening keep the value written last. Non-object
/// roots have no named fields and flatten to an empty row.
pub fn flatten_record(value: &Value) -> BTreeMap<String, String> {
    let mut row = BTreeMap::new();
    if let Value::Object(map) = value {
        for (key, child) in map {
            flatten_into(&mut row, key, child);
        }
    }
    row
}

fn flatten_into(row: &mut BTreeMap<String, String>, key: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (child_key, child) in map {
                flatten_into(row, &format!("{key}_{child_key}"), child);
            }
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                flatten_into(row, &format!("{key}_{}", idx + 1), item);
            }
        }
        leaf => {
            row.insert(key.to_string(), leaf_to_string(leaf));
        }
    }
}

fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// `monthly_rent` -> `Monthly Rent`. Splits on `_` only; empty segments are
/// kept, so `a__b` renders as `A  B`.
pub fn title_case_header(key: &str) -> String {
    key.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn nested_objects_and_arrays_flatten_with_indices() {
        let value = json!({"a": 1, "b": {"c": 2, "d": [3, 4]}});

        assert_eq!(
            flatten_record(&value),
            row(&[("a", "1"), ("b_c", "2"), ("b_d_1", "3"), ("b_d_2", "4")])
        );
    }

    #[test]
    fn objects_inside_arrays_recurse() {
        let value = json!({"units": [{"label": "1A", "beds": 2}, {"label": "1B"}]});

        assert_eq!(
            flatten_record(&value),
            row(&[
                ("units_1_beds", "2"),
                ("units_1_label", "1A"),
                ("units_2_label", "1B"),
            ])
        );
    }

    #[test]
    fn null_and_bool_leaves() {
        let value = json!({"note": null, "active": true, "rent": 1250.5});

        assert_eq!(
            flatten_record(&value),
            row(&[("active", "true"), ("note", ""), ("rent", "1250.5")])
        );
    }

    #[test]
    fn empty_containers_produce_no_columns() {
        let value = json!({"tags": [], "meta": {}});

        assert!(flatten_record(&value).is_empty());
        assert!(flatten_record(&json!([1, 2])).is_empty());
    }

    #[test]
    fn headers_are_title_cased_per_segment() {
        assert_eq!(title_case_header("monthly_rent"), "Monthly Rent");
        assert_eq!(title_case_header("address_city"), "Address City");
        assert_eq!(title_case_header("tags_1"), "Tags 1");
        assert_eq!(title_case_header("id"), "Id");
    }
}
