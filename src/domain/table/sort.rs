use std::cmp::Ordering;

use crate::domain::entities::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort column. `field == None` keeps the input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// Returns a sorted copy of `items`. The sort is stable, so ties keep their
/// relative input order in both directions.
pub fn sort_records<T: Record>(items: &[T], state: &SortState) -> Vec<T> {
    let mut sorted = items.to_vec();
    let Some(field) = state.field.as_deref() else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = a.compare_field(b, field);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Ordering helper for callers overriding [`Record::compare_field`] with a
/// key extractor.
pub fn compare_by_key<T, K: Ord>(a: &T, b: &T, key: impl Fn(&T) -> K) -> Ordering {
    key(a).cmp(&key(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::record::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        score: i64,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => FieldValue::from(self.name.as_str()),
                "score" => FieldValue::Integer(self.score),
                _ => FieldValue::Null,
            }
        }
    }

    fn row(id: &str, name: &str, score: i64) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            score,
        }
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.id.as_str()).collect()
    }

    #[test]
    fn toggle_same_field_flips_direction() {
        let mut state = SortState::default();

        state.toggle("score");
        assert_eq!(state, SortState::by("score", SortDirection::Asc));

        state.toggle("score");
        assert_eq!(state, SortState::by("score", SortDirection::Desc));
    }

    #[test]
    fn toggle_new_field_resets_to_ascending() {
        let mut state = SortState::by("score", SortDirection::Desc);

        state.toggle("name");

        assert_eq!(state, SortState::by("name", SortDirection::Asc));
    }

    #[test]
    fn unset_field_keeps_input_order() {
        let rows = vec![row("b", "B", 2), row("a", "A", 1)];

        let sorted = sort_records(&rows, &SortState::default());

        assert_eq!(sorted, rows);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let rows = vec![
            row("1", "x", 5),
            row("2", "y", 1),
            row("3", "z", 5),
            row("4", "w", 1),
        ];

        let asc = sort_records(&rows, &SortState::by("score", SortDirection::Asc));
        let desc = sort_records(&rows, &SortState::by("score", SortDirection::Desc));

        assert_eq!(ids(&asc), vec!["2", "4", "1", "3"]);
        assert_eq!(ids(&desc), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn unknown_field_is_a_tie_everywhere() {
        let rows = vec![row("1", "b", 2), row("2", "a", 1)];

        let sorted = sort_records(&rows, &SortState::by("missing", SortDirection::Desc));

        assert_eq!(ids(&sorted), vec!["1", "2"]);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Reading {
        id: String,
        value: Option<i64>,
    }

    impl Record for Reading {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "value" => FieldValue::from(self.value),
                _ => FieldValue::Null,
            }
        }
    }

    #[test]
    fn missing_values_sort_first_and_the_rest_still_sort() {
        let readings: Vec<Reading> = [Some(3), None, Some(1), None, Some(2)]
            .iter()
            .enumerate()
            .map(|(n, value)| Reading {
                id: n.to_string(),
                value: *value,
            })
            .collect();

        let asc = sort_records(&readings, &SortState::by("value", SortDirection::Asc));
        let desc = sort_records(&readings, &SortState::by("value", SortDirection::Desc));

        let asc_values: Vec<Option<i64>> = asc.iter().map(|r| r.value).collect();
        let desc_values: Vec<Option<i64>> = desc.iter().map(|r| r.value).collect();
        assert_eq!(asc_values, vec![None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(desc_values, vec![Some(3), Some(2), Some(1), None, None]);
        assert_eq!(asc[0].id, "1");
        assert_eq!(desc[3].id, "1");
    }

    #[test]
    fn sorting_does_not_touch_the_source() {
        let rows = vec![row("1", "b", 2), row("2", "a", 1)];
        let before = rows.clone();

        let _ = sort_records(&rows, &SortState::by("name", SortDirection::Asc));

        assert_eq!(rows, before);
    }
}
