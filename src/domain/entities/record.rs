use std::cmp::Ordering;

/// A single cell value read out of a record by field name.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Bool(bool),
}

impl FieldValue {
    /// Total order used for sorting.
    ///
    /// `Null` sorts before every other value. Integers and decimals compare
    /// numerically with each other; decimals use [`f64::total_cmp`], so NaN
    /// has a fixed place. Any other mix of kinds falls back to kind order:
    /// null, bool, number, text.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.total_cmp(b),
            (FieldValue::Integer(a), FieldValue::Decimal(b)) => (*a as f64).total_cmp(b),
            (FieldValue::Decimal(a), FieldValue::Integer(b)) => a.total_cmp(&(*b as f64)),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Integer(_) | FieldValue::Decimal(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }

    /// Empty text and `Null` carry no filter constraint.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Text used for free-text search. Only strings and numbers are searchable.
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.to_lowercase()),
            FieldValue::Integer(value) => Some(value.to_string()),
            FieldValue::Decimal(value) => Some(value.to_string()),
            FieldValue::Bool(_) | FieldValue::Null => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A caller-supplied row with a stable identity.
///
/// The table engines only ever read records through this trait: `field` feeds
/// exact-match filters and free-text search, `compare_field` drives sorting.
pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Value of `name`, or `FieldValue::Null` for unknown fields.
    fn field(&self, name: &str) -> FieldValue;

    /// Ordering of two records by `name`.
    ///
    /// The default orders `field` values with [`FieldValue::compare`], so a
    /// missing value sorts first in ascending order. Override it when a field
    /// needs a custom order.
    fn compare_field(&self, other: &Self, name: &str) -> Ordering {
        self.field(name).compare(&other.field(name))
    }
}
