//! Record and record-set types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One flat field-to-text mapping. Field iteration order is insertion order,
/// which keeps output column order deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field; an existing field keeps its position but takes the new value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field's value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of records; order mirrors the source rows
pub type RecordSet = Vec<Record>;

/// Derive the output header from a record set.
///
/// Column identity and order for the entire sheet come from the first record
/// alone; fields appearing only in later records are not represented. Returns
/// `None` for an empty set.
pub fn derive_header(records: &[Record]) -> Option<Vec<String>> {
    records
        .first()
        .map(|record| record.fields().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_insertion_order_preserved() {
        let r = record(&[("zebra", "1"), ("apple", "2"), ("mango", "3")]);
        let fields: Vec<&str> = r.fields().collect();
        assert_eq!(fields, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut r = record(&[("a", "1"), ("b", "2")]);
        r.insert("a", "updated");
        let fields: Vec<&str> = r.fields().collect();
        assert_eq!(fields, vec!["a", "b"]);
        assert_eq!(r.get("a"), Some("updated"));
    }

    #[test]
    fn test_derive_header_uses_first_record_only() {
        let records = vec![
            record(&[("name", "alice"), ("age", "30")]),
            record(&[("name", "bob"), ("age", "25"), ("city", "berlin")]),
        ];
        assert_eq!(
            derive_header(&records),
            Some(vec!["name".to_string(), "age".to_string()])
        );
    }

    #[test]
    fn test_derive_header_empty_set() {
        assert_eq!(derive_header(&[]), None);
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let r = record(&[("second", "b"), ("first", "a")]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        let fields: Vec<&str> = back.fields().collect();
        assert_eq!(fields, vec!["second", "first"]);
    }
}
