//! Flat headers and normalized rows.
//!
//! A [`FlatHeader`] is the merged form of the sheet's two header rows, and a
//! [`NormalizedRow`] is one data row keyed by those merged paths.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::cell::parse_number;
use super::field::Field;

/// An ordered sequence of field paths, one per column.
///
/// Each path is either a bare group label or `"<group>/<sub-label>"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatHeader {
    paths: Vec<String>,
}

impl FlatHeader {
    /// Creates a header from already merged paths.
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }

    /// Returns the merged paths in column order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if the header has no columns.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the column index of the first path addressing `field`.
    pub fn position(&self, field: Field) -> Option<usize> {
        self.paths.iter().position(|p| field.matches_path(p))
    }
}

/// One data row: an ordered mapping from field path to canonical value.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Field, NormalizedRow};
///
/// let row = NormalizedRow::new(vec![
///     ("时间".to_string(), "2024-01-02".to_string()),
///     ("汇总/实际工作时长(小时)".to_string(), "8.5".to_string()),
/// ]);
///
/// assert_eq!(row.field(Field::Date), "2024-01-02");
/// assert_eq!(row.field(Field::Duty), "");
/// assert!(row.field_number(Field::ActualHours).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedRow {
    values: Vec<(String, String)>,
}

impl NormalizedRow {
    /// Creates a row from `(path, canonical value)` pairs in column order.
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    /// Returns the value stored under an exact path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the canonical value of a recognized field.
    ///
    /// The first column whose path addresses the field wins. A missing
    /// column reads as the empty string, the same as an empty cell.
    pub fn field(&self, field: Field) -> &str {
        self.values
            .iter()
            .find(|(p, _)| field.matches_path(p))
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Returns the numeric value of a recognized field, if it has one.
    pub fn field_number(&self, field: Field) -> Option<Decimal> {
        parse_number(self.field(field))
    }

    /// Returns the non-empty value of a recognized field.
    pub fn field_present(&self, field: Field) -> Option<&str> {
        Some(self.field(field)).filter(|v| !v.is_empty())
    }

    /// Returns true if every value in the row is empty.
    pub fn is_blank(&self) -> bool {
        self.iter().all(|(_, v)| v.is_empty())
    }

    /// Iterates over `(path, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Returns the number of columns in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for NormalizedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (path, value) in self.iter() {
            map.serialize_entry(path, value)?;
        }
        map.end()
    }
}
