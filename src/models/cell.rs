//! Raw spreadsheet cell values and their coercions.
//!
//! Cells arrive from the workbook layer with no fixed type. [`RawCell`] is the
//! only place that ambiguity is resolved: everything downstream works with
//! either the canonical string ([`RawCell::canonical_string`]) or the optional
//! number ([`RawCell::to_number`]).

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The placeholder the export tool writes into cells that have no value.
pub const EMPTY_PLACEHOLDER: &str = "--";

/// A value of unknown shape as stored in one spreadsheet cell.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RawCell;
///
/// assert_eq!(RawCell::Text("--".to_string()).canonical_string(), "");
/// assert_eq!(RawCell::Number(8.5).canonical_string(), "8.5");
/// assert_eq!(RawCell::Empty.canonical_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// No value in the cell.
    #[default]
    Empty,
    /// A numeric cell.
    Number(f64),
    /// A textual cell.
    Text(String),
}

impl RawCell {
    /// Converts the cell into its canonical string form.
    ///
    /// Numbers render as their decimal string (`NaN` becomes empty), text
    /// passes through unchanged except the `"--"` placeholder, and empty
    /// cells become the empty string.
    pub fn canonical_string(&self) -> String {
        match self {
            RawCell::Number(n) if n.is_nan() => String::new(),
            RawCell::Number(n) => n.to_string(),
            RawCell::Text(s) if s == EMPTY_PLACEHOLDER => String::new(),
            RawCell::Text(s) => s.clone(),
            RawCell::Empty => String::new(),
        }
    }

    /// Converts the cell into a number, if it holds one.
    ///
    /// This is the numeric coercion for callers that still hold raw cells.
    /// Normalized rows only keep canonical strings and coerce them with
    /// [`parse_number`]; for any cell the two agree, so
    /// `cell.to_number() == parse_number(&cell.canonical_string())`.
    ///
    /// Text is stripped of every character other than digits, `.` and `-`
    /// before parsing, so `"8.5h"` yields `8.5`. Returns `None` for empty
    /// cells, `NaN`, non-finite numbers and text that does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::RawCell;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(RawCell::Text("8.5h".to_string()).to_number(), Some(Decimal::new(85, 1)));
    /// assert_eq!(RawCell::Text("--".to_string()).to_number(), None);
    /// assert_eq!(RawCell::Number(f64::NAN).to_number(), None);
    /// ```
    pub fn to_number(&self) -> Option<Decimal> {
        match self {
            RawCell::Number(n) if n.is_finite() => Decimal::try_from(*n).ok(),
            RawCell::Number(_) => None,
            RawCell::Text(s) => parse_number(s),
            RawCell::Empty => None,
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

/// Parses the numeric content of a string.
///
/// Shared by [`RawCell::to_number`] and by callers that only hold a canonical
/// string (normalized rows store strings, not cells).
pub fn parse_number(text: &str) -> Option<Decimal> {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if stripped.is_empty() {
        return None;
    }

    Decimal::from_str(&stripped).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cell_and_canonical_string_coerce_alike() {
        let cells = [
            RawCell::Number(8.5),
            RawCell::Number(2.0),
            RawCell::Number(-0.25),
            RawCell::Number(f64::NAN),
            RawCell::from("8.5h"),
            RawCell::from("--"),
            RawCell::from("未打卡"),
            RawCell::Empty,
        ];
        for cell in &cells {
            assert_eq!(
                cell.to_number(),
                parse_number(&cell.canonical_string()),
                "{:?}",
                cell
            );
        }
    }

    #[test]
    fn test_placeholder_canonicalizes_to_empty() {
        assert_eq!(RawCell::from("--").canonical_string(), "");
    }

    #[test]
    fn test_nan_canonicalizes_to_empty() {
        assert_eq!(RawCell::Number(f64::NAN).canonical_string(), "");
    }

    #[test]
    fn test_integral_number_renders_without_fraction() {
        assert_eq!(RawCell::Number(9.0).canonical_string(), "9");
        assert_eq!(RawCell::Number(-0.5).canonical_string(), "-0.5");
    }

    #[test]
    fn test_text_passes_through() {
        assert_eq!(RawCell::from("休息").canonical_string(), "休息");
        assert_eq!(RawCell::from(" -- ").canonical_string(), " -- ");
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(RawCell::Number(8.5).to_number(), Some(dec("8.5")));
        assert_eq!(RawCell::Number(f64::INFINITY).to_number(), None);
        assert_eq!(RawCell::Empty.to_number(), None);
    }

    #[test]
    fn test_text_coercion_strips_noise() {
        assert_eq!(RawCell::from("9.5").to_number(), Some(dec("9.5")));
        assert_eq!(RawCell::from("约 7.25 小时").to_number(), Some(dec("7.25")));
        assert_eq!(RawCell::from("-1").to_number(), Some(dec("-1")));
    }

    #[test]
    fn test_text_coercion_rejects_unparsable() {
        assert_eq!(RawCell::from("").to_number(), None);
        assert_eq!(RawCell::from("--").to_number(), None);
        assert_eq!(RawCell::from("正常").to_number(), None);
        assert_eq!(RawCell::from("1.2.3").to_number(), None);
    }

    #[test]
    fn test_string_form_of_number_coerces_back() {
        let n = RawCell::Number(7.75).to_number().unwrap();
        assert_eq!(RawCell::Text(n.to_string()).to_number(), Some(n));
    }

    #[test]
    fn test_cell_deserializes_untagged() {
        let cells: Vec<RawCell> = serde_json::from_str(r#"[null, 8.5, "出勤"]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                RawCell::Empty,
                RawCell::Number(8.5),
                RawCell::Text("出勤".to_string())
            ]
        );
    }
}
