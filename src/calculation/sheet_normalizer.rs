//! Sheet normalization.
//!
//! This module re-projects the raw cell grid of the attendance export into
//! [`NormalizedRow`]s keyed by merged header paths.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Field, FlatHeader, NormalizedRow, RawCell};

use super::header_merge::merge_header_rows;

/// Zero-based row index of the group label header row.
///
/// The sub-label row follows immediately after it.
pub const HEADER_ROW_OFFSET: usize = 2;

/// Zero-based row index of the first data row.
pub const DATA_ROW_OFFSET: usize = 4;

/// Minimum number of grid rows needed to locate both header rows.
pub const MIN_SHEET_ROWS: usize = HEADER_ROW_OFFSET + 2;

/// Extracts and merges the two header rows of a grid.
///
/// # Errors
///
/// Returns [`EngineError::SheetTooShort`] when the grid does not reach the
/// sub-label row.
pub fn extract_header(grid: &[Vec<RawCell>]) -> EngineResult<FlatHeader> {
    match (grid.get(HEADER_ROW_OFFSET), grid.get(HEADER_ROW_OFFSET + 1)) {
        (Some(parent), Some(child)) => Ok(merge_header_rows(parent, child)),
        _ => Err(EngineError::SheetTooShort {
            rows: grid.len(),
            required: MIN_SHEET_ROWS,
        }),
    }
}

/// Returns the recognized fields that no header column addresses.
///
/// Such fields read as empty on every row and fall back to their defaults.
pub fn unresolved_fields(header: &FlatHeader) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| header.position(*field).is_none())
        .collect()
}

/// Normalizes every data row of a grid.
///
/// Each data row is zipped against the merged header. Cells are canonicalized,
/// short rows are padded with empty values, and cells beyond the last header
/// column are dropped. Rows whose every value is empty are skipped.
///
/// # Errors
///
/// Returns [`EngineError::SheetTooShort`] when the header rows cannot be
/// located. No partial output is produced in that case.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::normalize_sheet;
/// use attendance_engine::models::{Field, RawCell};
///
/// let grid = vec![
///     vec![RawCell::from("考勤报表")],
///     vec![],
///     vec![RawCell::from("时间"), RawCell::from("汇总")],
///     vec![RawCell::Empty, RawCell::from("班次")],
///     vec![RawCell::from("2024-01-01"), RawCell::from("出勤")],
/// ];
///
/// let rows = normalize_sheet(&grid).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].field(Field::Duty), "出勤");
/// ```
pub fn normalize_sheet(grid: &[Vec<RawCell>]) -> EngineResult<Vec<NormalizedRow>> {
    let header = extract_header(grid)?;

    let unresolved = unresolved_fields(&header);
    if !unresolved.is_empty() {
        debug!(
            fields = ?unresolved.iter().map(|f| f.label()).collect::<Vec<_>>(),
            "Header lacks recognized columns"
        );
    }
    let data_rows = grid.get(DATA_ROW_OFFSET..).unwrap_or_default();

    let mut rows = Vec::with_capacity(data_rows.len());
    let mut skipped = 0usize;

    for cells in data_rows {
        let row = normalize_row(&header, cells);
        if row.is_blank() {
            skipped += 1;
            continue;
        }
        rows.push(row);
    }

    debug!(
        columns = header.len(),
        rows = rows.len(),
        skipped_blank_rows = skipped,
        "Normalized sheet"
    );

    Ok(rows)
}

/// Zips one row of cells against the header.
pub fn normalize_row(header: &FlatHeader, cells: &[RawCell]) -> NormalizedRow {
    let values = header
        .paths()
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let value = cells
                .get(i)
                .map(RawCell::canonical_string)
                .unwrap_or_default();
            (path.clone(), value)
        })
        .collect();

    NormalizedRow::new(values)
}
