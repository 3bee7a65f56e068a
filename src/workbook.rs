//! Workbook decoding and pipeline entry points.
//!
//! Raw workbook bytes are decoded with `calamine` into an absolute grid of
//! [`RawCell`]s (first sheet only), which then runs through the calculation
//! pipeline.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::models::FilterCriteria;
//! use attendance_engine::workbook;
//! use rust_decimal::Decimal;
//!
//! let bytes = std::fs::read("attendance.xlsx").unwrap();
//! let criteria = FilterCriteria {
//!     duty: Some("非休息".to_string()),
//!     ..Default::default()
//! };
//! let records = workbook::parse(&bytes, &criteria, Decimal::new(9, 0), false)?;
//! println!("{} days", records.len());
//! # Ok::<(), attendance_engine::error::EngineError>(())
//! ```

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{
    build_work_date_records, compile_filters, normalize_sheet, summarize_rows,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{FilterCriteria, RawCell, WorkDateRecord, WorkTimeDetail};

/// Decodes workbook bytes and returns the first sheet as a cell grid.
///
/// The grid is absolute: if the sheet's used range does not start at `A1`,
/// leading rows and columns are padded with empty cells so that row and
/// column indices match the sheet.
///
/// # Errors
///
/// Returns [`EngineError::WorkbookDecode`] when the bytes are not a readable
/// workbook, and [`EngineError::MissingWorksheet`] when it has no sheets.
pub fn read_first_sheet(bytes: &[u8]) -> EngineResult<Vec<Vec<RawCell>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| {
        EngineError::WorkbookDecode {
            message: e.to_string(),
        }
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(EngineError::MissingWorksheet)?
        .map_err(|e| EngineError::WorkbookDecode {
            message: e.to_string(),
        })?;

    Ok(grid_from_range(&range))
}

/// Converts a calamine range into an absolute cell grid.
pub fn grid_from_range(range: &Range<Data>) -> Vec<Vec<RawCell>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Vec<Vec<RawCell>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![RawCell::Empty; start_col as usize];
        cells.extend(row.iter().map(raw_cell));
        grid.push(cells);
    }

    grid
}

fn raw_cell(data: &Data) -> RawCell {
    match data {
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        _ => RawCell::Empty,
    }
}

/// Parses workbook bytes into work date records, newest first.
///
/// # Arguments
///
/// * `bytes` - Raw workbook file contents
/// * `criteria` - Optional duty, checked-status and punch-count criteria
/// * `default_standard_hours` - Standard hours for rows that lack them
/// * `strict_time` - Derive hours from clock times instead of the reported total
///
/// # Errors
///
/// Fails as a whole, with no partial result, when the bytes cannot be decoded
/// or the sheet is too short to hold the header rows.
pub fn parse(
    bytes: &[u8],
    criteria: &FilterCriteria,
    default_standard_hours: Decimal,
    strict_time: bool,
) -> EngineResult<Vec<WorkDateRecord>> {
    let grid = read_first_sheet(bytes)?;
    parse_grid(&grid, criteria, default_standard_hours, strict_time)
}

/// Runs the pipeline on an already decoded cell grid.
pub fn parse_grid(
    grid: &[Vec<RawCell>],
    criteria: &FilterCriteria,
    default_standard_hours: Decimal,
    strict_time: bool,
) -> EngineResult<Vec<WorkDateRecord>> {
    let rows = normalize_sheet(grid)?;
    let filters = compile_filters(criteria);
    let records = build_work_date_records(&rows, &filters, default_standard_hours, strict_time);

    info!(
        grid_rows = grid.len(),
        data_rows = rows.len(),
        records = records.len(),
        strict_time,
        "Parsed attendance sheet"
    );

    Ok(records)
}

/// Computes the aggregate-only detail from workbook bytes.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn work_time_detail(
    bytes: &[u8],
    criteria: &FilterCriteria,
    default_standard_hours: Decimal,
) -> EngineResult<WorkTimeDetail> {
    let grid = read_first_sheet(bytes)?;
    work_time_detail_from_grid(&grid, criteria, default_standard_hours)
}

/// Computes the aggregate-only detail from a decoded cell grid.
pub fn work_time_detail_from_grid(
    grid: &[Vec<RawCell>],
    criteria: &FilterCriteria,
    default_standard_hours: Decimal,
) -> EngineResult<WorkTimeDetail> {
    let rows = normalize_sheet(grid)?;
    let filters = compile_filters(criteria);
    let detail = summarize_rows(&rows, &filters, default_standard_hours);

    info!(
        grid_rows = grid.len(),
        work_days = detail.detail.work_days,
        "Summarized attendance sheet"
    );

    Ok(detail)
}
