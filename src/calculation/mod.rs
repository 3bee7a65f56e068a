//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pipeline stages that turn a raw cell grid into
//! work time results: header merging, sheet normalization, filter
//! compilation, record building with strict clock-time computation, and
//! aggregation.

mod aggregator;
mod filter_compiler;
mod header_merge;
mod record_builder;
mod rounding;
mod sheet_normalizer;

pub use aggregator::{summarize_records, summarize_rows};
pub use filter_compiler::{
    CompiledFilters, FieldPredicate, Predicate, TWICE_PUNCH_COUNT, compile_filters,
    compile_selection,
};
pub use header_merge::merge_header_rows;
pub use record_builder::{
    HoursSource, build_record, build_work_date_records, parse_clock_minutes, strict_work_hours,
};
pub use rounding::{
    STRICT_TIME_DECIMAL_PLACES, SUMMARY_DECIMAL_PLACES, round_half_away,
};
pub use sheet_normalizer::{
    DATA_ROW_OFFSET, HEADER_ROW_OFFSET, MIN_SHEET_ROWS, extract_header, normalize_row,
    normalize_sheet, unresolved_fields,
};
