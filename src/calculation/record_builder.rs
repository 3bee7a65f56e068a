//! Work date record building.
//!
//! This module filters normalized rows and derives one [`WorkDateRecord`] per
//! kept row. Every missing or malformed field degrades through an explicit
//! fallback chain instead of failing the run.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Field, NormalizedRow, REST_DAY_LABEL, WorkDateRecord};

use super::filter_compiler::CompiledFilters;
use super::rounding::{STRICT_TIME_DECIMAL_PLACES, round_half_away};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// A source that may supply a day's actual hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursSource {
    /// The reported actual-hours column.
    ReportedActual,
    /// The delta between the first and last clock punches.
    StrictClock,
}

impl HoursSource {
    /// Sources tried, in order, for a day's actual hours.
    ///
    /// When none yields a value the day's standard hours are used.
    pub const fn chain(strict_time: bool) -> &'static [HoursSource] {
        if strict_time {
            &[HoursSource::StrictClock]
        } else {
            &[HoursSource::ReportedActual]
        }
    }

    fn resolve(self, row: &NormalizedRow) -> Option<Decimal> {
        match self {
            HoursSource::ReportedActual => row.field_number(Field::ActualHours),
            HoursSource::StrictClock => clock_span(row).map(|span| span.hours),
        }
    }
}

/// Parses a `HH:MM` (or `HH:MM:SS`) clock time into minutes since midnight.
///
/// Seconds are ignored.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("09:30"), Some(570));
/// assert_eq!(parse_clock_minutes("未打卡"), None);
/// ```
pub fn parse_clock_minutes(value: &str) -> Option<i64> {
    let value = value.trim();
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()?;
    Some(i64::from(time.hour()) * 60 + i64::from(time.minute()))
}

/// Computes worked hours from first and last clock times.
///
/// The minute difference is converted to hours and rounded to one decimal
/// place. An end time earlier than the start time yields a negative result;
/// overnight shifts are not corrected.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::strict_work_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(strict_work_hours("09:00", "18:30"), Some(Decimal::new(95, 1)));
/// assert_eq!(strict_work_hours("", "18:30"), None);
/// ```
pub fn strict_work_hours(first: &str, last: &str) -> Option<Decimal> {
    if first.is_empty() || last.is_empty() {
        return None;
    }

    let start = parse_clock_minutes(first)?;
    let end = parse_clock_minutes(last)?;
    let hours = Decimal::from(end - start) / MINUTES_PER_HOUR;

    Some(round_half_away(hours, STRICT_TIME_DECIMAL_PLACES))
}

struct ClockSpan<'a> {
    first: &'a str,
    last: &'a str,
    hours: Decimal,
}

fn clock_span(row: &NormalizedRow) -> Option<ClockSpan<'_>> {
    let first = row.field_present(Field::EarliestClock)?;
    let last = row.field_present(Field::LatestClock)?;
    let hours = strict_work_hours(first, last)?;
    Some(ClockSpan { first, last, hours })
}

/// Derives the record for one row.
pub fn build_record(
    row: &NormalizedRow,
    default_standard_hours: Decimal,
    strict_time: bool,
) -> WorkDateRecord {
    let standard_hours = row
        .field_number(Field::StandardHours)
        .unwrap_or(default_standard_hours);

    let marked_times = row.field_number(Field::PunchCount).unwrap_or(Decimal::ZERO);

    let hours = HoursSource::chain(strict_time)
        .iter()
        .find_map(|source| source.resolve(row))
        .unwrap_or(standard_hours);

    let span = clock_span(row);

    WorkDateRecord {
        id: Uuid::new_v4(),
        date: row.field(Field::Date).to_string(),
        hours,
        standard_hours,
        diff_hours: hours.saturating_sub(standard_hours),
        marked_times,
        first_time: span.as_ref().map(|s| s.first.to_string()),
        last_time: span.as_ref().map(|s| s.last.to_string()),
        is_workday: row.field(Field::Duty) != REST_DAY_LABEL,
    }
}

/// Filters rows and builds their records, newest first.
///
/// Rows failing any compiled predicate are dropped. The remaining rows are
/// turned into records and returned in reverse sheet order, since the export
/// lists days oldest first.
///
/// # Arguments
///
/// * `rows` - Normalized rows in sheet order
/// * `filters` - The compiled filter set
/// * `default_standard_hours` - Standard hours for rows that lack them
/// * `strict_time` - Derive hours from clock times instead of the reported total
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{build_work_date_records, CompiledFilters};
/// use attendance_engine::models::NormalizedRow;
/// use rust_decimal::Decimal;
///
/// let rows: Vec<NormalizedRow> = ["2024-01-01", "2024-01-02"]
///     .iter()
///     .map(|d| NormalizedRow::new(vec![("时间".to_string(), d.to_string())]))
///     .collect();
///
/// let records = build_work_date_records(&rows, &CompiledFilters::default(), Decimal::new(9, 0), false);
/// let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
/// assert_eq!(dates, vec!["2024-01-02", "2024-01-01"]);
/// ```
pub fn build_work_date_records(
    rows: &[NormalizedRow],
    filters: &CompiledFilters,
    default_standard_hours: Decimal,
    strict_time: bool,
) -> Vec<WorkDateRecord> {
    let mut records: Vec<WorkDateRecord> = rows
        .iter()
        .filter(|row| filters.accepts(row))
        .map(|row| build_record(row, default_standard_hours, strict_time))
        .collect();

    records.reverse();

    debug!(
        input_rows = rows.len(),
        kept_rows = records.len(),
        strict_time,
        "Built work date records"
    );

    records
}
