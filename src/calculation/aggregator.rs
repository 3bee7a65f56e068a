//! Aggregate statistics.
//!
//! [`summarize_records`] aggregates built work date records.
//! [`summarize_rows`] is the aggregate-only path that works straight from
//! normalized rows, using one daily standard for every counted day.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AggregateSummary, DayHours, Field, NormalizedRow, WorkDateRecord, WorkTimeDetail,
};

use super::filter_compiler::{CompiledFilters, TWICE_PUNCH_COUNT};
use super::rounding::{SUMMARY_DECIMAL_PLACES, round_half_away};

fn round2(value: Decimal) -> Decimal {
    round_half_away(value, SUMMARY_DECIMAL_PLACES)
}

/// Sums hour values, clamping at the `Decimal` range instead of overflowing.
fn saturating_total(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn daily_average(total: Decimal, days: usize) -> Decimal {
    if days == 0 {
        return Decimal::ZERO;
    }
    round2(total / Decimal::from(days))
}

/// Computes summary statistics over work date records.
///
/// The daily standard is the first record's standard hours, or
/// `default_standard_hours` when there are no records. Every output is
/// rounded to 2 decimal places; the daily average is zero for an empty input.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize_records;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_records(&[], Decimal::new(9, 0));
/// assert_eq!(summary.work_days, 0);
/// assert_eq!(summary.work_time_daily, Decimal::ZERO);
/// assert_eq!(summary.standard_work_time_daily, Decimal::new(9, 0));
/// ```
pub fn summarize_records(
    records: &[WorkDateRecord],
    default_standard_hours: Decimal,
) -> AggregateSummary {
    let work_days = records.len();
    let standard_work_time_total =
        round2(saturating_total(records.iter().map(|r| r.standard_hours)));
    let work_time_total = round2(saturating_total(records.iter().map(|r| r.hours)));
    let standard_work_time_daily = round2(
        records
            .first()
            .map(|r| r.standard_hours)
            .unwrap_or(default_standard_hours),
    );

    AggregateSummary {
        work_days,
        standard_work_time_daily,
        standard_work_time_total,
        work_time_daily: daily_average(work_time_total, work_days),
        work_time_total,
        over_work_time: round2(work_time_total.saturating_sub(standard_work_time_total)),
    }
}

/// Computes per-day hours and the summary straight from normalized rows.
///
/// Rows are filtered first. The daily standard comes from the first kept
/// row (or `default_standard_hours`) and is applied to every day. A day
/// without reported hours counts zero hours when it has exactly two punches,
/// otherwise the daily standard.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{summarize_rows, CompiledFilters};
/// use attendance_engine::models::NormalizedRow;
/// use rust_decimal::Decimal;
///
/// let rows = vec![NormalizedRow::new(vec![
///     ("时间".to_string(), "2024-01-01".to_string()),
///     ("实际工作时长(小时)".to_string(), "10".to_string()),
/// ])];
///
/// let detail = summarize_rows(&rows, &CompiledFilters::default(), Decimal::new(9, 0));
/// assert_eq!(detail.detail.over_work_time, Decimal::new(1, 0));
/// assert_eq!(detail.weeks[0].diff_hours, Decimal::new(1, 0));
/// ```
pub fn summarize_rows(
    rows: &[NormalizedRow],
    filters: &CompiledFilters,
    default_standard_hours: Decimal,
) -> WorkTimeDetail {
    let kept: Vec<&NormalizedRow> = rows.iter().filter(|row| filters.accepts(row)).collect();

    let standard_daily = kept
        .first()
        .and_then(|row| row.field_number(Field::StandardHours))
        .unwrap_or(default_standard_hours);

    let work_days = kept.len();
    let standard_work_time_total =
        round2(standard_daily.saturating_mul(Decimal::from(work_days)));

    let mut weeks: Vec<DayHours> = kept
        .iter()
        .map(|row| {
            let hours = row.field_number(Field::ActualHours).unwrap_or_else(|| {
                if row.field_number(Field::PunchCount) == Some(TWICE_PUNCH_COUNT) {
                    Decimal::ZERO
                } else {
                    standard_daily
                }
            });
            DayHours {
                date: row.field(Field::Date).to_string(),
                hours,
                diff_hours: hours.saturating_sub(standard_daily),
            }
        })
        .collect();

    let work_time_total = round2(saturating_total(weeks.iter().map(|d| d.hours)));
    weeks.reverse();

    debug!(
        input_rows = rows.len(),
        work_days,
        %work_time_total,
        "Summarized rows"
    );

    WorkTimeDetail {
        weeks,
        detail: AggregateSummary {
            work_days,
            standard_work_time_daily: round2(standard_daily),
            standard_work_time_total,
            work_time_daily: daily_average(work_time_total, work_days),
            work_time_total,
            over_work_time: round2(work_time_total.saturating_sub(standard_work_time_total)),
        },
    }
}
