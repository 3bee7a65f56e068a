//! The per-day work-time record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of work time, derived from one normalized row.
///
/// Records are built fresh on every pipeline run and never modified
/// afterwards. The `id` has no meaning beyond list identity.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkDateRecord;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = WorkDateRecord {
///     id: Uuid::new_v4(),
///     date: "2024-01-02".to_string(),
///     hours: Decimal::new(85, 1),
///     standard_hours: Decimal::new(9, 0),
///     diff_hours: Decimal::new(-5, 1),
///     marked_times: Decimal::new(2, 0),
///     first_time: None,
///     last_time: None,
///     is_workday: true,
/// };
/// assert_eq!(record.hours - record.standard_hours, record.diff_hours);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDateRecord {
    /// A fresh unique identifier.
    pub id: Uuid,
    /// The date label, verbatim from the sheet.
    pub date: String,
    /// Actual worked hours.
    pub hours: Decimal,
    /// Standard (contractual) hours.
    pub standard_hours: Decimal,
    /// `hours - standard_hours`.
    pub diff_hours: Decimal,
    /// Punch count for the day, zero when unparsable.
    pub marked_times: Decimal,
    /// First clock-in time, present when strict time is computable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_time: Option<String>,
    /// Last clock-out time, present when strict time is computable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_time: Option<String>,
    /// False when the duty label marks a rest day.
    pub is_workday: bool,
}
