//! Filter criteria as supplied by callers and their decoded forms.
//!
//! Callers pass free-form strings ([`FilterCriteria`]). They are decoded once
//! into closed enums ([`FilterSelection`]) so the pipeline never compares raw
//! criterion strings. Unrecognized values decode to "no filtering".

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Duty criterion value selecting every day except rest days.
pub const DUTY_NON_REST: &str = "非休息";

/// Checked-status criterion value selecting normal days only.
pub const STATUS_NORMAL: &str = "正常";

/// Checked-status criterion value excluding leave and rest days.
pub const STATUS_EXCLUDE_LEAVE_AND_REST: &str = "非请假休息";

/// Punch-count criterion value selecting days with exactly two punches.
pub const TIMES_TWICE: &str = "2";

/// The optional criteria triple supplied by a caller.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DutyFilter, FilterCriteria};
///
/// let criteria = FilterCriteria {
///     duty: Some("非休息".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(criteria.decode().duty, DutyFilter::ExcludeRest);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Duty criterion (`"非休息"`).
    #[serde(default)]
    pub duty: Option<String>,
    /// Checked-status criterion (`"正常"` or `"非请假休息"`).
    #[serde(default)]
    pub checked_status: Option<String>,
    /// Punch-count criterion (`"2"`).
    #[serde(default)]
    pub times: Option<String>,
}

impl FilterCriteria {
    /// Decodes the raw strings into a [`FilterSelection`].
    pub fn decode(&self) -> FilterSelection {
        FilterSelection {
            duty: DutyFilter::decode(self.duty.as_deref()),
            checked_status: CheckedStatusFilter::decode(self.checked_status.as_deref()),
            punch_count: PunchCountFilter::decode(self.times.as_deref()),
        }
    }
}

/// Duty filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DutyFilter {
    /// No constraint.
    #[default]
    Any,
    /// Keep only days whose duty is not the rest-day label.
    ExcludeRest,
}

impl DutyFilter {
    /// Decodes a duty criterion; unknown values impose no constraint.
    pub fn decode(value: Option<&str>) -> Self {
        match value {
            Some(DUTY_NON_REST) => DutyFilter::ExcludeRest,
            Some(other) => {
                ignore_unrecognized("duty", other);
                DutyFilter::Any
            }
            None => DutyFilter::Any,
        }
    }
}

/// Checked-status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckedStatusFilter {
    /// No constraint.
    #[default]
    Any,
    /// Keep only days whose status is exactly the normal label.
    Normal,
    /// Drop days whose status mentions leave or rest.
    ExcludeLeaveAndRest,
}

impl CheckedStatusFilter {
    /// Decodes a checked-status criterion; unknown values impose no constraint.
    pub fn decode(value: Option<&str>) -> Self {
        match value {
            Some(STATUS_NORMAL) => CheckedStatusFilter::Normal,
            Some(STATUS_EXCLUDE_LEAVE_AND_REST) => CheckedStatusFilter::ExcludeLeaveAndRest,
            Some(other) => {
                ignore_unrecognized("checked_status", other);
                CheckedStatusFilter::Any
            }
            None => CheckedStatusFilter::Any,
        }
    }
}

/// Punch-count filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PunchCountFilter {
    /// No constraint.
    #[default]
    Any,
    /// Keep only days with exactly two punches.
    Twice,
}

impl PunchCountFilter {
    /// Decodes a punch-count criterion; unknown values impose no constraint.
    pub fn decode(value: Option<&str>) -> Self {
        match value {
            Some(TIMES_TWICE) => PunchCountFilter::Twice,
            Some(other) => {
                ignore_unrecognized("times", other);
                PunchCountFilter::Any
            }
            None => PunchCountFilter::Any,
        }
    }
}

/// The decoded criteria, one closed value per filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Duty filter.
    pub duty: DutyFilter,
    /// Checked-status filter.
    pub checked_status: CheckedStatusFilter,
    /// Punch-count filter.
    pub punch_count: PunchCountFilter,
}

fn ignore_unrecognized(criterion: &str, value: &str) {
    if !value.is_empty() {
        debug!(criterion, value, "Ignoring unrecognized filter value");
    }
}
