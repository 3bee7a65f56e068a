//! Core data models for the Attendance Engine.
//!
//! This module contains the domain types that flow through the pipeline, from
//! raw cells to per-day records and aggregate summaries.

mod cell;
mod field;
mod filter;
mod row;
mod summary;
mod work_date;

pub use cell::{EMPTY_PLACEHOLDER, RawCell, parse_number};
pub use field::{Field, LEAVE_LABEL, NORMAL_STATUS_LABEL, REST_DAY_LABEL};
pub use filter::{
    CheckedStatusFilter, DUTY_NON_REST, DutyFilter, FilterCriteria, FilterSelection,
    PunchCountFilter, STATUS_EXCLUDE_LEAVE_AND_REST, STATUS_NORMAL, TIMES_TWICE,
};
pub use row::{FlatHeader, NormalizedRow};
pub use summary::{
    AggregateSummary, DayHours, LABEL_ACTUAL_DAILY, LABEL_ACTUAL_TOTAL, LABEL_OVERTIME,
    LABEL_STANDARD_DAILY, LABEL_STANDARD_TOTAL, LABEL_WORK_DAYS, LabeledSummary, WorkTimeDetail,
};
pub use work_date::WorkDateRecord;
