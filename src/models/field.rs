//! Recognized attendance export columns and their fixed labels.

use serde::{Deserialize, Serialize};

/// Duty label marking a rest day.
pub const REST_DAY_LABEL: &str = "休息";

/// Checked-status label for a normal day.
pub const NORMAL_STATUS_LABEL: &str = "正常";

/// Checked-status fragment marking leave.
pub const LEAVE_LABEL: &str = "请假";

/// A column of the attendance export that the pipeline reads.
///
/// Each field carries the fixed label used by the export tool. A field
/// resolves against a merged header path that either equals the label (a bare
/// column) or ends with `/<label>` (a column under a group label).
///
/// # Example
///
/// ```
/// use attendance_engine::models::Field;
///
/// assert!(Field::Duty.matches_path("班次"));
/// assert!(Field::Duty.matches_path("汇总/班次"));
/// assert!(!Field::Date.matches_path("汇总/最早打卡时间"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The day's date label.
    Date,
    /// The duty (shift) label; rest days carry [`REST_DAY_LABEL`].
    Duty,
    /// Number of clock punches recorded for the day.
    PunchCount,
    /// The calibrated attendance status.
    CheckedStatus,
    /// Contractual hours for the day.
    StandardHours,
    /// Self-reported actual hours for the day.
    ActualHours,
    /// First clock-in time (`HH:MM`).
    EarliestClock,
    /// Last clock-out time (`HH:MM`).
    LatestClock,
}

impl Field {
    /// Every recognized field, in export column order.
    pub const ALL: [Field; 8] = [
        Field::Date,
        Field::Duty,
        Field::PunchCount,
        Field::CheckedStatus,
        Field::StandardHours,
        Field::ActualHours,
        Field::EarliestClock,
        Field::LatestClock,
    ];

    /// The fields a filter can be attached to, in evaluation order.
    pub const FILTERABLE: [Field; 3] = [Field::Duty, Field::CheckedStatus, Field::PunchCount];

    /// Returns the fixed label the export tool uses for this column.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Date => "时间",
            Field::Duty => "班次",
            Field::PunchCount => "打卡次数(次)",
            Field::CheckedStatus => "校准状态",
            Field::StandardHours => "标准工作时长(小时)",
            Field::ActualHours => "实际工作时长(小时)",
            Field::EarliestClock => "最早打卡时间",
            Field::LatestClock => "最晚打卡时间",
        }
    }

    /// Returns true if a merged header path addresses this field.
    pub fn matches_path(self, path: &str) -> bool {
        let label = self.label();
        path == label
            || path
                .strip_suffix(label)
                .is_some_and(|group| group.ends_with('/'))
    }
}
