//! Aggregate statistics over a set of work days.
//!
//! This module contains [`AggregateSummary`], its human-readable labeled form
//! [`LabeledSummary`], and the [`WorkTimeDetail`] produced by the aggregate-only
//! path.

use rust_decimal::Decimal;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Label for the number of work days.
pub const LABEL_WORK_DAYS: &str = "工作天数";
/// Label for the daily standard hours.
pub const LABEL_STANDARD_DAILY: &str = "每日标准工作时长(小时)";
/// Label for the average actual hours.
pub const LABEL_ACTUAL_DAILY: &str = "平均实际工作时长(小时)";
/// Label for the standard hours total.
pub const LABEL_STANDARD_TOTAL: &str = "累计标准工作时长(小时)";
/// Label for the actual hours total.
pub const LABEL_ACTUAL_TOTAL: &str = "累计实际工作时长(小时)";
/// Label for the overtime delta.
pub const LABEL_OVERTIME: &str = "累计实际工作时长(小时)差额";

/// Summary statistics over a sequence of work days.
///
/// All decimal values are rounded to 2 decimal places, half away from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Number of days counted.
    pub work_days: usize,
    /// Standard hours per day.
    pub standard_work_time_daily: Decimal,
    /// Sum of standard hours.
    pub standard_work_time_total: Decimal,
    /// Average actual hours per day, zero when no days were counted.
    pub work_time_daily: Decimal,
    /// Sum of actual hours.
    pub work_time_total: Decimal,
    /// `work_time_total - standard_work_time_total`.
    pub over_work_time: Decimal,
}

impl AggregateSummary {
    /// Returns the summary keyed by human-readable labels.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::AggregateSummary;
    /// use rust_decimal::Decimal;
    ///
    /// let summary = AggregateSummary {
    ///     work_days: 1,
    ///     standard_work_time_daily: Decimal::new(9, 0),
    ///     standard_work_time_total: Decimal::new(9, 0),
    ///     work_time_daily: Decimal::new(85, 1),
    ///     work_time_total: Decimal::new(85, 1),
    ///     over_work_time: Decimal::new(-5, 1),
    /// };
    /// let labeled = summary.labeled();
    /// assert_eq!(labeled.entries()[0], ("工作天数", Decimal::new(1, 0)));
    /// ```
    pub fn labeled(&self) -> LabeledSummary<'_> {
        LabeledSummary { summary: self }
    }
}

/// A borrowed view of an [`AggregateSummary`] keyed by fixed labels.
///
/// Serializes as a map in label order.
#[derive(Debug, Clone, Copy)]
pub struct LabeledSummary<'a> {
    summary: &'a AggregateSummary,
}

impl LabeledSummary<'_> {
    /// Returns `(label, value)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, Decimal); 6] {
        let s = self.summary;
        [
            (LABEL_WORK_DAYS, Decimal::from(s.work_days)),
            (LABEL_STANDARD_DAILY, s.standard_work_time_daily),
            (LABEL_ACTUAL_DAILY, s.work_time_daily),
            (LABEL_STANDARD_TOTAL, s.standard_work_time_total),
            (LABEL_ACTUAL_TOTAL, s.work_time_total),
            (LABEL_OVERTIME, s.over_work_time),
        ]
    }
}

impl Serialize for LabeledSummary<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (label, value) in &entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Hours for one day in the aggregate-only path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// The date label, verbatim from the sheet.
    pub date: String,
    /// Actual worked hours.
    pub hours: Decimal,
    /// Hours relative to the daily standard.
    pub diff_hours: Decimal,
}

/// Output of the aggregate-only path: per-day hours plus the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkTimeDetail {
    /// Per-day hours, newest first.
    pub weeks: Vec<DayHours>,
    /// The summary, serialized through its labeled form.
    #[serde(serialize_with = "serialize_labeled")]
    pub detail: AggregateSummary,
}

fn serialize_labeled<S: Serializer>(
    summary: &AggregateSummary,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    summary.labeled().serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn summary() -> AggregateSummary {
        AggregateSummary {
            work_days: 2,
            standard_work_time_daily: dec("9"),
            standard_work_time_total: dec("18"),
            work_time_daily: dec("9.25"),
            work_time_total: dec("18.5"),
            over_work_time: dec("0.5"),
        }
    }

    #[test]
    fn test_labeled_entries_order() {
        let s = summary();
        let labels: Vec<&str> = s.labeled().entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "工作天数",
                "每日标准工作时长(小时)",
                "平均实际工作时长(小时)",
                "累计标准工作时长(小时)",
                "累计实际工作时长(小时)",
                "累计实际工作时长(小时)差额",
            ]
        );
    }

    #[test]
    fn test_labeled_serialization_keeps_order() {
        let s = summary();
        let json = serde_json::to_string(&s.labeled()).unwrap();
        let days = json.find("工作天数").unwrap();
        let overtime = json.find("差额").unwrap();
        assert!(days < overtime);
        assert!(json.contains(r#""累计实际工作时长(小时)":"18.5""#));
    }

    #[test]
    fn test_detail_serializes_labeled_summary() {
        let detail = WorkTimeDetail {
            weeks: vec![DayHours {
                date: "2024-01-01".to_string(),
                hours: dec("9"),
                diff_hours: dec("0"),
            }],
            detail: summary(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["weeks"][0]["date"], "2024-01-01");
        assert_eq!(json["detail"]["工作天数"], "2");
    }

    #[test]
    fn test_summary_round_trips_through_json() {
        let s = summary();
        let json = serde_json::to_string(&s).unwrap();
        let back: AggregateSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
