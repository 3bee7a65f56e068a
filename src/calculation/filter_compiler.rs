//! Filter compilation.
//!
//! Turns caller criteria into one optional [`Predicate`] per filterable field.
//! Predicates are plain data evaluated against a row's canonical value, so a
//! compiled filter set can be inspected, logged and compared in tests.

use rust_decimal::Decimal;

use crate::models::{
    CheckedStatusFilter, DutyFilter, Field, FilterCriteria, FilterSelection, LEAVE_LABEL,
    NORMAL_STATUS_LABEL, NormalizedRow, PunchCountFilter, REST_DAY_LABEL, parse_number,
};

/// Punch count selected by [`PunchCountFilter::Twice`].
pub const TWICE_PUNCH_COUNT: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

const LEAVE_OR_REST_LABELS: &[&str] = &[LEAVE_LABEL, REST_DAY_LABEL];

/// A test over one canonical field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Value differs from the label.
    NotEqual(&'static str),
    /// Value equals the label.
    Equal(&'static str),
    /// Value contains none of the labels.
    ContainsNone(&'static [&'static str]),
    /// Value parses to this number.
    NumberEquals(Decimal),
}

impl Predicate {
    /// Evaluates the predicate against a canonical value.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::Predicate;
    ///
    /// assert!(Predicate::NotEqual("休息").test("出勤"));
    /// assert!(!Predicate::NotEqual("休息").test("休息"));
    /// ```
    pub fn test(&self, value: &str) -> bool {
        match self {
            Predicate::NotEqual(label) => value != *label,
            Predicate::Equal(label) => value == *label,
            Predicate::ContainsNone(labels) => labels.iter().all(|l| !value.contains(l)),
            Predicate::NumberEquals(n) => parse_number(value) == Some(*n),
        }
    }
}

/// A filterable field and its predicate, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPredicate {
    /// The field the predicate reads.
    pub field: Field,
    /// The predicate; `None` imposes no constraint.
    pub predicate: Option<Predicate>,
}

/// The compiled filter set: one entry per filterable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFilters {
    entries: Vec<FieldPredicate>,
}

impl CompiledFilters {
    /// Returns the entries in field order.
    pub fn entries(&self) -> &[FieldPredicate] {
        &self.entries
    }

    /// Returns the predicate compiled for a field.
    pub fn predicate(&self, field: Field) -> Option<&Predicate> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .and_then(|e| e.predicate.as_ref())
    }

    /// Returns true if no field carries a predicate.
    pub fn is_noop(&self) -> bool {
        self.entries.iter().all(|e| e.predicate.is_none())
    }

    /// Returns true if every compiled predicate accepts the row.
    pub fn accepts(&self, row: &NormalizedRow) -> bool {
        self.entries.iter().all(|entry| {
            entry
                .predicate
                .as_ref()
                .is_none_or(|p| p.test(row.field(entry.field)))
        })
    }
}

impl Default for CompiledFilters {
    fn default() -> Self {
        compile_selection(FilterSelection::default())
    }
}

/// Decodes and compiles raw caller criteria.
///
/// Unknown or absent criterion values compile to no predicate.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{compile_filters, Predicate};
/// use attendance_engine::models::{Field, FilterCriteria};
///
/// let filters = compile_filters(&FilterCriteria {
///     duty: Some("非休息".to_string()),
///     ..Default::default()
/// });
/// assert_eq!(filters.predicate(Field::Duty), Some(&Predicate::NotEqual("休息")));
/// assert_eq!(filters.predicate(Field::PunchCount), None);
/// ```
pub fn compile_filters(criteria: &FilterCriteria) -> CompiledFilters {
    compile_selection(criteria.decode())
}

/// Compiles already decoded criteria.
pub fn compile_selection(selection: FilterSelection) -> CompiledFilters {
    let duty = match selection.duty {
        DutyFilter::Any => None,
        DutyFilter::ExcludeRest => Some(Predicate::NotEqual(REST_DAY_LABEL)),
    };

    let checked_status = match selection.checked_status {
        CheckedStatusFilter::Any => None,
        CheckedStatusFilter::Normal => Some(Predicate::Equal(NORMAL_STATUS_LABEL)),
        CheckedStatusFilter::ExcludeLeaveAndRest => {
            Some(Predicate::ContainsNone(LEAVE_OR_REST_LABELS))
        }
    };

    let punch_count = match selection.punch_count {
        PunchCountFilter::Any => None,
        PunchCountFilter::Twice => Some(Predicate::NumberEquals(TWICE_PUNCH_COUNT)),
    };

    let entries = Field::FILTERABLE
        .into_iter()
        .zip([duty, checked_status, punch_count])
        .map(|(field, predicate)| FieldPredicate { field, predicate })
        .collect();

    CompiledFilters { entries }
}
