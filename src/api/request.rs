//! Request types for the Attendance Engine API.
//!
//! The workbook travels as the raw request body; everything else is carried
//! in the query string and described by [`ParseQuery`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::FilterCriteria;

/// Query parameters accepted by the parsing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseQuery {
    /// Duty criterion (`"非休息"`).
    #[serde(default)]
    pub duty: Option<String>,
    /// Checked-status criterion (`"正常"` or `"非请假休息"`).
    #[serde(default)]
    pub checked_status: Option<String>,
    /// Punch-count criterion (`"2"`).
    #[serde(default)]
    pub times: Option<String>,
    /// Default standard hours; the configured value when omitted.
    #[serde(default)]
    pub standard_hours: Option<Decimal>,
    /// Strict-time mode; the configured value when omitted.
    #[serde(default)]
    pub strict_time: Option<bool>,
}

/// Fully resolved inputs for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Filter criteria.
    pub criteria: FilterCriteria,
    /// Default standard hours.
    pub standard_hours: Decimal,
    /// Strict-time mode.
    pub strict_time: bool,
}

impl ParseQuery {
    /// Resolves the query against configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRequest`] for negative standard hours.
    pub fn resolve(self, config: &ConfigLoader) -> EngineResult<ParseOptions> {
        let standard_hours = self
            .standard_hours
            .unwrap_or_else(|| config.default_standard_hours());

        if standard_hours < Decimal::ZERO {
            return Err(EngineError::InvalidRequest {
                field: "standard_hours".to_string(),
                message: format!("must not be negative, got {}", standard_hours),
            });
        }

        Ok(ParseOptions {
            criteria: FilterCriteria {
                duty: self.duty,
                checked_status: self.checked_status,
                times: self.times,
            },
            standard_hours,
            strict_time: self.strict_time.unwrap_or_else(|| config.strict_time()),
        })
    }
}
