//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can abort a pipeline invocation. Field-level
//! coercion problems are never errors; they fall back to defaults instead.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::SheetTooShort { rows: 3, required: 4 };
/// assert_eq!(
///     error.to_string(),
///     "Sheet has 3 rows but the header layout requires at least 4"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The raw bytes could not be opened as a workbook.
    #[error("Failed to decode workbook: {message}")]
    WorkbookDecode {
        /// A description of the decode failure.
        message: String,
    },

    /// The workbook contains no worksheet to read.
    #[error("Workbook contains no worksheet")]
    MissingWorksheet,

    /// The cell grid is too short to contain the fixed header rows.
    #[error("Sheet has {rows} rows but the header layout requires at least {required}")]
    SheetTooShort {
        /// The number of rows present in the grid.
        rows: usize,
        /// The minimum number of rows the layout needs.
        required: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A request parameter was present but invalid.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_decode_displays_message() {
        let error = EngineError::WorkbookDecode {
            message: "invalid zip header".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to decode workbook: invalid zip header"
        );
    }

    #[test]
    fn test_missing_worksheet_display() {
        assert_eq!(
            EngineError::MissingWorksheet.to_string(),
            "Workbook contains no worksheet"
        );
    }

    #[test]
    fn test_sheet_too_short_displays_counts() {
        let error = EngineError::SheetTooShort {
            rows: 2,
            required: 4,
        };
        assert_eq!(
            error.to_string(),
            "Sheet has 2 rows but the header layout requires at least 4"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/attendance.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/attendance.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_request_displays_field_and_message() {
        let error = EngineError::InvalidRequest {
            field: "standard_hours".to_string(),
            message: "not a number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid request field 'standard_hours': not a number"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_too_short() -> EngineResult<()> {
            Err(EngineError::SheetTooShort {
                rows: 0,
                required: 4,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_too_short()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
