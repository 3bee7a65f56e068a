//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoints that accept an attendance
//! workbook upload and return work-time records or the aggregate detail.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ParseOptions, ParseQuery};
pub use response::{ApiError, ApiErrorResponse, WorkDatesResponse};
pub use state::AppState;
