//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints. Both
//! endpoints take the workbook as the raw request body and the options as
//! query parameters.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::summarize_records;
use crate::workbook;

use super::request::{ParseOptions, ParseQuery};
use super::response::{ApiError, ApiErrorResponse, WorkDatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/work-dates", post(work_dates_handler))
        .route("/work-info", post(work_info_handler))
        .with_state(state)
}

/// Handler for POST /work-dates endpoint.
///
/// Returns the per-day records (newest first) and their labeled summary.
async fn work_dates_handler(
    State(state): State<AppState>,
    query: Result<Query<ParseQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing work dates request");

    let options = match prepare(&state, correlation_id, query, &body) {
        Ok(options) => options,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    match workbook::parse(
        &body,
        &options.criteria,
        options.standard_hours,
        options.strict_time,
    ) {
        Ok(records) => {
            let summary = summarize_records(&records, options.standard_hours);
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                work_time_total = %summary.work_time_total,
                duration_us = start_time.elapsed().as_micros(),
                "Work dates parsed successfully"
            );
            (StatusCode::OK, Json(WorkDatesResponse { records, summary })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Parsing failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /work-info endpoint.
///
/// Returns the aggregate-only detail: per-day hours and the labeled summary.
async fn work_info_handler(
    State(state): State<AppState>,
    query: Result<Query<ParseQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing work info request");

    let options = match prepare(&state, correlation_id, query, &body) {
        Ok(options) => options,
        Err(error) => return error.into_response(),
    };

    let start_time = Instant::now();
    match workbook::work_time_detail(&body, &options.criteria, options.standard_hours) {
        Ok(detail) => {
            info!(
                correlation_id = %correlation_id,
                work_days = detail.detail.work_days,
                duration_us = start_time.elapsed().as_micros(),
                "Work info computed successfully"
            );
            (StatusCode::OK, Json(detail)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Work info failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates the query and body shared by both endpoints.
fn prepare(
    state: &AppState,
    correlation_id: Uuid,
    query: Result<Query<ParseQuery>, QueryRejection>,
    body: &Bytes,
) -> Result<ParseOptions, ApiErrorResponse> {
    let Query(query) = query.map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(correlation_id = %correlation_id, error = %body_text, "Query rejected");
        ApiErrorResponse::bad_request(ApiError::invalid_query(body_text))
    })?;

    if body.is_empty() {
        warn!(correlation_id = %correlation_id, "Empty request body");
        return Err(ApiErrorResponse::bad_request(ApiError::empty_body()));
    }

    query.resolve(state.config()).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Invalid request");
        ApiErrorResponse::from(err)
    })
}
