//! HTTP request handlers for the Payroll Reconciliation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;

use super::request::{ProcessRequest, SalaryUpdateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", get(list_handler))
        .route("/payroll/:employee_id", get(status_handler))
        .route("/payroll/:employee_id/process", post(process_handler))
        .route("/payroll/:employee_id/reset", post(reset_handler))
        .route("/payroll/:employee_id/salary", put(salary_handler))
        .route("/payroll/:employee_id/history", get(history_handler))
        .with_state(state)
}

/// Handler for GET /payroll.
///
/// Returns a record for every employee, creating pending ones as needed.
async fn list_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing payroll records");

    match state.payroll().list_all() {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                "Payroll records listed"
            );
            json_response(StatusCode::OK, &records)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /payroll/:employee_id.
async fn status_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Fetching payroll status"
    );

    match state.payroll().get_status(&employee_id) {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /payroll/:employee_id/process.
///
/// The body is optional. An empty or blank body processes the current
/// month, whatever the Content-Type header says.
async fn process_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Processing payroll request"
    );

    let request = if body.iter().all(u8::is_ascii_whitespace) {
        ProcessRequest::default()
    } else {
        match Json::<ProcessRequest>::from_bytes(&body) {
            Ok(Json(req)) => req,
            Err(rejection) => return rejection_response(correlation_id, rejection),
        }
    };

    let start_time = Instant::now();
    match state
        .payroll()
        .process_detailed(&employee_id, request.month, request.year)
    {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                pay_month = %outcome.result.pay_month,
                net_salary = %outcome.record.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll processed successfully"
            );
            json_response(StatusCode::OK, &outcome)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /payroll/:employee_id/reset.
async fn reset_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Resetting payroll"
    );

    match state.payroll().reset(&employee_id) {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for PUT /payroll/:employee_id/salary.
async fn salary_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<SalaryUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Updating base salary"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state
        .payroll()
        .update_base_salary(&employee_id, request.salary)
    {
        Ok(record) => json_response(StatusCode::OK, &record),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /payroll/:employee_id/history.
async fn history_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Fetching payroll history"
    );

    match state.payroll().history(&employee_id) {
        Ok(entries) => json_response(StatusCode::OK, &entries),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
