//! HTTP API module for the Payroll Reconciliation Engine.
//!
//! This module provides the REST API endpoints for processing, resetting,
//! and inspecting employee payroll records.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProcessRequest, SalaryUpdateRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
