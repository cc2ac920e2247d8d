//! Application state for the Payroll Reconciliation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::payroll::PayrollService;

/// Shared application state.
///
/// Wraps the payroll service so every handler works on the same records.
#[derive(Clone)]
pub struct AppState {
    /// The payroll service.
    payroll: Arc<PayrollService>,
}

impl AppState {
    /// Creates a new application state around a payroll service.
    pub fn new(payroll: PayrollService) -> Self {
        Self {
            payroll: Arc::new(payroll),
        }
    }

    /// Returns a reference to the payroll service.
    pub fn payroll(&self) -> &PayrollService {
        &self.payroll
    }
}
