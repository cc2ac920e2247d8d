//! Error types for the Payroll Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while reconciling payroll.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Reconciliation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The employee is not known to the employee directory.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was looked up.
        employee_id: String,
    },

    /// A month/year pair does not name a calendar month.
    #[error("Invalid pay month: {month}/{year}")]
    InvalidPayMonth {
        /// The requested month number.
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// A base salary was rejected.
    #[error("Invalid salary {amount}: {message}")]
    InvalidSalary {
        /// The rejected amount.
        amount: Decimal,
        /// Why the amount was rejected.
        message: String,
    },

    /// A holiday already exists on the given date.
    #[error("Holiday already exists on {date}")]
    DuplicateHoliday {
        /// The conflicting date.
        date: NaiveDate,
    },

    /// A collaborator store could not be read.
    #[error("Failed to read {source_name}: {message}")]
    StoreError {
        /// The collaborator that failed (e.g. "attendance").
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
