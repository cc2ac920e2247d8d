//! Payroll record and ledger models.
//!
//! A [`PayrollRecord`] is the current view of one employee's payroll: the
//! outcome of the most recent run, or nothing while `Pending`. Every run is
//! also kept as a [`PayrollLedgerEntry`] so earlier months survive
//! reprocessing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayAccounting, PayMonth, ReconciliationResult, SalaryOutcome};

/// Lifecycle state of a payroll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollStatus {
    /// No current figures.
    Pending,
    /// Holds the figures of the last run.
    Processed,
}

/// The current payroll view for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollRecord, PayrollStatus};
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord::pending("emp_001", Decimal::new(30000, 0));
/// assert_eq!(record.status, PayrollStatus::Pending);
/// assert_eq!(record.deduction, Decimal::ZERO);
/// assert!(record.last_processed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Lifecycle state.
    pub status: PayrollStatus,
    /// Label of the last processed month, e.g. "October 2026".
    pub pay_month: Option<String>,
    /// Deduction from the last run (zero while pending).
    pub deduction: Decimal,
    /// Net salary from the last run (zero while pending).
    pub net_salary: Decimal,
    /// Present days counted by the last run.
    pub present_days: Decimal,
    /// When the last run happened.
    pub last_processed: Option<DateTime<Utc>>,
}

impl PayrollRecord {
    /// Creates a pending record with no figures.
    pub fn pending(employee_id: impl Into<String>, base_salary: Decimal) -> Self {
        Self {
            employee_id: employee_id.into(),
            base_salary,
            status: PayrollStatus::Pending,
            pay_month: None,
            deduction: Decimal::ZERO,
            net_salary: Decimal::ZERO,
            present_days: Decimal::ZERO,
            last_processed: None,
        }
    }

    /// Returns true if the record holds processed figures.
    pub fn is_processed(&self) -> bool {
        self.status == PayrollStatus::Processed
    }

    /// Stores the outcome of a run and moves to `Processed`.
    ///
    /// Any earlier figures are overwritten.
    pub fn apply(&mut self, result: &ReconciliationResult, processed_at: DateTime<Utc>) {
        self.status = PayrollStatus::Processed;
        self.pay_month = Some(result.pay_month.label());
        self.deduction = result.outcome.deduction;
        self.net_salary = result.outcome.net_salary;
        self.present_days = result.accounting.present_days;
        self.last_processed = Some(processed_at);
    }

    /// Clears the figures and returns to `Pending`. Base salary is kept.
    pub fn reset(&mut self) {
        self.status = PayrollStatus::Pending;
        self.deduction = Decimal::ZERO;
        self.net_salary = Decimal::ZERO;
        self.present_days = Decimal::ZERO;
        self.last_processed = None;
    }

    /// Changes the base salary without recomputing stored figures.
    pub fn set_base_salary(&mut self, base_salary: Decimal) {
        self.base_salary = base_salary;
    }
}

/// One payroll run, as kept in an employee's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLedgerEntry {
    /// Unique identifier for the run.
    pub run_id: Uuid,
    /// The month the run covered.
    pub pay_month: PayMonth,
    /// When the run happened.
    pub processed_at: DateTime<Utc>,
    /// Working-day accounting of the run.
    pub accounting: DayAccounting,
    /// Salary outcome of the run.
    pub outcome: SalaryOutcome,
}

impl PayrollLedgerEntry {
    /// Builds a ledger entry from a reconciliation result.
    pub fn from_result(result: &ReconciliationResult, processed_at: DateTime<Utc>) -> Self {
        Self {
            run_id: result.calculation_id,
            pay_month: result.pay_month,
            processed_at,
            accounting: result.accounting.clone(),
            outcome: result.outcome.clone(),
        }
    }
}
