//! Reconciliation result models for the Payroll Reconciliation Engine.
//!
//! This module contains the [`ReconciliationResult`] type and its associated
//! structures that capture all outputs from reconciling one employee's month:
//! the working-day accounting, the salary outcome, and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayMonth;

/// How the working days of a month were accounted for.
///
/// `chargeable_days` is the figure the deduction is computed from. The two
/// sub-counts split it by cause for reporting only: a chargeable-category
/// leave day and a day with no record at all weigh the same.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DayAccounting;
/// use rust_decimal::Decimal;
///
/// let accounting = DayAccounting {
///     working_days: 20,
///     present_days: Decimal::from(10),
///     exempt_leave_days: Decimal::from(2),
///     chargeable_leave_days: Decimal::from(2),
///     unexplained_absence_days: Decimal::from(6),
///     chargeable_days: Decimal::from(8),
/// };
/// assert_eq!(accounting.accounted_days(), Decimal::from(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAccounting {
    /// Weekdays in the month that are not holidays.
    pub working_days: u32,
    /// Present days (half-days count 0.5).
    pub present_days: Decimal,
    /// Working days covered by exempt leave.
    pub exempt_leave_days: Decimal,
    /// Working days covered by chargeable-category leave.
    pub chargeable_leave_days: Decimal,
    /// Chargeable days not explained by any leave request.
    pub unexplained_absence_days: Decimal,
    /// Working days not covered by presence or exempt leave.
    pub chargeable_days: Decimal,
}

impl DayAccounting {
    /// Present days plus exempt leave days.
    pub fn accounted_days(&self) -> Decimal {
        self.present_days + self.exempt_leave_days
    }
}

/// The money side of a reconciliation.
///
/// `deduction` and `net_salary` are rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryOutcome {
    /// Base monthly salary the run was computed against.
    pub base_salary: Decimal,
    /// Base salary divided by the standard month.
    pub daily_rate: Decimal,
    /// Total deduction.
    pub deduction: Decimal,
    /// `max(0, base_salary - deduction)`.
    pub net_salary: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during reconciliation.
///
/// Warnings flag data-quality issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of reconciling one employee's month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The month reconciled.
    pub pay_month: PayMonth,
    /// Working-day accounting.
    pub accounting: DayAccounting,
    /// Deduction and net salary.
    pub outcome: SalaryOutcome,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
