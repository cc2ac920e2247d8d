//! Monthly reconciliation.
//!
//! Runs the calculation pipeline for one employee and one month: working
//! days, present days, leave classification, then the tiered deduction.
//! Each stage contributes audit steps, numbered in the order they run.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::attendance::aggregate_present_days;
use super::calendar::resolve_working_days;
use super::deduction::{DeductionPolicy, calculate_deduction};
use super::leave_classifier::classify_leave;
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, DayAccounting, HolidayCalendar,
    LeaveRequest, PayMonth, ReconciliationResult, SalaryOutcome,
};

/// Everything a reconciliation reads, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyInputs<'a> {
    /// The employee being reconciled.
    pub employee_id: &'a str,
    /// The month being reconciled.
    pub pay_month: PayMonth,
    /// Base monthly salary.
    pub base_salary: Decimal,
    /// Attendance records. Other employees and other months are filtered out.
    pub attendance: &'a [AttendanceRecord],
    /// Leave requests. Unapproved requests are filtered out.
    pub leaves: &'a [LeaveRequest],
    /// The holiday calendar.
    pub holidays: &'a HolidayCalendar,
}

/// Reconciles one employee's month.
///
/// The function is pure: the same inputs and timestamp always produce the
/// same accounting and outcome. Only `calculation_id` and `duration_us` vary
/// between runs.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{reconcile_month, DeductionPolicy, MonthlyInputs};
/// use payroll_engine::models::{HolidayCalendar, PayMonth};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let holidays = HolidayCalendar::default();
/// let inputs = MonthlyInputs {
///     employee_id: "emp_001",
///     pay_month: PayMonth::new(10, 2026).unwrap(),
///     base_salary: Decimal::from(30000),
///     attendance: &[],
///     leaves: &[],
///     holidays: &holidays,
/// };
///
/// let result = reconcile_month(&inputs, &DeductionPolicy::default(), Utc::now());
/// assert_eq!(result.accounting.working_days, 22);
/// assert_eq!(result.accounting.chargeable_days, Decimal::from(22));
/// ```
pub fn reconcile_month(
    inputs: &MonthlyInputs<'_>,
    policy: &DeductionPolicy,
    timestamp: DateTime<Utc>,
) -> ReconciliationResult {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let working = resolve_working_days(inputs.pay_month, inputs.holidays, step_number);
    let working_days = working.count();
    let (range_start, range_end) = (working.first_day, working.last_day);
    steps.push(working.audit_step);
    step_number += 1;

    let presence = aggregate_present_days(
        inputs.employee_id,
        inputs.attendance,
        range_start,
        range_end,
        step_number,
    );
    let present_days = presence.present_days;
    warnings.extend(presence.warnings);
    steps.push(presence.audit_step);
    step_number += 1;

    let leave = classify_leave(
        inputs.employee_id,
        inputs.leaves,
        range_start,
        range_end,
        inputs.holidays,
        step_number,
    );
    let exempt_leave_days = leave.exempt_days;
    let chargeable_leave_days = leave.chargeable_leave_days;
    steps.push(leave.audit_step);
    step_number += 1;

    let deduction = calculate_deduction(
        working_days,
        present_days,
        exempt_leave_days,
        inputs.base_salary,
        policy,
        step_number,
    );
    steps.extend(deduction.audit_steps);

    let chargeable_days = deduction.chargeable_days;
    let unexplained_absence_days = chargeable_days - chargeable_leave_days.min(chargeable_days);

    let accounting = DayAccounting {
        working_days,
        present_days,
        exempt_leave_days,
        chargeable_leave_days,
        unexplained_absence_days,
        chargeable_days,
    };

    if accounting.accounted_days() > Decimal::from(working_days) {
        warnings.push(AuditWarning {
            code: "OVER_ACCOUNTED".to_string(),
            message: format!(
                "{} accounted days exceed {} working days",
                accounting.accounted_days().normalize(),
                working_days
            ),
            severity: "low".to_string(),
        });
    }

    ReconciliationResult {
        calculation_id: Uuid::new_v4(),
        timestamp,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: inputs.employee_id.to_string(),
        pay_month: inputs.pay_month,
        accounting,
        outcome: SalaryOutcome {
            base_salary: inputs.base_salary,
            daily_rate: deduction.daily_rate,
            deduction: deduction.deduction,
            net_salary: deduction.net_salary,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}
