//! Leave classification.
//!
//! Clamps each approved leave request to the reconciliation range, drops the
//! days that were never working days (weekends and holidays), and sorts the
//! remaining days into exempt and chargeable buckets by leave category.
//!
//! Only the exempt total feeds the deduction. Chargeable-category leave is
//! counted for reporting, but for payroll it is simply not accounted for.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calendar::{dates_between, is_working_day};
use crate::models::{AuditStep, HolidayCalendar, LeaveClass, LeaveRequest};

/// The result of classifying leave over a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveClassification {
    /// Working days covered by exempt leave.
    pub exempt_days: Decimal,
    /// Working days covered by chargeable-category leave.
    pub chargeable_leave_days: Decimal,
    /// Number of approved requests that overlapped the range.
    pub requests_considered: u32,
    /// The audit step recording the classification.
    pub audit_step: AuditStep,
}

/// Classifies an employee's approved leave over an inclusive range.
///
/// Requests that are not approved, belong to someone else, or do not
/// intersect the range contribute nothing. A request whose end precedes its
/// start clamps to an empty interval.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::classify_leave;
/// use payroll_engine::models::{ApprovalStatus, HolidayCalendar, LeaveCategory, LeaveRequest};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Friday 16th through Monday 19th January 2026 spans a weekend.
/// let sick = LeaveRequest {
///     employee_id: "emp_001".to_string(),
///     category: LeaveCategory::Sick,
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     status: ApprovalStatus::Approved,
///     remark: None,
/// };
///
/// let result = classify_leave(
///     "emp_001",
///     &[sick],
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     &HolidayCalendar::default(),
///     1,
/// );
/// assert_eq!(result.exempt_days, Decimal::from(2));
/// ```
pub fn classify_leave(
    employee_id: &str,
    leaves: &[LeaveRequest],
    range_start: NaiveDate,
    range_end: NaiveDate,
    holidays: &HolidayCalendar,
    step_number: u32,
) -> LeaveClassification {
    let mut exempt_days = Decimal::ZERO;
    let mut chargeable_leave_days = Decimal::ZERO;
    let mut requests_considered = 0u32;
    let mut skipped_non_working = 0u32;

    let approved = leaves
        .iter()
        .filter(|l| l.employee_id == employee_id && l.is_approved());

    for leave in approved {
        let Some((overlap_start, overlap_end)) = leave.overlap(range_start, range_end) else {
            continue;
        };
        requests_considered += 1;

        for date in dates_between(overlap_start, overlap_end) {
            if !is_working_day(date, holidays) {
                skipped_non_working += 1;
                continue;
            }
            match leave.category.classification() {
                LeaveClass::Exempt => exempt_days += Decimal::ONE,
                LeaveClass::Chargeable => chargeable_leave_days += Decimal::ONE,
            }
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_classification".to_string(),
        rule_name: "Leave Classification".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "range_start": range_start.to_string(),
            "range_end": range_end.to_string(),
            "approved_requests": requests_considered
        }),
        output: serde_json::json!({
            "exempt_days": exempt_days.normalize().to_string(),
            "chargeable_leave_days": chargeable_leave_days.normalize().to_string(),
            "non_working_days_skipped": skipped_non_working
        }),
        reasoning: format!(
            "{} approved requests overlap the range: {} exempt leave days, {} chargeable leave days, {} weekend/holiday days skipped",
            requests_considered,
            exempt_days.normalize(),
            chargeable_leave_days.normalize(),
            skipped_non_working
        ),
    };

    LeaveClassification {
        exempt_days,
        chargeable_leave_days,
        requests_considered,
        audit_step,
    }
}
