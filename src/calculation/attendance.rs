//! Attendance aggregation.
//!
//! Sums an employee's attendance over a date range into a fractional
//! present-day count: a full day for `Present`, half for `Half-day`, nothing
//! for `Absent`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep, AuditWarning};

/// The result of aggregating attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentDaysResult {
    /// Total present-day credit.
    pub present_days: Decimal,
    /// Number of `Present` records counted.
    pub full_days: u32,
    /// Number of `Half-day` records counted.
    pub half_days: u32,
    /// Data-quality warnings (duplicate records per date).
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording the aggregation.
    pub audit_step: AuditStep,
}

/// Aggregates present days for one employee over an inclusive range.
///
/// Records belonging to other employees or dated outside the range are
/// ignored. Every matching record is summed; a date with more than one
/// record is reported as a warning but still counted, since the store does
/// not prevent duplicates.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_present_days;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = |day, status| AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
///     status,
///     check_in: None,
///     check_out: None,
/// };
/// let records = vec![
///     record(1, AttendanceStatus::Present),
///     record(2, AttendanceStatus::HalfDay),
///     record(5, AttendanceStatus::Absent),
/// ];
///
/// let result = aggregate_present_days(
///     "emp_001",
///     &records,
///     NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
///     1,
/// );
/// assert_eq!(result.present_days, Decimal::new(15, 1));
/// ```
pub fn aggregate_present_days(
    employee_id: &str,
    records: &[AttendanceRecord],
    range_start: NaiveDate,
    range_end: NaiveDate,
    step_number: u32,
) -> PresentDaysResult {
    let mut present_days = Decimal::ZERO;
    let mut full_days = 0u32;
    let mut half_days = 0u32;
    let mut absent_days = 0u32;
    let mut records_per_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();

    let in_scope = records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .filter(|r| r.date >= range_start && r.date <= range_end);

    for record in in_scope {
        *records_per_date.entry(record.date).or_default() += 1;
        present_days += record.status.day_credit();
        match record.status {
            AttendanceStatus::Present => full_days += 1,
            AttendanceStatus::HalfDay => half_days += 1,
            AttendanceStatus::Absent => absent_days += 1,
        }
    }

    let warnings: Vec<AuditWarning> = records_per_date
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(date, count)| AuditWarning {
            code: "DUPLICATE_ATTENDANCE".to_string(),
            message: format!("{} attendance records on {}, all counted", count, date),
            severity: "medium".to_string(),
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "present_days".to_string(),
        rule_name: "Attendance Aggregation".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "range_start": range_start.to_string(),
            "range_end": range_end.to_string()
        }),
        output: serde_json::json!({
            "present": full_days,
            "half_day": half_days,
            "absent": absent_days,
            "present_days": present_days.normalize().to_string()
        }),
        reasoning: format!(
            "{} present + {} half-days x 0.5 = {} present days",
            full_days,
            half_days,
            present_days.normalize()
        ),
    };

    PresentDaysResult {
        present_days,
        full_days,
        half_days,
        warnings,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(employee_id: &str, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date: make_date(date),
            status,
            check_in: None,
            check_out: None,
        }
    }

    fn october(records: &[AttendanceRecord]) -> PresentDaysResult {
        aggregate_present_days(
            "emp_001",
            records,
            make_date("2026-10-01"),
            make_date("2026-10-31"),
            1,
        )
    }

    #[test]
    fn test_no_records_is_zero() {
        let result = october(&[]);
        assert_eq!(result.present_days, Decimal::ZERO);
        assert_eq!(result.full_days, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_present_counts_one() {
        let result = october(&[
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
            record("emp_001", "2026-10-02", AttendanceStatus::Present),
        ]);
        assert_eq!(result.present_days, dec("2"));
        assert_eq!(result.full_days, 2);
    }

    #[test]
    fn test_half_day_counts_half() {
        let result = october(&[record("emp_001", "2026-10-01", AttendanceStatus::HalfDay)]);
        assert_eq!(result.present_days, dec("0.5"));
        assert_eq!(result.half_days, 1);
    }

    #[test]
    fn test_absent_counts_zero() {
        let result = october(&[record("emp_001", "2026-10-01", AttendanceStatus::Absent)]);
        assert_eq!(result.present_days, Decimal::ZERO);
    }

    #[test]
    fn test_other_employee_excluded() {
        let result = october(&[
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
            record("emp_002", "2026-10-02", AttendanceStatus::Present),
        ]);
        assert_eq!(result.present_days, dec("1"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let result = october(&[
            record("emp_001", "2026-09-30", AttendanceStatus::Present),
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
            record("emp_001", "2026-10-31", AttendanceStatus::Present),
            record("emp_001", "2026-11-01", AttendanceStatus::Present),
        ]);
        assert_eq!(result.present_days, dec("2"));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut records = vec![
            record("emp_001", "2026-10-05", AttendanceStatus::HalfDay),
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
            record("emp_001", "2026-10-20", AttendanceStatus::Present),
        ];
        let forward = october(&records);
        records.reverse();
        let backward = october(&records);
        assert_eq!(forward.present_days, backward.present_days);
        assert_eq!(forward.present_days, dec("2.5"));
    }

    #[test]
    fn test_duplicate_records_counted_and_warned() {
        let result = october(&[
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
        ]);
        assert_eq!(result.present_days, dec("2"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "DUPLICATE_ATTENDANCE");
    }

    #[test]
    fn test_audit_step_reasoning() {
        let result = october(&[
            record("emp_001", "2026-10-01", AttendanceStatus::Present),
            record("emp_001", "2026-10-02", AttendanceStatus::HalfDay),
        ]);
        assert_eq!(result.audit_step.rule_id, "present_days");
        assert_eq!(
            result.audit_step.reasoning,
            "1 present + 1 half-days x 0.5 = 1.5 present days"
        );
    }
}
