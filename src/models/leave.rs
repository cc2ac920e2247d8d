//! Leave request model and leave classification.
//!
//! Leave submission and approval live with an external collaborator. The
//! engine only reads approved requests and needs to know, for each
//! [`LeaveCategory`], whether a day of that leave is paid in full.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a leave category affects pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveClass {
    /// Fully paid; the day counts as accounted for.
    Exempt,
    /// Not accounted for; the day is indistinguishable from an
    /// unexplained absence when computing the deduction.
    Chargeable,
}

/// The closed set of leave categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveCategory {
    /// Medical leave.
    Sick,
    /// Casual leave.
    Casual,
    /// Emergency leave.
    Emergency,
    /// Vacation.
    Vacation,
    /// Away on office duty (client visit, training).
    Office,
    /// Anything else.
    Other,
}

impl LeaveCategory {
    /// Returns how a day of this leave is treated by payroll.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{LeaveCategory, LeaveClass};
    ///
    /// assert_eq!(LeaveCategory::Sick.classification(), LeaveClass::Exempt);
    /// assert_eq!(LeaveCategory::Vacation.classification(), LeaveClass::Chargeable);
    /// ```
    pub fn classification(self) -> LeaveClass {
        match self {
            LeaveCategory::Sick | LeaveCategory::Office => LeaveClass::Exempt,
            LeaveCategory::Casual
            | LeaveCategory::Emergency
            | LeaveCategory::Vacation
            | LeaveCategory::Other => LeaveClass::Chargeable,
        }
    }
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by HR.
    Approved,
    /// Rejected by HR.
    Rejected,
}

/// A leave request over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee requesting leave.
    pub employee_id: String,
    /// The leave category.
    pub category: LeaveCategory,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Current approval state.
    pub status: ApprovalStatus,
    /// HR's remark on approval or rejection.
    #[serde(default)]
    pub remark: Option<String>,
}

impl LeaveRequest {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalStatus::Approved
    }

    /// Clamps the request to an inclusive range.
    ///
    /// Returns `None` when the clamped interval is empty, which also covers
    /// a malformed request whose end precedes its start.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{ApprovalStatus, LeaveCategory, LeaveRequest};
    /// use chrono::NaiveDate;
    ///
    /// let leave = LeaveRequest {
    ///     employee_id: "emp_001".to_string(),
    ///     category: LeaveCategory::Sick,
    ///     start_date: NaiveDate::from_ymd_opt(2026, 9, 28).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
    ///     status: ApprovalStatus::Approved,
    ///     remark: None,
    /// };
    ///
    /// let (start, end) = leave
    ///     .overlap(
    ///         NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
    ///         NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(start, NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
    /// assert_eq!(end, NaiveDate::from_ymd_opt(2026, 10, 2).unwrap());
    /// ```
    pub fn overlap(
        &self,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Option<(NaiveDate, NaiveDate)> {
        let overlap_start = self.start_date.max(range_start);
        let overlap_end = self.end_date.min(range_end);
        (overlap_end >= overlap_start).then_some((overlap_start, overlap_end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_leave(start: &str, end: &str) -> LeaveRequest {
        LeaveRequest {
            employee_id: "emp_001".to_string(),
            category: LeaveCategory::Casual,
            start_date: make_date(start),
            end_date: make_date(end),
            status: ApprovalStatus::Approved,
            remark: None,
        }
    }

    #[test]
    fn test_exempt_categories() {
        assert_eq!(LeaveCategory::Sick.classification(), LeaveClass::Exempt);
        assert_eq!(LeaveCategory::Office.classification(), LeaveClass::Exempt);
    }

    #[test]
    fn test_chargeable_categories() {
        for category in [
            LeaveCategory::Casual,
            LeaveCategory::Emergency,
            LeaveCategory::Vacation,
            LeaveCategory::Other,
        ] {
            assert_eq!(category.classification(), LeaveClass::Chargeable);
        }
    }

    #[test]
    fn test_overlap_inside_range() {
        let leave = create_leave("2026-10-12", "2026-10-14");
        let overlap = leave.overlap(make_date("2026-10-01"), make_date("2026-10-31"));
        assert_eq!(
            overlap,
            Some((make_date("2026-10-12"), make_date("2026-10-14")))
        );
    }

    #[test]
    fn test_overlap_clamps_end_to_range() {
        let leave = create_leave("2026-10-30", "2026-11-03");
        let overlap = leave.overlap(make_date("2026-10-01"), make_date("2026-10-31"));
        assert_eq!(
            overlap,
            Some((make_date("2026-10-30"), make_date("2026-10-31")))
        );
    }

    #[test]
    fn test_overlap_outside_range_is_none() {
        let leave = create_leave("2026-11-02", "2026-11-03");
        assert!(leave
            .overlap(make_date("2026-10-01"), make_date("2026-10-31"))
            .is_none());
    }

    #[test]
    fn test_overlap_inverted_request_is_none() {
        let leave = create_leave("2026-10-15", "2026-10-12");
        assert!(leave
            .overlap(make_date("2026-10-01"), make_date("2026-10-31"))
            .is_none());
    }

    #[test]
    fn test_deserialize_leave_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "category": "Office",
            "start_date": "2026-10-28",
            "end_date": "2026-10-29",
            "status": "Approved",
            "remark": "Client visit"
        }"#;

        let leave: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(leave.category, LeaveCategory::Office);
        assert!(leave.is_approved());
        assert_eq!(leave.remark.as_deref(), Some("Client visit"));
    }

    #[test]
    fn test_pending_request_is_not_approved() {
        let mut leave = create_leave("2026-10-12", "2026-10-14");
        leave.status = ApprovalStatus::Pending;
        assert!(!leave.is_approved());
    }
}
