//! Attendance record model.
//!
//! Raw check-in/check-out capture belongs to an external collaborator. The
//! engine reads one [`AttendanceRecord`] per employee per day and converts
//! its [`AttendanceStatus`] into a fractional present-day credit.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Presence status recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// Worked the full day.
    Present,
    /// Did not work.
    Absent,
    /// Worked half the day.
    #[serde(rename = "Half-day")]
    HalfDay,
}

impl AttendanceStatus {
    /// Returns the present-day credit for this status.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::AttendanceStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(AttendanceStatus::Present.day_credit(), Decimal::ONE);
    /// assert_eq!(AttendanceStatus::HalfDay.day_credit(), Decimal::new(5, 1));
    /// assert_eq!(AttendanceStatus::Absent.day_credit(), Decimal::ZERO);
    /// ```
    pub fn day_credit(self) -> Decimal {
        match self {
            AttendanceStatus::Present => Decimal::ONE,
            AttendanceStatus::HalfDay => Decimal::new(5, 1),
            AttendanceStatus::Absent => Decimal::ZERO,
        }
    }
}

/// A single day's attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day, timezone-naive.
    pub date: NaiveDate,
    /// Recorded presence.
    pub status: AttendanceStatus,
    /// Check-in time, if captured.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out time, if captured.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}
