//! Pay month model.
//!
//! This module contains the [`PayMonth`] type: the calendar month a payroll
//! run covers, with helpers for its first and last day.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month that payroll is processed for.
///
/// Ordering is chronological (year, then month).
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let month = PayMonth::new(10, 2026).unwrap();
/// assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2026, 10, 1).unwrap());
/// assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2026, 10, 31).unwrap());
/// assert_eq!(month.label(), "October 2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PayMonthParts")]
pub struct PayMonth {
    year: i32,
    month: u32,
}

/// Unvalidated wire form of a [`PayMonth`].
#[derive(Deserialize)]
struct PayMonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<PayMonthParts> for PayMonth {
    type Error = EngineError;

    fn try_from(parts: PayMonthParts) -> EngineResult<Self> {
        PayMonth::new(parts.month, parts.year)
    }
}

impl PayMonth {
    /// Creates a pay month, validating that `month` is 1-12 and the year is
    /// representable.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::containing)
            .ok_or(EngineError::InvalidPayMonth { month, year })
    }

    /// Returns the pay month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The last calendar day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Human-readable label, e.g. "October 2026".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_rejects_month_zero() {
        match PayMonth::new(0, 2026) {
            Err(EngineError::InvalidPayMonth { month, year }) => {
                assert_eq!(month, 0);
                assert_eq!(year, 2026);
            }
            _ => panic!("Expected InvalidPayMonth error"),
        }
    }

    #[test]
    fn test_new_rejects_month_thirteen() {
        assert!(PayMonth::new(13, 2026).is_err());
    }

    #[test]
    fn test_last_day_of_february_leap_year() {
        let month = PayMonth::new(2, 2028).unwrap();
        assert_eq!(month.last_day(), make_date("2028-02-29"));
        assert_eq!(month.days_in_month(), 29);
    }

    #[test]
    fn test_last_day_of_december() {
        let month = PayMonth::new(12, 2026).unwrap();
        assert_eq!(month.last_day(), make_date("2026-12-31"));
    }

    #[test]
    fn test_containing_date() {
        let month = PayMonth::containing(make_date("2026-10-18"));
        assert_eq!(month, PayMonth::new(10, 2026).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dec_2025 = PayMonth::new(12, 2025).unwrap();
        let jan_2026 = PayMonth::new(1, 2026).unwrap();
        assert!(dec_2025 < jan_2026);
    }

    #[test]
    fn test_display_and_label() {
        let month = PayMonth::new(1, 2026).unwrap();
        assert_eq!(month.to_string(), "2026-01");
        assert_eq!(month.label(), "January 2026");
    }

    #[test]
    fn test_deserialize_rejects_invalid_month() {
        let result: Result<PayMonth, _> = serde_json::from_str(r#"{"year":2026,"month":13}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_pay_month() {
        let month = PayMonth::new(10, 2026).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, r#"{"year":2026,"month":10}"#);
    }
}
