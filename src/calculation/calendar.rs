//! Calendar resolution.
//!
//! This module determines the day type (working day, weekend, holiday) for
//! any date and enumerates the working days of a pay month, which is the
//! denominator everything else in reconciliation is measured against.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, HolidayCalendar, PayMonth};

/// Represents the type of day for payroll purposes.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a holiday.
    Working,
    /// Saturday or Sunday.
    Weekend,
    /// A weekday listed in the holiday calendar.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Working => write!(f, "Working"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Determines the day type for a date.
///
/// Weekends take precedence over holidays, so a holiday that falls on a
/// Saturday or Sunday is reported as [`DayType::Weekend`] and is never
/// subtracted twice.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{get_day_type, DayType};
/// use payroll_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let republic_day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(); // Monday
/// let holidays = HolidayCalendar::from_holidays(vec![Holiday {
///     date: republic_day,
///     name: "Republic Day".to_string(),
/// }])
/// .unwrap();
///
/// assert_eq!(get_day_type(republic_day, &holidays), DayType::Holiday);
/// assert_eq!(
///     get_day_type(NaiveDate::from_ymd_opt(2026, 1, 24).unwrap(), &holidays),
///     DayType::Weekend
/// );
/// assert_eq!(
///     get_day_type(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap(), &holidays),
///     DayType::Working
/// );
/// ```
pub fn get_day_type(date: NaiveDate, holidays: &HolidayCalendar) -> DayType {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ if holidays.is_holiday(date) => DayType::Holiday,
        _ => DayType::Working,
    }
}

/// Returns true if the date is a working day.
pub fn is_working_day(date: NaiveDate, holidays: &HolidayCalendar) -> bool {
    get_day_type(date, holidays) == DayType::Working
}

/// Iterates every date from `start` to `end` inclusive.
///
/// Yields nothing when `end < start`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// The working days of a pay month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysResult {
    /// First calendar day of the month.
    pub first_day: NaiveDate,
    /// Last calendar day of the month.
    pub last_day: NaiveDate,
    /// Working days in date order.
    pub working_days: Vec<NaiveDate>,
    /// Saturdays and Sundays in the month.
    pub weekend_days: u32,
    /// Holidays that removed a weekday.
    pub weekday_holidays: u32,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

impl WorkingDaysResult {
    /// Number of working days.
    pub fn count(&self) -> u32 {
        self.working_days.len() as u32
    }
}

/// Enumerates the working days of a month.
///
/// # Arguments
///
/// * `pay_month` - The month to resolve
/// * `holidays` - The holiday calendar
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::resolve_working_days;
/// use payroll_engine::models::{Holiday, HolidayCalendar, PayMonth};
/// use chrono::NaiveDate;
///
/// let holidays = HolidayCalendar::from_holidays(vec![
///     Holiday { date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(), name: "Makar Sankranti".to_string() },
///     Holiday { date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(), name: "Republic Day".to_string() },
/// ])
/// .unwrap();
///
/// let result = resolve_working_days(PayMonth::new(1, 2026).unwrap(), &holidays, 1);
/// assert_eq!(result.count(), 20);
/// assert_eq!(result.weekend_days, 9);
/// assert_eq!(result.weekday_holidays, 2);
/// ```
pub fn resolve_working_days(
    pay_month: PayMonth,
    holidays: &HolidayCalendar,
    step_number: u32,
) -> WorkingDaysResult {
    let first_day = pay_month.first_day();
    let last_day = pay_month.last_day();

    let mut working_days = Vec::new();
    let mut weekend_days = 0u32;
    let mut weekday_holidays = 0u32;

    for date in dates_between(first_day, last_day) {
        match get_day_type(date, holidays) {
            DayType::Working => working_days.push(date),
            DayType::Weekend => weekend_days += 1,
            DayType::Holiday => weekday_holidays += 1,
        }
    }

    let calendar_days = pay_month.days_in_month();
    let count = working_days.len();

    let audit_step = AuditStep {
        step_number,
        rule_id: "working_days".to_string(),
        rule_name: "Working Day Resolution".to_string(),
        input: serde_json::json!({
            "pay_month": pay_month.to_string(),
            "calendar_days": calendar_days,
            "holidays_in_month": holidays.between(first_day, last_day).len()
        }),
        output: serde_json::json!({
            "working_days": count,
            "weekend_days": weekend_days,
            "weekday_holidays": weekday_holidays
        }),
        reasoning: format!(
            "{} calendar days - {} weekend days - {} weekday holidays = {} working days",
            calendar_days, weekend_days, weekday_holidays, count
        ),
    };

    WorkingDaysResult {
        first_day,
        last_day,
        working_days,
        weekend_days,
        weekday_holidays,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holiday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn calendar(dates: &[(&str, &str)]) -> HolidayCalendar {
        HolidayCalendar::from_holidays(dates.iter().map(|(date, name)| Holiday {
            date: make_date(date),
            name: name.to_string(),
        }))
        .unwrap()
    }

    #[test]
    fn test_day_type_weekdays() {
        let holidays = HolidayCalendar::default();
        // 2026-10-05 is a Monday
        for day in 5..=9 {
            let date = NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
            assert_eq!(get_day_type(date, &holidays), DayType::Working);
        }
    }

    #[test]
    fn test_day_type_weekend() {
        let holidays = HolidayCalendar::default();
        assert_eq!(
            get_day_type(make_date("2026-10-03"), &holidays),
            DayType::Weekend
        );
        assert_eq!(
            get_day_type(make_date("2026-10-04"), &holidays),
            DayType::Weekend
        );
    }

    #[test]
    fn test_weekend_holiday_is_weekend() {
        let holidays = calendar(&[("2026-10-04", "Sunday Festival")]);
        assert_eq!(
            get_day_type(make_date("2026-10-04"), &holidays),
            DayType::Weekend
        );
    }

    #[test]
    fn test_january_2026_two_weekday_holidays() {
        let holidays = calendar(&[
            ("2026-01-14", "Makar Sankranti"),
            ("2026-01-26", "Republic Day"),
        ]);
        let result = resolve_working_days(PayMonth::new(1, 2026).unwrap(), &holidays, 1);

        assert_eq!(result.first_day, make_date("2026-01-01"));
        assert_eq!(result.last_day, make_date("2026-01-31"));
        assert_eq!(result.weekend_days, 9);
        assert_eq!(result.weekday_holidays, 2);
        assert_eq!(result.count(), 20);
        assert!(!result.working_days.contains(&make_date("2026-01-14")));
    }

    #[test]
    fn test_october_2026_has_22_working_days() {
        let result = resolve_working_days(
            PayMonth::new(10, 2026).unwrap(),
            &HolidayCalendar::default(),
            1,
        );
        assert_eq!(result.count(), 22);
        assert_eq!(result.weekend_days, 9);
    }

    #[test]
    fn test_weekend_holiday_not_subtracted_twice() {
        let without = resolve_working_days(
            PayMonth::new(10, 2026).unwrap(),
            &HolidayCalendar::default(),
            1,
        );
        let with_weekend_holiday = resolve_working_days(
            PayMonth::new(10, 2026).unwrap(),
            &calendar(&[("2026-10-31", "Saturday Holiday")]),
            1,
        );
        assert_eq!(without.count(), with_weekend_holiday.count());
        assert_eq!(with_weekend_holiday.weekday_holidays, 0);
    }

    #[test]
    fn test_holiday_outside_month_ignored() {
        let result = resolve_working_days(
            PayMonth::new(10, 2026).unwrap(),
            &calendar(&[("2026-11-02", "Next Month")]),
            1,
        );
        assert_eq!(result.count(), 22);
    }

    #[test]
    fn test_working_days_are_ordered() {
        let result = resolve_working_days(
            PayMonth::new(2, 2026).unwrap(),
            &HolidayCalendar::default(),
            1,
        );
        assert!(result.working_days.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.count(), 20);
    }

    #[test]
    fn test_counts_sum_to_calendar_days() {
        let holidays = calendar(&[("2028-02-15", "Mid Feb")]);
        let month = PayMonth::new(2, 2028).unwrap();
        let result = resolve_working_days(month, &holidays, 1);
        assert_eq!(
            result.count() + result.weekend_days + result.weekday_holidays,
            month.days_in_month()
        );
    }

    #[test]
    fn test_audit_step_records_counts() {
        let result = resolve_working_days(
            PayMonth::new(10, 2026).unwrap(),
            &HolidayCalendar::default(),
            3,
        );
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "working_days");
        assert_eq!(result.audit_step.output["working_days"], 22);
    }

    #[test]
    fn test_dates_between_inverted_is_empty() {
        assert_eq!(
            dates_between(make_date("2026-10-05"), make_date("2026-10-01")).count(),
            0
        );
    }

    #[test]
    fn test_dates_between_inclusive() {
        assert_eq!(
            dates_between(make_date("2026-10-01"), make_date("2026-10-31")).count(),
            31
        );
    }
}
