//! Holiday and holiday calendar models.
//!
//! This module contains the [`Holiday`] type and the [`HolidayCalendar`]
//! that enforces at most one holiday per calendar date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A named non-working day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// A set of holidays keyed by date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let mut calendar = HolidayCalendar::default();
/// calendar.insert(Holiday { date, name: "Makar Sankranti".to_string() }).unwrap();
///
/// assert!(calendar.is_holiday(date));
/// assert!(calendar
///     .insert(Holiday { date, name: "Duplicate".to_string() })
///     .is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Builds a calendar, rejecting duplicate dates.
    pub fn from_holidays<I>(holidays: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut calendar = Self::default();
        for holiday in holidays {
            calendar.insert(holiday)?;
        }
        Ok(calendar)
    }

    /// Adds a holiday, failing if one already exists on that date.
    pub fn insert(&mut self, holiday: Holiday) -> EngineResult<()> {
        if self.holidays.contains_key(&holiday.date) {
            return Err(EngineError::DuplicateHoliday { date: holiday.date });
        }
        self.holidays.insert(holiday.date, holiday);
        Ok(())
    }

    /// Checks whether a date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Returns the holidays between two dates (inclusive), in date order.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
        if end < start {
            return Vec::new();
        }
        self.holidays.range(start..=end).map(|(_, h)| h.clone()).collect()
    }

    /// Returns the number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holiday(date: &str, name: &str) -> Holiday {
        Holiday {
            date: make_date(date),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_from_holidays_accepts_distinct_dates() {
        let calendar = HolidayCalendar::from_holidays(vec![
            holiday("2026-01-14", "Makar Sankranti"),
            holiday("2026-01-26", "Republic Day"),
        ])
        .unwrap();

        assert_eq!(calendar.len(), 2);
        assert!(calendar.is_holiday(make_date("2026-01-14")));
        assert!(!calendar.is_holiday(make_date("2026-01-15")));
    }

    #[test]
    fn test_from_holidays_rejects_duplicate_date() {
        let result = HolidayCalendar::from_holidays(vec![
            holiday("2026-01-26", "Republic Day"),
            holiday("2026-01-26", "Another"),
        ]);

        match result {
            Err(EngineError::DuplicateHoliday { date }) => {
                assert_eq!(date, make_date("2026-01-26"));
            }
            _ => panic!("Expected DuplicateHoliday error"),
        }
    }

    #[test]
    fn test_between_is_inclusive_and_ordered() {
        let calendar = HolidayCalendar::from_holidays(vec![
            holiday("2026-01-26", "Republic Day"),
            holiday("2026-01-14", "Makar Sankranti"),
            holiday("2026-02-15", "Maha Shivaratri"),
        ])
        .unwrap();

        let january = calendar.between(make_date("2026-01-14"), make_date("2026-01-26"));
        assert_eq!(january.len(), 2);
        assert_eq!(january[0].name, "Makar Sankranti");
        assert_eq!(january[1].name, "Republic Day");
    }

    #[test]
    fn test_between_inverted_range_is_empty() {
        let calendar =
            HolidayCalendar::from_holidays(vec![holiday("2026-01-26", "Republic Day")]).unwrap();
        assert!(calendar
            .between(make_date("2026-01-31"), make_date("2026-01-01"))
            .is_empty());
    }
}
