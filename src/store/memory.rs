//! In-memory implementation of every collaborator trait.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, Holiday, HolidayCalendar, LeaveRequest};

use super::{AttendanceSource, EmployeeDirectory, HolidaySource, LeaveSource, SeedData};

#[derive(Debug, Default)]
struct StoreData {
    employees: BTreeMap<String, Employee>,
    attendance: Vec<AttendanceRecord>,
    leaves: Vec<LeaveRequest>,
    holidays: HolidayCalendar,
}

/// A thread-safe store holding employees, attendance, leave, and holidays.
///
/// Holiday dates are unique; adding a second holiday on a date fails with
/// [`EngineError::DuplicateHoliday`]. Attendance is stored as given, so two
/// records on the same date are both kept.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, Holiday};
/// use payroll_engine::store::{EmployeeDirectory, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let store = InMemoryStore::new();
/// store
///     .add_employee(Employee { id: "emp_001".to_string(), name: "Asha Rao".to_string(), base_salary: None })
///     .unwrap();
///
/// let republic_day = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// store.add_holiday(republic_day.clone()).unwrap();
/// assert!(store.add_holiday(republic_day).is_err());
///
/// assert!(store.find_employee("emp_001").unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<StoreData>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with a holiday calendar.
    pub fn with_holidays(holidays: HolidayCalendar) -> Self {
        Self {
            data: RwLock::new(StoreData {
                holidays,
                ..StoreData::default()
            }),
        }
    }

    /// Creates a store from a seed document.
    pub fn from_seed(seed: SeedData) -> EngineResult<Self> {
        let store = Self::new();
        store.load_seed(seed)?;
        Ok(store)
    }

    /// Adds the contents of a seed document to the store.
    ///
    /// Holidays are checked before anything is written, so a duplicate
    /// holiday leaves the store unchanged.
    pub fn load_seed(&self, seed: SeedData) -> EngineResult<()> {
        let mut data = self.write()?;

        let mut holidays = data.holidays.clone();
        for holiday in seed.holidays {
            holidays.insert(holiday)?;
        }
        data.holidays = holidays;

        for employee in seed.employees {
            data.employees.insert(employee.id.clone(), employee);
        }
        data.attendance.extend(seed.attendance);
        data.leaves.extend(seed.leaves);
        Ok(())
    }

    /// Adds or replaces an employee.
    pub fn add_employee(&self, employee: Employee) -> EngineResult<()> {
        self.write()?.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Adds an attendance record.
    pub fn add_attendance(&self, record: AttendanceRecord) -> EngineResult<()> {
        self.write()?.attendance.push(record);
        Ok(())
    }

    /// Adds a leave request.
    pub fn add_leave(&self, leave: LeaveRequest) -> EngineResult<()> {
        self.write()?.leaves.push(leave);
        Ok(())
    }

    /// Adds a holiday, rejecting a date that already has one.
    pub fn add_holiday(&self, holiday: Holiday) -> EngineResult<()> {
        self.write()?.holidays.insert(holiday)
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, StoreData>> {
        self.data.read().map_err(|e| EngineError::StoreError {
            source_name: "in-memory store".to_string(),
            message: format!("Lock error: {}", e),
        })
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, StoreData>> {
        self.data.write().map_err(|e| EngineError::StoreError {
            source_name: "in-memory store".to_string(),
            message: format!("Lock error: {}", e),
        })
    }
}

impl EmployeeDirectory for InMemoryStore {
    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.read()?.employees.get(employee_id).cloned())
    }

    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }
}

impl AttendanceSource for InMemoryStore {
    fn attendance_between(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .read()?
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }
}

impl LeaveSource for InMemoryStore {
    fn leaves_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<LeaveRequest>> {
        Ok(self
            .read()?
            .leaves
            .iter()
            .filter(|l| l.employee_id == employee_id && l.overlap(start, end).is_some())
            .cloned()
            .collect())
    }
}

impl HolidaySource for InMemoryStore {
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<HolidayCalendar> {
        HolidayCalendar::from_holidays(self.read()?.holidays.between(start, end))
    }
}
