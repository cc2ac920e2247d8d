//! Read-only contracts for the collaborators payroll depends on.
//!
//! Attendance capture, leave approval, the holiday calendar, and the
//! employee directory are owned elsewhere. The engine only reads them
//! through these traits, and [`InMemoryStore`] implements all four for the
//! binary and for tests.

mod memory;
mod seed;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee, HolidayCalendar, LeaveRequest};

pub use memory::InMemoryStore;
pub use seed::SeedData;

/// Lookup of employees by id.
pub trait EmployeeDirectory: Send + Sync {
    /// Find an employee by id. `Ok(None)` means the id is unknown.
    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// Every employee in the directory, ordered by id.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;
}

/// Attendance records by employee and date range.
pub trait AttendanceSource: Send + Sync {
    /// Records for one employee dated within `[start, end]`.
    fn attendance_between(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;
}

/// Leave requests by employee and date range.
///
/// Implementations may return requests in any approval state; the engine
/// filters to approved ones itself.
pub trait LeaveSource: Send + Sync {
    /// Requests for one employee that intersect `[start, end]`.
    fn leaves_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<LeaveRequest>>;
}

/// Holidays by date range.
pub trait HolidaySource: Send + Sync {
    /// Holidays dated within `[start, end]`.
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<HolidayCalendar>;
}
