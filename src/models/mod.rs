//! Core data models for the Payroll Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calculation_result;
mod employee;
mod holiday;
mod leave;
mod pay_month;
mod payroll_record;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, DayAccounting, ReconciliationResult, SalaryOutcome,
};
pub use employee::Employee;
pub use holiday::{Holiday, HolidayCalendar};
pub use leave::{ApprovalStatus, LeaveCategory, LeaveClass, LeaveRequest};
pub use pay_month::PayMonth;
pub use payroll_record::{PayrollLedgerEntry, PayrollRecord, PayrollStatus};
