//! Payroll record lifecycle.
//!
//! [`PayrollService`] owns one payroll account per employee (the current
//! [`PayrollRecord`](crate::models::PayrollRecord) plus its run ledger) and
//! exposes the process, reset, and salary-update operations over it.

mod clock;
mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use service::{PayrollService, ProcessOutcome};
