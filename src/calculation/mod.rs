//! Calculation logic for the Payroll Reconciliation Engine.
//!
//! This module contains the calculation stages for reconciling a month of
//! attendance and leave against a salary: working-day resolution from the
//! weekday and holiday calendar, attendance aggregation, leave
//! classification into exempt and chargeable days, the tiered absence
//! deduction, and the pipeline that runs them in order.

mod attendance;
mod calendar;
mod deduction;
mod leave_classifier;
mod reconcile;

pub use attendance::{PresentDaysResult, aggregate_present_days};
pub use calendar::{
    DayType, WorkingDaysResult, dates_between, get_day_type, is_working_day, resolve_working_days,
};
pub use deduction::{
    DeductionPolicy, DeductionResult, ESCALATION_MULTIPLIER, STANDARD_MONTH_DAYS,
    calculate_deduction, chargeable_days, round_currency, tiered_deduction,
};
pub use leave_classifier::{LeaveClassification, classify_leave};
pub use reconcile::{MonthlyInputs, reconcile_month};
