//! Configuration types for payroll reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DeductionPolicy;
use crate::models::{Holiday, HolidayCalendar};

/// Deduction and salary policy from policy.yaml.
///
/// Payroll is defined against a fixed 30-day month with a 1.05 escalation
/// for every chargeable day after the first. Other values for
/// `standard_month_days` or `escalation_multiplier` are accepted but leave
/// that convention, so every figure the engine produces changes with them.
/// The loader logs a warning when it sees them.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Divisor used to derive the daily rate from a monthly salary.
    pub standard_month_days: u32,
    /// Multiplier for every chargeable day after the first.
    pub escalation_multiplier: Decimal,
    /// Base salary given to employees with no salary on file.
    pub default_base_salary: Decimal,
}

impl PolicyConfig {
    /// The numeric part of the policy used by the deduction calculator.
    pub fn deduction_policy(&self) -> DeductionPolicy {
        DeductionPolicy {
            standard_month_days: self.standard_month_days,
            escalation_multiplier: self.escalation_multiplier,
        }
    }
}

/// One file under holidays/.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The year every holiday in the file must fall in.
    pub year: i32,
    /// Holidays for the year.
    pub holidays: Vec<Holiday>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Salary and deduction policy.
    policy: PolicyConfig,
    /// Holidays from every file, merged.
    holidays: HolidayCalendar,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(policy: PolicyConfig, holidays: HolidayCalendar) -> Self {
        Self { policy, holidays }
    }

    /// Returns the policy section.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the merged holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}
