//! Request types for the Payroll Reconciliation Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /payroll/:employee_id/process`.
///
/// Both fields are optional; a missing field defaults to the current month
/// or year. An empty or blank body is treated as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Month number, 1 through 12.
    #[serde(default)]
    pub month: Option<u32>,
    /// Four-digit year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Request body for `PUT /payroll/:employee_id/salary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUpdateRequest {
    /// The new base monthly salary.
    pub salary: Decimal,
}
