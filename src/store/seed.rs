//! JSON seed documents for [`InMemoryStore`](super::InMemoryStore).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, Holiday, LeaveRequest};

/// Collaborator data to preload into a store.
///
/// Every section is optional.
///
/// # Example
///
/// ```
/// use payroll_engine::store::SeedData;
///
/// let seed = SeedData::from_json(r#"{
///     "employees": [{ "id": "emp_001", "name": "Asha Rao", "base_salary": "30000" }],
///     "attendance": [{ "employee_id": "emp_001", "date": "2026-10-01", "status": "Half-day" }]
/// }"#)
/// .unwrap();
///
/// assert_eq!(seed.employees.len(), 1);
/// assert_eq!(seed.attendance.len(), 1);
/// assert!(seed.leaves.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    /// Employee directory entries.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Leave requests in any approval state.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Holidays. Dates must be unique.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl SeedData {
    /// Parses a seed document.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::StoreError {
            source_name: "seed data".to_string(),
            message: e.to_string(),
        })
    }

    /// Reads and parses a seed file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| EngineError::StoreError {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}
