//! Employee model.
//!
//! The employee directory is owned by an external collaborator; the engine
//! only reads identifiers, names, and the optional base salary from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee known to the employee directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base monthly salary, if the directory carries one.
    ///
    /// When absent, a new payroll record is seeded with the policy's
    /// default base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
}

impl Employee {
    /// Returns the salary a fresh payroll record should start from.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     base_salary: None,
    /// };
    /// assert_eq!(employee.starting_salary(Decimal::new(50000, 0)), Decimal::new(50000, 0));
    /// ```
    pub fn starting_salary(&self, default_salary: Decimal) -> Decimal {
        self.base_salary.unwrap_or(default_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_with_salary() {
        let json = r#"{
            "id": "emp_001",
            "name": "Asha Rao",
            "base_salary": "30000"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Asha Rao");
        assert_eq!(employee.base_salary, Some(Decimal::new(30000, 0)));
    }

    #[test]
    fn test_deserialize_employee_without_salary() {
        let json = r#"{ "id": "emp_002", "name": "Ravi Menon" }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.base_salary, None);
    }

    #[test]
    fn test_starting_salary_prefers_directory_value() {
        let employee = Employee {
            id: "emp_001".to_string(),
            name: "Asha Rao".to_string(),
            base_salary: Some(Decimal::new(30000, 0)),
        };
        assert_eq!(
            employee.starting_salary(Decimal::new(50000, 0)),
            Decimal::new(30000, 0)
        );
    }
}
