//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::calculation::DeductionPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::{HolidayFile, PayrollConfig, PolicyConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── policy.yaml       # Daily-rate divisor, escalation, default salary
/// └── holidays/
///     └── 2026.yaml     # Holidays for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Default salary: {}", loader.default_base_salary());
/// println!("Holidays loaded: {}", loader.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - policy.yaml or the holidays directory is missing
    /// - Any file contains invalid YAML or an out-of-range value
    /// - Two holiday entries share a date
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        Self::validate_policy(&policy, &policy_path)?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        Ok(Self {
            config: PayrollConfig::new(policy, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_policy(policy: &PolicyConfig, path: &Path) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if policy.standard_month_days == 0 {
            return Err(invalid("standard_month_days must be greater than zero"));
        }
        if policy.escalation_multiplier < Decimal::ONE {
            return Err(invalid("escalation_multiplier must be at least 1"));
        }
        if policy.default_base_salary.is_sign_negative() {
            return Err(invalid("default_base_salary must not be negative"));
        }
        if !policy.deduction_policy().is_standard() {
            warn!(
                path = %path.display(),
                standard_month_days = policy.standard_month_days,
                escalation_multiplier = %policy.escalation_multiplier,
                "Deduction policy departs from the 30-day month with 1.05 escalation"
            );
        }
        Ok(())
    }

    /// Loads every holiday file in the holidays directory into one calendar.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidayCalendar> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        // Deterministic order so a duplicate is always reported against the same file
        paths.sort();

        let mut calendar = HolidayCalendar::default();
        for path in paths {
            let file = Self::load_yaml::<HolidayFile>(&path)?;
            for holiday in file.holidays {
                if holiday.date.year() != file.year {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            holiday.name, holiday.date, file.year
                        ),
                    });
                }
                calendar.insert(holiday)?;
            }
        }

        Ok(calendar)
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the policy section.
    pub fn policy(&self) -> &PolicyConfig {
        self.config.policy()
    }

    /// Returns the deduction policy.
    pub fn deduction_policy(&self) -> DeductionPolicy {
        self.config.policy().deduction_policy()
    }

    /// Returns the salary assigned to employees without one on file.
    pub fn default_base_salary(&self) -> Decimal {
        self.config.policy().default_base_salary
    }

    /// Returns the configured holidays.
    pub fn holidays(&self) -> &HolidayCalendar {
        self.config.holidays()
    }
}
