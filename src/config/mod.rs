//! Configuration loading and management for the Payroll Reconciliation Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: the deduction policy and the holiday calendar.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Escalation: {}", config.policy().escalation_multiplier);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayFile, PayrollConfig, PolicyConfig};
