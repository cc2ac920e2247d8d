//! Payroll Reconciliation Engine
//!
//! This crate reconciles an employee's attendance and approved leave against
//! the working days of a calendar month and derives a salary deduction and
//! net salary, keeping a per-employee payroll record and run ledger.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod payroll;
pub mod store;
