//! The payroll service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use crate::calculation::{DeductionPolicy, MonthlyInputs, reconcile_month};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayMonth, PayrollLedgerEntry, PayrollRecord, ReconciliationResult};
use crate::store::{AttendanceSource, EmployeeDirectory, HolidaySource, LeaveSource};

/// The current record and every run for one employee.
#[derive(Debug)]
struct PayrollAccount {
    record: PayrollRecord,
    ledger: Vec<PayrollLedgerEntry>,
}

/// What a process run returns: the updated record and the full calculation.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// The record after the run.
    pub record: PayrollRecord,
    /// The reconciliation the record was updated from.
    pub result: ReconciliationResult,
}

/// Manages payroll records for every employee in the directory.
///
/// Each employee's account sits behind its own mutex. Operations on one
/// employee are serialised in arrival order; operations on different
/// employees only share a brief registry lookup.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use payroll_engine::calculation::DeductionPolicy;
/// use payroll_engine::models::{Employee, PayrollStatus};
/// use payroll_engine::payroll::PayrollService;
/// use payroll_engine::store::InMemoryStore;
/// use rust_decimal::Decimal;
///
/// let store = Arc::new(InMemoryStore::new());
/// store
///     .add_employee(Employee { id: "emp_001".to_string(), name: "Asha Rao".to_string(), base_salary: None })
///     .unwrap();
///
/// let service = PayrollService::new(store, DeductionPolicy::default(), Decimal::from(50000));
/// let record = service.get_status("emp_001").unwrap();
/// assert_eq!(record.status, PayrollStatus::Pending);
/// assert_eq!(record.base_salary, Decimal::from(50000));
///
/// assert!(service.get_status("emp_404").is_err());
/// ```
pub struct PayrollService {
    directory: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceSource>,
    leaves: Arc<dyn LeaveSource>,
    holidays: Arc<dyn HolidaySource>,
    clock: Arc<dyn Clock>,
    policy: DeductionPolicy,
    default_base_salary: Decimal,
    accounts: RwLock<HashMap<String, Arc<Mutex<PayrollAccount>>>>,
}

impl PayrollService {
    /// Creates a service reading every collaborator from one store.
    pub fn new<S>(store: Arc<S>, policy: DeductionPolicy, default_base_salary: Decimal) -> Self
    where
        S: EmployeeDirectory + AttendanceSource + LeaveSource + HolidaySource + 'static,
    {
        Self {
            directory: store.clone(),
            attendance: store.clone(),
            leaves: store.clone(),
            holidays: store,
            clock: Arc::new(SystemClock),
            policy,
            default_base_salary,
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the deduction policy in use.
    pub fn policy(&self) -> &DeductionPolicy {
        &self.policy
    }

    /// Reconciles a month and stores the outcome.
    ///
    /// `month` and `year` default to the clock's current month. Works from
    /// either state; any earlier figures are overwritten and the run is
    /// appended to the employee's ledger.
    pub fn process(
        &self,
        employee_id: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> EngineResult<PayrollRecord> {
        self.process_detailed(employee_id, month, year)
            .map(|outcome| outcome.record)
    }

    /// Same as [`process`](Self::process), also returning the calculation.
    pub fn process_detailed(
        &self,
        employee_id: &str,
        month: Option<u32>,
        year: Option<i32>,
    ) -> EngineResult<ProcessOutcome> {
        let account = self.account(employee_id)?;

        let now = self.clock.now();
        let pay_month = PayMonth::new(
            month.unwrap_or_else(|| now.month()),
            year.unwrap_or_else(|| now.year()),
        )?;
        let (first_day, last_day) = (pay_month.first_day(), pay_month.last_day());

        let mut account = lock(&account)?;

        let attendance = self
            .attendance
            .attendance_between(employee_id, first_day, last_day)?;
        let leaves = self
            .leaves
            .leaves_overlapping(employee_id, first_day, last_day)?;
        let holidays = self.holidays.holidays_between(first_day, last_day)?;

        let inputs = MonthlyInputs {
            employee_id,
            pay_month,
            base_salary: account.record.base_salary,
            attendance: &attendance,
            leaves: &leaves,
            holidays: &holidays,
        };
        let result = reconcile_month(&inputs, &self.policy, now);

        for step in &result.audit_trace.steps {
            debug!(
                employee_id = %employee_id,
                step = step.step_number,
                rule_id = %step.rule_id,
                reasoning = %step.reasoning,
                "Reconciliation step"
            );
        }

        account.record.apply(&result, now);
        account
            .ledger
            .push(PayrollLedgerEntry::from_result(&result, now));

        info!(
            employee_id = %employee_id,
            pay_month = %pay_month,
            working_days = result.accounting.working_days,
            chargeable_days = %result.accounting.chargeable_days,
            deduction = %result.outcome.deduction,
            net_salary = %result.outcome.net_salary,
            warnings = result.audit_trace.warnings.len(),
            "Payroll processed"
        );

        Ok(ProcessOutcome {
            record: account.record.clone(),
            result,
        })
    }

    /// Clears the stored figures and returns the record to `Pending`.
    ///
    /// The base salary is kept. Resetting a pending record changes nothing.
    pub fn reset(&self, employee_id: &str) -> EngineResult<PayrollRecord> {
        let account = self.account(employee_id)?;
        let mut account = lock(&account)?;

        if account.record.is_processed() {
            account.record.reset();
            info!(employee_id = %employee_id, "Payroll reset");
        } else {
            debug!(employee_id = %employee_id, "Reset of pending record ignored");
        }

        Ok(account.record.clone())
    }

    /// Changes the base salary in any state.
    ///
    /// Stored figures are not recomputed; they stay as computed against the
    /// previous salary until the next process run.
    pub fn update_base_salary(
        &self,
        employee_id: &str,
        amount: Decimal,
    ) -> EngineResult<PayrollRecord> {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                amount,
                message: "salary must not be negative".to_string(),
            });
        }

        let account = self.account(employee_id)?;
        let mut account = lock(&account)?;
        let previous = account.record.base_salary;
        account.record.set_base_salary(amount);

        info!(
            employee_id = %employee_id,
            previous_salary = %previous,
            base_salary = %amount,
            stale = account.record.is_processed(),
            "Base salary updated"
        );

        Ok(account.record.clone())
    }

    /// Returns the current record, creating a pending one if needed.
    pub fn get_status(&self, employee_id: &str) -> EngineResult<PayrollRecord> {
        let account = self.account(employee_id)?;
        let account = lock(&account)?;
        Ok(account.record.clone())
    }

    /// Returns a record for every employee in the directory, ordered by id.
    ///
    /// Employees without a record get a pending one.
    pub fn list_all(&self) -> EngineResult<Vec<PayrollRecord>> {
        let mut employees = self.directory.list_employees()?;
        employees.sort_by(|a, b| a.id.cmp(&b.id));

        let mut records = Vec::with_capacity(employees.len());
        for employee in &employees {
            let account = self.account_for(employee)?;
            records.push(lock(&account)?.record.clone());
        }
        Ok(records)
    }

    /// Returns every run for an employee, oldest first.
    pub fn history(&self, employee_id: &str) -> EngineResult<Vec<PayrollLedgerEntry>> {
        let account = self.account(employee_id)?;
        let account = lock(&account)?;
        Ok(account.ledger.clone())
    }

    /// Returns the latest run for a given month, if any.
    pub fn ledger_for(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> EngineResult<Option<PayrollLedgerEntry>> {
        let pay_month = PayMonth::new(month, year)?;
        let account = self.account(employee_id)?;
        let account = lock(&account)?;
        Ok(account
            .ledger
            .iter()
            .rev()
            .find(|entry| entry.pay_month == pay_month)
            .cloned())
    }

    /// Looks the employee up and returns their account.
    fn account(&self, employee_id: &str) -> EngineResult<Arc<Mutex<PayrollAccount>>> {
        let employee = self.directory.find_employee(employee_id)?.ok_or_else(|| {
            EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            }
        })?;
        self.account_for(&employee)
    }

    /// Returns the account for a known employee, creating it on first use.
    fn account_for(&self, employee: &Employee) -> EngineResult<Arc<Mutex<PayrollAccount>>> {
        if let Some(account) = self
            .accounts
            .read()
            .map_err(|e| registry_error(&e))?
            .get(&employee.id)
        {
            return Ok(account.clone());
        }

        let mut accounts = self.accounts.write().map_err(|e| registry_error(&e))?;
        let account = accounts.entry(employee.id.clone()).or_insert_with(|| {
            let base_salary = employee.starting_salary(self.default_base_salary);
            debug!(employee_id = %employee.id, base_salary = %base_salary, "Payroll record created");
            Arc::new(Mutex::new(PayrollAccount {
                record: PayrollRecord::pending(employee.id.clone(), base_salary),
                ledger: Vec::new(),
            }))
        });
        Ok(account.clone())
    }
}

fn lock(account: &Mutex<PayrollAccount>) -> EngineResult<MutexGuard<'_, PayrollAccount>> {
    account.lock().map_err(|e| registry_error(&e))
}

fn registry_error(err: &dyn std::fmt::Display) -> EngineError {
    EngineError::StoreError {
        source_name: "payroll records".to_string(),
        message: format!("Lock error: {}", err),
    }
}
