//! Absence deduction calculation.
//!
//! This module turns a working-day accounting into a salary deduction using
//! a two-tier penalty.
//!
//! ## Rate Structure
//!
//! **The daily rate is always `base_salary / 30`**, whatever the length of
//! the month or its number of working days.
//! - First chargeable day: 100% of the daily rate
//! - Every further chargeable day: 105% of the daily rate

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Divisor used to derive a daily rate from a monthly salary.
pub const STANDARD_MONTH_DAYS: u32 = 30;

/// Multiplier applied to the second and later chargeable days.
pub const ESCALATION_MULTIPLIER: Decimal = Decimal::from_parts(105, 0, 0, false, 2);

/// Numeric policy for the deduction formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionPolicy {
    /// Divisor for the daily rate. Must be non-zero.
    pub standard_month_days: u32,
    /// Multiplier for every chargeable day after the first.
    pub escalation_multiplier: Decimal,
}

impl Default for DeductionPolicy {
    fn default() -> Self {
        Self {
            standard_month_days: STANDARD_MONTH_DAYS,
            escalation_multiplier: ESCALATION_MULTIPLIER,
        }
    }
}

impl DeductionPolicy {
    /// Whether this is the 30-day month with a 1.05 escalation.
    pub fn is_standard(&self) -> bool {
        *self == Self::default()
    }

    /// Daily rate for a monthly salary.
    pub fn daily_rate(&self, base_salary: Decimal) -> Decimal {
        base_salary / Decimal::from(self.standard_month_days)
    }
}

/// The result of a deduction calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Working days not covered by presence or exempt leave.
    pub chargeable_days: Decimal,
    /// Base salary divided by the standard month.
    pub daily_rate: Decimal,
    /// Deduction, rounded to whole currency units.
    pub deduction: Decimal,
    /// Net salary, rounded to whole currency units.
    pub net_salary: Decimal,
    /// Audit steps: the chargeable-day count and the tiered penalty.
    pub audit_steps: Vec<AuditStep>,
}

/// Working days not accounted for by presence or exempt leave, floored at zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::chargeable_days;
/// use rust_decimal::Decimal;
///
/// assert_eq!(chargeable_days(22, Decimal::from(19), Decimal::from(2)), Decimal::ONE);
/// assert_eq!(chargeable_days(20, Decimal::from(21), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn chargeable_days(working_days: u32, present_days: Decimal, exempt_days: Decimal) -> Decimal {
    let accounted = present_days + exempt_days;
    (Decimal::from(working_days) - accounted).max(Decimal::ZERO)
}

/// Applies the tiered penalty to a chargeable-day count, unrounded.
///
/// Zero chargeable days cost nothing. Any positive count up to one day costs
/// the full daily rate; each day beyond the first costs the daily rate times
/// the escalation multiplier.
pub fn tiered_deduction(
    chargeable_days: Decimal,
    daily_rate: Decimal,
    escalation_multiplier: Decimal,
) -> Decimal {
    if chargeable_days <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let additional_days = (chargeable_days - Decimal::ONE).max(Decimal::ZERO);
    daily_rate + additional_days * daily_rate * escalation_multiplier
}

/// Rounds a currency amount to whole units, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the deduction and net salary for a month.
///
/// # Arguments
///
/// * `working_days` - Working days in the month
/// * `present_days` - Present-day credit from attendance
/// * `exempt_days` - Working days covered by exempt leave
/// * `base_salary` - Base monthly salary
/// * `policy` - The deduction policy
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Returns
///
/// A [`DeductionResult`]. The deduction is rounded first and the net salary
/// is derived from the rounded deduction, so
/// `net_salary == max(0, base_salary - deduction)` holds on the stored
/// figures.
///
/// # Examples
///
/// ## One chargeable day
///
/// ```
/// use payroll_engine::calculation::{calculate_deduction, DeductionPolicy};
/// use rust_decimal::Decimal;
///
/// let result = calculate_deduction(
///     22,
///     Decimal::from(19),
///     Decimal::from(2),
///     Decimal::from(30000),
///     &DeductionPolicy::default(),
///     1,
/// );
/// assert_eq!(result.deduction, Decimal::from(1000));
/// assert_eq!(result.net_salary, Decimal::from(29000));
/// ```
///
/// ## Eight chargeable days
///
/// ```
/// use payroll_engine::calculation::{calculate_deduction, DeductionPolicy};
/// use rust_decimal::Decimal;
///
/// let result = calculate_deduction(
///     20,
///     Decimal::from(10),
///     Decimal::from(2),
///     Decimal::from(30000),
///     &DeductionPolicy::default(),
///     1,
/// );
/// // 1000 + 7 x 1050
/// assert_eq!(result.deduction, Decimal::from(8350));
/// assert_eq!(result.net_salary, Decimal::from(21650));
/// ```
pub fn calculate_deduction(
    working_days: u32,
    present_days: Decimal,
    exempt_days: Decimal,
    base_salary: Decimal,
    policy: &DeductionPolicy,
    step_number_start: u32,
) -> DeductionResult {
    let mut audit_steps = Vec::with_capacity(2);

    let chargeable = chargeable_days(working_days, present_days, exempt_days);
    let accounted = present_days + exempt_days;

    audit_steps.push(AuditStep {
        step_number: step_number_start,
        rule_id: "chargeable_days".to_string(),
        rule_name: "Chargeable Day Count".to_string(),
        input: serde_json::json!({
            "working_days": working_days,
            "present_days": present_days.normalize().to_string(),
            "exempt_days": exempt_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "accounted_days": accounted.normalize().to_string(),
            "chargeable_days": chargeable.normalize().to_string()
        }),
        reasoning: format!(
            "max(0, {} working days - ({} present + {} exempt)) = {} chargeable days",
            working_days,
            present_days.normalize(),
            exempt_days.normalize(),
            chargeable.normalize()
        ),
    });

    let daily_rate = policy.daily_rate(base_salary);
    let raw_deduction = tiered_deduction(chargeable, daily_rate, policy.escalation_multiplier);
    let deduction = round_currency(raw_deduction);
    let net_salary = round_currency((base_salary - deduction).max(Decimal::ZERO));

    let reasoning = if chargeable.is_zero() {
        "No chargeable days, no deduction".to_string()
    } else {
        let additional = (chargeable - Decimal::ONE).max(Decimal::ZERO);
        format!(
            "First day at ${} + {} further days at ${} x {} = ${}; net ${} - ${} = ${}",
            daily_rate.round_dp(2).normalize(),
            additional.normalize(),
            daily_rate.round_dp(2).normalize(),
            policy.escalation_multiplier.normalize(),
            deduction,
            base_salary.normalize(),
            deduction,
            net_salary
        )
    };

    audit_steps.push(AuditStep {
        step_number: step_number_start + 1,
        rule_id: "tiered_deduction".to_string(),
        rule_name: "Tiered Absence Deduction".to_string(),
        input: serde_json::json!({
            "chargeable_days": chargeable.normalize().to_string(),
            "base_salary": base_salary.normalize().to_string(),
            "standard_month_days": policy.standard_month_days,
            "escalation_multiplier": policy.escalation_multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.round_dp(2).normalize().to_string(),
            "deduction": deduction.to_string(),
            "net_salary": net_salary.to_string()
        }),
        reasoning,
    });

    DeductionResult {
        chargeable_days: chargeable,
        daily_rate,
        deduction,
        net_salary,
        audit_steps,
    }
}
