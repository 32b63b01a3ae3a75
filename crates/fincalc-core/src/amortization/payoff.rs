//! Accelerated-payoff what-if simulation.
//!
//! Re-amortising with a larger payment or a one-off principal prepayment
//! has no closed form against the original term, so the balance is rolled
//! forward month by month until it clears. The loop is capped, and a month
//! whose payment fails to cover accrued interest ends the simulation
//! immediately with whatever has accumulated.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::schedule::{monthly_payment, LoanTerms};
use crate::compounding::monthly_rate_from_annual_pct;
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

/// Hard ceiling on simulated months.
const MAX_PAYOFF_MONTHS: u32 = 1000;

/// Balance below this is considered fully repaid.
const BALANCE_EPSILON: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the payoff simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffInput {
    pub terms: LoanTerms,
    /// Fractional increase over the base payment (0.10 = pay 10% more).
    #[serde(default)]
    pub extra_payment_factor: Rate,
    /// One-off principal prepayment, applied at the start of
    /// `lump_sum_month` before that month's interest accrues.
    #[serde(default)]
    pub lump_sum: Money,
    /// Month the lump sum lands in (0 and 1 both mean the first month).
    #[serde(default)]
    pub lump_sum_month: u32,
    /// Explicit monthly payment, overriding the factor-derived one.
    #[serde(default)]
    pub payment_override: Option<Money>,
}

/// Result of the payoff simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffOutput {
    /// The payment actually simulated.
    pub monthly_payment: Money,
    pub months_to_payoff: u32,
    pub total_paid: Money,
    pub total_interest_paid: Money,
    /// Whether the balance cleared within the simulation bounds.
    pub fully_repaid: bool,
    /// Original-term comparison.
    pub baseline_months: u32,
    pub baseline_interest: Money,
    pub months_saved: u32,
    pub interest_saved: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate repaying the loan with an increased payment and/or a lump-sum
/// prepayment, reporting time and interest saved against the original term.
pub fn simulate_payoff(input: &PayoffInput) -> FinCalcResult<ComputationOutput<PayoffOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.extra_payment_factor < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "extra_payment_factor".into(),
            reason: "extra_payment_factor must be >= 0".into(),
        });
    }
    if input.lump_sum < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "lump_sum".into(),
            reason: "lump_sum must be >= 0".into(),
        });
    }
    if let Some(p) = input.payment_override {
        if p <= Decimal::ZERO {
            return Err(FinCalcError::InvalidInput {
                field: "payment_override".into(),
                reason: "payment_override must be > 0".into(),
            });
        }
    }

    let base_payment = monthly_payment(&input.terms);
    let payment = match input.payment_override {
        Some(p) => p,
        None => base_payment * (Decimal::ONE + input.extra_payment_factor),
    };
    let r = monthly_rate_from_annual_pct(input.terms.annual_rate_pct);
    let lump_month = input.lump_sum_month.max(1);

    let baseline_months = if base_payment > Decimal::ZERO {
        input.terms.term_months
    } else {
        0
    };
    let baseline_interest = if base_payment > Decimal::ZERO {
        base_payment * Decimal::from(input.terms.term_months) - input.terms.principal
    } else {
        Decimal::ZERO
    };

    let mut balance = input.terms.principal.max(Decimal::ZERO);
    let mut months = 0u32;
    let mut total_paid = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;

    if payment > Decimal::ZERO {
        for month in 1..=MAX_PAYOFF_MONTHS {
            if balance <= BALANCE_EPSILON {
                break;
            }

            if month == lump_month && input.lump_sum > Decimal::ZERO {
                let applied = input.lump_sum.min(balance);
                balance -= applied;
                total_paid += applied;
                if balance <= BALANCE_EPSILON {
                    months = month;
                    balance = Decimal::ZERO;
                    break;
                }
            }

            let interest = balance * r;
            let principal_portion = payment - interest;

            if principal_portion <= Decimal::ZERO {
                warnings.push(format!(
                    "Payment {} does not cover monthly interest {} on the outstanding balance; loan cannot amortise",
                    payment, interest
                ));
                break;
            }

            if balance + interest <= payment {
                // Final short payment clears the balance exactly
                total_paid += balance + interest;
                total_interest += interest;
                balance = Decimal::ZERO;
                months = month;
                break;
            }

            balance -= principal_portion;
            total_paid += payment;
            total_interest += interest;
            months = month;
        }
    }

    let fully_repaid = balance <= BALANCE_EPSILON;
    if !fully_repaid && months == MAX_PAYOFF_MONTHS {
        warnings.push(format!(
            "Simulation stopped at the {}-month ceiling with {} still outstanding",
            MAX_PAYOFF_MONTHS, balance
        ));
    }

    let months_saved = if fully_repaid {
        baseline_months.saturating_sub(months)
    } else {
        0
    };
    let interest_saved = if fully_repaid {
        (baseline_interest - total_interest).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let output = PayoffOutput {
        monthly_payment: payment,
        months_to_payoff: months,
        total_paid,
        total_interest_paid: total_interest,
        fully_repaid,
        baseline_months,
        baseline_interest,
        months_saved,
        interest_saved,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Accelerated payoff simulation (month-by-month reducing balance)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
