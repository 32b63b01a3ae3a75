//! Reducing-balance EMI and amortisation schedules.
//!
//! Interest accrues each month on the outstanding balance only. The
//! schedule is fixed-horizon: exactly `term_months` rows, with any
//! sub-unit rounding residual left in the final balance rather than
//! folded into the last payment. Display rounding is the caller's concern.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{compound, monthly_rate_from_annual_pct};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

/// Residual above this triggers a warning on the final schedule row.
const RESIDUAL_WARNING_THRESHOLD: Decimal = dec!(1.0);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Terms of a level-payment loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed.
    pub principal: Money,
    /// Annual interest rate as a percentage (12 = 12% p.a.).
    pub annual_rate_pct: Rate,
    /// Number of monthly payments.
    pub term_months: u32,
}

/// One month of an amortisation schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

/// Full amortisation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationOutput {
    pub monthly_payment: Money,
    pub schedule: Vec<ScheduleRow>,
    pub total_paid: Money,
    pub total_interest: Money,
    /// Balance left after the final scheduled payment under exact
    /// arithmetic. Not redistributed into the last row.
    pub residual_balance: Money,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Fixed monthly payment under the reducing-balance method.
///
/// Degenerate terms (zero principal or zero term) yield a zero payment; a
/// zero rate falls back to straight-line division so the annuity formula's
/// division by `r` is never reached.
pub fn monthly_payment(terms: &LoanTerms) -> Money {
    if terms.principal <= Decimal::ZERO || terms.term_months == 0 {
        return Decimal::ZERO;
    }

    let r = monthly_rate_from_annual_pct(terms.annual_rate_pct);
    if r.is_zero() {
        return terms.principal / Decimal::from(terms.term_months);
    }

    let factor = compound(r, terms.term_months);
    terms.principal * r * factor / (factor - Decimal::ONE)
}

/// Expand loan terms into a month-by-month amortisation schedule with
/// derived totals.
pub fn build_schedule(terms: &LoanTerms) -> FinCalcResult<ComputationOutput<AmortizationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let payment = monthly_payment(terms);
    let r = monthly_rate_from_annual_pct(terms.annual_rate_pct);

    let mut schedule = Vec::with_capacity(terms.term_months as usize);
    let mut balance = terms.principal.max(Decimal::ZERO);

    if payment > Decimal::ZERO {
        for period in 1..=terms.term_months {
            let interest = balance * r;
            let principal_portion = (payment - interest).max(Decimal::ZERO);
            balance -= principal_portion;

            schedule.push(ScheduleRow {
                period,
                payment,
                interest,
                principal: principal_portion,
                closing_balance: balance.max(Decimal::ZERO),
            });
        }
    }

    let total_paid = payment * Decimal::from(terms.term_months);
    let total_interest = if payment > Decimal::ZERO {
        total_paid - terms.principal
    } else {
        Decimal::ZERO
    };

    let residual = if payment > Decimal::ZERO {
        balance
    } else {
        Decimal::ZERO
    };
    if residual.abs() > RESIDUAL_WARNING_THRESHOLD {
        warnings.push(format!(
            "Schedule leaves a residual balance of {} after the final payment",
            residual
        ));
    }

    let output = AmortizationOutput {
        monthly_payment: payment,
        schedule,
        total_paid,
        total_interest,
        residual_balance: residual,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Reducing-balance EMI amortisation (fixed horizon)",
        terms,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
