//! Inflation projection and safe-withdrawal corpus sizing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::{compound, pct_to_rate};
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

/// Annual inflation above this draws a warning on the expense projection.
const HIGH_INFLATION_PCT: Decimal = dec!(15);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for the year-by-year expense projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    /// Annual expense in today's money.
    pub annual_expense: Money,
    /// Annual inflation as a percentage (6 = 6% p.a.).
    pub inflation_pct: Rate,
    pub years: u32,
}

/// One projected year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseYear {
    pub year: u32,
    pub projected_expense: Money,
}

/// Expense projection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseOutput {
    pub future_annual_expense: Money,
    pub year_by_year: Vec<ExpenseYear>,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Project a present annual value N years forward under compound growth.
/// Zero rate or zero years returns the input unchanged.
pub fn project_forward(present_value: Money, annual_rate_pct: Rate, years: u32) -> Money {
    if annual_rate_pct.is_zero() || years == 0 {
        return present_value;
    }
    present_value * compound(pct_to_rate(annual_rate_pct), years)
}

/// Deflate a future value back to today's money: FV / (1+r)^n.
pub fn deflate_to_present(
    future_value: Money,
    annual_rate_pct: Rate,
    years: u32,
) -> FinCalcResult<Money> {
    if annual_rate_pct.is_zero() || years == 0 {
        return Ok(future_value);
    }

    let factor = compound(pct_to_rate(annual_rate_pct), years);
    if factor.is_zero() {
        return Err(FinCalcError::DivisionByZero {
            context: format!("deflation factor at {}% over {} years", annual_rate_pct, years),
        });
    }
    Ok(future_value / factor)
}

/// Corpus required per unit of annual spending at a safe withdrawal rate:
/// 100 / SWR%. A 4% SWR means 25× annual expenses.
pub fn corpus_multiplier(swr_pct: Rate) -> FinCalcResult<Decimal> {
    if swr_pct <= Decimal::ZERO {
        return Err(FinCalcError::DivisionByZero {
            context: "safe-withdrawal-rate corpus multiplier".into(),
        });
    }
    Ok(dec!(100) / swr_pct)
}

/// Year-by-year inflation of an annual expense.
pub fn project_expenses(input: &ExpenseInput) -> FinCalcResult<ComputationOutput<ExpenseOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.inflation_pct > HIGH_INFLATION_PCT {
        warnings.push(format!(
            "Inflation of {}% p.a. is unusually high; projections compound quickly",
            input.inflation_pct
        ));
    }

    let rate = pct_to_rate(input.inflation_pct);
    let mut year_by_year = Vec::with_capacity(input.years as usize);
    let mut projected = input.annual_expense;

    for year in 1..=input.years {
        projected *= Decimal::ONE + rate;
        year_by_year.push(ExpenseYear {
            year,
            projected_expense: projected,
        });
    }

    let output = ExpenseOutput {
        future_annual_expense: projected,
        year_by_year,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Compound inflation projection",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
