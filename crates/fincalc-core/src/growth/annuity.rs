//! Future value of recurring contributions.
//!
//! Ordinary annuities credit the contribution at period end; annuity-due
//! credits it at period start, compounding one extra period. Calculators
//! that model "invest on the 1st of every month" need the due variant, so
//! the distinction is part of the input, never assumed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::compound;
use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A fixed recurring contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnuityParams {
    /// Contribution per period.
    pub contribution: Money,
    /// Fractional rate per period (0.01 = 1% per period, not a percentage).
    pub periodic_rate: Rate,
    /// Number of contribution periods.
    pub periods: u32,
    /// True when contributions land at period start (annuity-due).
    pub due_at_period_start: bool,
}

/// Input for a full growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Existing balance that compounds alongside the contributions.
    #[serde(default)]
    pub opening_balance: Money,
    pub contribution: Money,
    pub periodic_rate: Rate,
    pub periods: u32,
    #[serde(default)]
    pub due_at_period_start: bool,
}

/// One period of the accumulation table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPeriod {
    pub period: u32,
    pub opening: Money,
    pub contribution: Money,
    pub interest: Money,
    pub closing: Money,
}

/// Growth projection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthOutput {
    pub maturity_value: Money,
    pub total_invested: Money,
    pub growth_earned: Money,
    pub periods: Vec<GrowthPeriod>,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Future value of a recurring contribution.
///
/// A zero rate degenerates to the straight sum `contribution × periods`,
/// never touching the compounding formula's division by `r`.
pub fn future_value(params: &AnnuityParams) -> Money {
    if params.periods == 0 {
        return Decimal::ZERO;
    }
    if params.periodic_rate.is_zero() {
        return params.contribution * Decimal::from(params.periods);
    }

    let factor = compound(params.periodic_rate, params.periods);
    let fv = params.contribution * (factor - Decimal::ONE) / params.periodic_rate;

    if params.due_at_period_start {
        fv * (Decimal::ONE + params.periodic_rate)
    } else {
        fv
    }
}

/// Future value of a present sum under compound growth: PV × (1+r)^n.
pub fn future_value_of_lump_sum(present_value: Money, periodic_rate: Rate, periods: u32) -> Money {
    if periodic_rate.is_zero() {
        return present_value;
    }
    present_value * compound(periodic_rate, periods)
}

/// Expand a recurring investment into its period-by-period accumulation
/// table, with invested-vs-earned totals.
pub fn project_growth(input: &GrowthInput) -> FinCalcResult<ComputationOutput<GrowthOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.periodic_rate <= dec!(-1) {
        return Err(FinCalcError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "Periodic rate must be greater than -100%".into(),
        });
    }
    if input.contribution < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "contribution".into(),
            reason: "Contribution must be >= 0".into(),
        });
    }

    if input.periodic_rate.is_zero() && input.periods > 0 {
        warnings.push("Zero periodic rate: projection is a straight sum of contributions".into());
    }

    let mut periods = Vec::with_capacity(input.periods as usize);
    let mut balance = input.opening_balance;

    for period in 1..=input.periods {
        let opening = balance;
        let interest = if input.due_at_period_start {
            (opening + input.contribution) * input.periodic_rate
        } else {
            opening * input.periodic_rate
        };
        balance = opening + input.contribution + interest;

        periods.push(GrowthPeriod {
            period,
            opening,
            contribution: input.contribution,
            interest,
            closing: balance,
        });
    }

    let total_invested =
        input.opening_balance + input.contribution * Decimal::from(input.periods);
    let output = GrowthOutput {
        maturity_value: balance,
        total_invested,
        growth_earned: balance - total_invested,
        periods,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Recurring-contribution compound growth projection",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn monthly_sip() -> AnnuityParams {
        AnnuityParams {
            contribution: dec!(10_000),
            periodic_rate: dec!(0.01),
            periods: 12,
            due_at_period_start: false,
        }
    }

    #[test]
    fn test_ordinary_annuity_known_value() {
        // 10,000/month at 1% for 12 months: 10,000 * (1.01^12 - 1)/0.01 ≈ 126,825
        let fv = future_value(&monthly_sip());
        assert!((fv - dec!(126_825)).abs() < dec!(1), "fv={}", fv);
    }

    #[test]
    fn test_due_is_ordinary_times_one_plus_r() {
        let ordinary = future_value(&monthly_sip());

        let mut due_params = monthly_sip();
        due_params.due_at_period_start = true;
        let due = future_value(&due_params);

        assert!((due - ordinary * dec!(1.01)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_zero_rate_is_straight_sum() {
        let params = AnnuityParams {
            contribution: dec!(5_000),
            periodic_rate: Decimal::ZERO,
            periods: 24,
            due_at_period_start: true,
        };
        assert_eq!(future_value(&params), dec!(120_000));
    }

    #[test]
    fn test_zero_periods_zero_value() {
        let mut params = monthly_sip();
        params.periods = 0;
        assert_eq!(future_value(&params), Decimal::ZERO);
    }

    #[test]
    fn test_lump_sum_compounds() {
        // 100,000 at 1%/month for 12 months
        let fv = future_value_of_lump_sum(dec!(100_000), dec!(0.01), 12);
        assert!((fv - dec!(112_682.5)).abs() < dec!(0.1), "fv={}", fv);
    }

    #[test]
    fn test_lump_sum_zero_rate_unchanged() {
        assert_eq!(
            future_value_of_lump_sum(dec!(100_000), Decimal::ZERO, 120),
            dec!(100_000)
        );
    }

    #[test]
    fn test_projection_matches_closed_form_ordinary() {
        let input = GrowthInput {
            opening_balance: Decimal::ZERO,
            contribution: dec!(10_000),
            periodic_rate: dec!(0.01),
            periods: 12,
            due_at_period_start: false,
        };
        let result = project_growth(&input).unwrap();
        let closed_form = future_value(&monthly_sip());

        assert!(
            (result.result.maturity_value - closed_form).abs() < dec!(0.01),
            "table={} formula={}",
            result.result.maturity_value,
            closed_form
        );
    }

    #[test]
    fn test_projection_matches_closed_form_due() {
        let input = GrowthInput {
            opening_balance: Decimal::ZERO,
            contribution: dec!(10_000),
            periodic_rate: dec!(0.01),
            periods: 12,
            due_at_period_start: true,
        };
        let result = project_growth(&input).unwrap();

        let mut params = monthly_sip();
        params.due_at_period_start = true;
        let closed_form = future_value(&params);

        assert!((result.result.maturity_value - closed_form).abs() < dec!(0.01));
    }

    #[test]
    fn test_projection_with_opening_balance() {
        let input = GrowthInput {
            opening_balance: dec!(100_000),
            contribution: Decimal::ZERO,
            periodic_rate: dec!(0.01),
            periods: 12,
            due_at_period_start: false,
        };
        let result = project_growth(&input).unwrap();
        let expected = future_value_of_lump_sum(dec!(100_000), dec!(0.01), 12);

        assert!((result.result.maturity_value - expected).abs() < dec!(0.01));
        assert_eq!(result.result.total_invested, dec!(100_000));
    }

    #[test]
    fn test_projection_rows_balance() {
        let input = GrowthInput {
            opening_balance: dec!(50_000),
            contribution: dec!(2_000),
            periodic_rate: dec!(0.008),
            periods: 36,
            due_at_period_start: true,
        };
        let result = project_growth(&input).unwrap();
        let rows = &result.result.periods;

        assert_eq!(rows.len(), 36);
        for row in rows {
            let expected = row.opening + row.contribution + row.interest;
            assert!((row.closing - expected).abs() < dec!(0.000001));
        }
        // Invested + earned = maturity
        let out = &result.result;
        assert!(
            (out.total_invested + out.growth_earned - out.maturity_value).abs() < dec!(0.000001)
        );
    }

    #[test]
    fn test_projection_zero_rate_warns() {
        let input = GrowthInput {
            opening_balance: Decimal::ZERO,
            contribution: dec!(1_000),
            periodic_rate: Decimal::ZERO,
            periods: 6,
            due_at_period_start: false,
        };
        let result = project_growth(&input).unwrap();
        assert_eq!(result.result.maturity_value, dec!(6_000));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_projection_rejects_negative_contribution() {
        let input = GrowthInput {
            opening_balance: Decimal::ZERO,
            contribution: dec!(-100),
            periodic_rate: dec!(0.01),
            periods: 12,
            due_at_period_start: false,
        };
        assert!(project_growth(&input).is_err());
    }
}
