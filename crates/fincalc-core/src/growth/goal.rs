//! Goal-seek: the contribution needed to reach a target corpus.
//!
//! Inverts the annuity-due factor (contributions at period start), since
//! that is how the forward projection credits a disciplined saver. The gap
//! is clamped at zero: an already-met target asks for nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::compounding::compound;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A savings target and what already counts toward it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionGoal {
    /// Corpus wanted at the end of the horizon.
    pub target_future_value: Money,
    /// Future value of what is already invested, as of the same horizon.
    #[serde(default)]
    pub accumulated_future_value: Money,
    /// Fractional rate per period.
    pub periodic_rate: Rate,
    /// Periods remaining until the horizon.
    pub periods: u32,
}

/// Goal-seek result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalOutput {
    pub target_future_value: Money,
    pub accumulated_future_value: Money,
    /// Shortfall still to be funded (zero when the target is met).
    pub gap: Money,
    pub required_contribution: Money,
    /// False when a positive gap remains but no periods are left.
    pub achievable: bool,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Periodic contribution needed to close the gap to the target.
///
/// Returns zero when the target is already met or no periods remain; never
/// negative.
pub fn required_contribution(goal: &ContributionGoal) -> Money {
    let gap = (goal.target_future_value - goal.accumulated_future_value).max(Decimal::ZERO);
    if gap.is_zero() || goal.periods == 0 {
        return Decimal::ZERO;
    }

    if goal.periodic_rate.is_zero() {
        return gap / Decimal::from(goal.periods);
    }

    let factor = compound(goal.periodic_rate, goal.periods);
    let annuity_due_factor = (factor - Decimal::ONE) / goal.periodic_rate
        * (Decimal::ONE + goal.periodic_rate);
    gap / annuity_due_factor
}

/// Goal-seek with gap breakdown and an unreachable-goal warning.
pub fn plan_goal(goal: &ContributionGoal) -> FinCalcResult<ComputationOutput<GoalOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let gap = (goal.target_future_value - goal.accumulated_future_value).max(Decimal::ZERO);
    let contribution = required_contribution(goal);
    let achievable = gap.is_zero() || goal.periods > 0;

    if !achievable {
        warnings.push(
            "No periods remain before the horizon; the target cannot be reached by recurring contributions".into(),
        );
    }

    let output = GoalOutput {
        target_future_value: goal.target_future_value,
        accumulated_future_value: goal.accumulated_future_value,
        gap,
        required_contribution: contribution,
        achievable,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity-due goal seek (required periodic contribution)",
        goal,
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
    use crate::growth::annuity::{future_value, AnnuityParams};
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_trip_with_future_value() {
        let goal = ContributionGoal {
            target_future_value: dec!(1_000_000),
            accumulated_future_value: Decimal::ZERO,
            periodic_rate: dec!(0.01),
            periods: 60,
        };
        let contribution = required_contribution(&goal);

        // Investing the answer (annuity-due) should land on the target
        let check = future_value(&AnnuityParams {
            contribution,
            periodic_rate: dec!(0.01),
            periods: 60,
            due_at_period_start: true,
        });
        assert!((check - dec!(1_000_000)).abs() < dec!(0.01), "check={}", check);
    }

    #[test]
    fn test_target_already_met_returns_zero() {
        let goal = ContributionGoal {
            target_future_value: dec!(500_000),
            accumulated_future_value: dec!(800_000),
            periodic_rate: dec!(0.01),
            periods: 120,
        };
        assert_eq!(required_contribution(&goal), Decimal::ZERO);
    }

    #[test]
    fn test_never_negative() {
        let goal = ContributionGoal {
            target_future_value: Decimal::ZERO,
            accumulated_future_value: dec!(1_000_000),
            periodic_rate: dec!(0.005),
            periods: 12,
        };
        assert!(required_contribution(&goal) >= Decimal::ZERO);
    }

    #[test]
    fn test_zero_periods_returns_zero() {
        let goal = ContributionGoal {
            target_future_value: dec!(1_000_000),
            accumulated_future_value: Decimal::ZERO,
            periodic_rate: dec!(0.01),
            periods: 0,
        };
        assert_eq!(required_contribution(&goal), Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_divides_gap_evenly() {
        let goal = ContributionGoal {
            target_future_value: dec!(120_000),
            accumulated_future_value: dec!(20_000),
            periodic_rate: Decimal::ZERO,
            periods: 10,
        };
        assert_eq!(required_contribution(&goal), dec!(10_000));
    }

    #[test]
    fn test_plan_goal_unreachable_warns() {
        let goal = ContributionGoal {
            target_future_value: dec!(1_000_000),
            accumulated_future_value: dec!(100_000),
            periodic_rate: dec!(0.01),
            periods: 0,
        };
        let result = plan_goal(&goal).unwrap();

        assert!(!result.result.achievable);
        assert_eq!(result.result.required_contribution, Decimal::ZERO);
        assert_eq!(result.result.gap, dec!(900_000));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_plan_goal_met_is_achievable() {
        let goal = ContributionGoal {
            target_future_value: dec!(100_000),
            accumulated_future_value: dec!(100_000),
            periodic_rate: dec!(0.01),
            periods: 0,
        };
        let result = plan_goal(&goal).unwrap();

        assert!(result.result.achievable);
        assert_eq!(result.result.gap, Decimal::ZERO);
        assert!(result.warnings.is_empty());
    }
}
