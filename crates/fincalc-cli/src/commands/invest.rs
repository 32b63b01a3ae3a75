use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::compounding::monthly_rate_from_annual_pct;
use fincalc_core::growth::annuity::{project_growth, GrowthInput};
use fincalc_core::growth::goal::{plan_goal, ContributionGoal};

use crate::input;

/// Arguments for the recurring-investment calculator
#[derive(Args)]
pub struct SipArgs {
    /// Contribution per month
    #[arg(long)]
    pub contribution: Option<Decimal>,

    /// Expected annual return as a percentage (e.g. 12 for 12% p.a.)
    #[arg(long, alias = "return")]
    pub annual_return: Option<Decimal>,

    /// Investment horizon in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Existing balance that compounds alongside the contributions
    #[arg(long, default_value = "0")]
    pub opening: Decimal,

    /// Credit contributions at month start (annuity-due)
    #[arg(long)]
    pub due: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the goal-seek calculator
#[derive(Args)]
pub struct GoalArgs {
    /// Corpus wanted at the end of the horizon
    #[arg(long)]
    pub target: Option<Decimal>,

    /// Future value of what is already invested, as of the same horizon
    #[arg(long, default_value = "0")]
    pub accumulated: Decimal,

    /// Expected annual return as a percentage
    #[arg(long, alias = "return")]
    pub annual_return: Option<Decimal>,

    /// Months remaining until the horizon
    #[arg(long)]
    pub months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let growth_input: GrowthInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        GrowthInput {
            opening_balance: args.opening,
            contribution: args
                .contribution
                .ok_or("--contribution is required (or provide --input)")?,
            periodic_rate: monthly_rate_from_annual_pct(
                args.annual_return
                    .ok_or("--annual-return is required (or provide --input)")?,
            ),
            periods: args.months.ok_or("--months is required (or provide --input)")?,
            due_at_period_start: args.due,
        }
    };

    let result = project_growth(&growth_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_goal(args: GoalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let goal: ContributionGoal = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ContributionGoal {
            target_future_value: args
                .target
                .ok_or("--target is required (or provide --input)")?,
            accumulated_future_value: args.accumulated,
            periodic_rate: monthly_rate_from_annual_pct(
                args.annual_return
                    .ok_or("--annual-return is required (or provide --input)")?,
            ),
            periods: args.months.ok_or("--months is required (or provide --input)")?,
        }
    };

    let result = plan_goal(&goal)?;
    Ok(serde_json::to_value(result)?)
}
