use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use fincalc_core::compounding::monthly_rate_from_annual_pct;
use fincalc_core::growth::annuity::future_value_of_lump_sum;
use fincalc_core::growth::goal::{plan_goal, ContributionGoal};
use fincalc_core::inflation::projection::{
    corpus_multiplier, deflate_to_present, project_expenses, ExpenseInput,
};

use crate::input;

/// Arguments for the inflation projector
#[derive(Args)]
pub struct InflationArgs {
    /// Annual amount in today's money
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual inflation as a percentage (e.g. 6 for 6% p.a.)
    #[arg(long, alias = "rate")]
    pub inflation: Option<Decimal>,

    /// Years to project across
    #[arg(long)]
    pub years: Option<u32>,

    /// Deflate the amount back to today's money instead
    #[arg(long)]
    pub deflate: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the retirement-corpus calculator
#[derive(Args)]
pub struct FireArgs {
    /// Current annual expenses in today's money
    #[arg(long)]
    pub annual_expense: Option<Decimal>,

    /// Annual inflation as a percentage
    #[arg(long, default_value = "6")]
    pub inflation: Decimal,

    /// Years until retirement
    #[arg(long)]
    pub years: Option<u32>,

    /// Safe withdrawal rate as a percentage
    #[arg(long, default_value = "4")]
    pub swr: Decimal,

    /// Expected annual return on investments as a percentage
    #[arg(long, default_value = "12")]
    pub annual_return: Decimal,

    /// Corpus already invested today
    #[arg(long, default_value = "0")]
    pub current_corpus: Decimal,
}

pub fn run_inflation(args: InflationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let expense_input: ExpenseInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ExpenseInput {
            annual_expense: args.amount.ok_or("--amount is required (or provide --input)")?,
            inflation_pct: args
                .inflation
                .ok_or("--inflation is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };

    if args.deflate {
        let present = deflate_to_present(
            expense_input.annual_expense,
            expense_input.inflation_pct,
            expense_input.years,
        )?;
        return Ok(json!({
            "result": {
                "present_value": present,
                "future_value": expense_input.annual_expense,
                "inflation_pct": expense_input.inflation_pct,
                "years": expense_input.years,
            },
            "methodology": "Compound deflation to present value",
            "warnings": [],
        }));
    }

    let result = project_expenses(&expense_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_fire(args: FireArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let annual_expense = args
        .annual_expense
        .ok_or("--annual-expense is required")?;
    let years = args.years.ok_or("--years is required")?;

    // Inflate today's expenses to the retirement year
    let expenses = project_expenses(&ExpenseInput {
        annual_expense,
        inflation_pct: args.inflation,
        years,
    })?;
    let future_expense = expenses.result.future_annual_expense;

    // Size the corpus off the safe withdrawal rate
    let multiplier = corpus_multiplier(args.swr)?;
    let target_corpus = future_expense * multiplier;

    // What today's corpus grows into, then the monthly gap-filler
    let months = years * 12;
    let monthly_rate = monthly_rate_from_annual_pct(args.annual_return);
    let accumulated = future_value_of_lump_sum(args.current_corpus, monthly_rate, months);

    let goal = plan_goal(&ContributionGoal {
        target_future_value: target_corpus,
        accumulated_future_value: accumulated,
        periodic_rate: monthly_rate,
        periods: months,
    })?;

    let mut warnings = expenses.warnings.clone();
    warnings.extend(goal.warnings.clone());

    Ok(json!({
        "result": {
            "future_annual_expense": future_expense,
            "corpus_multiplier": multiplier,
            "target_corpus": target_corpus,
            "corpus_from_current_investments": accumulated,
            "gap": goal.result.gap,
            "required_monthly_investment": goal.result.required_contribution,
            "achievable": goal.result.achievable,
        },
        "methodology": "Inflated expenses × SWR corpus multiple, annuity-due goal seek",
        "assumptions": {
            "annual_expense": annual_expense,
            "inflation_pct": args.inflation,
            "years": years,
            "swr_pct": args.swr,
            "annual_return_pct": args.annual_return,
            "current_corpus": args.current_corpus,
        },
        "warnings": warnings,
    }))
}
