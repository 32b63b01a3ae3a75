use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use fincalc_core::amortization::payoff::{simulate_payoff, PayoffInput};
use fincalc_core::amortization::schedule::{build_schedule, LoanTerms};

use crate::input;

/// Arguments for the EMI calculator
#[derive(Args)]
pub struct EmiArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (e.g. 12 for 12% p.a.)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Loan tenor in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the accelerated-payoff what-if
#[derive(Args)]
pub struct PayoffArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,

    /// Original loan tenor in months
    #[arg(long)]
    pub months: Option<u32>,

    /// Extra payment as a percentage of the base EMI (10 = pay 10% more)
    #[arg(long, default_value = "0")]
    pub extra_pct: Decimal,

    /// One-off principal prepayment
    #[arg(long, default_value = "0")]
    pub lump_sum: Decimal,

    /// Month the lump sum lands in (defaults to the first month)
    #[arg(long, default_value = "0")]
    pub lump_sum_month: u32,

    /// Explicit monthly payment, overriding the EMI-derived one
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn loan_terms_from_flags(
    principal: Option<Decimal>,
    annual_rate: Option<Decimal>,
    months: Option<u32>,
) -> Result<LoanTerms, Box<dyn std::error::Error>> {
    Ok(LoanTerms {
        principal: principal.ok_or("--principal is required (or provide --input)")?,
        annual_rate_pct: annual_rate.ok_or("--annual-rate is required (or provide --input)")?,
        term_months: months.ok_or("--months is required (or provide --input)")?,
    })
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms: LoanTerms = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        loan_terms_from_flags(args.principal, args.annual_rate, args.months)?
    };

    let result = build_schedule(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payoff_input: PayoffInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PayoffInput {
            terms: loan_terms_from_flags(args.principal, args.annual_rate, args.months)?,
            extra_payment_factor: args.extra_pct / dec!(100),
            lump_sum: args.lump_sum,
            lump_sum_month: args.lump_sum_month,
            payment_override: args.payment,
        }
    };

    let result = simulate_payoff(&payoff_input)?;
    Ok(serde_json::to_value(result)?)
}
