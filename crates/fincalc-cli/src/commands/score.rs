use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::scoring::estimator::{estimate_score, ScoreFactors};

use crate::input;

/// Arguments for the credit-score estimator
#[derive(Args)]
pub struct ScoreArgs {
    /// Share of payments made on time, 0-100
    #[arg(long)]
    pub on_time_pct: Option<Decimal>,

    /// Credit utilisation, 0-100
    #[arg(long)]
    pub utilization_pct: Option<Decimal>,

    /// Active credit accounts
    #[arg(long, default_value = "0")]
    pub accounts: u32,

    /// Average account age in years
    #[arg(long, default_value = "0")]
    pub avg_age_years: Decimal,

    /// Hard inquiries in the recent window
    #[arg(long, default_value = "0")]
    pub inquiries: u32,

    /// Share of installment (vs revolving) accounts, 0-100
    #[arg(long, default_value = "0")]
    pub mix_pct: Decimal,

    /// A default on record
    #[arg(long)]
    pub has_default: bool,

    /// A settled (not fully repaid) account on record
    #[arg(long)]
    pub has_settlement: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_score(args: ScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let factors: ScoreFactors = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScoreFactors {
            on_time_payment_pct: args
                .on_time_pct
                .ok_or("--on-time-pct is required (or provide --input)")?,
            utilization_pct: args
                .utilization_pct
                .ok_or("--utilization-pct is required (or provide --input)")?,
            active_account_count: args.accounts,
            avg_account_age_years: args.avg_age_years,
            recent_inquiry_count: args.inquiries,
            installment_mix_pct: args.mix_pct,
            has_default: args.has_default,
            has_settlement: args.has_settlement,
        }
    };

    let result = estimate_score(&factors)?;
    Ok(serde_json::to_value(result)?)
}
