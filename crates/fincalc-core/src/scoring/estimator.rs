//! Heuristic credit-score estimate.
//!
//! An additive scorecard over self-reported borrower factors, clamped to
//! the conventional 300-900 band. This is an indicative estimate, not a
//! bureau-score reproduction; surfaces presenting it must say so.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput};
use crate::FinCalcResult;

const SCORE_FLOOR: Decimal = dec!(300);
const SCORE_CEILING: Decimal = dec!(900);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Self-reported borrower factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactors {
    /// Share of payments made on time, 0-100.
    pub on_time_payment_pct: Decimal,
    /// Credit utilisation, 0-100 (clamped).
    pub utilization_pct: Decimal,
    pub active_account_count: u32,
    pub avg_account_age_years: Decimal,
    /// Hard inquiries in the recent window.
    pub recent_inquiry_count: u32,
    /// Share of installment (vs revolving) accounts, 0-100.
    pub installment_mix_pct: Decimal,
    #[serde(default)]
    pub has_default: bool,
    #[serde(default)]
    pub has_settlement: bool,
}

/// Signed contribution of each factor to the raw score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComponents {
    pub base: Decimal,
    pub payment_history: Decimal,
    pub utilization: Decimal,
    pub account_age: Decimal,
    pub inquiries: Decimal,
    pub credit_mix: Decimal,
    pub account_count: Decimal,
    pub derogatory: Decimal,
}

/// Score band, in the ranges bureaus conventionally report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Poor => write!(f, "Poor"),
            ScoreBand::Fair => write!(f, "Fair"),
            ScoreBand::Good => write!(f, "Good"),
            ScoreBand::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Score estimate with per-factor breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreOutput {
    /// Final score, clamped to [300, 900].
    pub score: u32,
    pub band: String,
    /// Sum of components before clamping.
    pub raw_score: Decimal,
    pub components: ScoreComponents,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn clamp_pct(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(dec!(100))
}

fn round_points(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn classify_band(score: Decimal) -> ScoreBand {
    if score < dec!(550) {
        ScoreBand::Poor
    } else if score < dec!(650) {
        ScoreBand::Fair
    } else if score < dec!(750) {
        ScoreBand::Good
    } else {
        ScoreBand::Excellent
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Estimate a credit score from borrower factors.
pub fn estimate_score(factors: &ScoreFactors) -> FinCalcResult<ComputationOutput<ScoreOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // Payment history: up to 210 points, linear in on-time share.
    let payment_history = round_points(dec!(210) * factors.on_time_payment_pct / dec!(100));

    // Utilisation: full 180 points at <= 20% usage, linear decay to 0 at 100%.
    let utilization_clamped = clamp_pct(factors.utilization_pct);
    let utilization = if utilization_clamped <= dec!(20) {
        dec!(180)
    } else {
        let decayed = dec!(180)
            * (Decimal::ONE - (utilization_clamped - dec!(20)) / dec!(80));
        round_points(decayed.max(Decimal::ZERO))
    };

    // Account age: up to 90 points, capped at 10 years.
    let age_ratio = (factors.avg_account_age_years / dec!(10)).min(Decimal::ONE);
    let account_age = round_points(age_ratio * dec!(90));

    // Inquiries: up to -60, capped at 10 inquiries.
    let inquiry_ratio = (Decimal::from(factors.recent_inquiry_count) / dec!(10)).min(Decimal::ONE);
    let inquiries = -round_points(inquiry_ratio * dec!(60));

    // Credit mix: up to 60 points, linear in installment share.
    let credit_mix = round_points(clamp_pct(factors.installment_mix_pct) / dec!(100) * dec!(60));

    // Account count: a modest portfolio helps, a crowded one hurts.
    // 6-8 accounts is deliberately neutral.
    let account_count = if (1..=5).contains(&factors.active_account_count) {
        dec!(20)
    } else if factors.active_account_count > 8 {
        dec!(-10)
    } else {
        Decimal::ZERO
    };

    // Derogatory marks stack.
    let mut derogatory = Decimal::ZERO;
    if factors.has_default {
        derogatory -= dec!(150);
    }
    if factors.has_settlement {
        derogatory -= dec!(80);
    }

    let components = ScoreComponents {
        base: SCORE_FLOOR,
        payment_history,
        utilization,
        account_age,
        inquiries,
        credit_mix,
        account_count,
        derogatory,
    };

    let raw_score = components.base
        + components.payment_history
        + components.utilization
        + components.account_age
        + components.inquiries
        + components.credit_mix
        + components.account_count
        + components.derogatory;

    let clamped = raw_score.max(SCORE_FLOOR).min(SCORE_CEILING);
    if raw_score < SCORE_FLOOR {
        warnings.push("Raw score fell below the 300 floor and was clamped".into());
    }
    if raw_score > SCORE_CEILING {
        warnings.push("Raw score exceeded the 900 ceiling and was clamped".into());
    }

    let score = clamped.to_u32().unwrap_or(300);

    let output = ScoreOutput {
        score,
        band: classify_band(clamped).to_string(),
        raw_score,
        components,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Additive heuristic scorecard (indicative, not a bureau score)",
        factors,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
