#![cfg(feature = "scoring")]

use fincalc_core::scoring::estimator::{estimate_score, ScoreFactors};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn baseline_borrower() -> ScoreFactors {
    ScoreFactors {
        on_time_payment_pct: dec!(95),
        utilization_pct: dec!(30),
        active_account_count: 4,
        avg_account_age_years: dec!(5),
        recent_inquiry_count: 2,
        installment_mix_pct: dec!(40),
        has_default: false,
        has_settlement: false,
    }
}

#[test]
fn test_baseline_borrower_lands_mid_band() {
    let result = estimate_score(&baseline_borrower()).unwrap();
    let out = &result.result;

    // 300 + 200 (95% on-time) + 158 (30% util) + 45 (5y) - 12 (2 inq)
    // + 24 (40% mix) + 20 (4 accounts) = 735
    assert_eq!(out.score, 735);
    assert_eq!(out.band, "Good");
}

#[test]
fn test_score_always_within_band() {
    // Sweep a grid of adversarial and favourable corners
    let corners = [
        (dec!(0), dec!(100), 0u32, dec!(0), 50u32, dec!(0), true, true),
        (dec!(100), dec!(0), 3, dec!(40), 0, dec!(100), false, false),
        (dec!(300), dec!(-50), 20, dec!(99), 99, dec!(300), false, true),
        (dec!(-10), dec!(150), 6, dec!(0.5), 3, dec!(-20), true, false),
    ];

    for (on_time, util, accounts, age, inquiries, mix, default, settlement) in corners {
        let factors = ScoreFactors {
            on_time_payment_pct: on_time,
            utilization_pct: util,
            active_account_count: accounts,
            avg_account_age_years: age,
            recent_inquiry_count: inquiries,
            installment_mix_pct: mix,
            has_default: default,
            has_settlement: settlement,
        };
        let score = estimate_score(&factors).unwrap().result.score;
        assert!((300..=900).contains(&score), "score {} out of band", score);
    }
}

#[test]
fn test_adversarial_floor_is_exactly_300() {
    let factors = ScoreFactors {
        on_time_payment_pct: Decimal::ZERO,
        utilization_pct: dec!(100),
        active_account_count: 0,
        avg_account_age_years: Decimal::ZERO,
        recent_inquiry_count: 50,
        installment_mix_pct: Decimal::ZERO,
        has_default: true,
        has_settlement: true,
    };
    assert_eq!(estimate_score(&factors).unwrap().result.score, 300);
}

#[test]
fn test_paying_down_utilization_raises_score() {
    let mut high_util = baseline_borrower();
    high_util.utilization_pct = dec!(85);

    let mut low_util = baseline_borrower();
    low_util.utilization_pct = dec!(15);

    let high = estimate_score(&high_util).unwrap().result.score;
    let low = estimate_score(&low_util).unwrap().result.score;
    assert!(low > high);
}

#[test]
fn test_default_outweighs_settlement() {
    let mut with_default = baseline_borrower();
    with_default.has_default = true;

    let mut with_settlement = baseline_borrower();
    with_settlement.has_settlement = true;

    let d = estimate_score(&with_default).unwrap().result.score;
    let s = estimate_score(&with_settlement).unwrap().result.score;
    assert!(d < s);
}

#[test]
fn test_components_sum_to_raw_score() {
    let result = estimate_score(&baseline_borrower()).unwrap();
    let out = &result.result;
    let c = &out.components;

    let sum = c.base
        + c.payment_history
        + c.utilization
        + c.account_age
        + c.inquiries
        + c.credit_mix
        + c.account_count
        + c.derogatory;
    assert_eq!(sum, out.raw_score);
}
