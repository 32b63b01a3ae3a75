#![cfg(feature = "amortization")]

use fincalc_core::amortization::payoff::{simulate_payoff, PayoffInput};
use fincalc_core::amortization::schedule::{build_schedule, monthly_payment, LoanTerms};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// EMI tests
// ===========================================================================

fn personal_loan() -> LoanTerms {
    LoanTerms {
        principal: dec!(500_000),
        annual_rate_pct: dec!(12),
        term_months: 36,
    }
}

#[test]
fn test_emi_documented_example() {
    // The worked example: 5,00,000 at 12% over 3 years -> ~16,607/month
    let payment = monthly_payment(&personal_loan());
    assert!((payment - dec!(16_607)).abs() < dec!(1));
}

#[test]
fn test_emi_zero_rate_is_exact_division() {
    let terms = LoanTerms {
        principal: dec!(120_000),
        annual_rate_pct: Decimal::ZERO,
        term_months: 12,
    };
    assert_eq!(monthly_payment(&terms), dec!(10_000));
}

#[test]
fn test_emi_scales_linearly_with_principal() {
    let double = LoanTerms {
        principal: dec!(1_000_000),
        ..personal_loan()
    };
    let single = monthly_payment(&personal_loan());
    let doubled = monthly_payment(&double);
    assert!((doubled - single * dec!(2)).abs() < dec!(0.01));
}

// ===========================================================================
// Schedule tests
// ===========================================================================

#[test]
fn test_schedule_portions_sum_to_total_paid() {
    let result = build_schedule(&personal_loan()).unwrap();
    let out = &result.result;

    let interest_sum: Decimal = out.schedule.iter().map(|r| r.interest).sum();
    let principal_sum: Decimal = out.schedule.iter().map(|r| r.principal).sum();

    assert!((interest_sum + principal_sum - out.total_paid).abs() < dec!(0.01));
}

#[test]
fn test_schedule_last_balance_near_zero() {
    let result = build_schedule(&personal_loan()).unwrap();
    let last = result.result.schedule.last().unwrap();
    assert!(last.closing_balance < dec!(0.01));
}

#[test]
fn test_schedule_interest_declines_over_time() {
    let result = build_schedule(&personal_loan()).unwrap();
    let schedule = &result.result.schedule;

    for pair in schedule.windows(2) {
        assert!(pair[1].interest < pair[0].interest);
    }
}

#[test]
fn test_long_tenor_schedule() {
    // 20-year home loan: 240 rows, interest dominates early payments
    let terms = LoanTerms {
        principal: dec!(5_000_000),
        annual_rate_pct: dec!(8.5),
        term_months: 240,
    };
    let result = build_schedule(&terms).unwrap();
    let out = &result.result;

    assert_eq!(out.schedule.len(), 240);
    let first = &out.schedule[0];
    assert!(first.interest > first.principal);
    assert!(out.total_interest > dec!(0));
}

// ===========================================================================
// Payoff tests
// ===========================================================================

#[test]
fn test_payoff_ten_percent_extra() {
    let input = PayoffInput {
        terms: personal_loan(),
        extra_payment_factor: dec!(0.10),
        lump_sum: Decimal::ZERO,
        lump_sum_month: 0,
        payment_override: None,
    };
    let result = simulate_payoff(&input).unwrap();
    let out = &result.result;

    assert!(out.fully_repaid);
    assert!(out.months_to_payoff < 36);
    assert!(out.interest_saved > Decimal::ZERO);
    // Total interest under acceleration must be below the baseline
    assert!(out.total_interest_paid < out.baseline_interest);
}

#[test]
fn test_payoff_underpayment_terminates_bounded() {
    let input = PayoffInput {
        terms: LoanTerms {
            principal: dec!(1_000_000),
            annual_rate_pct: dec!(18),
            term_months: 120,
        },
        extra_payment_factor: Decimal::ZERO,
        lump_sum: Decimal::ZERO,
        lump_sum_month: 0,
        // Interest-only is 15,000/month; this can never amortise
        payment_override: Some(dec!(12_000)),
    };
    let result = simulate_payoff(&input).unwrap();
    let out = &result.result;

    assert!(!out.fully_repaid);
    assert_eq!(out.months_to_payoff, 0);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("cannot amortise")));
}

#[test]
fn test_payoff_lump_sum_and_extra_combined() {
    let input = PayoffInput {
        terms: LoanTerms {
            principal: dec!(3_000_000),
            annual_rate_pct: dec!(9),
            term_months: 240,
        },
        extra_payment_factor: dec!(0.05),
        lump_sum: dec!(300_000),
        lump_sum_month: 24,
        payment_override: None,
    };
    let result = simulate_payoff(&input).unwrap();
    let out = &result.result;

    assert!(out.fully_repaid);
    assert!(out.months_to_payoff < 240);
    assert_eq!(out.months_saved, 240 - out.months_to_payoff);
}
