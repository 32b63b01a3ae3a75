//! Shared compounding primitives.
//!
//! Every engine that grows or discounts a value goes through `compound`,
//! so the growth and inflation calculators agree on the arithmetic exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Rate;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Convert a percentage (12 = 12%) into a fractional rate (0.12).
pub fn pct_to_rate(pct: Decimal) -> Rate {
    pct / dec!(100)
}

/// Convert an annual percentage rate into a monthly fractional rate.
/// 12% p.a. -> 0.01 per month (nominal, not effective).
pub fn monthly_rate_from_annual_pct(annual_pct: Decimal) -> Rate {
    annual_pct / dec!(12) / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_basic() {
        // 1.1^3 = 1.331
        assert_eq!(compound(dec!(0.10), 3), dec!(1.331));
    }

    #[test]
    fn test_compound_zero_periods() {
        assert_eq!(compound(dec!(0.07), 0), Decimal::ONE);
    }

    #[test]
    fn test_compound_zero_rate() {
        assert_eq!(compound(Decimal::ZERO, 120), Decimal::ONE);
    }

    #[test]
    fn test_monthly_rate_from_annual_pct() {
        assert_eq!(monthly_rate_from_annual_pct(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate_from_annual_pct(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_pct_to_rate() {
        assert_eq!(pct_to_rate(dec!(6)), dec!(0.06));
    }
}
