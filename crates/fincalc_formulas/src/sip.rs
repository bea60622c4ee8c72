use serde::{Deserialize, Serialize};

use crate::validate;
use fincalc_core::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipBreakdown {
    pub future_value: f64,
    pub invested: f64,
    pub wealth_gained: f64,
}

/// Future value of a monthly SIP with contributions at the start of
/// each month: `A × ((1+r)^n − 1)/r × (1+r)`. A zero rate degenerates
/// to `A × n`.
pub fn future_value(monthly_amount: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    validate::positive("monthly amount", monthly_amount)?;
    validate::non_negative("annual rate", annual_rate_pct)?;
    validate::at_least_one("tenure in months", months)?;

    let n = months as f64;
    let r = annual_rate_pct / 12.0 / 100.0;
    if r == 0.0 {
        return Ok(monthly_amount * n);
    }
    Ok(monthly_amount * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r))
}

pub fn breakdown(monthly_amount: f64, annual_rate_pct: f64, months: u32) -> Result<SipBreakdown> {
    let fv = future_value(monthly_amount, annual_rate_pct, months)?;
    let invested = monthly_amount * months as f64;
    Ok(SipBreakdown {
        future_value: fv,
        invested,
        wealth_gained: fv - invested,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_rate_is_plain_sum() {
        let fv = future_value(5_000.0, 0.0, 24).unwrap();
        assert_eq!(fv, 120_000.0);
    }

    #[test]
    fn positive_rate_beats_plain_sum() {
        let b = breakdown(5_000.0, 12.0, 120).unwrap();
        assert!(b.wealth_gained > 0.0);
        assert!((b.invested - 600_000.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(future_value(0.0, 12.0, 12).is_err());
        assert!(future_value(5000.0, -1.0, 12).is_err());
        assert!(future_value(5000.0, 12.0, 0).is_err());
    }

    proptest! {
        #[test]
        fn wealth_gained_increases_with_rate(
            amount in 500.0..100_000.0f64,
            rate in 0.1..25.0f64,
            months in 2u32..480,
        ) {
            let lower = breakdown(amount, rate, months).unwrap();
            let higher = breakdown(amount, rate + 0.5, months).unwrap();
            prop_assert!(higher.wealth_gained > lower.wealth_gained);
        }
    }
}
