use serde::{Deserialize, Serialize};

use crate::validate;
use fincalc_core::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub monthly_installment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// One row of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiPeriod {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Standard amortization formula: `P × r × (1+r)^n / ((1+r)^n − 1)`
/// with monthly rate `r`. A zero rate degenerates to `P / n`.
pub fn monthly_installment(principal: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    validate::positive("principal", principal)?;
    validate::non_negative("annual rate", annual_rate_pct)?;
    validate::at_least_one("tenure in months", months)?;

    let n = months as f64;
    let r = annual_rate_pct / 12.0 / 100.0;
    if r == 0.0 {
        return Ok(principal / n);
    }
    let factor = (1.0 + r).powf(n);
    Ok(principal * r * factor / (factor - 1.0))
}

pub fn breakdown(principal: f64, annual_rate_pct: f64, months: u32) -> Result<EmiBreakdown> {
    let installment = monthly_installment(principal, annual_rate_pct, months)?;
    let total_payment = installment * months as f64;
    Ok(EmiBreakdown {
        monthly_installment: installment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Month-by-month amortization. The final installment settles whatever
/// balance float drift leaves over, so the last row always closes at 0.
pub fn schedule(principal: f64, annual_rate_pct: f64, months: u32) -> Result<Vec<EmiPeriod>> {
    let installment = monthly_installment(principal, annual_rate_pct, months)?;
    let r = annual_rate_pct / 12.0 / 100.0;

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;
    for month in 1..=months {
        let interest = balance * r;
        let principal_part = if month == months {
            balance
        } else {
            installment - interest
        };
        balance = (balance - principal_part).max(0.0);
        rows.push(EmiPeriod {
            month,
            interest,
            principal: principal_part,
            closing_balance: balance,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn worked_example_from_content() {
        // ₹5,00,000 at 10% for 36 months ≈ ₹16,134/month
        let emi = monthly_installment(500_000.0, 10.0, 36).unwrap();
        assert!((emi - 16_134.0).abs() < 1.0, "got {}", emi);
    }

    #[test]
    fn zero_rate_is_straight_division() {
        let emi = monthly_installment(120_000.0, 0.0, 12).unwrap();
        assert_eq!(emi, 10_000.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(monthly_installment(-1.0, 10.0, 12).is_err());
        assert!(monthly_installment(0.0, 10.0, 12).is_err());
        assert!(monthly_installment(1000.0, -0.1, 12).is_err());
        assert!(monthly_installment(1000.0, 10.0, 0).is_err());
        assert!(monthly_installment(f64::NAN, 10.0, 12).is_err());
    }

    #[test]
    fn schedule_closes_to_zero() {
        let rows = schedule(500_000.0, 10.0, 36).unwrap();
        assert_eq!(rows.len(), 36);
        assert_eq!(rows.last().unwrap().closing_balance, 0.0);
        let repaid: f64 = rows.iter().map(|row| row.principal).sum();
        assert!((repaid - 500_000.0).abs() < 1e-6);
    }

    #[test]
    fn schedule_interest_declines() {
        let rows = schedule(1_000_000.0, 8.5, 120).unwrap();
        for pair in rows.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
        }
    }

    proptest! {
        #[test]
        fn total_repayment_covers_principal(
            principal in 1_000.0..10_000_000.0f64,
            rate in 0.0..30.0f64,
            months in 1u32..360,
        ) {
            let b = breakdown(principal, rate, months).unwrap();
            prop_assert!(b.total_payment >= principal - 1e-6 * principal);
        }
    }
}
