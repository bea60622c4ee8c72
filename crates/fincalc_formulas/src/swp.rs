use serde::{Deserialize, Serialize};

use crate::validate;
use fincalc_core::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpPeriod {
    pub month: u32,
    pub opening: f64,
    pub interest: f64,
    pub withdrawal: f64,
    pub closing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwpResult {
    pub periods: Vec<SwpPeriod>,
    pub total_withdrawn: f64,
    pub final_balance: f64,
    /// The month the balance hit zero, if it did — possibly the last
    /// month of the horizon itself.
    pub exhausted_at: Option<u32>,
}

/// Month-by-month withdrawal plan: interest is credited on the opening
/// balance, then the withdrawal is taken. Whenever the balance reaches
/// zero — mid-plan after a partial final withdrawal, or exactly in the
/// last month — the schedule stops and `exhausted_at` records the month.
pub fn schedule(
    corpus: f64,
    withdrawal: f64,
    annual_rate_pct: f64,
    months: u32,
) -> Result<SwpResult> {
    validate::positive("corpus", corpus)?;
    validate::positive("withdrawal", withdrawal)?;
    validate::non_negative("annual rate", annual_rate_pct)?;
    validate::at_least_one("number of months", months)?;

    let r = annual_rate_pct / 12.0 / 100.0;
    let mut periods = Vec::new();
    let mut balance = corpus;
    let mut total_withdrawn = 0.0;
    let mut exhausted_at = None;

    for month in 1..=months {
        let opening = balance;
        let interest = opening * r;
        let available = opening + interest;
        let drawn = withdrawal.min(available);
        balance = available - drawn;
        total_withdrawn += drawn;
        periods.push(SwpPeriod {
            month,
            opening,
            interest,
            withdrawal: drawn,
            closing: balance,
        });
        if balance <= 0.0 {
            exhausted_at = Some(month);
            break;
        }
    }

    Ok(SwpResult {
        periods,
        total_withdrawn,
        final_balance: balance,
        exhausted_at,
    })
}
