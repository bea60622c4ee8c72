use crate::validate;
use fincalc_core::Result;

/// Maturity amount under periodic compounding:
/// `P × (1 + r/m)^(m×t)`.
pub fn compound(
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
    compounds_per_year: u32,
) -> Result<f64> {
    validate::positive("principal", principal)?;
    validate::non_negative("annual rate", annual_rate_pct)?;
    validate::positive("years", years)?;
    validate::at_least_one("compounding frequency", compounds_per_year)?;

    let m = compounds_per_year as f64;
    let r = annual_rate_pct / 100.0;
    Ok(principal * (1.0 + r / m).powf(m * years))
}

/// Maturity amount under simple interest: `P × (1 + r×t)`.
pub fn simple(principal: f64, annual_rate_pct: f64, years: f64) -> Result<f64> {
    validate::positive("principal", principal)?;
    validate::non_negative("annual rate", annual_rate_pct)?;
    validate::positive("years", years)?;

    Ok(principal * (1.0 + annual_rate_pct / 100.0 * years))
}

/// Fixed deposit maturity, compounded quarterly per the usual bank
/// convention.
pub fn fd_maturity(principal: f64, annual_rate_pct: f64, months: u32) -> Result<f64> {
    validate::at_least_one("tenure in months", months)?;
    compound(principal, annual_rate_pct, months as f64 / 12.0, 4)
}
