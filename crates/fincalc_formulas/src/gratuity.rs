use serde::{Deserialize, Serialize};

use crate::validate;
use fincalc_core::Result;

/// Statutory ceiling under the Payment of Gratuity Act.
pub const STATUTORY_CAP: f64 = 2_000_000.0;

/// Minimum continuous service for eligibility.
pub const MIN_SERVICE_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GratuityResult {
    pub eligible: bool,
    pub amount: f64,
    pub capped: bool,
}

/// Gratuity payable: `salary × 15/26 × completed years`, where a final
/// part-year of six months or more counts as a full year. Below five
/// years of service the result is zero with `eligible == false`.
pub fn amount(monthly_salary: f64, years_of_service: f64) -> Result<GratuityResult> {
    validate::positive("monthly salary", monthly_salary)?;
    validate::non_negative("years of service", years_of_service)?;

    if years_of_service < MIN_SERVICE_YEARS {
        return Ok(GratuityResult {
            eligible: false,
            amount: 0.0,
            capped: false,
        });
    }

    let completed_years = years_of_service.round();
    let raw = monthly_salary * 15.0 / 26.0 * completed_years;
    let capped = raw > STATUTORY_CAP;
    Ok(GratuityResult {
        eligible: true,
        amount: if capped { STATUTORY_CAP } else { raw },
        capped,
    })
}
