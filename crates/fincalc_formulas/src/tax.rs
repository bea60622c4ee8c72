use serde::{Deserialize, Serialize};

use crate::validate;
use fincalc_core::{Error, Result};

/// One progressive bracket. `upto` is the upper bound of taxable
/// income covered by this bracket; `None` marks the open-ended top
/// bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slab {
    pub upto: Option<f64>,
    pub rate_pct: f64,
}

/// A complete slab table plus the rebate, cess, and standard
/// deduction rules that go with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regime {
    pub name: String,
    pub slabs: Vec<Slab>,
    /// Full rebate (tax becomes zero) when taxable income is at or
    /// below this limit.
    pub rebate_limit: f64,
    pub cess_rate_pct: f64,
    pub standard_deduction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabTax {
    pub from: f64,
    pub upto: Option<f64>,
    pub rate_pct: f64,
    pub taxable: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross_income: f64,
    pub taxable_income: f64,
    pub slab_wise: Vec<SlabTax>,
    pub base_tax: f64,
    pub rebate: f64,
    pub cess: f64,
    pub total: f64,
    pub effective_rate_pct: f64,
}

impl Regime {
    /// New regime, FY 2024-25.
    pub fn new_regime_fy2024() -> Self {
        Self {
            name: "new-regime-fy2024".to_string(),
            slabs: vec![
                Slab { upto: Some(300_000.0), rate_pct: 0.0 },
                Slab { upto: Some(700_000.0), rate_pct: 5.0 },
                Slab { upto: Some(1_000_000.0), rate_pct: 10.0 },
                Slab { upto: Some(1_200_000.0), rate_pct: 15.0 },
                Slab { upto: Some(1_500_000.0), rate_pct: 20.0 },
                Slab { upto: None, rate_pct: 30.0 },
            ],
            rebate_limit: 700_000.0,
            cess_rate_pct: 4.0,
            standard_deduction: 75_000.0,
        }
    }

    /// Old regime with the standard 2.5L/5L/10L brackets.
    pub fn old_regime() -> Self {
        Self {
            name: "old-regime".to_string(),
            slabs: vec![
                Slab { upto: Some(250_000.0), rate_pct: 0.0 },
                Slab { upto: Some(500_000.0), rate_pct: 5.0 },
                Slab { upto: Some(1_000_000.0), rate_pct: 20.0 },
                Slab { upto: None, rate_pct: 30.0 },
            ],
            rebate_limit: 500_000.0,
            cess_rate_pct: 4.0,
            standard_deduction: 50_000.0,
        }
    }

    /// Slab limits must be finite, ascending, and end open-ended;
    /// rates and rebate/cess/deduction must be non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.slabs.is_empty() {
            return Err(Error::InvalidInput("regime has no slabs".to_string()));
        }
        let mut previous = 0.0;
        for (i, slab) in self.slabs.iter().enumerate() {
            validate::non_negative("slab rate", slab.rate_pct)?;
            match slab.upto {
                Some(limit) => {
                    if !limit.is_finite() || limit <= previous {
                        return Err(Error::InvalidInput(format!(
                            "slab {} limit {} does not ascend past {}",
                            i, limit, previous
                        )));
                    }
                    previous = limit;
                }
                None => {
                    if i != self.slabs.len() - 1 {
                        return Err(Error::InvalidInput(
                            "open-ended slab must be the last one".to_string(),
                        ));
                    }
                }
            }
        }
        validate::non_negative("rebate limit", self.rebate_limit)?;
        validate::non_negative("cess rate", self.cess_rate_pct)?;
        validate::non_negative("standard deduction", self.standard_deduction)?;
        Ok(())
    }

    /// Progressive tax on `gross_income`: standard deduction first,
    /// then ascending slabs until the income is exhausted, then the
    /// full rebate at or below `rebate_limit`, then cess on what
    /// remains.
    pub fn compute(&self, gross_income: f64) -> Result<TaxBreakdown> {
        self.validate()?;
        validate::non_negative("income", gross_income)?;

        let taxable = (gross_income - self.standard_deduction).max(0.0);

        let mut slab_wise = Vec::new();
        let mut base_tax = 0.0;
        let mut lower = 0.0;
        for slab in &self.slabs {
            if taxable <= lower {
                break;
            }
            let upper = slab.upto.unwrap_or(f64::INFINITY).min(taxable);
            let portion = upper - lower;
            let tax = portion * slab.rate_pct / 100.0;
            base_tax += tax;
            slab_wise.push(SlabTax {
                from: lower,
                upto: slab.upto,
                rate_pct: slab.rate_pct,
                taxable: portion,
                tax,
            });
            lower = match slab.upto {
                Some(limit) => limit,
                None => break,
            };
        }

        let rebate = if taxable <= self.rebate_limit { base_tax } else { 0.0 };
        let after_rebate = base_tax - rebate;
        let cess = after_rebate * self.cess_rate_pct / 100.0;
        let total = after_rebate + cess;
        let effective_rate_pct = if gross_income > 0.0 {
            total / gross_income * 100.0
        } else {
            0.0
        };

        Ok(TaxBreakdown {
            gross_income,
            taxable_income: taxable,
            slab_wise,
            base_tax,
            rebate,
            cess,
            total,
            effective_rate_pct,
        })
    }
}
