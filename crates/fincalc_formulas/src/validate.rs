use fincalc_core::{Error, Result};

pub(crate) fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "{} must be a positive number, got {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput(format!(
            "{} must be zero or positive, got {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn at_least_one(name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidInput(format!("{} must be at least 1", name)));
    }
    Ok(())
}
