use crate::angle::{angular_velocity, Body};
use crate::error::{Result, SyzygyError};
use crate::search::SearchParams;

pub(crate) fn validate_body(b: &Body) -> Result<()> {
    // Zero would divide by zero in 360 / period; negatives and NaN have no
    // meaningful angular velocity. Subnormal periods overflow 360 / period to inf.
    let positive = b.period_days.is_finite() && b.period_days > 0.0;
    if !(positive && angular_velocity(b.period_days).is_finite()) {
        return Err(SyzygyError::InvalidPeriod {
            label: b.label,
            period: b.period_days,
        });
    }
    Ok(())
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<()> {
    // >= 180 is accepted as-is; it makes same_side trivially true, which is the caller's call.
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(SyzygyError::InvalidTolerance(tolerance));
    }
    Ok(())
}

pub fn validate_params(p: &SearchParams) -> Result<()> {
    for b in p.bodies().iter() {
        validate_body(b)?;
    }
    validate_tolerance(p.tolerance_deg)?;

    // max_days == 0 is legal: the scan is empty and reports not-found.
    Ok(())
}
