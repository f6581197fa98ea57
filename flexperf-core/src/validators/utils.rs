//! Limit checks shared by the input validator
//!
//! Each check maps a violated limit to the error the caller asked for, so
//! the validator reads as a list of `?` lines in check order. Limits are
//! inclusive: a value exactly at the limit passes.

use crate::errors::{TakeoffPerformanceError, ValidationResult};

/// Fail with `error` if `value` is above `max`
pub fn check_max(value: f64, max: f64, error: TakeoffPerformanceError) -> ValidationResult<()> {
    if value > max {
        log_debug!("Validation: {} above limit {} ({:?})", value, max, error);
        Err(error)
    } else {
        Ok(())
    }
}

/// Fail with `error` if `value` is below `min`
pub fn check_min(value: f64, min: f64, error: TakeoffPerformanceError) -> ValidationResult<()> {
    if value < min {
        log_debug!("Validation: {} below limit {} ({:?})", value, min, error);
        Err(error)
    } else {
        Ok(())
    }
}

/// Fail with `error` if `value` is outside `[min, max]`
pub fn check_range(
    value: f64,
    min: f64,
    max: f64,
    error: TakeoffPerformanceError,
) -> ValidationResult<()> {
    check_min(value, min, error)?;
    check_max(value, max, error)
}
