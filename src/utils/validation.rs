//! Input validation utilities

use crate::constants::MAX_RESULT_VALUE;

/// Problems with a submitted result value
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResultValueError {
    #[error("Result must be a number")]
    NotANumber,

    #[error("Result must be a positive number")]
    NotPositive,

    #[error("Result is too large")]
    TooLarge,
}

/// Parse an optional result value from a form field.
///
/// Blank input means "no value". Anything else must be a finite number
/// greater than zero and below [`MAX_RESULT_VALUE`].
pub fn parse_result_value(raw: Option<&str>) -> Result<Option<f64>, ResultValueError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let value: f64 = raw.parse().map_err(|_| ResultValueError::NotANumber)?;
    if !value.is_finite() {
        return Err(ResultValueError::NotANumber);
    }
    if value <= 0.0 {
        return Err(ResultValueError::NotPositive);
    }
    if value >= MAX_RESULT_VALUE {
        return Err(ResultValueError::TooLarge);
    }

    Ok(Some(value))
}

/// Treat blank query/form values as absent
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
