use thiserror::Error;

/// Argument validation failure. The only domain error in this crate:
/// effects validate their parameters at construction and are infallible
/// afterwards.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{name} must be between {min} and {max} inclusive, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Checks that `value` lies in the closed interval `[min, max]`.
///
/// `NaN` never satisfies the interval and is rejected.
pub fn must_be_between_or_equal_to(
    value: f32,
    min: f32,
    max: f32,
    name: &'static str,
) -> Result<f32, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
