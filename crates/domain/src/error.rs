//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ComfortError`]
//! via `#[from]` (no `String` variants). Adapters wrap their failures in
//! [`ComfortError::Device`] to cross port boundaries.

use std::error::Error as StdError;

/// Top-level error for comfort-control operations.
#[derive(Debug, thiserror::Error)]
pub enum ComfortError {
    /// The requested comfort category word is not one of the five defined values.
    #[error("invalid comfort category")]
    InvalidCategory(#[from] InvalidCategoryError),

    /// The nudge direction word is neither "up" nor "down".
    #[error("invalid nudge direction")]
    InvalidDirection(#[from] InvalidDirectionError),

    /// The room identifier could not be resolved.
    #[error("invalid room")]
    InvalidRoom(#[from] InvalidRoomError),

    /// The measured temperature lies outside the supported domain and the
    /// engine is configured to reject rather than clamp.
    #[error("temperature out of range")]
    OutOfRange(#[from] OutOfRangeError),

    /// Both actuator domains defuzzified to nonzero durations with equal
    /// weight — the inference result cannot be resolved to a single command.
    #[error("inconsistent inference result")]
    Inconsistent(#[from] InconsistencyError),

    /// A collaborator (temperature source, actuation publisher) failed.
    #[error("device error")]
    Device(#[source] Box<dyn StdError + Send + Sync>),
}

impl ComfortError {
    /// Wrap an adapter failure for propagation across a port boundary.
    pub fn device(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Device(Box::new(err))
    }
}

/// An unrecognized comfort category word.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized comfort category: {word:?}")]
pub struct InvalidCategoryError {
    /// The word that failed to parse.
    pub word: String,
}

/// An unrecognized nudge direction word.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized nudge direction: {word:?}")]
pub struct InvalidDirectionError {
    /// The word that failed to parse.
    pub word: String,
}

/// An unresolvable room identifier.
#[derive(Debug, thiserror::Error)]
#[error("invalid room number: {value:?}")]
pub struct InvalidRoomError {
    /// The value that failed to resolve.
    pub value: String,
}

/// A temperature outside the supported domain.
#[derive(Debug, thiserror::Error)]
#[error("temperature {value}°C outside supported range [{min}, {max}]")]
pub struct OutOfRangeError {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Both actuators received equal nonzero inference weight.
#[derive(Debug, thiserror::Error)]
#[error("both actuators defuzzified to nonzero durations (heater {heater_minutes} min, fan {fan_minutes} min)")]
pub struct InconsistencyError {
    pub heater_minutes: f64,
    pub fan_minutes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_category_with_offending_word() {
        let err = InvalidCategoryError {
            word: "tepid".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized comfort category: \"tepid\"");
    }

    #[test]
    fn should_convert_invalid_category_into_comfort_error() {
        let err: ComfortError = InvalidCategoryError {
            word: "tepid".to_string(),
        }
        .into();
        assert!(matches!(err, ComfortError::InvalidCategory(_)));
    }

    #[test]
    fn should_convert_invalid_direction_into_comfort_error() {
        let err: ComfortError = InvalidDirectionError {
            word: "sideways".to_string(),
        }
        .into();
        assert!(matches!(err, ComfortError::InvalidDirection(_)));
        assert_eq!(err.to_string(), "invalid nudge direction");
    }

    #[test]
    fn should_display_out_of_range_with_bounds() {
        let err = OutOfRangeError {
            value: 45.0,
            min: 0.0,
            max: 40.0,
        };
        assert_eq!(
            err.to_string(),
            "temperature 45°C outside supported range [0, 40]"
        );
    }

    #[test]
    fn should_wrap_adapter_error_as_device_error() {
        let io = std::io::Error::other("sensor unreachable");
        let err = ComfortError::device(io);
        assert!(matches!(err, ComfortError::Device(_)));
        assert_eq!(err.to_string(), "device error");
    }
}
