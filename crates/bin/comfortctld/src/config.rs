//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `comfortctl.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use comfortctl_domain::engine::OutOfRangePolicy;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Inference engine settings.
    pub engine: EngineSettings,
    /// Simulated rooms and their starting temperatures.
    pub rooms: Vec<RoomConfig>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Inference engine configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// What to do with readings outside [0, 40] °C: `clamp` or `reject`.
    pub out_of_range: String,
}

/// One simulated room.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RoomConfig {
    /// 1-based room number as users refer to it.
    pub number: u8,
    /// Initial temperature reading in °C.
    pub temperature: f64,
}

impl Config {
    /// Load configuration from `comfortctl.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// merged configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("comfortctl.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("COMFORTCTL_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("COMFORTCTL_OUT_OF_RANGE") {
            self.engine.out_of_range = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if parse_policy(&self.engine.out_of_range).is_none() {
            return Err(ConfigError::Validation(format!(
                "engine.out_of_range must be 'clamp' or 'reject', got '{}'",
                self.engine.out_of_range
            )));
        }
        if self.rooms.is_empty() {
            return Err(ConfigError::Validation(
                "at least one room must be configured".to_string(),
            ));
        }
        for (i, room) in self.rooms.iter().enumerate() {
            if room.number == 0 {
                return Err(ConfigError::Validation(
                    "room numbers start at 1".to_string(),
                ));
            }
            if !room.temperature.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "room {} has a non-finite temperature",
                    room.number
                )));
            }
            if self.rooms[..i].iter().any(|r| r.number == room.number) {
                return Err(ConfigError::Validation(format!(
                    "room {} is configured twice",
                    room.number
                )));
            }
        }
        Ok(())
    }

    /// The configured out-of-range policy. Only meaningful after a
    /// successful [`Config::load`]; unknown values fall back to clamping.
    #[must_use]
    pub fn out_of_range_policy(&self) -> OutOfRangePolicy {
        parse_policy(&self.engine.out_of_range).unwrap_or_default()
    }
}

fn parse_policy(value: &str) -> Option<OutOfRangePolicy> {
    match value {
        "clamp" => Some(OutOfRangePolicy::Clamp),
        "reject" => Some(OutOfRangePolicy::Reject),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            engine: EngineSettings::default(),
            // Three rooms at a neutral 20 °C, matching the demo home.
            rooms: (1..=3)
                .map(|number| RoomConfig {
                    number,
                    temperature: 20.0,
                })
                .collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "comfortctld=info,comfortctl_app=info,comfortctl_domain=info".to_string(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            out_of_range: "clamp".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_default_rooms(mut config: Config) -> Config {
        config.rooms = vec![RoomConfig {
            number: 1,
            temperature: 20.0,
        }];
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.out_of_range, "clamp");
        assert!(config.logging.filter.contains("comfortctld=info"));
        assert_eq!(config.rooms.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logging]
            filter = 'debug'

            [engine]
            out_of_range = 'reject'

            [[rooms]]
            number = 1
            temperature = 21.5

            [[rooms]]
            number = 2
            temperature = 18.0
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.out_of_range_policy(), OutOfRangePolicy::Reject);
        assert_eq!(config.rooms.len(), 2);
        assert_eq!(config.rooms[1].number, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.engine.out_of_range, "clamp");
    }

    #[test]
    fn should_reject_unknown_out_of_range_policy() {
        let mut config = with_default_rooms(Config::default());
        config.engine.out_of_range = "panic".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_empty_room_list() {
        let mut config = Config::default();
        config.rooms.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_room_number_zero() {
        let mut config = with_default_rooms(Config::default());
        config.rooms[0].number = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_duplicate_room_numbers() {
        let mut config = with_default_rooms(Config::default());
        config.rooms.push(RoomConfig {
            number: 1,
            temperature: 25.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_finite_temperature() {
        let mut config = with_default_rooms(Config::default());
        config.rooms[0].temperature = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_configuration() {
        let config = with_default_rooms(Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
