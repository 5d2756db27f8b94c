//! Comfort service — use-cases for set-comfort and get-temperature requests.

use comfortctl_domain::command::ControlCommand;
use comfortctl_domain::engine::{EngineConfig, compute_control_action, fuzzify};
use comfortctl_domain::error::ComfortError;
use comfortctl_domain::level::ComfortLevel;
use comfortctl_domain::room::RoomId;
use serde::{Deserialize, Serialize};

use crate::ports::{CommandPublisher, TemperatureSource};
use crate::request::{ComfortRequest, NudgeDirection};

/// Fixed run time of a constant nudge, in minutes.
const NUDGE_MINUTES: f64 = 3.0;

/// A user-facing reply: a card title plus the spoken text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub title: String,
    pub speech: String,
}

/// Application service wiring the inference engine to its collaborators.
///
/// Holds the [`EngineConfig`] built once at startup plus the two ports; every
/// call only reads the config, so one service instance can be shared freely.
pub struct ComfortService<T, P> {
    config: EngineConfig,
    source: T,
    publisher: P,
}

impl<T: TemperatureSource, P: CommandPublisher> ComfortService<T, P> {
    /// Create a new service around an engine config and the two ports.
    pub fn new(config: EngineConfig, source: T, publisher: P) -> Self {
        Self {
            config,
            source,
            publisher,
        }
    }

    /// Dispatch a typed request.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying use-case.
    pub async fn handle(&self, request: ComfortRequest) -> Result<Reply, ComfortError> {
        match request {
            ComfortRequest::SetComfort { room, target } => self.set_comfort(room, target).await,
            ComfortRequest::Nudge { room, direction } => self.nudge(room, direction).await,
            ComfortRequest::GetTemperature { room } => self.describe_temperature(room).await,
        }
    }

    /// Make `room` feel like `target`: read the current temperature, run the
    /// inference engine, and publish the resulting command.
    ///
    /// # Errors
    ///
    /// Returns [`ComfortError::Device`] when the temperature source or the
    /// publisher fails, or an engine error for out-of-range readings under a
    /// rejecting policy.
    pub async fn set_comfort(
        &self,
        room: RoomId,
        target: ComfortLevel,
    ) -> Result<Reply, ComfortError> {
        let temperature = self.source.read_temperature(room).await?;
        let degrees = fuzzify(&self.config, temperature);
        tracing::debug!(%room, temperature, ?degrees, "fuzzified reading");

        let command = compute_control_action(&self.config, temperature, target)?;
        tracing::info!(%room, %target, %command, "publishing control action");
        self.publisher.publish(room, &command).await?;

        Ok(Reply {
            title: "Set room comfort".to_string(),
            speech: format!("Making it feel {target} in room {}", room.user_number()),
        })
    }

    /// Shift `room` slightly warmer or cooler by engaging the matching
    /// actuator for a fixed run time.
    ///
    /// Bypasses the inference engine and the temperature source entirely;
    /// the nudge is an open-loop correction on top of whatever the last
    /// set-comfort run established.
    ///
    /// # Errors
    ///
    /// Returns [`ComfortError::Device`] when the publisher fails.
    pub async fn nudge(
        &self,
        room: RoomId,
        direction: NudgeDirection,
    ) -> Result<Reply, ComfortError> {
        let (command, adverb) = match direction {
            NudgeDirection::Up => (
                ControlCommand::Heater {
                    minutes: NUDGE_MINUTES,
                },
                "warmer",
            ),
            NudgeDirection::Down => (
                ControlCommand::Fan {
                    minutes: NUDGE_MINUTES,
                },
                "cooler",
            ),
        };
        tracing::info!(%room, %direction, %command, "publishing constant nudge");
        self.publisher.publish(room, &command).await?;

        Ok(Reply {
            title: "Nudge room comfort".to_string(),
            speech: format!("Making it slightly {adverb} in room {}", room.user_number()),
        })
    }

    /// Report the current temperature of `room` in qualitative terms.
    ///
    /// Bypasses the inference engine entirely; the reading is mapped onto a
    /// seven-word descriptive scale.
    ///
    /// # Errors
    ///
    /// Returns [`ComfortError::Device`] when the temperature source fails.
    pub async fn describe_temperature(&self, room: RoomId) -> Result<Reply, ComfortError> {
        let temperature = self.source.read_temperature(room).await?;
        let description = describe(temperature);
        tracing::debug!(%room, temperature, description, "describing temperature");

        Ok(Reply {
            title: "Current room temperature".to_string(),
            speech: format!(
                "The temperature in room {} is {description}",
                room.user_number()
            ),
        })
    }
}

/// Qualitative description of a temperature on a seven-word scale.
///
/// Finer-grained than the five comfort levels: the transition bands around
/// cold and hot get their own "slightly" words so a spoken reply does not
/// jump straight between extremes.
fn describe(temperature_c: f64) -> &'static str {
    match temperature_c {
        t if (0.0..=5.0).contains(&t) => "cold",
        t if t > 5.0 && t < 10.0 => "slightly cold",
        t if (10.0..=17.5).contains(&t) => "cool",
        t if t > 17.5 && t < 22.5 => "comfortable",
        t if (22.5..=30.0).contains(&t) => "warm",
        t if t > 30.0 && t < 35.0 => "slightly hot",
        t if t >= 35.0 => "hot",
        _ => "unknown",
    }
}
