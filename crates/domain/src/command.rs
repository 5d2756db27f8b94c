//! Control command — the crisp output of one inference run.

use serde::{Deserialize, Serialize};

/// The kind of actuator a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActuatorKind {
    Heater,
    Fan,
    None,
}

impl std::fmt::Display for ActuatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heater => f.write_str("heater"),
            Self::Fan => f.write_str("fan"),
            Self::None => f.write_str("none"),
        }
    }
}

/// A concrete actuator command: run the heater or the fan for a number of
/// minutes, or do nothing.
///
/// The no-op case carries no duration, so "no actuator but nonzero minutes"
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "actuator", rename_all = "lowercase")]
pub enum ControlCommand {
    /// Run the heater for the given number of minutes.
    Heater { minutes: f64 },
    /// Run the fan for the given number of minutes.
    Fan { minutes: f64 },
    /// Leave both actuators off. Tagged `none` on the wire, matching
    /// [`ActuatorKind::None`].
    #[serde(rename = "none")]
    Idle,
}

impl ControlCommand {
    /// The actuator this command targets.
    #[must_use]
    pub fn actuator(&self) -> ActuatorKind {
        match self {
            Self::Heater { .. } => ActuatorKind::Heater,
            Self::Fan { .. } => ActuatorKind::Fan,
            Self::Idle => ActuatorKind::None,
        }
    }

    /// Run time in minutes; `0.0` for [`Idle`](Self::Idle).
    #[must_use]
    pub fn minutes(&self) -> f64 {
        match self {
            Self::Heater { minutes } | Self::Fan { minutes } => *minutes,
            Self::Idle => 0.0,
        }
    }

    /// Whether this command performs no action.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl std::fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heater { minutes } => write!(f, "heater for {minutes:.1} minutes"),
            Self::Fan { minutes } => write!(f, "fan for {minutes:.1} minutes"),
            Self::Idle => f.write_str("no action"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_actuator_kind_and_minutes() {
        let cmd = ControlCommand::Heater { minutes: 13.75 };
        assert_eq!(cmd.actuator(), ActuatorKind::Heater);
        assert!((cmd.minutes() - 13.75).abs() < f64::EPSILON);
        assert!(!cmd.is_idle());
    }

    #[test]
    fn should_report_zero_minutes_when_idle() {
        let cmd = ControlCommand::Idle;
        assert_eq!(cmd.actuator(), ActuatorKind::None);
        assert_eq!(cmd.minutes(), 0.0);
        assert!(cmd.is_idle());
    }

    #[test]
    fn should_serialize_with_actuator_tag() {
        let json = serde_json::to_string(&ControlCommand::Fan { minutes: 5.0 }).unwrap();
        assert_eq!(json, r#"{"actuator":"fan","minutes":5.0}"#);

        let json = serde_json::to_string(&ControlCommand::Idle).unwrap();
        assert_eq!(json, r#"{"actuator":"none"}"#);
    }

    #[test]
    fn should_use_the_same_wire_tag_as_the_actuator_kind() {
        // Every command's tag matches its ActuatorKind serialization.
        for cmd in [
            ControlCommand::Heater { minutes: 1.0 },
            ControlCommand::Fan { minutes: 1.0 },
            ControlCommand::Idle,
        ] {
            let tag = serde_json::to_value(cmd).unwrap()["actuator"].clone();
            let kind = serde_json::to_value(cmd.actuator()).unwrap();
            assert_eq!(tag, kind);
        }
    }

    #[test]
    fn should_display_human_readable_command() {
        let cmd = ControlCommand::Fan { minutes: 26.111 };
        assert_eq!(cmd.to_string(), "fan for 26.1 minutes");
        assert_eq!(ControlCommand::Idle.to_string(), "no action");
    }
}
