//! Typed comfort requests, built from pre-parsed slot values.
//!
//! The upstream request parser (voice assistant, CLI, whatever drives the
//! service) delivers a room slot and, for set requests, a comfort word slot.
//! Slot values are plain strings; this module turns them into closed types
//! so nothing downstream ever handles a raw string again.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use comfortctl_domain::error::{ComfortError, InvalidDirectionError, InvalidRoomError};
use comfortctl_domain::level::ComfortLevel;
use comfortctl_domain::room::RoomId;

/// Direction of a constant-duration comfort nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeDirection {
    /// Slightly warmer: engage the heater.
    Up,
    /// Slightly cooler: engage the fan.
    Down,
}

impl std::fmt::Display for NudgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

impl FromStr for NudgeDirection {
    type Err = InvalidDirectionError;

    /// Parse a spoken direction word. Accepts `"up"`/`"warmer"`/`"increase"`
    /// and `"down"`/`"cooler"`/`"decrease"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "warmer" | "increase" => Ok(Self::Up),
            "down" | "cooler" | "decrease" => Ok(Self::Down),
            _ => Err(InvalidDirectionError {
                word: s.to_string(),
            }),
        }
    }
}

/// A request addressed to the comfort service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComfortRequest {
    /// Make a room feel like the target comfort level.
    SetComfort { room: RoomId, target: ComfortLevel },
    /// Shift a room slightly warmer or cooler for a fixed run time,
    /// bypassing the inference engine.
    Nudge {
        room: RoomId,
        direction: NudgeDirection,
    },
    /// Report the current temperature of a room in qualitative terms.
    GetTemperature { room: RoomId },
}

impl ComfortRequest {
    /// Build a set-comfort request from raw slot values: a 1-based room
    /// number and a comfort word.
    ///
    /// # Errors
    ///
    /// Returns [`ComfortError::InvalidRoom`] when the room slot is not a
    /// positive number, or [`ComfortError::InvalidCategory`] when the comfort
    /// word is not one of the five defined values.
    pub fn set_from_slots(room_slot: &str, comfort_slot: &str) -> Result<Self, ComfortError> {
        let room = parse_room_slot(room_slot)?;
        let target: ComfortLevel = comfort_slot.parse()?;
        Ok(Self::SetComfort { room, target })
    }

    /// Build a constant-nudge request from raw slot values: a 1-based room
    /// number and a direction word.
    ///
    /// # Errors
    ///
    /// Returns [`ComfortError::InvalidRoom`] when the room slot is not a
    /// positive number, or [`ComfortError::InvalidDirection`] when the
    /// direction word is not an up/down synonym.
    pub fn nudge_from_slots(room_slot: &str, direction_slot: &str) -> Result<Self, ComfortError> {
        let room = parse_room_slot(room_slot)?;
        let direction: NudgeDirection = direction_slot.parse()?;
        Ok(Self::Nudge { room, direction })
    }

    /// Build a get-temperature request from a raw 1-based room number slot.
    ///
    /// # Errors
    ///
    /// Returns [`ComfortError::InvalidRoom`] when the room slot is not a
    /// positive number.
    pub fn get_from_slots(room_slot: &str) -> Result<Self, ComfortError> {
        Ok(Self::GetTemperature {
            room: parse_room_slot(room_slot)?,
        })
    }

    /// The room this request addresses.
    #[must_use]
    pub fn room(&self) -> RoomId {
        match self {
            Self::SetComfort { room, .. }
            | Self::Nudge { room, .. }
            | Self::GetTemperature { room } => *room,
        }
    }
}

fn parse_room_slot(slot: &str) -> Result<RoomId, InvalidRoomError> {
    let number: u8 = slot.trim().parse().map_err(|_| InvalidRoomError {
        value: slot.to_string(),
    })?;
    RoomId::from_user_number(number)
}
