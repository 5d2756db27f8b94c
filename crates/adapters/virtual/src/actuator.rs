//! Recording actuator — applies commands to a shadow-style state document.
//!
//! Each room carries a single `{mode, time}` state, so turning one actuator
//! on implicitly switches the other off, the way a real heater/fan relay
//! pair is driven.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use serde::Serialize;

use comfortctl_app::ports::CommandPublisher;
use comfortctl_domain::command::ControlCommand;
use comfortctl_domain::error::ComfortError;
use comfortctl_domain::room::RoomId;
use comfortctl_domain::time::{Timestamp, now};

use crate::error::VirtualError;

/// Operating mode of a room's actuator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomMode {
    Off,
    Heat,
    Cool,
}

/// Reported actuator state of one room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomState {
    pub mode: RoomMode,
    /// Remaining run time in minutes; 0 when off.
    pub time: f64,
    /// When the last command was applied.
    pub applied: Timestamp,
}

/// A simulated actuator bank that records the last applied command per room.
pub struct VirtualActuator {
    rooms: Mutex<HashMap<RoomId, RoomState>>,
}

impl VirtualActuator {
    /// Create an actuator bank for the given rooms, all initially off.
    #[must_use]
    pub fn new(rooms: &[RoomId]) -> Self {
        let initial = rooms
            .iter()
            .map(|&room| {
                (
                    room,
                    RoomState {
                        mode: RoomMode::Off,
                        time: 0.0,
                        applied: now(),
                    },
                )
            })
            .collect();
        Self {
            rooms: Mutex::new(initial),
        }
    }

    /// Current state of one room.
    #[must_use]
    pub fn room_state(&self, room: RoomId) -> Option<RoomState> {
        self.rooms.lock().unwrap().get(&room).copied()
    }

    /// The full reported state document, keyed by room (`room0`, `room1`, …).
    #[must_use]
    pub fn state_document(&self) -> serde_json::Value {
        let rooms = self.rooms.lock().unwrap();
        let mut document = serde_json::Map::new();
        for (room, state) in rooms.iter() {
            document.insert(
                room.to_string(),
                serde_json::to_value(state).unwrap_or(serde_json::Value::Null),
            );
        }
        serde_json::Value::Object(document)
    }
}

impl CommandPublisher for VirtualActuator {
    fn publish(
        &self,
        room: RoomId,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<(), ComfortError>> + Send {
        let mut rooms = self.rooms.lock().unwrap();
        let result = match rooms.get_mut(&room) {
            Some(state) => {
                *state = match command {
                    ControlCommand::Heater { minutes } => RoomState {
                        mode: RoomMode::Heat,
                        time: *minutes,
                        applied: now(),
                    },
                    ControlCommand::Fan { minutes } => RoomState {
                        mode: RoomMode::Cool,
                        time: *minutes,
                        applied: now(),
                    },
                    ControlCommand::Idle => RoomState {
                        mode: RoomMode::Off,
                        time: 0.0,
                        applied: now(),
                    },
                };
                Ok(())
            }
            None => Err(VirtualError::UnknownRoom(room).into()),
        };
        async { result }
    }
}
