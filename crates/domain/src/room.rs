//! Room identifier — a small zero-based index into the set of known rooms.

use serde::{Deserialize, Serialize};

use crate::error::InvalidRoomError;

/// Identifier of a room, zero-based.
///
/// Users address rooms with 1-based numbers ("room one"); the 1-based form is
/// converted at the request boundary via [`RoomId::from_user_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(u8);

impl RoomId {
    /// Wrap a zero-based room index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Convert a 1-based user-facing room number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRoomError`] when `number` is zero.
    pub fn from_user_number(number: u8) -> Result<Self, InvalidRoomError> {
        match number.checked_sub(1) {
            Some(index) => Ok(Self(index)),
            None => Err(InvalidRoomError {
                value: number.to_string(),
            }),
        }
    }

    /// Zero-based index.
    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// 1-based number as users say it. Widened so the highest index does
    /// not overflow.
    #[must_use]
    pub fn user_number(self) -> u16 {
        u16::from(self.0) + 1
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_user_number_to_zero_based_index() {
        let room = RoomId::from_user_number(3).unwrap();
        assert_eq!(room.index(), 2);
        assert_eq!(room.user_number(), 3);
    }

    #[test]
    fn should_report_user_number_for_the_highest_index() {
        assert_eq!(RoomId::new(255).user_number(), 256);
    }

    #[test]
    fn should_reject_user_number_zero() {
        let err = RoomId::from_user_number(0).unwrap_err();
        assert_eq!(err.value, "0");
    }

    #[test]
    fn should_display_as_zero_based_room_key() {
        assert_eq!(RoomId::new(0).to_string(), "room0");
        assert_eq!(RoomId::from_user_number(1).unwrap().to_string(), "room0");
    }

    #[test]
    fn should_serialize_as_bare_index() {
        let json = serde_json::to_string(&RoomId::new(2)).unwrap();
        assert_eq!(json, "2");
    }
}
