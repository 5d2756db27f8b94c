//! Virtual adapter error types.

use comfortctl_domain::error::ComfortError;
use comfortctl_domain::room::RoomId;

/// Errors specific to the virtual adapter.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// The addressed room is not part of the simulated home.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),
}

impl From<VirtualError> for ComfortError {
    fn from(err: VirtualError) -> Self {
        ComfortError::device(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_room_with_room_key() {
        let err = VirtualError::UnknownRoom(RoomId::new(7));
        assert_eq!(err.to_string(), "unknown room: room7");
    }

    #[test]
    fn should_convert_to_device_error() {
        let err: ComfortError = VirtualError::UnknownRoom(RoomId::new(0)).into();
        assert!(matches!(err, ComfortError::Device(_)));
    }
}
