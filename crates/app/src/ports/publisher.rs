//! Command-publisher port — where computed control commands go.

use std::future::Future;

use comfortctl_domain::command::ControlCommand;
use comfortctl_domain::error::ComfortError;
use comfortctl_domain::room::RoomId;

/// Sink for computed actuator commands.
///
/// This is a **port** — adapters translate a [`ControlCommand`] into a
/// device-specific update (flip a relay, patch a state document). The
/// use-case layer neither knows nor cares about the transport or persistence
/// format behind it.
pub trait CommandPublisher: Send + Sync {
    /// Deliver `command` to the actuators of `room`.
    fn publish(
        &self,
        room: RoomId,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<(), ComfortError>> + Send;
}

/// A shared adapter is still a sink.
impl<P: CommandPublisher> CommandPublisher for std::sync::Arc<P> {
    fn publish(
        &self,
        room: RoomId,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<(), ComfortError>> + Send {
        self.as_ref().publish(room, command)
    }
}
