//! Temperature-source port — where room temperature readings come from.

use std::future::Future;

use comfortctl_domain::error::ComfortError;
use comfortctl_domain::room::RoomId;

/// Source of current room temperatures.
///
/// This is a **port** — adapters provide readings from whatever backs them
/// (a simulated home, a sensor bus, a device shadow). Read failures surface
/// as [`ComfortError::Device`]; the use-case layer does not retry.
pub trait TemperatureSource: Send + Sync {
    /// Current temperature of `room` in degrees Celsius.
    fn read_temperature(
        &self,
        room: RoomId,
    ) -> impl Future<Output = Result<f64, ComfortError>> + Send;
}

/// A shared adapter is still a source.
impl<T: TemperatureSource> TemperatureSource for std::sync::Arc<T> {
    fn read_temperature(
        &self,
        room: RoomId,
    ) -> impl Future<Output = Result<f64, ComfortError>> + Send {
        self.as_ref().read_temperature(room)
    }
}
