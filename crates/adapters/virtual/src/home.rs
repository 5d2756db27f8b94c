//! Simulated home — settable per-room temperature readings.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use comfortctl_app::ports::TemperatureSource;
use comfortctl_domain::error::ComfortError;
use comfortctl_domain::room::RoomId;

use crate::error::VirtualError;

/// A fixed set of simulated rooms with adjustable temperatures.
pub struct VirtualHome {
    readings: Mutex<HashMap<RoomId, f64>>,
}

impl VirtualHome {
    /// Create a home with the given initial readings.
    #[must_use]
    pub fn new(initial: &[(RoomId, f64)]) -> Self {
        Self {
            readings: Mutex::new(initial.iter().copied().collect()),
        }
    }

    /// Overwrite the reading of an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`VirtualError::UnknownRoom`] when `room` is not part of this
    /// home; the room set is fixed at construction.
    pub fn set_temperature(&self, room: RoomId, temperature_c: f64) -> Result<(), VirtualError> {
        let mut readings = self.readings.lock().unwrap();
        match readings.get_mut(&room) {
            Some(reading) => {
                *reading = temperature_c;
                Ok(())
            }
            None => Err(VirtualError::UnknownRoom(room)),
        }
    }

    /// The rooms this home simulates, in index order.
    #[must_use]
    pub fn rooms(&self) -> Vec<RoomId> {
        let mut rooms: Vec<RoomId> = self.readings.lock().unwrap().keys().copied().collect();
        rooms.sort_unstable();
        rooms
    }
}

impl TemperatureSource for VirtualHome {
    fn read_temperature(
        &self,
        room: RoomId,
    ) -> impl Future<Output = Result<f64, ComfortError>> + Send {
        let result = self
            .readings
            .lock()
            .unwrap()
            .get(&room)
            .copied()
            .ok_or_else(|| VirtualError::UnknownRoom(room).into());
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> VirtualHome {
        VirtualHome::new(&[(RoomId::new(0), 21.5), (RoomId::new(1), 18.0)])
    }

    #[tokio::test]
    async fn should_read_initial_temperature() {
        let reading = home().read_temperature(RoomId::new(0)).await.unwrap();
        assert!((reading - 21.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_read_updated_temperature() {
        let home = home();
        home.set_temperature(RoomId::new(1), 30.0).unwrap();
        let reading = home.read_temperature(RoomId::new(1)).await.unwrap();
        assert!((reading - 30.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_fail_to_read_unknown_room() {
        let result = home().read_temperature(RoomId::new(9)).await;
        assert!(matches!(result, Err(ComfortError::Device(_))));
    }

    #[test]
    fn should_reject_setting_temperature_of_unknown_room() {
        let result = home().set_temperature(RoomId::new(9), 20.0);
        assert!(matches!(result, Err(VirtualError::UnknownRoom(_))));
    }

    #[test]
    fn should_list_rooms_in_index_order() {
        assert_eq!(home().rooms(), vec![RoomId::new(0), RoomId::new(1)]);
    }
}
