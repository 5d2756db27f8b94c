//! End-to-end smoke tests for the full comfortctld stack.
//!
//! Each test wires the real virtual adapters into the real comfort service
//! and drives it the way the daemon would, then inspects the actuator state
//! document the way a device shadow consumer would.

use std::sync::Arc;

use comfortctl_adapter_virtual::{RoomMode, VirtualActuator, VirtualHome};
use comfortctl_app::comfort_service::ComfortService;
use comfortctl_app::request::ComfortRequest;
use comfortctl_domain::engine::EngineConfig;
use comfortctl_domain::level::ComfortLevel;
use comfortctl_domain::room::RoomId;

struct Stack {
    home: Arc<VirtualHome>,
    actuator: Arc<VirtualActuator>,
    service: ComfortService<Arc<VirtualHome>, Arc<VirtualActuator>>,
}

/// Build a fully-wired service over a three-room home.
fn stack(temperatures: [f64; 3]) -> Stack {
    let rooms = [RoomId::new(0), RoomId::new(1), RoomId::new(2)];
    let readings: Vec<(RoomId, f64)> = rooms.iter().copied().zip(temperatures).collect();

    let home = Arc::new(VirtualHome::new(&readings));
    let actuator = Arc::new(VirtualActuator::new(&rooms));
    let service = ComfortService::new(
        EngineConfig::build(),
        Arc::clone(&home),
        Arc::clone(&actuator),
    );

    Stack {
        home,
        actuator,
        service,
    }
}

#[tokio::test]
async fn should_heat_a_cool_room_toward_warm() {
    let stack = stack([12.5, 20.0, 20.0]);
    let request = ComfortRequest::set_from_slots("1", "warm").unwrap();

    let reply = stack.service.handle(request).await.unwrap();
    assert_eq!(reply.speech, "Making it feel warm in room 1");

    let state = stack.actuator.room_state(RoomId::new(0)).unwrap();
    assert_eq!(state.mode, RoomMode::Heat);
    assert!((state.time - 13.75).abs() < 1e-6);
}

#[tokio::test]
async fn should_cool_a_hot_room_toward_cold() {
    let stack = stack([20.0, 37.0, 20.0]);
    let request = ComfortRequest::set_from_slots("2", "cold").unwrap();

    stack.service.handle(request).await.unwrap();

    let state = stack.actuator.room_state(RoomId::new(1)).unwrap();
    assert_eq!(state.mode, RoomMode::Cool);
    assert!((state.time - 26.11).abs() < 0.5);
}

#[tokio::test]
async fn should_leave_a_comfortable_room_untouched() {
    let stack = stack([20.0, 20.0, 20.0]);

    stack
        .service
        .set_comfort(RoomId::new(2), ComfortLevel::Comfortable)
        .await
        .unwrap();

    let state = stack.actuator.room_state(RoomId::new(2)).unwrap();
    assert_eq!(state.mode, RoomMode::Off);
    assert_eq!(state.time, 0.0);
}

#[tokio::test]
async fn should_switch_from_heating_to_cooling_when_the_target_flips() {
    let stack = stack([12.5, 20.0, 20.0]);
    let room = RoomId::new(0);

    stack
        .service
        .set_comfort(room, ComfortLevel::Warm)
        .await
        .unwrap();
    assert_eq!(stack.actuator.room_state(room).unwrap().mode, RoomMode::Heat);

    stack
        .service
        .set_comfort(room, ComfortLevel::Cold)
        .await
        .unwrap();
    let state = stack.actuator.room_state(room).unwrap();
    assert_eq!(state.mode, RoomMode::Cool);
    assert!(state.time > 0.0);
}

#[tokio::test]
async fn should_run_the_heater_briefly_on_an_upward_nudge() {
    let stack = stack([20.0, 20.0, 20.0]);
    let request = ComfortRequest::nudge_from_slots("1", "up").unwrap();

    let reply = stack.service.handle(request).await.unwrap();
    assert_eq!(reply.speech, "Making it slightly warmer in room 1");

    let state = stack.actuator.room_state(RoomId::new(0)).unwrap();
    assert_eq!(state.mode, RoomMode::Heat);
    assert!((state.time - 3.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn should_describe_temperature_after_a_reading_change() {
    let stack = stack([20.0, 20.0, 20.0]);
    stack.home.set_temperature(RoomId::new(1), 37.0).unwrap();

    let reply = stack
        .service
        .handle(ComfortRequest::get_from_slots("2").unwrap())
        .await
        .unwrap();
    assert_eq!(reply.speech, "The temperature in room 2 is hot");

    // A get never touches the actuators.
    let document = stack.actuator.state_document();
    assert_eq!(document["room1"]["mode"], "OFF");
}

#[tokio::test]
async fn should_expose_the_full_state_document() {
    let stack = stack([12.5, 37.0, 20.0]);

    stack
        .service
        .set_comfort(RoomId::new(0), ComfortLevel::Warm)
        .await
        .unwrap();
    stack
        .service
        .set_comfort(RoomId::new(1), ComfortLevel::Cold)
        .await
        .unwrap();

    let document = stack.actuator.state_document();
    assert_eq!(document["room0"]["mode"], "HEAT");
    assert_eq!(document["room1"]["mode"], "COOL");
    assert_eq!(document["room2"]["mode"], "OFF");
    assert!(document["room0"]["applied"].is_string());
}

#[tokio::test]
async fn should_fail_cleanly_for_a_room_outside_the_home() {
    let stack = stack([20.0, 20.0, 20.0]);
    let request = ComfortRequest::set_from_slots("9", "warm").unwrap();

    let result = stack.service.handle(request).await;
    assert!(result.is_err());
    assert_eq!(stack.actuator.state_document()["room8"], serde_json::Value::Null);
}
