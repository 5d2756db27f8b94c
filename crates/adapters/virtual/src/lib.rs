//! # comfortctl-adapter-virtual
//!
//! Virtual/demo adapter — a simulated home for testing and demonstration.
//!
//! ## Responsibilities
//! - [`VirtualHome`] implements the `TemperatureSource` port with settable
//!   per-room readings
//! - [`VirtualActuator`] implements the `CommandPublisher` port, maintaining
//!   a per-room mode/time state document the way a real device shadow would
//!
//! ## Dependency rule
//! Depends on `comfortctl-app` and `comfortctl-domain`. Never imported by
//! them — only the binary crate wires this adapter in.

pub mod actuator;
pub mod error;
pub mod home;

pub use actuator::{RoomMode, RoomState, VirtualActuator};
pub use error::VirtualError;
pub use home::VirtualHome;
