//! # comfortctl-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TemperatureSource` — read the current temperature of a room
//!   - `CommandPublisher` — deliver a control command to a room's actuators
//! - Define the typed **request model** built from pre-parsed slot values
//! - Provide the `ComfortService` use-case: read, infer, publish, reply
//!
//! ## Dependency rule
//! Depends on `comfortctl-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod comfort_service;
pub mod ports;
pub mod request;
