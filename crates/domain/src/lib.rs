//! # comfortctl-domain
//!
//! Pure domain model for the comfortctl room-comfort control system.
//!
//! ## Responsibilities
//! - Foundational types: comfort categories, actuator kinds, room identifiers,
//!   error conventions, timestamps
//! - Define **membership functions** (trapezoids sampled over bounded domains)
//! - Provide the **fuzzy inference engine**: fuzzification, rule evaluation,
//!   aggregation, centroid defuzzification, and command selection
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//!
//! The engine is purely functional: [`engine::EngineConfig`] is built once and
//! is thereafter read-only, so [`engine::compute_control_action`] can be called
//! concurrently from any number of tasks without synchronization.

pub mod command;
pub mod engine;
pub mod error;
pub mod level;
pub mod membership;
pub mod room;
pub mod time;
