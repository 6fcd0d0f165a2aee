//! # smarthome-app
//!
//! Application layer — the device registry and the controller that drives it.
//!
//! ## Responsibilities
//! - Own devices in insertion order (`DeviceRegistry`)
//! - Dispatch capability-filtered bulk operations (`turn_on_all`, `turn_off_all`)
//! - Run scenes across named devices (quick breakfast, night cleaning)
//! - Offer targeted single-device operations with explicit errors
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only (plus `tracing` for instrumentation).
//! Never imports the binary crate.

pub mod controller;
pub mod registry;
pub mod scene;
