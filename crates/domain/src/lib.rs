//! # smarthome-domain
//!
//! Pure domain model for the smarthome simulator.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define **Capabilities** (tags plus one operation trait per capability:
//!   switchable, dimmable, networkable, …)
//! - Define **Devices** (a name and a kind; the kind fixes the capability set)
//! - Define the concrete device variants and their canned status strings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the binary.

pub mod error;

pub mod capability;
pub mod device;
