//! Common error types used across the workspace.
//!
//! Each failure condition has its own typed error, and [`SmartHomeError`]
//! gathers them through `#[from]` conversions. Bulk and scene operations
//! never surface these; they only appear on explicit lookups and targeted
//! single-device calls.

use crate::capability::Capability;

/// Top-level error for the smart home domain.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("unsupported capability")]
    Unsupported(#[from] UnsupportedError),

    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// No item with the given identifier exists.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id:?} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A device exists but does not implement the requested capability.
#[derive(Debug, thiserror::Error)]
#[error("device {device:?} does not support {capability}")]
pub struct UnsupportedError {
    pub device: String,
    pub capability: Capability,
}

/// Input rejected before it reaches the domain model.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown device kind {0:?}")]
    UnknownDeviceKind(String),
}
