//! Error types for shatter.
//!
//! Stepping a simulation never fails. Errors only come from the edges:
//! serializing state for a renderer, reading or writing configuration
//! files, and looking up simulations by id.

use crate::registry::SimulationId;
use thiserror::Error;

/// Errors returned by export, configuration and registry operations.
#[derive(Debug, Error)]
pub enum ShatterError {
    /// No live simulation is registered under this id.
    #[error("No simulation with id {0}; it was never created or has been destroyed")]
    UnknownSimulation(SimulationId),
    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ShatterError>;
