//! Error types for the Nimbus3D world crate.
//!
//! Scene membership operations never fail by contract; this taxonomy serves
//! the fallible construction and validation surfaces around them (camera
//! parameters, demo configuration, event-loop startup).

use std::fmt;

/// Result type for Nimbus3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nimbus3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected configuration value (camera parameters, window size, etc.)
    InvalidConfig(String),

    /// Startup failed (window, event loop, subsystems)
    InitializationFailed(String),

    /// Platform/backend error surfaced by a collaborator (windowing, renderer)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
