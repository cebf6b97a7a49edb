//! # Mesh Errors
//!
//! Error types for the strict entry points of the tessellation engine.
//!
//! `MeshBuilder::configure` itself never fails: out-of-range inputs are
//! clamped. These errors only surface from conversions that refuse to guess,
//! such as parsing an up-axis code, a JSON parameter request or the strict
//! [`crate::MeshBuilder::try_new`] constructor.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while interpreting sphere parameters.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Up-axis code outside `1..=3`
    #[error("Invalid up axis code: {0} (expected 1 = X, 2 = Y or 3 = Z)")]
    InvalidUpAxis(i32),

    /// Parameter request could not be decoded
    #[error("Invalid sphere request: {message}")]
    InvalidRequest {
        /// Decoder message
        message: String,
    },

    /// Strict construction rejected a value
    #[error("Invalid sphere defaults: {0}")]
    InvalidDefaults(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for MeshError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_request(err.to_string())
    }
}
