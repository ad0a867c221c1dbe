//! # Error Types
//!
//! Structured error types for mos_core. Each variant carries enough context
//! for a caller (human or programmatic) to understand and fix the problem
//! without parsing message strings.
//!
//! ## Example
//!
//! ```rust
//! use mos_core::errors::{MosError, MosResult};
//!
//! fn validate_tox(tox_cm: f64) -> MosResult<()> {
//!     if tox_cm == 0.0 {
//!         return Err(MosError::invalid_input(
//!             "tox_cm",
//!             tox_cm.to_string(),
//!             "Oxide thickness must be nonzero",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mos_core operations
pub type MosResult<T> = Result<T, MosError>;

/// Structured error type for evaluation operations.
///
/// Every variant is a recoverable, per-call failure; no error corrupts
/// state carried between evaluations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MosError {
    /// An input value is invalid (degenerate geometry, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required parameter is missing for the selected model
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The bias point makes a formula denominator vanish
    #[error("Degenerate operating point: {reason}")]
    DegenerateOperatingPoint { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MosError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MosError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        MosError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DegenerateOperatingPoint error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        MosError::DegenerateOperatingPoint {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MosError::InvalidInput { .. } => "INVALID_INPUT",
            MosError::MissingField { .. } => "MISSING_FIELD",
            MosError::DegenerateOperatingPoint { .. } => "DEGENERATE_OPERATING_POINT",
            MosError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
