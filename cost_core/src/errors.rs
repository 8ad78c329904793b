//! # Error Types
//!
//! Structured error types for cost_core. These errors are designed to be
//! informative for both humans and automation, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::errors::{CostError, CostResult};
//!
//! fn validate_final_diameter(final_diameter_mm: f64) -> CostResult<()> {
//!     if final_diameter_mm <= 0.0 {
//!         return Err(CostError::InvalidInput {
//!             field: "final_diameter_mm".to_string(),
//!             value: final_diameter_mm.to_string(),
//!             reason: "Final diameter must be greater than 0".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cost_core operations
pub type CostResult<T> = Result<T, CostError>;

/// Structured error type for the cost engine and its export surface.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by automated consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CostError {
    /// An input value is invalid (the engine's single validation guard)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material preset not found in the stock database
    #[error("Material not found: {name}")]
    MaterialNotFound { name: String },

    /// Export file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// CSV/JSON/workbook encoding or decoding error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CostError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CostError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(name: impl Into<String>) -> Self {
        CostError::MaterialNotFound { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CostError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CostError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable by substituting a degenerate result.
    ///
    /// The final-diameter guard is recoverable: the engine reports the
    /// material cost alone and the caller surfaces a warning instead of
    /// aborting the calculation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CostError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CostError::InvalidInput { .. } => "INVALID_INPUT",
            CostError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CostError::FileError { .. } => "FILE_ERROR",
            CostError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CostError::invalid_input(
            "final_diameter_mm",
            "-2.0",
            "Final diameter must be greater than 0",
        );
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CostError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CostError::material_not_found("unobtainium").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            CostError::file_error("write", "out.csv", "disk full").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_invalid_input_is_recoverable() {
        let error = CostError::invalid_input("final_diameter_mm", "0", "must be > 0");
        assert!(error.is_recoverable());
        assert!(!CostError::serialization("bad row").is_recoverable());
    }

    #[test]
    fn test_display_message() {
        let error = CostError::invalid_input("final_diameter_mm", "0", "must be > 0");
        let message = error.to_string();
        assert!(message.contains("final_diameter_mm"));
        assert!(message.contains("must be > 0"));
    }
}
