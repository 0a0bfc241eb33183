//! Error types for the Cortica pipeline.
//!
//! All crates return `CorticaResult<T>` from fallible operations.
//!
//! Degenerate-but-valid results (an empty isosurface, a smoothing
//! operator with zero seed columns) are ordinary values, not errors;
//! callers are expected to handle zero-sized outputs.

use thiserror::Error;

/// Unified error type for the Cortica pipeline.
#[derive(Debug, Error)]
pub enum CorticaError {
    /// Geometric input is malformed (wrong stride, out-of-range index,
    /// value not representable in the target element type).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No template record exists under the requested name.
    #[error("No template named '{0}'")]
    TemplateNotFound(String),

    /// The named template is a protected built-in and cannot be deleted.
    #[error("Template '{0}' is a protected built-in")]
    ProtectedTemplate(String),
}

/// Convenience alias for `Result<T, CorticaError>`.
pub type CorticaResult<T> = Result<T, CorticaError>;
