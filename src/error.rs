//! Error types for cartouche operations.
//!
//! Geometry operations themselves are infallible: bounds below the
//! minimum size are silently raised, never rejected. Errors only arise
//! at the configuration seams (color strings, settings values).

use thiserror::Error;

/// The error type for cartouche operations.
#[derive(Debug, Error)]
pub enum CartoucheError {
    /// A color string could not be parsed as a CSS color.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// A settings value was present but unusable.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
