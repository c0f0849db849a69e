//! # Error Types
//!
//! Errors for the foundational crate. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations; crates further up the
//! stack wrap these in their own error enums.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
