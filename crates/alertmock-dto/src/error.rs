//! Error types for the alertmock-dto crate.

use thiserror::Error;

/// Errors that can occur while constructing alerting value types.
#[derive(Debug, Error)]
pub enum DtoError {
    /// Invalid duration specification.
    #[error("invalid duration: {reason}")]
    InvalidDuration {
        /// The reason the duration is invalid.
        reason: String,
    },
}

/// Result type for DTO operations.
pub type Result<T> = std::result::Result<T, DtoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_duration() {
        let err = DtoError::InvalidDuration {
            reason: "empty string".to_string(),
        };
        assert_eq!(err.to_string(), "invalid duration: empty string");
    }
}
