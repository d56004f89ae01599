//! Error handling for Resviz
//!
//! The simulation core has no I/O of its own, so the taxonomy is small:
//! configuration errors caught at the boundary, plus the file and serde
//! errors the CLI layer can hit while loading a config.

use thiserror::Error;

/// Result type alias for Resviz operations
pub type Result<T> = std::result::Result<T, ResvizError>;

/// Main error type for Resviz operations
#[derive(Error, Debug)]
pub enum ResvizError {
    // Configuration Errors
    #[error("Network depth {depth} is out of range ({min}..={max})")]
    DepthOutOfRange { depth: u32, min: u32, max: u32 },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResvizError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ResvizError::DepthOutOfRange { .. } => "DEPTH_OUT_OF_RANGE",
            ResvizError::InvalidConfig { .. } => "INVALID_CONFIG",
            ResvizError::Io(_) => "IO_ERROR",
            ResvizError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable
    ///
    /// Configuration errors are recoverable: the caller can re-issue the
    /// request with corrected values.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ResvizError::DepthOutOfRange { .. } => true,
            ResvizError::InvalidConfig { .. } => true,
            ResvizError::Io(_) => false,
            ResvizError::Serialization(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ResvizError::DepthOutOfRange {
            depth: 42,
            min: 2,
            max: 10,
        };
        assert_eq!(err.error_code(), "DEPTH_OUT_OF_RANGE");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_depth_error_message_names_bounds() {
        let err = ResvizError::DepthOutOfRange {
            depth: 1,
            min: 2,
            max: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("depth 1"));
        assert!(msg.contains("2..=10"));
    }

    #[test]
    fn test_io_error_not_recoverable() {
        let err = ResvizError::Io(std::io::Error::other("boom"));
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(!err.is_recoverable());
    }
}
