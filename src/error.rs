//! Error taxonomy for hybrid KEM operations.
//!
//! There is no "decapsulation failed" variant: a corrupted
//! encapsulated message yields a different key, never an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HybridKemError {
    /// Curve (or other algorithm identifier) other than the supported one.
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Malformed key material, encapsulated message or output length.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A primitive reported a fault that normal inputs never trigger.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, HybridKemError>;

/// Length check shared by every byte-slice entry point.
pub(crate) fn ensure_len(what: &str, bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        log::warn!(
            "Rejected {}: expected {} bytes, got {}",
            what,
            expected,
            bytes.len()
        );
        return Err(HybridKemError::InvalidArgument(format!(
            "{} must be {} bytes, got {}",
            what,
            expected,
            bytes.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len("key", &[0u8; 32], 32).is_ok());
        let err = ensure_len("key", &[0u8; 31], 32).unwrap_err();
        assert_eq!(
            err,
            HybridKemError::InvalidArgument("key must be 32 bytes, got 31".to_string())
        );
    }

    #[test]
    fn test_error_display() {
        let err = HybridKemError::UnsupportedAlgorithm("NIST_P256".to_string());
        assert_eq!(err.to_string(), "Unsupported algorithm: NIST_P256");
    }
}
