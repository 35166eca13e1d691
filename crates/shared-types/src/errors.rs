//! # Error Types
//!
//! Defines the ternary error type shared by every subsystem.

use thiserror::Error;

/// Errors raised while decoding, validating or re-encoding ternary buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TernaryError {
    /// Character outside the 27-symbol tryte alphabet.
    #[error("Encoding error: invalid tryte {0:?}")]
    InvalidTryte(char),

    /// Trit value outside {-1, 0, 1}.
    #[error("Encoding error: invalid trit {0}")]
    InvalidTrit(i8),

    /// Any other malformed encoding (bad flex byte, overflowing integer, empty input).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Buffer does not have the length the operation requires.
    #[error("Invalid buffer length: expected {expected}, got {actual}")]
    InvalidBufferLength {
        /// Required length (in trits unless stated otherwise)
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Seed is not exactly 243 trits / 81 trytes.
    #[error("Invalid seed length: expected 243 trits, got {0}")]
    InvalidSeedLength(usize),

    /// Security level outside {1, 2, 3}.
    #[error("Invalid security level: {0} (must be 1, 2 or 3)")]
    InvalidSecurityLevel(u64),
}

impl TernaryError {
    /// True for the encoding family (bad tryte, bad trit, malformed data).
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            Self::InvalidTryte(_) | Self::InvalidTrit(_) | Self::Encoding(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_family() {
        assert!(TernaryError::InvalidTryte('a').is_encoding());
        assert!(TernaryError::InvalidTrit(2).is_encoding());
        assert!(TernaryError::Encoding("empty".into()).is_encoding());
        assert!(!TernaryError::InvalidSecurityLevel(4).is_encoding());
        assert!(!TernaryError::InvalidSeedLength(10).is_encoding());
    }

    #[test]
    fn test_messages() {
        let err = TernaryError::InvalidBufferLength {
            expected: 243,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid buffer length: expected 243, got 10"
        );
    }
}
