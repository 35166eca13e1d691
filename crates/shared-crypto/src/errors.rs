//! Crypto error types.

use shared_types::TernaryError;
use thiserror::Error;

/// Sponge operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Input or output buffer is not a whole number of 243-trit blocks
    #[error("Invalid buffer length: expected a multiple of {block}, got {actual}")]
    UnalignedLength {
        /// Required block size in trits
        block: usize,
        /// Supplied length in trits
        actual: usize,
    },

    /// Round count outside what the transform supports
    #[error("Invalid round count: {0}")]
    InvalidRounds(usize),

    /// Unknown sponge name
    #[error("Unknown sponge: {0}")]
    UnknownSponge(String),

    /// Malformed ternary input
    #[error(transparent)]
    Ternary(#[from] TernaryError),
}
