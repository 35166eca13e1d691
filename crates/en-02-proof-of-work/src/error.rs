//! Error types for the proof-of-work subsystem

use en_compute::ComputeError;
use shared_crypto::CryptoError;
use shared_types::TernaryError;
use thiserror::Error;

/// Result type alias for proof-of-work operations
pub type Result<T> = std::result::Result<T, PowError>;

/// Errors that can occur while searching for a nonce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowError {
    /// Difficulty above the hash length
    #[error("Invalid minimum weight magnitude: {0} (must be 0-243)")]
    InvalidMwm(usize),

    /// Every worker hit its iteration budget without a hit
    #[error("search exhausted after {iterations} iterations per worker")]
    Exhausted {
        /// Budget per worker
        iterations: u64,
    },

    /// A reported nonce did not reproduce under the scalar hash
    #[error("nonce does not meet weight {mwm}")]
    VerificationFailed {
        /// Requested weight
        mwm: usize,
    },

    /// Bundle has no transactions
    #[error("empty bundle")]
    EmptyBundle,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed transaction or hash
    #[error(transparent)]
    Ternary(#[from] TernaryError),

    /// Sponge rejected its input
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Worker pool could not be built
    #[error(transparent)]
    Compute(#[from] ComputeError),
}
