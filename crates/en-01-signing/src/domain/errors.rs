//! # Signing Errors
//!
//! Error types for key, address and signature operations.

use shared_crypto::CryptoError;
use shared_types::TernaryError;
use thiserror::Error;

/// Errors that can occur during key derivation, signing or verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// Malformed seed, hash, security level or trit buffer
    #[error(transparent)]
    Ternary(#[from] TernaryError),

    /// Sponge rejected its input
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Signature is not one to three whole key fragments
    #[error("Invalid signature length: {0} trits is not 1-3 fragments of 6561")]
    InvalidSignatureLength(usize),
}
