//! # Engine Errors
//!
//! Every subsystem error is flattened into [`EngineError`], which carries a
//! stable numeric code for adapters that can only pass integers across their
//! boundary.

use en_01_signing::SigningError;
use en_02_proof_of_work::PowError;
use en_03_bundle_miner::MiningError;
use shared_crypto::CryptoError;
use shared_types::{TernaryError, FRAGMENT_TRIT_LENGTH};
use thiserror::Error;

/// Result type alias for engine calls
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed trytes, trits or flex bytes
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Security level outside {1, 2, 3}
    #[error("Invalid security level: {0}")]
    InvalidSecurityLevel(u64),

    /// Seed is not 243 trits
    #[error("Invalid seed length: {0}")]
    InvalidSeedLength(usize),

    /// Any other buffer of the wrong size
    #[error("Invalid buffer length: expected {expected}, got {actual}")]
    InvalidBufferLength { expected: usize, actual: usize },

    /// Malformed transaction input or nonce search gave up
    #[error("PoW failed: {0}")]
    PowFailed(String),

    /// No candidate index met the mining policy
    #[error("Mining failed: {0}")]
    MiningFailed(String),
}

impl EngineError {
    /// Stable numeric code.
    pub fn code(&self) -> u32 {
        match self {
            Self::Encoding(_) => 1,
            Self::InvalidSecurityLevel(_) => 2,
            Self::InvalidSeedLength(_) => 3,
            Self::InvalidBufferLength { .. } => 4,
            Self::PowFailed(_) => 5,
            Self::MiningFailed(_) => 6,
        }
    }
}

impl From<TernaryError> for EngineError {
    fn from(err: TernaryError) -> Self {
        match err {
            TernaryError::InvalidSecurityLevel(level) => Self::InvalidSecurityLevel(level),
            TernaryError::InvalidSeedLength(len) => Self::InvalidSeedLength(len),
            TernaryError::InvalidBufferLength { expected, actual } => {
                Self::InvalidBufferLength { expected, actual }
            }
            TernaryError::InvalidTryte(_)
            | TernaryError::InvalidTrit(_)
            | TernaryError::Encoding(_) => Self::Encoding(err.to_string()),
        }
    }
}

impl From<CryptoError> for EngineError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Ternary(inner) => inner.into(),
            CryptoError::UnalignedLength { block, actual } => Self::InvalidBufferLength {
                expected: actual.div_ceil(block).max(1) * block,
                actual,
            },
            other => Self::Encoding(other.to_string()),
        }
    }
}

impl From<SigningError> for EngineError {
    fn from(err: SigningError) -> Self {
        match err {
            SigningError::Ternary(inner) => inner.into(),
            SigningError::Crypto(inner) => inner.into(),
            SigningError::InvalidSignatureLength(actual) => {
                let fragments = actual.div_ceil(FRAGMENT_TRIT_LENGTH).clamp(1, 3);
                Self::InvalidBufferLength {
                    expected: fragments * FRAGMENT_TRIT_LENGTH,
                    actual,
                }
            }
        }
    }
}

impl From<PowError> for EngineError {
    fn from(err: PowError) -> Self {
        Self::PowFailed(err.to_string())
    }
}

impl From<MiningError> for EngineError {
    fn from(err: MiningError) -> Self {
        match err {
            MiningError::MiningFailed { reason, .. } => Self::MiningFailed(reason),
            MiningError::Ternary(inner) => inner.into(),
            MiningError::Crypto(inner) => inner.into(),
            MiningError::Compute(inner) => Self::MiningFailed(inner.to_string()),
        }
    }
}
