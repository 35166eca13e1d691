//! Error types for the bundle miner

use en_compute::ComputeError;
use shared_crypto::CryptoError;
use shared_types::TernaryError;
use thiserror::Error;

/// Result type alias for mining operations
pub type Result<T> = std::result::Result<T, MiningError>;

/// Errors that can occur while mining a bundle index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MiningError {
    /// No candidate met the policy within the budget
    #[error("Mining failed: {reason}")]
    MiningFailed {
        /// Why the search came up empty
        reason: String,
        /// Fewest extremes seen, if any candidate was scored
        best_extremes: Option<usize>,
    },

    /// Malformed essence, reference or security level
    #[error(transparent)]
    Ternary(#[from] TernaryError),

    /// Sponge rejected its input
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Worker pool could not be built
    #[error(transparent)]
    Compute(#[from] ComputeError),
}

impl MiningError {
    pub(crate) fn failed(reason: impl Into<String>, best_extremes: Option<usize>) -> Self {
        Self::MiningFailed {
            reason: reason.into(),
            best_extremes,
        }
    }
}
