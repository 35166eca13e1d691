//! Configuration types for proof of work

use crate::error::{PowError, Result};
use serde::Deserialize;
use shared_types::HASH_TRIT_LENGTH;

/// Default minimum weight magnitude.
pub const DEFAULT_MWM: usize = 14;

/// Runtime configuration for the nonce search
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PowConfig {
    /// Default minimum weight magnitude (trailing zero trits)
    pub mwm: usize,

    /// Worker threads (0 = all cores)
    pub threads: usize,

    /// Iterations per worker before giving up (None = search until found).
    /// Each iteration tests 64 nonces.
    pub max_iterations: Option<u64>,
}

impl Default for PowConfig {
    fn default() -> Self {
        Self {
            mwm: DEFAULT_MWM,
            threads: 0,
            max_iterations: None,
        }
    }
}

impl PowConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.mwm > HASH_TRIT_LENGTH {
            return Err(PowError::InvalidMwm(self.mwm));
        }
        if self.max_iterations == Some(0) {
            return Err(PowError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
