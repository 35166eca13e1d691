//! Configuration types for the bundle miner

use serde::Deserialize;
use shared_types::SecurityLevel;

/// Defaults applied to mining requests that do not override them
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MiningConfig {
    /// Worker contexts per call (0 = all cores)
    pub nprocs: usize,

    /// Security level of the keys that will sign the bundle
    pub security: SecurityLevel,

    /// Largest acceptable extreme count outside fully-secure mode
    pub threshold: usize,

    /// Require zero extremes
    pub fully_secure: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            nprocs: 0,
            security: SecurityLevel::Medium,
            threshold: 0,
            fully_secure: true,
        }
    }
}
