//! # Inbound Ports (Driving Ports / API)

use crate::domain::MinedIndex;
use crate::error::Result;
use shared_types::{NormalizedHash, SecurityLevel, Trit};

/// Primary bundle mining API.
pub trait BundleMinerApi: Send + Sync {
    /// Mine with the configured security level and acceptance policy.
    fn mine(&self, normalized_max: &NormalizedHash, essence: &[Trit], count: u64)
        -> Result<MinedIndex>;

    /// Mine with every parameter given explicitly. `nprocs == 0` uses all
    /// cores; larger requests are capped at the core count.
    #[allow(clippy::too_many_arguments)]
    fn mine_with(
        &self,
        normalized_max: &NormalizedHash,
        security: SecurityLevel,
        essence: &[Trit],
        count: u64,
        nprocs: usize,
        threshold: usize,
        fully_secure: bool,
    ) -> Result<MinedIndex>;
}
