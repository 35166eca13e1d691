//! # Bundle Miner Service
//!
//! Implements `BundleMinerApi`. Every call builds its own worker pool sized
//! by `nprocs`, so concurrent calls never share mutable state.

use crate::config::MiningConfig;
use crate::domain::{mine, MinedIndex, MiningPolicy, MiningRequest};
use crate::error::Result;
use crate::ports::inbound::BundleMinerApi;
use shared_types::{NormalizedHash, SecurityLevel, Trit};
use tracing::instrument;

/// Bundle Miner Service.
#[derive(Debug, Clone, Default)]
pub struct MinerService {
    config: MiningConfig,
}

impl MinerService {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }
}

impl BundleMinerApi for MinerService {
    fn mine(
        &self,
        normalized_max: &NormalizedHash,
        essence: &[Trit],
        count: u64,
    ) -> Result<MinedIndex> {
        self.mine_with(
            normalized_max,
            self.config.security,
            essence,
            count,
            self.config.nprocs,
            self.config.threshold,
            self.config.fully_secure,
        )
    }

    #[instrument(skip(self, normalized_max, essence))]
    fn mine_with(
        &self,
        normalized_max: &NormalizedHash,
        security: SecurityLevel,
        essence: &[Trit],
        count: u64,
        nprocs: usize,
        threshold: usize,
        fully_secure: bool,
    ) -> Result<MinedIndex> {
        let engine = en_compute::create_engine(nprocs)?;
        let request = MiningRequest {
            essence,
            normalized_max: *normalized_max,
            security,
            count,
            policy: MiningPolicy::from_flags(fully_secure, threshold),
        };
        mine(&engine, &request)
    }
}
