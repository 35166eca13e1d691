//! # Proof-of-Work Service
//!
//! Application service that implements `ProofOfWorkApi` on top of the
//! domain `PearlDiver`.

use crate::config::PowConfig;
use crate::domain::{attach_bundle, transaction_hash, Nonce, PearlDiver};
use crate::error::Result;
use crate::ports::inbound::ProofOfWorkApi;
use shared_types::{trits_to_trytes, Field, Hash, Transaction, Trit};
use tracing::instrument;

/// Proof-of-Work Service.
pub struct PowService {
    config: PowConfig,
    diver: PearlDiver,
}

impl PowService {
    /// Build the worker pool described by `config`.
    pub fn new(config: PowConfig) -> Result<Self> {
        config.validate()?;
        let diver = PearlDiver::new(config.threads, config.max_iterations)?;
        Ok(Self { config, diver })
    }

    pub fn config(&self) -> &PowConfig {
        &self.config
    }

    /// Worker threads actually in use.
    pub fn workers(&self) -> usize {
        self.diver.workers()
    }
}

impl ProofOfWorkApi for PowService {
    fn pow_trits(&self, trits: &[Trit], mwm: usize) -> Result<Nonce> {
        self.diver.search(trits, mwm)
    }

    fn pow_trytes(&self, trytes: &str, mwm: usize) -> Result<String> {
        let transaction = Transaction::from_trytes(trytes)?;
        let nonce = self.diver.search(transaction.as_trits(), mwm)?;
        Ok(trits_to_trytes(&nonce)?)
    }

    fn pow_transaction(&self, transaction: &mut Transaction, mwm: usize) -> Result<Hash> {
        let nonce = self.diver.search(transaction.as_trits(), mwm)?;
        transaction.set_field(Field::Nonce, &nonce)?;
        transaction_hash(transaction.as_trits())
    }

    #[instrument(skip(self, bundle))]
    fn pow_bundle(
        &self,
        bundle: &mut [Transaction],
        trunk: &Hash,
        branch: &Hash,
        mwm: usize,
    ) -> Result<Hash> {
        let now = chrono::Utc::now().timestamp_millis();
        attach_bundle(&self.diver, bundle, trunk, branch, mwm, now)
    }

    fn pow_bundle_at(
        &self,
        bundle: &mut [Transaction],
        trunk: &Hash,
        branch: &Hash,
        mwm: usize,
        timestamp: i64,
    ) -> Result<Hash> {
        attach_bundle(&self.diver, bundle, trunk, branch, mwm, timestamp)
    }

    fn transaction_hash(&self, transaction: &Transaction) -> Result<Hash> {
        transaction_hash(transaction.as_trits())
    }
}
