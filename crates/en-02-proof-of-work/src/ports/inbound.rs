//! # Inbound Ports (Driving Ports / API)

use crate::domain::Nonce;
use crate::error::Result;
use shared_types::{Hash, Transaction, Trit};

/// Primary Proof-of-Work API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait ProofOfWorkApi: Send + Sync {
    /// Find a nonce for a full 8019-trit transaction.
    fn pow_trits(&self, trits: &[Trit], mwm: usize) -> Result<Nonce>;

    /// Find a nonce for a 2673-tryte transaction; returns the 27-tryte nonce.
    fn pow_trytes(&self, trytes: &str, mwm: usize) -> Result<String>;

    /// Search and write the nonce into `transaction`; returns its new hash.
    fn pow_transaction(&self, transaction: &mut Transaction, mwm: usize) -> Result<Hash>;

    /// Chain and attach a bundle, stamping the current time.
    fn pow_bundle(
        &self,
        bundle: &mut [Transaction],
        trunk: &Hash,
        branch: &Hash,
        mwm: usize,
    ) -> Result<Hash>;

    /// Chain and attach a bundle with an explicit attachment timestamp.
    fn pow_bundle_at(
        &self,
        bundle: &mut [Transaction],
        trunk: &Hash,
        branch: &Hash,
        mwm: usize,
        timestamp: i64,
    ) -> Result<Hash>;

    /// Curl-P-81 hash of a transaction.
    fn transaction_hash(&self, transaction: &Transaction) -> Result<Hash>;
}
