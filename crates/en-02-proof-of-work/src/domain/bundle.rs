//! # Bundle Attachment
//!
//! Chains the transactions of a bundle together and performs PoW on each.
//!
//! Transactions are processed from the last index down to index 0. The
//! last transaction references the supplied `(trunk, branch)`; every other
//! transaction references `(hash of the next transaction, trunk)`.

use crate::domain::pearl_diver::{transaction_hash, PearlDiver};
use crate::error::{PowError, Result};
use shared_types::{Field, Hash, Transaction};
use tracing::{debug, instrument};

/// Attach `bundle` on top of `trunk` and `branch`, stamping `timestamp`
/// (milliseconds) into every attachment window. Returns the hash of the
/// first transaction (the bundle tail).
#[instrument(skip(diver, bundle), fields(transactions = bundle.len()))]
pub fn attach_bundle(
    diver: &PearlDiver,
    bundle: &mut [Transaction],
    trunk: &Hash,
    branch: &Hash,
    mwm: usize,
    timestamp: i64,
) -> Result<Hash> {
    if bundle.is_empty() {
        return Err(PowError::EmptyBundle);
    }

    let mut next: Option<Hash> = None;

    for transaction in bundle.iter_mut().rev() {
        let (tx_trunk, tx_branch) = match next {
            None => (*trunk, *branch),
            Some(next_hash) => (next_hash, *trunk),
        };

        transaction.set_field(Field::TrunkTransaction, tx_trunk.as_trits())?;
        transaction.set_field(Field::BranchTransaction, tx_branch.as_trits())?;
        transaction.set_attachment(timestamp)?;

        let nonce = diver.search(transaction.as_trits(), mwm)?;
        transaction.set_field(Field::Nonce, &nonce)?;

        let hash = transaction_hash(transaction.as_trits())?;
        debug!(index = ?transaction.current_index().ok(), %hash, "transaction attached");
        next = Some(hash);
    }

    next.ok_or(PowError::EmptyBundle)
}
