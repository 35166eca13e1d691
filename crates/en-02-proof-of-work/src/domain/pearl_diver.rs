//! # Pearl Diver
//!
//! Nonce search over 64-lane bitsliced Curl-P-81.
//!
//! The first 32 blocks of a transaction never change during the search, so
//! they are absorbed once with scalar Curl into a midstate. The last block
//! (which holds the nonce at offset 162) is broadcast into a [`BctCurl`] and
//! every worker explores a disjoint slice of the nonce space:
//!
//! | nonce trits | role |
//! |-------------|------|
//! | 0..4   | lane id (64 lanes, fixed per state) |
//! | 4..60  | per-worker counter |
//! | 60..81 | worker id |
//!
//! A lane hits when the trailing `mwm` trits of its hash are zero.

use crate::error::{PowError, Result};
use en_compute::tasks::signal::StopSignal;
use en_compute::CpuEngine;
use shared_crypto::{BctCurl, Curl, Sponge, CURL_P81_ROUNDS, HASH_LENGTH, LANES, STATE_LENGTH};
use shared_types::{
    add_assign, int_to_trits, validate_trits, Field, Hash, TernaryError, Trit,
    TRANSACTION_TRIT_LENGTH,
};
use tracing::{debug, info, instrument, warn};

/// Trits in a nonce.
pub const NONCE_LENGTH: usize = Field::Nonce.len();

/// Offset of the last block inside a transaction.
const LAST_BLOCK_OFFSET: usize = TRANSACTION_TRIT_LENGTH - HASH_LENGTH;

/// Offset of the nonce inside the last block.
pub const NONCE_OFFSET: usize = Field::Nonce.offset() - LAST_BLOCK_OFFSET;

const LANE_TRITS: usize = 4;
const COUNTER_TRITS: usize = 56;
const WORKER_TRITS: usize = NONCE_LENGTH - LANE_TRITS - COUNTER_TRITS;

const COUNTER_OFFSET: usize = NONCE_OFFSET + LANE_TRITS;
const WORKER_OFFSET: usize = COUNTER_OFFSET + COUNTER_TRITS;

/// A found nonce.
pub type Nonce = [Trit; NONCE_LENGTH];

/// Curl-P-81 hash of a full transaction.
pub fn transaction_hash(trits: &[Trit]) -> Result<Hash> {
    check_length(trits)?;
    Ok(Curl::p81().digest(trits)?)
}

fn check_length(trits: &[Trit]) -> Result<()> {
    if trits.len() != TRANSACTION_TRIT_LENGTH {
        return Err(TernaryError::InvalidBufferLength {
            expected: TRANSACTION_TRIT_LENGTH,
            actual: trits.len(),
        }
        .into());
    }
    Ok(())
}

/// Bitsliced state ready for searching: midstate plus last block, with the
/// lane ids written into the first nonce trits.
fn prepare(trits: &[Trit]) -> Result<BctCurl> {
    let (head, last) = trits.split_at(LAST_BLOCK_OFFSET);

    let mut curl = Curl::p81();
    curl.absorb(head)?;

    let mut state = [0 as Trit; STATE_LENGTH];
    state.copy_from_slice(curl.state());
    state[..HASH_LENGTH].copy_from_slice(last);

    let mut bct = BctCurl::from_state(CURL_P81_ROUNDS, &state);
    for lane in 0..LANES {
        let mut digits = lane;
        for offset in 0..LANE_TRITS {
            let trit = match digits % 3 {
                0 => 0,
                1 => 1,
                _ => -1,
            };
            bct.set_lane_trit(NONCE_OFFSET + offset, lane, trit);
            digits /= 3;
        }
    }

    Ok(bct)
}

/// One worker's scan. Returns the nonce of the first hitting lane, or
/// `None` when stopped or out of budget.
fn dive(
    template: &BctCurl,
    worker: usize,
    mwm: usize,
    max_iterations: Option<u64>,
    signal: &StopSignal,
) -> Option<Nonce> {
    let mut base = template.clone();
    // Worker ids fit easily in 21 trits.
    let worker_trits = int_to_trits(worker as i64, WORKER_TRITS).ok()?;
    for (offset, trit) in worker_trits.iter().enumerate() {
        base.set_trit(WORKER_OFFSET + offset, *trit);
    }

    let mut counter = [0 as Trit; COUNTER_TRITS];
    let mut iterations: u64 = 0;

    while !signal.is_stopped() {
        if max_iterations.is_some_and(|max| iterations >= max) {
            debug!(worker, iterations, "budget spent");
            return None;
        }

        for (offset, trit) in counter.iter().enumerate() {
            base.set_trit(COUNTER_OFFSET + offset, *trit);
        }

        let mut state = base.clone();
        state.transform();

        let hits = state.zero_mask(HASH_LENGTH - mwm..HASH_LENGTH);
        if hits != 0 {
            let lane = hits.trailing_zeros() as usize;
            let mut nonce = [0 as Trit; NONCE_LENGTH];
            for (offset, trit) in nonce.iter_mut().enumerate() {
                *trit = base.lane_trit(NONCE_OFFSET + offset, lane);
            }
            debug!(worker, lane, iterations, "nonce found");
            return Some(nonce);
        }

        add_assign(&mut counter, 1);
        iterations += 1;
    }

    None
}

/// Parallel nonce searcher.
pub struct PearlDiver {
    engine: CpuEngine,
    max_iterations: Option<u64>,
}

impl PearlDiver {
    /// `threads` workers (0 = all cores); `max_iterations` per worker.
    pub fn new(threads: usize, max_iterations: Option<u64>) -> Result<Self> {
        Ok(Self {
            engine: en_compute::create_engine(threads)?,
            max_iterations,
        })
    }

    pub fn workers(&self) -> usize {
        self.engine.workers()
    }

    /// Find a nonce giving `trits` (a full transaction) at least `mwm`
    /// trailing zero trits in its Curl-P-81 hash.
    ///
    /// With `mwm == 0` the current nonce already qualifies and is returned
    /// without searching.
    #[instrument(skip(self, trits), fields(workers = self.workers()))]
    pub fn search(&self, trits: &[Trit], mwm: usize) -> Result<Nonce> {
        check_length(trits)?;
        validate_trits(trits)?;
        if mwm > HASH_LENGTH {
            return Err(PowError::InvalidMwm(mwm));
        }

        if mwm == 0 {
            let mut current = [0 as Trit; NONCE_LENGTH];
            current.copy_from_slice(&trits[Field::Nonce.range()]);
            return Ok(current);
        }

        let template = prepare(trits)?;
        let found = self.engine.search_first(|worker, signal| {
            dive(&template, worker, mwm, self.max_iterations, signal)
        });

        let Some(nonce) = found else {
            let iterations = self.max_iterations.unwrap_or_default();
            warn!(mwm, iterations, "nonce search exhausted");
            return Err(PowError::Exhausted { iterations });
        };

        let mut candidate = trits.to_vec();
        candidate[Field::Nonce.range()].copy_from_slice(&nonce);
        let hash = transaction_hash(&candidate)?;
        if hash.trailing_zeros() < mwm {
            return Err(PowError::VerificationFailed { mwm });
        }

        info!(mwm, weight = hash.trailing_zeros(), "nonce found");
        Ok(nonce)
    }
}
