//! # Bundle Miner
//!
//! Searches `0..count` for the index that, written into the bundle essence,
//! yields the bundle hash with the fewest extreme normalized values.
//!
//! The candidate range is split into contiguous slices, one per worker.
//! Each worker keeps its own best `(extremes, index)` and the results are
//! reduced with the same ordering, so the winner does not depend on
//! scheduling. Once any worker finds an optimal index, the lowest optimal
//! index seen so far is published and every worker skips indices above it.

use crate::domain::scoring::{forgery_probability, normalized_for_index, score_index, Candidate};
use crate::error::{MiningError, Result};
use en_compute::CpuEngine;
use shared_crypto::Kerl;
use shared_types::{validate_essence, NormalizedHash, SecurityLevel, Trit};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

/// Acceptance policy for a mining run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MiningPolicy {
    /// Only an index with zero extremes is accepted.
    FullySecure,
    /// The best index is accepted when its extreme count is at most this.
    Threshold(usize),
}

impl MiningPolicy {
    pub fn from_flags(fully_secure: bool, threshold: usize) -> Self {
        if fully_secure {
            Self::FullySecure
        } else {
            Self::Threshold(threshold)
        }
    }

    fn accepts(self, candidate: &Candidate) -> bool {
        match self {
            Self::FullySecure => candidate.is_optimal(),
            Self::Threshold(threshold) => candidate.extremes <= threshold,
        }
    }
}

/// Inputs of one mining run.
#[derive(Clone, Debug)]
pub struct MiningRequest<'a> {
    /// Bundle essence; the first transaction's obsolete tag is overwritten.
    pub essence: &'a [Trit],
    /// Element-wise maximum of the bundle hashes already signed with the
    /// same key. Feeds [`MinedIndex::forgery_probability`] only; it does
    /// not take part in candidate selection.
    pub normalized_max: NormalizedHash,
    pub security: SecurityLevel,
    /// Candidate indices are `0..count`.
    pub count: u64,
    pub policy: MiningPolicy,
}

/// The winning index.
#[derive(Clone, Debug, PartialEq)]
pub struct MinedIndex {
    pub index: u64,
    /// No extreme values among the signed fragments.
    pub optimal: bool,
    pub extremes: usize,
    /// Normalized bundle hash for `index`.
    pub normalized: NormalizedHash,
    /// See [`forgery_probability`].
    pub forgery_probability: f64,
}

/// One worker's pass over its slice.
fn scan(
    essence: &[Trit],
    range: std::ops::Range<u64>,
    security: SecurityLevel,
    best_optimal: &AtomicU64,
) -> Result<Option<Candidate>> {
    let mut kerl = Kerl::new();
    let mut local = essence.to_vec();
    let mut best: Option<Candidate> = None;

    for index in range {
        if index > best_optimal.load(Ordering::Acquire) {
            break;
        }

        let candidate = score_index(&mut kerl, &mut local, index, security)?;
        if best.map_or(true, |b| candidate < b) {
            best = Some(candidate);
        }

        if candidate.is_optimal() {
            best_optimal.fetch_min(index, Ordering::AcqRel);
            break;
        }
    }

    Ok(best)
}

/// Mine an index on `engine`.
#[instrument(
    skip(engine, request),
    fields(count = request.count, security = request.security.as_u8(), workers = engine.workers())
)]
pub fn mine(engine: &CpuEngine, request: &MiningRequest<'_>) -> Result<MinedIndex> {
    let transactions = validate_essence(request.essence)?;
    debug!(transactions, "essence accepted");

    if request.count == 0 {
        return Err(MiningError::failed("no candidate indices", None));
    }

    let best_optimal = AtomicU64::new(u64::MAX);
    let results = engine.map_ranges(request.count, |worker, range| {
        let found = scan(request.essence, range.clone(), request.security, &best_optimal);
        if let Ok(Some(candidate)) = &found {
            debug!(worker, start = range.start, end = range.end, ?candidate, "worker done");
        }
        found
    });

    let mut best: Option<Candidate> = None;
    for result in results {
        if let Some(candidate) = result? {
            if best.map_or(true, |b| candidate < b) {
                best = Some(candidate);
            }
        }
    }

    let Some(best) = best else {
        return Err(MiningError::failed("no candidate scored", None));
    };

    if !request.policy.accepts(&best) {
        warn!(extremes = best.extremes, policy = ?request.policy, "no acceptable index");
        return Err(MiningError::failed(
            format!("best index {} has {} extremes", best.index, best.extremes),
            Some(best.extremes),
        ));
    }

    let mut essence = request.essence.to_vec();
    let normalized = normalized_for_index(&mut Kerl::new(), &mut essence, best.index)?;
    let probability = forgery_probability(&request.normalized_max, &normalized, request.security);

    info!(
        index = best.index,
        extremes = best.extremes,
        forgery_probability = probability,
        "bundle index mined"
    );

    Ok(MinedIndex {
        index: best.index,
        optimal: best.is_optimal(),
        extremes: best.extremes,
        normalized,
        forgery_probability: probability,
    })
}
