//! # Candidate Scoring
//!
//! A candidate index is written into the obsolete tag of the first
//! transaction's essence; the essence is hashed with Kerl and the result
//! normalized. The score is the number of extreme (±13) values in the
//! fragments a key of the given security level would sign.

use crate::error::Result;
use shared_crypto::{Kerl, Sponge};
use shared_types::{
    add_assign, Field, NormalizedHash, SecurityLevel, Trit, ESSENCE_OBSOLETE_TAG_OFFSET,
    NORMALIZED_MAX,
};
use std::cmp::Ordering;
use std::ops::Range;

/// Trit range of the mined index inside a bundle essence.
pub const INDEX_RANGE: Range<usize> =
    ESSENCE_OBSOLETE_TAG_OFFSET..ESSENCE_OBSOLETE_TAG_OFFSET + Field::ObsoleteTag.len();

/// A scored index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub index: u64,
    pub extremes: usize,
}

impl Candidate {
    /// True when no signed value sits at ±13.
    pub fn is_optimal(&self) -> bool {
        self.extremes == 0
    }
}

impl Ord for Candidate {
    /// Fewer extremes first, then lower index.
    fn cmp(&self, other: &Self) -> Ordering {
        self.extremes
            .cmp(&other.extremes)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Overwrite the index field of `essence` with `index`.
pub fn write_index(essence: &mut [Trit], index: u64) {
    let field = &mut essence[INDEX_RANGE];
    field.fill(0);
    add_assign(field, index);
}

/// Bundle hash of `essence` with `index` substituted, normalized.
pub fn normalized_for_index(
    kerl: &mut Kerl,
    essence: &mut [Trit],
    index: u64,
) -> Result<NormalizedHash> {
    write_index(essence, index);
    let hash = kerl.digest(essence)?;
    Ok(NormalizedHash::from_hash(&hash))
}

/// Score one index.
pub fn score_index(
    kerl: &mut Kerl,
    essence: &mut [Trit],
    index: u64,
    security: SecurityLevel,
) -> Result<Candidate> {
    let normalized = normalized_for_index(kerl, essence, index)?;
    Ok(Candidate {
        index,
        extremes: normalized.extreme_count(security),
    })
}

/// Probability that a random bundle hash could be forged from the key
/// fragments revealed by signing both `reference` and `candidate`:
/// `Π (max(ref_i, h_i) + 14) / 27` over the signed positions.
///
/// Reporting only: the miner ranks candidates by their own extreme count,
/// so `reference` never changes which index wins.
pub fn forgery_probability(
    reference: &NormalizedHash,
    candidate: &NormalizedHash,
    security: SecurityLevel,
) -> f64 {
    let combined = reference.max_with(candidate);
    combined.values()[..security.normalized_length()]
        .iter()
        .map(|v| f64::from(v + NORMALIZED_MAX + 1) / 27.0)
        .product()
}
