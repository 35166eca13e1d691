//! # Bitsliced Curl
//!
//! Runs 64 independent Curl-P instances at once. Each state trit is held
//! as two `u64` words (`low`, `high`), one bit per lane:
//!
//! | trit | low | high |
//! |------|-----|------|
//! | -1   | 1   | 0    |
//! | 0    | 1   | 1    |
//! | 1    | 0   | 1    |
//!
//! The substitution box becomes five bitwise operations per trit, so one
//! transform of this state costs about as much as one scalar transform.

use crate::curl::next_index;
use crate::sponge::STATE_LENGTH;
use shared_types::Trit;
use std::ops::Range;
use zeroize::Zeroize;

/// Parallel instances per state.
pub const LANES: usize = 64;

/// All lanes set.
pub const ALL_LANES: u64 = u64::MAX;

/// Bit pair for a trit, broadcast to every lane.
#[inline]
pub const fn encode(trit: Trit) -> (u64, u64) {
    match trit {
        -1 => (ALL_LANES, 0),
        1 => (0, ALL_LANES),
        _ => (ALL_LANES, ALL_LANES),
    }
}

/// 64-lane Curl state.
#[derive(Clone)]
pub struct BctCurl {
    rounds: usize,
    low: [u64; STATE_LENGTH],
    high: [u64; STATE_LENGTH],
}

impl BctCurl {
    /// Zero state in every lane.
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            low: [ALL_LANES; STATE_LENGTH],
            high: [ALL_LANES; STATE_LENGTH],
        }
    }

    /// Broadcast a scalar state into every lane.
    pub fn from_state(rounds: usize, state: &[Trit]) -> Self {
        let mut bct = Self::new(rounds);
        for (index, trit) in state.iter().take(STATE_LENGTH).enumerate() {
            bct.set_trit(index, *trit);
        }
        bct
    }

    /// Set a state trit in every lane.
    #[inline]
    pub fn set_trit(&mut self, index: usize, trit: Trit) {
        let (low, high) = encode(trit);
        self.low[index] = low;
        self.high[index] = high;
    }

    /// Set a state trit in one lane.
    #[inline]
    pub fn set_lane_trit(&mut self, index: usize, lane: usize, trit: Trit) {
        let bit = 1u64 << lane;
        let (low, high) = encode(trit);
        self.low[index] = (self.low[index] & !bit) | (low & bit);
        self.high[index] = (self.high[index] & !bit) | (high & bit);
    }

    /// Read one state trit of one lane.
    #[inline]
    pub fn lane_trit(&self, index: usize, lane: usize) -> Trit {
        let low = (self.low[index] >> lane) & 1;
        let high = (self.high[index] >> lane) & 1;
        match (low, high) {
            (1, 0) => -1,
            (0, 1) => 1,
            _ => 0,
        }
    }

    /// Copy the first `out.len()` state trits of one lane.
    pub fn lane_trits(&self, lane: usize, out: &mut [Trit]) {
        for (index, trit) in out.iter_mut().enumerate() {
            *trit = self.lane_trit(index, lane);
        }
    }

    /// Lanes in which every trit of `range` is zero.
    #[inline]
    pub fn zero_mask(&self, range: Range<usize>) -> u64 {
        range.fold(ALL_LANES, |mask, index| {
            mask & self.low[index] & self.high[index]
        })
    }

    /// Apply the permutation to every lane.
    pub fn transform(&mut self) {
        let mut scratch_low = [0u64; STATE_LENGTH];
        let mut scratch_high = [0u64; STATE_LENGTH];
        let mut index = 0;

        for _ in 0..self.rounds {
            scratch_low.copy_from_slice(&self.low);
            scratch_high.copy_from_slice(&self.high);

            for i in 0..STATE_LENGTH {
                let alpha = scratch_low[index];
                let beta = scratch_high[index];
                index = next_index(index);
                let gamma = scratch_high[index];
                let delta = (alpha | !gamma) & (scratch_low[index] ^ beta);

                self.low[i] = !delta;
                self.high[i] = (alpha ^ gamma) | delta;
            }
        }

        scratch_low.zeroize();
        scratch_high.zeroize();
    }
}

impl Drop for BctCurl {
    fn drop(&mut self) {
        self.low.zeroize();
        self.high.zeroize();
    }
}
