//! # Curl-P
//!
//! The ternary sponge used for proof-of-work and transaction hashing, and
//! optionally for key derivation. 729-trit state, 243-trit rate, a
//! configurable number of rounds (27 or 81 in practice).
//!
//! Each round replaces every state trit with a substitution of two trits of
//! the previous state, picked by an index that walks the state in steps of
//! `+364` / `-365`.

use crate::errors::CryptoError;
use crate::sponge::{Sponge, HASH_LENGTH, STATE_LENGTH};
use shared_types::{validate_trits, Trit};
use std::fmt;
use zeroize::Zeroize;

/// Rounds of Curl-P-27.
pub const CURL_P27_ROUNDS: usize = 27;

/// Rounds of Curl-P-81 (PoW and transaction hash).
pub const CURL_P81_ROUNDS: usize = 81;

/// Substitution box, indexed by `a + 4*b + 5`.
const TRUTH_TABLE: [Trit; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0];

/// Next position of the state walk.
#[inline(always)]
pub(crate) const fn next_index(index: usize) -> usize {
    if index < 365 {
        index + 364
    } else {
        index - 365
    }
}

/// Curl-P sponge.
#[derive(Clone)]
pub struct Curl {
    rounds: usize,
    state: [Trit; STATE_LENGTH],
}

impl Curl {
    /// Create a sponge with the given round count.
    pub fn new(rounds: usize) -> Result<Self, CryptoError> {
        if rounds == 0 {
            return Err(CryptoError::InvalidRounds(rounds));
        }
        Ok(Self {
            rounds,
            state: [0; STATE_LENGTH],
        })
    }

    /// Curl-P-27.
    pub fn p27() -> Self {
        Self {
            rounds: CURL_P27_ROUNDS,
            state: [0; STATE_LENGTH],
        }
    }

    /// Curl-P-81.
    pub fn p81() -> Self {
        Self {
            rounds: CURL_P81_ROUNDS,
            state: [0; STATE_LENGTH],
        }
    }

    /// Configured round count.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Full 729-trit state.
    pub fn state(&self) -> &[Trit; STATE_LENGTH] {
        &self.state
    }

    /// Apply the permutation to the state.
    pub fn transform(&mut self) {
        let mut scratch = [0 as Trit; STATE_LENGTH];
        let mut index = 0;

        for _ in 0..self.rounds {
            scratch.copy_from_slice(&self.state);
            for trit in self.state.iter_mut() {
                let a = scratch[index] as isize;
                index = next_index(index);
                let b = scratch[index] as isize;
                *trit = TRUTH_TABLE[(a + (b << 2) + 5) as usize];
            }
        }

        scratch.zeroize();
    }
}

impl Sponge for Curl {
    fn absorb(&mut self, input: &[Trit]) -> Result<(), CryptoError> {
        validate_trits(input)?;
        for block in input.chunks(HASH_LENGTH) {
            self.state[..block.len()].copy_from_slice(block);
            self.transform();
        }
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [Trit]) -> Result<(), CryptoError> {
        for block in output.chunks_mut(HASH_LENGTH) {
            let len = block.len();
            block.copy_from_slice(&self.state[..len]);
            self.transform();
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.state.zeroize();
    }
}

impl Drop for Curl {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl fmt::Debug for Curl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curl")
            .field("rounds", &self.rounds)
            .field("state", &"***")
            .finish()
    }
}
