//! # Core Domain Entities
//!
//! Fixed-size ternary values shared by every subsystem: hashes, seeds,
//! security levels and normalized bundle hashes.

use crate::errors::TernaryError;
use crate::trits::{trits_to_trytes, trits_to_value, trytes_to_trits, validate_trits, Trit};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Trits in a hash, address, seed or bundle hash.
pub const HASH_TRIT_LENGTH: usize = 243;

/// Trytes in a hash.
pub const HASH_TRYTE_LENGTH: usize = 81;

/// Trits in one key fragment (27 hash-sized blocks).
pub const FRAGMENT_TRIT_LENGTH: usize = 6561;

/// Hash-sized blocks in one key fragment.
pub const FRAGMENT_BLOCKS: usize = 27;

/// Values in one normalized fragment.
pub const NORMALIZED_FRAGMENT_LENGTH: usize = 27;

/// Values in a normalized hash.
pub const NORMALIZED_HASH_LENGTH: usize = 81;

/// Largest absolute normalized value. Values at ±13 are the extremes.
pub const NORMALIZED_MAX: i8 = 13;

// =============================================================================
// HASH
// =============================================================================

/// A 243-trit hash (address, bundle hash, transaction hash, trunk, branch).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([Trit; HASH_TRIT_LENGTH]);

impl Hash {
    /// The all-zero hash (`999...9`).
    pub const fn zero() -> Self {
        Self([0; HASH_TRIT_LENGTH])
    }

    /// Build from exactly 243 trits.
    pub fn from_trits(trits: &[Trit]) -> Result<Self, TernaryError> {
        if trits.len() != HASH_TRIT_LENGTH {
            return Err(TernaryError::InvalidBufferLength {
                expected: HASH_TRIT_LENGTH,
                actual: trits.len(),
            });
        }
        validate_trits(trits)?;

        let mut inner = [0; HASH_TRIT_LENGTH];
        inner.copy_from_slice(trits);
        Ok(Self(inner))
    }

    /// Build from exactly 81 trytes.
    pub fn from_trytes(trytes: &str) -> Result<Self, TernaryError> {
        Self::from_trits(&trytes_to_trits(trytes)?)
    }

    /// Trit view.
    pub fn as_trits(&self) -> &[Trit; HASH_TRIT_LENGTH] {
        &self.0
    }

    /// Tryte encoding (81 characters).
    pub fn to_trytes(&self) -> String {
        // Trits were validated on construction, so encoding cannot fail.
        trits_to_trytes(&self.0).unwrap_or_default()
    }

    /// Number of trailing zero trits (PoW weight).
    pub fn trailing_zeros(&self) -> usize {
        self.0.iter().rev().take_while(|t| **t == 0).count()
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_trytes())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_trytes())
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_trytes())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_trytes(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// SEED
// =============================================================================

/// A secret 243-trit seed. Zeroized on drop; `Debug` never prints it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    inner: [Trit; HASH_TRIT_LENGTH],
}

impl Seed {
    /// Build from exactly 243 trits.
    pub fn from_trits(trits: &[Trit]) -> Result<Self, TernaryError> {
        if trits.len() != HASH_TRIT_LENGTH {
            return Err(TernaryError::InvalidSeedLength(trits.len()));
        }
        validate_trits(trits)?;

        let mut inner = [0; HASH_TRIT_LENGTH];
        inner.copy_from_slice(trits);
        Ok(Self { inner })
    }

    /// Build from exactly 81 trytes.
    pub fn from_trytes(trytes: &str) -> Result<Self, TernaryError> {
        let mut trits = trytes_to_trits(trytes)?;
        let seed = Self::from_trits(&trits);
        trits.zeroize();
        seed
    }

    /// Seed trits (use carefully!).
    ///
    /// # Security
    ///
    /// Do not copy the returned slice into buffers that outlive the call
    /// unless they zeroize themselves.
    pub fn as_trits(&self) -> &[Trit; HASH_TRIT_LENGTH] {
        &self.inner
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(***)")
    }
}

// =============================================================================
// SECURITY LEVEL
// =============================================================================

/// Number of key fragments participating in a key, address and signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SecurityLevel {
    /// One fragment (81-tryte digest, 2187-tryte signature)
    Low = 1,
    /// Two fragments
    Medium = 2,
    /// Three fragments
    High = 3,
}

impl SecurityLevel {
    /// Level as an integer in {1, 2, 3}.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of 6561-trit key fragments.
    pub fn fragments(self) -> usize {
        self as usize
    }

    /// Key and signature length in trits (`security * 6561`).
    pub fn key_length(self) -> usize {
        self.fragments() * FRAGMENT_TRIT_LENGTH
    }

    /// Length of the concatenated fragment digests in trits.
    pub fn digests_length(self) -> usize {
        self.fragments() * HASH_TRIT_LENGTH
    }

    /// Normalized values covered by the signed fragments.
    pub fn normalized_length(self) -> usize {
        self.fragments() * NORMALIZED_FRAGMENT_LENGTH
    }
}

impl Default for SecurityLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl TryFrom<u8> for SecurityLevel {
    type Error = TernaryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(u64::from(value))
    }
}

impl TryFrom<u64> for SecurityLevel {
    type Error = TernaryError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(TernaryError::InvalidSecurityLevel(other)),
        }
    }
}

impl From<SecurityLevel> for u8 {
    fn from(level: SecurityLevel) -> Self {
        level.as_u8()
    }
}

// =============================================================================
// NORMALIZED HASH
// =============================================================================

/// A hash re-expressed as 81 signed tryte values in `[-13, 13]`, each
/// 27-value chunk shifted to sum to zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedHash([i8; NORMALIZED_HASH_LENGTH]);

impl NormalizedHash {
    /// Normalize a hash.
    pub fn from_hash(hash: &Hash) -> Self {
        let mut values = [0i8; NORMALIZED_HASH_LENGTH];
        for (value, chunk) in values.iter_mut().zip(hash.as_trits().chunks_exact(3)) {
            *value = trits_to_value(chunk);
        }

        for chunk in values.chunks_exact_mut(NORMALIZED_FRAGMENT_LENGTH) {
            let mut sum: i32 = chunk.iter().map(|v| *v as i32).sum();

            while sum > 0 {
                if let Some(v) = chunk.iter_mut().find(|v| **v > -NORMALIZED_MAX) {
                    *v -= 1;
                }
                sum -= 1;
            }
            while sum < 0 {
                if let Some(v) = chunk.iter_mut().find(|v| **v < NORMALIZED_MAX) {
                    *v += 1;
                }
                sum += 1;
            }
        }

        Self(values)
    }

    /// Wrap 81 caller-provided values, each in `[-13, 13]`.
    pub fn from_values(values: &[i8]) -> Result<Self, TernaryError> {
        if values.len() != NORMALIZED_HASH_LENGTH {
            return Err(TernaryError::InvalidBufferLength {
                expected: NORMALIZED_HASH_LENGTH,
                actual: values.len(),
            });
        }
        if let Some(bad) = values
            .iter()
            .find(|v| !(-NORMALIZED_MAX..=NORMALIZED_MAX).contains(*v))
        {
            return Err(TernaryError::Encoding(format!(
                "normalized value {bad} outside [-13, 13]"
            )));
        }

        let mut inner = [0i8; NORMALIZED_HASH_LENGTH];
        inner.copy_from_slice(values);
        Ok(Self(inner))
    }

    /// The most secure reference: every position at -13.
    pub fn floor() -> Self {
        Self([-NORMALIZED_MAX; NORMALIZED_HASH_LENGTH])
    }

    /// All 81 values.
    pub fn values(&self) -> &[i8; NORMALIZED_HASH_LENGTH] {
        &self.0
    }

    /// The 27 values governing fragment `index` (fragments wrap every three).
    pub fn fragment(&self, index: usize) -> &[i8] {
        let start = (index % 3) * NORMALIZED_FRAGMENT_LENGTH;
        &self.0[start..start + NORMALIZED_FRAGMENT_LENGTH]
    }

    /// Element-wise maximum, used to accumulate already signed bundle hashes.
    pub fn max_with(&self, other: &Self) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(other.0.iter()) {
            *a = (*a).max(*b);
        }
        Self(out)
    }

    /// Count of values at ±13 in the fragments covered by `security`.
    pub fn extreme_count(&self, security: SecurityLevel) -> usize {
        self.0[..security.normalized_length()]
            .iter()
            .filter(|v| v.abs() == NORMALIZED_MAX)
            .count()
    }
}

impl fmt::Debug for NormalizedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NormalizedHash").field(&&self.0[..]).finish()
    }
}
