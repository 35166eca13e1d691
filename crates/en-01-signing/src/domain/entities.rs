//! # Domain Entities
//!
//! Key material and signatures. Anything derived from a seed is wiped on
//! drop and never printed.

use crate::domain::errors::SigningError;
use shared_types::{
    trits_to_trytes, trytes_to_trits, validate_trits, SecurityLevel, Trit, FRAGMENT_TRIT_LENGTH,
    HASH_TRIT_LENGTH,
};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Per-index secret: the hash of `seed + index`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Subseed {
    trits: [Trit; HASH_TRIT_LENGTH],
}

impl Subseed {
    pub(crate) fn new(trits: [Trit; HASH_TRIT_LENGTH]) -> Self {
        Self { trits }
    }

    pub fn as_trits(&self) -> &[Trit; HASH_TRIT_LENGTH] {
        &self.trits
    }
}

impl fmt::Debug for Subseed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subseed(***)")
    }
}

/// One-time private key: `security` fragments of 27 blocks of 243 trits.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    trits: Vec<Trit>,
    #[zeroize(skip)]
    security: SecurityLevel,
}

impl PrivateKey {
    pub(crate) fn new(trits: Vec<Trit>, security: SecurityLevel) -> Self {
        Self { trits, security }
    }

    pub fn security(&self) -> SecurityLevel {
        self.security
    }

    /// Key trits (use carefully!).
    pub fn as_trits(&self) -> &[Trit] {
        &self.trits
    }

    /// Fragment `index` (6561 trits).
    pub fn fragment(&self, index: usize) -> &[Trit] {
        &self.trits[index * FRAGMENT_TRIT_LENGTH..(index + 1) * FRAGMENT_TRIT_LENGTH]
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("security", &self.security)
            .field("trits", &"***")
            .finish()
    }
}

/// A one-time signature: one 6561-trit fragment per security level.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    trits: Vec<Trit>,
}

impl Signature {
    /// Wrap signature trits. Length must be 1, 2 or 3 whole fragments.
    pub fn from_trits(trits: &[Trit]) -> Result<Self, SigningError> {
        Self::security_for_length(trits.len())?;
        validate_trits(trits)?;
        Ok(Self {
            trits: trits.to_vec(),
        })
    }

    /// Parse a tryte-encoded signature (2187 trytes per fragment).
    pub fn from_trytes(trytes: &str) -> Result<Self, SigningError> {
        let trits = trytes_to_trits(trytes)?;
        Self::from_trits(&trits)
    }

    pub(crate) fn from_vec(trits: Vec<Trit>) -> Self {
        Self { trits }
    }

    pub fn as_trits(&self) -> &[Trit] {
        &self.trits
    }

    pub fn into_trits(self) -> Vec<Trit> {
        self.trits
    }

    pub fn to_trytes(&self) -> String {
        trits_to_trytes(&self.trits).unwrap_or_default()
    }

    /// Number of fragments, as a security level.
    pub fn security(&self) -> SecurityLevel {
        // Length was checked on construction.
        Self::security_for_length(self.trits.len()).unwrap_or_default()
    }

    /// Iterate over the 6561-trit fragments.
    pub fn fragments(&self) -> impl Iterator<Item = &[Trit]> {
        self.trits.chunks_exact(FRAGMENT_TRIT_LENGTH)
    }

    fn security_for_length(len: usize) -> Result<SecurityLevel, SigningError> {
        if len == 0 || len % FRAGMENT_TRIT_LENGTH != 0 {
            return Err(SigningError::InvalidSignatureLength(len));
        }
        SecurityLevel::try_from((len / FRAGMENT_TRIT_LENGTH) as u64)
            .map_err(|_| SigningError::InvalidSignatureLength(len))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("fragments", &(self.trits.len() / FRAGMENT_TRIT_LENGTH))
            .finish()
    }
}
