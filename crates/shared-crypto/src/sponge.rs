//! # Sponge Abstraction
//!
//! Every ternary hash in the engine is a sponge: absorb any number of trits,
//! squeeze any number of trits. Key derivation is generic over [`Sponge`];
//! [`SpongeKind`] selects a concrete one from configuration.

use crate::curl::{Curl, CURL_P27_ROUNDS, CURL_P81_ROUNDS};
use crate::errors::CryptoError;
use crate::kerl::Kerl;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, Trit};
use std::fmt;
use std::str::FromStr;

/// Trits absorbed or squeezed per block.
pub const HASH_LENGTH: usize = 243;

/// Trits of sponge state.
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;

/// A ternary sponge.
pub trait Sponge {
    /// Absorb trits into the state.
    fn absorb(&mut self, input: &[Trit]) -> Result<(), CryptoError>;

    /// Squeeze `output.len()` trits out of the state.
    fn squeeze(&mut self, output: &mut [Trit]) -> Result<(), CryptoError>;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Reset, absorb `input` and squeeze one hash.
    fn digest(&mut self, input: &[Trit]) -> Result<Hash, CryptoError> {
        self.reset();
        self.absorb(input)?;
        let mut out = [0; HASH_LENGTH];
        self.squeeze(&mut out)?;
        Ok(Hash::from_trits(&out)?)
    }
}

/// Selectable sponge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpongeKind {
    /// Keccak-384 based (key, address, signature and bundle hashes)
    #[default]
    Kerl,
    /// Curl-P with 27 rounds
    CurlP27,
    /// Curl-P with 81 rounds (PoW and transaction hashes)
    CurlP81,
}

impl SpongeKind {
    /// Fresh sponge of this kind.
    pub fn sponge(self) -> AnySponge {
        match self {
            Self::Kerl => AnySponge::Kerl(Kerl::new()),
            Self::CurlP27 => AnySponge::Curl(Curl::p27()),
            Self::CurlP81 => AnySponge::Curl(Curl::p81()),
        }
    }

    /// Stable name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kerl => "kerl",
            Self::CurlP27 => "curl-p27",
            Self::CurlP81 => "curl-p81",
        }
    }

    /// Curl round count, if this is a Curl variant.
    pub fn curl_rounds(self) -> Option<usize> {
        match self {
            Self::Kerl => None,
            Self::CurlP27 => Some(CURL_P27_ROUNDS),
            Self::CurlP81 => Some(CURL_P81_ROUNDS),
        }
    }
}

impl fmt::Display for SpongeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpongeKind {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kerl" => Ok(Self::Kerl),
            "curl-p27" | "curlp27" => Ok(Self::CurlP27),
            "curl-p81" | "curlp81" | "curl" => Ok(Self::CurlP81),
            other => Err(CryptoError::UnknownSponge(other.to_string())),
        }
    }
}

/// Runtime-selected sponge.
#[derive(Clone)]
pub enum AnySponge {
    /// Kerl
    Kerl(Kerl),
    /// Curl-P with any round count
    Curl(Curl),
}

impl Sponge for AnySponge {
    fn absorb(&mut self, input: &[Trit]) -> Result<(), CryptoError> {
        match self {
            Self::Kerl(k) => k.absorb(input),
            Self::Curl(c) => c.absorb(input),
        }
    }

    fn squeeze(&mut self, output: &mut [Trit]) -> Result<(), CryptoError> {
        match self {
            Self::Kerl(k) => k.squeeze(output),
            Self::Curl(c) => c.squeeze(output),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Kerl(k) => k.reset(),
            Self::Curl(c) => c.reset(),
        }
    }
}
