//! # Flex Trits
//!
//! Packed binary form of a trit sequence: each trit occupies two bits,
//! four trits per byte, least significant pair first. Encoding per pair:
//! `00` = -1, `01` = 0, `10` = 1; `11` is never produced and is rejected.
//!
//! The trit count travels with the bytes so padding in the final byte is
//! unambiguous.

use crate::errors::TernaryError;
use crate::trits::{trits_to_trytes, trytes_to_trits, validate_trits, Trit};

/// Trits packed into one byte.
pub const TRITS_PER_BYTE: usize = 4;

/// Bytes needed to pack `num_trits` trits.
#[inline]
pub const fn flex_len(num_trits: usize) -> usize {
    num_trits.div_ceil(TRITS_PER_BYTE)
}

/// Packed trit buffer with its trit count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlexTrits {
    bytes: Vec<u8>,
    num_trits: usize,
}

impl FlexTrits {
    /// Pack trits.
    pub fn from_trits(trits: &[Trit]) -> Result<Self, TernaryError> {
        validate_trits(trits)?;

        let mut bytes = vec![0u8; flex_len(trits.len())];
        for (i, trit) in trits.iter().enumerate() {
            let code = (trit + 1) as u8;
            bytes[i / TRITS_PER_BYTE] |= code << ((i % TRITS_PER_BYTE) * 2);
        }

        Ok(Self {
            bytes,
            num_trits: trits.len(),
        })
    }

    /// Pack a tryte string.
    pub fn from_trytes(trytes: &str) -> Result<Self, TernaryError> {
        Self::from_trits(&trytes_to_trits(trytes)?)
    }

    /// Wrap already packed bytes, validating every pair and the padding.
    pub fn from_bytes(bytes: Vec<u8>, num_trits: usize) -> Result<Self, TernaryError> {
        let expected = flex_len(num_trits);
        if bytes.len() != expected {
            return Err(TernaryError::InvalidBufferLength {
                expected,
                actual: bytes.len(),
            });
        }

        let flex = Self { bytes, num_trits };
        flex.to_trits()?;

        let used_bits = (num_trits % TRITS_PER_BYTE) * 2;
        if used_bits != 0 {
            let padding = flex.bytes[expected - 1] >> used_bits;
            if padding != 0 {
                return Err(TernaryError::Encoding(
                    "non-zero padding in final flex byte".to_string(),
                ));
            }
        }

        Ok(flex)
    }

    /// Unpack into trits.
    pub fn to_trits(&self) -> Result<Vec<Trit>, TernaryError> {
        (0..self.num_trits)
            .map(|i| {
                let code = (self.bytes[i / TRITS_PER_BYTE] >> ((i % TRITS_PER_BYTE) * 2)) & 0b11;
                match code {
                    0b00 => Ok(-1),
                    0b01 => Ok(0),
                    0b10 => Ok(1),
                    _ => Err(TernaryError::Encoding(format!(
                        "invalid flex trit code at position {i}"
                    ))),
                }
            })
            .collect()
    }

    /// Unpack into a tryte string.
    pub fn to_trytes(&self) -> Result<String, TernaryError> {
        trits_to_trytes(&self.to_trits()?)
    }

    /// Packed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of trits represented.
    pub fn num_trits(&self) -> usize {
        self.num_trits
    }

    /// True when no trits are stored.
    pub fn is_empty(&self) -> bool {
        self.num_trits == 0
    }
}
