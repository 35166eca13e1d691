//! # Kerl
//!
//! Keccak-384 lifted to trits. Each 243-trit block (last trit forced to 0)
//! is read as a balanced ternary integer and fed to Keccak as its 48-byte
//! big-endian two's complement. Squeezing converts the 48-byte digest back
//! to 243 trits and re-seeds Keccak with the complemented digest bytes.

use crate::errors::CryptoError;
use crate::sponge::{Sponge, HASH_LENGTH};
use primitive_types::U512;
use sha3::{Digest, Keccak384};
use shared_types::{validate_trits, Trit};
use std::fmt;
use std::sync::LazyLock;
use zeroize::Zeroize;

/// Bytes in a Keccak-384 digest.
pub const BYTE_LENGTH: usize = 48;

/// Bits in a Kerl integer.
const BIT_LENGTH: usize = BYTE_LENGTH * 8;

/// `(3^243 - 1) / 2`: offset between unsigned digits and balanced trits.
static HALF_3: LazyLock<U512> = LazyLock::new(|| {
    let three = U512::from(3u8);
    let mut half = U512::zero();
    for _ in 0..HASH_LENGTH {
        half = half * three + U512::one();
    }
    half
});

/// `2^384`.
static TWO_POW_384: LazyLock<U512> = LazyLock::new(|| U512::one() << BIT_LENGTH);

/// Kerl sponge.
#[derive(Clone, Default)]
pub struct Kerl {
    keccak: Keccak384,
}

impl Kerl {
    /// Fresh sponge.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Drop for Kerl {
    fn drop(&mut self) {
        Digest::reset(&mut self.keccak);
    }
}

impl fmt::Debug for Kerl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kerl(***)")
    }
}

impl Sponge for Kerl {
    fn absorb(&mut self, input: &[Trit]) -> Result<(), CryptoError> {
        if input.len() % HASH_LENGTH != 0 {
            return Err(CryptoError::UnalignedLength {
                block: HASH_LENGTH,
                actual: input.len(),
            });
        }
        validate_trits(input)?;

        let mut block = [0 as Trit; HASH_LENGTH];
        for chunk in input.chunks_exact(HASH_LENGTH) {
            block.copy_from_slice(chunk);
            block[HASH_LENGTH - 1] = 0;
            let mut bytes = trits_to_bytes(&block);
            self.keccak.update(bytes);
            bytes.zeroize();
        }
        block.zeroize();
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [Trit]) -> Result<(), CryptoError> {
        if output.len() % HASH_LENGTH != 0 {
            return Err(CryptoError::UnalignedLength {
                block: HASH_LENGTH,
                actual: output.len(),
            });
        }

        for chunk in output.chunks_exact_mut(HASH_LENGTH) {
            let mut output = self.keccak.finalize_reset();
            let mut digest = [0u8; BYTE_LENGTH];
            digest.copy_from_slice(&output);
            output.as_mut_slice().zeroize();
            bytes_to_trits(&digest, chunk);
            chunk[HASH_LENGTH - 1] = 0;

            for byte in digest.iter_mut() {
                *byte = !*byte;
            }
            self.keccak.update(digest);
            digest.zeroize();
        }
        Ok(())
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.keccak);
    }
}

/// Encode 243 trits (last trit ignored by callers) as 48 big-endian bytes.
pub fn trits_to_bytes(trits: &[Trit]) -> [u8; BYTE_LENGTH] {
    let three = U512::from(3u8);

    // Horner over unsigned digits (trit + 1), most significant first.
    let mut unsigned = U512::zero();
    for trit in trits.iter().rev() {
        unsigned = unsigned * three + U512::from((*trit + 1) as u8);
    }

    let half = *HALF_3;
    let twos_complement = if unsigned >= half {
        unsigned - half
    } else {
        *TWO_POW_384 - (half - unsigned)
    };

    let mut wide = [0u8; 64];
    twos_complement.to_big_endian(&mut wide);
    let mut bytes = [0u8; BYTE_LENGTH];
    bytes.copy_from_slice(&wide[64 - BYTE_LENGTH..]);
    wide.zeroize();
    bytes
}

/// Decode 48 big-endian two's complement bytes into 243 balanced trits.
pub fn bytes_to_trits(bytes: &[u8; BYTE_LENGTH], trits: &mut [Trit]) {
    let value = U512::from_big_endian(bytes);
    let negative = value.bit(BIT_LENGTH - 1);
    let mut magnitude = if negative {
        *TWO_POW_384 - value
    } else {
        value
    };

    let three = U512::from(3u8);
    for trit in trits.iter_mut().take(HASH_LENGTH) {
        let (quotient, remainder) = magnitude.div_mod(three);
        magnitude = quotient;
        let mut digit = remainder.low_u32() as Trit;
        if digit == 2 {
            digit = -1;
            magnitude = magnitude + U512::one();
        }
        *trit = if negative { -digit } else { digit };
    }
}
