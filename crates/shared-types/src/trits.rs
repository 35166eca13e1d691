//! # Trit / Tryte Codec
//!
//! Balanced ternary primitives. A trit is one of {-1, 0, 1}; a tryte is a
//! group of three trits, little-endian, with value `t0 + 3*t1 + 9*t2` in
//! `[-13, 13]`, written with the alphabet `9ABCDEFGHIJKLMNOPQRSTUVWXYZ`.

use crate::errors::TernaryError;

/// A single balanced ternary digit.
pub type Trit = i8;

/// Trits per tryte.
pub const TRITS_PER_TRYTE: usize = 3;

/// Largest absolute tryte value.
pub const MAX_TRYTE_VALUE: i8 = 13;

/// Tryte alphabet, indexed by `value mod 27`.
pub const TRYTE_ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Trit triples for every tryte value, indexed like [`TRYTE_ALPHABET`].
const TRYTE_TRITS: [[Trit; 3]; 27] = [
    [0, 0, 0],
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
    [-1, -1, -1],
    [0, -1, -1],
    [1, -1, -1],
    [-1, 0, -1],
    [0, 0, -1],
    [1, 0, -1],
    [-1, 1, -1],
    [0, 1, -1],
    [1, 1, -1],
    [-1, -1, 0],
    [0, -1, 0],
    [1, -1, 0],
    [-1, 0, 0],
];

/// Check that every value is a valid trit.
pub fn validate_trits(trits: &[Trit]) -> Result<(), TernaryError> {
    match trits.iter().find(|t| !(-1..=1).contains(*t)) {
        Some(bad) => Err(TernaryError::InvalidTrit(*bad)),
        None => Ok(()),
    }
}

/// Signed value of a tryte character.
pub fn tryte_value(tryte: char) -> Result<i8, TernaryError> {
    let index = alphabet_index(tryte)?;
    Ok(if index > MAX_TRYTE_VALUE as usize {
        index as i8 - 27
    } else {
        index as i8
    })
}

/// Tryte character for a signed value in `[-13, 13]`.
pub fn tryte_from_value(value: i8) -> Result<char, TernaryError> {
    if !(-MAX_TRYTE_VALUE..=MAX_TRYTE_VALUE).contains(&value) {
        return Err(TernaryError::Encoding(format!(
            "tryte value {value} outside [-13, 13]"
        )));
    }
    Ok(TRYTE_ALPHABET[value.rem_euclid(27) as usize] as char)
}

/// Signed value of three trits.
#[inline]
pub fn trits_to_value(trits: &[Trit]) -> i8 {
    trits[0] + 3 * trits[1] + 9 * trits[2]
}

fn alphabet_index(tryte: char) -> Result<usize, TernaryError> {
    match tryte {
        '9' => Ok(0),
        'A'..='Z' => Ok(tryte as usize - 'A' as usize + 1),
        other => Err(TernaryError::InvalidTryte(other)),
    }
}

/// Decode a tryte string into trits (three per tryte).
pub fn trytes_to_trits(trytes: &str) -> Result<Vec<Trit>, TernaryError> {
    let mut trits = Vec::with_capacity(trytes.len() * TRITS_PER_TRYTE);
    for c in trytes.chars() {
        trits.extend_from_slice(&TRYTE_TRITS[alphabet_index(c)?]);
    }
    Ok(trits)
}

/// Encode trits as a tryte string. The trit count must be a multiple of 3.
pub fn trits_to_trytes(trits: &[Trit]) -> Result<String, TernaryError> {
    if trits.len() % TRITS_PER_TRYTE != 0 {
        return Err(TernaryError::Encoding(format!(
            "{} trits is not a whole number of trytes",
            trits.len()
        )));
    }
    validate_trits(trits)?;

    Ok(trits
        .chunks_exact(TRITS_PER_TRYTE)
        .map(|chunk| TRYTE_ALPHABET[trits_to_value(chunk).rem_euclid(27) as usize] as char)
        .collect())
}
