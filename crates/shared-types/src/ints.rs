//! # Ternary Integers
//!
//! Fixed-width balanced ternary encodings of integers, used for transaction
//! fields (value, timestamps, indices) and for offsetting seeds by an index.

use crate::errors::TernaryError;
use crate::trits::Trit;

/// Largest magnitude representable in `len` balanced trits: `(3^len - 1) / 2`.
pub fn max_value(len: usize) -> i128 {
    let mut max: i128 = 0;
    for _ in 0..len.min(80) {
        max = max * 3 + 1;
    }
    max
}

/// Encode `value` into exactly `len` trits, little-endian.
pub fn int_to_trits(value: i64, len: usize) -> Result<Vec<Trit>, TernaryError> {
    if (value as i128).abs() > max_value(len) {
        return Err(TernaryError::Encoding(format!(
            "{value} does not fit in {len} trits"
        )));
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut trits = vec![0; len];

    for trit in trits.iter_mut() {
        if magnitude == 0 {
            break;
        }
        let mut digit = (magnitude % 3) as i8;
        magnitude /= 3;
        if digit == 2 {
            digit = -1;
            magnitude += 1;
        }
        *trit = if negative { -digit } else { digit };
    }

    Ok(trits)
}

/// Decode little-endian balanced trits into an integer.
pub fn trits_to_int(trits: &[Trit]) -> Result<i64, TernaryError> {
    let mut value: i128 = 0;
    for trit in trits.iter().rev() {
        value = value * 3 + *trit as i128;
        if value.abs() > i64::MAX as i128 {
            return Err(TernaryError::Encoding(format!(
                "{} trits overflow a 64-bit integer",
                trits.len()
            )));
        }
    }
    Ok(value as i64)
}

/// Add a non-negative integer to a balanced ternary number in place.
///
/// Carries propagate through the whole buffer; a carry out of the most
/// significant trit is discarded (the addition wraps modulo `3^len`).
pub fn add_assign(trits: &mut [Trit], mut value: u64) {
    let mut carry: i8 = 0;

    for trit in trits.iter_mut() {
        if value == 0 && carry == 0 {
            break;
        }

        let mut digit = (value % 3) as i8;
        value /= 3;
        if digit == 2 {
            digit = -1;
            value += 1;
        }

        let mut sum = *trit + digit + carry;
        carry = 0;
        if sum > 1 {
            sum -= 3;
            carry = 1;
        } else if sum < -1 {
            sum += 3;
            carry = -1;
        }
        *trit = sum;
    }
}
