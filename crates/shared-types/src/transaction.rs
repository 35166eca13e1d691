//! # Transaction Layout
//!
//! A transaction is a fixed 8019-trit (2673-tryte) record. Fields live at
//! fixed offsets; the nonce is the trailing 81 trits.
//!
//! The *essence* of a transaction is the 486-trit slice from address to
//! last index. A bundle hash is computed over the concatenated essences.

use crate::entities::{Hash, HASH_TRIT_LENGTH};
use crate::errors::TernaryError;
use crate::ints::{int_to_trits, trits_to_int};
use crate::trits::{trits_to_trytes, trytes_to_trits, validate_trits, Trit};

/// Trits in a transaction.
pub const TRANSACTION_TRIT_LENGTH: usize = 8019;

/// Trytes in a transaction.
pub const TRANSACTION_TRYTE_LENGTH: usize = 2673;

/// Trits in one transaction essence.
pub const ESSENCE_TRIT_LENGTH: usize = 486;

/// Largest attachment timestamp (27 trits, all ones).
pub const MAX_TIMESTAMP_VALUE: i64 = 3_812_798_742_493;

/// Offset of the essence inside a transaction.
pub const ESSENCE_OFFSET: usize = Field::Address.offset();

/// Offset of the obsolete tag inside one essence.
pub const ESSENCE_OBSOLETE_TAG_OFFSET: usize = Field::ObsoleteTag.offset() - ESSENCE_OFFSET;

/// Fixed-position transaction fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    SignatureOrMessage,
    Address,
    Value,
    ObsoleteTag,
    Timestamp,
    CurrentIndex,
    LastIndex,
    Bundle,
    TrunkTransaction,
    BranchTransaction,
    Tag,
    AttachmentTimestamp,
    AttachmentTimestampLowerBound,
    AttachmentTimestampUpperBound,
    Nonce,
}

impl Field {
    /// Trit offset of the field.
    pub const fn offset(self) -> usize {
        match self {
            Self::SignatureOrMessage => 0,
            Self::Address => 6561,
            Self::Value => 6804,
            Self::ObsoleteTag => 6885,
            Self::Timestamp => 6966,
            Self::CurrentIndex => 6993,
            Self::LastIndex => 7020,
            Self::Bundle => 7047,
            Self::TrunkTransaction => 7290,
            Self::BranchTransaction => 7533,
            Self::Tag => 7776,
            Self::AttachmentTimestamp => 7857,
            Self::AttachmentTimestampLowerBound => 7884,
            Self::AttachmentTimestampUpperBound => 7911,
            Self::Nonce => 7938,
        }
    }

    /// Trit length of the field.
    pub const fn len(self) -> usize {
        match self {
            Self::SignatureOrMessage => 6561,
            Self::Address | Self::Bundle | Self::TrunkTransaction | Self::BranchTransaction => {
                HASH_TRIT_LENGTH
            }
            Self::Value | Self::ObsoleteTag | Self::Tag | Self::Nonce => 81,
            Self::Timestamp
            | Self::CurrentIndex
            | Self::LastIndex
            | Self::AttachmentTimestamp
            | Self::AttachmentTimestampLowerBound
            | Self::AttachmentTimestampUpperBound => 27,
        }
    }

    /// Trit range of the field.
    pub const fn range(self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.len()
    }
}

/// One transaction as a trit buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Transaction {
    trits: Vec<Trit>,
}

impl Transaction {
    /// Build from exactly 8019 trits.
    pub fn from_trits(trits: &[Trit]) -> Result<Self, TernaryError> {
        if trits.len() != TRANSACTION_TRIT_LENGTH {
            return Err(TernaryError::InvalidBufferLength {
                expected: TRANSACTION_TRIT_LENGTH,
                actual: trits.len(),
            });
        }
        validate_trits(trits)?;
        Ok(Self {
            trits: trits.to_vec(),
        })
    }

    /// Build from exactly 2673 trytes.
    pub fn from_trytes(trytes: &str) -> Result<Self, TernaryError> {
        if trytes.len() != TRANSACTION_TRYTE_LENGTH {
            return Err(TernaryError::InvalidBufferLength {
                expected: TRANSACTION_TRYTE_LENGTH,
                actual: trytes.len(),
            });
        }
        Self::from_trits(&trytes_to_trits(trytes)?)
    }

    /// Full trit buffer.
    pub fn as_trits(&self) -> &[Trit] {
        &self.trits
    }

    /// Tryte encoding (2673 characters).
    pub fn to_trytes(&self) -> String {
        trits_to_trytes(&self.trits).unwrap_or_default()
    }

    /// Trits of one field.
    pub fn field(&self, field: Field) -> &[Trit] {
        &self.trits[field.range()]
    }

    /// Overwrite one field. `trits` must match the field length.
    pub fn set_field(&mut self, field: Field, trits: &[Trit]) -> Result<(), TernaryError> {
        if trits.len() != field.len() {
            return Err(TernaryError::InvalidBufferLength {
                expected: field.len(),
                actual: trits.len(),
            });
        }
        validate_trits(trits)?;
        self.trits[field.range()].copy_from_slice(trits);
        Ok(())
    }

    /// Hash-valued field.
    pub fn hash_field(&self, field: Field) -> Result<Hash, TernaryError> {
        Hash::from_trits(self.field(field))
    }

    /// Integer-valued field.
    pub fn int_field(&self, field: Field) -> Result<i64, TernaryError> {
        trits_to_int(self.field(field))
    }

    /// Write an integer-valued field.
    pub fn set_int_field(&mut self, field: Field, value: i64) -> Result<(), TernaryError> {
        let trits = int_to_trits(value, field.len())?;
        self.set_field(field, &trits)
    }

    /// The 486-trit essence.
    pub fn essence(&self) -> &[Trit] {
        &self.trits[ESSENCE_OFFSET..ESSENCE_OFFSET + ESSENCE_TRIT_LENGTH]
    }

    pub fn address(&self) -> Result<Hash, TernaryError> {
        self.hash_field(Field::Address)
    }

    pub fn trunk(&self) -> Result<Hash, TernaryError> {
        self.hash_field(Field::TrunkTransaction)
    }

    pub fn branch(&self) -> Result<Hash, TernaryError> {
        self.hash_field(Field::BranchTransaction)
    }

    pub fn bundle(&self) -> Result<Hash, TernaryError> {
        self.hash_field(Field::Bundle)
    }

    pub fn nonce(&self) -> &[Trit] {
        self.field(Field::Nonce)
    }

    pub fn current_index(&self) -> Result<i64, TernaryError> {
        self.int_field(Field::CurrentIndex)
    }

    pub fn last_index(&self) -> Result<i64, TernaryError> {
        self.int_field(Field::LastIndex)
    }

    /// Stamp the attachment window: timestamp, lower bound 0, upper bound max.
    pub fn set_attachment(&mut self, timestamp: i64) -> Result<(), TernaryError> {
        if !(0..=MAX_TIMESTAMP_VALUE).contains(&timestamp) {
            return Err(TernaryError::Encoding(format!(
                "attachment timestamp {timestamp} outside [0, {MAX_TIMESTAMP_VALUE}]"
            )));
        }
        self.set_int_field(Field::AttachmentTimestamp, timestamp)?;
        self.set_int_field(Field::AttachmentTimestampLowerBound, 0)?;
        self.set_int_field(Field::AttachmentTimestampUpperBound, MAX_TIMESTAMP_VALUE)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            trits: vec![0; TRANSACTION_TRIT_LENGTH],
        }
    }
}

impl std::fmt::Debug for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("address", &self.address().ok())
            .field("current_index", &self.current_index().ok())
            .field("last_index", &self.last_index().ok())
            .finish_non_exhaustive()
    }
}

/// Check that a bundle essence is a non-empty whole number of essences.
pub fn validate_essence(essence: &[Trit]) -> Result<usize, TernaryError> {
    if essence.is_empty() {
        return Err(TernaryError::Encoding("empty bundle essence".to_string()));
    }
    if essence.len() % ESSENCE_TRIT_LENGTH != 0 {
        return Err(TernaryError::InvalidBufferLength {
            expected: (essence.len() / ESSENCE_TRIT_LENGTH + 1) * ESSENCE_TRIT_LENGTH,
            actual: essence.len(),
        });
    }
    validate_trits(essence)?;
    Ok(essence.len() / ESSENCE_TRIT_LENGTH)
}
