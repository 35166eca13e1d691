//! # Shared Types Crate
//!
//! The ternary data model shared by every subsystem: trit and tryte codecs,
//! the packed flex encoding, fixed-width ternary integers, and the fixed-size
//! entities (hashes, seeds, security levels, normalized hashes, transactions).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every buffer length and field offset is
//!   defined here and nowhere else.
//! - **Validate at the boundary**: constructors reject bad trits, bad trytes
//!   and wrong lengths, so downstream code works on checked values.
//! - **Secrets stay secret**: [`Seed`] zeroizes on drop and never prints.

pub mod entities;
pub mod errors;
pub mod flex;
pub mod ints;
pub mod transaction;
pub mod trits;

pub use entities::*;
pub use errors::*;
pub use flex::{flex_len, FlexTrits};
pub use ints::{add_assign, int_to_trits, trits_to_int};
pub use transaction::*;
pub use trits::*;
