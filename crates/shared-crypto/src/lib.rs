//! # Shared Crypto - Ternary Sponge Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `curl` | Curl-P-27 / Curl-P-81 | PoW, transaction hashes, optional key derivation |
//! | `bct` | 64-lane bitsliced Curl-P | Parallel nonce search |
//! | `kerl` | Keccak-384 over trits | Keys, addresses, signatures, bundle hashes |
//! | `sponge` | `Sponge` trait, `SpongeKind` | Runtime selection of the hash |
//!
//! ## Security Properties
//!
//! - **Curl / BctCurl**: state wiped on drop
//! - **Kerl**: intermediate byte buffers wiped after each block

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bct;
pub mod curl;
pub mod errors;
pub mod kerl;
pub mod sponge;

// Re-exports
pub use bct::{BctCurl, LANES};
pub use curl::{Curl, CURL_P27_ROUNDS, CURL_P81_ROUNDS};
pub use errors::CryptoError;
pub use kerl::Kerl;
pub use sponge::{AnySponge, Sponge, SpongeKind, HASH_LENGTH, STATE_LENGTH};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
