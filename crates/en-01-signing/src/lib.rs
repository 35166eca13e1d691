//! # Signing Subsystem (EN-01)
//!
//! Derives Winternitz one-time keys, addresses and signatures from a seed,
//! and verifies signatures against addresses.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure key derivation and signing, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for the inbound interface
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **One-time keys**: each index must sign at most one bundle hash
//! - **Zeroization**: subseeds, private keys and chain buffers are wiped on
//!   every exit path
//! - **No secret logging**: seeds and keys are skipped by every span

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{PrivateKey, Signature, Subseed};
pub use domain::errors::SigningError;
pub use domain::iss::{
    address, digests, digests_from_signature, generate_address, generate_signature, key, sign,
    subseed, verify, CHAIN_LENGTH,
};
pub use ports::inbound::SigningApi;
pub use service::SigningService;
