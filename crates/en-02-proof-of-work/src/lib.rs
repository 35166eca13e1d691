//! # Proof-of-Work Subsystem (EN-02)
//!
//! Finds nonces that give a transaction's Curl-P-81 hash a required number
//! of trailing zero trits (the minimum weight magnitude, MWM), and attaches
//! whole bundles by chaining trunk/branch references and doing PoW on each
//! transaction.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): bitsliced nonce search and bundle chaining
//! - **Ports Layer** (`ports/`): the `ProofOfWorkApi` trait
//! - **Service Layer** (`service.rs`): wires configuration and the worker pool
//!
//! ## Search Termination
//!
//! The search stops at the first hit from any worker. Without an iteration
//! budget it runs until a nonce is found; with one, every worker giving up
//! yields [`PowError::Exhausted`].

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::{PowConfig, DEFAULT_MWM};
pub use domain::{attach_bundle, transaction_hash, Nonce, PearlDiver, NONCE_LENGTH};
pub use error::{PowError, Result};
pub use ports::inbound::ProofOfWorkApi;
pub use service::PowService;
