//! # Bundle Miner Subsystem (EN-03)
//!
//! Reusing a WOTS key leaks private key material. Before a bundle is signed
//! with a key that has already signed, the miner searches for a bundle index
//! whose normalized bundle hash keeps the signed fragments away from the
//! extremes ±13 (a 13 reveals an unhashed key block, a -13 one hashed all
//! the way to the public digest).
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): scoring and the partitioned search
//! - **Ports Layer** (`ports/`): the `BundleMinerApi` trait
//! - **Service Layer** (`service.rs`): per-call worker pools and policy
//!
//! ## Determinism
//!
//! The result is the candidate with the fewest extremes, ties broken by the
//! lowest index, regardless of worker count or scheduling.

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::MiningConfig;
pub use domain::{
    forgery_probability, mine, score_index, write_index, Candidate, MinedIndex, MiningPolicy,
    MiningRequest, INDEX_RANGE,
};
pub use error::{MiningError, Result};
pub use ports::inbound::BundleMinerApi;
pub use service::MinerService;
