//! # Domain Layer
//!
//! Candidate scoring and the parallel index search.

pub mod miner;
pub mod scoring;

pub use miner::{mine, MinedIndex, MiningPolicy, MiningRequest};
pub use scoring::{forgery_probability, score_index, write_index, Candidate, INDEX_RANGE};
