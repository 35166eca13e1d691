//! # Domain Layer
//!
//! Nonce search and bundle attachment logic.

pub mod bundle;
pub mod pearl_diver;

pub use bundle::attach_bundle;
pub use pearl_diver::{transaction_hash, Nonce, PearlDiver, NONCE_LENGTH};
