//! # Entangled Engine
//!
//! The call-in/return-out contract of the ternary crypto engine:
//!
//! - **Codec**: trytes, trits and packed flex bytes
//! - **Signing**: addresses and one-time signatures from a seed
//! - **Proof of work**: transaction nonces and whole-bundle attachment
//! - **Bundle mining**: secure bundle indices for reused keys
//!
//! Adapters build one [`Engine`] and call it with plain buffers. Failures are
//! reported as [`EngineError`], whose [`EngineError::code`] is stable.
//!
//! ```rust,ignore
//! use entangled_engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::from_env())?;
//! let address = engine.gen_address_trytes(&seed, 0, 2)?;
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use config::{EngineConfig, SigningConfig};
pub use engine::Engine;
pub use error::{EngineError, Result};

pub use en_03_bundle_miner::MinedIndex;
pub use shared_crypto::SpongeKind;
pub use shared_types::{FlexTrits, NormalizedHash, SecurityLevel, Trit};
