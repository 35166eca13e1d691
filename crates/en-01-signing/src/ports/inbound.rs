//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::Signature;
use crate::domain::errors::SigningError;
use shared_types::{Hash, SecurityLevel, Seed};

/// Primary Signing API.
///
/// Implementations must be thread-safe (`Send + Sync`); each call creates
/// its own sponge, so one service may be shared across threads.
pub trait SigningApi: Send + Sync {
    /// Derive the address for `seed` at `index`.
    fn generate_address(
        &self,
        seed: &Seed,
        index: u64,
        security: SecurityLevel,
    ) -> Result<Hash, SigningError>;

    /// Derive consecutive addresses starting at `start`.
    fn generate_addresses(
        &self,
        seed: &Seed,
        start: u64,
        count: usize,
        security: SecurityLevel,
    ) -> Result<Vec<Hash>, SigningError>;

    /// Sign `bundle` with the key at `index`.
    ///
    /// # Security
    /// A key must sign at most one bundle hash; every further signature
    /// leaks more of the private key.
    fn generate_signature(
        &self,
        seed: &Seed,
        index: u64,
        security: SecurityLevel,
        bundle: &Hash,
    ) -> Result<Signature, SigningError>;

    /// Check `signature` over `bundle` against `address`.
    fn verify_signature(
        &self,
        address: &Hash,
        signature: &Signature,
        bundle: &Hash,
    ) -> Result<bool, SigningError>;
}
