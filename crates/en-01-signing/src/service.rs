//! # Signing Service
//!
//! Application service layer that implements the `SigningApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`SigningApi`)
//! - Picks the sponge from configuration
//! - Delegates key derivation and signing to the domain layer

use crate::domain::entities::Signature;
use crate::domain::errors::SigningError;
use crate::domain::iss;
use crate::ports::inbound::SigningApi;
use shared_crypto::SpongeKind;
use shared_types::{Hash, SecurityLevel, Seed};
use tracing::{debug, instrument};

/// Signing Service.
///
/// Stateless apart from the sponge choice; safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigningService {
    sponge: SpongeKind,
}

impl SigningService {
    /// Create a service hashing with `sponge`.
    pub fn new(sponge: SpongeKind) -> Self {
        Self { sponge }
    }

    pub fn sponge_kind(&self) -> SpongeKind {
        self.sponge
    }
}

impl SigningApi for SigningService {
    #[instrument(skip(self, seed), fields(sponge = %self.sponge))]
    fn generate_address(
        &self,
        seed: &Seed,
        index: u64,
        security: SecurityLevel,
    ) -> Result<Hash, SigningError> {
        let mut sponge = self.sponge.sponge();
        let address = iss::generate_address(&mut sponge, seed, index, security)?;
        debug!(%address, "address generated");
        Ok(address)
    }

    #[instrument(skip(self, seed), fields(sponge = %self.sponge))]
    fn generate_addresses(
        &self,
        seed: &Seed,
        start: u64,
        count: usize,
        security: SecurityLevel,
    ) -> Result<Vec<Hash>, SigningError> {
        let mut sponge = self.sponge.sponge();
        (start..)
            .take(count)
            .map(|index| iss::generate_address(&mut sponge, seed, index, security))
            .collect()
    }

    #[instrument(skip(self, seed), fields(sponge = %self.sponge))]
    fn generate_signature(
        &self,
        seed: &Seed,
        index: u64,
        security: SecurityLevel,
        bundle: &Hash,
    ) -> Result<Signature, SigningError> {
        let mut sponge = self.sponge.sponge();
        let signature = iss::generate_signature(&mut sponge, seed, index, security, bundle)?;
        debug!(fragments = signature.security().fragments(), "signature generated");
        Ok(signature)
    }

    #[instrument(skip(self, signature), fields(sponge = %self.sponge))]
    fn verify_signature(
        &self,
        address: &Hash,
        signature: &Signature,
        bundle: &Hash,
    ) -> Result<bool, SigningError> {
        let mut sponge = self.sponge.sponge();
        iss::verify(&mut sponge, address, signature, bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SigningService {
        SigningService::new(SpongeKind::CurlP27)
    }

    fn seed() -> Seed {
        Seed::from_trytes(&"SEED".repeat(21)[..81]).unwrap()
    }

    #[test]
    fn test_default_sponge_is_kerl() {
        assert_eq!(SigningService::default().sponge_kind(), SpongeKind::Kerl);
    }

    #[test]
    fn test_generate_addresses_matches_single() {
        let service = service();
        let batch = service
            .generate_addresses(&seed(), 4, 3, SecurityLevel::Low)
            .unwrap();
        assert_eq!(batch.len(), 3);
        for (offset, address) in batch.iter().enumerate() {
            let single = service
                .generate_address(&seed(), 4 + offset as u64, SecurityLevel::Low)
                .unwrap();
            assert_eq!(*address, single);
        }
    }

    #[test]
    fn test_deterministic() {
        let service = service();
        let a = service.generate_address(&seed(), 9, SecurityLevel::Medium).unwrap();
        let b = service.generate_address(&seed(), 9, SecurityLevel::Medium).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_security_levels_differ() {
        let service = service();
        let low = service.generate_address(&seed(), 0, SecurityLevel::Low).unwrap();
        let high = service.generate_address(&seed(), 0, SecurityLevel::High).unwrap();
        assert_ne!(low, high);
    }

    #[test]
    fn test_sign_and_verify_security_3() {
        let service = service();
        let bundle = Hash::from_trytes(&"XYZ".repeat(27)).unwrap();
        let address = service.generate_address(&seed(), 2, SecurityLevel::High).unwrap();
        let signature = service
            .generate_signature(&seed(), 2, SecurityLevel::High, &bundle)
            .unwrap();

        assert_eq!(signature.as_trits().len(), 3 * 6561);
        assert!(service.verify_signature(&address, &signature, &bundle).unwrap());

        let wrong_address = service.generate_address(&seed(), 3, SecurityLevel::High).unwrap();
        assert!(!service.verify_signature(&wrong_address, &signature, &bundle).unwrap());
    }
}
