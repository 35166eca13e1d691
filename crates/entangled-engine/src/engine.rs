//! # Engine Facade
//!
//! One stable function-call contract over the subsystems. Every call takes
//! plain buffers (tryte strings, trit slices, integers), validates them,
//! delegates to a subsystem service and hands back owned buffers or an
//! [`EngineError`]. The engine holds no per-call state; searches build their
//! worker pools inside the call.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use en_01_signing::{Signature, SigningApi, SigningService};
use en_02_proof_of_work::{PowError, PowService, ProofOfWorkApi};
use en_03_bundle_miner::{BundleMinerApi, MinedIndex, MinerService};
use shared_types::{
    trits_to_trytes, trytes_to_trits, FlexTrits, Hash, NormalizedHash, SecurityLevel, Seed,
    Transaction, Trit,
};
use tracing::{debug, instrument};

/// The engine.
pub struct Engine {
    config: EngineConfig,
    signing: SigningService,
    pow: PowService,
    miner: MinerService,
}

impl Engine {
    /// Build an engine from a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let signing = SigningService::new(config.signing.sponge);
        let pow = PowService::new(config.pow.clone())?;
        let miner = MinerService::new(config.mining.clone());
        debug!(pow_workers = pow.workers(), sponge = %signing.sponge_kind(), "engine ready");

        Ok(Self {
            config,
            signing,
            pow,
            miner,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Codec
    // -------------------------------------------------------------------------

    pub fn trytes_to_trits(&self, trytes: &str) -> Result<Vec<Trit>> {
        Ok(trytes_to_trits(trytes)?)
    }

    pub fn trits_to_trytes(&self, trits: &[Trit]) -> Result<String> {
        Ok(trits_to_trytes(trits)?)
    }

    pub fn trits_to_flex(&self, trits: &[Trit]) -> Result<FlexTrits> {
        Ok(FlexTrits::from_trits(trits)?)
    }

    /// Unpack `num_trits` trits from packed bytes.
    pub fn flex_to_trits(&self, bytes: &[u8], num_trits: usize) -> Result<Vec<Trit>> {
        Ok(FlexTrits::from_bytes(bytes.to_vec(), num_trits)?.to_trits()?)
    }

    // -------------------------------------------------------------------------
    // Proof of work
    // -------------------------------------------------------------------------

    /// Nonce (27 trytes) for a 2673-tryte transaction.
    pub fn pow_trytes(&self, trytes: &str, mwm: usize) -> Result<String> {
        Ok(self.pow.pow_trytes(trytes, mwm)?)
    }

    /// Attach a bundle at the current time; returns the attached
    /// transactions in their original order.
    pub fn pow_bundle<S: AsRef<str>>(
        &self,
        transactions: &[S],
        trunk: &str,
        branch: &str,
        mwm: usize,
    ) -> Result<Vec<String>> {
        let (mut bundle, trunk, branch) = parse_bundle(transactions, trunk, branch)?;
        self.pow.pow_bundle(&mut bundle, &trunk, &branch, mwm)?;
        Ok(bundle.iter().map(Transaction::to_trytes).collect())
    }

    /// [`Engine::pow_bundle`] with an explicit attachment timestamp
    /// (milliseconds).
    pub fn pow_bundle_at<S: AsRef<str>>(
        &self,
        transactions: &[S],
        trunk: &str,
        branch: &str,
        mwm: usize,
        timestamp: i64,
    ) -> Result<Vec<String>> {
        let (mut bundle, trunk, branch) = parse_bundle(transactions, trunk, branch)?;
        self.pow
            .pow_bundle_at(&mut bundle, &trunk, &branch, mwm, timestamp)?;
        Ok(bundle.iter().map(Transaction::to_trytes).collect())
    }

    /// Curl-P-81 hash of a 2673-tryte transaction.
    pub fn transaction_hash(&self, trytes: &str) -> Result<String> {
        let transaction = Transaction::from_trytes(trytes).map_err(PowError::from)?;
        Ok(self.pow.transaction_hash(&transaction)?.to_trytes())
    }

    // -------------------------------------------------------------------------
    // Signing
    // -------------------------------------------------------------------------

    #[instrument(skip(self, seed))]
    pub fn gen_address_trytes(&self, seed: &str, index: u64, security: u8) -> Result<String> {
        let seed = Seed::from_trytes(seed)?;
        let security = SecurityLevel::try_from(security)?;
        let address = self.signing.generate_address(&seed, index, security)?;
        Ok(address.to_trytes())
    }

    #[instrument(skip(self, seed))]
    pub fn gen_address_trits(&self, seed: &[Trit], index: u64, security: u8) -> Result<Vec<Trit>> {
        let seed = Seed::from_trits(seed)?;
        let security = SecurityLevel::try_from(security)?;
        let address = self.signing.generate_address(&seed, index, security)?;
        Ok(address.as_trits().to_vec())
    }

    /// `count` consecutive addresses starting at `start`.
    #[instrument(skip(self, seed))]
    pub fn gen_addresses_trytes(
        &self,
        seed: &str,
        start: u64,
        count: usize,
        security: u8,
    ) -> Result<Vec<String>> {
        let seed = Seed::from_trytes(seed)?;
        let security = SecurityLevel::try_from(security)?;
        let addresses = self
            .signing
            .generate_addresses(&seed, start, count, security)?;
        Ok(addresses.iter().map(Hash::to_trytes).collect())
    }

    #[instrument(skip(self, seed, bundle))]
    pub fn gen_signature_trytes(
        &self,
        seed: &str,
        index: u64,
        security: u8,
        bundle: &str,
    ) -> Result<String> {
        let seed = Seed::from_trytes(seed)?;
        let security = SecurityLevel::try_from(security)?;
        let bundle = Hash::from_trytes(bundle)?;
        let signature = self
            .signing
            .generate_signature(&seed, index, security, &bundle)?;
        Ok(signature.to_trytes())
    }

    #[instrument(skip(self, seed, bundle))]
    pub fn gen_signature_trits(
        &self,
        seed: &[Trit],
        index: u64,
        security: u8,
        bundle: &[Trit],
    ) -> Result<Vec<Trit>> {
        let seed = Seed::from_trits(seed)?;
        let security = SecurityLevel::try_from(security)?;
        let bundle = Hash::from_trits(bundle)?;
        let signature = self
            .signing
            .generate_signature(&seed, index, security, &bundle)?;
        Ok(signature.into_trits())
    }

    /// Check a signature (1-3 fragments of 2187 trytes) over `bundle`.
    pub fn verify_signature(&self, address: &str, signature: &str, bundle: &str) -> Result<bool> {
        let address = Hash::from_trytes(address)?;
        let signature = Signature::from_trytes(signature)?;
        let bundle = Hash::from_trytes(bundle)?;
        Ok(self.signing.verify_signature(&address, &signature, &bundle)?)
    }

    /// Normalized form of a bundle hash, for building `bundle_normalized_max`.
    pub fn normalize_bundle(&self, bundle: &str) -> Result<NormalizedHash> {
        Ok(NormalizedHash::from_hash(&Hash::from_trytes(bundle)?))
    }

    // -------------------------------------------------------------------------
    // Bundle mining
    // -------------------------------------------------------------------------

    /// Mine a bundle index over `0..count`. Only the first `essence_length`
    /// trits of `essence` are used.
    ///
    /// `bundle_normalized_max` only shapes the reported forgery probability;
    /// the winner is picked by its own extreme count under the given policy.
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, bundle_normalized_max, essence))]
    pub fn bundle_miner(
        &self,
        bundle_normalized_max: &[i8],
        security: u8,
        essence: &[Trit],
        essence_length: usize,
        count: u64,
        nprocs: usize,
        mining_threshold: usize,
        fully_secure: bool,
    ) -> Result<MinedIndex> {
        let normalized_max = NormalizedHash::from_values(bundle_normalized_max)?;
        let security = SecurityLevel::try_from(security)?;
        let essence = essence
            .get(..essence_length)
            .ok_or(EngineError::InvalidBufferLength {
                expected: essence_length,
                actual: essence.len(),
            })?;

        Ok(self.miner.mine_with(
            &normalized_max,
            security,
            essence,
            count,
            nprocs,
            mining_threshold,
            fully_secure,
        )?)
    }

    /// [`Engine::bundle_miner`] with the configured security, worker count
    /// and policy.
    pub fn bundle_miner_default(
        &self,
        bundle_normalized_max: &[i8],
        essence: &[Trit],
        count: u64,
    ) -> Result<MinedIndex> {
        let normalized_max = NormalizedHash::from_values(bundle_normalized_max)?;
        Ok(self.miner.mine(&normalized_max, essence, count)?)
    }
}

/// Bundle inputs are reported as `PowFailed` when malformed.
fn parse_bundle<S: AsRef<str>>(
    transactions: &[S],
    trunk: &str,
    branch: &str,
) -> std::result::Result<(Vec<Transaction>, Hash, Hash), PowError> {
    let bundle = transactions
        .iter()
        .map(|trytes| Transaction::from_trytes(trytes.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let trunk = Hash::from_trytes(trunk)?;
    let branch = Hash::from_trytes(branch)?;
    Ok((bundle, trunk, branch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use en_02_proof_of_work::PowConfig;
    use shared_crypto::SpongeKind;

    fn engine() -> Engine {
        let mut config = EngineConfig {
            pow: PowConfig {
                threads: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        config.signing.sponge = SpongeKind::CurlP27;
        Engine::new(config).unwrap()
    }

    fn seed() -> String {
        "SEED9".repeat(17)[..81].to_string()
    }

    #[test]
    fn test_codec_round_trips() {
        let engine = engine();
        let trits = engine.trytes_to_trits("HELLO9WORLD").unwrap();
        assert_eq!(trits.len(), 33);
        assert_eq!(engine.trits_to_trytes(&trits).unwrap(), "HELLO9WORLD");

        let flex = engine.trits_to_flex(&trits).unwrap();
        let back = engine.flex_to_trits(flex.as_bytes(), trits.len()).unwrap();
        assert_eq!(back, trits);
    }

    #[test]
    fn test_bad_trytes_are_encoding_errors() {
        let engine = engine();
        assert_eq!(engine.trytes_to_trits("abc").unwrap_err().code(), 1);
        assert_eq!(engine.trits_to_trytes(&[2, 0, 0]).unwrap_err().code(), 1);
    }

    #[test]
    fn test_address_trytes_and_trits_agree() {
        let engine = engine();
        let trytes = engine.gen_address_trytes(&seed(), 3, 2).unwrap();
        let seed_trits = engine.trytes_to_trits(&seed()).unwrap();
        let trits = engine.gen_address_trits(&seed_trits, 3, 2).unwrap();
        assert_eq!(engine.trits_to_trytes(&trits).unwrap(), trytes);
    }

    #[test]
    fn test_address_range_matches_single_derivation() {
        let engine = engine();
        let addresses = engine.gen_addresses_trytes(&seed(), 5, 3, 1).unwrap();
        assert_eq!(addresses.len(), 3);
        for (offset, address) in addresses.iter().enumerate() {
            let single = engine.gen_address_trytes(&seed(), 5 + offset as u64, 1).unwrap();
            assert_eq!(*address, single);
        }
        assert!(engine.gen_addresses_trytes(&seed(), 0, 0, 1).unwrap().is_empty());
        assert_eq!(
            engine.gen_addresses_trytes(&seed(), 0, 2, 0),
            Err(EngineError::InvalidSecurityLevel(0))
        );
    }

    #[test]
    fn test_invalid_security_and_seed() {
        let engine = engine();
        assert_eq!(
            engine.gen_address_trytes(&seed(), 0, 4),
            Err(EngineError::InvalidSecurityLevel(4))
        );
        assert_eq!(
            engine.gen_address_trytes("ABC", 0, 2),
            Err(EngineError::InvalidSeedLength(9))
        );
    }

    #[test]
    fn test_sign_and_verify() {
        let engine = engine();
        let bundle = "BUNDLE".repeat(14)[..81].to_string();
        let address = engine.gen_address_trytes(&seed(), 1, 1).unwrap();
        let signature = engine.gen_signature_trytes(&seed(), 1, 1, &bundle).unwrap();
        assert_eq!(signature.len(), 2187);
        assert!(engine.verify_signature(&address, &signature, &bundle).unwrap());

        let other = "OTHER".repeat(17)[..81].to_string();
        assert!(!engine.verify_signature(&address, &signature, &other).unwrap());
    }

    #[test]
    fn test_pow_bundle_keeps_order() {
        let engine = engine();
        let tx = "9".repeat(2673);
        let trunk = "T".repeat(81);
        let branch = "B".repeat(81);
        let attached = engine
            .pow_bundle_at(&[tx.clone(), tx], &trunk, &branch, 4, 1_000)
            .unwrap();
        assert_eq!(attached.len(), 2);

        let last = Transaction::from_trytes(&attached[1]).unwrap();
        assert_eq!(last.trunk().unwrap().to_trytes(), trunk);
        let last_hash = engine.transaction_hash(&attached[1]).unwrap();
        let first = Transaction::from_trytes(&attached[0]).unwrap();
        assert_eq!(first.trunk().unwrap().to_trytes(), last_hash);
    }

    #[test]
    fn test_pow_bundle_bad_branch_is_pow_failed() {
        let engine = engine();
        let tx = "9".repeat(2673);
        let err = engine
            .pow_bundle(&[tx], &"T".repeat(81), "SHORT", 1)
            .unwrap_err();
        assert!(matches!(err, EngineError::PowFailed(_)));
    }

    #[test]
    fn test_pow_mwm_too_large() {
        let engine = engine();
        let err = engine.pow_trytes(&"9".repeat(2673), 244).unwrap_err();
        assert_eq!(err.code(), 5);
    }

    #[test]
    fn test_bundle_miner_validation() {
        let engine = engine();
        let max = [-13i8; 81];
        let essence = vec![0 as Trit; 486];

        let err = engine
            .bundle_miner(&max, 1, &essence, 0, 10, 1, 0, true)
            .unwrap_err();
        assert!(matches!(err, EngineError::Encoding(_)));

        let err = engine
            .bundle_miner(&max, 1, &essence, 600, 10, 1, 0, true)
            .unwrap_err();
        assert_eq!(err.code(), 4);

        let err = engine
            .bundle_miner(&max, 4, &essence, 486, 10, 1, 0, true)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidSecurityLevel(4));

        let err = engine
            .bundle_miner(&[0i8; 80], 1, &essence, 486, 10, 1, 0, true)
            .unwrap_err();
        assert_eq!(err.code(), 4);
    }

    #[test]
    fn test_bundle_miner_threshold_mode() {
        let engine = engine();
        let essence = vec![0 as Trit; 972];
        let mined = engine
            .bundle_miner(&[-13i8; 81], 1, &essence, 972, 20, 2, 27, false)
            .unwrap();
        assert!(mined.index < 20);
        assert_eq!(mined.optimal, mined.extremes == 0);
    }

    #[test]
    fn test_bundle_miner_default_uses_configured_policy() {
        let mut config = EngineConfig::default();
        config.mining.nprocs = 2;
        config.mining.security = SecurityLevel::Low;
        config.mining.fully_secure = false;
        config.mining.threshold = 27;
        let engine = Engine::new(config).unwrap();
        let essence = vec![0 as Trit; 972];

        let mined = engine.bundle_miner_default(&[-13i8; 81], &essence, 20).unwrap();
        let explicit = engine
            .bundle_miner(&[-13i8; 81], 1, &essence, 972, 20, 2, 27, false)
            .unwrap();
        assert_eq!(mined, explicit);

        let err = engine.bundle_miner_default(&[-13i8; 81], &essence, 0).unwrap_err();
        assert_eq!(err.code(), 6);
    }
}
