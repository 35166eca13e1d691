//! # End-to-End Scenarios
//!
//! 1. Address of the all-`A` seed at index 0, security 2, is pinned.
//! 2. Fully-secure mining over an all-zero essence is deterministic and
//!    either optimal or a clean `MiningFailed`.
//!
//! Plus the boundary rejections of the error taxonomy.

#[cfg(test)]
mod tests {
    use en_03_bundle_miner::score_index;
    use entangled_engine::{Engine, EngineConfig, EngineError, Trit};
    use shared_crypto::Kerl;
    use shared_types::{SecurityLevel, TRANSACTION_TRIT_LENGTH};

    const SEED_A: &str =
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    fn engine() -> Engine {
        let mut config = EngineConfig::default();
        config.pow.threads = 2;
        Engine::new(config).unwrap()
    }

    // =========================================================================
    // SCENARIO 1: PINNED ADDRESS
    // =========================================================================

    #[test]
    fn test_scenario_1_pinned_address() {
        let engine = engine();
        let address = engine.gen_address_trytes(SEED_A, 0, 2).unwrap();
        assert_eq!(address.len(), 81);
        assert_eq!(
            address,
            "XUERGHWTYRTFUYKFKXURKHMFEVLOIFTTCNTXOGLDPCZ9CJLKHROOPGNAQYFJEPGK9OKUQROUECBAVNXRX"
        );
    }

    #[test]
    fn test_scenario_1_stable_across_calls_and_forms() {
        let engine = engine();
        let first = engine.gen_address_trytes(SEED_A, 0, 2).unwrap();
        let second = engine.gen_address_trytes(SEED_A, 0, 2).unwrap();
        assert_eq!(first, second);

        let seed_trits = engine.trytes_to_trits(SEED_A).unwrap();
        let trits = engine.gen_address_trits(&seed_trits, 0, 2).unwrap();
        assert_eq!(engine.trits_to_trytes(&trits).unwrap(), first);
    }

    // =========================================================================
    // SCENARIO 2: FULLY-SECURE MINING
    // =========================================================================

    fn scenario_2_essence() -> Vec<Trit> {
        vec![0; TRANSACTION_TRIT_LENGTH - 243]
    }

    #[test]
    fn test_scenario_2_fully_secure() {
        let engine = engine();
        let essence = scenario_2_essence();
        let result = engine.bundle_miner(&[-13; 81], 1, &essence, essence.len(), 100, 4, 0, true);

        match result {
            Ok(mined) => {
                assert!(mined.optimal);
                assert_eq!(mined.extremes, 0);
                assert!(mined.index < 100);

                // Recompute through the public scoring function
                let mut local = essence.clone();
                let candidate =
                    score_index(&mut Kerl::new(), &mut local, mined.index, SecurityLevel::Low)
                        .unwrap();
                assert_eq!(candidate.extremes, 0);

                // Lowest optimal index wins
                for index in 0..mined.index {
                    let earlier =
                        score_index(&mut Kerl::new(), &mut local, index, SecurityLevel::Low)
                            .unwrap();
                    assert!(earlier.extremes > 0, "index {index} was optimal too");
                }
            }
            Err(err) => {
                assert!(matches!(err, EngineError::MiningFailed(_)));
                let mut local = essence.clone();
                let mut kerl = Kerl::new();
                for index in 0..100 {
                    let candidate =
                        score_index(&mut kerl, &mut local, index, SecurityLevel::Low).unwrap();
                    assert!(candidate.extremes > 0);
                }
            }
        }
    }

    #[test]
    fn test_scenario_2_deterministic() {
        let engine = engine();
        let essence = scenario_2_essence();
        let run = |nprocs| {
            engine.bundle_miner(&[-13; 81], 1, &essence, essence.len(), 100, nprocs, 0, true)
        };

        let first = run(4);
        let second = run(4);
        assert_eq!(first, second);

        // Partitioning does not change the winner
        let single = run(1);
        assert_eq!(first, single);
    }

    // =========================================================================
    // BOUNDARY REJECTIONS
    // =========================================================================

    #[test]
    fn test_empty_essence_is_encoding_error() {
        let engine = engine();
        let essence = scenario_2_essence();
        let err = engine
            .bundle_miner(&[-13; 81], 1, &essence, 0, 100, 1, 0, true)
            .unwrap_err();
        assert!(matches!(err, EngineError::Encoding(_)));
        assert_eq!(err.code(), 1);
    }

    #[test]
    fn test_security_4_rejected() {
        let engine = engine();
        assert_eq!(
            engine.gen_address_trytes(SEED_A, 0, 4),
            Err(EngineError::InvalidSecurityLevel(4))
        );
        let essence = scenario_2_essence();
        assert_eq!(
            engine.bundle_miner(&[-13; 81], 4, &essence, essence.len(), 1, 1, 0, true),
            Err(EngineError::InvalidSecurityLevel(4))
        );
    }

    #[test]
    fn test_mwm_above_hash_width_is_pow_failed() {
        let engine = engine();
        let err = engine.pow_trytes(&"9".repeat(2673), 244).unwrap_err();
        assert!(matches!(err, EngineError::PowFailed(_)));
    }

    #[test]
    fn test_mwm_zero_accepts_current_nonce() {
        let engine = engine();
        let tx = format!("{}{}", "9".repeat(2646), "NONCE".repeat(6)[..27].to_string());
        assert_eq!(engine.pow_trytes(&tx, 0).unwrap(), &tx[2646..]);
    }

    #[test]
    fn test_bad_seed_length() {
        let engine = engine();
        assert_eq!(
            engine.gen_address_trytes(&SEED_A[..80], 0, 2),
            Err(EngineError::InvalidSeedLength(240))
        );
    }

    #[test]
    fn test_invalid_tryte_rejected() {
        let engine = engine();
        let seed = format!("{}a", &SEED_A[..80]);
        assert!(matches!(
            engine.gen_address_trytes(&seed, 0, 2),
            Err(EngineError::Encoding(_))
        ));
    }
}
