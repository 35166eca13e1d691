//! # Facade Properties
//!
//! Laws that must hold for arbitrary inputs, checked with proptest.

#[cfg(test)]
mod tests {
    use entangled_engine::{Engine, EngineConfig, SpongeKind};
    use proptest::prelude::*;

    const ALPHABET: &[u8] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    fn engine() -> Engine {
        let mut config = EngineConfig::default();
        config.pow.threads = 1;
        config.signing.sponge = SpongeKind::CurlP27;
        Engine::new(config).unwrap()
    }

    fn trytes(len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(0..27usize, len)
            .prop_map(|idx| idx.into_iter().map(|i| ALPHABET[i] as char).collect())
    }

    proptest! {
        #[test]
        fn prop_trytes_trits_flex_round_trip(s in trytes(40)) {
            let engine = engine();
            let trits = engine.trytes_to_trits(&s).unwrap();
            prop_assert_eq!(engine.trits_to_trytes(&trits).unwrap(), s);

            let flex = engine.trits_to_flex(&trits).unwrap();
            let back = engine.flex_to_trits(flex.as_bytes(), trits.len()).unwrap();
            prop_assert_eq!(back, trits);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(4))]

        #[test]
        fn prop_sign_verify(
            seed in trytes(81),
            bundle in trytes(81),
            index in 0u64..1_000,
            security in 1u8..=3,
        ) {
            let engine = engine();
            let address = engine.gen_address_trytes(&seed, index, security).unwrap();
            let signature = engine.gen_signature_trytes(&seed, index, security, &bundle).unwrap();
            prop_assert_eq!(signature.len(), 2187 * security as usize);
            prop_assert!(engine.verify_signature(&address, &signature, &bundle).unwrap());
        }

        #[test]
        fn prop_pow_meets_weight(body in trytes(100), mwm in 0usize..8) {
            let engine = engine();
            let tx = format!("{}{}", body, "9".repeat(2673 - 100));
            let nonce = engine.pow_trytes(&tx, mwm).unwrap();
            let attached = format!("{}{}", &tx[..2646], nonce);
            let hash = engine.transaction_hash(&attached).unwrap();
            let trits = engine.trytes_to_trits(&hash).unwrap();
            prop_assert!(trits.iter().rev().take(mwm).all(|t| *t == 0));
        }
    }
}
