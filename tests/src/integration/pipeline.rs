//! # Bundle Pipeline
//!
//! Full life of a two-transaction bundle through every subsystem:
//!
//! 1. **Signing**: derive the input address
//! 2. **Bundle miner**: choose the index written into the first essence
//! 3. **Signing**: sign the resulting bundle hash and verify it
//! 4. **Proof of work**: attach the bundle and check every link

#[cfg(test)]
mod tests {
    use en_03_bundle_miner::{write_index, INDEX_RANGE};
    use entangled_engine::{Engine, EngineConfig, NormalizedHash, SpongeKind, Trit};
    use shared_crypto::{Kerl, Sponge};
    use shared_types::{Field, Hash, Transaction};

    const SEED: &str =
        "PIPELINE9SEED9PIPELINE9SEED9PIPELINE9SEED9PIPELINE9SEED9PIPELINE9SEED9PIPELINE9SE";

    fn engine() -> Engine {
        let mut config = EngineConfig::default();
        config.pow.threads = 2;
        config.signing.sponge = SpongeKind::Kerl;
        Engine::new(config).unwrap()
    }

    fn build_bundle(address: &[Trit]) -> Vec<Transaction> {
        (0..2)
            .map(|i| {
                let mut tx = Transaction::default();
                tx.set_field(Field::Address, address).unwrap();
                tx.set_int_field(Field::Value, if i == 0 { -10 } else { 10 }).unwrap();
                tx.set_int_field(Field::Timestamp, 1_700_000_000).unwrap();
                tx.set_int_field(Field::CurrentIndex, i).unwrap();
                tx.set_int_field(Field::LastIndex, 1).unwrap();
                tx
            })
            .collect()
    }

    fn essence_of(bundle: &[Transaction]) -> Vec<Trit> {
        bundle.iter().flat_map(|tx| tx.essence().to_vec()).collect()
    }

    #[test]
    fn test_mine_sign_verify_attach() {
        let engine = engine();
        let seed_trits = engine.trytes_to_trits(SEED).unwrap();
        let address = engine.gen_address_trits(&seed_trits, 0, 1).unwrap();
        let mut bundle = build_bundle(&address);

        // Mine
        let mut essence = essence_of(&bundle);
        let mined = engine
            .bundle_miner(&[-13; 81], 1, &essence, essence.len(), 64, 2, 27, false)
            .unwrap();

        write_index(&mut essence, mined.index);
        let bundle_hash = Kerl::new().digest(&essence).unwrap();
        assert_eq!(NormalizedHash::from_hash(&bundle_hash), mined.normalized);

        bundle[0]
            .set_field(Field::ObsoleteTag, &essence[INDEX_RANGE])
            .unwrap();
        for tx in bundle.iter_mut() {
            tx.set_field(Field::Bundle, bundle_hash.as_trits()).unwrap();
        }
        assert_eq!(essence_of(&bundle), essence);

        // Sign
        let signature = engine
            .gen_signature_trits(&seed_trits, 0, 1, bundle_hash.as_trits())
            .unwrap();
        bundle[0]
            .set_field(Field::SignatureOrMessage, &signature)
            .unwrap();

        let address_trytes = engine.trits_to_trytes(&address).unwrap();
        let signature_trytes = engine.trits_to_trytes(&signature).unwrap();
        assert!(engine
            .verify_signature(&address_trytes, &signature_trytes, &bundle_hash.to_trytes())
            .unwrap());

        // Attach
        let trunk = Hash::from_trytes(&"TRUNK".repeat(17)[..81]).unwrap();
        let branch = Hash::from_trytes(&"BRANCH".repeat(14)[..81]).unwrap();
        let trytes: Vec<String> = bundle.iter().map(Transaction::to_trytes).collect();
        let attached = engine
            .pow_bundle_at(&trytes, &trunk.to_trytes(), &branch.to_trytes(), 6, 1_700_000_000_000)
            .unwrap();

        let attached: Vec<Transaction> = attached
            .iter()
            .map(|t| Transaction::from_trytes(t).unwrap())
            .collect();
        let hashes: Vec<Hash> = attached
            .iter()
            .map(|tx| Hash::from_trytes(&engine.transaction_hash(&tx.to_trytes()).unwrap()).unwrap())
            .collect();

        for hash in &hashes {
            assert!(hash.trailing_zeros() >= 6);
        }
        assert_eq!(attached[1].trunk().unwrap(), trunk);
        assert_eq!(attached[1].branch().unwrap(), branch);
        assert_eq!(attached[0].trunk().unwrap(), hashes[1]);
        assert_eq!(attached[0].branch().unwrap(), trunk);

        // Attachment leaves the signed content alone
        assert_eq!(essence_of(&attached), essence);
        assert_eq!(attached[0].field(Field::SignatureOrMessage), &signature[..]);
        assert_eq!(attached[0].bundle().unwrap(), bundle_hash);
    }

    #[test]
    fn test_reused_key_reference() {
        let engine = engine();
        let first = Hash::from_trytes(&"FIRST".repeat(17)[..81]).unwrap();
        let reference = engine.normalize_bundle(&first.to_trytes()).unwrap();

        let essence = essence_of(&build_bundle(&[0; 243]));
        let mined = engine
            .bundle_miner(reference.values(), 1, &essence, essence.len(), 32, 2, 27, false)
            .unwrap();

        let combined = reference.max_with(&mined.normalized);
        let expected: f64 = combined.values()[..27]
            .iter()
            .map(|v| f64::from(v + 14) / 27.0)
            .product();
        assert!((mined.forgery_probability / expected - 1.0).abs() < 1e-9);
    }
}
