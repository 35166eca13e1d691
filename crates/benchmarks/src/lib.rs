//! Benchmark utilities for the Entangled engine subsystems
pub mod utils {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared_types::{Seed, Trit, HASH_TRIT_LENGTH};

    /// Reproducible random trits.
    pub fn random_trits(len: usize, seed: u64) -> Vec<Trit> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-1..=1)).collect()
    }

    /// Reproducible random seed.
    pub fn random_seed(seed: u64) -> Seed {
        match Seed::from_trits(&random_trits(HASH_TRIT_LENGTH, seed)) {
            Ok(seed) => seed,
            Err(e) => panic!("random trits always form a seed: {e}"),
        }
    }
}
