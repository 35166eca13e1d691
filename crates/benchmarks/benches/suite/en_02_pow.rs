//! # EN-02 Proof-of-Work Benchmarks
//!
//! Expected work grows by 3x per MWM step; only small weights are timed.

use criterion::{black_box, BenchmarkId, Criterion};
use en_02_proof_of_work::PearlDiver;
use en_benchmarks::utils::random_trits;
use shared_types::TRANSACTION_TRIT_LENGTH;
use std::time::Duration;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("en-02-pow");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(10);

    let diver = match PearlDiver::new(0, None) {
        Ok(diver) => diver,
        Err(e) => panic!("{e}"),
    };
    let mut nonce_seed = 0u64;

    for mwm in [5usize, 9, 11] {
        group.bench_with_input(BenchmarkId::new("search", mwm), &mwm, |b, mwm| {
            b.iter(|| {
                nonce_seed += 1;
                let trits = random_trits(TRANSACTION_TRIT_LENGTH, nonce_seed);
                black_box(diver.search(&trits, *mwm))
            })
        });
    }

    group.finish();
}
