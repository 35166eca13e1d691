//! # Entangled Engine Benchmarks
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --package en-benchmarks --bench engine_benchmarks
//! cargo bench --package en-benchmarks --bench engine_benchmarks -- en-02
//! ```
//!
//! ## Coverage
//!
//! | Group | Workload |
//! |-------|----------|
//! | sponge | Curl-P-27/81 transform, bitsliced transform, Kerl digest |
//! | en-01 | address derivation, signing, verification |
//! | en-02 | nonce search at low MWM |
//! | en-03 | index mining over a fixed candidate range |

mod suite;

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_sponges(c: &mut Criterion) {
    suite::sponge::register_benchmarks(c);
}

fn bench_en_01_signing(c: &mut Criterion) {
    suite::en_01_signing::register_benchmarks(c);
}

fn bench_en_02_pow(c: &mut Criterion) {
    suite::en_02_pow::register_benchmarks(c);
}

fn bench_en_03_miner(c: &mut Criterion) {
    suite::en_03_miner::register_benchmarks(c);
}

criterion_group!(
    benches,
    bench_sponges,
    bench_en_01_signing,
    bench_en_02_pow,
    bench_en_03_miner
);
criterion_main!(benches);
