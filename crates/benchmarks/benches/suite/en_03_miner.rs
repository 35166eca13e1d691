//! # EN-03 Bundle Miner Benchmarks
//!
//! Threshold mode with a lenient threshold scans the whole range, so the
//! timing is the cost of `count` Kerl digests over the essence.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use en_03_bundle_miner::{BundleMinerApi, MinerService};
use en_benchmarks::utils::random_trits;
use shared_types::{NormalizedHash, SecurityLevel, ESSENCE_TRIT_LENGTH};
use std::time::Duration;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("en-03-miner");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    let service = MinerService::default();
    let floor = NormalizedHash::floor();
    let essence = random_trits(ESSENCE_TRIT_LENGTH * 4, 3);
    let count = 1_000u64;

    for nprocs in [1usize, 4, 0] {
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::new("threshold_scan", nprocs), &nprocs, |b, n| {
            b.iter(|| {
                let result =
                    service.mine_with(&floor, SecurityLevel::High, &essence, count, *n, 81, false);
                black_box(result)
            })
        });
    }

    group.finish();
}
