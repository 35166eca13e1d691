//! # Sponge Benchmarks
//!
//! Every other subsystem is bound by these transforms.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use en_benchmarks::utils::random_trits;
use shared_crypto::{BctCurl, Curl, Kerl, Sponge, CURL_P81_ROUNDS, STATE_LENGTH};

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sponge");

    for rounds in [27usize, 81] {
        let mut curl = match Curl::new(rounds) {
            Ok(curl) => curl,
            Err(e) => panic!("{e}"),
        };
        group.bench_with_input(BenchmarkId::new("curl_transform", rounds), &rounds, |b, _| {
            b.iter(|| curl.transform())
        });
    }

    let state = random_trits(STATE_LENGTH, 7);
    let bct = BctCurl::from_state(CURL_P81_ROUNDS, &state);
    group.throughput(Throughput::Elements(64));
    group.bench_function("bct_transform_64_lanes", |b| {
        b.iter(|| {
            let mut lanes = bct.clone();
            lanes.transform();
            black_box(lanes)
        })
    });

    for blocks in [1usize, 16, 33] {
        let input = random_trits(243 * blocks, blocks as u64);
        group.throughput(Throughput::Elements(blocks as u64));
        group.bench_with_input(BenchmarkId::new("kerl_digest", blocks), &input, |b, input| {
            let mut kerl = Kerl::new();
            b.iter(|| black_box(kerl.digest(input)))
        });
        group.bench_with_input(BenchmarkId::new("curl_p81_digest", blocks), &input, |b, input| {
            let mut curl = Curl::p81();
            b.iter(|| black_box(curl.digest(input)))
        });
    }

    group.finish();
}
