//! # EN-01 Signing Benchmarks
//!
//! Address derivation runs 26 chain steps per key block; security 3 is the
//! worst case.

use criterion::{black_box, BenchmarkId, Criterion};
use en_01_signing::{SigningApi, SigningService};
use en_benchmarks::utils::random_seed;
use shared_crypto::SpongeKind;
use shared_types::{Hash, SecurityLevel};
use std::time::Duration;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("en-01-signing");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let seed = random_seed(1);
    let bundle = Hash::zero();

    for sponge in [SpongeKind::Kerl, SpongeKind::CurlP27] {
        let service = SigningService::new(sponge);
        for security in [SecurityLevel::Low, SecurityLevel::Medium, SecurityLevel::High] {
            let id = format!("{}/{}", sponge, security.as_u8());
            group.bench_with_input(BenchmarkId::new("address", &id), &security, |b, s| {
                b.iter(|| black_box(service.generate_address(&seed, 0, *s)))
            });
        }
    }

    let service = SigningService::default();
    let address = service.generate_address(&seed, 0, SecurityLevel::Medium);
    let signature = service.generate_signature(&seed, 0, SecurityLevel::Medium, &bundle);
    if let (Ok(address), Ok(signature)) = (address, signature) {
        group.bench_function("sign/kerl/2", |b| {
            b.iter(|| {
                let signature =
                    service.generate_signature(&seed, 0, SecurityLevel::Medium, &bundle);
                black_box(signature)
            })
        });
        group.bench_function("verify/kerl/2", |b| {
            b.iter(|| black_box(service.verify_signature(&address, &signature, &bundle)))
        });
    }

    group.finish();
}
