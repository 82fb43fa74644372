use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keystretch::{pbkdf2, scrypt, Hash, Params};
use std::hint::black_box;

fn bench_pbkdf2(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2");
    for iterations in [1_000, 10_000, 100_000] {
        for hash in [Hash::Sha1, Hash::Sha256, Hash::Sha512] {
            group.bench_with_input(
                BenchmarkId::new(format!("{hash:?}"), iterations),
                &iterations,
                |b, &iterations| {
                    let mut out = [0; 32];
                    b.iter(|| {
                        pbkdf2(b"password", b"salt", iterations, hash, &mut out).unwrap();
                        black_box(out);
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_scrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("scrypt");
    group.sample_size(10);
    for n in [1 << 10, 1 << 14] {
        for r in [1, 8] {
            for p in [1, 4] {
                if n >= 1 << 16 && r == 1 {
                    // scrypt requires n < 2^(128 * r / 8)
                    continue;
                }
                let params = Params::new(n, r, p).unwrap();
                group.bench_with_input(
                    BenchmarkId::new("derive", format!("n={n}/r={r}/p={p}")),
                    &params,
                    |b, params| {
                        let mut out = [0; 64];
                        b.iter(|| {
                            scrypt(b"password", b"salt", params, &mut out).unwrap();
                            black_box(out);
                        });
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pbkdf2, bench_scrypt);
criterion_main!(benches);
