use copri::cb::{cb, cb_configured};
use copri::config::CoprimeBaseConfig;
use copri::factor::find_factors;
use copri::pool::Pool;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rug::Integer;

/// 512-bit-ish RSA-style moduli: products of two distinct primes, a handful
/// sharing a factor with their neighbor (the batch-GCD scenario this crate
/// targets).
fn rsa_style_batch(n: usize) -> Vec<Integer> {
    let primes: Vec<Integer> = [
        65537u64, 65539, 65543, 65551, 65557, 65563, 65579, 65581, 65587, 65599, 65609, 65617,
        65629, 65633, 65647, 65651,
    ]
    .iter()
    .map(|&p| Integer::from(p))
    .collect();

    (0..n)
        .map(|i| {
            let p = &primes[i % primes.len()];
            let q = &primes[(i / 2 + 1) % primes.len()];
            Integer::from(p * q)
        })
        .collect()
}

fn bench_cb_serial(c: &mut Criterion) {
    let batch = rsa_style_batch(512);
    c.bench_function("cb(512 RSA-style moduli, serial)", |b| {
        b.iter(|| {
            let mut pool = Pool::new();
            let mut out = Vec::new();
            cb(&mut pool, &mut out, black_box(&batch));
            out
        });
    });
}

fn bench_cb_parallel(c: &mut Criterion) {
    let batch = rsa_style_batch(512);
    let config = CoprimeBaseConfig::parallel(32);
    c.bench_function("cb(512 RSA-style moduli, parallel)", |b| {
        b.iter(|| {
            let mut pool = Pool::new();
            let mut out = Vec::new();
            cb_configured(&mut pool, &mut out, black_box(&batch), &config);
            out
        });
    });
}

fn bench_find_factors(c: &mut Criterion) {
    let batch = rsa_style_batch(256);
    let mut pool = Pool::new();
    let mut base = Vec::new();
    cb(&mut pool, &mut base, &batch);

    c.bench_function("find_factors(256 moduli over their own cb)", |b| {
        b.iter(|| {
            let mut pool = Pool::new();
            let mut out = Vec::new();
            find_factors(&mut pool, &mut out, black_box(&batch), black_box(&base));
            out
        });
    });
}

criterion_group!(benches, bench_cb_serial, bench_cb_parallel, bench_find_factors);
criterion_main!(benches);
