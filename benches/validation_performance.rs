//! Validation throughput benchmarks. These checks sit in front of every
//! wallet operation, so they must stay far below a millisecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use defi_wallet_guard::{
    to_checksum_address, validate_address, validate_derivation_path, validate_hex_sequence,
};

fn bench_derivation_path(c: &mut Criterion) {
    c.bench_function("derivation_path_accept", |b| {
        b.iter(|| validate_derivation_path(black_box("m/44'/60'/0'/0/0")))
    });
    c.bench_function("derivation_path_reject", |b| {
        b.iter(|| validate_derivation_path(black_box("m/44'/99'/0'/0/0")))
    });
}

fn bench_address_checksum(c: &mut Criterion) {
    let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    c.bench_function("address_checksum_accept", |b| {
        b.iter(|| validate_address(black_box(addr)))
    });
    c.bench_function("address_normalize", |b| {
        b.iter(|| to_checksum_address(black_box("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")))
    });
}

fn bench_hex_sequence(c: &mut Criterion) {
    let blob = "0x".to_string() + &"ab".repeat(512);
    c.bench_function("hex_sequence_1kb", |b| {
        b.iter(|| validate_hex_sequence(black_box(blob.as_str())))
    });
}

criterion_group!(
    benches,
    bench_derivation_path,
    bench_address_checksum,
    bench_hex_sequence
);
criterion_main!(benches);
