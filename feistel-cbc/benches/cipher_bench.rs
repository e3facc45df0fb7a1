use std::hint::black_box;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use feistel_cbc::{decrypt, encrypt, FeistelCipher, KeyMaterial, BLOCK_SIZE};

fn key_bytes() -> Vec<u8> {
    (0..256u32).map(|i| (i * 89 + 3) as u8).collect()
}

fn bench_block(c: &mut Criterion) {
    let key = KeyMaterial::from_bytes(&key_bytes()).unwrap();
    let cipher = FeistelCipher::new(&key).unwrap();
    let block = [0x5au8; BLOCK_SIZE];

    c.bench_function("Feistel decrypt_block", |b| {
        b.iter(|| cipher.decrypt_block(black_box(&block)).unwrap())
    });
}

fn bench_message(c: &mut Criterion) {
    let key = STANDARD.encode(key_bytes());

    let mut group = c.benchmark_group("CBC decrypt");
    for blocks in [1usize, 16, 256] {
        let plaintext = "a".repeat(blocks * BLOCK_SIZE - 1);
        let ciphertext = encrypt(&plaintext, &key).unwrap();

        group.throughput(Throughput::Bytes((blocks * BLOCK_SIZE) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(blocks), &ciphertext, |b, ct| {
            b.iter(|| decrypt(black_box(ct), &key).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_message);
criterion_main!(benches);
