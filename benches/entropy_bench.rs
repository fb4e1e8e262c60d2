use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entrograph::{shannon_entropy, EntropyProfile};

fn synthetic_data(len: usize) -> Vec<u8> {
    // Deterministic mixed-entropy buffer: runs of constants and an LCG.
    let mut data = Vec::with_capacity(len);
    let mut state = 0x2545F4914F6CDD1Du64;
    for i in 0..len {
        if (i / 4096) % 2 == 0 {
            data.push(0x41);
        } else {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            data.push((state >> 56) as u8);
        }
    }
    data
}

fn bench_shannon_entropy(c: &mut Criterion) {
    let mut group = c.benchmark_group("shannon_entropy");

    let chunk = synthetic_data(256);
    group.bench_function("chunk_256", |b| {
        b.iter(|| black_box(shannon_entropy(black_box(&chunk)).unwrap()))
    });

    let chunk = synthetic_data(64 * 1024);
    group.bench_function("chunk_64k", |b| {
        b.iter(|| black_box(shannon_entropy(black_box(&chunk)).unwrap()))
    });

    group.finish();
}

fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("entropy_profile");

    let data = synthetic_data(1024 * 1024);
    group.bench_function("profile_1m_chunk_256", |b| {
        b.iter(|| black_box(EntropyProfile::from_bytes(data.clone(), 256).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_shannon_entropy, bench_profile);
criterion_main!(benches);
