use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eccstudio_core::{
    convolutional::{self, ViterbiDecoder},
    hamming,
    noise::flip_random_k,
    reed_solomon::ReedSolomonCodec,
    BitString,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_hamming(c: &mut Criterion) {
    let data = BitString::parse("1011").unwrap();
    let noisy = BitString::parse("0110111").unwrap();

    c.bench_function("hamming_encode", |b| {
        b.iter(|| hamming::encode(black_box(&data)).unwrap())
    });
    c.bench_function("hamming_decode", |b| {
        b.iter(|| hamming::decode(black_box(&noisy)).unwrap())
    });
}

fn bench_viterbi(c: &mut Criterion) {
    let mut group = c.benchmark_group("viterbi_decode");
    let mut rng = StdRng::seed_from_u64(1);

    for bits in [64usize, 256, 1024, 4096] {
        let input: BitString = (0..bits).map(|i| i % 3 == 0).collect();
        let encoded = convolutional::encode(&input).unwrap();
        let noisy = flip_random_k(&encoded, bits / 32, &mut rng).unwrap();
        let decoder = ViterbiDecoder::new();

        group.throughput(Throughput::Elements(bits as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &noisy, |b, noisy| {
            b.iter(|| decoder.decode(black_box(noisy)).unwrap())
        });
    }

    group.finish();
}

fn bench_reed_solomon(c: &mut Criterion) {
    let mut group = c.benchmark_group("reed_solomon");
    let rs = ReedSolomonCodec::default();
    let mut rng = StdRng::seed_from_u64(2);

    for size in [16usize, 245, 1024] {
        let text = "x".repeat(size);
        let encoded = rs.encode(&text).unwrap();
        let noisy = flip_random_k(&encoded, 5, &mut rng).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| rs.encode(black_box(text)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &noisy, |b, noisy| {
            b.iter(|| rs.decode(black_box(noisy)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hamming, bench_viterbi, bench_reed_solomon);
criterion_main!(benches);
