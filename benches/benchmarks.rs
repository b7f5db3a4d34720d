#[macro_use]
extern crate criterion;

use bin2text::base64::Mode;
use bin2text::base85::{self, ASCII85};
use criterion::{black_box, Bencher, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};

fn do_encode_bench_standard(b: &mut Bencher, &size: &usize) {
    do_encode_bench(b, size, Mode::Standard)
}

fn do_encode_bench_url_safe(b: &mut Bencher, &size: &usize) {
    do_encode_bench(b, size, Mode::UrlSafe)
}

fn do_encode_bench(b: &mut Bencher, size: usize, mode: Mode) {
    let mut v: Vec<u8> = Vec::with_capacity(size);
    fill(&mut v);

    let mut buf = vec![0_u8; mode.encoded_len(size).unwrap() + 1];
    b.iter(|| {
        let written = mode.encode(&v, &mut buf);
        black_box(&buf[..written]);
    });
}

fn do_encode_bench_base85(b: &mut Bencher, &size: &usize) {
    let mut v: Vec<u8> = Vec::with_capacity(size);
    fill(&mut v);

    let mut buf = vec![0_u8; base85::encoded_len(size).unwrap() + 1];
    b.iter(|| {
        let written = base85::encode(&ASCII85, &v, &mut buf);
        black_box(&buf[..written]);
    });
}

fn do_decode_bench_standard(b: &mut Bencher, &size: &usize) {
    do_decode_bench(b, size, Mode::Standard)
}

fn do_decode_bench_url_safe(b: &mut Bencher, &size: &usize) {
    do_decode_bench(b, size, Mode::UrlSafe)
}

fn do_decode_bench(b: &mut Bencher, size: usize, mode: Mode) {
    let mut v: Vec<u8> = Vec::with_capacity(size * 3 / 4);
    fill(&mut v);

    let mut encoded = vec![0_u8; mode.encoded_len(v.len()).unwrap() + 1];
    let written = mode.encode(&v, &mut encoded);
    encoded.truncate(written);

    let mut buf = vec![0_u8; v.len()];
    b.iter(|| {
        mode.decode(&encoded, &mut buf).unwrap();
        black_box(&buf);
    });
}

fn do_decode_bench_base85(b: &mut Bencher, &size: &usize) {
    let mut v: Vec<u8> = Vec::with_capacity(size * 4 / 5);
    fill(&mut v);

    let mut encoded = vec![0_u8; base85::encoded_len(v.len()).unwrap() + 1];
    let written = base85::encode(&ASCII85, &v, &mut encoded);
    encoded.truncate(written);

    let mut buf = vec![0_u8; v.len()];
    b.iter(|| {
        base85::decode(&ASCII85, &encoded, &mut buf).unwrap();
        black_box(&buf);
    });
}

fn fill(v: &mut Vec<u8>) {
    let cap = v.capacity();
    // weak randomness is plenty; we just want to not be completely friendly to the branch predictor
    let mut r = rand::rngs::SmallRng::from_entropy();
    while v.len() < cap {
        v.push(r.gen::<u8>());
    }
}

const BYTE_SIZES: [usize; 5] = [3, 50, 100, 500, 3 * 1024];

// Benchmarks over these byte sizes take longer so we will run fewer samples to
// keep the benchmark runtime reasonable.
const LARGE_BYTE_SIZES: [usize; 3] = [3 * 1024 * 1024, 10 * 1024 * 1024, 30 * 1024 * 1024];

fn encode_benchmarks(c: &mut Criterion, label: &str, byte_sizes: &[usize]) {
    let mut group = c.benchmark_group(label);
    group
        .warm_up_time(std::time::Duration::from_millis(500))
        .measurement_time(std::time::Duration::from_secs(3));

    for size in byte_sizes {
        group
            .throughput(Throughput::Bytes(*size as u64))
            .bench_with_input(
                BenchmarkId::new("base64_standard", size),
                size,
                do_encode_bench_standard,
            )
            .bench_with_input(
                BenchmarkId::new("base64_url_safe", size),
                size,
                do_encode_bench_url_safe,
            )
            .bench_with_input(BenchmarkId::new("base85", size), size, do_encode_bench_base85);
    }

    group.finish();
}

fn decode_benchmarks(c: &mut Criterion, label: &str, byte_sizes: &[usize]) {
    let mut group = c.benchmark_group(label);
    group
        .warm_up_time(std::time::Duration::from_millis(500))
        .measurement_time(std::time::Duration::from_secs(3));

    for size in byte_sizes {
        group
            .throughput(Throughput::Bytes(*size as u64))
            .bench_with_input(
                BenchmarkId::new("base64_standard", size),
                size,
                do_decode_bench_standard,
            )
            .bench_with_input(
                BenchmarkId::new("base64_url_safe", size),
                size,
                do_decode_bench_url_safe,
            )
            .bench_with_input(BenchmarkId::new("base85", size), size, do_decode_bench_base85);
    }

    group.finish();
}

fn bench(c: &mut Criterion) {
    encode_benchmarks(c, "encode_small_input", &BYTE_SIZES[..]);
    encode_benchmarks(c, "encode_large_input", &LARGE_BYTE_SIZES[..]);
    decode_benchmarks(c, "decode_small_input", &BYTE_SIZES[..]);
    decode_benchmarks(c, "decode_large_input", &LARGE_BYTE_SIZES[..]);
}

criterion_group!(benches, bench);
criterion_main!(benches);
