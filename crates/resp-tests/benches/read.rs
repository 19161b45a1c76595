use std::hint::black_box;
use std::io::Read;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use resp_reader::RespReader;
use resp_tests::{ChunkedReader, fixture};

/// Pull every object out of `reader` with `read_slice`, returning the count.
fn drain_slices<R: Read>(mut reader: RespReader<R>) -> usize {
    let mut count = 0;
    while let Ok(object) = reader.read_slice() {
        black_box(object);
        count += 1;
    }
    count
}

fn drain_bytes<R: Read>(reader: RespReader<R>) -> usize {
    reader.map_while(Result::ok).map(black_box).count()
}

/// `n` copies of a SET command.
fn commands(n: usize) -> Vec<u8> {
    b"*3\r\n$3\r\nSET\r\n$8\r\nkey:0001\r\n$16\r\nvalue-0123456789\r\n".repeat(n)
}

fn bench_read_small(c: &mut Criterion) {
    let wire = fixture("pipeline");

    let mut group = c.benchmark_group("read_pipeline");
    group.bench_function("read_slice", |b| {
        b.iter(|| drain_slices(RespReader::new(wire)));
    });
    group.bench_function("read_bytes", |b| {
        b.iter(|| drain_bytes(RespReader::new(wire)));
    });
    group.finish();
}

fn bench_read_chunked(c: &mut Criterion) {
    let wire = commands(256);
    let mut group = c.benchmark_group("read_chunked");

    for chunk in [1, 16, 512, 8192] {
        group.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
            b.iter(|| drain_slices(RespReader::new(ChunkedReader::new(&wire, chunk))));
        });
    }

    group.finish();
}

fn bench_read_large_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_large_bulk");

    for size_kb in [1, 64, 512] {
        let payload = vec![b'x'; size_kb * 1024];
        let mut wire = format!("${}\r\n", payload.len()).into_bytes();
        wire.extend_from_slice(&payload);
        wire.extend_from_slice(b"\r\n");

        group.throughput(Throughput::Bytes(wire.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("read_slice", format!("{size_kb}kb")),
            &wire,
            |b, w| b.iter(|| drain_slices(RespReader::with_capacity(w.as_slice(), w.len() + 1))),
        );
    }

    group.finish();
}

fn bench_read_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_throughput");

    for n in [100, 1_000, 10_000] {
        let wire = commands(n);
        group.throughput(Throughput::Bytes(wire.len() as u64));
        group.bench_with_input(BenchmarkId::new("commands", n), &wire, |b, w| {
            b.iter(|| drain_slices(RespReader::new(w.as_slice())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_read_small,
    bench_read_chunked,
    bench_read_large_bulk,
    bench_read_throughput
);
criterion_main!(benches);
