// Performance benchmarks for the LeoNTP exporter
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use leontp_exporter::leontp::leontp::ntp_to_datetime;
use leontp_exporter::leontp::structs::status_record::StatusRecord;
use leontp_exporter::leontp::structs::status_request::StatusRequest;
use leontp_exporter::metrics::metrics::status_exposition;

fn create_reply(len: usize) -> Vec<u8> {
    let mut reply = vec![0u8; len];
    reply[20..24].copy_from_slice(&3_913_056_000u32.to_le_bytes());
    reply[24..28].copy_from_slice(&3600u32.to_le_bytes());
    reply[28..32].copy_from_slice(&42u32.to_le_bytes());
    reply[36..40].copy_from_slice(&7200u32.to_le_bytes());
    reply[41] = 9;
    reply
}

fn bench_decode_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_status");

    for len in [48usize, 1024].iter() {
        let reply = create_reply(*len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &reply, |b, reply| {
            b.iter(|| {
                black_box(StatusRecord::from_bytes(black_box(reply)).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_ntp_to_datetime(c: &mut Criterion) {
    c.bench_function("ntp_to_datetime", |b| {
        b.iter(|| {
            black_box(ntp_to_datetime(black_box(3_913_056_000), black_box(0x8000_0000)));
        });
    });
}

fn bench_status_request(c: &mut Criterion) {
    c.bench_function("status_request_to_bytes", |b| {
        b.iter(|| {
            black_box(StatusRequest::default().to_bytes().unwrap());
        });
    });
}

fn bench_status_exposition(c: &mut Criterion) {
    let status = StatusRecord::from_bytes(&create_reply(48)).unwrap();

    c.bench_function("status_exposition", |b| {
        b.iter(|| {
            black_box(status_exposition(black_box(&status)));
        });
    });
}

criterion_group!(
    benches,
    bench_decode_status,
    bench_ntp_to_datetime,
    bench_status_request,
    bench_status_exposition
);
criterion_main!(benches);
