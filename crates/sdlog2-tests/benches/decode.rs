use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sdlog2_decoder::{DecoderConfig, decode_slice};
use sdlog2_tests::{Payload, StreamBuilder};
use sdlog2_types::MessageFilter;

/// A realistic flight log: one schema block up front, then interleaved
/// time, attitude, and GPS records.
fn flight_stream(records: usize) -> Vec<u8> {
    let mut builder = StreamBuilder::new()
        .format(0x01, "TIME", "Q", "StartTime")
        .format(0x02, "ATT", "ccC", "Roll,Pitch,Yaw")
        .format(0x03, "GPS", "QLLf", "GPSTime,Lat,Lon,Alt");

    for i in 0..records {
        let i64v = i as i64;
        builder = builder
            .record(0x01, &Payload::new().u64(1_000 + i as u64).build())
            .record(
                0x02,
                &Payload::new()
                    .i16((i64v % 314) as i16)
                    .i16((i64v % 157) as i16)
                    .u16((i64v % 36000) as u16)
                    .build(),
            )
            .record(
                0x03,
                &Payload::new()
                    .u64(2_000 + i as u64)
                    .i32(473_977_000 + i as i32)
                    .i32(85_455_000 + i as i32)
                    .f32(500.0 + i as f32)
                    .build(),
            );
    }
    builder.build()
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for records in [100usize, 1_000, 10_000] {
        let stream = flight_stream(records);
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{records}rec")),
            &stream,
            |b, s| b.iter(|| decode_slice(s, DecoderConfig::new()).unwrap()),
        );
    }

    group.finish();
}

fn bench_decode_with_time_shadow(c: &mut Criterion) {
    let stream = flight_stream(1_000);

    c.bench_function("decode_time_shadow", |b| {
        b.iter(|| {
            decode_slice(&stream, DecoderConfig::new().time_message("TIME")).unwrap();
        });
    });
}

fn bench_decode_filtered(c: &mut Criterion) {
    let stream = flight_stream(1_000);

    c.bench_function("decode_filtered_gps_only", |b| {
        b.iter(|| {
            let config =
                DecoderConfig::new().filter(MessageFilter::new().allow("GPS"));
            decode_slice(&stream, config).unwrap();
        });
    });
}

fn bench_resync_heavy(c: &mut Criterion) {
    // Every tenth record is preceded by garbage, forcing byte-level
    // resynchronization.
    let clean = flight_stream(1_000);
    let mut corrupted = Vec::with_capacity(clean.len() + 400);
    for (i, chunk) in clean.chunks(89).enumerate() {
        if i % 10 == 0 {
            corrupted.extend_from_slice(&[0xDE, 0xAD]);
        }
        corrupted.extend_from_slice(chunk);
    }

    c.bench_function("decode_resync_heavy", |b| {
        b.iter(|| {
            decode_slice(&corrupted, DecoderConfig::new().correct_errors(true)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_decode_throughput,
    bench_decode_with_time_shadow,
    bench_decode_filtered,
    bench_resync_heavy
);
criterion_main!(benches);
