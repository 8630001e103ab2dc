//! Message and field filtering: unlisted messages are consumed but never
//! stored, listed messages may keep only a subset of their fields, and
//! the time shadow column survives filtering.

use sdlog2_decoder::{DecoderConfig, decode_slice};
use sdlog2_tests::{Payload, StreamBuilder};
use sdlog2_types::{MessageFilter, Value};

fn two_message_stream() -> Vec<u8> {
    StreamBuilder::new()
        .format(0x01, "GPS", "LLf", "Lat,Lon,Alt")
        .format(0x02, "STAT", "hB", "Mode,Armed")
        .record(
            0x01,
            &Payload::new().i32(473_977_000).i32(85_455_000).f32(500.0).build(),
        )
        .record(0x02, &Payload::new().i16(2).u8(1).build())
        .record(
            0x01,
            &Payload::new().i32(473_977_100).i32(85_455_100).f32(501.0).build(),
        )
        .build()
}

#[test]
fn unlisted_messages_are_dropped_but_stream_stays_in_sync() {
    let config = DecoderConfig::new().filter(MessageFilter::new().allow("STAT"));
    let log = decode_slice(&two_message_stream(), config).unwrap();

    assert!(log.messages().get("GPS").is_none());
    assert_eq!(log.series("STAT", "Mode").unwrap(), &[Value::Int(2)]);
}

#[test]
fn field_subset_keeps_only_listed_labels() {
    let config =
        DecoderConfig::new().filter(MessageFilter::new().allow_fields("GPS", ["Lat", "Alt"]));
    let log = decode_slice(&two_message_stream(), config).unwrap();

    let columns: Vec<&String> = log.messages()["GPS"].keys().collect();
    assert_eq!(columns, ["Lat", "Alt"]);
    assert_eq!(log.series("GPS", "Lat").unwrap().len(), 2);
    assert!(log.series("GPS", "Lon").is_none());
}

#[test]
fn empty_filter_keeps_everything() {
    let config = DecoderConfig::new().filter(MessageFilter::new());
    let log = decode_slice(&two_message_stream(), config).unwrap();

    assert_eq!(log.len(), 2);
    assert!(log.series("GPS", "Lon").is_some());
}

#[test]
fn shadow_column_survives_field_filtering() {
    let stream = StreamBuilder::new()
        .format(0x01, "TIME", "Q", "StartTime")
        .format(0x02, "GPS", "LL", "Lat,Lon")
        .record(0x01, &Payload::new().u64(5000).build())
        .record(0x02, &Payload::new().i32(1).i32(2).build())
        .build();

    let config = DecoderConfig::new()
        .time_message("TIME")
        .filter(
            MessageFilter::new()
                .allow("TIME")
                .allow_fields("GPS", ["Lat"]),
        );
    let log = decode_slice(&stream, config).unwrap();

    assert_eq!(log.series("GPS", "TIME__").unwrap(), &[Value::UInt(5000)]);
    assert!(log.series("GPS", "Lon").is_none());
}
