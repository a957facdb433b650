// tests/integration_tests.rs
use sac_rs::*;

/// Write a 4-byte value into a header buffer at a word offset.
fn put_f32(bytes: &mut [u8], word: usize, value: f32, endianness: Endianness) {
    let encoded = match endianness {
        Endianness::Little => value.to_le_bytes(),
        Endianness::Big => value.to_be_bytes(),
    };
    bytes[word * 4..word * 4 + 4].copy_from_slice(&encoded);
}

fn put_i32(bytes: &mut [u8], word: usize, value: i32, endianness: Endianness) {
    let encoded = match endianness {
        Endianness::Little => value.to_le_bytes(),
        Endianness::Big => value.to_be_bytes(),
    };
    bytes[word * 4..word * 4 + 4].copy_from_slice(&encoded);
}

fn put_text(bytes: &mut [u8], offset: usize, len: usize, text: &str) {
    let mut padded = vec![b' '; len];
    padded[..text.len()].copy_from_slice(text.as_bytes());
    bytes[offset..offset + len].copy_from_slice(&padded);
}

/// Build a synthetic header with every field set to its undefined sentinel,
/// then overlay the values a test cares about.
fn synthetic_header(endianness: Endianness) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_SIZE];
    for field in header::FLOAT_FIELDS {
        put_f32(&mut bytes, field.word, SENTINEL_F32, endianness);
    }
    for field in header::INT_FIELDS.iter().chain(header::LOGICAL_FIELDS) {
        put_i32(&mut bytes, field.word, SENTINEL_I32, endianness);
    }
    for field in header::TEXT_FIELDS {
        put_text(&mut bytes, field.offset, field.len, SENTINEL_TEXT);
    }
    bytes
}

fn append_samples(data: &mut Vec<u8>, samples: &[f32], endianness: Endianness) {
    for sample in samples {
        let encoded = match endianness {
            Endianness::Little => sample.to_le_bytes(),
            Endianness::Big => sample.to_be_bytes(),
        };
        data.extend_from_slice(&encoded);
    }
}

#[test]
fn test_end_to_end_little_endian() {
    let endianness = Endianness::Little;
    let mut data = synthetic_header(endianness);
    put_f32(&mut data, 0, 0.05, endianness); // DELTA
    put_i32(&mut data, 79, 3, endianness); // NPTS
    put_text(&mut data, 440, 8, "TEST"); // KSTNM
    append_samples(&mut data, &[1.0, -2.5, 3.0], endianness);

    let mut reader = SacReader::new(&data).unwrap();
    assert_eq!(reader.endianness(), Endianness::Little);

    let header = reader.header();
    assert_eq!(header.delta(), Some(0.05));
    assert_eq!(header.npts(), Some(3));
    assert_eq!(header.station_name(), Some("TEST"));
    assert_eq!(header.event_name(), None); // still the sentinel

    let block = reader.next_block().unwrap();
    assert_eq!(block.samples(), &[1.0, -2.5, 3.0]);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_end_to_end_big_endian() {
    let endianness = Endianness::Big;
    let mut data = synthetic_header(endianness);
    put_f32(&mut data, 0, 0.05, endianness);
    put_f32(&mut data, 5, 12.75, endianness); // B
    put_i32(&mut data, 79, 2, endianness);
    put_i32(&mut data, 70, 2021, endianness); // NZYEAR
    put_text(&mut data, 440, 8, "YSS");
    put_text(&mut data, 608, 8, "IU"); // KNETWK
    append_samples(&mut data, &[-1.0, 2.0], endianness);

    let mut reader = SacReader::new(&data).unwrap();
    assert_eq!(reader.endianness(), Endianness::Big);

    let header = reader.header();
    assert_eq!(header.begin_time(), Some(12.75));
    assert_eq!(header.int("NZYEAR"), Some(2021));
    assert_eq!(header.station_name(), Some("YSS"));
    assert_eq!(header.network(), Some("IU"));
    assert_eq!(header.sampling_rate(), Some(20.0));

    let block = reader.next_block().unwrap();
    assert_eq!(block.samples(), &[-1.0, 2.0]);
}

#[test]
fn test_multi_component_blocks_back_to_back() {
    // Two NPTS-sized blocks in one buffer, pulled one call at a time
    let endianness = Endianness::Little;
    let mut data = synthetic_header(endianness);
    put_f32(&mut data, 0, 0.05, endianness);
    put_i32(&mut data, 79, 4, endianness);
    append_samples(&mut data, &[1.0, 2.0, 3.0, 4.0], endianness);
    append_samples(&mut data, &[5.0, 6.0, 7.0, 8.0], endianness);

    let mut reader = SacReader::new(&data).unwrap();
    let first = reader.next_block().unwrap();
    let second = reader.next_block().unwrap();

    assert_eq!(first.samples(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(second.samples(), &[5.0, 6.0, 7.0, 8.0]);
    assert_eq!(reader.remaining(), 0);
    assert!(reader.next_block().is_err());
}

#[test]
fn test_truncated_header_is_rejected() {
    let data = vec![0u8; 600];
    match decode_header(&data, Endianness::Little) {
        Err(SacError::TruncatedHeader { actual }) => assert_eq!(actual, 600),
        other => panic!("expected TruncatedHeader, got {other:?}"),
    }
}

#[test]
fn test_truncated_waveform_is_rejected() {
    let endianness = Endianness::Little;
    let mut data = synthetic_header(endianness);
    put_f32(&mut data, 0, 0.05, endianness);
    put_i32(&mut data, 79, 100, endianness);
    append_samples(&mut data, &vec![0.0; 50], endianness);

    let mut reader = SacReader::new(&data).unwrap();
    match reader.next_block() {
        Err(SacError::TruncatedData {
            required,
            available,
        }) => {
            assert_eq!(required, 400);
            assert_eq!(available, 200);
        }
        other => panic!("expected TruncatedData, got {other:?}"),
    }
}

#[test]
fn test_all_undefined_header_decodes_cleanly() {
    let data = synthetic_header(Endianness::Little);
    let header = decode_header(&data, Endianness::Little).unwrap();

    assert_eq!(header.len(), 111);
    assert_eq!(header.delta(), None);
    assert_eq!(header.npts(), None);
    assert_eq!(header.station_name(), None);
    assert_eq!(header.sampling_rate(), None);
    // Logicals have no undefined state; the sentinel word is just nonzero
    assert_eq!(header.logical("LEVEN"), Some(true));
}

#[test]
fn test_field_order_is_deterministic() {
    let data = synthetic_header(Endianness::Little);
    let header = decode_header(&data, Endianness::Little).unwrap();

    let names: Vec<&str> = header.iter().map(|(name, _)| name).collect();
    assert_eq!(names[0], "DELTA");
    assert_eq!(names[59], "NZYEAR");
    assert_eq!(names[84], "LEVEN");
    assert_eq!(names[88], "KSTNM");
    assert_eq!(names[89], "KEVNM");
    assert_eq!(names[110], "KINST");
}

#[test]
fn test_sixteen_byte_event_name() {
    let endianness = Endianness::Little;
    let mut data = synthetic_header(endianness);
    put_f32(&mut data, 0, 0.05, endianness);
    put_text(&mut data, 448, 16, "HAITI REGION");

    let reader = SacReader::new(&data).unwrap();
    assert_eq!(reader.header().event_name(), Some("HAITI REGION"));
}

#[test]
fn test_decoded_data_owns_its_buffer() {
    let endianness = Endianness::Little;
    let mut data = synthetic_header(endianness);
    put_f32(&mut data, 0, 0.05, endianness);
    put_i32(&mut data, 79, 1, endianness);
    append_samples(&mut data, &[4.5], endianness);

    let (header, block) = {
        let mut reader = SacReader::new(&data).unwrap();
        let block = reader.next_block().unwrap();
        (reader.header().clone(), block)
    };
    drop(data);

    assert_eq!(header.delta(), Some(0.05));
    assert_eq!(block.samples(), &[4.5]);
}
