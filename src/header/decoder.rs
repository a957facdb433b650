// src/header/decoder.rs
use crate::error::{Result, SacError};
use crate::header::field_table::{
    TextField, FIELD_COUNT, FLOAT_FIELDS, INT_FIELDS, LOGICAL_FIELDS, TEXT_FIELDS,
};
use crate::header::record::SacHeader;
use crate::types::{Endianness, HeaderValue};
use crate::{HEADER_SIZE, SENTINEL_F32, SENTINEL_I32, SENTINEL_TEXT};

/// Decode the fixed 632-byte SAC header.
///
/// `bytes` must hold at least [`HEADER_SIZE`] bytes; only the first
/// [`HEADER_SIZE`] are consumed. All reads use the byte order in
/// `endianness`, resolved by the caller beforehand (see
/// [`detect_endianness`](crate::detect_endianness)). Sentinel values map to
/// undefined fields; this is a defined transformation, never an error.
///
/// Pure function: no I/O, no state, the output owns all of its data.
pub fn decode_header(bytes: &[u8], endianness: Endianness) -> Result<SacHeader> {
    if bytes.len() < HEADER_SIZE {
        return Err(SacError::TruncatedHeader {
            actual: bytes.len(),
        });
    }
    let bytes = &bytes[..HEADER_SIZE];

    let mut header = SacHeader::with_capacity(FIELD_COUNT);

    for field in FLOAT_FIELDS {
        let raw = endianness.read_f32(&bytes[field.offset()..field.offset() + 4]);
        let value = if raw == SENTINEL_F32 { None } else { Some(raw) };
        header.push(field.name, HeaderValue::Float(value));
    }

    for field in INT_FIELDS {
        let raw = endianness.read_i32(&bytes[field.offset()..field.offset() + 4]);
        let value = if raw == SENTINEL_I32 { None } else { Some(raw) };
        header.push(field.name, HeaderValue::Int(value));
    }

    for field in LOGICAL_FIELDS {
        let raw = endianness.read_i32(&bytes[field.offset()..field.offset() + 4]);
        header.push(field.name, HeaderValue::Logical(raw != 0));
    }

    for field in TEXT_FIELDS {
        let value = decode_text_field(bytes, field)?;
        header.push(field.name, HeaderValue::Text(value));
    }

    Ok(header)
}

/// Decode one fixed-width text field: trim trailing NUL and space padding,
/// then map the "-12345" sentinel to undefined.
fn decode_text_field(bytes: &[u8], field: &TextField) -> Result<Option<String>> {
    let raw = &bytes[field.offset..field.offset + field.len];
    if !raw.is_ascii() {
        return Err(SacError::InvalidEncoding { field: field.name });
    }

    let trimmed = trim_padding(raw);
    if trimmed == SENTINEL_TEXT.as_bytes() {
        return Ok(None);
    }

    // ASCII was verified above, so the conversion cannot fail
    let text = std::str::from_utf8(trimmed)
        .map_err(|_| SacError::InvalidEncoding { field: field.name })?;
    Ok(Some(text.to_string()))
}

fn trim_padding(raw: &[u8]) -> &[u8] {
    let mut end = raw.len();
    while end > 0 && (raw[end - 1] == 0 || raw[end - 1] == b' ') {
        end -= 1;
    }
    &raw[..end]
}
