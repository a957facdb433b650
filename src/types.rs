// src/types.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of a SAC file, resolved once per buffer and then held fixed
/// for every field and sample read of that buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Read a 32-bit float from the first 4 bytes of `bytes` in this byte order.
    pub fn read_f32(&self, bytes: &[u8]) -> f32 {
        match self {
            Endianness::Little => LittleEndian::read_f32(bytes),
            Endianness::Big => BigEndian::read_f32(bytes),
        }
    }

    /// Read a 32-bit signed integer from the first 4 bytes of `bytes` in this byte order.
    pub fn read_i32(&self, bytes: &[u8]) -> i32 {
        match self {
            Endianness::Little => LittleEndian::read_i32(bytes),
            Endianness::Big => BigEndian::read_i32(bytes),
        }
    }

    /// Bulk-read `dst.len()` consecutive 32-bit floats from `src`.
    pub fn read_f32_into(&self, src: &[u8], dst: &mut [f32]) {
        match self {
            Endianness::Little => LittleEndian::read_f32_into(src, dst),
            Endianness::Big => BigEndian::read_f32_into(src, dst),
        }
    }
}

/// The four SAC header field classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Float,
    Int,
    Logical,
    Text,
}

/// A decoded header field value.
///
/// The format's "undefined" sentinels (-12345.0 for floats, -12345 for
/// integers, "-12345" for text) are mapped to `None` at the decode boundary,
/// so downstream code never branches on a magic number. Logical fields have
/// no undefined state.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Float(Option<f32>),
    Int(Option<i32>),
    Logical(bool),
    Text(Option<String>),
}

impl HeaderValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            HeaderValue::Float(_) => FieldType::Float,
            HeaderValue::Int(_) => FieldType::Int,
            HeaderValue::Logical(_) => FieldType::Logical,
            HeaderValue::Text(_) => FieldType::Text,
        }
    }

    /// The float value, if this is a defined float field.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            HeaderValue::Float(v) => *v,
            _ => None,
        }
    }

    /// The integer value, if this is a defined integer field.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            HeaderValue::Int(v) => *v,
            _ => None,
        }
    }

    /// The boolean value, if this is a logical field.
    pub fn as_logical(&self) -> Option<bool> {
        match self {
            HeaderValue::Logical(v) => Some(*v),
            _ => None,
        }
    }

    /// The text value, if this is a defined text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(Some(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// True when the field carries the format's undefined sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(
            self,
            HeaderValue::Float(None) | HeaderValue::Int(None) | HeaderValue::Text(None)
        )
    }
}
