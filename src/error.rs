// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SacError {
    #[error("truncated header: need 632 bytes, got {actual}")]
    TruncatedHeader { actual: usize },

    #[error("truncated waveform data: need {required} bytes, {available} available")]
    TruncatedData { required: usize, available: usize },

    #[error("non-ASCII byte in text field {field}")]
    InvalidEncoding { field: &'static str },

    #[error("cannot determine byte order: DELTA is not a plausible sampling interval in either byte order")]
    AmbiguousEndianness,
}

pub type Result<T> = std::result::Result<T, SacError>;
