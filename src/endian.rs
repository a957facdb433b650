// src/endian.rs
use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Result, SacError};
use crate::types::Endianness;

/// Sampling interval the detector compares DELTA against, in seconds.
///
/// 0.05 s (20 Hz) is the common broadband channel interval the reference
/// tooling keys on.
pub const REFERENCE_DELTA: f32 = 0.05;

/// Absolute tolerance for the DELTA comparison.
pub const DELTA_TOLERANCE: f32 = 1e-6;

// Bounds for the fallback plausibility check: sampling intervals from
// 10 MHz down to one sample per ~28 hours.
const MIN_PLAUSIBLE_DELTA: f32 = 1e-7;
const MAX_PLAUSIBLE_DELTA: f32 = 1e5;

/// Detect the byte order of a SAC file from its first 4 bytes (the DELTA field).
///
/// The 4 bytes are interpreted as a little-endian f32 first; a value within
/// [`DELTA_TOLERANCE`] of [`REFERENCE_DELTA`] declares the file little-endian,
/// and the same check in big-endian order declares it big-endian. When neither
/// matches, the byte order whose reading is a plausible sampling interval
/// (finite, positive, between 1e-7 and 1e5 seconds) wins, preferring big-endian
/// to match the reference fallback of "not little-endian means big-endian".
///
/// This is a heuristic, not a guaranteed detection: a file whose DELTA is far
/// from [`REFERENCE_DELTA`] but happens to read plausibly in the wrong byte
/// order will be misdetected. When neither order yields a plausible interval
/// the detector refuses to guess and returns
/// [`SacError::AmbiguousEndianness`].
pub fn detect_endianness(bytes: &[u8]) -> Result<Endianness> {
    if bytes.len() < 4 {
        return Err(SacError::TruncatedHeader {
            actual: bytes.len(),
        });
    }

    let delta_le = LittleEndian::read_f32(&bytes[..4]);
    if (delta_le - REFERENCE_DELTA).abs() < DELTA_TOLERANCE {
        return Ok(Endianness::Little);
    }

    let delta_be = BigEndian::read_f32(&bytes[..4]);
    if (delta_be - REFERENCE_DELTA).abs() < DELTA_TOLERANCE {
        return Ok(Endianness::Big);
    }

    if is_plausible_delta(delta_be) {
        return Ok(Endianness::Big);
    }
    if is_plausible_delta(delta_le) {
        return Ok(Endianness::Little);
    }

    Err(SacError::AmbiguousEndianness)
}

fn is_plausible_delta(delta: f32) -> bool {
    delta.is_finite() && delta >= MIN_PLAUSIBLE_DELTA && delta <= MAX_PLAUSIBLE_DELTA
}
