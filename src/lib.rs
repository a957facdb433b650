// src/lib.rs
//! # sac-rs
//!
//! A Rust library for decoding SAC (Seismic Analysis Code) binary seismogram
//! files: a fixed 632-byte header of typed fields followed by one or more
//! contiguous arrays of 32-bit float samples.
//!
//! ## Features
//!
//! - **Byte-exact layout**: every header field decoded from the fixed offset
//!   table the SAC format defines, in either byte order
//! - **Runtime endianness detection**: resolved once per buffer from the
//!   DELTA field, then threaded through all reads
//! - **Sentinel-aware**: the format's -12345 "undefined" sentinels surface as
//!   `None`, never as magic numbers
//! - **Caller-owned I/O**: the decoder works on byte slices; opening files
//!   and reading bytes stays with the caller
//!
//! ## Quick start
//!
//! ```
//! use sac_rs::SacReader;
//!
//! // A minimal little-endian SAC file built in memory: header + 3 samples.
//! let mut data = vec![0u8; 632];
//! data[0..4].copy_from_slice(&0.05f32.to_le_bytes());   // DELTA, word 0
//! data[316..320].copy_from_slice(&3i32.to_le_bytes());  // NPTS, word 79
//! data[440..448].copy_from_slice(b"TEST\0\0\0\0");      // KSTNM
//! for sample in [1.0f32, -2.5, 3.0] {
//!     data.extend_from_slice(&sample.to_le_bytes());
//! }
//!
//! let mut reader = SacReader::new(&data).unwrap();
//! assert_eq!(reader.header().delta(), Some(0.05));
//! assert_eq!(reader.header().station_name(), Some("TEST"));
//!
//! let block = reader.next_block().unwrap();
//! assert_eq!(block.samples(), &[1.0, -2.5, 3.0]);
//! ```
//!
//! ## Decoding the pieces separately
//!
//! ```
//! use sac_rs::{decode_header, detect_endianness, Endianness, WaveformReader};
//!
//! let mut data = vec![0u8; 632];
//! data[0..4].copy_from_slice(&0.05f32.to_be_bytes());
//! data[316..320].copy_from_slice(&1i32.to_be_bytes());
//! data.extend_from_slice(&9.5f32.to_be_bytes());
//!
//! let endianness = detect_endianness(&data).unwrap();
//! assert_eq!(endianness, Endianness::Big);
//!
//! let header = decode_header(&data, endianness).unwrap();
//! let npts = header.npts().unwrap() as usize;
//!
//! let mut waveform = WaveformReader::new(&data[632..], endianness);
//! let block = waveform.read_block(npts).unwrap();
//! assert_eq!(block.samples(), &[9.5]);
//! ```
//!
//! ## Limitations
//!
//! Endianness detection is a heuristic keyed on the DELTA field resembling a
//! common sampling interval; see [`detect_endianness`] for the failure mode
//! and the refusal behavior when neither byte order is plausible. The library
//! decodes only; it does not write SAC files, convert units, or process
//! samples.

// Modules
pub mod endian;
pub mod error;
pub mod header;
pub mod reader;
pub mod types;
pub mod waveform;

// Re-export commonly used items at the crate root for convenience
pub use error::{Result, SacError};

pub use types::{Endianness, FieldType, HeaderValue};

pub use endian::{detect_endianness, DELTA_TOLERANCE, REFERENCE_DELTA};

pub use header::{decode_header, SacHeader};

pub use waveform::{WaveformBlock, WaveformReader};

pub use reader::SacReader;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sac_rs::prelude::*;
    //! ```

    pub use crate::error::{Result, SacError};
    pub use crate::reader::SacReader;
    pub use crate::types::{Endianness, HeaderValue};
    pub use crate::waveform::WaveformBlock;
}

/// Size of the fixed SAC header in bytes.
pub const HEADER_SIZE: usize = 632;

/// "Undefined" sentinel for float header fields.
pub const SENTINEL_F32: f32 = -12345.0;

/// "Undefined" sentinel for integer header fields.
pub const SENTINEL_I32: i32 = -12345;

/// "Undefined" sentinel for text header fields, compared after padding is trimmed.
pub const SENTINEL_TEXT: &str = "-12345";

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
