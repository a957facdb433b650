// src/reader.rs
use crate::endian::detect_endianness;
use crate::error::Result;
use crate::header::{decode_header, SacHeader};
use crate::types::Endianness;
use crate::waveform::{WaveformBlock, WaveformReader};
use crate::HEADER_SIZE;

/// Whole-buffer SAC decoder: detect byte order, decode the header, then pull
/// waveform blocks on demand.
///
/// The reader borrows the caller's byte buffer; opening files and reading
/// their bytes stays with the caller. Multi-component files store their
/// blocks back to back, so call [`next_block`](SacReader::next_block) once
/// per component.
///
/// ```
/// use sac_rs::SacReader;
///
/// let mut data = vec![0u8; 632];
/// data[0..4].copy_from_slice(&0.05f32.to_le_bytes()); // DELTA
/// data[316..320].copy_from_slice(&2i32.to_le_bytes()); // NPTS
/// for sample in [1.0f32, -2.5] {
///     data.extend_from_slice(&sample.to_le_bytes());
/// }
///
/// let mut reader = SacReader::new(&data).unwrap();
/// assert_eq!(reader.header().npts(), Some(2));
/// let block = reader.next_block().unwrap();
/// assert_eq!(block.samples(), &[1.0, -2.5]);
/// ```
#[derive(Debug)]
pub struct SacReader<'a> {
    header: SacHeader,
    endianness: Endianness,
    waveform: WaveformReader<'a>,
}

impl<'a> SacReader<'a> {
    /// Detect the byte order of `data`, decode its header, and position the
    /// waveform cursor at byte 632.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let endianness = detect_endianness(data)?;
        let header = decode_header(data, endianness)?;
        let waveform = WaveformReader::new(&data[HEADER_SIZE..], endianness);
        Ok(Self {
            header,
            endianness,
            waveform,
        })
    }

    pub fn header(&self) -> &SacHeader {
        &self.header
    }

    /// Byte order resolved for this buffer, used for every field and sample read.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Decode the next waveform block of NPTS samples.
    ///
    /// An undefined NPTS decodes as an empty block.
    pub fn next_block(&mut self) -> Result<WaveformBlock> {
        let npts = self.header.npts().unwrap_or(0).max(0) as usize;
        self.waveform.read_block(npts)
    }

    /// Bytes remaining past the waveform cursor.
    pub fn remaining(&self) -> usize {
        self.waveform.remaining()
    }
}
