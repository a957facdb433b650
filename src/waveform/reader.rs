// src/waveform/reader.rs
use crate::error::{Result, SacError};
use crate::types::Endianness;
use crate::waveform::block::WaveformBlock;

/// Cursor-based reader for the waveform region of a SAC file.
///
/// Construct it over the bytes that follow the 632-byte header. Each call to
/// [`read_block`](WaveformReader::read_block) decodes one fixed-length array
/// of 32-bit floats and leaves the cursor at the next block boundary, so the
/// caller pulls exactly as many blocks as the file's component count
/// requires. The byte order is the one resolved during header decoding; it
/// is never re-detected here.
#[derive(Debug)]
pub struct WaveformReader<'a> {
    data: &'a [u8],
    offset: usize,
    endianness: Endianness,
}

impl<'a> WaveformReader<'a> {
    /// Create a reader over `data`, positioned at its first byte.
    pub fn new(data: &'a [u8], endianness: Endianness) -> Self {
        Self {
            data,
            offset: 0,
            endianness,
        }
    }

    /// Decode the next `npts` samples as one [`WaveformBlock`].
    ///
    /// `npts == 0` yields an empty block and leaves the cursor unchanged.
    /// Fails with [`SacError::TruncatedData`] when fewer than `npts * 4`
    /// bytes remain, reporting required vs available byte counts.
    pub fn read_block(&mut self, npts: usize) -> Result<WaveformBlock> {
        if npts == 0 {
            return Ok(WaveformBlock::new(Vec::new()));
        }

        let required = npts * 4;
        let available = self.data.len() - self.offset;
        if available < required {
            return Err(SacError::TruncatedData {
                required,
                available,
            });
        }

        let region = &self.data[self.offset..self.offset + required];
        let mut samples = vec![0f32; npts];
        self.endianness.read_f32_into(region, &mut samples);
        self.offset += required;

        Ok(WaveformBlock::new(samples))
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Current cursor position, in bytes from the start of the waveform region.
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }
}
