// src/waveform/block.rs

/// One decoded block of 32-bit float waveform samples.
///
/// The block owns its samples outright and holds no reference to the byte
/// buffer it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformBlock {
    samples: Vec<f32>,
}

impl WaveformBlock {
    pub(crate) fn new(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    /// The decoded samples in file order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the block, yielding the sample vector.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

impl AsRef<[f32]> for WaveformBlock {
    fn as_ref(&self) -> &[f32] {
        &self.samples
    }
}

impl IntoIterator for WaveformBlock {
    type Item = f32;
    type IntoIter = std::vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a WaveformBlock {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
