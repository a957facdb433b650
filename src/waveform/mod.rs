// src/waveform/mod.rs
pub mod block;
pub mod reader;

pub use block::WaveformBlock;
pub use reader::WaveformReader;
