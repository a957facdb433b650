// src/header/record.rs
use crate::types::HeaderValue;

/// A decoded SAC header: an ordered field-name to value mapping.
///
/// Field order matches the canonical table order (floats, integers, logicals,
/// text) so iteration and serialization are deterministic. Every field named
/// by the format tables is present exactly once; fields carrying the format's
/// undefined sentinel hold `None` inside their [`HeaderValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct SacHeader {
    fields: Vec<(&'static str, HeaderValue)>,
}

impl SacHeader {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: HeaderValue) {
        self.fields.push((name, value));
    }

    /// Look up a field by its canonical SAC name (e.g. `"DELTA"`, `"KSTNM"`).
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Iterate all fields in canonical table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &HeaderValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Defined value of a float field, `None` if undefined or not a float.
    pub fn float(&self, name: &str) -> Option<f32> {
        self.get(name).and_then(HeaderValue::as_float)
    }

    /// Defined value of an integer field, `None` if undefined or not an integer.
    pub fn int(&self, name: &str) -> Option<i32> {
        self.get(name).and_then(HeaderValue::as_int)
    }

    /// Value of a logical field, `None` if the name is not a logical field.
    pub fn logical(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(HeaderValue::as_logical)
    }

    /// Defined value of a text field, `None` if undefined or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(HeaderValue::as_text)
    }

    /// Sampling interval in seconds (DELTA).
    pub fn delta(&self) -> Option<f32> {
        self.float("DELTA")
    }

    /// Declared sample count per waveform block (NPTS).
    pub fn npts(&self) -> Option<i32> {
        self.int("NPTS")
    }

    /// Begin time of the trace in seconds relative to the reference time (B).
    pub fn begin_time(&self) -> Option<f32> {
        self.float("B")
    }

    /// Station name (KSTNM).
    pub fn station_name(&self) -> Option<&str> {
        self.text("KSTNM")
    }

    /// Event name (KEVNM), the single 16-character text field.
    pub fn event_name(&self) -> Option<&str> {
        self.text("KEVNM")
    }

    /// Component name (KCMPNM).
    pub fn component_name(&self) -> Option<&str> {
        self.text("KCMPNM")
    }

    /// Network code (KNETWK).
    pub fn network(&self) -> Option<&str> {
        self.text("KNETWK")
    }

    /// Sampling rate in Hz, derived as 1/DELTA when DELTA is defined and nonzero.
    pub fn sampling_rate(&self) -> Option<f32> {
        match self.delta() {
            Some(delta) if delta != 0.0 => Some(1.0 / delta),
            _ => None,
        }
    }
}
