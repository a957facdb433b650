// src/header/mod.rs
pub mod decoder;
pub mod field_table;
pub mod record;

pub use decoder::decode_header;
pub use field_table::{NumericField, TextField, FLOAT_FIELDS, INT_FIELDS, LOGICAL_FIELDS, TEXT_FIELDS};
pub use record::SacHeader;
