// src/header/field_table.rs

//! The fixed SAC header field tables.
//!
//! Field identity is defined here and only here: (word offset, name) for the
//! numeric classes and literal byte ranges for the text fields. Offsets for
//! numeric fields are given in words (4-byte units) per the SAC format
//! definition. Decoding iterates these tables in order, which fixes the
//! insertion order of the output record: floats, then integers, then
//! logicals, then text.
//!
//! Text field placement is deliberately hard-coded as absolute byte ranges
//! rather than derived from word arithmetic. The nominal SAC word table
//! repeats base words across neighbouring K-fields, and positional offset
//! computation over such a duplicate-keyed list misplaces fields as soon as
//! entries are reordered. The literal ranges below follow the authoritative
//! layout: KSTNM at byte 440, the 16-byte KEVNM at 448, then twenty-one
//! consecutive 8-byte fields through the end of the header at 632.

/// A numeric (float, integer, or logical) header field, addressed by word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericField {
    pub word: usize,
    pub name: &'static str,
}

impl NumericField {
    const fn new(word: usize, name: &'static str) -> Self {
        Self { word, name }
    }

    /// Byte offset of this field within the header.
    pub const fn offset(&self) -> usize {
        self.word * 4
    }
}

/// A fixed-width ASCII text (K-type) header field, addressed by byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
}

impl TextField {
    const fn new(name: &'static str, offset: usize, len: usize) -> Self {
        Self { name, offset, len }
    }
}

/// All 32-bit float (F-type) header fields.
pub const FLOAT_FIELDS: &[NumericField] = &[
    NumericField::new(0, "DELTA"),
    NumericField::new(1, "DEPMIN"),
    NumericField::new(2, "DEPMAX"),
    NumericField::new(4, "ODELTA"),
    NumericField::new(5, "B"),
    NumericField::new(6, "E"),
    NumericField::new(7, "O"),
    NumericField::new(8, "A"),
    NumericField::new(10, "T0"),
    NumericField::new(11, "T1"),
    NumericField::new(12, "T2"),
    NumericField::new(13, "T3"),
    NumericField::new(14, "T4"),
    NumericField::new(15, "T5"),
    NumericField::new(16, "T6"),
    NumericField::new(17, "T7"),
    NumericField::new(18, "T8"),
    NumericField::new(19, "T9"),
    NumericField::new(20, "F"),
    NumericField::new(21, "RESP0"),
    NumericField::new(22, "RESP1"),
    NumericField::new(23, "RESP2"),
    NumericField::new(24, "RESP3"),
    NumericField::new(25, "RESP4"),
    NumericField::new(26, "RESP5"),
    NumericField::new(27, "RESP6"),
    NumericField::new(28, "RESP7"),
    NumericField::new(29, "RESP8"),
    NumericField::new(30, "RESP9"),
    NumericField::new(31, "STLA"),
    NumericField::new(32, "STLO"),
    NumericField::new(33, "STEL"),
    NumericField::new(34, "STDP"),
    NumericField::new(35, "EVLA"),
    NumericField::new(36, "EVLO"),
    NumericField::new(37, "EVEL"),
    NumericField::new(38, "EVDP"),
    NumericField::new(39, "MAG"),
    NumericField::new(40, "USER0"),
    NumericField::new(41, "USER1"),
    NumericField::new(42, "USER2"),
    NumericField::new(43, "USER3"),
    NumericField::new(44, "USER4"),
    NumericField::new(45, "USER5"),
    NumericField::new(46, "USER6"),
    NumericField::new(47, "USER7"),
    NumericField::new(48, "USER8"),
    NumericField::new(49, "USER9"),
    NumericField::new(50, "DIST"),
    NumericField::new(51, "AZ"),
    NumericField::new(52, "BAZ"),
    NumericField::new(53, "GCARC"),
    NumericField::new(55, "CMPAZ"),
    NumericField::new(56, "CMPINC"),
    NumericField::new(57, "XMINIMUM"),
    NumericField::new(58, "XMAXIMUM"),
    NumericField::new(59, "YMINIMUM"),
    NumericField::new(60, "YMAXIMUM"),
    NumericField::new(54, "DEPMEN"),
];

/// All 32-bit signed integer (N/I-type) header fields.
pub const INT_FIELDS: &[NumericField] = &[
    NumericField::new(70, "NZYEAR"),
    NumericField::new(71, "NZJDAY"),
    NumericField::new(72, "NZHOUR"),
    NumericField::new(73, "NZMIN"),
    NumericField::new(74, "NZSEC"),
    NumericField::new(75, "NZMSEC"),
    NumericField::new(76, "NVHDR"),
    NumericField::new(77, "NORID"),
    NumericField::new(78, "NEVID"),
    NumericField::new(79, "NPTS"),
    NumericField::new(80, "NWFID"),
    NumericField::new(81, "NXSIZE"),
    NumericField::new(82, "NYSIZE"),
    NumericField::new(85, "IFTYPE"),
    NumericField::new(86, "IDEP"),
    NumericField::new(87, "IZTYPE"),
    NumericField::new(89, "IINST"),
    NumericField::new(90, "ISTREG"),
    NumericField::new(91, "IEVREG"),
    NumericField::new(92, "IEVTYP"),
    NumericField::new(93, "IQUAL"),
    NumericField::new(94, "ISYNTH"),
    NumericField::new(95, "IMAGTYP"),
    NumericField::new(96, "IMAGSRC"),
    NumericField::new(97, "IBODY"),
];

/// All logical (L-type) header fields. 0 is false, any nonzero value true.
pub const LOGICAL_FIELDS: &[NumericField] = &[
    NumericField::new(105, "LEVEN"),
    NumericField::new(106, "LPSPOL"),
    NumericField::new(107, "LOVROK"),
    NumericField::new(108, "LCALDA"),
];

/// All text (K-type) header fields, as literal byte ranges.
///
/// KEVNM is the single 16-byte field; everything else is 8 bytes.
pub const TEXT_FIELDS: &[TextField] = &[
    TextField::new("KSTNM", 440, 8),
    TextField::new("KEVNM", 448, 16),
    TextField::new("KHOLE", 464, 8),
    TextField::new("KO", 472, 8),
    TextField::new("KA", 480, 8),
    TextField::new("KT0", 488, 8),
    TextField::new("KT1", 496, 8),
    TextField::new("KT2", 504, 8),
    TextField::new("KT3", 512, 8),
    TextField::new("KT4", 520, 8),
    TextField::new("KT5", 528, 8),
    TextField::new("KT6", 536, 8),
    TextField::new("KT7", 544, 8),
    TextField::new("KT8", 552, 8),
    TextField::new("KT9", 560, 8),
    TextField::new("KF", 568, 8),
    TextField::new("KUSER0", 576, 8),
    TextField::new("KUSER1", 584, 8),
    TextField::new("KUSER2", 592, 8),
    TextField::new("KCMPNM", 600, 8),
    TextField::new("KNETWK", 608, 8),
    TextField::new("KDATRD", 616, 8),
    TextField::new("KINST", 624, 8),
];

/// Number of fields across all four tables.
pub const FIELD_COUNT: usize =
    FLOAT_FIELDS.len() + INT_FIELDS.len() + LOGICAL_FIELDS.len() + TEXT_FIELDS.len();
