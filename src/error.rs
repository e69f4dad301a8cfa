use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodingError {
    #[error(
        "Insufficient data at offset {offset}: needed {needed} bytes, {remaining} remaining"
    )]
    InsufficientData {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Object starting at offset {offset} has no end marker")]
    MissingObjectEnd { offset: usize },

    #[error("Invalid UTF-8 string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("Unsupported marker 0x{marker:02x} at offset {offset}")]
    UnsupportedMarker { offset: usize, marker: u8 },
}

impl DecodingError {
    /// Input is truncated or structurally broken, as opposed to using a type
    /// this codec does not handle.
    pub fn is_malformed_input(&self) -> bool {
        !matches!(self, DecodingError::UnsupportedMarker { .. })
    }

    pub fn offset(&self) -> usize {
        match self {
            DecodingError::InsufficientData { offset, .. }
            | DecodingError::MissingObjectEnd { offset }
            | DecodingError::InvalidUtf8 { offset }
            | DecodingError::UnsupportedMarker { offset, .. } => *offset,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("String too long: {0} bytes (max {})", u16::MAX)]
    StringTooLong(usize),

    #[error("Array too long: {0} properties (max {})", u32::MAX)]
    ArrayTooLong(usize),

    #[error("Value of type {0} cannot be encoded here")]
    InvalidInput(&'static str),
}
