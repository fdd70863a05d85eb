//! Codec and conversion errors.

use std::fmt;

/// Why a single-character encode or decode failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecError {
    /// Input ended in the middle of a sequence. More input may complete it.
    Incomplete,
    /// The sequence at the front of the input is malformed.
    Invalid,
    /// Well-formed input with no counterpart in the target character set.
    Unmapped,
    /// Value above U+10FFFF or inside the surrogate block.
    InvalidScalar(u32),
    /// ISO-8859 part outside 1..=11, 13..=16.
    UnsupportedPart(u8),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "incomplete sequence"),
            Self::Invalid => write!(f, "malformed sequence"),
            Self::Unmapped => write!(f, "no mapping in target character set"),
            Self::InvalidScalar(value) => write!(f, "invalid Unicode scalar 0x{value:X}"),
            Self::UnsupportedPart(part) => write!(f, "unsupported ISO-8859 part {part}"),
        }
    }
}

impl std::error::Error for CodecError {}

/// A failed bulk conversion: what went wrong and where.
///
/// `position` counts input units: bytes for byte-oriented input (including
/// `&str`), `u16` units for UTF-16, and `u32` units for UTF-32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConvertError {
    pub position: usize,
    pub kind: CodecError,
}

impl ConvertError {
    #[must_use]
    pub const fn new(position: usize, kind: CodecError) -> Self {
        Self { position, kind }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conversion failed at offset {}: {}", self.position, self.kind)
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        assert_eq!(CodecError::Incomplete.to_string(), "incomplete sequence");
        assert_eq!(
            CodecError::InvalidScalar(0xD800).to_string(),
            "invalid Unicode scalar 0xD800"
        );
        assert_eq!(
            CodecError::UnsupportedPart(12).to_string(),
            "unsupported ISO-8859 part 12"
        );
        assert_eq!(
            ConvertError::new(7, CodecError::Invalid).to_string(),
            "conversion failed at offset 7: malformed sequence"
        );
    }

    #[test]
    fn convert_error_exposes_kind_as_source() {
        let err = ConvertError::new(0, CodecError::Unmapped);
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("no mapping in target character set"));
    }
}
