//! ISO-8859 single-byte codec.
//!
//! Part 1 (Latin-1) is the identity on U+0000..=U+00FF and has no table.
//! Parts 2..=11 and 13..=16 use generated `(byte, scalar)` tables listing
//! only the bytes the part defines. Part 12 was never published.
//!
//! Both directions scan the table in order and the first match wins. The
//! tables hold at most 256 entries.

use std::fmt;

use crate::error::CodecError;
use crate::tables::iso8859_tables as tables;

/// Every supported part number.
pub const SUPPORTED_PARTS: [u8; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 16];

/// A supported ISO-8859 part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso8859Part(u8);

impl Iso8859Part {
    /// ISO-8859-1, the Unicode identity part.
    pub const LATIN_1: Self = Self(1);

    /// Validate a part number.
    pub fn new(part: u8) -> Result<Self, CodecError> {
        if SUPPORTED_PARTS.contains(&part) {
            Ok(Self(part))
        } else {
            Err(CodecError::UnsupportedPart(part))
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Mapping table, or `None` for the identity part.
    fn table(self) -> Option<&'static [(u8, u16)]> {
        let table = match self.0 {
            2 => tables::ISO_8859_2,
            3 => tables::ISO_8859_3,
            4 => tables::ISO_8859_4,
            5 => tables::ISO_8859_5,
            6 => tables::ISO_8859_6,
            7 => tables::ISO_8859_7,
            8 => tables::ISO_8859_8,
            9 => tables::ISO_8859_9,
            10 => tables::ISO_8859_10,
            11 => tables::ISO_8859_11,
            13 => tables::ISO_8859_13,
            14 => tables::ISO_8859_14,
            15 => tables::ISO_8859_15,
            16 => tables::ISO_8859_16,
            _ => return None,
        };
        Some(table)
    }

    /// Defined `(byte, scalar)` pairs in byte order. Part 1 yields all 256 bytes.
    pub fn mappings(self) -> impl Iterator<Item = (u8, u16)> {
        let identity = self.table().is_none().then(|| (0..=u8::MAX).map(|b| (b, u16::from(b))));
        let table = self.table().unwrap_or_default().iter().copied();
        identity.into_iter().flatten().chain(table)
    }

    /// Scalar for `byte`, or [`CodecError::Unmapped`] for a byte the part
    /// leaves undefined.
    pub fn decode(self, byte: u8) -> Result<u16, CodecError> {
        let Some(table) = self.table() else {
            return Ok(u16::from(byte));
        };
        table
            .iter()
            .find(|&&(code, _)| code == byte)
            .map(|&(_, scalar)| scalar)
            .ok_or(CodecError::Unmapped)
    }

    /// Byte for `scalar`, or [`CodecError::Unmapped`] when the part cannot
    /// represent it.
    pub fn encode(self, scalar: u32) -> Result<u8, CodecError> {
        let Some(table) = self.table() else {
            return u8::try_from(scalar).map_err(|_| CodecError::Unmapped);
        };
        let Ok(scalar) = u16::try_from(scalar) else {
            return Err(CodecError::Unmapped);
        };
        table
            .iter()
            .find(|&&(_, unicode)| unicode == scalar)
            .map(|&(code, _)| code)
            .ok_or(CodecError::Unmapped)
    }
}

impl TryFrom<u8> for Iso8859Part {
    type Error = CodecError;

    fn try_from(part: u8) -> Result<Self, Self::Error> {
        Self::new(part)
    }
}

impl fmt::Display for Iso8859Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ISO-8859-{}", self.0)
    }
}

/// Decode `byte` in ISO-8859 `part`.
///
/// `None` for unsupported parts (0, 12, 17 and above) and for bytes the part
/// leaves undefined.
#[must_use]
pub fn decode_byte(part: u8, byte: u8) -> Option<u16> {
    Iso8859Part::new(part).ok()?.decode(byte).ok()
}

/// Encode `scalar` in ISO-8859 `part`.
///
/// `None` for unsupported parts and for scalars the part cannot represent,
/// including everything at or above U+10000.
#[must_use]
pub fn encode_byte(part: u8, scalar: u32) -> Option<u8> {
    Iso8859Part::new(part).ok()?.encode(scalar).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_is_identity() {
        for b in 0..=u8::MAX {
            assert_eq!(decode_byte(1, b), Some(u16::from(b)));
            assert_eq!(encode_byte(1, u32::from(b)), Some(b));
        }
        assert_eq!(encode_byte(1, 0x100), None);
        assert_eq!(encode_byte(1, 0x20AC), None);
    }

    #[test]
    fn part_12_and_out_of_range_parts_fail() {
        for part in [0, 12, 17, 255] {
            assert_eq!(decode_byte(part, 0x41), None, "part {part}");
            assert_eq!(encode_byte(part, 0x41), None, "part {part}");
            assert_eq!(
                Iso8859Part::new(part),
                Err(CodecError::UnsupportedPart(part))
            );
        }
    }

    #[test]
    fn ascii_half_is_shared_by_every_part() {
        for &part in &SUPPORTED_PARTS {
            for b in 0..0x80u8 {
                assert_eq!(decode_byte(part, b), Some(u16::from(b)), "part {part}");
            }
        }
    }

    #[test]
    fn known_mappings() {
        // Latin-2: A with ogonek
        assert_eq!(decode_byte(2, 0xA1), Some(0x0104));
        // Cyrillic: capital A
        assert_eq!(decode_byte(5, 0xB0), Some(0x0410));
        // Greek: small alpha
        assert_eq!(decode_byte(7, 0xE1), Some(0x03B1));
        // Hebrew: alef
        assert_eq!(decode_byte(8, 0xE0), Some(0x05D0));
        // Thai: ko kai
        assert_eq!(decode_byte(11, 0xA1), Some(0x0E01));
        // Latin-9: euro sign replaces the currency sign
        assert_eq!(decode_byte(15, 0xA4), Some(0x20AC));
        assert_eq!(encode_byte(15, 0x20AC), Some(0xA4));
        assert_eq!(encode_byte(15, 0x00A4), None);
    }

    #[test]
    fn undefined_bytes_fail() {
        assert_eq!(decode_byte(3, 0xA5), None);
        assert_eq!(decode_byte(6, 0xA1), None);
        assert_eq!(decode_byte(11, 0xDB), None);
    }

    #[test]
    fn non_bmp_scalars_never_encode() {
        for &part in &SUPPORTED_PARTS {
            assert_eq!(encode_byte(part, 0x1_0041), None, "part {part}");
        }
    }

    #[test]
    fn every_mapping_round_trips() {
        for &part in &SUPPORTED_PARTS {
            let part = Iso8859Part::new(part).unwrap();
            for (byte, scalar) in part.mappings() {
                assert_eq!(part.decode(byte), Ok(scalar), "{part} byte {byte:#04X}");
                assert_eq!(part.encode(u32::from(scalar)), Ok(byte), "{part} U+{scalar:04X}");
            }
        }
    }

    #[test]
    fn reverse_lookup_is_unambiguous() {
        for &part in &SUPPORTED_PARTS[1..] {
            let part = Iso8859Part::new(part).unwrap();
            let mut scalars: Vec<u16> = part.mappings().map(|(_, s)| s).collect();
            let total = scalars.len();
            scalars.sort_unstable();
            scalars.dedup();
            assert_eq!(scalars.len(), total, "{part} maps two bytes to one scalar");
        }
    }

    #[test]
    fn tables_are_in_byte_order() {
        for &part in &SUPPORTED_PARTS {
            let part = Iso8859Part::new(part).unwrap();
            let bytes: Vec<u8> = part.mappings().map(|(b, _)| b).collect();
            assert!(bytes.windows(2).all(|w| w[0] < w[1]), "{part}");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Iso8859Part::LATIN_1.to_string(), "ISO-8859-1");
        assert_eq!(Iso8859Part::try_from(16).unwrap().to_string(), "ISO-8859-16");
    }
}
