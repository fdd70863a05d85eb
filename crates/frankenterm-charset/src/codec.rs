//! The character codec seam and the set of supported charsets.

use std::fmt;

use crate::cp932::{decode_cp932, encode_cp932, is_lead_byte};
use crate::dec_special::{dec_special_to_unicode, unicode_to_dec_special};
use crate::error::CodecError;
use crate::iso8859::Iso8859Part;
use crate::utf8::{decode_utf8, encode_utf8, utf8_resync_len};

/// A byte-oriented character set that converts one character at a time.
///
/// Implementations never write partial output: `encode_char` either appends
/// the whole encoding of `ch` or leaves `out` untouched.
pub trait CharCodec {
    /// Decode the first character of `input`, returning it and the number
    /// of bytes it used.
    fn decode_char(&self, input: &[u8]) -> Result<(char, usize), CodecError>;

    /// Append the encoding of `ch` to `out`.
    fn encode_char(&self, ch: char, out: &mut Vec<u8>) -> Result<(), CodecError>;

    /// Bytes to skip after `decode_char` failed on `input` with `error`,
    /// so lenient decoding can continue. Always at least 1.
    fn resync_len(&self, input: &[u8], error: CodecError) -> usize {
        match error {
            CodecError::Incomplete => input.len().max(1),
            _ => 1,
        }
    }
}

/// Every charset the engine converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
    /// Windows code page 932 (Shift_JIS with vendor extensions).
    Cp932,
    Iso8859(Iso8859Part),
    /// VT100 line drawing set.
    DecSpecial,
}

impl Charset {
    /// Parse a charset label, case-insensitively.
    ///
    /// Accepts `utf-8`, `cp932` (also `shift_jis`, `sjis`, `windows-31j`),
    /// `iso-8859-N` (also `iso8859-N`, `latin1`), and `dec-special`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let label = value.trim().to_ascii_lowercase().replace('_', "-");
        match label.as_str() {
            "utf-8" | "utf8" => return Some(Self::Utf8),
            "cp932" | "shift-jis" | "sjis" | "windows-31j" => return Some(Self::Cp932),
            "latin1" | "latin-1" => return Some(Self::Iso8859(Iso8859Part::LATIN_1)),
            "dec-special" | "dec-special-graphics" | "dec-graphics" => {
                return Some(Self::DecSpecial);
            }
            _ => {}
        }
        let part = label
            .strip_prefix("iso-8859-")
            .or_else(|| label.strip_prefix("iso8859-"))?;
        let part = part.parse::<u8>().ok()?;
        Iso8859Part::new(part).ok().map(Self::Iso8859)
    }

    /// Whether every character is a single byte.
    #[must_use]
    pub const fn is_single_byte(self) -> bool {
        matches!(self, Self::Iso8859(_) | Self::DecSpecial)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => f.write_str("UTF-8"),
            Self::Cp932 => f.write_str("CP932"),
            Self::Iso8859(part) => write!(f, "{part}"),
            Self::DecSpecial => f.write_str("DEC Special Graphics"),
        }
    }
}

impl CharCodec for Charset {
    fn decode_char(&self, input: &[u8]) -> Result<(char, usize), CodecError> {
        match self {
            Self::Utf8 => decode_utf8(input),
            Self::Cp932 => decode_cp932(input),
            Self::Iso8859(part) => {
                let &byte = input.first().ok_or(CodecError::Incomplete)?;
                let scalar = u32::from(part.decode(byte)?);
                let ch = char::from_u32(scalar).ok_or(CodecError::InvalidScalar(scalar))?;
                Ok((ch, 1))
            }
            Self::DecSpecial => {
                let &byte = input.first().ok_or(CodecError::Incomplete)?;
                let ch = dec_special_to_unicode(byte).ok_or(CodecError::Invalid)?;
                Ok((ch, 1))
            }
        }
    }

    fn encode_char(&self, ch: char, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let scalar = u32::from(ch);
        match self {
            Self::Utf8 => out.extend_from_slice(&encode_utf8(scalar)?),
            Self::Cp932 => out.extend_from_slice(&encode_cp932(scalar)?),
            Self::Iso8859(part) => out.push(part.encode(scalar)?),
            Self::DecSpecial => {
                out.push(unicode_to_dec_special(scalar).ok_or(CodecError::Unmapped)?);
            }
        }
        Ok(())
    }

    fn resync_len(&self, input: &[u8], error: CodecError) -> usize {
        match (self, error) {
            (Self::Utf8, _) => utf8_resync_len(input),
            // An unassigned pair is still a pair unless its trail is ASCII.
            (Self::Cp932, CodecError::Unmapped)
                if input.first().is_some_and(|&byte| is_lead_byte(byte))
                    && input.get(1).is_some_and(|&byte| byte >= 0x80) =>
            {
                2
            }
            (_, CodecError::Incomplete) => input.len().max(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(part: u8) -> Charset {
        Charset::Iso8859(Iso8859Part::new(part).unwrap())
    }

    #[test]
    fn parse_labels() {
        assert_eq!(Charset::parse("UTF-8"), Some(Charset::Utf8));
        assert_eq!(Charset::parse("Shift_JIS"), Some(Charset::Cp932));
        assert_eq!(Charset::parse("latin1"), Some(latin(1)));
        assert_eq!(Charset::parse("ISO-8859-15"), Some(latin(15)));
        assert_eq!(Charset::parse("iso8859-5"), Some(latin(5)));
        assert_eq!(Charset::parse("dec-special"), Some(Charset::DecSpecial));
        assert_eq!(Charset::parse("iso-8859-12"), None);
        assert_eq!(Charset::parse("ebcdic"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for charset in [Charset::Utf8, Charset::Cp932, latin(2), latin(16)] {
            assert_eq!(Charset::parse(&charset.to_string()), Some(charset));
        }
        assert_eq!(Charset::DecSpecial.to_string(), "DEC Special Graphics");
    }

    #[test]
    fn decode_char_per_charset() {
        assert_eq!(Charset::Utf8.decode_char("é".as_bytes()), Ok(('é', 2)));
        assert_eq!(Charset::Cp932.decode_char(&[0x82, 0xA0]), Ok(('あ', 2)));
        assert_eq!(latin(5).decode_char(&[0xB0]), Ok(('\u{0410}', 1)));
        assert_eq!(Charset::DecSpecial.decode_char(b"q"), Ok(('─', 1)));
        assert_eq!(latin(6).decode_char(&[0xA1]), Err(CodecError::Unmapped));
        assert_eq!(latin(2).decode_char(&[]), Err(CodecError::Incomplete));
    }

    #[test]
    fn encode_char_appends_or_leaves_untouched() {
        let mut out = b"x".to_vec();
        Charset::Cp932.encode_char('あ', &mut out).unwrap();
        assert_eq!(out, [b'x', 0x82, 0xA0]);
        assert_eq!(latin(1).encode_char('€', &mut out), Err(CodecError::Unmapped));
        assert_eq!(Charset::DecSpecial.encode_char('a', &mut out), Err(CodecError::Unmapped));
        assert_eq!(out, [b'x', 0x82, 0xA0]);
        latin(15).encode_char('€', &mut out).unwrap();
        assert_eq!(out.last(), Some(&0xA4));
    }

    #[test]
    fn resync_skips_whole_cp932_pairs() {
        assert_eq!(Charset::Cp932.resync_len(&[0x85, 0x9F], CodecError::Unmapped), 2);
        assert_eq!(Charset::Cp932.resync_len(&[0x85, 0x40], CodecError::Unmapped), 1);
        assert_eq!(Charset::Cp932.resync_len(&[0x82, 0x20], CodecError::Invalid), 1);
        assert_eq!(Charset::Utf8.resync_len(&[0xE4, 0xB8], CodecError::Incomplete), 2);
        assert_eq!(Charset::Utf8.resync_len(&[0xFF, 0x41], CodecError::Invalid), 1);
        assert_eq!(Charset::Utf8.resync_len(&[0xE4, 0xB8, 0x41], CodecError::Invalid), 2);
    }

    #[test]
    fn single_byte_charsets() {
        assert!(latin(1).is_single_byte());
        assert!(Charset::DecSpecial.is_single_byte());
        assert!(!Charset::Cp932.is_single_byte());
    }
}
