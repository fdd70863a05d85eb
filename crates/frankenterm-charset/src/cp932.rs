//! CP932 (Windows Shift_JIS) codec.
//!
//! Lead bytes 0x81..=0x9F and 0xE0..=0xFC start a two-byte code whose trail
//! byte lies in 0x40..=0x7E or 0x80..=0xFC. Every other byte stands alone:
//! ASCII maps to itself, 0xA1..=0xDF are halfwidth katakana, and 0x80, 0xA0,
//! 0xFD..=0xFF take the Windows vendor mappings.
//!
//! Codes are written as a `u16`: single bytes below 0x100, double-byte codes
//! as `lead << 8 | trail`.

use smallvec::SmallVec;

use crate::error::CodecError;
use crate::tables::cp932_table::{CP932_ENCODE_KEYS, CP932_ENCODE_VALUES, CP932_ROWS};

/// Encoded form of one scalar: one or two bytes.
pub type Cp932Bytes = SmallVec<[u8; 2]>;

/// Whether `byte` starts a two-byte code.
#[inline]
#[must_use]
pub const fn is_lead_byte(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Whether `byte` can follow a lead byte.
#[inline]
#[must_use]
pub const fn is_trail_byte(byte: u8) -> bool {
    matches!(byte, 0x40..=0x7E | 0x80..=0xFC)
}

const fn lead_index(lead: u8) -> usize {
    if lead >= 0xE0 {
        (lead - 0xE0) as usize + 31
    } else {
        (lead - 0x81) as usize
    }
}

const fn trail_index(trail: u8) -> usize {
    if trail >= 0x80 {
        (trail - 0x41) as usize
    } else {
        (trail - 0x40) as usize
    }
}

fn single_byte_to_unicode(byte: u8) -> Option<u32> {
    match byte {
        0x00..=0x80 => Some(u32::from(byte)),
        0xA0 => Some(0xF8F0),
        0xA1..=0xDF => Some(0xFF61 + u32::from(byte - 0xA1)),
        0xFD..=0xFF => Some(0xF8F1 + u32::from(byte - 0xFD)),
        _ => None,
    }
}

fn double_byte_to_unicode(lead: u8, trail: u8) -> Option<u32> {
    if !is_lead_byte(lead) || !is_trail_byte(trail) {
        return None;
    }
    match CP932_ROWS[lead_index(lead)][trail_index(trail)] {
        0 => None,
        scalar => Some(u32::from(scalar)),
    }
}

/// Unicode scalar for a CP932 code, or `None` when the code is unassigned
/// or is a bare lead byte.
#[must_use]
pub fn cp932_to_unicode(code: u16) -> Option<u32> {
    let [lead, trail] = code.to_be_bytes();
    if lead == 0 {
        single_byte_to_unicode(trail)
    } else {
        double_byte_to_unicode(lead, trail)
    }
}

/// CP932 code for a Unicode scalar, or `None` when the set cannot hold it.
///
/// Where several codes decode to the same scalar (the NEC and IBM duplicate
/// rows), the code Windows emits is returned.
#[must_use]
pub fn unicode_to_cp932(scalar: u32) -> Option<u16> {
    if scalar < 0x80 {
        return u16::try_from(scalar).ok();
    }
    let key = u16::try_from(scalar).ok()?;
    CP932_ENCODE_KEYS
        .binary_search(&key)
        .ok()
        .map(|index| CP932_ENCODE_VALUES[index])
}

/// Decode the first character of `input`.
///
/// A lead byte at the end of `input` is [`CodecError::Incomplete`]. A lead
/// byte followed by a byte outside the trail range, or a stray byte with no
/// single-byte meaning, is [`CodecError::Invalid`]. A well-formed pair with
/// no assignment is [`CodecError::Unmapped`].
pub fn decode_cp932(input: &[u8]) -> Result<(char, usize), CodecError> {
    let Some(&lead) = input.first() else {
        return Err(CodecError::Incomplete);
    };
    let (scalar, len) = if is_lead_byte(lead) {
        let Some(&trail) = input.get(1) else {
            return Err(CodecError::Incomplete);
        };
        if !is_trail_byte(trail) {
            return Err(CodecError::Invalid);
        }
        (double_byte_to_unicode(lead, trail).ok_or(CodecError::Unmapped)?, 2)
    } else {
        (single_byte_to_unicode(lead).ok_or(CodecError::Invalid)?, 1)
    };
    char::from_u32(scalar)
        .map(|ch| (ch, len))
        .ok_or(CodecError::InvalidScalar(scalar))
}

/// Encode `scalar` as one or two CP932 bytes.
pub fn encode_cp932(scalar: u32) -> Result<Cp932Bytes, CodecError> {
    if char::from_u32(scalar).is_none() {
        return Err(CodecError::InvalidScalar(scalar));
    }
    let code = unicode_to_cp932(scalar).ok_or(CodecError::Unmapped)?;
    let [lead, trail] = code.to_be_bytes();
    let mut bytes = Cp932Bytes::new();
    if lead != 0 {
        bytes.push(lead);
    }
    bytes.push(trail);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_classes() {
        assert!(is_lead_byte(0x81));
        assert!(is_lead_byte(0x9F));
        assert!(is_lead_byte(0xE0));
        assert!(is_lead_byte(0xFC));
        assert!(!is_lead_byte(0xA0));
        assert!(!is_lead_byte(0xFD));
        assert!(is_trail_byte(0x40));
        assert!(is_trail_byte(0xFC));
        assert!(!is_trail_byte(0x7F));
        assert!(!is_trail_byte(0x3F));
    }

    #[test]
    fn single_bytes() {
        assert_eq!(cp932_to_unicode(0x41), Some(0x41));
        assert_eq!(cp932_to_unicode(0x5C), Some(0x5C));
        assert_eq!(cp932_to_unicode(0x80), Some(0x80));
        assert_eq!(cp932_to_unicode(0xA0), Some(0xF8F0));
        assert_eq!(cp932_to_unicode(0xA1), Some(0xFF61));
        assert_eq!(cp932_to_unicode(0xDF), Some(0xFF9F));
        assert_eq!(cp932_to_unicode(0xFD), Some(0xF8F1));
        assert_eq!(cp932_to_unicode(0xFF), Some(0xF8F3));
        assert_eq!(cp932_to_unicode(0x81), None);
    }

    #[test]
    fn double_byte_codes() {
        assert_eq!(cp932_to_unicode(0x82A0), Some(0x3042));
        assert_eq!(cp932_to_unicode(0x8ABF), Some(0x6F22));
        assert_eq!(cp932_to_unicode(0x8740), Some(0x2460));
        assert_eq!(cp932_to_unicode(0x8160), Some(0xFF5E));
        assert_eq!(cp932_to_unicode(0xF040), Some(0xE000));
        assert_eq!(cp932_to_unicode(0xFC4B), Some(0x9ED1));
        assert_eq!(cp932_to_unicode(0xFC4C), None);
        assert_eq!(cp932_to_unicode(0x8540), None);
        assert_eq!(cp932_to_unicode(0x817F), None);
    }

    #[test]
    fn encode_prefers_windows_code_for_duplicates() {
        // U+2252 decodes from both 0x81E0 and the NEC row at 0x8790.
        assert_eq!(cp932_to_unicode(0x8790), Some(0x2252));
        assert_eq!(unicode_to_cp932(0x2252), Some(0x81E0));
        assert_eq!(unicode_to_cp932(0x2225), Some(0x8161));
    }

    #[test]
    fn unmappable_scalars() {
        assert_eq!(unicode_to_cp932(0x00A5), None);
        assert_eq!(unicode_to_cp932(0x1F600), None);
        assert_eq!(encode_cp932(0x00E9), Err(CodecError::Unmapped));
        assert_eq!(encode_cp932(0xD800), Err(CodecError::InvalidScalar(0xD800)));
    }

    #[test]
    fn decode_reports_consumed_bytes() {
        assert_eq!(decode_cp932(b"A\x82"), Ok(('A', 1)));
        assert_eq!(decode_cp932(&[0x82, 0xA0, 0x41]), Ok(('あ', 2)));
        assert_eq!(decode_cp932(&[0xB1]), Ok(('ｱ', 1)));
    }

    #[test]
    fn decode_failures() {
        assert_eq!(decode_cp932(&[]), Err(CodecError::Incomplete));
        assert_eq!(decode_cp932(&[0x82]), Err(CodecError::Incomplete));
        assert_eq!(decode_cp932(&[0x82, 0x20]), Err(CodecError::Invalid));
        assert_eq!(decode_cp932(&[0x85, 0x40]), Err(CodecError::Unmapped));
    }

    #[test]
    fn encode_lengths() {
        assert_eq!(encode_cp932(u32::from('A')).unwrap().as_slice(), b"A");
        assert_eq!(encode_cp932(0xFF61).unwrap().as_slice(), &[0xA1]);
        assert_eq!(encode_cp932(0x3042).unwrap().as_slice(), &[0x82, 0xA0]);
    }

    #[test]
    fn every_encodable_scalar_round_trips() {
        for (&key, &code) in CP932_ENCODE_KEYS.iter().zip(CP932_ENCODE_VALUES) {
            assert_eq!(cp932_to_unicode(code), Some(u32::from(key)), "code {code:#06X}");
        }
    }

    #[test]
    fn encode_keys_are_sorted() {
        assert_eq!(CP932_ENCODE_KEYS.len(), CP932_ENCODE_VALUES.len());
        assert!(CP932_ENCODE_KEYS.windows(2).all(|w| w[0] < w[1]));
    }
}
