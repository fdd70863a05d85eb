//! Single-character UTF-16 codec and surrogate predicates.

use smallvec::SmallVec;

use crate::error::CodecError;

/// Encoded form of one scalar: one unit, or a surrogate pair.
pub type Utf16Units = SmallVec<[u16; 2]>;

const HIGH_SURROGATE_START: u16 = 0xD800;
const LOW_SURROGATE_START: u16 = 0xDC00;

/// `0xD800..=0xDBFF`: the first half of a surrogate pair.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// `0xDC00..=0xDFFF`: the second half of a surrogate pair.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Decode the first scalar of `units`.
///
/// A high surrogate at the end of `units` is [`CodecError::Incomplete`]. A
/// lone low surrogate, or a high surrogate followed by anything other than a
/// low surrogate, is [`CodecError::Invalid`]. Carrying a pending high half
/// across buffers is up to the caller.
pub fn decode_utf16(units: &[u16]) -> Result<(char, usize), CodecError> {
    let Some(&first) = units.first() else {
        return Err(CodecError::Incomplete);
    };
    if is_low_surrogate(first) {
        return Err(CodecError::Invalid);
    }
    if !is_high_surrogate(first) {
        return char::from_u32(u32::from(first))
            .map(|ch| (ch, 1))
            .ok_or(CodecError::Invalid);
    }

    let Some(&second) = units.get(1) else {
        return Err(CodecError::Incomplete);
    };
    if !is_low_surrogate(second) {
        return Err(CodecError::Invalid);
    }
    let high = u32::from(first - HIGH_SURROGATE_START);
    let low = u32::from(second - LOW_SURROGATE_START);
    char::from_u32(0x1_0000 + ((high << 10) | low))
        .map(|ch| (ch, 2))
        .ok_or(CodecError::Invalid)
}

/// Encode `scalar` as UTF-16. Scalars above U+FFFF become a surrogate pair.
pub fn encode_utf16(scalar: u32) -> Result<Utf16Units, CodecError> {
    let ch = char::from_u32(scalar).ok_or(CodecError::InvalidScalar(scalar))?;
    let mut units = Utf16Units::new();
    match u16::try_from(u32::from(ch)) {
        Ok(unit) => units.push(unit),
        Err(_) => {
            let offset = scalar - 0x1_0000;
            // offset < 0x10_0000, so both halves fit in ten bits.
            units.push(HIGH_SURROGATE_START | (offset >> 10) as u16);
            units.push(LOW_SURROGATE_START | (offset & 0x3FF) as u16);
        }
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogate_boundaries() {
        assert!(!is_high_surrogate(0xD7FF));
        assert!(is_high_surrogate(0xD800));
        assert!(is_high_surrogate(0xDBFF));
        assert!(!is_high_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDFFF));
        assert!(!is_low_surrogate(0xDBFF));
        assert!(!is_low_surrogate(0xE000));
    }

    #[test]
    fn decodes_bmp_and_pairs() {
        assert_eq!(decode_utf16(&[0x0041]), Ok(('A', 1)));
        assert_eq!(decode_utf16(&[0x4E2D, 0x0041]), Ok(('中', 1)));
        assert_eq!(decode_utf16(&[0xD83D, 0xDE00]), Ok(('😀', 2)));
        assert_eq!(decode_utf16(&[0xDBFF, 0xDFFF]), Ok(('\u{10FFFF}', 2)));
        assert_eq!(decode_utf16(&[0xFFFF]), Ok(('\u{FFFF}', 1)));
    }

    #[test]
    fn unpaired_surrogates_fail() {
        assert_eq!(decode_utf16(&[]), Err(CodecError::Incomplete));
        assert_eq!(decode_utf16(&[0xD83D]), Err(CodecError::Incomplete));
        assert_eq!(decode_utf16(&[0xDE00]), Err(CodecError::Invalid));
        assert_eq!(decode_utf16(&[0xD83D, 0x0041]), Err(CodecError::Invalid));
        assert_eq!(decode_utf16(&[0xD83D, 0xD83D]), Err(CodecError::Invalid));
    }

    #[test]
    fn encodes_bmp_and_supplementary() {
        assert_eq!(encode_utf16(0x41).unwrap().as_slice(), &[0x0041]);
        assert_eq!(encode_utf16(0xFFFD).unwrap().as_slice(), &[0xFFFD]);
        assert_eq!(encode_utf16(0x1F600).unwrap().as_slice(), &[0xD83D, 0xDE00]);
        assert_eq!(encode_utf16(0x10000).unwrap().as_slice(), &[0xD800, 0xDC00]);
    }

    #[test]
    fn rejects_invalid_scalars() {
        assert_eq!(encode_utf16(0xD800), Err(CodecError::InvalidScalar(0xD800)));
        assert_eq!(encode_utf16(0x110000), Err(CodecError::InvalidScalar(0x110000)));
    }
}
