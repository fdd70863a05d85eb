//! Single-character UTF-8 codec.

use smallvec::SmallVec;

use crate::error::CodecError;

/// Encoded form of one scalar; never spills to the heap.
pub type Utf8Bytes = SmallVec<[u8; 4]>;

/// Length of the sequence introduced by `lead`, or `None` when `lead` can
/// never start a well-formed sequence (continuation bytes, C0, C1, F5..FF).
#[must_use]
pub const fn utf8_sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decode the first scalar of `input`.
///
/// Returns the character and the number of bytes it used. Overlong forms,
/// encoded surrogates, and values above U+10FFFF are [`CodecError::Invalid`].
/// A valid prefix cut short by the end of `input` is
/// [`CodecError::Incomplete`]; the caller decides whether to wait for more
/// bytes.
pub fn decode_utf8(input: &[u8]) -> Result<(char, usize), CodecError> {
    let Some(&lead) = input.first() else {
        return Err(CodecError::Incomplete);
    };
    if lead < 0x80 {
        return Ok((char::from(lead), 1));
    }

    let len = utf8_sequence_len(lead).ok_or(CodecError::Invalid)?;
    let window = &input[..input.len().min(len)];
    match std::str::from_utf8(window) {
        Ok(text) => text.chars().next().map(|ch| (ch, len)).ok_or(CodecError::Invalid),
        Err(err) => Err(match err.error_len() {
            None => CodecError::Incomplete,
            Some(_) => CodecError::Invalid,
        }),
    }
}

/// Bytes to skip after a failure at the start of `input`: the maximal
/// ill-formed subpart, or the whole of an incomplete tail. Never zero.
#[must_use]
pub fn utf8_resync_len(input: &[u8]) -> usize {
    let window = &input[..input.len().min(4)];
    match std::str::from_utf8(window) {
        Err(err) if err.valid_up_to() == 0 => err.error_len().unwrap_or(input.len()).max(1),
        _ => 1,
    }
}

/// Encode `scalar` as UTF-8.
pub fn encode_utf8(scalar: u32) -> Result<Utf8Bytes, CodecError> {
    let ch = char::from_u32(scalar).ok_or(CodecError::InvalidScalar(scalar))?;
    let mut buf = [0u8; 4];
    Ok(SmallVec::from_slice(ch.encode_utf8(&mut buf).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_sequence_length() {
        assert_eq!(decode_utf8(b"A"), Ok(('A', 1)));
        assert_eq!(decode_utf8("é".as_bytes()), Ok(('é', 2)));
        assert_eq!(decode_utf8("中".as_bytes()), Ok(('中', 3)));
        assert_eq!(decode_utf8("😀".as_bytes()), Ok(('😀', 4)));
    }

    #[test]
    fn decodes_only_the_first_scalar() {
        assert_eq!(decode_utf8("中文".as_bytes()), Ok(('中', 3)));
        assert_eq!(decode_utf8(b"ab"), Ok(('a', 1)));
    }

    #[test]
    fn truncated_sequences_are_incomplete() {
        assert_eq!(decode_utf8(b""), Err(CodecError::Incomplete));
        assert_eq!(decode_utf8(&[0xE4, 0xB8]), Err(CodecError::Incomplete));
        assert_eq!(decode_utf8(&[0xF0, 0x9F, 0x98]), Err(CodecError::Incomplete));
        assert_eq!(decode_utf8(&[0xC3]), Err(CodecError::Incomplete));
    }

    #[test]
    fn malformed_sequences_are_invalid() {
        // lone continuation byte
        assert_eq!(decode_utf8(&[0x80]), Err(CodecError::Invalid));
        // overlong '/'
        assert_eq!(decode_utf8(&[0xC0, 0xAF]), Err(CodecError::Invalid));
        // encoded surrogate U+D800
        assert_eq!(decode_utf8(&[0xED, 0xA0, 0x80]), Err(CodecError::Invalid));
        // above U+10FFFF
        assert_eq!(decode_utf8(&[0xF4, 0x90, 0x80, 0x80]), Err(CodecError::Invalid));
        // lead byte followed by ASCII
        assert_eq!(decode_utf8(&[0xE4, b'A', b'B']), Err(CodecError::Invalid));
        assert_eq!(decode_utf8(&[0xFF]), Err(CodecError::Invalid));
    }

    #[test]
    fn truncated_but_already_broken_is_invalid() {
        // E0 requires A0..BF next; 0x80 can never be completed.
        assert_eq!(decode_utf8(&[0xE0, 0x80]), Err(CodecError::Invalid));
    }

    #[test]
    fn encodes_scalars() {
        assert_eq!(encode_utf8(0x41).unwrap().as_slice(), b"A");
        assert_eq!(encode_utf8(0x4E2D).unwrap().as_slice(), "中".as_bytes());
        assert_eq!(encode_utf8(0x10FFFF).unwrap().as_slice(), &[0xF4, 0x8F, 0xBF, 0xBF]);
    }

    #[test]
    fn rejects_invalid_scalars() {
        assert_eq!(encode_utf8(0x110000), Err(CodecError::InvalidScalar(0x110000)));
        assert_eq!(encode_utf8(0xDC00), Err(CodecError::InvalidScalar(0xDC00)));
    }

    #[test]
    fn resync_skips_the_maximal_subpart() {
        assert_eq!(utf8_resync_len(&[0xE4, 0xB8, b'A']), 2);
        assert_eq!(utf8_resync_len(&[0xF0, 0x9F, 0x98]), 3);
        assert_eq!(utf8_resync_len(&[0xE0, 0x80, 0x80]), 1);
        assert_eq!(utf8_resync_len(&[0xED, 0xA0, 0x80]), 1);
        assert_eq!(utf8_resync_len(&[0xFF, b'A']), 1);
        assert_eq!(utf8_resync_len(&[0xC3]), 1);
        assert_eq!(utf8_resync_len(&[]), 1);
    }

    #[test]
    fn sequence_len_by_lead_byte() {
        assert_eq!(utf8_sequence_len(b'a'), Some(1));
        assert_eq!(utf8_sequence_len(0xC2), Some(2));
        assert_eq!(utf8_sequence_len(0xED), Some(3));
        assert_eq!(utf8_sequence_len(0xF4), Some(4));
        assert_eq!(utf8_sequence_len(0xC1), None);
        assert_eq!(utf8_sequence_len(0xBF), None);
        assert_eq!(utf8_sequence_len(0xF5), None);
    }
}
