//! Bulk conversions between UTF-8, UTF-16, UTF-32, and the legacy charsets.
//!
//! Each function is a loop over the single-character codecs. Failures are
//! handled according to [`ConvertOptions::mode`]:
//!
//! - [`ErrorMode::Strict`]: return the first failure with its position in
//!   input units (bytes, `u16` units, or `u32` units).
//! - [`ErrorMode::Lenient`]: substitute [`ConvertOptions::replacement`] (or
//!   [`ConvertOptions::replacement_byte`] when a legacy target cannot hold
//!   it), skip the offending input, and continue.
//!
//! None of these functions keep state between calls. Input that ends in the
//! middle of a sequence is a failure like any other; streaming callers
//! should hold back an incomplete tail themselves.

use crate::codec::{CharCodec, Charset};
use crate::error::{CodecError, ConvertError};
use crate::options::{ConvertOptions, ErrorMode};
use crate::utf8::{decode_utf8, utf8_resync_len};
use crate::utf16::decode_utf16;

/// Decode the first UTF-32 unit.
fn decode_utf32(units: &[u32]) -> Result<(char, usize), CodecError> {
    let &unit = units.first().ok_or(CodecError::Incomplete)?;
    char::from_u32(unit)
        .map(|ch| (ch, 1))
        .ok_or(CodecError::InvalidScalar(unit))
}

/// Strict mode turns a failure into an error; lenient mode lets the caller
/// substitute.
fn on_failure(
    options: &ConvertOptions,
    position: usize,
    kind: CodecError,
) -> Result<(), ConvertError> {
    match options.mode {
        ErrorMode::Strict => {
            crate::debug!(position, error = %kind, "conversion failed");
            Err(ConvertError::new(position, kind))
        }
        ErrorMode::Lenient => {
            crate::trace!(position, error = %kind, "substituting replacement");
            Ok(())
        }
    }
}

/// Walk `input` with `decode`, handing every character to `emit`.
fn decode_units<T, D, R, E>(
    input: &[T],
    options: &ConvertOptions,
    decode: D,
    resync: R,
    mut emit: E,
) -> Result<(), ConvertError>
where
    D: Fn(&[T]) -> Result<(char, usize), CodecError>,
    R: Fn(&[T], CodecError) -> usize,
    E: FnMut(char),
{
    let mut position = 0;
    while position < input.len() {
        let rest = &input[position..];
        match decode(rest) {
            Ok((ch, used)) => {
                emit(ch);
                position += used;
            }
            Err(kind) => {
                on_failure(options, position, kind)?;
                emit(options.replacement);
                position += resync(rest, kind).max(1);
            }
        }
    }
    Ok(())
}

/// Skip one unit after a failure, or the whole tail when it is incomplete.
fn skip_unit<T>(rest: &[T], kind: CodecError) -> usize {
    match kind {
        CodecError::Incomplete => rest.len(),
        _ => 1,
    }
}

/// Skip the maximal ill-formed subpart, so each one gets one replacement.
fn skip_utf8(rest: &[u8], _kind: CodecError) -> usize {
    utf8_resync_len(rest)
}

/// Encode `ch` into `codec`, substituting per `options` when it cannot.
fn encode_into<C>(
    codec: &C,
    ch: char,
    position: usize,
    options: &ConvertOptions,
    out: &mut Vec<u8>,
) -> Result<(), ConvertError>
where
    C: CharCodec + ?Sized,
{
    let Err(kind) = codec.encode_char(ch, out) else {
        return Ok(());
    };
    on_failure(options, position, kind)?;
    push_replacement(codec, options, out);
    Ok(())
}

fn push_replacement<C>(codec: &C, options: &ConvertOptions, out: &mut Vec<u8>)
where
    C: CharCodec + ?Sized,
{
    if codec.encode_char(options.replacement, out).is_err() {
        out.push(options.replacement_byte);
    }
}

/// Decode `input` from `charset` into a `String`.
pub fn decode(
    charset: Charset,
    input: &[u8],
    options: &ConvertOptions,
) -> Result<String, ConvertError> {
    decode_with(&charset, input, options)
}

/// [`decode`] over any [`CharCodec`].
pub fn decode_with<C>(
    codec: &C,
    input: &[u8],
    options: &ConvertOptions,
) -> Result<String, ConvertError>
where
    C: CharCodec + ?Sized,
{
    let span = crate::debug_span!("decode", len = input.len(), mode = options.mode.as_str());
    let _guard = span.enter();
    let mut out = String::with_capacity(input.len());
    decode_units(
        input,
        options,
        |rest| codec.decode_char(rest),
        |rest, kind| codec.resync_len(rest, kind),
        |ch| out.push(ch),
    )?;
    Ok(out)
}

/// Encode `text` into `charset`. Error positions are byte offsets into `text`.
pub fn encode(
    charset: Charset,
    text: &str,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError> {
    encode_with(&charset, text, options)
}

/// [`encode`] over any [`CharCodec`].
pub fn encode_with<C>(
    codec: &C,
    text: &str,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError>
where
    C: CharCodec + ?Sized,
{
    let span = crate::debug_span!("encode", len = text.len(), mode = options.mode.as_str());
    let _guard = span.enter();
    let mut out = Vec::with_capacity(text.len());
    for (position, ch) in text.char_indices() {
        encode_into(codec, ch, position, options, &mut out)?;
    }
    Ok(out)
}

/// UTF-8 bytes to UTF-16 units.
pub fn utf8_to_utf16(input: &[u8], options: &ConvertOptions) -> Result<Vec<u16>, ConvertError> {
    let mut out = Vec::with_capacity(input.len());
    decode_units(input, options, decode_utf8, skip_utf8, |ch| {
        let mut buf = [0u16; 2];
        out.extend_from_slice(ch.encode_utf16(&mut buf));
    })?;
    Ok(out)
}

/// UTF-16 units to a `String`.
pub fn utf16_to_utf8(input: &[u16], options: &ConvertOptions) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(input.len());
    decode_units(input, options, decode_utf16, skip_unit, |ch| out.push(ch))?;
    Ok(out)
}

/// UTF-16 units to scalars.
pub fn utf16_to_utf32(input: &[u16], options: &ConvertOptions) -> Result<Vec<u32>, ConvertError> {
    let mut out = Vec::with_capacity(input.len());
    decode_units(input, options, decode_utf16, skip_unit, |ch| out.push(u32::from(ch)))?;
    Ok(out)
}

/// Scalars to UTF-16 units. Surrogates and values above U+10FFFF fail with
/// [`CodecError::InvalidScalar`].
pub fn utf32_to_utf16(input: &[u32], options: &ConvertOptions) -> Result<Vec<u16>, ConvertError> {
    let mut out = Vec::with_capacity(input.len());
    decode_units(input, options, decode_utf32, skip_unit, |ch| {
        let mut buf = [0u16; 2];
        out.extend_from_slice(ch.encode_utf16(&mut buf));
    })?;
    Ok(out)
}

/// UTF-8 bytes to scalars.
pub fn utf8_to_utf32(input: &[u8], options: &ConvertOptions) -> Result<Vec<u32>, ConvertError> {
    let mut out = Vec::with_capacity(input.len());
    decode_units(input, options, decode_utf8, skip_utf8, |ch| out.push(u32::from(ch)))?;
    Ok(out)
}

/// Scalars to a `String`.
pub fn utf32_to_utf8(input: &[u32], options: &ConvertOptions) -> Result<String, ConvertError> {
    let mut out = String::with_capacity(input.len());
    decode_units(input, options, decode_utf32, skip_unit, |ch| out.push(ch))?;
    Ok(out)
}

/// Bytes in `charset` to UTF-16 units.
pub fn multibyte_to_utf16(
    charset: Charset,
    input: &[u8],
    options: &ConvertOptions,
) -> Result<Vec<u16>, ConvertError> {
    let span = crate::debug_span!("multibyte_to_utf16", %charset, len = input.len());
    let _guard = span.enter();
    let mut out = Vec::with_capacity(input.len());
    decode_units(
        input,
        options,
        |rest| charset.decode_char(rest),
        |rest, kind| charset.resync_len(rest, kind),
        |ch| {
            let mut buf = [0u16; 2];
            out.extend_from_slice(ch.encode_utf16(&mut buf));
        },
    )?;
    Ok(out)
}

/// UTF-16 units to bytes in `charset`. Error positions are `u16` offsets,
/// for both malformed UTF-16 and characters `charset` cannot hold.
pub fn utf16_to_multibyte(
    charset: Charset,
    input: &[u16],
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConvertError> {
    let span = crate::debug_span!("utf16_to_multibyte", %charset, len = input.len());
    let _guard = span.enter();
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut position = 0;
    while position < input.len() {
        let rest = &input[position..];
        match decode_utf16(rest) {
            Ok((ch, used)) => {
                encode_into(&charset, ch, position, options, &mut out)?;
                position += used;
            }
            Err(kind) => {
                on_failure(options, position, kind)?;
                push_replacement(&charset, options, &mut out);
                position += skip_unit(rest, kind);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iso8859::Iso8859Part;

    const LENIENT: ConvertOptions = ConvertOptions::LENIENT;
    const STRICT: ConvertOptions = ConvertOptions::STRICT;

    fn latin(part: u8) -> Charset {
        Charset::Iso8859(Iso8859Part::new(part).unwrap())
    }

    #[test]
    fn utf8_utf16_round_trip() {
        let text = "a\u{e9}\u{4e2d}\u{1F600}";
        let units = utf8_to_utf16(text.as_bytes(), &STRICT).unwrap();
        assert_eq!(units, text.encode_utf16().collect::<Vec<_>>());
        assert_eq!(utf16_to_utf8(&units, &STRICT).unwrap(), text);
    }

    #[test]
    fn utf32_conversions() {
        let scalars = utf8_to_utf32("x\u{1F600}".as_bytes(), &STRICT).unwrap();
        assert_eq!(scalars, [0x78, 0x1F600]);
        let units = utf32_to_utf16(&scalars, &STRICT).unwrap();
        assert_eq!(units, [0x78, 0xD83D, 0xDE00]);
        assert_eq!(utf16_to_utf32(&units, &STRICT).unwrap(), scalars);
        assert_eq!(utf32_to_utf8(&scalars, &STRICT).unwrap(), "x\u{1F600}");
    }

    #[test]
    fn strict_reports_first_failure_position() {
        let err = utf8_to_utf16(b"ab\xFFc\xFF", &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(2, CodecError::Invalid));

        let err = utf16_to_utf8(&[0x41, 0xDC00], &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(1, CodecError::Invalid));

        let err = utf16_to_utf8(&[0x41, 0x42, 0xD800], &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(2, CodecError::Incomplete));

        let err = utf32_to_utf8(&[0x41, 0x11_0000], &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(1, CodecError::InvalidScalar(0x11_0000)));
    }

    #[test]
    fn lenient_substitutes_and_continues() {
        assert_eq!(utf16_to_utf8(&[0x41, 0xDC00, 0x42], &LENIENT).unwrap(), "A\u{FFFD}B");
        assert_eq!(
            utf8_to_utf32(b"a\xE4\xB8", &LENIENT).unwrap(),
            [0x61, 0xFFFD]
        );
        assert_eq!(
            utf32_to_utf16(&[0xD800, 0x41], &LENIENT).unwrap(),
            [0xFFFD, 0x41]
        );
    }

    #[test]
    fn custom_replacement_character() {
        let options = LENIENT.with_replacement('?');
        assert_eq!(decode(Charset::Utf8, b"a\x80b", &options).unwrap(), "a?b");
    }

    #[test]
    fn decode_legacy_charsets() {
        assert_eq!(decode(latin(5), &[0xBF, 0xE0, 0xEF], &STRICT).unwrap(), "Пря");
        assert_eq!(
            decode(Charset::Cp932, &[0x93, 0xFA, 0x96, 0x7B, b'!'], &STRICT).unwrap(),
            "日本!"
        );
        assert_eq!(decode(Charset::DecSpecial, b"lqqk", &STRICT).unwrap(), "┌──┐");
    }

    #[test]
    fn cp932_unmapped_pair_is_one_replacement() {
        let bytes = [b'a', 0x85, 0x9F, b'b'];
        assert_eq!(
            decode(Charset::Cp932, &bytes, &STRICT).unwrap_err(),
            ConvertError::new(1, CodecError::Unmapped)
        );
        assert_eq!(decode(Charset::Cp932, &bytes, &LENIENT).unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn cp932_bad_trail_keeps_the_trail_byte() {
        assert_eq!(
            decode(Charset::Cp932, &[0x82, b'A'], &LENIENT).unwrap(),
            "\u{FFFD}A"
        );
    }

    #[test]
    fn cp932_unmapped_pair_with_ascii_trail_keeps_the_trail() {
        assert_eq!(
            decode(Charset::Cp932, &[0x85, 0x41, 0x42], &LENIENT).unwrap(),
            "\u{FFFD}AB"
        );
        assert_eq!(
            multibyte_to_utf16(Charset::Cp932, &[0x85, 0x40], &LENIENT).unwrap(),
            [0xFFFD, 0x40]
        );
    }

    #[test]
    fn lenient_utf8_replaces_each_broken_sequence_once() {
        assert_eq!(utf8_to_utf32(&[0xE4, 0xB8, 0x41], &LENIENT).unwrap(), [0xFFFD, 0x41]);
        assert_eq!(
            utf8_to_utf16(&[0xF0, 0x9F, 0x98, b'x', 0x80, 0x80], &LENIENT).unwrap(),
            [0xFFFD, 0x78, 0xFFFD, 0xFFFD]
        );
        let bytes = b"a\xED\xA0\x80b\xE0\x80c";
        assert_eq!(
            decode(Charset::Utf8, bytes, &LENIENT).unwrap(),
            String::from_utf8_lossy(bytes)
        );
    }

    #[test]
    fn encode_positions_are_byte_offsets() {
        let err = encode(latin(1), "ab\u{20AC}", &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(2, CodecError::Unmapped));
        let err = encode(Charset::Cp932, "\u{3042}\u{e9}", &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(3, CodecError::Unmapped));
    }

    #[test]
    fn encode_falls_back_to_replacement_byte() {
        assert_eq!(encode(latin(1), "a\u{20AC}b", &LENIENT).unwrap(), b"a?b");
        let options = LENIENT.with_replacement('\u{3013}');
        assert_eq!(
            encode(Charset::Cp932, "a\u{e9}", &options).unwrap(),
            [b'a', 0x81, 0xAC]
        );
    }

    #[test]
    fn utf16_to_legacy_and_back() {
        let units: Vec<u16> = "\u{65e5}\u{672c}".encode_utf16().collect();
        let bytes = utf16_to_multibyte(Charset::Cp932, &units, &STRICT).unwrap();
        assert_eq!(bytes, [0x93, 0xFA, 0x96, 0x7B]);
        assert_eq!(multibyte_to_utf16(Charset::Cp932, &bytes, &STRICT).unwrap(), units);
    }

    #[test]
    fn utf16_to_multibyte_positions_are_unit_offsets() {
        let units: Vec<u16> = "a\u{1F600}\u{20AC}".encode_utf16().collect();
        let err = utf16_to_multibyte(latin(1), &units, &STRICT).unwrap_err();
        assert_eq!(err, ConvertError::new(1, CodecError::Unmapped));
        assert_eq!(
            utf16_to_multibyte(latin(15), &units, &LENIENT).unwrap(),
            [b'a', b'?', 0xA4]
        );
        assert_eq!(
            utf16_to_multibyte(latin(1), &[0x41, 0xD800], &LENIENT).unwrap(),
            [b'A', b'?']
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode(Charset::Utf8, b"", &STRICT).unwrap(), "");
        assert!(utf16_to_utf8(&[], &STRICT).unwrap().is_empty());
        assert!(encode(Charset::Cp932, "", &STRICT).unwrap().is_empty());
    }
}
