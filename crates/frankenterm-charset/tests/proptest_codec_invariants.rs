//! Property-based invariant tests for the codecs and bulk conversions.
//!
//! 1. UTF-8 and UTF-16 round-trip every valid scalar; invalid scalars fail.
//! 2. Single-character decoders agree with the standard library.
//! 3. ISO-8859 and CP932 decode/encode are mutual inverses where defined.
//! 4. Strict and lenient bulk conversion agree on valid input; lenient never fails
//!    and replaces broken UTF-8 the way the standard library does.
//! 5. Strict failures point at the first undecodable unit.

use frankenterm_charset::{
    CharCodec, Charset, CodecError, ConvertOptions, Iso8859Part, cp932_to_unicode, decode,
    decode_byte, decode_utf8, decode_utf16, encode, encode_byte, encode_utf8, encode_utf16,
    is_high_surrogate, is_low_surrogate, iso8859::SUPPORTED_PARTS, multibyte_to_utf16,
    unicode_to_cp932, utf8_to_utf16, utf8_to_utf32, utf16_to_multibyte, utf16_to_utf8,
    utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};
use proptest::prelude::*;

const STRICT: ConvertOptions = ConvertOptions::STRICT;
const LENIENT: ConvertOptions = ConvertOptions::LENIENT;

// ── Helpers ─────────────────────────────────────────────────────────────

fn scalar() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => any::<char>(),
        1 => (0u32..0x80).prop_map(|cp| char::from_u32(cp).unwrap_or('a')),
        1 => (0x3000u32..0xA000).prop_filter_map("scalar", char::from_u32),
    ]
}

fn charset() -> impl Strategy<Value = Charset> {
    prop_oneof![
        Just(Charset::Utf8),
        Just(Charset::Cp932),
        Just(Charset::DecSpecial),
        prop::sample::select(SUPPORTED_PARTS.to_vec())
            .prop_map(|part| Charset::Iso8859(Iso8859Part::new(part).unwrap())),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Unicode round-trips
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn every_scalar_round_trips_through_utf8_and_utf16() {
    for ch in (0u32..=0x10_FFFF).filter_map(char::from_u32) {
        let scalar = u32::from(ch);
        let bytes = encode_utf8(scalar).unwrap();
        assert_eq!(decode_utf8(&bytes), Ok((ch, bytes.len())), "U+{scalar:04X}");
        let units = encode_utf16(scalar).unwrap();
        assert_eq!(decode_utf16(&units), Ok((ch, units.len())), "U+{scalar:04X}");
    }
}

#[test]
fn surrogates_and_out_of_range_scalars_fail_to_encode() {
    for scalar in (0xD800u32..=0xDFFF).chain([0x11_0000, u32::MAX]) {
        assert_eq!(encode_utf8(scalar), Err(CodecError::InvalidScalar(scalar)));
        assert_eq!(encode_utf16(scalar), Err(CodecError::InvalidScalar(scalar)));
    }
}

#[test]
fn surrogate_predicates_partition_the_block() {
    for unit in 0..=u16::MAX {
        let in_block = (0xD800..=0xDFFF).contains(&unit);
        assert_eq!(is_high_surrogate(unit) || is_low_surrogate(unit), in_block);
        assert!(!(is_high_surrogate(unit) && is_low_surrogate(unit)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Agreement with the standard library
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn utf8_decoder_matches_std(bytes in prop::collection::vec(any::<u8>(), 0..8)) {
        let expected = match std::str::from_utf8(&bytes) {
            Ok(text) => text.chars().next(),
            Err(err) if err.valid_up_to() > 0 => std::str::from_utf8(&bytes[..err.valid_up_to()])
                .ok()
                .and_then(|text| text.chars().next()),
            Err(_) => None,
        };
        let decoded = decode_utf8(&bytes).ok().map(|(ch, _)| ch);
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn utf16_decoder_matches_std(units in prop::collection::vec(any::<u16>(), 0..4)) {
        let expected = char::decode_utf16(units.iter().copied())
            .next()
            .and_then(Result::ok);
        let decoded = decode_utf16(&units).ok().map(|(ch, _)| ch);
        prop_assert_eq!(decoded, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Legacy codecs are inverses where defined
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn iso8859_decode_then_encode(part in prop::sample::select(SUPPORTED_PARTS.to_vec()), byte in any::<u8>()) {
        if let Some(scalar) = decode_byte(part, byte) {
            prop_assert_eq!(encode_byte(part, u32::from(scalar)), Some(byte));
        }
    }

    #[test]
    fn iso8859_encode_then_decode(part in prop::sample::select(SUPPORTED_PARTS.to_vec()), ch in scalar()) {
        if let Some(byte) = encode_byte(part, u32::from(ch)) {
            prop_assert_eq!(decode_byte(part, byte).map(u32::from), Some(u32::from(ch)));
        }
    }

    #[test]
    fn cp932_encode_then_decode(ch in scalar()) {
        if let Some(code) = unicode_to_cp932(u32::from(ch)) {
            prop_assert_eq!(cp932_to_unicode(code), Some(u32::from(ch)));
        }
    }

    #[test]
    fn encode_char_is_all_or_nothing(charset in charset(), ch in scalar()) {
        let mut out = vec![0xAA];
        match charset.encode_char(ch, &mut out) {
            Ok(()) => {
                prop_assert!(out.len() > 1);
                prop_assert_eq!(charset.decode_char(&out[1..]), Ok((ch, out.len() - 1)));
            }
            Err(_) => prop_assert_eq!(out, vec![0xAA]),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Strict and lenient agree on valid input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn valid_text_converts_identically_in_both_modes(text in "\\PC{0,32}") {
        let units: Vec<u16> = text.encode_utf16().collect();
        let scalars: Vec<u32> = text.chars().map(u32::from).collect();

        prop_assert_eq!(utf8_to_utf16(text.as_bytes(), &STRICT).unwrap(), units.clone());
        prop_assert_eq!(utf8_to_utf16(text.as_bytes(), &LENIENT).unwrap(), units.clone());
        prop_assert_eq!(utf16_to_utf8(&units, &STRICT).unwrap(), text.clone());
        prop_assert_eq!(utf16_to_utf32(&units, &STRICT).unwrap(), scalars.clone());
        prop_assert_eq!(utf32_to_utf16(&scalars, &STRICT).unwrap(), units.clone());
        prop_assert_eq!(utf8_to_utf32(text.as_bytes(), &LENIENT).unwrap(), scalars.clone());
        prop_assert_eq!(utf32_to_utf8(&scalars, &LENIENT).unwrap(), text.clone());
        prop_assert_eq!(decode(Charset::Utf8, text.as_bytes(), &STRICT).unwrap(), text.clone());
        prop_assert_eq!(encode(Charset::Utf8, &text, &STRICT).unwrap(), text.as_bytes().to_vec());
    }

    #[test]
    fn lenient_never_fails(charset in charset(), bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let text = decode(charset, &bytes, &LENIENT).unwrap();
        prop_assert!(text.chars().count() <= bytes.len());
        prop_assert!(encode(charset, &text, &LENIENT).is_ok());
        prop_assert!(multibyte_to_utf16(charset, &bytes, &LENIENT).is_ok());
    }

    #[test]
    fn lenient_utf8_matches_std_lossy(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let expected = String::from_utf8_lossy(&bytes).into_owned();
        prop_assert_eq!(decode(Charset::Utf8, &bytes, &LENIENT).unwrap(), expected.clone());
        let scalars: Vec<u32> = expected.chars().map(u32::from).collect();
        prop_assert_eq!(utf8_to_utf32(&bytes, &LENIENT).unwrap(), scalars);
    }

    #[test]
    fn lenient_utf16_never_fails(charset in charset(), units in prop::collection::vec(any::<u16>(), 0..32)) {
        prop_assert!(utf16_to_utf8(&units, &LENIENT).is_ok());
        prop_assert!(utf16_to_multibyte(charset, &units, &LENIENT).is_ok());
    }

    #[test]
    fn strict_success_matches_lenient(charset in charset(), bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Ok(text) = decode(charset, &bytes, &STRICT) {
            prop_assert_eq!(decode(charset, &bytes, &LENIENT).unwrap(), text);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Strict failures point at the first bad unit
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn strict_failure_position_is_a_clean_prefix(charset in charset(), bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        if let Err(err) = decode(charset, &bytes, &STRICT) {
            prop_assert!(err.position < bytes.len());
            prop_assert!(decode(charset, &bytes[..err.position], &STRICT).is_ok());
            prop_assert!(charset.decode_char(&bytes[err.position..]).is_err());
        }
    }
}
