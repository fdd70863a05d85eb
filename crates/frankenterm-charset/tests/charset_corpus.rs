//! Transcoding corpus: real words in every supported legacy charset.
//!
//! Each case names a charset label, a string, and its exact encoding. Both
//! directions must reproduce the pair under strict options, and the UTF-16
//! path must agree with the `&str` path.

use frankenterm_charset::{
    Charset, CodecError, ConvertError, ConvertOptions, decode, encode, multibyte_to_utf16,
    utf16_to_multibyte,
};

// =============================================================================
// Test Corpus Data Structures
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct CodecCase {
    charset: &'static str,
    description: &'static str,
    text: &'static str,
    bytes: &'static [u8],
}

impl CodecCase {
    const fn new(
        charset: &'static str,
        description: &'static str,
        text: &'static str,
        bytes: &'static [u8],
    ) -> Self {
        Self {
            charset,
            description,
            text,
            bytes,
        }
    }

    fn charset(&self) -> Charset {
        Charset::parse(self.charset)
            .unwrap_or_else(|| panic!("{}: unknown charset {}", self.description, self.charset))
    }
}

const CORPUS: &[CodecCase] = &[
    CodecCase::new("ISO-8859-1", "french", "café", &[0x63, 0x61, 0x66, 0xE9]),
    CodecCase::new("ISO-8859-2", "polish", "Łódź", &[0xA3, 0xF3, 0x64, 0xBC]),
    CodecCase::new("ISO-8859-3", "maltese", "Ħamrun", &[0xA1, 0x61, 0x6D, 0x72, 0x75, 0x6E]),
    CodecCase::new("ISO-8859-4", "latvian", "Ķeguma", &[0xD3, 0x65, 0x67, 0x75, 0x6D, 0x61]),
    CodecCase::new("ISO-8859-5", "russian", "Привет", &[0xBF, 0xE0, 0xD8, 0xD2, 0xD5, 0xE2]),
    CodecCase::new("ISO-8859-6", "arabic", "مرحبا", &[0xE5, 0xD1, 0xCD, 0xC8, 0xC7]),
    CodecCase::new(
        "ISO-8859-7",
        "greek",
        "Καλημέρα",
        &[0xCA, 0xE1, 0xEB, 0xE7, 0xEC, 0xDD, 0xF1, 0xE1],
    ),
    CodecCase::new("ISO-8859-8", "hebrew", "שלום", &[0xF9, 0xEC, 0xE5, 0xED]),
    CodecCase::new(
        "ISO-8859-9",
        "turkish dotted capital I",
        "İstanbul",
        &[0xDD, 0x73, 0x74, 0x61, 0x6E, 0x62, 0x75, 0x6C],
    ),
    CodecCase::new(
        "ISO-8859-10",
        "faroese",
        "Þórshöfn",
        &[0xDE, 0xF3, 0x72, 0x73, 0x68, 0xF6, 0x66, 0x6E],
    ),
    CodecCase::new("ISO-8859-11", "thai", "สวัสดี", &[0xCA, 0xC7, 0xD1, 0xCA, 0xB4, 0xD5]),
    CodecCase::new(
        "ISO-8859-13",
        "lithuanian",
        "Vilnius ąčę",
        &[0x56, 0x69, 0x6C, 0x6E, 0x69, 0x75, 0x73, 0x20, 0xE0, 0xE8, 0xE6],
    ),
    CodecCase::new("ISO-8859-14", "welsh", "Ŵ ẅ", &[0xD0, 0x20, 0xBE]),
    CodecCase::new("ISO-8859-15", "euro sign", "5 €", &[0x35, 0x20, 0xA4]),
    CodecCase::new(
        "ISO-8859-16",
        "romanian comma below",
        "Științe",
        &[0xAA, 0x74, 0x69, 0x69, 0x6E, 0xFE, 0x65],
    ),
    CodecCase::new(
        "CP932",
        "hiragana",
        "こんにちは",
        &[0x82, 0xB1, 0x82, 0xF1, 0x82, 0xC9, 0x82, 0xBF, 0x82, 0xCD],
    ),
    CodecCase::new("CP932", "halfwidth katakana", "ｶﾀｶﾅ", &[0xB6, 0xC0, 0xB6, 0xC5]),
    CodecCase::new(
        "CP932",
        "NEC special characters",
        "①Ⅱ㈱",
        &[0x87, 0x40, 0x87, 0x55, 0x87, 0x8A],
    ),
    CodecCase::new(
        "CP932",
        "kanji and katakana",
        "漢字テスト",
        &[0x8A, 0xBF, 0x8E, 0x9A, 0x83, 0x65, 0x83, 0x58, 0x83, 0x67],
    ),
    CodecCase::new("UTF-8", "mixed planes", "a\u{e9}\u{4e2d}\u{1F600}", &[
        0x61, 0xC3, 0xA9, 0xE4, 0xB8, 0xAD, 0xF0, 0x9F, 0x98, 0x80,
    ]),
    CodecCase::new("DEC-Special", "box top", "┌──┐", b"lqqk"),
    CodecCase::new("DEC-Special", "plain ascii", "OK 42", b"OK 42"),
];

// =============================================================================
// Corpus Tests
// =============================================================================

#[test]
fn corpus_decodes() {
    for case in CORPUS {
        let text = decode(case.charset(), case.bytes, &ConvertOptions::STRICT)
            .unwrap_or_else(|err| panic!("{}: {err}", case.description));
        assert_eq!(text, case.text, "{}", case.description);
    }
}

#[test]
fn corpus_encodes() {
    for case in CORPUS {
        let bytes = encode(case.charset(), case.text, &ConvertOptions::STRICT)
            .unwrap_or_else(|err| panic!("{}: {err}", case.description));
        assert_eq!(bytes, case.bytes, "{}", case.description);
    }
}

#[test]
fn corpus_utf16_path_agrees() {
    for case in CORPUS {
        let units: Vec<u16> = case.text.encode_utf16().collect();
        let charset = case.charset();
        assert_eq!(
            multibyte_to_utf16(charset, case.bytes, &ConvertOptions::STRICT).unwrap(),
            units,
            "{}",
            case.description
        );
        assert_eq!(
            utf16_to_multibyte(charset, &units, &ConvertOptions::STRICT).unwrap(),
            case.bytes,
            "{}",
            case.description
        );
    }
}

// =============================================================================
// Cross-charset expectations
// =============================================================================

#[test]
fn latin1_text_is_not_cp932_text() {
    let err = encode(Charset::Cp932, "café", &ConvertOptions::STRICT).unwrap_err();
    assert_eq!(err, ConvertError::new(3, CodecError::Unmapped));
}

#[test]
fn same_bytes_differ_across_iso_parts() {
    let byte = [0xA4];
    let decoded: Vec<String> = ["ISO-8859-1", "ISO-8859-7", "ISO-8859-15"]
        .iter()
        .filter_map(|label| Charset::parse(label))
        .map(|charset| decode(charset, &byte, &ConvertOptions::STRICT).unwrap())
        .collect();
    assert_eq!(decoded, ["\u{a4}", "\u{20ac}", "\u{20ac}"]);
}
