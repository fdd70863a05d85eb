//! Classification corpus for characters a terminal meets in practice.
//!
//! Each case names a character and the answers the renderer depends on.
//! Where the `unicode-width` crate has an opinion on a non-ambiguous,
//! non-emoji character, `cell_width` must agree with it, and every
//! composition pair must match `unicode-normalization`'s NFC.

use frankenterm_unicode::{
    CombiningClass, WidthClass, WidthPolicy, block_of, cell_width, combining_class, compose_chars,
    data, is_emoji, is_virama, width_class,
};
use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthChar;

// =============================================================================
// Test Corpus Data Structures
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct ClassCase {
    ch: char,
    description: &'static str,
    width: WidthClass,
    combining: CombiningClass,
    block: &'static str,
}

impl ClassCase {
    const fn new(
        ch: char,
        description: &'static str,
        width: WidthClass,
        combining: CombiningClass,
        block: &'static str,
    ) -> Self {
        Self {
            ch,
            description,
            width,
            combining,
            block,
        }
    }
}

use CombiningClass::{Nonspacing, Spacing};
use WidthClass::{Ambiguous, Fullwidth, Halfwidth, Narrow, Neutral, Wide};

const CORPUS: &[ClassCase] = &[
    ClassCase::new('A', "latin capital A", Narrow, CombiningClass::None, "Basic Latin"),
    ClassCase::new('~', "tilde", Narrow, CombiningClass::None, "Basic Latin"),
    ClassCase::new('\u{00E9}', "e acute", Ambiguous, CombiningClass::None, "Latin-1 Supplement"),
    ClassCase::new('\u{0301}', "combining acute", Ambiguous, Nonspacing, "Combining Diacritical Marks"),
    ClassCase::new('\u{0416}', "cyrillic zhe", Ambiguous, CombiningClass::None, "Cyrillic"),
    ClassCase::new('\u{05D0}', "hebrew alef", Neutral, CombiningClass::None, "Hebrew"),
    ClassCase::new('\u{0915}', "devanagari ka", Neutral, CombiningClass::None, "Devanagari"),
    ClassCase::new('\u{093E}', "devanagari vowel sign aa", Neutral, Spacing, "Devanagari"),
    ClassCase::new('\u{1100}', "hangul choseong kiyeok", Wide, CombiningClass::None, "Hangul Jamo"),
    ClassCase::new('\u{2500}', "box drawings light horizontal", Ambiguous, CombiningClass::None, "Box Drawing"),
    ClassCase::new('\u{3042}', "hiragana a", Wide, CombiningClass::None, "Hiragana"),
    ClassCase::new('\u{3099}', "combining voiced sound mark", Wide, Nonspacing, "Hiragana"),
    ClassCase::new('\u{30A2}', "katakana a", Wide, CombiningClass::None, "Katakana"),
    ClassCase::new('\u{4E2D}', "cjk middle", Wide, CombiningClass::None, "CJK Unified Ideographs"),
    ClassCase::new('\u{AC00}', "hangul syllable ga", Wide, CombiningClass::None, "Hangul Syllables"),
    ClassCase::new('\u{FE0F}', "variation selector 16", Ambiguous, Nonspacing, "Variation Selectors"),
    ClassCase::new('\u{FF21}', "fullwidth A", Fullwidth, CombiningClass::None, "Halfwidth and Fullwidth Forms"),
    ClassCase::new('\u{FF76}', "halfwidth katakana ka", Halfwidth, CombiningClass::None, "Halfwidth and Fullwidth Forms"),
    ClassCase::new('\u{1F600}', "grinning face", Wide, CombiningClass::None, "Emoticons"),
    ClassCase::new('\u{1F3FD}', "skin tone modifier", Wide, Nonspacing, "Miscellaneous Symbols and Pictographs"),
    ClassCase::new('\u{20000}', "cjk extension b", Wide, CombiningClass::None, "CJK Unified Ideographs Extension B"),
    ClassCase::new('\u{E0101}', "variation selector 18", Ambiguous, Nonspacing, "Variation Selectors Supplement"),
];

#[test]
fn corpus_width_classes() {
    for case in CORPUS {
        assert_eq!(
            width_class(case.ch as u32),
            case.width,
            "{} (U+{:04X})",
            case.description,
            case.ch as u32
        );
    }
}

#[test]
fn corpus_combining_classes() {
    for case in CORPUS {
        assert_eq!(
            combining_class(case.ch as u32),
            case.combining,
            "{} (U+{:04X})",
            case.description,
            case.ch as u32
        );
    }
}

#[test]
fn corpus_blocks() {
    for case in CORPUS {
        assert_eq!(
            block_of(case.ch as u32),
            Some(case.block),
            "{} (U+{:04X})",
            case.description,
            case.ch as u32
        );
    }
}

// =============================================================================
// Cross-check against unicode-width
// =============================================================================

#[test]
fn cell_width_agrees_with_unicode_width_for_unambiguous_text() {
    let policy = WidthPolicy::WESTERN;
    let sample = "Hello, world! \u{4F60}\u{597D} \u{65E5}\u{672C}\u{8A9E} \u{D55C}\u{AE00} \
                  \u{FF28}\u{FF45}\u{FF4C}\u{FF4C}\u{FF4F} \u{FF76}\u{FF85} e\u{0301}";
    for ch in sample.chars() {
        if width_class(ch as u32) == WidthClass::Ambiguous {
            continue;
        }
        assert_eq!(
            Some(cell_width(ch as u32, &policy)),
            ch.width(),
            "U+{:04X}",
            ch as u32
        );
    }
}

#[test]
fn cjk_policy_agrees_with_unicode_width_cjk_for_ambiguous() {
    for ch in ['\u{00A7}', '\u{2460}', '\u{25CB}'] {
        assert_eq!(width_class(ch as u32), WidthClass::Ambiguous);
        assert_eq!(Some(cell_width(ch as u32, &WidthPolicy::CJK)), ch.width_cjk());
        assert_eq!(Some(cell_width(ch as u32, &WidthPolicy::WESTERN)), ch.width());
    }
}

#[test]
fn greek_and_cyrillic_are_ambiguous_width() {
    // unicode-width keeps these narrow even in CJK mode; East Asian Width says A.
    for cp in [0x03B1, 0x0416] {
        assert_eq!(width_class(cp), WidthClass::Ambiguous, "U+{cp:04X}");
        assert_eq!(cell_width(cp, &WidthPolicy::CJK), 2, "U+{cp:04X}");
        assert_eq!(cell_width(cp, &WidthPolicy::WESTERN), 1, "U+{cp:04X}");
    }
}

// =============================================================================
// Emoji, virama, and composition samples
// =============================================================================

#[test]
fn emoji_samples() {
    for ch in ['\u{1F600}', '\u{1F680}', '\u{231B}', '\u{2705}', '\u{1F1EF}'] {
        assert!(is_emoji(ch as u32), "U+{:04X}", ch as u32);
    }
    for ch in ['#', '\u{00AE}', '\u{263A}', '\u{3042}'] {
        assert!(!is_emoji(ch as u32), "U+{:04X}", ch as u32);
    }
}

#[test]
fn virama_samples() {
    for ch in ['\u{094D}', '\u{09CD}', '\u{0A4D}', '\u{0D4D}', '\u{1039}'] {
        assert!(is_virama(ch as u32), "U+{:04X}", ch as u32);
    }
}

#[test]
fn composition_samples() {
    let cases = [
        ('\u{307B}', '\u{309A}', '\u{307D}'),
        ('\u{304B}', '\u{3099}', '\u{304C}'),
        ('\u{30CF}', '\u{309A}', '\u{30D1}'),
        ('a', '\u{0308}', '\u{00E4}'),
        ('O', '\u{0303}', '\u{00D5}'),
        ('\u{00C5}', '\u{0301}', '\u{01FA}'),
    ];
    for (base, mark, expected) in cases {
        assert_eq!(compose_chars(base, mark), Some(expected));
    }
    assert_eq!(compose_chars('A', 'B'), None);
}

#[test]
fn every_pair_agrees_with_nfc() {
    for &(base, mark, precomposed) in data::COMPOSITION_PAIRS {
        let pair: String = [base, mark]
            .iter()
            .filter_map(|&unit| char::from_u32(u32::from(unit)))
            .collect();
        let nfc: Vec<u32> = pair.nfc().map(u32::from).collect();
        assert_eq!(nfc, [u32::from(precomposed)], "U+{base:04X} U+{mark:04X}");
    }
}
