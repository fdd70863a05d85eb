//! Canonical pair composition.
//!
//! The pair table is grouped by base code point. [`compose`] binary-searches
//! for the first entry of the base's run, then scans the run linearly;
//! the first entry whose mark matches wins, in table order.

use crate::tables::COMPOSITION_PAIRS;

/// Precomposed equivalent of `base` followed by `next`, if one exists.
///
/// ```
/// use frankenterm_unicode::compose;
///
/// // HIRAGANA HO + COMBINING SEMI-VOICED SOUND MARK -> HIRAGANA PO
/// assert_eq!(compose(0x307B, 0x309A), Some(0x307D));
/// assert_eq!(compose(0x0041, 0x0042), None);
/// ```
#[must_use]
pub fn compose(base: u16, next: u16) -> Option<u16> {
    let start = COMPOSITION_PAIRS.partition_point(|&(first, _, _)| first < base);
    COMPOSITION_PAIRS[start..]
        .iter()
        .take_while(|&&(first, _, _)| first == base)
        .find(|&&(_, second, _)| second == next)
        .map(|&(_, _, precomposed)| precomposed)
}

/// [`compose`] over `char`s. Characters outside the BMP never compose.
#[must_use]
pub fn compose_chars(base: char, next: char) -> Option<char> {
    let base = u16::try_from(u32::from(base)).ok()?;
    let next = u16::try_from(u32::from(next)).ok()?;
    compose(base, next).and_then(|cp| char::from_u32(u32::from(cp)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kana_semi_voiced_mark() {
        assert_eq!(compose(0x307B, 0x309A), Some(0x307D));
        assert_eq!(compose(0x307B, 0x3099), Some(0x307C));
        assert_eq!(compose(0x30AB, 0x3099), Some(0x30AC));
    }

    #[test]
    fn latin_with_accents() {
        assert_eq!(compose(0x0041, 0x0300), Some(0x00C0));
        assert_eq!(compose(0x0065, 0x0301), Some(0x00E9));
        assert_eq!(compose_chars('n', '\u{0303}'), Some('ñ'));
    }

    #[test]
    fn non_pairs_do_not_compose() {
        assert_eq!(compose(0x0041, 0x0042), None);
        assert_eq!(compose(0x0000, 0x0000), None);
        assert_eq!(compose(0xFFFF, 0x0301), None);
        // base exists but the mark does not pair with it
        assert_eq!(compose(0x0041, 0x3099), None);
    }

    #[test]
    fn excluded_compositions_stay_decomposed() {
        // U+0958 DEVANAGARI LETTER QA is a composition exclusion.
        assert_eq!(compose(0x0915, 0x093C), None);
    }

    #[test]
    fn supplementary_chars_never_compose() {
        assert_eq!(compose_chars('\u{1F600}', '\u{0301}'), None);
        assert_eq!(compose_chars('e', '\u{1F3FB}'), None);
    }

    #[test]
    fn scan_stops_at_the_end_of_the_base_run() {
        // U+0331 pairs with 'B' (the next run in the table) but not with 'A'.
        assert_eq!(compose(0x0042, 0x0331), Some(0x1E06));
        assert_eq!(compose(0x0041, 0x0331), None);
    }
}
