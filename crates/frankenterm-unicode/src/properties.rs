//! Presence-only properties: emoji presentation and virama.

use crate::tables;

/// Whether `cp` has default emoji presentation (`Emoji_Presentation=Yes`).
///
/// Text-default pictographs such as U+00A9 or U+2764 are not included;
/// they only render as emoji when followed by VS16.
#[inline]
#[must_use]
pub fn is_emoji(cp: u32) -> bool {
    tables::EMOJI.contains(cp)
}

/// Whether `cp` is a virama (canonical combining class 9).
#[inline]
#[must_use]
pub fn is_virama(cp: u32) -> bool {
    tables::VIRAMA.contains(cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_presentation_characters() {
        assert!(is_emoji(0x1F600));
        assert!(is_emoji(0x231A));
        assert!(is_emoji(0x1F1E6));
        assert!(is_emoji(0x1F3FB));
    }

    #[test]
    fn text_presentation_and_letters_are_not_emoji() {
        assert!(!is_emoji('A' as u32));
        assert!(!is_emoji('0' as u32));
        assert!(!is_emoji(0x00A9));
        assert!(!is_emoji(0x2764));
        assert!(!is_emoji(0x4E00));
    }

    #[test]
    fn virama_characters() {
        assert!(is_virama(0x094D));
        assert!(is_virama(0x0BCD));
        assert!(is_virama(0x0DCA));
        assert!(!is_virama(0x0915));
        assert!(!is_virama('a' as u32));
    }
}
