//! East Asian Width classification.

use crate::tables;

/// East Asian Width property of a code point (UAX #11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// `F`: compatibility fullwidth forms.
    Fullwidth,
    /// `H`: halfwidth forms, and the default for code points with no entry.
    Halfwidth,
    /// `W`: wide ideographs, kana, and emoji presentation characters.
    Wide,
    /// `Na`: narrow characters such as ASCII.
    Narrow,
    /// `A`: ambiguous; wide in legacy East Asian contexts, narrow elsewhere.
    Ambiguous,
    /// `N`: neutral; not used in East Asian typography.
    Neutral,
}

impl WidthClass {
    /// Whether the class always occupies two terminal cells.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Fullwidth | Self::Wide)
    }

    /// UCD short alias (`F`, `H`, `W`, `Na`, `A`, `N`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullwidth => "F",
            Self::Halfwidth => "H",
            Self::Wide => "W",
            Self::Narrow => "Na",
            Self::Ambiguous => "A",
            Self::Neutral => "N",
        }
    }

    /// Parse a UCD short alias or long name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "f" | "fullwidth" => Some(Self::Fullwidth),
            "h" | "halfwidth" => Some(Self::Halfwidth),
            "w" | "wide" => Some(Self::Wide),
            "na" | "narrow" => Some(Self::Narrow),
            "a" | "ambiguous" => Some(Self::Ambiguous),
            "n" | "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// East Asian Width of `cp`. Code points with no table entry (unassigned,
/// noncharacters, values above U+10FFFF) are [`WidthClass::Halfwidth`].
#[inline]
#[must_use]
pub fn width_class(cp: u32) -> WidthClass {
    tables::WIDTH
        .value(cp)
        .copied()
        .unwrap_or(WidthClass::Halfwidth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_narrow() {
        for cp in 0x20..=0x7E {
            assert_eq!(width_class(cp), WidthClass::Narrow, "U+{cp:04X}");
        }
    }

    #[test]
    fn cjk_and_kana_are_wide() {
        assert_eq!(width_class(0x4E00), WidthClass::Wide);
        assert_eq!(width_class(0x3042), WidthClass::Wide);
        assert_eq!(width_class(0xAC00), WidthClass::Wide);
        assert_eq!(width_class(0x20000), WidthClass::Wide);
    }

    #[test]
    fn fullwidth_and_halfwidth_forms() {
        assert_eq!(width_class(0xFF21), WidthClass::Fullwidth);
        assert_eq!(width_class(0x3000), WidthClass::Fullwidth);
        assert_eq!(width_class(0xFF71), WidthClass::Halfwidth);
        assert_eq!(width_class(0x20A9), WidthClass::Halfwidth);
    }

    #[test]
    fn greek_and_box_drawing_are_ambiguous() {
        assert_eq!(width_class(0x03B1), WidthClass::Ambiguous);
        assert_eq!(width_class(0x2500), WidthClass::Ambiguous);
        assert_eq!(width_class(0x00A1), WidthClass::Ambiguous);
    }

    #[test]
    fn controls_and_arabic_are_neutral() {
        assert_eq!(width_class(0x0000), WidthClass::Neutral);
        assert_eq!(width_class(0x0627), WidthClass::Neutral);
    }

    #[test]
    fn misses_default_to_halfwidth() {
        assert_eq!(width_class(0x10FFFE), WidthClass::Halfwidth);
        assert_eq!(width_class(0x0378), WidthClass::Halfwidth);
        assert_eq!(width_class(0x110000), WidthClass::Halfwidth);
        assert_eq!(width_class(u32::MAX), WidthClass::Halfwidth);
    }

    #[test]
    fn private_use_planes_are_ambiguous() {
        assert_eq!(width_class(0xE000), WidthClass::Ambiguous);
        assert_eq!(width_class(0x10FFFD), WidthClass::Ambiguous);
    }

    #[test]
    fn parse_accepts_aliases_and_names() {
        assert_eq!(WidthClass::parse("Na"), Some(WidthClass::Narrow));
        assert_eq!(WidthClass::parse(" wide "), Some(WidthClass::Wide));
        assert_eq!(WidthClass::parse("x"), None);
        for class in [
            WidthClass::Fullwidth,
            WidthClass::Halfwidth,
            WidthClass::Wide,
            WidthClass::Narrow,
            WidthClass::Ambiguous,
            WidthClass::Neutral,
        ] {
            assert_eq!(WidthClass::parse(class.as_str()), Some(class));
        }
    }
}
