//! Combining mark classification.
//!
//! The combining table covers general categories `Mn`, `Me` (both zero
//! advance) and `Mc` (positive advance). The Fitzpatrick emoji modifiers
//! U+1F3FB..=U+1F3FF and every variation selector (FVS, VS1..VS16,
//! VS17..VS256) are present in the data as nonspacing marks, so no extra
//! cases are needed here.

use crate::tables;

/// How a code point attaches to the preceding base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CombiningClass {
    /// Not a combining character.
    #[default]
    None = 0,
    /// Zero-advance mark: the cursor does not move.
    Nonspacing = 1,
    /// Positive-advance mark: the cursor moves one cell.
    Spacing = 2,
}

impl CombiningClass {
    /// Numeric form: 0 (not combining), 1 (nonspacing), 2 (spacing).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_combining(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Cells the cursor advances after drawing this mark onto its base.
    #[must_use]
    pub const fn advance(self) -> usize {
        match self {
            Self::Spacing => 1,
            Self::None | Self::Nonspacing => 0,
        }
    }
}

/// Combining class of `cp`; [`CombiningClass::None`] when not in the table.
#[inline]
#[must_use]
pub fn combining_class(cp: u32) -> CombiningClass {
    tables::COMBINING
        .value(cp)
        .copied()
        .unwrap_or(CombiningClass::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_letters_do_not_combine() {
        assert_eq!(combining_class('A' as u32), CombiningClass::None);
        assert_eq!(combining_class(0x3042), CombiningClass::None);
        assert_eq!(combining_class(0x1F600), CombiningClass::None);
    }

    #[test]
    fn nonspacing_and_enclosing_marks() {
        assert_eq!(combining_class(0x0301), CombiningClass::Nonspacing);
        assert_eq!(combining_class(0x3099), CombiningClass::Nonspacing);
        assert_eq!(combining_class(0x20DD), CombiningClass::Nonspacing);
        assert_eq!(combining_class(0x20E3), CombiningClass::Nonspacing);
    }

    #[test]
    fn spacing_marks_advance() {
        let class = combining_class(0x0903);
        assert_eq!(class, CombiningClass::Spacing);
        assert_eq!(class.as_u8(), 2);
        assert_eq!(class.advance(), 1);
    }

    #[test]
    fn emoji_modifiers_are_nonspacing() {
        for cp in 0x1F3FB..=0x1F3FF {
            assert_eq!(combining_class(cp), CombiningClass::Nonspacing, "U+{cp:X}");
        }
        assert_eq!(combining_class(0x1F3FA), CombiningClass::None);
        assert_eq!(combining_class(0x1F400), CombiningClass::None);
    }

    #[test]
    fn variation_selectors_are_nonspacing() {
        for cp in (0x180B..=0x180D).chain(0xFE00..=0xFE0F).chain(0xE0100..=0xE01EF) {
            assert_eq!(combining_class(cp), CombiningClass::Nonspacing, "U+{cp:X}");
        }
    }

    #[test]
    fn numeric_form_matches_advance_model() {
        assert_eq!(CombiningClass::None.as_u8(), 0);
        assert_eq!(CombiningClass::Nonspacing.as_u8(), 1);
        assert!(!CombiningClass::None.is_combining());
        assert!(CombiningClass::Nonspacing.is_combining());
        assert_eq!(CombiningClass::Nonspacing.advance(), 0);
    }
}
