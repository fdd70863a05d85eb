//! Static classification datasets.
//!
//! The `*_table.rs` files are generated from the Unicode Character Database
//! and only hold data. This module wraps them in [`RangeTable`]s and checks
//! their invariants.

mod block_table;
mod combining_table;
mod compose_table;
mod emoji_table;
mod virama_table;
mod width_table;

use crate::combining::CombiningClass;
use crate::range_table::{RangeTable, TableError, TableErrorKind};
use crate::width::WidthClass;

pub use compose_table::COMPOSITION_PAIRS;

pub static WIDTH: RangeTable<WidthClass> =
    RangeTable::new("east_asian_width", width_table::EAST_ASIAN_WIDTH);

pub static COMBINING: RangeTable<CombiningClass> =
    RangeTable::new("combining", combining_table::COMBINING_MARKS);

pub static EMOJI: RangeTable<()> = RangeTable::new("emoji", emoji_table::EMOJI);

pub static VIRAMA: RangeTable<()> = RangeTable::new("virama", virama_table::VIRAMA);

pub static BLOCKS: RangeTable<&str> = RangeTable::new("blocks", block_table::BLOCKS);

/// Check the composition table is grouped by base code point.
///
/// Entries must be non-decreasing in `base` so every base forms one
/// contiguous run; order within a run is significant and not checked.
pub fn validate_composition_pairs(pairs: &[(u16, u16, u16)]) -> Result<(), TableError> {
    if pairs.is_empty() {
        return Err(TableError::new("composition", 0, TableErrorKind::Empty));
    }
    match pairs.windows(2).position(|w| w[0].0 > w[1].0) {
        Some(index) => Err(TableError::new(
            "composition",
            index + 1,
            TableErrorKind::Unordered,
        )),
        None => Ok(()),
    }
}

/// Verify every shipped table. Intended to run once at startup or in tests.
pub fn verify_tables() -> Result<(), TableError> {
    WIDTH.validate()?;
    COMBINING.validate()?;
    EMOJI.validate()?;
    VIRAMA.validate()?;
    BLOCKS.validate()?;
    validate_composition_pairs(COMPOSITION_PAIRS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_hold_their_invariants() {
        assert_eq!(verify_tables(), Ok(()));
    }

    #[test]
    fn composition_validation_catches_split_runs() {
        let split = [(0x41, 0x300, 0xC0), (0x42, 0x307, 0x1E02), (0x41, 0x301, 0xC1)];
        assert_eq!(
            validate_composition_pairs(&split),
            Err(TableError::new("composition", 2, TableErrorKind::Unordered))
        );
        assert!(validate_composition_pairs(&split[..2]).is_ok());
    }
}
