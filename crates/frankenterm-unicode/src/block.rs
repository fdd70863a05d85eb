//! Unicode block membership.
//!
//! Block lookup is a diagnostic facility (status lines, character info
//! popups) rather than a rendering hot path.

use crate::tables;

/// Index of the block containing `cp`, or `None` for unallocated space.
#[must_use]
pub fn block_index(cp: u32) -> Option<usize> {
    tables::BLOCKS.lookup(cp)
}

/// Display name of the block at `index`. Returns `""` for `None` or an index
/// past the end of the table, so `block_name(block_index(cp))` is total.
#[must_use]
pub fn block_name(index: Option<usize>) -> &'static str {
    index
        .and_then(|i| tables::BLOCKS.entries().get(i))
        .map_or("", |entry| entry.value)
}

/// Name of the block containing `cp`.
#[must_use]
pub fn block_of(cp: u32) -> Option<&'static str> {
    tables::BLOCKS.value(cp).copied()
}

/// Number of blocks in the table.
#[must_use]
pub fn block_count() -> usize {
    tables::BLOCKS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_block_is_basic_latin() {
        assert_eq!(block_index(0x41), Some(0));
        assert_eq!(block_name(Some(0)), "Basic Latin");
    }

    #[test]
    fn names_for_common_blocks() {
        assert_eq!(block_of(0x3042), Some("Hiragana"));
        assert_eq!(block_of(0x30A2), Some("Katakana"));
        assert_eq!(block_of(0x4E00), Some("CJK Unified Ideographs"));
        assert_eq!(block_of(0x1F600), Some("Emoticons"));
        assert_eq!(block_of(0x10FFFF), Some("Supplementary Private Use Area-B"));
    }

    #[test]
    fn unallocated_space_has_no_block() {
        assert_eq!(block_index(0x2FE0), None);
        assert_eq!(block_name(block_index(0x2FE0)), "");
        assert_eq!(block_index(0x110000), None);
        assert_eq!(block_of(0x110000), None);
    }

    #[test]
    fn out_of_range_index_is_empty_name() {
        assert_eq!(block_name(Some(block_count())), "");
        assert_eq!(block_name(None), "");
    }

    #[test]
    fn index_and_name_agree() {
        for cp in [0x00u32, 0x0400, 0x0E00, 0x3000, 0xAC00, 0xFF00, 0x1D400] {
            let index = block_index(cp);
            assert_eq!(Some(block_name(index)), block_of(cp), "U+{cp:04X}");
        }
    }
}
