#![forbid(unsafe_code)]

//! Closed-interval lookup over sorted range tables.
//!
//! Every classification dataset in this crate is a static slice of
//! [`RangeEntry`] values. Entries are inclusive `[from, to]` intervals,
//! ascending and non-overlapping:
//!
//! ```text
//! for all i < j: table[i].to < table[j].from
//! ```
//!
//! [`lookup`] is the single binary search shared by every table. It rejects
//! code points outside the table span in O(1) and otherwise narrows
//! `[low, high)` until the covering entry is found or the window is empty.

use std::fmt;

/// One inclusive code point interval and the value attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeEntry<V> {
    /// First code point of the interval.
    pub from: u32,
    /// Last code point of the interval (inclusive).
    pub to: u32,
    /// Value shared by every code point in the interval.
    pub value: V,
}

impl<V> RangeEntry<V> {
    /// Create an entry covering `from..=to`.
    #[must_use]
    pub const fn new(from: u32, to: u32, value: V) -> Self {
        Self { from, to, value }
    }

    /// Whether `cp` falls inside this entry.
    #[inline]
    #[must_use]
    pub const fn contains(&self, cp: u32) -> bool {
        self.from <= cp && cp <= self.to
    }
}

/// Find the index of the entry covering `cp`.
///
/// `table` must satisfy the ordering invariant described in the module docs
/// (see [`RangeTable::validate`]). Empty tables never match.
#[inline]
#[must_use]
pub fn lookup<V>(table: &[RangeEntry<V>], cp: u32) -> Option<usize> {
    let (first, last) = (table.first()?, table.last()?);
    if cp < first.from || cp > last.to {
        return None;
    }

    // Invariant: the covering entry, if any, lies in table[low..high].
    let mut low = 0usize;
    let mut high = table.len();
    while low < high {
        let mid = low + (high - low) / 2;
        let entry = &table[mid];
        if entry.to < cp {
            low = mid + 1;
        } else if cp < entry.from {
            high = mid;
        } else {
            return Some(mid);
        }
    }
    None
}

/// A named, static range table.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable<V: 'static> {
    name: &'static str,
    entries: &'static [RangeEntry<V>],
}

impl<V: 'static> RangeTable<V> {
    /// Wrap a static slice. The slice is not checked here; call
    /// [`validate`](Self::validate) (or [`crate::verify_tables`]) at startup.
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [RangeEntry<V>]) -> Self {
        Self { name, entries }
    }

    /// Table name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw entries in ascending order.
    #[must_use]
    pub const fn entries(&self) -> &'static [RangeEntry<V>] {
        self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry covering `cp`.
    #[inline]
    #[must_use]
    pub fn lookup(&self, cp: u32) -> Option<usize> {
        lookup(self.entries, cp)
    }

    /// Entry covering `cp`.
    #[inline]
    #[must_use]
    pub fn get(&self, cp: u32) -> Option<&'static RangeEntry<V>> {
        let entries = self.entries;
        lookup(entries, cp).map(|index| &entries[index])
    }

    /// Value of the entry covering `cp`.
    #[inline]
    #[must_use]
    pub fn value(&self, cp: u32) -> Option<&'static V> {
        self.get(cp).map(|entry| &entry.value)
    }

    /// Whether any entry covers `cp`.
    #[inline]
    #[must_use]
    pub fn contains(&self, cp: u32) -> bool {
        self.lookup(cp).is_some()
    }

    /// Check the table is non-empty, every interval is well formed, and
    /// intervals are strictly ascending without overlap.
    pub fn validate(&self) -> Result<(), TableError> {
        validate_entries(self.name, self.entries)
    }
}

/// Check the ordering invariant of an arbitrary slice.
pub fn validate_entries<V>(
    name: &'static str,
    entries: &[RangeEntry<V>],
) -> Result<(), TableError> {
    if entries.is_empty() {
        return Err(TableError::new(name, 0, TableErrorKind::Empty));
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.from > entry.to {
            return Err(TableError::new(name, index, TableErrorKind::InvertedRange));
        }
        if index > 0 && entries[index - 1].to >= entry.from {
            return Err(TableError::new(name, index, TableErrorKind::Unordered));
        }
    }
    Ok(())
}

/// What was wrong with a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableErrorKind {
    /// The table has no entries.
    Empty,
    /// An entry ends before it starts.
    InvertedRange,
    /// An entry overlaps or precedes the one before it.
    Unordered,
}

/// A violated table invariant, located by table name and entry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableError {
    pub table: &'static str,
    pub index: usize,
    pub kind: TableErrorKind,
}

impl TableError {
    #[must_use]
    pub const fn new(table: &'static str, index: usize, kind: TableErrorKind) -> Self {
        Self { table, index, kind }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TableErrorKind::Empty => write!(f, "table `{}` is empty", self.table),
            TableErrorKind::InvertedRange => write!(
                f,
                "table `{}` entry {} ends before it starts",
                self.table, self.index
            ),
            TableErrorKind::Unordered => write!(
                f,
                "table `{}` entry {} overlaps or precedes entry {}",
                self.table,
                self.index,
                self.index.saturating_sub(1)
            ),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: &[RangeEntry<char>] = &[
        RangeEntry::new(0x10, 0x1F, 'a'),
        RangeEntry::new(0x20, 0x20, 'b'),
        RangeEntry::new(0x40, 0x4F, 'c'),
        RangeEntry::new(0x100, 0x1FF, 'd'),
    ];

    #[test]
    fn finds_covering_entry_at_both_edges() {
        assert_eq!(lookup(SAMPLE, 0x10), Some(0));
        assert_eq!(lookup(SAMPLE, 0x1F), Some(0));
        assert_eq!(lookup(SAMPLE, 0x20), Some(1));
        assert_eq!(lookup(SAMPLE, 0x45), Some(2));
        assert_eq!(lookup(SAMPLE, 0x1FF), Some(3));
    }

    #[test]
    fn misses_outside_span_and_in_gaps() {
        assert_eq!(lookup(SAMPLE, 0x0F), None);
        assert_eq!(lookup(SAMPLE, 0x200), None);
        assert_eq!(lookup(SAMPLE, 0x21), None);
        assert_eq!(lookup(SAMPLE, 0xFF), None);
        assert_eq!(lookup(SAMPLE, u32::MAX), None);
    }

    #[test]
    fn empty_table_never_matches() {
        let empty: &[RangeEntry<()>] = &[];
        assert_eq!(lookup(empty, 0), None);
        assert_eq!(
            validate_entries("empty", empty),
            Err(TableError::new("empty", 0, TableErrorKind::Empty))
        );
    }

    #[test]
    fn single_entry_table() {
        let one = [RangeEntry::new(5, 5, ())];
        assert_eq!(lookup(&one, 4), None);
        assert_eq!(lookup(&one, 5), Some(0));
        assert_eq!(lookup(&one, 6), None);
    }

    #[test]
    fn range_table_accessors() {
        let table = RangeTable::new("sample", SAMPLE);
        assert_eq!(table.name(), "sample");
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert_eq!(table.value(0x41), Some(&'c'));
        assert_eq!(table.get(0x41).map(|e| e.from), Some(0x40));
        assert!(table.contains(0x150));
        assert!(!table.contains(0x30));
        assert!(table.validate().is_ok());
    }

    static NAMED: RangeTable<char> = RangeTable::new("named", SAMPLE);

    #[test]
    fn range_table_in_a_static() {
        assert_eq!(NAMED.value(0x10), Some(&'a'));
        assert_eq!(NAMED.entries().len(), 4);
        assert!(NAMED.validate().is_ok());
    }

    #[test]
    fn validate_rejects_overlap() {
        let bad = [RangeEntry::new(0, 10, ()), RangeEntry::new(10, 20, ())];
        let err = validate_entries("bad", &bad).unwrap_err();
        assert_eq!(err.kind, TableErrorKind::Unordered);
        assert_eq!(err.index, 1);
        assert_eq!(
            err.to_string(),
            "table `bad` entry 1 overlaps or precedes entry 0"
        );
    }

    #[test]
    fn validate_rejects_descending_and_inverted() {
        let descending = [RangeEntry::new(20, 30, ()), RangeEntry::new(0, 10, ())];
        assert_eq!(
            validate_entries("d", &descending).unwrap_err().kind,
            TableErrorKind::Unordered
        );

        let inverted = [RangeEntry::new(9, 3, ())];
        assert_eq!(
            validate_entries("i", &inverted).unwrap_err().kind,
            TableErrorKind::InvertedRange
        );
    }
}
