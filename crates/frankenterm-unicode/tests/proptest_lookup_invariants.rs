//! Property-based invariant tests for range lookups and classifiers.
//!
//! 1. Every shipped table is strictly ascending and non-overlapping.
//! 2. Binary search agrees with a linear scan for any code point.
//! 3. Points inside an entry resolve to that entry; points outside the span miss.
//! 4. Classifiers are pure: repeated calls agree.
//! 5. Composition agrees with a linear first-match scan of the pair table.

use frankenterm_unicode::{
    CombiningClass, RangeEntry, RangeTable, WidthClass, WidthPolicy, cell_width, combining_class,
    compose, data, is_emoji, is_virama, lookup, verify_tables, width_class,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn linear_lookup<V>(table: &[RangeEntry<V>], cp: u32) -> Option<usize> {
    table.iter().position(|entry| entry.contains(cp))
}

/// Code points biased toward the populated low planes, plus the full u32 range.
fn code_point() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => 0u32..0x3_0000,
        1 => 0u32..=0x10_FFFF,
        1 => any::<u32>(),
    ]
}

fn check_against_oracle<V: 'static>(table: &RangeTable<V>, cp: u32) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        table.lookup(cp),
        linear_lookup(table.entries(), cp),
        "table {} disagrees with linear scan at U+{:X}",
        table.name(),
        cp
    );
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Table invariants
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn shipped_tables_are_sorted_and_disjoint() {
    verify_tables().expect("table invariant violated");
    for pair in data::WIDTH.entries().windows(2) {
        assert!(pair[0].to < pair[1].from);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Binary search agrees with a linear scan
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lookup_matches_linear_scan(cp in code_point()) {
        check_against_oracle(&data::WIDTH, cp)?;
        check_against_oracle(&data::COMBINING, cp)?;
        check_against_oracle(&data::EMOJI, cp)?;
        check_against_oracle(&data::VIRAMA, cp)?;
        check_against_oracle(&data::BLOCKS, cp)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Entry coverage and span rejection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn points_inside_an_entry_resolve_to_it(index in 0usize..1000, offset in any::<u32>()) {
        let entries = data::WIDTH.entries();
        let index = index % entries.len();
        let entry = entries[index];
        let cp = entry.from + offset % (entry.to - entry.from + 1);
        prop_assert_eq!(lookup(entries, cp), Some(index));
        prop_assert_eq!(width_class(cp), entry.value);
    }

    #[test]
    fn points_past_the_span_miss(cp in 0x11_0000u32..=u32::MAX) {
        prop_assert_eq!(data::WIDTH.lookup(cp), None);
        prop_assert_eq!(width_class(cp), WidthClass::Halfwidth);
        prop_assert_eq!(combining_class(cp), CombiningClass::None);
        prop_assert!(!is_emoji(cp));
        prop_assert!(!is_virama(cp));
    }
}

#[test]
fn every_entry_edge_resolves() {
    let entries = data::COMBINING.entries();
    for (index, entry) in entries.iter().enumerate() {
        assert_eq!(lookup(entries, entry.from), Some(index));
        assert_eq!(lookup(entries, entry.to), Some(index));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Purity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn classifiers_are_pure(cp in code_point()) {
        prop_assert_eq!(width_class(cp), width_class(cp));
        prop_assert_eq!(combining_class(cp), combining_class(cp));
        prop_assert_eq!(is_emoji(cp), is_emoji(cp));
        prop_assert_eq!(is_virama(cp), is_virama(cp));
        let policy = WidthPolicy::CJK;
        let width = cell_width(cp, &policy);
        prop_assert!(width <= 2);
        prop_assert_eq!(width, cell_width(cp, &policy));
    }
}

#[test]
fn classifiers_agree_across_threads() {
    let expected: Vec<_> = (0u32..0x3000).map(width_class).collect();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0u32..0x3000).map(width_class).collect::<Vec<_>>()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Composition
// ═════════════════════════════════════════════════════════════════════════

fn linear_compose(base: u16, next: u16) -> Option<u16> {
    data::COMPOSITION_PAIRS
        .iter()
        .find(|&&(first, second, _)| first == base && second == next)
        .map(|&(_, _, precomposed)| precomposed)
}

fn pair_strategy() -> impl Strategy<Value = (u16, u16)> {
    let pairs = data::COMPOSITION_PAIRS;
    prop_oneof![
        (0..pairs.len()).prop_map(move |i| (pairs[i].0, pairs[i].1)),
        (0..pairs.len(), 0..pairs.len()).prop_map(move |(i, j)| (pairs[i].0, pairs[j].1)),
        (any::<u16>(), any::<u16>()),
    ]
}

proptest! {
    #[test]
    fn compose_matches_linear_scan((base, next) in pair_strategy()) {
        prop_assert_eq!(compose(base, next), linear_compose(base, next));
    }
}

#[test]
fn every_pair_composes() {
    for &(base, next, precomposed) in data::COMPOSITION_PAIRS {
        assert_eq!(compose(base, next), Some(precomposed));
    }
}
