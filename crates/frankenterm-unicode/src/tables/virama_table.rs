// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use crate::range_table::RangeEntry;

/// Code points with canonical combining class 9 (Virama).
pub static VIRAMA: &[RangeEntry<()>] = &[
    RangeEntry::new(0x094D, 0x094D, ()),
    RangeEntry::new(0x09CD, 0x09CD, ()),
    RangeEntry::new(0x0A4D, 0x0A4D, ()),
    RangeEntry::new(0x0ACD, 0x0ACD, ()),
    RangeEntry::new(0x0B4D, 0x0B4D, ()),
    RangeEntry::new(0x0BCD, 0x0BCD, ()),
    RangeEntry::new(0x0C4D, 0x0C4D, ()),
    RangeEntry::new(0x0CCD, 0x0CCD, ()),
    RangeEntry::new(0x0D3B, 0x0D3C, ()),
    RangeEntry::new(0x0D4D, 0x0D4D, ()),
    RangeEntry::new(0x0DCA, 0x0DCA, ()),
    RangeEntry::new(0x0E3A, 0x0E3A, ()),
    RangeEntry::new(0x0EBA, 0x0EBA, ()),
    RangeEntry::new(0x0F84, 0x0F84, ()),
    RangeEntry::new(0x1039, 0x103A, ()),
    RangeEntry::new(0x1714, 0x1715, ()),
    RangeEntry::new(0x1734, 0x1734, ()),
    RangeEntry::new(0x17D2, 0x17D2, ()),
    RangeEntry::new(0x1A60, 0x1A60, ()),
    RangeEntry::new(0x1B44, 0x1B44, ()),
    RangeEntry::new(0x1BAA, 0x1BAB, ()),
    RangeEntry::new(0x1BF2, 0x1BF3, ()),
    RangeEntry::new(0x2D7F, 0x2D7F, ()),
    RangeEntry::new(0xA806, 0xA806, ()),
    RangeEntry::new(0xA82C, 0xA82C, ()),
    RangeEntry::new(0xA8C4, 0xA8C4, ()),
    RangeEntry::new(0xA953, 0xA953, ()),
    RangeEntry::new(0xA9C0, 0xA9C0, ()),
    RangeEntry::new(0xAAF6, 0xAAF6, ()),
    RangeEntry::new(0xABED, 0xABED, ()),
    RangeEntry::new(0x10A3F, 0x10A3F, ()),
    RangeEntry::new(0x11046, 0x11046, ()),
    RangeEntry::new(0x11070, 0x11070, ()),
    RangeEntry::new(0x1107F, 0x1107F, ()),
    RangeEntry::new(0x110B9, 0x110B9, ()),
    RangeEntry::new(0x11133, 0x11134, ()),
    RangeEntry::new(0x111C0, 0x111C0, ()),
    RangeEntry::new(0x11235, 0x11235, ()),
    RangeEntry::new(0x112EA, 0x112EA, ()),
    RangeEntry::new(0x1134D, 0x1134D, ()),
    RangeEntry::new(0x11442, 0x11442, ()),
    RangeEntry::new(0x114C2, 0x114C2, ()),
    RangeEntry::new(0x115BF, 0x115BF, ()),
    RangeEntry::new(0x1163F, 0x1163F, ()),
    RangeEntry::new(0x116B6, 0x116B6, ()),
    RangeEntry::new(0x1172B, 0x1172B, ()),
    RangeEntry::new(0x11839, 0x11839, ()),
    RangeEntry::new(0x1193D, 0x1193E, ()),
    RangeEntry::new(0x119E0, 0x119E0, ()),
    RangeEntry::new(0x11A34, 0x11A34, ()),
    RangeEntry::new(0x11A47, 0x11A47, ()),
    RangeEntry::new(0x11A99, 0x11A99, ()),
    RangeEntry::new(0x11C3F, 0x11C3F, ()),
    RangeEntry::new(0x11D44, 0x11D45, ()),
    RangeEntry::new(0x11D97, 0x11D97, ()),
];
