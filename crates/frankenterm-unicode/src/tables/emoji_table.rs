// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use crate::range_table::RangeEntry;

/// Code points with the `Emoji_Presentation` property.
pub static EMOJI: &[RangeEntry<()>] = &[
    RangeEntry::new(0x231A, 0x231B, ()),
    RangeEntry::new(0x23E9, 0x23EC, ()),
    RangeEntry::new(0x23F0, 0x23F0, ()),
    RangeEntry::new(0x23F3, 0x23F3, ()),
    RangeEntry::new(0x25FD, 0x25FE, ()),
    RangeEntry::new(0x2614, 0x2615, ()),
    RangeEntry::new(0x2648, 0x2653, ()),
    RangeEntry::new(0x267F, 0x267F, ()),
    RangeEntry::new(0x2693, 0x2693, ()),
    RangeEntry::new(0x26A1, 0x26A1, ()),
    RangeEntry::new(0x26AA, 0x26AB, ()),
    RangeEntry::new(0x26BD, 0x26BE, ()),
    RangeEntry::new(0x26C4, 0x26C5, ()),
    RangeEntry::new(0x26CE, 0x26CE, ()),
    RangeEntry::new(0x26D4, 0x26D4, ()),
    RangeEntry::new(0x26EA, 0x26EA, ()),
    RangeEntry::new(0x26F2, 0x26F3, ()),
    RangeEntry::new(0x26F5, 0x26F5, ()),
    RangeEntry::new(0x26FA, 0x26FA, ()),
    RangeEntry::new(0x26FD, 0x26FD, ()),
    RangeEntry::new(0x2705, 0x2705, ()),
    RangeEntry::new(0x270A, 0x270B, ()),
    RangeEntry::new(0x2728, 0x2728, ()),
    RangeEntry::new(0x274C, 0x274C, ()),
    RangeEntry::new(0x274E, 0x274E, ()),
    RangeEntry::new(0x2753, 0x2755, ()),
    RangeEntry::new(0x2757, 0x2757, ()),
    RangeEntry::new(0x2795, 0x2797, ()),
    RangeEntry::new(0x27B0, 0x27B0, ()),
    RangeEntry::new(0x27BF, 0x27BF, ()),
    RangeEntry::new(0x2B1B, 0x2B1C, ()),
    RangeEntry::new(0x2B50, 0x2B50, ()),
    RangeEntry::new(0x2B55, 0x2B55, ()),
    RangeEntry::new(0x1F004, 0x1F004, ()),
    RangeEntry::new(0x1F0CF, 0x1F0CF, ()),
    RangeEntry::new(0x1F18E, 0x1F18E, ()),
    RangeEntry::new(0x1F191, 0x1F19A, ()),
    RangeEntry::new(0x1F1E6, 0x1F1FF, ()),
    RangeEntry::new(0x1F201, 0x1F201, ()),
    RangeEntry::new(0x1F21A, 0x1F21A, ()),
    RangeEntry::new(0x1F22F, 0x1F22F, ()),
    RangeEntry::new(0x1F232, 0x1F236, ()),
    RangeEntry::new(0x1F238, 0x1F23A, ()),
    RangeEntry::new(0x1F250, 0x1F251, ()),
    RangeEntry::new(0x1F300, 0x1F320, ()),
    RangeEntry::new(0x1F32D, 0x1F335, ()),
    RangeEntry::new(0x1F337, 0x1F37C, ()),
    RangeEntry::new(0x1F37E, 0x1F393, ()),
    RangeEntry::new(0x1F3A0, 0x1F3CA, ()),
    RangeEntry::new(0x1F3CF, 0x1F3D3, ()),
    RangeEntry::new(0x1F3E0, 0x1F3F0, ()),
    RangeEntry::new(0x1F3F4, 0x1F3F4, ()),
    RangeEntry::new(0x1F3F8, 0x1F43E, ()),
    RangeEntry::new(0x1F440, 0x1F440, ()),
    RangeEntry::new(0x1F442, 0x1F4FC, ()),
    RangeEntry::new(0x1F4FF, 0x1F53D, ()),
    RangeEntry::new(0x1F54B, 0x1F54E, ()),
    RangeEntry::new(0x1F550, 0x1F567, ()),
    RangeEntry::new(0x1F57A, 0x1F57A, ()),
    RangeEntry::new(0x1F595, 0x1F596, ()),
    RangeEntry::new(0x1F5A4, 0x1F5A4, ()),
    RangeEntry::new(0x1F5FB, 0x1F64F, ()),
    RangeEntry::new(0x1F680, 0x1F6C5, ()),
    RangeEntry::new(0x1F6CC, 0x1F6CC, ()),
    RangeEntry::new(0x1F6D0, 0x1F6D2, ()),
    RangeEntry::new(0x1F6D5, 0x1F6D7, ()),
    RangeEntry::new(0x1F6DD, 0x1F6DF, ()),
    RangeEntry::new(0x1F6EB, 0x1F6EC, ()),
    RangeEntry::new(0x1F6F4, 0x1F6FC, ()),
    RangeEntry::new(0x1F7E0, 0x1F7EB, ()),
    RangeEntry::new(0x1F7F0, 0x1F7F0, ()),
    RangeEntry::new(0x1F90C, 0x1F93A, ()),
    RangeEntry::new(0x1F93C, 0x1F945, ()),
    RangeEntry::new(0x1F947, 0x1F9FF, ()),
    RangeEntry::new(0x1FA70, 0x1FA74, ()),
    RangeEntry::new(0x1FA78, 0x1FA7C, ()),
    RangeEntry::new(0x1FA80, 0x1FA86, ()),
    RangeEntry::new(0x1FA90, 0x1FAAC, ()),
    RangeEntry::new(0x1FAB0, 0x1FABA, ()),
    RangeEntry::new(0x1FAC0, 0x1FAC5, ()),
    RangeEntry::new(0x1FAD0, 0x1FAD9, ()),
    RangeEntry::new(0x1FAE0, 0x1FAE7, ()),
    RangeEntry::new(0x1FAF0, 0x1FAF6, ()),
];
