// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use crate::combining::CombiningClass;
use crate::range_table::RangeEntry;

const MN: CombiningClass = CombiningClass::Nonspacing;
const MC: CombiningClass = CombiningClass::Spacing;

/// Combining marks (Mn, Mc, Me) plus the Fitzpatrick emoji modifiers.
pub static COMBINING_MARKS: &[RangeEntry<CombiningClass>] = &[
    RangeEntry::new(0x0300, 0x036F, MN),
    RangeEntry::new(0x0483, 0x0489, MN),
    RangeEntry::new(0x0591, 0x05BD, MN),
    RangeEntry::new(0x05BF, 0x05BF, MN),
    RangeEntry::new(0x05C1, 0x05C2, MN),
    RangeEntry::new(0x05C4, 0x05C5, MN),
    RangeEntry::new(0x05C7, 0x05C7, MN),
    RangeEntry::new(0x0610, 0x061A, MN),
    RangeEntry::new(0x064B, 0x065F, MN),
    RangeEntry::new(0x0670, 0x0670, MN),
    RangeEntry::new(0x06D6, 0x06DC, MN),
    RangeEntry::new(0x06DF, 0x06E4, MN),
    RangeEntry::new(0x06E7, 0x06E8, MN),
    RangeEntry::new(0x06EA, 0x06ED, MN),
    RangeEntry::new(0x0711, 0x0711, MN),
    RangeEntry::new(0x0730, 0x074A, MN),
    RangeEntry::new(0x07A6, 0x07B0, MN),
    RangeEntry::new(0x07EB, 0x07F3, MN),
    RangeEntry::new(0x07FD, 0x07FD, MN),
    RangeEntry::new(0x0816, 0x0819, MN),
    RangeEntry::new(0x081B, 0x0823, MN),
    RangeEntry::new(0x0825, 0x0827, MN),
    RangeEntry::new(0x0829, 0x082D, MN),
    RangeEntry::new(0x0859, 0x085B, MN),
    RangeEntry::new(0x0898, 0x089F, MN),
    RangeEntry::new(0x08CA, 0x08E1, MN),
    RangeEntry::new(0x08E3, 0x0902, MN),
    RangeEntry::new(0x0903, 0x0903, MC),
    RangeEntry::new(0x093A, 0x093A, MN),
    RangeEntry::new(0x093B, 0x093B, MC),
    RangeEntry::new(0x093C, 0x093C, MN),
    RangeEntry::new(0x093E, 0x0940, MC),
    RangeEntry::new(0x0941, 0x0948, MN),
    RangeEntry::new(0x0949, 0x094C, MC),
    RangeEntry::new(0x094D, 0x094D, MN),
    RangeEntry::new(0x094E, 0x094F, MC),
    RangeEntry::new(0x0951, 0x0957, MN),
    RangeEntry::new(0x0962, 0x0963, MN),
    RangeEntry::new(0x0981, 0x0981, MN),
    RangeEntry::new(0x0982, 0x0983, MC),
    RangeEntry::new(0x09BC, 0x09BC, MN),
    RangeEntry::new(0x09BE, 0x09C0, MC),
    RangeEntry::new(0x09C1, 0x09C4, MN),
    RangeEntry::new(0x09C7, 0x09C8, MC),
    RangeEntry::new(0x09CB, 0x09CC, MC),
    RangeEntry::new(0x09CD, 0x09CD, MN),
    RangeEntry::new(0x09D7, 0x09D7, MC),
    RangeEntry::new(0x09E2, 0x09E3, MN),
    RangeEntry::new(0x09FE, 0x09FE, MN),
    RangeEntry::new(0x0A01, 0x0A02, MN),
    RangeEntry::new(0x0A03, 0x0A03, MC),
    RangeEntry::new(0x0A3C, 0x0A3C, MN),
    RangeEntry::new(0x0A3E, 0x0A40, MC),
    RangeEntry::new(0x0A41, 0x0A42, MN),
    RangeEntry::new(0x0A47, 0x0A48, MN),
    RangeEntry::new(0x0A4B, 0x0A4D, MN),
    RangeEntry::new(0x0A51, 0x0A51, MN),
    RangeEntry::new(0x0A70, 0x0A71, MN),
    RangeEntry::new(0x0A75, 0x0A75, MN),
    RangeEntry::new(0x0A81, 0x0A82, MN),
    RangeEntry::new(0x0A83, 0x0A83, MC),
    RangeEntry::new(0x0ABC, 0x0ABC, MN),
    RangeEntry::new(0x0ABE, 0x0AC0, MC),
    RangeEntry::new(0x0AC1, 0x0AC5, MN),
    RangeEntry::new(0x0AC7, 0x0AC8, MN),
    RangeEntry::new(0x0AC9, 0x0AC9, MC),
    RangeEntry::new(0x0ACB, 0x0ACC, MC),
    RangeEntry::new(0x0ACD, 0x0ACD, MN),
    RangeEntry::new(0x0AE2, 0x0AE3, MN),
    RangeEntry::new(0x0AFA, 0x0AFF, MN),
    RangeEntry::new(0x0B01, 0x0B01, MN),
    RangeEntry::new(0x0B02, 0x0B03, MC),
    RangeEntry::new(0x0B3C, 0x0B3C, MN),
    RangeEntry::new(0x0B3E, 0x0B3E, MC),
    RangeEntry::new(0x0B3F, 0x0B3F, MN),
    RangeEntry::new(0x0B40, 0x0B40, MC),
    RangeEntry::new(0x0B41, 0x0B44, MN),
    RangeEntry::new(0x0B47, 0x0B48, MC),
    RangeEntry::new(0x0B4B, 0x0B4C, MC),
    RangeEntry::new(0x0B4D, 0x0B4D, MN),
    RangeEntry::new(0x0B55, 0x0B56, MN),
    RangeEntry::new(0x0B57, 0x0B57, MC),
    RangeEntry::new(0x0B62, 0x0B63, MN),
    RangeEntry::new(0x0B82, 0x0B82, MN),
    RangeEntry::new(0x0BBE, 0x0BBF, MC),
    RangeEntry::new(0x0BC0, 0x0BC0, MN),
    RangeEntry::new(0x0BC1, 0x0BC2, MC),
    RangeEntry::new(0x0BC6, 0x0BC8, MC),
    RangeEntry::new(0x0BCA, 0x0BCC, MC),
    RangeEntry::new(0x0BCD, 0x0BCD, MN),
    RangeEntry::new(0x0BD7, 0x0BD7, MC),
    RangeEntry::new(0x0C00, 0x0C00, MN),
    RangeEntry::new(0x0C01, 0x0C03, MC),
    RangeEntry::new(0x0C04, 0x0C04, MN),
    RangeEntry::new(0x0C3C, 0x0C3C, MN),
    RangeEntry::new(0x0C3E, 0x0C40, MN),
    RangeEntry::new(0x0C41, 0x0C44, MC),
    RangeEntry::new(0x0C46, 0x0C48, MN),
    RangeEntry::new(0x0C4A, 0x0C4D, MN),
    RangeEntry::new(0x0C55, 0x0C56, MN),
    RangeEntry::new(0x0C62, 0x0C63, MN),
    RangeEntry::new(0x0C81, 0x0C81, MN),
    RangeEntry::new(0x0C82, 0x0C83, MC),
    RangeEntry::new(0x0CBC, 0x0CBC, MN),
    RangeEntry::new(0x0CBE, 0x0CBE, MC),
    RangeEntry::new(0x0CBF, 0x0CBF, MN),
    RangeEntry::new(0x0CC0, 0x0CC4, MC),
    RangeEntry::new(0x0CC6, 0x0CC6, MN),
    RangeEntry::new(0x0CC7, 0x0CC8, MC),
    RangeEntry::new(0x0CCA, 0x0CCB, MC),
    RangeEntry::new(0x0CCC, 0x0CCD, MN),
    RangeEntry::new(0x0CD5, 0x0CD6, MC),
    RangeEntry::new(0x0CE2, 0x0CE3, MN),
    RangeEntry::new(0x0D00, 0x0D01, MN),
    RangeEntry::new(0x0D02, 0x0D03, MC),
    RangeEntry::new(0x0D3B, 0x0D3C, MN),
    RangeEntry::new(0x0D3E, 0x0D40, MC),
    RangeEntry::new(0x0D41, 0x0D44, MN),
    RangeEntry::new(0x0D46, 0x0D48, MC),
    RangeEntry::new(0x0D4A, 0x0D4C, MC),
    RangeEntry::new(0x0D4D, 0x0D4D, MN),
    RangeEntry::new(0x0D57, 0x0D57, MC),
    RangeEntry::new(0x0D62, 0x0D63, MN),
    RangeEntry::new(0x0D81, 0x0D81, MN),
    RangeEntry::new(0x0D82, 0x0D83, MC),
    RangeEntry::new(0x0DCA, 0x0DCA, MN),
    RangeEntry::new(0x0DCF, 0x0DD1, MC),
    RangeEntry::new(0x0DD2, 0x0DD4, MN),
    RangeEntry::new(0x0DD6, 0x0DD6, MN),
    RangeEntry::new(0x0DD8, 0x0DDF, MC),
    RangeEntry::new(0x0DF2, 0x0DF3, MC),
    RangeEntry::new(0x0E31, 0x0E31, MN),
    RangeEntry::new(0x0E34, 0x0E3A, MN),
    RangeEntry::new(0x0E47, 0x0E4E, MN),
    RangeEntry::new(0x0EB1, 0x0EB1, MN),
    RangeEntry::new(0x0EB4, 0x0EBC, MN),
    RangeEntry::new(0x0EC8, 0x0ECD, MN),
    RangeEntry::new(0x0F18, 0x0F19, MN),
    RangeEntry::new(0x0F35, 0x0F35, MN),
    RangeEntry::new(0x0F37, 0x0F37, MN),
    RangeEntry::new(0x0F39, 0x0F39, MN),
    RangeEntry::new(0x0F3E, 0x0F3F, MC),
    RangeEntry::new(0x0F71, 0x0F7E, MN),
    RangeEntry::new(0x0F7F, 0x0F7F, MC),
    RangeEntry::new(0x0F80, 0x0F84, MN),
    RangeEntry::new(0x0F86, 0x0F87, MN),
    RangeEntry::new(0x0F8D, 0x0F97, MN),
    RangeEntry::new(0x0F99, 0x0FBC, MN),
    RangeEntry::new(0x0FC6, 0x0FC6, MN),
    RangeEntry::new(0x102B, 0x102C, MC),
    RangeEntry::new(0x102D, 0x1030, MN),
    RangeEntry::new(0x1031, 0x1031, MC),
    RangeEntry::new(0x1032, 0x1037, MN),
    RangeEntry::new(0x1038, 0x1038, MC),
    RangeEntry::new(0x1039, 0x103A, MN),
    RangeEntry::new(0x103B, 0x103C, MC),
    RangeEntry::new(0x103D, 0x103E, MN),
    RangeEntry::new(0x1056, 0x1057, MC),
    RangeEntry::new(0x1058, 0x1059, MN),
    RangeEntry::new(0x105E, 0x1060, MN),
    RangeEntry::new(0x1062, 0x1064, MC),
    RangeEntry::new(0x1067, 0x106D, MC),
    RangeEntry::new(0x1071, 0x1074, MN),
    RangeEntry::new(0x1082, 0x1082, MN),
    RangeEntry::new(0x1083, 0x1084, MC),
    RangeEntry::new(0x1085, 0x1086, MN),
    RangeEntry::new(0x1087, 0x108C, MC),
    RangeEntry::new(0x108D, 0x108D, MN),
    RangeEntry::new(0x108F, 0x108F, MC),
    RangeEntry::new(0x109A, 0x109C, MC),
    RangeEntry::new(0x109D, 0x109D, MN),
    RangeEntry::new(0x135D, 0x135F, MN),
    RangeEntry::new(0x1712, 0x1714, MN),
    RangeEntry::new(0x1715, 0x1715, MC),
    RangeEntry::new(0x1732, 0x1733, MN),
    RangeEntry::new(0x1734, 0x1734, MC),
    RangeEntry::new(0x1752, 0x1753, MN),
    RangeEntry::new(0x1772, 0x1773, MN),
    RangeEntry::new(0x17B4, 0x17B5, MN),
    RangeEntry::new(0x17B6, 0x17B6, MC),
    RangeEntry::new(0x17B7, 0x17BD, MN),
    RangeEntry::new(0x17BE, 0x17C5, MC),
    RangeEntry::new(0x17C6, 0x17C6, MN),
    RangeEntry::new(0x17C7, 0x17C8, MC),
    RangeEntry::new(0x17C9, 0x17D3, MN),
    RangeEntry::new(0x17DD, 0x17DD, MN),
    RangeEntry::new(0x180B, 0x180D, MN),
    RangeEntry::new(0x180F, 0x180F, MN),
    RangeEntry::new(0x1885, 0x1886, MN),
    RangeEntry::new(0x18A9, 0x18A9, MN),
    RangeEntry::new(0x1920, 0x1922, MN),
    RangeEntry::new(0x1923, 0x1926, MC),
    RangeEntry::new(0x1927, 0x1928, MN),
    RangeEntry::new(0x1929, 0x192B, MC),
    RangeEntry::new(0x1930, 0x1931, MC),
    RangeEntry::new(0x1932, 0x1932, MN),
    RangeEntry::new(0x1933, 0x1938, MC),
    RangeEntry::new(0x1939, 0x193B, MN),
    RangeEntry::new(0x1A17, 0x1A18, MN),
    RangeEntry::new(0x1A19, 0x1A1A, MC),
    RangeEntry::new(0x1A1B, 0x1A1B, MN),
    RangeEntry::new(0x1A55, 0x1A55, MC),
    RangeEntry::new(0x1A56, 0x1A56, MN),
    RangeEntry::new(0x1A57, 0x1A57, MC),
    RangeEntry::new(0x1A58, 0x1A5E, MN),
    RangeEntry::new(0x1A60, 0x1A60, MN),
    RangeEntry::new(0x1A61, 0x1A61, MC),
    RangeEntry::new(0x1A62, 0x1A62, MN),
    RangeEntry::new(0x1A63, 0x1A64, MC),
    RangeEntry::new(0x1A65, 0x1A6C, MN),
    RangeEntry::new(0x1A6D, 0x1A72, MC),
    RangeEntry::new(0x1A73, 0x1A7C, MN),
    RangeEntry::new(0x1A7F, 0x1A7F, MN),
    RangeEntry::new(0x1AB0, 0x1ACE, MN),
    RangeEntry::new(0x1B00, 0x1B03, MN),
    RangeEntry::new(0x1B04, 0x1B04, MC),
    RangeEntry::new(0x1B34, 0x1B34, MN),
    RangeEntry::new(0x1B35, 0x1B35, MC),
    RangeEntry::new(0x1B36, 0x1B3A, MN),
    RangeEntry::new(0x1B3B, 0x1B3B, MC),
    RangeEntry::new(0x1B3C, 0x1B3C, MN),
    RangeEntry::new(0x1B3D, 0x1B41, MC),
    RangeEntry::new(0x1B42, 0x1B42, MN),
    RangeEntry::new(0x1B43, 0x1B44, MC),
    RangeEntry::new(0x1B6B, 0x1B73, MN),
    RangeEntry::new(0x1B80, 0x1B81, MN),
    RangeEntry::new(0x1B82, 0x1B82, MC),
    RangeEntry::new(0x1BA1, 0x1BA1, MC),
    RangeEntry::new(0x1BA2, 0x1BA5, MN),
    RangeEntry::new(0x1BA6, 0x1BA7, MC),
    RangeEntry::new(0x1BA8, 0x1BA9, MN),
    RangeEntry::new(0x1BAA, 0x1BAA, MC),
    RangeEntry::new(0x1BAB, 0x1BAD, MN),
    RangeEntry::new(0x1BE6, 0x1BE6, MN),
    RangeEntry::new(0x1BE7, 0x1BE7, MC),
    RangeEntry::new(0x1BE8, 0x1BE9, MN),
    RangeEntry::new(0x1BEA, 0x1BEC, MC),
    RangeEntry::new(0x1BED, 0x1BED, MN),
    RangeEntry::new(0x1BEE, 0x1BEE, MC),
    RangeEntry::new(0x1BEF, 0x1BF1, MN),
    RangeEntry::new(0x1BF2, 0x1BF3, MC),
    RangeEntry::new(0x1C24, 0x1C2B, MC),
    RangeEntry::new(0x1C2C, 0x1C33, MN),
    RangeEntry::new(0x1C34, 0x1C35, MC),
    RangeEntry::new(0x1C36, 0x1C37, MN),
    RangeEntry::new(0x1CD0, 0x1CD2, MN),
    RangeEntry::new(0x1CD4, 0x1CE0, MN),
    RangeEntry::new(0x1CE1, 0x1CE1, MC),
    RangeEntry::new(0x1CE2, 0x1CE8, MN),
    RangeEntry::new(0x1CED, 0x1CED, MN),
    RangeEntry::new(0x1CF4, 0x1CF4, MN),
    RangeEntry::new(0x1CF7, 0x1CF7, MC),
    RangeEntry::new(0x1CF8, 0x1CF9, MN),
    RangeEntry::new(0x1DC0, 0x1DFF, MN),
    RangeEntry::new(0x20D0, 0x20F0, MN),
    RangeEntry::new(0x2CEF, 0x2CF1, MN),
    RangeEntry::new(0x2D7F, 0x2D7F, MN),
    RangeEntry::new(0x2DE0, 0x2DFF, MN),
    RangeEntry::new(0x302A, 0x302D, MN),
    RangeEntry::new(0x302E, 0x302F, MC),
    RangeEntry::new(0x3099, 0x309A, MN),
    RangeEntry::new(0xA66F, 0xA672, MN),
    RangeEntry::new(0xA674, 0xA67D, MN),
    RangeEntry::new(0xA69E, 0xA69F, MN),
    RangeEntry::new(0xA6F0, 0xA6F1, MN),
    RangeEntry::new(0xA802, 0xA802, MN),
    RangeEntry::new(0xA806, 0xA806, MN),
    RangeEntry::new(0xA80B, 0xA80B, MN),
    RangeEntry::new(0xA823, 0xA824, MC),
    RangeEntry::new(0xA825, 0xA826, MN),
    RangeEntry::new(0xA827, 0xA827, MC),
    RangeEntry::new(0xA82C, 0xA82C, MN),
    RangeEntry::new(0xA880, 0xA881, MC),
    RangeEntry::new(0xA8B4, 0xA8C3, MC),
    RangeEntry::new(0xA8C4, 0xA8C5, MN),
    RangeEntry::new(0xA8E0, 0xA8F1, MN),
    RangeEntry::new(0xA8FF, 0xA8FF, MN),
    RangeEntry::new(0xA926, 0xA92D, MN),
    RangeEntry::new(0xA947, 0xA951, MN),
    RangeEntry::new(0xA952, 0xA953, MC),
    RangeEntry::new(0xA980, 0xA982, MN),
    RangeEntry::new(0xA983, 0xA983, MC),
    RangeEntry::new(0xA9B3, 0xA9B3, MN),
    RangeEntry::new(0xA9B4, 0xA9B5, MC),
    RangeEntry::new(0xA9B6, 0xA9B9, MN),
    RangeEntry::new(0xA9BA, 0xA9BB, MC),
    RangeEntry::new(0xA9BC, 0xA9BD, MN),
    RangeEntry::new(0xA9BE, 0xA9C0, MC),
    RangeEntry::new(0xA9E5, 0xA9E5, MN),
    RangeEntry::new(0xAA29, 0xAA2E, MN),
    RangeEntry::new(0xAA2F, 0xAA30, MC),
    RangeEntry::new(0xAA31, 0xAA32, MN),
    RangeEntry::new(0xAA33, 0xAA34, MC),
    RangeEntry::new(0xAA35, 0xAA36, MN),
    RangeEntry::new(0xAA43, 0xAA43, MN),
    RangeEntry::new(0xAA4C, 0xAA4C, MN),
    RangeEntry::new(0xAA4D, 0xAA4D, MC),
    RangeEntry::new(0xAA7B, 0xAA7B, MC),
    RangeEntry::new(0xAA7C, 0xAA7C, MN),
    RangeEntry::new(0xAA7D, 0xAA7D, MC),
    RangeEntry::new(0xAAB0, 0xAAB0, MN),
    RangeEntry::new(0xAAB2, 0xAAB4, MN),
    RangeEntry::new(0xAAB7, 0xAAB8, MN),
    RangeEntry::new(0xAABE, 0xAABF, MN),
    RangeEntry::new(0xAAC1, 0xAAC1, MN),
    RangeEntry::new(0xAAEB, 0xAAEB, MC),
    RangeEntry::new(0xAAEC, 0xAAED, MN),
    RangeEntry::new(0xAAEE, 0xAAEF, MC),
    RangeEntry::new(0xAAF5, 0xAAF5, MC),
    RangeEntry::new(0xAAF6, 0xAAF6, MN),
    RangeEntry::new(0xABE3, 0xABE4, MC),
    RangeEntry::new(0xABE5, 0xABE5, MN),
    RangeEntry::new(0xABE6, 0xABE7, MC),
    RangeEntry::new(0xABE8, 0xABE8, MN),
    RangeEntry::new(0xABE9, 0xABEA, MC),
    RangeEntry::new(0xABEC, 0xABEC, MC),
    RangeEntry::new(0xABED, 0xABED, MN),
    RangeEntry::new(0xFB1E, 0xFB1E, MN),
    RangeEntry::new(0xFE00, 0xFE0F, MN),
    RangeEntry::new(0xFE20, 0xFE2F, MN),
    RangeEntry::new(0x101FD, 0x101FD, MN),
    RangeEntry::new(0x102E0, 0x102E0, MN),
    RangeEntry::new(0x10376, 0x1037A, MN),
    RangeEntry::new(0x10A01, 0x10A03, MN),
    RangeEntry::new(0x10A05, 0x10A06, MN),
    RangeEntry::new(0x10A0C, 0x10A0F, MN),
    RangeEntry::new(0x10A38, 0x10A3A, MN),
    RangeEntry::new(0x10A3F, 0x10A3F, MN),
    RangeEntry::new(0x10AE5, 0x10AE6, MN),
    RangeEntry::new(0x10D24, 0x10D27, MN),
    RangeEntry::new(0x10EAB, 0x10EAC, MN),
    RangeEntry::new(0x10F46, 0x10F50, MN),
    RangeEntry::new(0x10F82, 0x10F85, MN),
    RangeEntry::new(0x11000, 0x11000, MC),
    RangeEntry::new(0x11001, 0x11001, MN),
    RangeEntry::new(0x11002, 0x11002, MC),
    RangeEntry::new(0x11038, 0x11046, MN),
    RangeEntry::new(0x11070, 0x11070, MN),
    RangeEntry::new(0x11073, 0x11074, MN),
    RangeEntry::new(0x1107F, 0x11081, MN),
    RangeEntry::new(0x11082, 0x11082, MC),
    RangeEntry::new(0x110B0, 0x110B2, MC),
    RangeEntry::new(0x110B3, 0x110B6, MN),
    RangeEntry::new(0x110B7, 0x110B8, MC),
    RangeEntry::new(0x110B9, 0x110BA, MN),
    RangeEntry::new(0x110C2, 0x110C2, MN),
    RangeEntry::new(0x11100, 0x11102, MN),
    RangeEntry::new(0x11127, 0x1112B, MN),
    RangeEntry::new(0x1112C, 0x1112C, MC),
    RangeEntry::new(0x1112D, 0x11134, MN),
    RangeEntry::new(0x11145, 0x11146, MC),
    RangeEntry::new(0x11173, 0x11173, MN),
    RangeEntry::new(0x11180, 0x11181, MN),
    RangeEntry::new(0x11182, 0x11182, MC),
    RangeEntry::new(0x111B3, 0x111B5, MC),
    RangeEntry::new(0x111B6, 0x111BE, MN),
    RangeEntry::new(0x111BF, 0x111C0, MC),
    RangeEntry::new(0x111C9, 0x111CC, MN),
    RangeEntry::new(0x111CE, 0x111CE, MC),
    RangeEntry::new(0x111CF, 0x111CF, MN),
    RangeEntry::new(0x1122C, 0x1122E, MC),
    RangeEntry::new(0x1122F, 0x11231, MN),
    RangeEntry::new(0x11232, 0x11233, MC),
    RangeEntry::new(0x11234, 0x11234, MN),
    RangeEntry::new(0x11235, 0x11235, MC),
    RangeEntry::new(0x11236, 0x11237, MN),
    RangeEntry::new(0x1123E, 0x1123E, MN),
    RangeEntry::new(0x112DF, 0x112DF, MN),
    RangeEntry::new(0x112E0, 0x112E2, MC),
    RangeEntry::new(0x112E3, 0x112EA, MN),
    RangeEntry::new(0x11300, 0x11301, MN),
    RangeEntry::new(0x11302, 0x11303, MC),
    RangeEntry::new(0x1133B, 0x1133C, MN),
    RangeEntry::new(0x1133E, 0x1133F, MC),
    RangeEntry::new(0x11340, 0x11340, MN),
    RangeEntry::new(0x11341, 0x11344, MC),
    RangeEntry::new(0x11347, 0x11348, MC),
    RangeEntry::new(0x1134B, 0x1134D, MC),
    RangeEntry::new(0x11357, 0x11357, MC),
    RangeEntry::new(0x11362, 0x11363, MC),
    RangeEntry::new(0x11366, 0x1136C, MN),
    RangeEntry::new(0x11370, 0x11374, MN),
    RangeEntry::new(0x11435, 0x11437, MC),
    RangeEntry::new(0x11438, 0x1143F, MN),
    RangeEntry::new(0x11440, 0x11441, MC),
    RangeEntry::new(0x11442, 0x11444, MN),
    RangeEntry::new(0x11445, 0x11445, MC),
    RangeEntry::new(0x11446, 0x11446, MN),
    RangeEntry::new(0x1145E, 0x1145E, MN),
    RangeEntry::new(0x114B0, 0x114B2, MC),
    RangeEntry::new(0x114B3, 0x114B8, MN),
    RangeEntry::new(0x114B9, 0x114B9, MC),
    RangeEntry::new(0x114BA, 0x114BA, MN),
    RangeEntry::new(0x114BB, 0x114BE, MC),
    RangeEntry::new(0x114BF, 0x114C0, MN),
    RangeEntry::new(0x114C1, 0x114C1, MC),
    RangeEntry::new(0x114C2, 0x114C3, MN),
    RangeEntry::new(0x115AF, 0x115B1, MC),
    RangeEntry::new(0x115B2, 0x115B5, MN),
    RangeEntry::new(0x115B8, 0x115BB, MC),
    RangeEntry::new(0x115BC, 0x115BD, MN),
    RangeEntry::new(0x115BE, 0x115BE, MC),
    RangeEntry::new(0x115BF, 0x115C0, MN),
    RangeEntry::new(0x115DC, 0x115DD, MN),
    RangeEntry::new(0x11630, 0x11632, MC),
    RangeEntry::new(0x11633, 0x1163A, MN),
    RangeEntry::new(0x1163B, 0x1163C, MC),
    RangeEntry::new(0x1163D, 0x1163D, MN),
    RangeEntry::new(0x1163E, 0x1163E, MC),
    RangeEntry::new(0x1163F, 0x11640, MN),
    RangeEntry::new(0x116AB, 0x116AB, MN),
    RangeEntry::new(0x116AC, 0x116AC, MC),
    RangeEntry::new(0x116AD, 0x116AD, MN),
    RangeEntry::new(0x116AE, 0x116AF, MC),
    RangeEntry::new(0x116B0, 0x116B5, MN),
    RangeEntry::new(0x116B6, 0x116B6, MC),
    RangeEntry::new(0x116B7, 0x116B7, MN),
    RangeEntry::new(0x1171D, 0x1171F, MN),
    RangeEntry::new(0x11720, 0x11721, MC),
    RangeEntry::new(0x11722, 0x11725, MN),
    RangeEntry::new(0x11726, 0x11726, MC),
    RangeEntry::new(0x11727, 0x1172B, MN),
    RangeEntry::new(0x1182C, 0x1182E, MC),
    RangeEntry::new(0x1182F, 0x11837, MN),
    RangeEntry::new(0x11838, 0x11838, MC),
    RangeEntry::new(0x11839, 0x1183A, MN),
    RangeEntry::new(0x11930, 0x11935, MC),
    RangeEntry::new(0x11937, 0x11938, MC),
    RangeEntry::new(0x1193B, 0x1193C, MN),
    RangeEntry::new(0x1193D, 0x1193D, MC),
    RangeEntry::new(0x1193E, 0x1193E, MN),
    RangeEntry::new(0x11940, 0x11940, MC),
    RangeEntry::new(0x11942, 0x11942, MC),
    RangeEntry::new(0x11943, 0x11943, MN),
    RangeEntry::new(0x119D1, 0x119D3, MC),
    RangeEntry::new(0x119D4, 0x119D7, MN),
    RangeEntry::new(0x119DA, 0x119DB, MN),
    RangeEntry::new(0x119DC, 0x119DF, MC),
    RangeEntry::new(0x119E0, 0x119E0, MN),
    RangeEntry::new(0x119E4, 0x119E4, MC),
    RangeEntry::new(0x11A01, 0x11A0A, MN),
    RangeEntry::new(0x11A33, 0x11A38, MN),
    RangeEntry::new(0x11A39, 0x11A39, MC),
    RangeEntry::new(0x11A3B, 0x11A3E, MN),
    RangeEntry::new(0x11A47, 0x11A47, MN),
    RangeEntry::new(0x11A51, 0x11A56, MN),
    RangeEntry::new(0x11A57, 0x11A58, MC),
    RangeEntry::new(0x11A59, 0x11A5B, MN),
    RangeEntry::new(0x11A8A, 0x11A96, MN),
    RangeEntry::new(0x11A97, 0x11A97, MC),
    RangeEntry::new(0x11A98, 0x11A99, MN),
    RangeEntry::new(0x11C2F, 0x11C2F, MC),
    RangeEntry::new(0x11C30, 0x11C36, MN),
    RangeEntry::new(0x11C38, 0x11C3D, MN),
    RangeEntry::new(0x11C3E, 0x11C3E, MC),
    RangeEntry::new(0x11C3F, 0x11C3F, MN),
    RangeEntry::new(0x11C92, 0x11CA7, MN),
    RangeEntry::new(0x11CA9, 0x11CA9, MC),
    RangeEntry::new(0x11CAA, 0x11CB0, MN),
    RangeEntry::new(0x11CB1, 0x11CB1, MC),
    RangeEntry::new(0x11CB2, 0x11CB3, MN),
    RangeEntry::new(0x11CB4, 0x11CB4, MC),
    RangeEntry::new(0x11CB5, 0x11CB6, MN),
    RangeEntry::new(0x11D31, 0x11D36, MN),
    RangeEntry::new(0x11D3A, 0x11D3A, MN),
    RangeEntry::new(0x11D3C, 0x11D3D, MN),
    RangeEntry::new(0x11D3F, 0x11D45, MN),
    RangeEntry::new(0x11D47, 0x11D47, MN),
    RangeEntry::new(0x11D8A, 0x11D8E, MC),
    RangeEntry::new(0x11D90, 0x11D91, MN),
    RangeEntry::new(0x11D93, 0x11D94, MC),
    RangeEntry::new(0x11D95, 0x11D95, MN),
    RangeEntry::new(0x11D96, 0x11D96, MC),
    RangeEntry::new(0x11D97, 0x11D97, MN),
    RangeEntry::new(0x11EF3, 0x11EF4, MN),
    RangeEntry::new(0x11EF5, 0x11EF6, MC),
    RangeEntry::new(0x16AF0, 0x16AF4, MN),
    RangeEntry::new(0x16B30, 0x16B36, MN),
    RangeEntry::new(0x16F4F, 0x16F4F, MN),
    RangeEntry::new(0x16F51, 0x16F87, MC),
    RangeEntry::new(0x16F8F, 0x16F92, MN),
    RangeEntry::new(0x16FE4, 0x16FE4, MN),
    RangeEntry::new(0x16FF0, 0x16FF1, MC),
    RangeEntry::new(0x1BC9D, 0x1BC9E, MN),
    RangeEntry::new(0x1CF00, 0x1CF2D, MN),
    RangeEntry::new(0x1CF30, 0x1CF46, MN),
    RangeEntry::new(0x1D165, 0x1D166, MC),
    RangeEntry::new(0x1D167, 0x1D169, MN),
    RangeEntry::new(0x1D16D, 0x1D172, MC),
    RangeEntry::new(0x1D17B, 0x1D182, MN),
    RangeEntry::new(0x1D185, 0x1D18B, MN),
    RangeEntry::new(0x1D1AA, 0x1D1AD, MN),
    RangeEntry::new(0x1D242, 0x1D244, MN),
    RangeEntry::new(0x1DA00, 0x1DA36, MN),
    RangeEntry::new(0x1DA3B, 0x1DA6C, MN),
    RangeEntry::new(0x1DA75, 0x1DA75, MN),
    RangeEntry::new(0x1DA84, 0x1DA84, MN),
    RangeEntry::new(0x1DA9B, 0x1DA9F, MN),
    RangeEntry::new(0x1DAA1, 0x1DAAF, MN),
    RangeEntry::new(0x1E000, 0x1E006, MN),
    RangeEntry::new(0x1E008, 0x1E018, MN),
    RangeEntry::new(0x1E01B, 0x1E021, MN),
    RangeEntry::new(0x1E023, 0x1E024, MN),
    RangeEntry::new(0x1E026, 0x1E02A, MN),
    RangeEntry::new(0x1E130, 0x1E136, MN),
    RangeEntry::new(0x1E2AE, 0x1E2AE, MN),
    RangeEntry::new(0x1E2EC, 0x1E2EF, MN),
    RangeEntry::new(0x1E8D0, 0x1E8D6, MN),
    RangeEntry::new(0x1E944, 0x1E94A, MN),
    RangeEntry::new(0x1F3FB, 0x1F3FF, MN),
    RangeEntry::new(0xE0100, 0xE01EF, MN),
];
