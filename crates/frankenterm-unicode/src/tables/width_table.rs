// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use crate::range_table::RangeEntry;
use crate::width::WidthClass;

const F: WidthClass = WidthClass::Fullwidth;
const H: WidthClass = WidthClass::Halfwidth;
const W: WidthClass = WidthClass::Wide;
const NA: WidthClass = WidthClass::Narrow;
const A: WidthClass = WidthClass::Ambiguous;
const N: WidthClass = WidthClass::Neutral;

/// East Asian Width ranges. Code points outside every range are [`WidthClass::Halfwidth`].
pub static EAST_ASIAN_WIDTH: &[RangeEntry<WidthClass>] = &[
    RangeEntry::new(0x0000, 0x001F, N),
    RangeEntry::new(0x0020, 0x007E, NA),
    RangeEntry::new(0x007F, 0x00A0, N),
    RangeEntry::new(0x00A1, 0x00A1, A),
    RangeEntry::new(0x00A2, 0x00A3, NA),
    RangeEntry::new(0x00A4, 0x00A4, A),
    RangeEntry::new(0x00A5, 0x00A6, NA),
    RangeEntry::new(0x00A7, 0x00A8, A),
    RangeEntry::new(0x00A9, 0x00A9, N),
    RangeEntry::new(0x00AA, 0x00AA, A),
    RangeEntry::new(0x00AB, 0x00AB, N),
    RangeEntry::new(0x00AC, 0x00AC, NA),
    RangeEntry::new(0x00AD, 0x00AE, A),
    RangeEntry::new(0x00AF, 0x00AF, NA),
    RangeEntry::new(0x00B0, 0x00B4, A),
    RangeEntry::new(0x00B5, 0x00B5, N),
    RangeEntry::new(0x00B6, 0x00BA, A),
    RangeEntry::new(0x00BB, 0x00BB, N),
    RangeEntry::new(0x00BC, 0x00BF, A),
    RangeEntry::new(0x00C0, 0x00C5, N),
    RangeEntry::new(0x00C6, 0x00C6, A),
    RangeEntry::new(0x00C7, 0x00CF, N),
    RangeEntry::new(0x00D0, 0x00D0, A),
    RangeEntry::new(0x00D1, 0x00D6, N),
    RangeEntry::new(0x00D7, 0x00D8, A),
    RangeEntry::new(0x00D9, 0x00DD, N),
    RangeEntry::new(0x00DE, 0x00E1, A),
    RangeEntry::new(0x00E2, 0x00E5, N),
    RangeEntry::new(0x00E6, 0x00E6, A),
    RangeEntry::new(0x00E7, 0x00E7, N),
    RangeEntry::new(0x00E8, 0x00EA, A),
    RangeEntry::new(0x00EB, 0x00EB, N),
    RangeEntry::new(0x00EC, 0x00ED, A),
    RangeEntry::new(0x00EE, 0x00EF, N),
    RangeEntry::new(0x00F0, 0x00F0, A),
    RangeEntry::new(0x00F1, 0x00F1, N),
    RangeEntry::new(0x00F2, 0x00F3, A),
    RangeEntry::new(0x00F4, 0x00F6, N),
    RangeEntry::new(0x00F7, 0x00FA, A),
    RangeEntry::new(0x00FB, 0x00FB, N),
    RangeEntry::new(0x00FC, 0x00FC, A),
    RangeEntry::new(0x00FD, 0x00FD, N),
    RangeEntry::new(0x00FE, 0x00FE, A),
    RangeEntry::new(0x00FF, 0x0100, N),
    RangeEntry::new(0x0101, 0x0101, A),
    RangeEntry::new(0x0102, 0x0110, N),
    RangeEntry::new(0x0111, 0x0111, A),
    RangeEntry::new(0x0112, 0x0112, N),
    RangeEntry::new(0x0113, 0x0113, A),
    RangeEntry::new(0x0114, 0x011A, N),
    RangeEntry::new(0x011B, 0x011B, A),
    RangeEntry::new(0x011C, 0x0125, N),
    RangeEntry::new(0x0126, 0x0127, A),
    RangeEntry::new(0x0128, 0x012A, N),
    RangeEntry::new(0x012B, 0x012B, A),
    RangeEntry::new(0x012C, 0x0130, N),
    RangeEntry::new(0x0131, 0x0133, A),
    RangeEntry::new(0x0134, 0x0137, N),
    RangeEntry::new(0x0138, 0x0138, A),
    RangeEntry::new(0x0139, 0x013E, N),
    RangeEntry::new(0x013F, 0x0142, A),
    RangeEntry::new(0x0143, 0x0143, N),
    RangeEntry::new(0x0144, 0x0144, A),
    RangeEntry::new(0x0145, 0x0147, N),
    RangeEntry::new(0x0148, 0x014B, A),
    RangeEntry::new(0x014C, 0x014C, N),
    RangeEntry::new(0x014D, 0x014D, A),
    RangeEntry::new(0x014E, 0x0151, N),
    RangeEntry::new(0x0152, 0x0153, A),
    RangeEntry::new(0x0154, 0x0165, N),
    RangeEntry::new(0x0166, 0x0167, A),
    RangeEntry::new(0x0168, 0x016A, N),
    RangeEntry::new(0x016B, 0x016B, A),
    RangeEntry::new(0x016C, 0x01CD, N),
    RangeEntry::new(0x01CE, 0x01CE, A),
    RangeEntry::new(0x01CF, 0x01CF, N),
    RangeEntry::new(0x01D0, 0x01D0, A),
    RangeEntry::new(0x01D1, 0x01D1, N),
    RangeEntry::new(0x01D2, 0x01D2, A),
    RangeEntry::new(0x01D3, 0x01D3, N),
    RangeEntry::new(0x01D4, 0x01D4, A),
    RangeEntry::new(0x01D5, 0x01D5, N),
    RangeEntry::new(0x01D6, 0x01D6, A),
    RangeEntry::new(0x01D7, 0x01D7, N),
    RangeEntry::new(0x01D8, 0x01D8, A),
    RangeEntry::new(0x01D9, 0x01D9, N),
    RangeEntry::new(0x01DA, 0x01DA, A),
    RangeEntry::new(0x01DB, 0x01DB, N),
    RangeEntry::new(0x01DC, 0x01DC, A),
    RangeEntry::new(0x01DD, 0x0250, N),
    RangeEntry::new(0x0251, 0x0251, A),
    RangeEntry::new(0x0252, 0x0260, N),
    RangeEntry::new(0x0261, 0x0261, A),
    RangeEntry::new(0x0262, 0x02C3, N),
    RangeEntry::new(0x02C4, 0x02C4, A),
    RangeEntry::new(0x02C5, 0x02C6, N),
    RangeEntry::new(0x02C7, 0x02C7, A),
    RangeEntry::new(0x02C8, 0x02C8, N),
    RangeEntry::new(0x02C9, 0x02CB, A),
    RangeEntry::new(0x02CC, 0x02CC, N),
    RangeEntry::new(0x02CD, 0x02CD, A),
    RangeEntry::new(0x02CE, 0x02CF, N),
    RangeEntry::new(0x02D0, 0x02D0, A),
    RangeEntry::new(0x02D1, 0x02D7, N),
    RangeEntry::new(0x02D8, 0x02DB, A),
    RangeEntry::new(0x02DC, 0x02DC, N),
    RangeEntry::new(0x02DD, 0x02DD, A),
    RangeEntry::new(0x02DE, 0x02DE, N),
    RangeEntry::new(0x02DF, 0x02DF, A),
    RangeEntry::new(0x02E0, 0x02FF, N),
    RangeEntry::new(0x0300, 0x036F, A),
    RangeEntry::new(0x0370, 0x0377, N),
    RangeEntry::new(0x037A, 0x037F, N),
    RangeEntry::new(0x0384, 0x038A, N),
    RangeEntry::new(0x038C, 0x038C, N),
    RangeEntry::new(0x038E, 0x0390, N),
    RangeEntry::new(0x0391, 0x03A1, A),
    RangeEntry::new(0x03A3, 0x03A9, A),
    RangeEntry::new(0x03AA, 0x03B0, N),
    RangeEntry::new(0x03B1, 0x03C1, A),
    RangeEntry::new(0x03C2, 0x03C2, N),
    RangeEntry::new(0x03C3, 0x03C9, A),
    RangeEntry::new(0x03CA, 0x0400, N),
    RangeEntry::new(0x0401, 0x0401, A),
    RangeEntry::new(0x0402, 0x040F, N),
    RangeEntry::new(0x0410, 0x044F, A),
    RangeEntry::new(0x0450, 0x0450, N),
    RangeEntry::new(0x0451, 0x0451, A),
    RangeEntry::new(0x0452, 0x052F, N),
    RangeEntry::new(0x0531, 0x0556, N),
    RangeEntry::new(0x0559, 0x058A, N),
    RangeEntry::new(0x058D, 0x058F, N),
    RangeEntry::new(0x0591, 0x05C7, N),
    RangeEntry::new(0x05D0, 0x05EA, N),
    RangeEntry::new(0x05EF, 0x05F4, N),
    RangeEntry::new(0x0600, 0x070D, N),
    RangeEntry::new(0x070F, 0x074A, N),
    RangeEntry::new(0x074D, 0x07B1, N),
    RangeEntry::new(0x07C0, 0x07FA, N),
    RangeEntry::new(0x07FD, 0x082D, N),
    RangeEntry::new(0x0830, 0x083E, N),
    RangeEntry::new(0x0840, 0x085B, N),
    RangeEntry::new(0x085E, 0x085E, N),
    RangeEntry::new(0x0860, 0x086A, N),
    RangeEntry::new(0x0870, 0x088E, N),
    RangeEntry::new(0x0890, 0x0891, N),
    RangeEntry::new(0x0898, 0x0983, N),
    RangeEntry::new(0x0985, 0x098C, N),
    RangeEntry::new(0x098F, 0x0990, N),
    RangeEntry::new(0x0993, 0x09A8, N),
    RangeEntry::new(0x09AA, 0x09B0, N),
    RangeEntry::new(0x09B2, 0x09B2, N),
    RangeEntry::new(0x09B6, 0x09B9, N),
    RangeEntry::new(0x09BC, 0x09C4, N),
    RangeEntry::new(0x09C7, 0x09C8, N),
    RangeEntry::new(0x09CB, 0x09CE, N),
    RangeEntry::new(0x09D7, 0x09D7, N),
    RangeEntry::new(0x09DC, 0x09DD, N),
    RangeEntry::new(0x09DF, 0x09E3, N),
    RangeEntry::new(0x09E6, 0x09FE, N),
    RangeEntry::new(0x0A01, 0x0A03, N),
    RangeEntry::new(0x0A05, 0x0A0A, N),
    RangeEntry::new(0x0A0F, 0x0A10, N),
    RangeEntry::new(0x0A13, 0x0A28, N),
    RangeEntry::new(0x0A2A, 0x0A30, N),
    RangeEntry::new(0x0A32, 0x0A33, N),
    RangeEntry::new(0x0A35, 0x0A36, N),
    RangeEntry::new(0x0A38, 0x0A39, N),
    RangeEntry::new(0x0A3C, 0x0A3C, N),
    RangeEntry::new(0x0A3E, 0x0A42, N),
    RangeEntry::new(0x0A47, 0x0A48, N),
    RangeEntry::new(0x0A4B, 0x0A4D, N),
    RangeEntry::new(0x0A51, 0x0A51, N),
    RangeEntry::new(0x0A59, 0x0A5C, N),
    RangeEntry::new(0x0A5E, 0x0A5E, N),
    RangeEntry::new(0x0A66, 0x0A76, N),
    RangeEntry::new(0x0A81, 0x0A83, N),
    RangeEntry::new(0x0A85, 0x0A8D, N),
    RangeEntry::new(0x0A8F, 0x0A91, N),
    RangeEntry::new(0x0A93, 0x0AA8, N),
    RangeEntry::new(0x0AAA, 0x0AB0, N),
    RangeEntry::new(0x0AB2, 0x0AB3, N),
    RangeEntry::new(0x0AB5, 0x0AB9, N),
    RangeEntry::new(0x0ABC, 0x0AC5, N),
    RangeEntry::new(0x0AC7, 0x0AC9, N),
    RangeEntry::new(0x0ACB, 0x0ACD, N),
    RangeEntry::new(0x0AD0, 0x0AD0, N),
    RangeEntry::new(0x0AE0, 0x0AE3, N),
    RangeEntry::new(0x0AE6, 0x0AF1, N),
    RangeEntry::new(0x0AF9, 0x0AFF, N),
    RangeEntry::new(0x0B01, 0x0B03, N),
    RangeEntry::new(0x0B05, 0x0B0C, N),
    RangeEntry::new(0x0B0F, 0x0B10, N),
    RangeEntry::new(0x0B13, 0x0B28, N),
    RangeEntry::new(0x0B2A, 0x0B30, N),
    RangeEntry::new(0x0B32, 0x0B33, N),
    RangeEntry::new(0x0B35, 0x0B39, N),
    RangeEntry::new(0x0B3C, 0x0B44, N),
    RangeEntry::new(0x0B47, 0x0B48, N),
    RangeEntry::new(0x0B4B, 0x0B4D, N),
    RangeEntry::new(0x0B55, 0x0B57, N),
    RangeEntry::new(0x0B5C, 0x0B5D, N),
    RangeEntry::new(0x0B5F, 0x0B63, N),
    RangeEntry::new(0x0B66, 0x0B77, N),
    RangeEntry::new(0x0B82, 0x0B83, N),
    RangeEntry::new(0x0B85, 0x0B8A, N),
    RangeEntry::new(0x0B8E, 0x0B90, N),
    RangeEntry::new(0x0B92, 0x0B95, N),
    RangeEntry::new(0x0B99, 0x0B9A, N),
    RangeEntry::new(0x0B9C, 0x0B9C, N),
    RangeEntry::new(0x0B9E, 0x0B9F, N),
    RangeEntry::new(0x0BA3, 0x0BA4, N),
    RangeEntry::new(0x0BA8, 0x0BAA, N),
    RangeEntry::new(0x0BAE, 0x0BB9, N),
    RangeEntry::new(0x0BBE, 0x0BC2, N),
    RangeEntry::new(0x0BC6, 0x0BC8, N),
    RangeEntry::new(0x0BCA, 0x0BCD, N),
    RangeEntry::new(0x0BD0, 0x0BD0, N),
    RangeEntry::new(0x0BD7, 0x0BD7, N),
    RangeEntry::new(0x0BE6, 0x0BFA, N),
    RangeEntry::new(0x0C00, 0x0C0C, N),
    RangeEntry::new(0x0C0E, 0x0C10, N),
    RangeEntry::new(0x0C12, 0x0C28, N),
    RangeEntry::new(0x0C2A, 0x0C39, N),
    RangeEntry::new(0x0C3C, 0x0C44, N),
    RangeEntry::new(0x0C46, 0x0C48, N),
    RangeEntry::new(0x0C4A, 0x0C4D, N),
    RangeEntry::new(0x0C55, 0x0C56, N),
    RangeEntry::new(0x0C58, 0x0C5A, N),
    RangeEntry::new(0x0C5D, 0x0C5D, N),
    RangeEntry::new(0x0C60, 0x0C63, N),
    RangeEntry::new(0x0C66, 0x0C6F, N),
    RangeEntry::new(0x0C77, 0x0C8C, N),
    RangeEntry::new(0x0C8E, 0x0C90, N),
    RangeEntry::new(0x0C92, 0x0CA8, N),
    RangeEntry::new(0x0CAA, 0x0CB3, N),
    RangeEntry::new(0x0CB5, 0x0CB9, N),
    RangeEntry::new(0x0CBC, 0x0CC4, N),
    RangeEntry::new(0x0CC6, 0x0CC8, N),
    RangeEntry::new(0x0CCA, 0x0CCD, N),
    RangeEntry::new(0x0CD5, 0x0CD6, N),
    RangeEntry::new(0x0CDD, 0x0CDE, N),
    RangeEntry::new(0x0CE0, 0x0CE3, N),
    RangeEntry::new(0x0CE6, 0x0CEF, N),
    RangeEntry::new(0x0CF1, 0x0CF2, N),
    RangeEntry::new(0x0D00, 0x0D0C, N),
    RangeEntry::new(0x0D0E, 0x0D10, N),
    RangeEntry::new(0x0D12, 0x0D44, N),
    RangeEntry::new(0x0D46, 0x0D48, N),
    RangeEntry::new(0x0D4A, 0x0D4F, N),
    RangeEntry::new(0x0D54, 0x0D63, N),
    RangeEntry::new(0x0D66, 0x0D7F, N),
    RangeEntry::new(0x0D81, 0x0D83, N),
    RangeEntry::new(0x0D85, 0x0D96, N),
    RangeEntry::new(0x0D9A, 0x0DB1, N),
    RangeEntry::new(0x0DB3, 0x0DBB, N),
    RangeEntry::new(0x0DBD, 0x0DBD, N),
    RangeEntry::new(0x0DC0, 0x0DC6, N),
    RangeEntry::new(0x0DCA, 0x0DCA, N),
    RangeEntry::new(0x0DCF, 0x0DD4, N),
    RangeEntry::new(0x0DD6, 0x0DD6, N),
    RangeEntry::new(0x0DD8, 0x0DDF, N),
    RangeEntry::new(0x0DE6, 0x0DEF, N),
    RangeEntry::new(0x0DF2, 0x0DF4, N),
    RangeEntry::new(0x0E01, 0x0E3A, N),
    RangeEntry::new(0x0E3F, 0x0E5B, N),
    RangeEntry::new(0x0E81, 0x0E82, N),
    RangeEntry::new(0x0E84, 0x0E84, N),
    RangeEntry::new(0x0E86, 0x0E8A, N),
    RangeEntry::new(0x0E8C, 0x0EA3, N),
    RangeEntry::new(0x0EA5, 0x0EA5, N),
    RangeEntry::new(0x0EA7, 0x0EBD, N),
    RangeEntry::new(0x0EC0, 0x0EC4, N),
    RangeEntry::new(0x0EC6, 0x0EC6, N),
    RangeEntry::new(0x0EC8, 0x0ECD, N),
    RangeEntry::new(0x0ED0, 0x0ED9, N),
    RangeEntry::new(0x0EDC, 0x0EDF, N),
    RangeEntry::new(0x0F00, 0x0F47, N),
    RangeEntry::new(0x0F49, 0x0F6C, N),
    RangeEntry::new(0x0F71, 0x0F97, N),
    RangeEntry::new(0x0F99, 0x0FBC, N),
    RangeEntry::new(0x0FBE, 0x0FCC, N),
    RangeEntry::new(0x0FCE, 0x0FDA, N),
    RangeEntry::new(0x1000, 0x10C5, N),
    RangeEntry::new(0x10C7, 0x10C7, N),
    RangeEntry::new(0x10CD, 0x10CD, N),
    RangeEntry::new(0x10D0, 0x10FF, N),
    RangeEntry::new(0x1100, 0x115F, W),
    RangeEntry::new(0x1160, 0x1248, N),
    RangeEntry::new(0x124A, 0x124D, N),
    RangeEntry::new(0x1250, 0x1256, N),
    RangeEntry::new(0x1258, 0x1258, N),
    RangeEntry::new(0x125A, 0x125D, N),
    RangeEntry::new(0x1260, 0x1288, N),
    RangeEntry::new(0x128A, 0x128D, N),
    RangeEntry::new(0x1290, 0x12B0, N),
    RangeEntry::new(0x12B2, 0x12B5, N),
    RangeEntry::new(0x12B8, 0x12BE, N),
    RangeEntry::new(0x12C0, 0x12C0, N),
    RangeEntry::new(0x12C2, 0x12C5, N),
    RangeEntry::new(0x12C8, 0x12D6, N),
    RangeEntry::new(0x12D8, 0x1310, N),
    RangeEntry::new(0x1312, 0x1315, N),
    RangeEntry::new(0x1318, 0x135A, N),
    RangeEntry::new(0x135D, 0x137C, N),
    RangeEntry::new(0x1380, 0x1399, N),
    RangeEntry::new(0x13A0, 0x13F5, N),
    RangeEntry::new(0x13F8, 0x13FD, N),
    RangeEntry::new(0x1400, 0x169C, N),
    RangeEntry::new(0x16A0, 0x16F8, N),
    RangeEntry::new(0x1700, 0x1715, N),
    RangeEntry::new(0x171F, 0x1736, N),
    RangeEntry::new(0x1740, 0x1753, N),
    RangeEntry::new(0x1760, 0x176C, N),
    RangeEntry::new(0x176E, 0x1770, N),
    RangeEntry::new(0x1772, 0x1773, N),
    RangeEntry::new(0x1780, 0x17DD, N),
    RangeEntry::new(0x17E0, 0x17E9, N),
    RangeEntry::new(0x17F0, 0x17F9, N),
    RangeEntry::new(0x1800, 0x1819, N),
    RangeEntry::new(0x1820, 0x1878, N),
    RangeEntry::new(0x1880, 0x18AA, N),
    RangeEntry::new(0x18B0, 0x18F5, N),
    RangeEntry::new(0x1900, 0x191E, N),
    RangeEntry::new(0x1920, 0x192B, N),
    RangeEntry::new(0x1930, 0x193B, N),
    RangeEntry::new(0x1940, 0x1940, N),
    RangeEntry::new(0x1944, 0x196D, N),
    RangeEntry::new(0x1970, 0x1974, N),
    RangeEntry::new(0x1980, 0x19AB, N),
    RangeEntry::new(0x19B0, 0x19C9, N),
    RangeEntry::new(0x19D0, 0x19DA, N),
    RangeEntry::new(0x19DE, 0x1A1B, N),
    RangeEntry::new(0x1A1E, 0x1A5E, N),
    RangeEntry::new(0x1A60, 0x1A7C, N),
    RangeEntry::new(0x1A7F, 0x1A89, N),
    RangeEntry::new(0x1A90, 0x1A99, N),
    RangeEntry::new(0x1AA0, 0x1AAD, N),
    RangeEntry::new(0x1AB0, 0x1ACE, N),
    RangeEntry::new(0x1B00, 0x1B4C, N),
    RangeEntry::new(0x1B50, 0x1B7E, N),
    RangeEntry::new(0x1B80, 0x1BF3, N),
    RangeEntry::new(0x1BFC, 0x1C37, N),
    RangeEntry::new(0x1C3B, 0x1C49, N),
    RangeEntry::new(0x1C4D, 0x1C88, N),
    RangeEntry::new(0x1C90, 0x1CBA, N),
    RangeEntry::new(0x1CBD, 0x1CC7, N),
    RangeEntry::new(0x1CD0, 0x1CFA, N),
    RangeEntry::new(0x1D00, 0x1F15, N),
    RangeEntry::new(0x1F18, 0x1F1D, N),
    RangeEntry::new(0x1F20, 0x1F45, N),
    RangeEntry::new(0x1F48, 0x1F4D, N),
    RangeEntry::new(0x1F50, 0x1F57, N),
    RangeEntry::new(0x1F59, 0x1F59, N),
    RangeEntry::new(0x1F5B, 0x1F5B, N),
    RangeEntry::new(0x1F5D, 0x1F5D, N),
    RangeEntry::new(0x1F5F, 0x1F7D, N),
    RangeEntry::new(0x1F80, 0x1FB4, N),
    RangeEntry::new(0x1FB6, 0x1FC4, N),
    RangeEntry::new(0x1FC6, 0x1FD3, N),
    RangeEntry::new(0x1FD6, 0x1FDB, N),
    RangeEntry::new(0x1FDD, 0x1FEF, N),
    RangeEntry::new(0x1FF2, 0x1FF4, N),
    RangeEntry::new(0x1FF6, 0x1FFE, N),
    RangeEntry::new(0x2000, 0x200F, N),
    RangeEntry::new(0x2010, 0x2010, A),
    RangeEntry::new(0x2011, 0x2012, N),
    RangeEntry::new(0x2013, 0x2016, A),
    RangeEntry::new(0x2017, 0x2017, N),
    RangeEntry::new(0x2018, 0x2019, A),
    RangeEntry::new(0x201A, 0x201B, N),
    RangeEntry::new(0x201C, 0x201D, A),
    RangeEntry::new(0x201E, 0x201F, N),
    RangeEntry::new(0x2020, 0x2022, A),
    RangeEntry::new(0x2023, 0x2023, N),
    RangeEntry::new(0x2024, 0x2027, A),
    RangeEntry::new(0x2028, 0x202F, N),
    RangeEntry::new(0x2030, 0x2030, A),
    RangeEntry::new(0x2031, 0x2031, N),
    RangeEntry::new(0x2032, 0x2033, A),
    RangeEntry::new(0x2034, 0x2034, N),
    RangeEntry::new(0x2035, 0x2035, A),
    RangeEntry::new(0x2036, 0x203A, N),
    RangeEntry::new(0x203B, 0x203B, A),
    RangeEntry::new(0x203C, 0x203D, N),
    RangeEntry::new(0x203E, 0x203E, A),
    RangeEntry::new(0x203F, 0x2064, N),
    RangeEntry::new(0x2066, 0x2071, N),
    RangeEntry::new(0x2074, 0x2074, A),
    RangeEntry::new(0x2075, 0x207E, N),
    RangeEntry::new(0x207F, 0x207F, A),
    RangeEntry::new(0x2080, 0x2080, N),
    RangeEntry::new(0x2081, 0x2084, A),
    RangeEntry::new(0x2085, 0x208E, N),
    RangeEntry::new(0x2090, 0x209C, N),
    RangeEntry::new(0x20A0, 0x20A8, N),
    RangeEntry::new(0x20A9, 0x20A9, H),
    RangeEntry::new(0x20AA, 0x20AB, N),
    RangeEntry::new(0x20AC, 0x20AC, A),
    RangeEntry::new(0x20AD, 0x20C0, N),
    RangeEntry::new(0x20D0, 0x20F0, N),
    RangeEntry::new(0x2100, 0x2102, N),
    RangeEntry::new(0x2103, 0x2103, A),
    RangeEntry::new(0x2104, 0x2104, N),
    RangeEntry::new(0x2105, 0x2105, A),
    RangeEntry::new(0x2106, 0x2108, N),
    RangeEntry::new(0x2109, 0x2109, A),
    RangeEntry::new(0x210A, 0x2112, N),
    RangeEntry::new(0x2113, 0x2113, A),
    RangeEntry::new(0x2114, 0x2115, N),
    RangeEntry::new(0x2116, 0x2116, A),
    RangeEntry::new(0x2117, 0x2120, N),
    RangeEntry::new(0x2121, 0x2122, A),
    RangeEntry::new(0x2123, 0x2125, N),
    RangeEntry::new(0x2126, 0x2126, A),
    RangeEntry::new(0x2127, 0x212A, N),
    RangeEntry::new(0x212B, 0x212B, A),
    RangeEntry::new(0x212C, 0x2152, N),
    RangeEntry::new(0x2153, 0x2154, A),
    RangeEntry::new(0x2155, 0x215A, N),
    RangeEntry::new(0x215B, 0x215E, A),
    RangeEntry::new(0x215F, 0x215F, N),
    RangeEntry::new(0x2160, 0x216B, A),
    RangeEntry::new(0x216C, 0x216F, N),
    RangeEntry::new(0x2170, 0x2179, A),
    RangeEntry::new(0x217A, 0x2188, N),
    RangeEntry::new(0x2189, 0x2189, A),
    RangeEntry::new(0x218A, 0x218B, N),
    RangeEntry::new(0x2190, 0x2199, A),
    RangeEntry::new(0x219A, 0x21B7, N),
    RangeEntry::new(0x21B8, 0x21B9, A),
    RangeEntry::new(0x21BA, 0x21D1, N),
    RangeEntry::new(0x21D2, 0x21D2, A),
    RangeEntry::new(0x21D3, 0x21D3, N),
    RangeEntry::new(0x21D4, 0x21D4, A),
    RangeEntry::new(0x21D5, 0x21E6, N),
    RangeEntry::new(0x21E7, 0x21E7, A),
    RangeEntry::new(0x21E8, 0x21FF, N),
    RangeEntry::new(0x2200, 0x2200, A),
    RangeEntry::new(0x2201, 0x2201, N),
    RangeEntry::new(0x2202, 0x2203, A),
    RangeEntry::new(0x2204, 0x2206, N),
    RangeEntry::new(0x2207, 0x2208, A),
    RangeEntry::new(0x2209, 0x220A, N),
    RangeEntry::new(0x220B, 0x220B, A),
    RangeEntry::new(0x220C, 0x220E, N),
    RangeEntry::new(0x220F, 0x220F, A),
    RangeEntry::new(0x2210, 0x2210, N),
    RangeEntry::new(0x2211, 0x2211, A),
    RangeEntry::new(0x2212, 0x2214, N),
    RangeEntry::new(0x2215, 0x2215, A),
    RangeEntry::new(0x2216, 0x2219, N),
    RangeEntry::new(0x221A, 0x221A, A),
    RangeEntry::new(0x221B, 0x221C, N),
    RangeEntry::new(0x221D, 0x2220, A),
    RangeEntry::new(0x2221, 0x2222, N),
    RangeEntry::new(0x2223, 0x2223, A),
    RangeEntry::new(0x2224, 0x2224, N),
    RangeEntry::new(0x2225, 0x2225, A),
    RangeEntry::new(0x2226, 0x2226, N),
    RangeEntry::new(0x2227, 0x222C, A),
    RangeEntry::new(0x222D, 0x222D, N),
    RangeEntry::new(0x222E, 0x222E, A),
    RangeEntry::new(0x222F, 0x2233, N),
    RangeEntry::new(0x2234, 0x2237, A),
    RangeEntry::new(0x2238, 0x223B, N),
    RangeEntry::new(0x223C, 0x223D, A),
    RangeEntry::new(0x223E, 0x2247, N),
    RangeEntry::new(0x2248, 0x2248, A),
    RangeEntry::new(0x2249, 0x224B, N),
    RangeEntry::new(0x224C, 0x224C, A),
    RangeEntry::new(0x224D, 0x2251, N),
    RangeEntry::new(0x2252, 0x2252, A),
    RangeEntry::new(0x2253, 0x225F, N),
    RangeEntry::new(0x2260, 0x2261, A),
    RangeEntry::new(0x2262, 0x2263, N),
    RangeEntry::new(0x2264, 0x2267, A),
    RangeEntry::new(0x2268, 0x2269, N),
    RangeEntry::new(0x226A, 0x226B, A),
    RangeEntry::new(0x226C, 0x226D, N),
    RangeEntry::new(0x226E, 0x226F, A),
    RangeEntry::new(0x2270, 0x2281, N),
    RangeEntry::new(0x2282, 0x2283, A),
    RangeEntry::new(0x2284, 0x2285, N),
    RangeEntry::new(0x2286, 0x2287, A),
    RangeEntry::new(0x2288, 0x2294, N),
    RangeEntry::new(0x2295, 0x2295, A),
    RangeEntry::new(0x2296, 0x2298, N),
    RangeEntry::new(0x2299, 0x2299, A),
    RangeEntry::new(0x229A, 0x22A4, N),
    RangeEntry::new(0x22A5, 0x22A5, A),
    RangeEntry::new(0x22A6, 0x22BE, N),
    RangeEntry::new(0x22BF, 0x22BF, A),
    RangeEntry::new(0x22C0, 0x2311, N),
    RangeEntry::new(0x2312, 0x2312, A),
    RangeEntry::new(0x2313, 0x2319, N),
    RangeEntry::new(0x231A, 0x231B, W),
    RangeEntry::new(0x231C, 0x2328, N),
    RangeEntry::new(0x2329, 0x232A, W),
    RangeEntry::new(0x232B, 0x23E8, N),
    RangeEntry::new(0x23E9, 0x23EC, W),
    RangeEntry::new(0x23ED, 0x23EF, N),
    RangeEntry::new(0x23F0, 0x23F0, W),
    RangeEntry::new(0x23F1, 0x23F2, N),
    RangeEntry::new(0x23F3, 0x23F3, W),
    RangeEntry::new(0x23F4, 0x2426, N),
    RangeEntry::new(0x2440, 0x244A, N),
    RangeEntry::new(0x2460, 0x24E9, A),
    RangeEntry::new(0x24EA, 0x24EA, N),
    RangeEntry::new(0x24EB, 0x254B, A),
    RangeEntry::new(0x254C, 0x254F, N),
    RangeEntry::new(0x2550, 0x2573, A),
    RangeEntry::new(0x2574, 0x257F, N),
    RangeEntry::new(0x2580, 0x258F, A),
    RangeEntry::new(0x2590, 0x2591, N),
    RangeEntry::new(0x2592, 0x2595, A),
    RangeEntry::new(0x2596, 0x259F, N),
    RangeEntry::new(0x25A0, 0x25A1, A),
    RangeEntry::new(0x25A2, 0x25A2, N),
    RangeEntry::new(0x25A3, 0x25A9, A),
    RangeEntry::new(0x25AA, 0x25B1, N),
    RangeEntry::new(0x25B2, 0x25B3, A),
    RangeEntry::new(0x25B4, 0x25B5, N),
    RangeEntry::new(0x25B6, 0x25B7, A),
    RangeEntry::new(0x25B8, 0x25BB, N),
    RangeEntry::new(0x25BC, 0x25BD, A),
    RangeEntry::new(0x25BE, 0x25BF, N),
    RangeEntry::new(0x25C0, 0x25C1, A),
    RangeEntry::new(0x25C2, 0x25C5, N),
    RangeEntry::new(0x25C6, 0x25C8, A),
    RangeEntry::new(0x25C9, 0x25CA, N),
    RangeEntry::new(0x25CB, 0x25CB, A),
    RangeEntry::new(0x25CC, 0x25CD, N),
    RangeEntry::new(0x25CE, 0x25D1, A),
    RangeEntry::new(0x25D2, 0x25E1, N),
    RangeEntry::new(0x25E2, 0x25E5, A),
    RangeEntry::new(0x25E6, 0x25EE, N),
    RangeEntry::new(0x25EF, 0x25EF, A),
    RangeEntry::new(0x25F0, 0x25FC, N),
    RangeEntry::new(0x25FD, 0x25FE, W),
    RangeEntry::new(0x25FF, 0x2604, N),
    RangeEntry::new(0x2605, 0x2606, A),
    RangeEntry::new(0x2607, 0x2608, N),
    RangeEntry::new(0x2609, 0x2609, A),
    RangeEntry::new(0x260A, 0x260D, N),
    RangeEntry::new(0x260E, 0x260F, A),
    RangeEntry::new(0x2610, 0x2613, N),
    RangeEntry::new(0x2614, 0x2615, W),
    RangeEntry::new(0x2616, 0x261B, N),
    RangeEntry::new(0x261C, 0x261C, A),
    RangeEntry::new(0x261D, 0x261D, N),
    RangeEntry::new(0x261E, 0x261E, A),
    RangeEntry::new(0x261F, 0x263F, N),
    RangeEntry::new(0x2640, 0x2640, A),
    RangeEntry::new(0x2641, 0x2641, N),
    RangeEntry::new(0x2642, 0x2642, A),
    RangeEntry::new(0x2643, 0x2647, N),
    RangeEntry::new(0x2648, 0x2653, W),
    RangeEntry::new(0x2654, 0x265F, N),
    RangeEntry::new(0x2660, 0x2661, A),
    RangeEntry::new(0x2662, 0x2662, N),
    RangeEntry::new(0x2663, 0x2665, A),
    RangeEntry::new(0x2666, 0x2666, N),
    RangeEntry::new(0x2667, 0x266A, A),
    RangeEntry::new(0x266B, 0x266B, N),
    RangeEntry::new(0x266C, 0x266D, A),
    RangeEntry::new(0x266E, 0x266E, N),
    RangeEntry::new(0x266F, 0x266F, A),
    RangeEntry::new(0x2670, 0x267E, N),
    RangeEntry::new(0x267F, 0x267F, W),
    RangeEntry::new(0x2680, 0x2692, N),
    RangeEntry::new(0x2693, 0x2693, W),
    RangeEntry::new(0x2694, 0x269D, N),
    RangeEntry::new(0x269E, 0x269F, A),
    RangeEntry::new(0x26A0, 0x26A0, N),
    RangeEntry::new(0x26A1, 0x26A1, W),
    RangeEntry::new(0x26A2, 0x26A9, N),
    RangeEntry::new(0x26AA, 0x26AB, W),
    RangeEntry::new(0x26AC, 0x26BC, N),
    RangeEntry::new(0x26BD, 0x26BE, W),
    RangeEntry::new(0x26BF, 0x26BF, A),
    RangeEntry::new(0x26C0, 0x26C3, N),
    RangeEntry::new(0x26C4, 0x26C5, W),
    RangeEntry::new(0x26C6, 0x26CD, A),
    RangeEntry::new(0x26CE, 0x26CE, W),
    RangeEntry::new(0x26CF, 0x26D3, A),
    RangeEntry::new(0x26D4, 0x26D4, W),
    RangeEntry::new(0x26D5, 0x26E1, A),
    RangeEntry::new(0x26E2, 0x26E2, N),
    RangeEntry::new(0x26E3, 0x26E3, A),
    RangeEntry::new(0x26E4, 0x26E7, N),
    RangeEntry::new(0x26E8, 0x26E9, A),
    RangeEntry::new(0x26EA, 0x26EA, W),
    RangeEntry::new(0x26EB, 0x26F1, A),
    RangeEntry::new(0x26F2, 0x26F3, W),
    RangeEntry::new(0x26F4, 0x26F4, A),
    RangeEntry::new(0x26F5, 0x26F5, W),
    RangeEntry::new(0x26F6, 0x26F9, A),
    RangeEntry::new(0x26FA, 0x26FA, W),
    RangeEntry::new(0x26FB, 0x26FC, A),
    RangeEntry::new(0x26FD, 0x26FD, W),
    RangeEntry::new(0x26FE, 0x26FF, A),
    RangeEntry::new(0x2700, 0x2704, N),
    RangeEntry::new(0x2705, 0x2705, W),
    RangeEntry::new(0x2706, 0x2709, N),
    RangeEntry::new(0x270A, 0x270B, W),
    RangeEntry::new(0x270C, 0x2727, N),
    RangeEntry::new(0x2728, 0x2728, W),
    RangeEntry::new(0x2729, 0x273C, N),
    RangeEntry::new(0x273D, 0x273D, A),
    RangeEntry::new(0x273E, 0x274B, N),
    RangeEntry::new(0x274C, 0x274C, W),
    RangeEntry::new(0x274D, 0x274D, N),
    RangeEntry::new(0x274E, 0x274E, W),
    RangeEntry::new(0x274F, 0x2752, N),
    RangeEntry::new(0x2753, 0x2755, W),
    RangeEntry::new(0x2756, 0x2756, N),
    RangeEntry::new(0x2757, 0x2757, W),
    RangeEntry::new(0x2758, 0x2775, N),
    RangeEntry::new(0x2776, 0x277F, A),
    RangeEntry::new(0x2780, 0x2794, N),
    RangeEntry::new(0x2795, 0x2797, W),
    RangeEntry::new(0x2798, 0x27AF, N),
    RangeEntry::new(0x27B0, 0x27B0, W),
    RangeEntry::new(0x27B1, 0x27BE, N),
    RangeEntry::new(0x27BF, 0x27BF, W),
    RangeEntry::new(0x27C0, 0x27E5, N),
    RangeEntry::new(0x27E6, 0x27ED, NA),
    RangeEntry::new(0x27EE, 0x2984, N),
    RangeEntry::new(0x2985, 0x2986, NA),
    RangeEntry::new(0x2987, 0x2B1A, N),
    RangeEntry::new(0x2B1B, 0x2B1C, W),
    RangeEntry::new(0x2B1D, 0x2B4F, N),
    RangeEntry::new(0x2B50, 0x2B50, W),
    RangeEntry::new(0x2B51, 0x2B54, N),
    RangeEntry::new(0x2B55, 0x2B55, W),
    RangeEntry::new(0x2B56, 0x2B59, A),
    RangeEntry::new(0x2B5A, 0x2B73, N),
    RangeEntry::new(0x2B76, 0x2B95, N),
    RangeEntry::new(0x2B97, 0x2CF3, N),
    RangeEntry::new(0x2CF9, 0x2D25, N),
    RangeEntry::new(0x2D27, 0x2D27, N),
    RangeEntry::new(0x2D2D, 0x2D2D, N),
    RangeEntry::new(0x2D30, 0x2D67, N),
    RangeEntry::new(0x2D6F, 0x2D70, N),
    RangeEntry::new(0x2D7F, 0x2D96, N),
    RangeEntry::new(0x2DA0, 0x2DA6, N),
    RangeEntry::new(0x2DA8, 0x2DAE, N),
    RangeEntry::new(0x2DB0, 0x2DB6, N),
    RangeEntry::new(0x2DB8, 0x2DBE, N),
    RangeEntry::new(0x2DC0, 0x2DC6, N),
    RangeEntry::new(0x2DC8, 0x2DCE, N),
    RangeEntry::new(0x2DD0, 0x2DD6, N),
    RangeEntry::new(0x2DD8, 0x2DDE, N),
    RangeEntry::new(0x2DE0, 0x2E5D, N),
    RangeEntry::new(0x2E80, 0x2E99, W),
    RangeEntry::new(0x2E9B, 0x2EF3, W),
    RangeEntry::new(0x2F00, 0x2FD5, W),
    RangeEntry::new(0x2FF0, 0x2FFB, W),
    RangeEntry::new(0x3000, 0x3000, F),
    RangeEntry::new(0x3001, 0x303E, W),
    RangeEntry::new(0x303F, 0x303F, N),
    RangeEntry::new(0x3041, 0x3096, W),
    RangeEntry::new(0x3099, 0x30FF, W),
    RangeEntry::new(0x3105, 0x312F, W),
    RangeEntry::new(0x3131, 0x318E, W),
    RangeEntry::new(0x3190, 0x31E3, W),
    RangeEntry::new(0x31F0, 0x321E, W),
    RangeEntry::new(0x3220, 0x3247, W),
    RangeEntry::new(0x3248, 0x324F, A),
    RangeEntry::new(0x3250, 0x4DBF, W),
    RangeEntry::new(0x4DC0, 0x4DFF, N),
    RangeEntry::new(0x4E00, 0xA48C, W),
    RangeEntry::new(0xA490, 0xA4C6, W),
    RangeEntry::new(0xA4D0, 0xA62B, N),
    RangeEntry::new(0xA640, 0xA6F7, N),
    RangeEntry::new(0xA700, 0xA7CA, N),
    RangeEntry::new(0xA7D0, 0xA7D1, N),
    RangeEntry::new(0xA7D3, 0xA7D3, N),
    RangeEntry::new(0xA7D5, 0xA7D9, N),
    RangeEntry::new(0xA7F2, 0xA82C, N),
    RangeEntry::new(0xA830, 0xA839, N),
    RangeEntry::new(0xA840, 0xA877, N),
    RangeEntry::new(0xA880, 0xA8C5, N),
    RangeEntry::new(0xA8CE, 0xA8D9, N),
    RangeEntry::new(0xA8E0, 0xA953, N),
    RangeEntry::new(0xA95F, 0xA95F, N),
    RangeEntry::new(0xA960, 0xA97C, W),
    RangeEntry::new(0xA980, 0xA9CD, N),
    RangeEntry::new(0xA9CF, 0xA9D9, N),
    RangeEntry::new(0xA9DE, 0xA9FE, N),
    RangeEntry::new(0xAA00, 0xAA36, N),
    RangeEntry::new(0xAA40, 0xAA4D, N),
    RangeEntry::new(0xAA50, 0xAA59, N),
    RangeEntry::new(0xAA5C, 0xAAC2, N),
    RangeEntry::new(0xAADB, 0xAAF6, N),
    RangeEntry::new(0xAB01, 0xAB06, N),
    RangeEntry::new(0xAB09, 0xAB0E, N),
    RangeEntry::new(0xAB11, 0xAB16, N),
    RangeEntry::new(0xAB20, 0xAB26, N),
    RangeEntry::new(0xAB28, 0xAB2E, N),
    RangeEntry::new(0xAB30, 0xAB6B, N),
    RangeEntry::new(0xAB70, 0xABED, N),
    RangeEntry::new(0xABF0, 0xABF9, N),
    RangeEntry::new(0xAC00, 0xD7A3, W),
    RangeEntry::new(0xD7B0, 0xD7C6, N),
    RangeEntry::new(0xD7CB, 0xD7FB, N),
    RangeEntry::new(0xD800, 0xDFFF, N),
    RangeEntry::new(0xE000, 0xF8FF, A),
    RangeEntry::new(0xF900, 0xFAFF, W),
    RangeEntry::new(0xFB00, 0xFB06, N),
    RangeEntry::new(0xFB13, 0xFB17, N),
    RangeEntry::new(0xFB1D, 0xFB36, N),
    RangeEntry::new(0xFB38, 0xFB3C, N),
    RangeEntry::new(0xFB3E, 0xFB3E, N),
    RangeEntry::new(0xFB40, 0xFB41, N),
    RangeEntry::new(0xFB43, 0xFB44, N),
    RangeEntry::new(0xFB46, 0xFBC2, N),
    RangeEntry::new(0xFBD3, 0xFD8F, N),
    RangeEntry::new(0xFD92, 0xFDC7, N),
    RangeEntry::new(0xFDCF, 0xFDCF, N),
    RangeEntry::new(0xFDF0, 0xFDFF, N),
    RangeEntry::new(0xFE00, 0xFE0F, A),
    RangeEntry::new(0xFE10, 0xFE19, W),
    RangeEntry::new(0xFE20, 0xFE2F, N),
    RangeEntry::new(0xFE30, 0xFE52, W),
    RangeEntry::new(0xFE54, 0xFE66, W),
    RangeEntry::new(0xFE68, 0xFE6B, W),
    RangeEntry::new(0xFE70, 0xFE74, N),
    RangeEntry::new(0xFE76, 0xFEFC, N),
    RangeEntry::new(0xFEFF, 0xFEFF, N),
    RangeEntry::new(0xFF01, 0xFF60, F),
    RangeEntry::new(0xFF61, 0xFFBE, H),
    RangeEntry::new(0xFFC2, 0xFFC7, H),
    RangeEntry::new(0xFFCA, 0xFFCF, H),
    RangeEntry::new(0xFFD2, 0xFFD7, H),
    RangeEntry::new(0xFFDA, 0xFFDC, H),
    RangeEntry::new(0xFFE0, 0xFFE6, F),
    RangeEntry::new(0xFFE8, 0xFFEE, H),
    RangeEntry::new(0xFFF9, 0xFFFC, N),
    RangeEntry::new(0xFFFD, 0xFFFD, A),
    RangeEntry::new(0x10000, 0x1000B, N),
    RangeEntry::new(0x1000D, 0x10026, N),
    RangeEntry::new(0x10028, 0x1003A, N),
    RangeEntry::new(0x1003C, 0x1003D, N),
    RangeEntry::new(0x1003F, 0x1004D, N),
    RangeEntry::new(0x10050, 0x1005D, N),
    RangeEntry::new(0x10080, 0x100FA, N),
    RangeEntry::new(0x10100, 0x10102, N),
    RangeEntry::new(0x10107, 0x10133, N),
    RangeEntry::new(0x10137, 0x1018E, N),
    RangeEntry::new(0x10190, 0x1019C, N),
    RangeEntry::new(0x101A0, 0x101A0, N),
    RangeEntry::new(0x101D0, 0x101FD, N),
    RangeEntry::new(0x10280, 0x1029C, N),
    RangeEntry::new(0x102A0, 0x102D0, N),
    RangeEntry::new(0x102E0, 0x102FB, N),
    RangeEntry::new(0x10300, 0x10323, N),
    RangeEntry::new(0x1032D, 0x1034A, N),
    RangeEntry::new(0x10350, 0x1037A, N),
    RangeEntry::new(0x10380, 0x1039D, N),
    RangeEntry::new(0x1039F, 0x103C3, N),
    RangeEntry::new(0x103C8, 0x103D5, N),
    RangeEntry::new(0x10400, 0x1049D, N),
    RangeEntry::new(0x104A0, 0x104A9, N),
    RangeEntry::new(0x104B0, 0x104D3, N),
    RangeEntry::new(0x104D8, 0x104FB, N),
    RangeEntry::new(0x10500, 0x10527, N),
    RangeEntry::new(0x10530, 0x10563, N),
    RangeEntry::new(0x1056F, 0x1057A, N),
    RangeEntry::new(0x1057C, 0x1058A, N),
    RangeEntry::new(0x1058C, 0x10592, N),
    RangeEntry::new(0x10594, 0x10595, N),
    RangeEntry::new(0x10597, 0x105A1, N),
    RangeEntry::new(0x105A3, 0x105B1, N),
    RangeEntry::new(0x105B3, 0x105B9, N),
    RangeEntry::new(0x105BB, 0x105BC, N),
    RangeEntry::new(0x10600, 0x10736, N),
    RangeEntry::new(0x10740, 0x10755, N),
    RangeEntry::new(0x10760, 0x10767, N),
    RangeEntry::new(0x10780, 0x10785, N),
    RangeEntry::new(0x10787, 0x107B0, N),
    RangeEntry::new(0x107B2, 0x107BA, N),
    RangeEntry::new(0x10800, 0x10805, N),
    RangeEntry::new(0x10808, 0x10808, N),
    RangeEntry::new(0x1080A, 0x10835, N),
    RangeEntry::new(0x10837, 0x10838, N),
    RangeEntry::new(0x1083C, 0x1083C, N),
    RangeEntry::new(0x1083F, 0x10855, N),
    RangeEntry::new(0x10857, 0x1089E, N),
    RangeEntry::new(0x108A7, 0x108AF, N),
    RangeEntry::new(0x108E0, 0x108F2, N),
    RangeEntry::new(0x108F4, 0x108F5, N),
    RangeEntry::new(0x108FB, 0x1091B, N),
    RangeEntry::new(0x1091F, 0x10939, N),
    RangeEntry::new(0x1093F, 0x1093F, N),
    RangeEntry::new(0x10980, 0x109B7, N),
    RangeEntry::new(0x109BC, 0x109CF, N),
    RangeEntry::new(0x109D2, 0x10A03, N),
    RangeEntry::new(0x10A05, 0x10A06, N),
    RangeEntry::new(0x10A0C, 0x10A13, N),
    RangeEntry::new(0x10A15, 0x10A17, N),
    RangeEntry::new(0x10A19, 0x10A35, N),
    RangeEntry::new(0x10A38, 0x10A3A, N),
    RangeEntry::new(0x10A3F, 0x10A48, N),
    RangeEntry::new(0x10A50, 0x10A58, N),
    RangeEntry::new(0x10A60, 0x10A9F, N),
    RangeEntry::new(0x10AC0, 0x10AE6, N),
    RangeEntry::new(0x10AEB, 0x10AF6, N),
    RangeEntry::new(0x10B00, 0x10B35, N),
    RangeEntry::new(0x10B39, 0x10B55, N),
    RangeEntry::new(0x10B58, 0x10B72, N),
    RangeEntry::new(0x10B78, 0x10B91, N),
    RangeEntry::new(0x10B99, 0x10B9C, N),
    RangeEntry::new(0x10BA9, 0x10BAF, N),
    RangeEntry::new(0x10C00, 0x10C48, N),
    RangeEntry::new(0x10C80, 0x10CB2, N),
    RangeEntry::new(0x10CC0, 0x10CF2, N),
    RangeEntry::new(0x10CFA, 0x10D27, N),
    RangeEntry::new(0x10D30, 0x10D39, N),
    RangeEntry::new(0x10E60, 0x10E7E, N),
    RangeEntry::new(0x10E80, 0x10EA9, N),
    RangeEntry::new(0x10EAB, 0x10EAD, N),
    RangeEntry::new(0x10EB0, 0x10EB1, N),
    RangeEntry::new(0x10F00, 0x10F27, N),
    RangeEntry::new(0x10F30, 0x10F59, N),
    RangeEntry::new(0x10F70, 0x10F89, N),
    RangeEntry::new(0x10FB0, 0x10FCB, N),
    RangeEntry::new(0x10FE0, 0x10FF6, N),
    RangeEntry::new(0x11000, 0x1104D, N),
    RangeEntry::new(0x11052, 0x11075, N),
    RangeEntry::new(0x1107F, 0x110C2, N),
    RangeEntry::new(0x110CD, 0x110CD, N),
    RangeEntry::new(0x110D0, 0x110E8, N),
    RangeEntry::new(0x110F0, 0x110F9, N),
    RangeEntry::new(0x11100, 0x11134, N),
    RangeEntry::new(0x11136, 0x11147, N),
    RangeEntry::new(0x11150, 0x11176, N),
    RangeEntry::new(0x11180, 0x111DF, N),
    RangeEntry::new(0x111E1, 0x111F4, N),
    RangeEntry::new(0x11200, 0x11211, N),
    RangeEntry::new(0x11213, 0x1123E, N),
    RangeEntry::new(0x11280, 0x11286, N),
    RangeEntry::new(0x11288, 0x11288, N),
    RangeEntry::new(0x1128A, 0x1128D, N),
    RangeEntry::new(0x1128F, 0x1129D, N),
    RangeEntry::new(0x1129F, 0x112A9, N),
    RangeEntry::new(0x112B0, 0x112EA, N),
    RangeEntry::new(0x112F0, 0x112F9, N),
    RangeEntry::new(0x11300, 0x11303, N),
    RangeEntry::new(0x11305, 0x1130C, N),
    RangeEntry::new(0x1130F, 0x11310, N),
    RangeEntry::new(0x11313, 0x11328, N),
    RangeEntry::new(0x1132A, 0x11330, N),
    RangeEntry::new(0x11332, 0x11333, N),
    RangeEntry::new(0x11335, 0x11339, N),
    RangeEntry::new(0x1133B, 0x11344, N),
    RangeEntry::new(0x11347, 0x11348, N),
    RangeEntry::new(0x1134B, 0x1134D, N),
    RangeEntry::new(0x11350, 0x11350, N),
    RangeEntry::new(0x11357, 0x11357, N),
    RangeEntry::new(0x1135D, 0x11363, N),
    RangeEntry::new(0x11366, 0x1136C, N),
    RangeEntry::new(0x11370, 0x11374, N),
    RangeEntry::new(0x11400, 0x1145B, N),
    RangeEntry::new(0x1145D, 0x11461, N),
    RangeEntry::new(0x11480, 0x114C7, N),
    RangeEntry::new(0x114D0, 0x114D9, N),
    RangeEntry::new(0x11580, 0x115B5, N),
    RangeEntry::new(0x115B8, 0x115DD, N),
    RangeEntry::new(0x11600, 0x11644, N),
    RangeEntry::new(0x11650, 0x11659, N),
    RangeEntry::new(0x11660, 0x1166C, N),
    RangeEntry::new(0x11680, 0x116B9, N),
    RangeEntry::new(0x116C0, 0x116C9, N),
    RangeEntry::new(0x11700, 0x1171A, N),
    RangeEntry::new(0x1171D, 0x1172B, N),
    RangeEntry::new(0x11730, 0x11746, N),
    RangeEntry::new(0x11800, 0x1183B, N),
    RangeEntry::new(0x118A0, 0x118F2, N),
    RangeEntry::new(0x118FF, 0x11906, N),
    RangeEntry::new(0x11909, 0x11909, N),
    RangeEntry::new(0x1190C, 0x11913, N),
    RangeEntry::new(0x11915, 0x11916, N),
    RangeEntry::new(0x11918, 0x11935, N),
    RangeEntry::new(0x11937, 0x11938, N),
    RangeEntry::new(0x1193B, 0x11946, N),
    RangeEntry::new(0x11950, 0x11959, N),
    RangeEntry::new(0x119A0, 0x119A7, N),
    RangeEntry::new(0x119AA, 0x119D7, N),
    RangeEntry::new(0x119DA, 0x119E4, N),
    RangeEntry::new(0x11A00, 0x11A47, N),
    RangeEntry::new(0x11A50, 0x11AA2, N),
    RangeEntry::new(0x11AB0, 0x11AF8, N),
    RangeEntry::new(0x11C00, 0x11C08, N),
    RangeEntry::new(0x11C0A, 0x11C36, N),
    RangeEntry::new(0x11C38, 0x11C45, N),
    RangeEntry::new(0x11C50, 0x11C6C, N),
    RangeEntry::new(0x11C70, 0x11C8F, N),
    RangeEntry::new(0x11C92, 0x11CA7, N),
    RangeEntry::new(0x11CA9, 0x11CB6, N),
    RangeEntry::new(0x11D00, 0x11D06, N),
    RangeEntry::new(0x11D08, 0x11D09, N),
    RangeEntry::new(0x11D0B, 0x11D36, N),
    RangeEntry::new(0x11D3A, 0x11D3A, N),
    RangeEntry::new(0x11D3C, 0x11D3D, N),
    RangeEntry::new(0x11D3F, 0x11D47, N),
    RangeEntry::new(0x11D50, 0x11D59, N),
    RangeEntry::new(0x11D60, 0x11D65, N),
    RangeEntry::new(0x11D67, 0x11D68, N),
    RangeEntry::new(0x11D6A, 0x11D8E, N),
    RangeEntry::new(0x11D90, 0x11D91, N),
    RangeEntry::new(0x11D93, 0x11D98, N),
    RangeEntry::new(0x11DA0, 0x11DA9, N),
    RangeEntry::new(0x11EE0, 0x11EF8, N),
    RangeEntry::new(0x11FB0, 0x11FB0, N),
    RangeEntry::new(0x11FC0, 0x11FF1, N),
    RangeEntry::new(0x11FFF, 0x12399, N),
    RangeEntry::new(0x12400, 0x1246E, N),
    RangeEntry::new(0x12470, 0x12474, N),
    RangeEntry::new(0x12480, 0x12543, N),
    RangeEntry::new(0x12F90, 0x12FF2, N),
    RangeEntry::new(0x13000, 0x1342E, N),
    RangeEntry::new(0x13430, 0x13438, N),
    RangeEntry::new(0x14400, 0x14646, N),
    RangeEntry::new(0x16800, 0x16A38, N),
    RangeEntry::new(0x16A40, 0x16A5E, N),
    RangeEntry::new(0x16A60, 0x16A69, N),
    RangeEntry::new(0x16A6E, 0x16ABE, N),
    RangeEntry::new(0x16AC0, 0x16AC9, N),
    RangeEntry::new(0x16AD0, 0x16AED, N),
    RangeEntry::new(0x16AF0, 0x16AF5, N),
    RangeEntry::new(0x16B00, 0x16B45, N),
    RangeEntry::new(0x16B50, 0x16B59, N),
    RangeEntry::new(0x16B5B, 0x16B61, N),
    RangeEntry::new(0x16B63, 0x16B77, N),
    RangeEntry::new(0x16B7D, 0x16B8F, N),
    RangeEntry::new(0x16E40, 0x16E9A, N),
    RangeEntry::new(0x16F00, 0x16F4A, N),
    RangeEntry::new(0x16F4F, 0x16F87, N),
    RangeEntry::new(0x16F8F, 0x16F9F, N),
    RangeEntry::new(0x16FE0, 0x16FE4, W),
    RangeEntry::new(0x16FF0, 0x16FF1, W),
    RangeEntry::new(0x17000, 0x187F7, W),
    RangeEntry::new(0x18800, 0x18CD5, W),
    RangeEntry::new(0x18D00, 0x18D08, W),
    RangeEntry::new(0x1AFF0, 0x1AFF3, W),
    RangeEntry::new(0x1AFF5, 0x1AFFB, W),
    RangeEntry::new(0x1AFFD, 0x1AFFE, W),
    RangeEntry::new(0x1B000, 0x1B122, W),
    RangeEntry::new(0x1B150, 0x1B152, W),
    RangeEntry::new(0x1B164, 0x1B167, W),
    RangeEntry::new(0x1B170, 0x1B2FB, W),
    RangeEntry::new(0x1BC00, 0x1BC6A, N),
    RangeEntry::new(0x1BC70, 0x1BC7C, N),
    RangeEntry::new(0x1BC80, 0x1BC88, N),
    RangeEntry::new(0x1BC90, 0x1BC99, N),
    RangeEntry::new(0x1BC9C, 0x1BCA3, N),
    RangeEntry::new(0x1CF00, 0x1CF2D, N),
    RangeEntry::new(0x1CF30, 0x1CF46, N),
    RangeEntry::new(0x1CF50, 0x1CFC3, N),
    RangeEntry::new(0x1D000, 0x1D0F5, N),
    RangeEntry::new(0x1D100, 0x1D126, N),
    RangeEntry::new(0x1D129, 0x1D1EA, N),
    RangeEntry::new(0x1D200, 0x1D245, N),
    RangeEntry::new(0x1D2E0, 0x1D2F3, N),
    RangeEntry::new(0x1D300, 0x1D356, N),
    RangeEntry::new(0x1D360, 0x1D378, N),
    RangeEntry::new(0x1D400, 0x1D454, N),
    RangeEntry::new(0x1D456, 0x1D49C, N),
    RangeEntry::new(0x1D49E, 0x1D49F, N),
    RangeEntry::new(0x1D4A2, 0x1D4A2, N),
    RangeEntry::new(0x1D4A5, 0x1D4A6, N),
    RangeEntry::new(0x1D4A9, 0x1D4AC, N),
    RangeEntry::new(0x1D4AE, 0x1D4B9, N),
    RangeEntry::new(0x1D4BB, 0x1D4BB, N),
    RangeEntry::new(0x1D4BD, 0x1D4C3, N),
    RangeEntry::new(0x1D4C5, 0x1D505, N),
    RangeEntry::new(0x1D507, 0x1D50A, N),
    RangeEntry::new(0x1D50D, 0x1D514, N),
    RangeEntry::new(0x1D516, 0x1D51C, N),
    RangeEntry::new(0x1D51E, 0x1D539, N),
    RangeEntry::new(0x1D53B, 0x1D53E, N),
    RangeEntry::new(0x1D540, 0x1D544, N),
    RangeEntry::new(0x1D546, 0x1D546, N),
    RangeEntry::new(0x1D54A, 0x1D550, N),
    RangeEntry::new(0x1D552, 0x1D6A5, N),
    RangeEntry::new(0x1D6A8, 0x1D7CB, N),
    RangeEntry::new(0x1D7CE, 0x1DA8B, N),
    RangeEntry::new(0x1DA9B, 0x1DA9F, N),
    RangeEntry::new(0x1DAA1, 0x1DAAF, N),
    RangeEntry::new(0x1DF00, 0x1DF1E, N),
    RangeEntry::new(0x1E000, 0x1E006, N),
    RangeEntry::new(0x1E008, 0x1E018, N),
    RangeEntry::new(0x1E01B, 0x1E021, N),
    RangeEntry::new(0x1E023, 0x1E024, N),
    RangeEntry::new(0x1E026, 0x1E02A, N),
    RangeEntry::new(0x1E100, 0x1E12C, N),
    RangeEntry::new(0x1E130, 0x1E13D, N),
    RangeEntry::new(0x1E140, 0x1E149, N),
    RangeEntry::new(0x1E14E, 0x1E14F, N),
    RangeEntry::new(0x1E290, 0x1E2AE, N),
    RangeEntry::new(0x1E2C0, 0x1E2F9, N),
    RangeEntry::new(0x1E2FF, 0x1E2FF, N),
    RangeEntry::new(0x1E7E0, 0x1E7E6, N),
    RangeEntry::new(0x1E7E8, 0x1E7EB, N),
    RangeEntry::new(0x1E7ED, 0x1E7EE, N),
    RangeEntry::new(0x1E7F0, 0x1E7FE, N),
    RangeEntry::new(0x1E800, 0x1E8C4, N),
    RangeEntry::new(0x1E8C7, 0x1E8D6, N),
    RangeEntry::new(0x1E900, 0x1E94B, N),
    RangeEntry::new(0x1E950, 0x1E959, N),
    RangeEntry::new(0x1E95E, 0x1E95F, N),
    RangeEntry::new(0x1EC71, 0x1ECB4, N),
    RangeEntry::new(0x1ED01, 0x1ED3D, N),
    RangeEntry::new(0x1EE00, 0x1EE03, N),
    RangeEntry::new(0x1EE05, 0x1EE1F, N),
    RangeEntry::new(0x1EE21, 0x1EE22, N),
    RangeEntry::new(0x1EE24, 0x1EE24, N),
    RangeEntry::new(0x1EE27, 0x1EE27, N),
    RangeEntry::new(0x1EE29, 0x1EE32, N),
    RangeEntry::new(0x1EE34, 0x1EE37, N),
    RangeEntry::new(0x1EE39, 0x1EE39, N),
    RangeEntry::new(0x1EE3B, 0x1EE3B, N),
    RangeEntry::new(0x1EE42, 0x1EE42, N),
    RangeEntry::new(0x1EE47, 0x1EE47, N),
    RangeEntry::new(0x1EE49, 0x1EE49, N),
    RangeEntry::new(0x1EE4B, 0x1EE4B, N),
    RangeEntry::new(0x1EE4D, 0x1EE4F, N),
    RangeEntry::new(0x1EE51, 0x1EE52, N),
    RangeEntry::new(0x1EE54, 0x1EE54, N),
    RangeEntry::new(0x1EE57, 0x1EE57, N),
    RangeEntry::new(0x1EE59, 0x1EE59, N),
    RangeEntry::new(0x1EE5B, 0x1EE5B, N),
    RangeEntry::new(0x1EE5D, 0x1EE5D, N),
    RangeEntry::new(0x1EE5F, 0x1EE5F, N),
    RangeEntry::new(0x1EE61, 0x1EE62, N),
    RangeEntry::new(0x1EE64, 0x1EE64, N),
    RangeEntry::new(0x1EE67, 0x1EE6A, N),
    RangeEntry::new(0x1EE6C, 0x1EE72, N),
    RangeEntry::new(0x1EE74, 0x1EE77, N),
    RangeEntry::new(0x1EE79, 0x1EE7C, N),
    RangeEntry::new(0x1EE7E, 0x1EE7E, N),
    RangeEntry::new(0x1EE80, 0x1EE89, N),
    RangeEntry::new(0x1EE8B, 0x1EE9B, N),
    RangeEntry::new(0x1EEA1, 0x1EEA3, N),
    RangeEntry::new(0x1EEA5, 0x1EEA9, N),
    RangeEntry::new(0x1EEAB, 0x1EEBB, N),
    RangeEntry::new(0x1EEF0, 0x1EEF1, N),
    RangeEntry::new(0x1F000, 0x1F003, N),
    RangeEntry::new(0x1F004, 0x1F004, W),
    RangeEntry::new(0x1F005, 0x1F02B, N),
    RangeEntry::new(0x1F030, 0x1F093, N),
    RangeEntry::new(0x1F0A0, 0x1F0AE, N),
    RangeEntry::new(0x1F0B1, 0x1F0BF, N),
    RangeEntry::new(0x1F0C1, 0x1F0CE, N),
    RangeEntry::new(0x1F0CF, 0x1F0CF, W),
    RangeEntry::new(0x1F0D1, 0x1F0F5, N),
    RangeEntry::new(0x1F100, 0x1F10A, A),
    RangeEntry::new(0x1F10B, 0x1F10F, N),
    RangeEntry::new(0x1F110, 0x1F12D, A),
    RangeEntry::new(0x1F12E, 0x1F12F, N),
    RangeEntry::new(0x1F130, 0x1F169, A),
    RangeEntry::new(0x1F16A, 0x1F16F, N),
    RangeEntry::new(0x1F170, 0x1F18D, A),
    RangeEntry::new(0x1F18E, 0x1F18E, W),
    RangeEntry::new(0x1F18F, 0x1F190, A),
    RangeEntry::new(0x1F191, 0x1F19A, W),
    RangeEntry::new(0x1F19B, 0x1F1AC, A),
    RangeEntry::new(0x1F1AD, 0x1F1AD, N),
    RangeEntry::new(0x1F1E6, 0x1F1FF, N),
    RangeEntry::new(0x1F200, 0x1F202, W),
    RangeEntry::new(0x1F210, 0x1F23B, W),
    RangeEntry::new(0x1F240, 0x1F248, W),
    RangeEntry::new(0x1F250, 0x1F251, W),
    RangeEntry::new(0x1F260, 0x1F265, W),
    RangeEntry::new(0x1F300, 0x1F320, W),
    RangeEntry::new(0x1F321, 0x1F32C, N),
    RangeEntry::new(0x1F32D, 0x1F335, W),
    RangeEntry::new(0x1F336, 0x1F336, N),
    RangeEntry::new(0x1F337, 0x1F37C, W),
    RangeEntry::new(0x1F37D, 0x1F37D, N),
    RangeEntry::new(0x1F37E, 0x1F393, W),
    RangeEntry::new(0x1F394, 0x1F39F, N),
    RangeEntry::new(0x1F3A0, 0x1F3CA, W),
    RangeEntry::new(0x1F3CB, 0x1F3CE, N),
    RangeEntry::new(0x1F3CF, 0x1F3D3, W),
    RangeEntry::new(0x1F3D4, 0x1F3DF, N),
    RangeEntry::new(0x1F3E0, 0x1F3F0, W),
    RangeEntry::new(0x1F3F1, 0x1F3F3, N),
    RangeEntry::new(0x1F3F4, 0x1F3F4, W),
    RangeEntry::new(0x1F3F5, 0x1F3F7, N),
    RangeEntry::new(0x1F3F8, 0x1F43E, W),
    RangeEntry::new(0x1F43F, 0x1F43F, N),
    RangeEntry::new(0x1F440, 0x1F440, W),
    RangeEntry::new(0x1F441, 0x1F441, N),
    RangeEntry::new(0x1F442, 0x1F4FC, W),
    RangeEntry::new(0x1F4FD, 0x1F4FE, N),
    RangeEntry::new(0x1F4FF, 0x1F53D, W),
    RangeEntry::new(0x1F53E, 0x1F54A, N),
    RangeEntry::new(0x1F54B, 0x1F54E, W),
    RangeEntry::new(0x1F54F, 0x1F54F, N),
    RangeEntry::new(0x1F550, 0x1F567, W),
    RangeEntry::new(0x1F568, 0x1F579, N),
    RangeEntry::new(0x1F57A, 0x1F57A, W),
    RangeEntry::new(0x1F57B, 0x1F594, N),
    RangeEntry::new(0x1F595, 0x1F596, W),
    RangeEntry::new(0x1F597, 0x1F5A3, N),
    RangeEntry::new(0x1F5A4, 0x1F5A4, W),
    RangeEntry::new(0x1F5A5, 0x1F5FA, N),
    RangeEntry::new(0x1F5FB, 0x1F64F, W),
    RangeEntry::new(0x1F650, 0x1F67F, N),
    RangeEntry::new(0x1F680, 0x1F6C5, W),
    RangeEntry::new(0x1F6C6, 0x1F6CB, N),
    RangeEntry::new(0x1F6CC, 0x1F6CC, W),
    RangeEntry::new(0x1F6CD, 0x1F6CF, N),
    RangeEntry::new(0x1F6D0, 0x1F6D2, W),
    RangeEntry::new(0x1F6D3, 0x1F6D4, N),
    RangeEntry::new(0x1F6D5, 0x1F6D7, W),
    RangeEntry::new(0x1F6DD, 0x1F6DF, W),
    RangeEntry::new(0x1F6E0, 0x1F6EA, N),
    RangeEntry::new(0x1F6EB, 0x1F6EC, W),
    RangeEntry::new(0x1F6F0, 0x1F6F3, N),
    RangeEntry::new(0x1F6F4, 0x1F6FC, W),
    RangeEntry::new(0x1F700, 0x1F773, N),
    RangeEntry::new(0x1F780, 0x1F7D8, N),
    RangeEntry::new(0x1F7E0, 0x1F7EB, W),
    RangeEntry::new(0x1F7F0, 0x1F7F0, W),
    RangeEntry::new(0x1F800, 0x1F80B, N),
    RangeEntry::new(0x1F810, 0x1F847, N),
    RangeEntry::new(0x1F850, 0x1F859, N),
    RangeEntry::new(0x1F860, 0x1F887, N),
    RangeEntry::new(0x1F890, 0x1F8AD, N),
    RangeEntry::new(0x1F8B0, 0x1F8B1, N),
    RangeEntry::new(0x1F900, 0x1F90B, N),
    RangeEntry::new(0x1F90C, 0x1F93A, W),
    RangeEntry::new(0x1F93B, 0x1F93B, N),
    RangeEntry::new(0x1F93C, 0x1F945, W),
    RangeEntry::new(0x1F946, 0x1F946, N),
    RangeEntry::new(0x1F947, 0x1F9FF, W),
    RangeEntry::new(0x1FA00, 0x1FA53, N),
    RangeEntry::new(0x1FA60, 0x1FA6D, N),
    RangeEntry::new(0x1FA70, 0x1FA74, W),
    RangeEntry::new(0x1FA78, 0x1FA7C, W),
    RangeEntry::new(0x1FA80, 0x1FA86, W),
    RangeEntry::new(0x1FA90, 0x1FAAC, W),
    RangeEntry::new(0x1FAB0, 0x1FABA, W),
    RangeEntry::new(0x1FAC0, 0x1FAC5, W),
    RangeEntry::new(0x1FAD0, 0x1FAD9, W),
    RangeEntry::new(0x1FAE0, 0x1FAE7, W),
    RangeEntry::new(0x1FAF0, 0x1FAF6, W),
    RangeEntry::new(0x1FB00, 0x1FB92, N),
    RangeEntry::new(0x1FB94, 0x1FBCA, N),
    RangeEntry::new(0x1FBF0, 0x1FBF9, N),
    RangeEntry::new(0x20000, 0x2FFFD, W),
    RangeEntry::new(0x30000, 0x3FFFD, W),
    RangeEntry::new(0xE0001, 0xE0001, N),
    RangeEntry::new(0xE0020, 0xE007F, N),
    RangeEntry::new(0xE0100, 0xE01EF, A),
    RangeEntry::new(0xF0000, 0xFFFFD, A),
    RangeEntry::new(0x100000, 0x10FFFD, A),
];
