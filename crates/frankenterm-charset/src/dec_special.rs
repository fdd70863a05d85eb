//! DEC Special Graphics, the VT100 line drawing set.
//!
//! Designated with `ESC ( 0`, it replaces the 32 bytes 0x5F..=0x7E with box
//! drawing pieces, scan lines, and a few symbols. The rest of the 7-bit
//! range keeps its ASCII meaning. Bytes with the high bit set are not part
//! of the set.

const FIRST_GRAPHIC: u8 = 0x5F;

/// Glyphs for 0x5F..=0x7E in byte order.
const GRAPHICS: [char; 32] = [
    '\u{00A0}', // _  blank
    '\u{25C6}', // `  diamond
    '\u{2592}', // a  checkerboard
    '\u{2409}', // b  HT
    '\u{240C}', // c  FF
    '\u{240D}', // d  CR
    '\u{240A}', // e  LF
    '\u{00B0}', // f  degree
    '\u{00B1}', // g  plus/minus
    '\u{2424}', // h  NL
    '\u{240B}', // i  VT
    '\u{2518}', // j  lower right corner
    '\u{2510}', // k  upper right corner
    '\u{250C}', // l  upper left corner
    '\u{2514}', // m  lower left corner
    '\u{253C}', // n  crossing lines
    '\u{23BA}', // o  scan line 1
    '\u{23BB}', // p  scan line 3
    '\u{2500}', // q  scan line 5, horizontal line
    '\u{23BC}', // r  scan line 7
    '\u{23BD}', // s  scan line 9
    '\u{251C}', // t  left tee
    '\u{2524}', // u  right tee
    '\u{2534}', // v  bottom tee
    '\u{252C}', // w  top tee
    '\u{2502}', // x  vertical line
    '\u{2264}', // y  less or equal
    '\u{2265}', // z  greater or equal
    '\u{03C0}', // {  pi
    '\u{2260}', // |  not equal
    '\u{00A3}', // }  pound sign
    '\u{00B7}', // ~  centered dot
];

/// Character drawn for `byte` while DEC Special Graphics is active.
#[must_use]
pub fn dec_special_to_unicode(byte: u8) -> Option<char> {
    match byte {
        FIRST_GRAPHIC..=0x7E => Some(GRAPHICS[usize::from(byte - FIRST_GRAPHIC)]),
        0x00..=0x7F => Some(char::from(byte)),
        _ => None,
    }
}

/// Byte that draws `scalar` in DEC Special Graphics.
///
/// ASCII below 0x5F (and DEL) maps to itself; the 32 graphics map back to
/// their byte. Letters in the replaced range have no encoding.
#[must_use]
pub fn unicode_to_dec_special(scalar: u32) -> Option<u8> {
    if scalar < u32::from(FIRST_GRAPHIC) || scalar == 0x7F {
        return u8::try_from(scalar).ok();
    }
    let ch = char::from_u32(scalar)?;
    let index = GRAPHICS.iter().position(|&glyph| glyph == ch)?;
    u8::try_from(index).ok().map(|offset| FIRST_GRAPHIC + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_drawing_bytes() {
        assert_eq!(dec_special_to_unicode(b'q'), Some('─'));
        assert_eq!(dec_special_to_unicode(b'x'), Some('│'));
        assert_eq!(dec_special_to_unicode(b'l'), Some('┌'));
        assert_eq!(dec_special_to_unicode(b'j'), Some('┘'));
        assert_eq!(dec_special_to_unicode(b'n'), Some('┼'));
        assert_eq!(dec_special_to_unicode(b'`'), Some('◆'));
        assert_eq!(dec_special_to_unicode(b'~'), Some('·'));
    }

    #[test]
    fn low_ascii_passes_through() {
        assert_eq!(dec_special_to_unicode(b'A'), Some('A'));
        assert_eq!(dec_special_to_unicode(b'0'), Some('0'));
        assert_eq!(dec_special_to_unicode(0x7F), Some('\u{7F}'));
        assert_eq!(dec_special_to_unicode(0x80), None);
        assert_eq!(dec_special_to_unicode(0xFF), None);
    }

    #[test]
    fn every_graphic_round_trips() {
        for byte in 0x00..=0x7F {
            let ch = dec_special_to_unicode(byte).unwrap();
            assert_eq!(unicode_to_dec_special(u32::from(ch)), Some(byte), "{byte:#04X}");
        }
    }

    #[test]
    fn replaced_letters_have_no_encoding() {
        assert_eq!(unicode_to_dec_special(u32::from('q')), None);
        assert_eq!(unicode_to_dec_special(u32::from('_')), None);
        assert_eq!(unicode_to_dec_special(0x2550), None);
        assert_eq!(unicode_to_dec_special(0xD800), None);
    }
}
