// Generated from the Unicode Character Database 14.0.0. Do not edit by hand.

use crate::range_table::RangeEntry;

/// Unicode blocks in code point order.
pub static BLOCKS: &[RangeEntry<&str>] = &[
    RangeEntry::new(0x0000, 0x007F, "Basic Latin"),
    RangeEntry::new(0x0080, 0x00FF, "Latin-1 Supplement"),
    RangeEntry::new(0x0100, 0x017F, "Latin Extended-A"),
    RangeEntry::new(0x0180, 0x024F, "Latin Extended-B"),
    RangeEntry::new(0x0250, 0x02AF, "IPA Extensions"),
    RangeEntry::new(0x02B0, 0x02FF, "Spacing Modifier Letters"),
    RangeEntry::new(0x0300, 0x036F, "Combining Diacritical Marks"),
    RangeEntry::new(0x0370, 0x03FF, "Greek and Coptic"),
    RangeEntry::new(0x0400, 0x04FF, "Cyrillic"),
    RangeEntry::new(0x0500, 0x052F, "Cyrillic Supplement"),
    RangeEntry::new(0x0530, 0x058F, "Armenian"),
    RangeEntry::new(0x0590, 0x05FF, "Hebrew"),
    RangeEntry::new(0x0600, 0x06FF, "Arabic"),
    RangeEntry::new(0x0700, 0x074F, "Syriac"),
    RangeEntry::new(0x0750, 0x077F, "Arabic Supplement"),
    RangeEntry::new(0x0780, 0x07BF, "Thaana"),
    RangeEntry::new(0x07C0, 0x07FF, "NKo"),
    RangeEntry::new(0x0800, 0x083F, "Samaritan"),
    RangeEntry::new(0x0840, 0x085F, "Mandaic"),
    RangeEntry::new(0x0860, 0x086F, "Syriac Supplement"),
    RangeEntry::new(0x0870, 0x089F, "Arabic Extended-B"),
    RangeEntry::new(0x08A0, 0x08FF, "Arabic Extended-A"),
    RangeEntry::new(0x0900, 0x097F, "Devanagari"),
    RangeEntry::new(0x0980, 0x09FF, "Bengali"),
    RangeEntry::new(0x0A00, 0x0A7F, "Gurmukhi"),
    RangeEntry::new(0x0A80, 0x0AFF, "Gujarati"),
    RangeEntry::new(0x0B00, 0x0B7F, "Oriya"),
    RangeEntry::new(0x0B80, 0x0BFF, "Tamil"),
    RangeEntry::new(0x0C00, 0x0C7F, "Telugu"),
    RangeEntry::new(0x0C80, 0x0CFF, "Kannada"),
    RangeEntry::new(0x0D00, 0x0D7F, "Malayalam"),
    RangeEntry::new(0x0D80, 0x0DFF, "Sinhala"),
    RangeEntry::new(0x0E00, 0x0E7F, "Thai"),
    RangeEntry::new(0x0E80, 0x0EFF, "Lao"),
    RangeEntry::new(0x0F00, 0x0FFF, "Tibetan"),
    RangeEntry::new(0x1000, 0x109F, "Myanmar"),
    RangeEntry::new(0x10A0, 0x10FF, "Georgian"),
    RangeEntry::new(0x1100, 0x11FF, "Hangul Jamo"),
    RangeEntry::new(0x1200, 0x137F, "Ethiopic"),
    RangeEntry::new(0x1380, 0x139F, "Ethiopic Supplement"),
    RangeEntry::new(0x13A0, 0x13FF, "Cherokee"),
    RangeEntry::new(0x1400, 0x167F, "Unified Canadian Aboriginal Syllabics"),
    RangeEntry::new(0x1680, 0x169F, "Ogham"),
    RangeEntry::new(0x16A0, 0x16FF, "Runic"),
    RangeEntry::new(0x1700, 0x171F, "Tagalog"),
    RangeEntry::new(0x1720, 0x173F, "Hanunoo"),
    RangeEntry::new(0x1740, 0x175F, "Buhid"),
    RangeEntry::new(0x1760, 0x177F, "Tagbanwa"),
    RangeEntry::new(0x1780, 0x17FF, "Khmer"),
    RangeEntry::new(0x1800, 0x18AF, "Mongolian"),
    RangeEntry::new(0x18B0, 0x18FF, "Unified Canadian Aboriginal Syllabics Extended"),
    RangeEntry::new(0x1900, 0x194F, "Limbu"),
    RangeEntry::new(0x1950, 0x197F, "Tai Le"),
    RangeEntry::new(0x1980, 0x19DF, "New Tai Lue"),
    RangeEntry::new(0x19E0, 0x19FF, "Khmer Symbols"),
    RangeEntry::new(0x1A00, 0x1A1F, "Buginese"),
    RangeEntry::new(0x1A20, 0x1AAF, "Tai Tham"),
    RangeEntry::new(0x1AB0, 0x1AFF, "Combining Diacritical Marks Extended"),
    RangeEntry::new(0x1B00, 0x1B7F, "Balinese"),
    RangeEntry::new(0x1B80, 0x1BBF, "Sundanese"),
    RangeEntry::new(0x1BC0, 0x1BFF, "Batak"),
    RangeEntry::new(0x1C00, 0x1C4F, "Lepcha"),
    RangeEntry::new(0x1C50, 0x1C7F, "Ol Chiki"),
    RangeEntry::new(0x1C80, 0x1C8F, "Cyrillic Extended-C"),
    RangeEntry::new(0x1C90, 0x1CBF, "Georgian Extended"),
    RangeEntry::new(0x1CC0, 0x1CCF, "Sundanese Supplement"),
    RangeEntry::new(0x1CD0, 0x1CFF, "Vedic Extensions"),
    RangeEntry::new(0x1D00, 0x1D7F, "Phonetic Extensions"),
    RangeEntry::new(0x1D80, 0x1DBF, "Phonetic Extensions Supplement"),
    RangeEntry::new(0x1DC0, 0x1DFF, "Combining Diacritical Marks Supplement"),
    RangeEntry::new(0x1E00, 0x1EFF, "Latin Extended Additional"),
    RangeEntry::new(0x1F00, 0x1FFF, "Greek Extended"),
    RangeEntry::new(0x2000, 0x206F, "General Punctuation"),
    RangeEntry::new(0x2070, 0x209F, "Superscripts and Subscripts"),
    RangeEntry::new(0x20A0, 0x20CF, "Currency Symbols"),
    RangeEntry::new(0x20D0, 0x20FF, "Combining Diacritical Marks for Symbols"),
    RangeEntry::new(0x2100, 0x214F, "Letterlike Symbols"),
    RangeEntry::new(0x2150, 0x218F, "Number Forms"),
    RangeEntry::new(0x2190, 0x21FF, "Arrows"),
    RangeEntry::new(0x2200, 0x22FF, "Mathematical Operators"),
    RangeEntry::new(0x2300, 0x23FF, "Miscellaneous Technical"),
    RangeEntry::new(0x2400, 0x243F, "Control Pictures"),
    RangeEntry::new(0x2440, 0x245F, "Optical Character Recognition"),
    RangeEntry::new(0x2460, 0x24FF, "Enclosed Alphanumerics"),
    RangeEntry::new(0x2500, 0x257F, "Box Drawing"),
    RangeEntry::new(0x2580, 0x259F, "Block Elements"),
    RangeEntry::new(0x25A0, 0x25FF, "Geometric Shapes"),
    RangeEntry::new(0x2600, 0x26FF, "Miscellaneous Symbols"),
    RangeEntry::new(0x2700, 0x27BF, "Dingbats"),
    RangeEntry::new(0x27C0, 0x27EF, "Miscellaneous Mathematical Symbols-A"),
    RangeEntry::new(0x27F0, 0x27FF, "Supplemental Arrows-A"),
    RangeEntry::new(0x2800, 0x28FF, "Braille Patterns"),
    RangeEntry::new(0x2900, 0x297F, "Supplemental Arrows-B"),
    RangeEntry::new(0x2980, 0x29FF, "Miscellaneous Mathematical Symbols-B"),
    RangeEntry::new(0x2A00, 0x2AFF, "Supplemental Mathematical Operators"),
    RangeEntry::new(0x2B00, 0x2BFF, "Miscellaneous Symbols and Arrows"),
    RangeEntry::new(0x2C00, 0x2C5F, "Glagolitic"),
    RangeEntry::new(0x2C60, 0x2C7F, "Latin Extended-C"),
    RangeEntry::new(0x2C80, 0x2CFF, "Coptic"),
    RangeEntry::new(0x2D00, 0x2D2F, "Georgian Supplement"),
    RangeEntry::new(0x2D30, 0x2D7F, "Tifinagh"),
    RangeEntry::new(0x2D80, 0x2DDF, "Ethiopic Extended"),
    RangeEntry::new(0x2DE0, 0x2DFF, "Cyrillic Extended-A"),
    RangeEntry::new(0x2E00, 0x2E7F, "Supplemental Punctuation"),
    RangeEntry::new(0x2E80, 0x2EFF, "CJK Radicals Supplement"),
    RangeEntry::new(0x2F00, 0x2FDF, "Kangxi Radicals"),
    RangeEntry::new(0x2FF0, 0x2FFF, "Ideographic Description Characters"),
    RangeEntry::new(0x3000, 0x303F, "CJK Symbols and Punctuation"),
    RangeEntry::new(0x3040, 0x309F, "Hiragana"),
    RangeEntry::new(0x30A0, 0x30FF, "Katakana"),
    RangeEntry::new(0x3100, 0x312F, "Bopomofo"),
    RangeEntry::new(0x3130, 0x318F, "Hangul Compatibility Jamo"),
    RangeEntry::new(0x3190, 0x319F, "Kanbun"),
    RangeEntry::new(0x31A0, 0x31BF, "Bopomofo Extended"),
    RangeEntry::new(0x31C0, 0x31EF, "CJK Strokes"),
    RangeEntry::new(0x31F0, 0x31FF, "Katakana Phonetic Extensions"),
    RangeEntry::new(0x3200, 0x32FF, "Enclosed CJK Letters and Months"),
    RangeEntry::new(0x3300, 0x33FF, "CJK Compatibility"),
    RangeEntry::new(0x3400, 0x4DBF, "CJK Unified Ideographs Extension A"),
    RangeEntry::new(0x4DC0, 0x4DFF, "Yijing Hexagram Symbols"),
    RangeEntry::new(0x4E00, 0x9FFF, "CJK Unified Ideographs"),
    RangeEntry::new(0xA000, 0xA48F, "Yi Syllables"),
    RangeEntry::new(0xA490, 0xA4CF, "Yi Radicals"),
    RangeEntry::new(0xA4D0, 0xA4FF, "Lisu"),
    RangeEntry::new(0xA500, 0xA63F, "Vai"),
    RangeEntry::new(0xA640, 0xA69F, "Cyrillic Extended-B"),
    RangeEntry::new(0xA6A0, 0xA6FF, "Bamum"),
    RangeEntry::new(0xA700, 0xA71F, "Modifier Tone Letters"),
    RangeEntry::new(0xA720, 0xA7FF, "Latin Extended-D"),
    RangeEntry::new(0xA800, 0xA82F, "Syloti Nagri"),
    RangeEntry::new(0xA830, 0xA83F, "Common Indic Number Forms"),
    RangeEntry::new(0xA840, 0xA87F, "Phags-pa"),
    RangeEntry::new(0xA880, 0xA8DF, "Saurashtra"),
    RangeEntry::new(0xA8E0, 0xA8FF, "Devanagari Extended"),
    RangeEntry::new(0xA900, 0xA92F, "Kayah Li"),
    RangeEntry::new(0xA930, 0xA95F, "Rejang"),
    RangeEntry::new(0xA960, 0xA97F, "Hangul Jamo Extended-A"),
    RangeEntry::new(0xA980, 0xA9DF, "Javanese"),
    RangeEntry::new(0xA9E0, 0xA9FF, "Myanmar Extended-B"),
    RangeEntry::new(0xAA00, 0xAA5F, "Cham"),
    RangeEntry::new(0xAA60, 0xAA7F, "Myanmar Extended-A"),
    RangeEntry::new(0xAA80, 0xAADF, "Tai Viet"),
    RangeEntry::new(0xAAE0, 0xAAFF, "Meetei Mayek Extensions"),
    RangeEntry::new(0xAB00, 0xAB2F, "Ethiopic Extended-A"),
    RangeEntry::new(0xAB30, 0xAB6F, "Latin Extended-E"),
    RangeEntry::new(0xAB70, 0xABBF, "Cherokee Supplement"),
    RangeEntry::new(0xABC0, 0xABFF, "Meetei Mayek"),
    RangeEntry::new(0xAC00, 0xD7AF, "Hangul Syllables"),
    RangeEntry::new(0xD7B0, 0xD7FF, "Hangul Jamo Extended-B"),
    RangeEntry::new(0xD800, 0xDB7F, "High Surrogates"),
    RangeEntry::new(0xDB80, 0xDBFF, "High Private Use Surrogates"),
    RangeEntry::new(0xDC00, 0xDFFF, "Low Surrogates"),
    RangeEntry::new(0xE000, 0xF8FF, "Private Use Area"),
    RangeEntry::new(0xF900, 0xFAFF, "CJK Compatibility Ideographs"),
    RangeEntry::new(0xFB00, 0xFB4F, "Alphabetic Presentation Forms"),
    RangeEntry::new(0xFB50, 0xFDFF, "Arabic Presentation Forms-A"),
    RangeEntry::new(0xFE00, 0xFE0F, "Variation Selectors"),
    RangeEntry::new(0xFE10, 0xFE1F, "Vertical Forms"),
    RangeEntry::new(0xFE20, 0xFE2F, "Combining Half Marks"),
    RangeEntry::new(0xFE30, 0xFE4F, "CJK Compatibility Forms"),
    RangeEntry::new(0xFE50, 0xFE6F, "Small Form Variants"),
    RangeEntry::new(0xFE70, 0xFEFF, "Arabic Presentation Forms-B"),
    RangeEntry::new(0xFF00, 0xFFEF, "Halfwidth and Fullwidth Forms"),
    RangeEntry::new(0xFFF0, 0xFFFF, "Specials"),
    RangeEntry::new(0x10000, 0x1007F, "Linear B Syllabary"),
    RangeEntry::new(0x10080, 0x100FF, "Linear B Ideograms"),
    RangeEntry::new(0x10100, 0x1013F, "Aegean Numbers"),
    RangeEntry::new(0x10140, 0x1018F, "Ancient Greek Numbers"),
    RangeEntry::new(0x10190, 0x101CF, "Ancient Symbols"),
    RangeEntry::new(0x101D0, 0x101FF, "Phaistos Disc"),
    RangeEntry::new(0x10280, 0x1029F, "Lycian"),
    RangeEntry::new(0x102A0, 0x102DF, "Carian"),
    RangeEntry::new(0x102E0, 0x102FF, "Coptic Epact Numbers"),
    RangeEntry::new(0x10300, 0x1032F, "Old Italic"),
    RangeEntry::new(0x10330, 0x1034F, "Gothic"),
    RangeEntry::new(0x10350, 0x1037F, "Old Permic"),
    RangeEntry::new(0x10380, 0x1039F, "Ugaritic"),
    RangeEntry::new(0x103A0, 0x103DF, "Old Persian"),
    RangeEntry::new(0x10400, 0x1044F, "Deseret"),
    RangeEntry::new(0x10450, 0x1047F, "Shavian"),
    RangeEntry::new(0x10480, 0x104AF, "Osmanya"),
    RangeEntry::new(0x104B0, 0x104FF, "Osage"),
    RangeEntry::new(0x10500, 0x1052F, "Elbasan"),
    RangeEntry::new(0x10530, 0x1056F, "Caucasian Albanian"),
    RangeEntry::new(0x10570, 0x105BF, "Vithkuqi"),
    RangeEntry::new(0x10600, 0x1077F, "Linear A"),
    RangeEntry::new(0x10780, 0x107BF, "Latin Extended-F"),
    RangeEntry::new(0x10800, 0x1083F, "Cypriot Syllabary"),
    RangeEntry::new(0x10840, 0x1085F, "Imperial Aramaic"),
    RangeEntry::new(0x10860, 0x1087F, "Palmyrene"),
    RangeEntry::new(0x10880, 0x108AF, "Nabataean"),
    RangeEntry::new(0x108E0, 0x108FF, "Hatran"),
    RangeEntry::new(0x10900, 0x1091F, "Phoenician"),
    RangeEntry::new(0x10920, 0x1093F, "Lydian"),
    RangeEntry::new(0x10980, 0x1099F, "Meroitic Hieroglyphs"),
    RangeEntry::new(0x109A0, 0x109FF, "Meroitic Cursive"),
    RangeEntry::new(0x10A00, 0x10A5F, "Kharoshthi"),
    RangeEntry::new(0x10A60, 0x10A7F, "Old South Arabian"),
    RangeEntry::new(0x10A80, 0x10A9F, "Old North Arabian"),
    RangeEntry::new(0x10AC0, 0x10AFF, "Manichaean"),
    RangeEntry::new(0x10B00, 0x10B3F, "Avestan"),
    RangeEntry::new(0x10B40, 0x10B5F, "Inscriptional Parthian"),
    RangeEntry::new(0x10B60, 0x10B7F, "Inscriptional Pahlavi"),
    RangeEntry::new(0x10B80, 0x10BAF, "Psalter Pahlavi"),
    RangeEntry::new(0x10C00, 0x10C4F, "Old Turkic"),
    RangeEntry::new(0x10C80, 0x10CFF, "Old Hungarian"),
    RangeEntry::new(0x10D00, 0x10D3F, "Hanifi Rohingya"),
    RangeEntry::new(0x10E60, 0x10E7F, "Rumi Numeral Symbols"),
    RangeEntry::new(0x10E80, 0x10EBF, "Yezidi"),
    RangeEntry::new(0x10F00, 0x10F2F, "Old Sogdian"),
    RangeEntry::new(0x10F30, 0x10F6F, "Sogdian"),
    RangeEntry::new(0x10F70, 0x10FAF, "Old Uyghur"),
    RangeEntry::new(0x10FB0, 0x10FDF, "Chorasmian"),
    RangeEntry::new(0x10FE0, 0x10FFF, "Elymaic"),
    RangeEntry::new(0x11000, 0x1107F, "Brahmi"),
    RangeEntry::new(0x11080, 0x110CF, "Kaithi"),
    RangeEntry::new(0x110D0, 0x110FF, "Sora Sompeng"),
    RangeEntry::new(0x11100, 0x1114F, "Chakma"),
    RangeEntry::new(0x11150, 0x1117F, "Mahajani"),
    RangeEntry::new(0x11180, 0x111DF, "Sharada"),
    RangeEntry::new(0x111E0, 0x111FF, "Sinhala Archaic Numbers"),
    RangeEntry::new(0x11200, 0x1124F, "Khojki"),
    RangeEntry::new(0x11280, 0x112AF, "Multani"),
    RangeEntry::new(0x112B0, 0x112FF, "Khudawadi"),
    RangeEntry::new(0x11300, 0x1137F, "Grantha"),
    RangeEntry::new(0x11400, 0x1147F, "Newa"),
    RangeEntry::new(0x11480, 0x114DF, "Tirhuta"),
    RangeEntry::new(0x11580, 0x115FF, "Siddham"),
    RangeEntry::new(0x11600, 0x1165F, "Modi"),
    RangeEntry::new(0x11660, 0x1167F, "Mongolian Supplement"),
    RangeEntry::new(0x11680, 0x116CF, "Takri"),
    RangeEntry::new(0x11700, 0x1174F, "Ahom"),
    RangeEntry::new(0x11800, 0x1184F, "Dogra"),
    RangeEntry::new(0x118A0, 0x118FF, "Warang Citi"),
    RangeEntry::new(0x11900, 0x1195F, "Dives Akuru"),
    RangeEntry::new(0x119A0, 0x119FF, "Nandinagari"),
    RangeEntry::new(0x11A00, 0x11A4F, "Zanabazar Square"),
    RangeEntry::new(0x11A50, 0x11AAF, "Soyombo"),
    RangeEntry::new(0x11AB0, 0x11ABF, "Unified Canadian Aboriginal Syllabics Extended-A"),
    RangeEntry::new(0x11AC0, 0x11AFF, "Pau Cin Hau"),
    RangeEntry::new(0x11C00, 0x11C6F, "Bhaiksuki"),
    RangeEntry::new(0x11C70, 0x11CBF, "Marchen"),
    RangeEntry::new(0x11D00, 0x11D5F, "Masaram Gondi"),
    RangeEntry::new(0x11D60, 0x11DAF, "Gunjala Gondi"),
    RangeEntry::new(0x11EE0, 0x11EFF, "Makasar"),
    RangeEntry::new(0x11FB0, 0x11FBF, "Lisu Supplement"),
    RangeEntry::new(0x11FC0, 0x11FFF, "Tamil Supplement"),
    RangeEntry::new(0x12000, 0x123FF, "Cuneiform"),
    RangeEntry::new(0x12400, 0x1247F, "Cuneiform Numbers and Punctuation"),
    RangeEntry::new(0x12480, 0x1254F, "Early Dynastic Cuneiform"),
    RangeEntry::new(0x12F90, 0x12FFF, "Cypro-Minoan"),
    RangeEntry::new(0x13000, 0x1342F, "Egyptian Hieroglyphs"),
    RangeEntry::new(0x13430, 0x1343F, "Egyptian Hieroglyph Format Controls"),
    RangeEntry::new(0x14400, 0x1467F, "Anatolian Hieroglyphs"),
    RangeEntry::new(0x16800, 0x16A3F, "Bamum Supplement"),
    RangeEntry::new(0x16A40, 0x16A6F, "Mro"),
    RangeEntry::new(0x16A70, 0x16ACF, "Tangsa"),
    RangeEntry::new(0x16AD0, 0x16AFF, "Bassa Vah"),
    RangeEntry::new(0x16B00, 0x16B8F, "Pahawh Hmong"),
    RangeEntry::new(0x16E40, 0x16E9F, "Medefaidrin"),
    RangeEntry::new(0x16F00, 0x16F9F, "Miao"),
    RangeEntry::new(0x16FE0, 0x16FFF, "Ideographic Symbols and Punctuation"),
    RangeEntry::new(0x17000, 0x187FF, "Tangut"),
    RangeEntry::new(0x18800, 0x18AFF, "Tangut Components"),
    RangeEntry::new(0x18B00, 0x18CFF, "Khitan Small Script"),
    RangeEntry::new(0x18D00, 0x18D7F, "Tangut Supplement"),
    RangeEntry::new(0x1AFF0, 0x1AFFF, "Kana Extended-B"),
    RangeEntry::new(0x1B000, 0x1B0FF, "Kana Supplement"),
    RangeEntry::new(0x1B100, 0x1B12F, "Kana Extended-A"),
    RangeEntry::new(0x1B130, 0x1B16F, "Small Kana Extension"),
    RangeEntry::new(0x1B170, 0x1B2FF, "Nushu"),
    RangeEntry::new(0x1BC00, 0x1BC9F, "Duployan"),
    RangeEntry::new(0x1BCA0, 0x1BCAF, "Shorthand Format Controls"),
    RangeEntry::new(0x1CF00, 0x1CFCF, "Znamenny Musical Notation"),
    RangeEntry::new(0x1D000, 0x1D0FF, "Byzantine Musical Symbols"),
    RangeEntry::new(0x1D100, 0x1D1FF, "Musical Symbols"),
    RangeEntry::new(0x1D200, 0x1D24F, "Ancient Greek Musical Notation"),
    RangeEntry::new(0x1D2E0, 0x1D2FF, "Mayan Numerals"),
    RangeEntry::new(0x1D300, 0x1D35F, "Tai Xuan Jing Symbols"),
    RangeEntry::new(0x1D360, 0x1D37F, "Counting Rod Numerals"),
    RangeEntry::new(0x1D400, 0x1D7FF, "Mathematical Alphanumeric Symbols"),
    RangeEntry::new(0x1D800, 0x1DAAF, "Sutton SignWriting"),
    RangeEntry::new(0x1DF00, 0x1DFFF, "Latin Extended-G"),
    RangeEntry::new(0x1E000, 0x1E02F, "Glagolitic Supplement"),
    RangeEntry::new(0x1E100, 0x1E14F, "Nyiakeng Puachue Hmong"),
    RangeEntry::new(0x1E290, 0x1E2BF, "Toto"),
    RangeEntry::new(0x1E2C0, 0x1E2FF, "Wancho"),
    RangeEntry::new(0x1E7E0, 0x1E7FF, "Ethiopic Extended-B"),
    RangeEntry::new(0x1E800, 0x1E8DF, "Mende Kikakui"),
    RangeEntry::new(0x1E900, 0x1E95F, "Adlam"),
    RangeEntry::new(0x1EC70, 0x1ECBF, "Indic Siyaq Numbers"),
    RangeEntry::new(0x1ED00, 0x1ED4F, "Ottoman Siyaq Numbers"),
    RangeEntry::new(0x1EE00, 0x1EEFF, "Arabic Mathematical Alphabetic Symbols"),
    RangeEntry::new(0x1F000, 0x1F02F, "Mahjong Tiles"),
    RangeEntry::new(0x1F030, 0x1F09F, "Domino Tiles"),
    RangeEntry::new(0x1F0A0, 0x1F0FF, "Playing Cards"),
    RangeEntry::new(0x1F100, 0x1F1FF, "Enclosed Alphanumeric Supplement"),
    RangeEntry::new(0x1F200, 0x1F2FF, "Enclosed Ideographic Supplement"),
    RangeEntry::new(0x1F300, 0x1F5FF, "Miscellaneous Symbols and Pictographs"),
    RangeEntry::new(0x1F600, 0x1F64F, "Emoticons"),
    RangeEntry::new(0x1F650, 0x1F67F, "Ornamental Dingbats"),
    RangeEntry::new(0x1F680, 0x1F6FF, "Transport and Map Symbols"),
    RangeEntry::new(0x1F700, 0x1F77F, "Alchemical Symbols"),
    RangeEntry::new(0x1F780, 0x1F7FF, "Geometric Shapes Extended"),
    RangeEntry::new(0x1F800, 0x1F8FF, "Supplemental Arrows-C"),
    RangeEntry::new(0x1F900, 0x1F9FF, "Supplemental Symbols and Pictographs"),
    RangeEntry::new(0x1FA00, 0x1FA6F, "Chess Symbols"),
    RangeEntry::new(0x1FA70, 0x1FAFF, "Symbols and Pictographs Extended-A"),
    RangeEntry::new(0x1FB00, 0x1FBFF, "Symbols for Legacy Computing"),
    RangeEntry::new(0x20000, 0x2A6DF, "CJK Unified Ideographs Extension B"),
    RangeEntry::new(0x2A700, 0x2B73F, "CJK Unified Ideographs Extension C"),
    RangeEntry::new(0x2B740, 0x2B81F, "CJK Unified Ideographs Extension D"),
    RangeEntry::new(0x2B820, 0x2CEAF, "CJK Unified Ideographs Extension E"),
    RangeEntry::new(0x2CEB0, 0x2EBEF, "CJK Unified Ideographs Extension F"),
    RangeEntry::new(0x2F800, 0x2FA1F, "CJK Compatibility Ideographs Supplement"),
    RangeEntry::new(0x30000, 0x3134F, "CJK Unified Ideographs Extension G"),
    RangeEntry::new(0xE0000, 0xE007F, "Tags"),
    RangeEntry::new(0xE0100, 0xE01EF, "Variation Selectors Supplement"),
    RangeEntry::new(0xF0000, 0xFFFFF, "Supplementary Private Use Area-A"),
    RangeEntry::new(0x100000, 0x10FFFF, "Supplementary Private Use Area-B"),
];
