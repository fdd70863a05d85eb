#![forbid(unsafe_code)]

//! Character set conversion for the FrankenTerm engine.
//!
//! Bytes arriving from the host are decoded to Unicode here before the
//! terminal classifies and draws them, and text leaving the terminal is
//! encoded back into whatever the host expects.
//!
//! # Primary responsibilities
//!
//! - **Single-character codecs**: UTF-8 ([`decode_utf8`]), UTF-16
//!   ([`decode_utf16`]), ISO-8859 parts 1..=11 and 13..=16 ([`decode_byte`]),
//!   CP932 ([`decode_cp932`]), and DEC Special Graphics
//!   ([`dec_special_to_unicode`]). Each reports failure as a [`CodecError`]
//!   and never substitutes on its own.
//! - **Codec seam**: [`CharCodec`], implemented by [`Charset`].
//! - **Bulk conversion**: [`decode`], [`encode`], and the UTF-8/16/32 and
//!   legacy-to-UTF-16 loops in [`convert`], driven by [`ConvertOptions`].
//!
//! # Design principles
//!
//! - **Stateless**: every call is self-contained. A sequence cut off at the
//!   end of a buffer is reported as [`CodecError::Incomplete`]; carrying it
//!   into the next buffer is up to the caller.
//! - **Caller policy**: strict or lenient handling is an explicit option.
//!
//! ```
//! use frankenterm_charset::{Charset, ConvertOptions};
//!
//! let text = frankenterm_charset::decode(Charset::Cp932, &[0x82, 0xA0], &ConvertOptions::STRICT)?;
//! assert_eq!(text, "\u{3042}");
//! # Ok::<(), frankenterm_charset::ConvertError>(())
//! ```

pub mod codec;
pub mod convert;
pub mod cp932;
pub mod dec_special;
pub mod error;
pub mod iso8859;
pub mod logging;
pub mod options;
pub mod utf16;
pub mod utf8;

mod tables;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};

pub use codec::{CharCodec, Charset};
pub use convert::{
    decode, decode_with, encode, encode_with, multibyte_to_utf16, utf8_to_utf16, utf8_to_utf32,
    utf16_to_multibyte, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};
pub use cp932::{cp932_to_unicode, decode_cp932, encode_cp932, unicode_to_cp932};
pub use dec_special::{dec_special_to_unicode, unicode_to_dec_special};
pub use error::{CodecError, ConvertError};
pub use iso8859::{Iso8859Part, decode_byte, encode_byte};
pub use options::{ConvertOptions, ErrorMode};
pub use utf8::{decode_utf8, encode_utf8, utf8_resync_len};
pub use utf16::{decode_utf16, encode_utf16, is_high_surrogate, is_low_surrogate};
