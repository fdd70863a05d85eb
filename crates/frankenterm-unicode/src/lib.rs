#![forbid(unsafe_code)]

//! Code point classification for the FrankenTerm engine.
//!
//! Every character the terminal displays passes through this crate to decide
//! how many cells it occupies and whether it attaches to the previous cell.
//!
//! # Primary responsibilities
//!
//! - **Range tables**: one closed-interval binary search ([`lookup`]) shared by
//!   every dataset, with an invariant check ([`verify_tables`]).
//! - **Classifiers**: East Asian Width ([`width_class`]), combining marks
//!   ([`combining_class`]), emoji presentation ([`is_emoji`]), virama
//!   ([`is_virama`]), and block membership ([`block_index`], [`block_name`]).
//! - **Composition**: canonical base + mark pairs to a precomposed character
//!   ([`compose`]).
//! - **Cell width**: the renderer-facing column count under a caller
//!   [`WidthPolicy`] ([`cell_width`]).
//!
//! # Design principles
//!
//! - **Static data**: tables are generated constant slices; there is no
//!   initialization, caching, or interior mutability. Every function is pure
//!   and safe to call from any number of threads.
//! - **Misses are answers**: a code point absent from a table gets the
//!   documented default (Halfwidth, not combining, no block), never an error.
//!
//! ```
//! use frankenterm_unicode::{CombiningClass, WidthClass, WidthPolicy};
//!
//! assert_eq!(frankenterm_unicode::width_class(0x4E2D), WidthClass::Wide);
//! assert_eq!(
//!     frankenterm_unicode::combining_class(0x0301),
//!     CombiningClass::Nonspacing
//! );
//! assert_eq!(frankenterm_unicode::cell_width(0x03B1, &WidthPolicy::CJK), 2);
//! ```

pub mod block;
pub mod cell_width;
pub mod combining;
pub mod compose;
pub mod properties;
pub mod range_table;
pub mod width;

mod tables;

pub use block::{block_count, block_index, block_name, block_of};
pub use cell_width::{WidthPolicy, cell_width};
pub use combining::{CombiningClass, combining_class};
pub use compose::{compose, compose_chars};
pub use properties::{is_emoji, is_virama};
pub use range_table::{RangeEntry, RangeTable, TableError, TableErrorKind, lookup};
pub use tables::verify_tables;
pub use width::{WidthClass, width_class};

/// The shipped datasets, for callers that need raw access (diagnostics,
/// property tests against a linear-scan oracle).
pub mod data {
    pub use crate::tables::{BLOCKS, COMBINING, COMPOSITION_PAIRS, EMOJI, VIRAMA, WIDTH};
}
