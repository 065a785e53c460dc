//! Parser entry points.
//!
//! Thin free-function facade over [`Word::parse`] and
//! [`Descriptor::parse`], kept as the narrow surface consumed by the
//! surrounding table/metadata layer.

use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::word::Word;

/// Parse a single word, strictly. Fails on `;` or empty input.
pub fn parse_word(text: &str) -> Result<Word> {
    Word::parse(text)
}

/// Parse a descriptor, leniently. Never fails; unrecognized pieces are
/// dropped from the result.
pub fn parse_descriptor(text: &str) -> Descriptor {
    Descriptor::parse(text)
}
