//! # UCD Core
//!
//! Descriptor parsing and tree indexing for column classification tags.
//!
//! Table columns are annotated with UCD descriptors: `;`-separated lists
//! of dot-delimited classification words (`"pos.eq.ra;meta.main"`). This
//! crate provides:
//!
//! - Core types: [`Atom`], [`Word`], [`Descriptor`]
//! - Strict word parsing and lenient, vocabulary-checked descriptor
//!   parsing ([`parse_word`], [`parse_descriptor`])
//! - [`UcdIndex`], the owning forest that maps descriptors to caller
//!   payloads and answers "which columns carry tag X or anything
//!   beneath it?"
//!
//! ## Design Principles
//!
//! 1. **Runtime-agnostic**: no I/O, no async, CPU-bound operations over
//!    in-memory structures only
//! 2. **Strict words, lenient descriptors**: [`parse_word`] fails loudly
//!    on malformed input while [`parse_descriptor`] drops what it cannot
//!    interpret and always succeeds
//! 3. **Top-down ownership**: atom trees own their children exclusively;
//!    there are no parent back-references and no reference cycles
//!
//! ## Example
//!
//! ```
//! use ucd_core::{parse_descriptor, UcdIndex};
//!
//! let mut index = UcdIndex::new();
//! index.insert(&parse_descriptor("meta.id;meta.main"), "col1");
//! index.insert(&parse_descriptor("pos.eq.ra;meta.main"), "col2");
//!
//! let hits = index.search_text("meta.main");
//! assert_eq!(hits, vec![&"col1", &"col2"]);
//! ```

pub mod atom;
pub mod descriptor;
pub mod error;
pub mod index;
pub mod parse;
pub mod word;

// Re-export main types
pub use atom::Atom;
pub use descriptor::Descriptor;
pub use error::{Error, Result};
pub use index::UcdIndex;
pub use parse::{parse_descriptor, parse_word};
pub use word::Word;
