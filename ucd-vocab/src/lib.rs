//! UCD1+ Vocabulary Reference Data
//!
//! This crate provides a centralized location for the fixed parts of the
//! UCD1+ vocabulary used throughout the indexing core:
//!
//! - `roots` - the fixed table of top-level classification families
//! - `namespaces` - namespace tokens used to qualify words
//! - `words` - the controlled vocabulary word list and lookup helpers
//!
//! Everything here is read-only reference data. The index itself never
//! consults the root registry to gate insertion; it is advisory metadata
//! for documentation and validation tooling layered above the index.

pub mod namespaces;
pub mod roots;
pub mod words;

pub use roots::{RootFamily, RootRegistry};
