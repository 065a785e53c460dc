//! Descriptor: the full `;`-separated tag value attached to one column.

use crate::word::Word;
use std::fmt;
use ucd_vocab::{namespaces, words};

/// Ordered collection of [`Word`]s parsed from one descriptor string.
///
/// May be empty: parsing never fails, and a descriptor parsed from
/// garbage simply carries fewer (or zero) words.
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    words: Vec<Word>,
}

impl Descriptor {
    /// Parse a descriptor, leniently.
    ///
    /// The text is split on `;`; each non-empty piece goes through the
    /// controlled-vocabulary check and the accepted words are kept in
    /// order. Unrecognized or malformed pieces are silently dropped.
    /// This asymmetry with the strict [`Word::parse`] is deliberate:
    /// callers rely on descriptor parsing always succeeding, even for
    /// free-text input.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let mut out = Vec::new();
        if text.is_empty() {
            return Self { words: out };
        }
        for piece in text.split(';') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            for (namespace, path) in recognize(piece) {
                // recognize() only emits syntactically valid paths, so
                // word construction cannot fail here.
                if let Ok(word) = Word::in_namespace(namespace, path) {
                    out.push(word);
                }
            }
        }
        Self { words: out }
    }

    /// Words in descriptor order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no piece of the input was accepted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The first word, if any.
    pub fn primary(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Family of the primary word.
    pub fn family(&self) -> Option<&str> {
        self.primary().map(Word::family)
    }

    /// Families of all contained words, in order.
    pub fn scopes(&self) -> Vec<&str> {
        self.words.iter().map(Word::scope).collect()
    }

    /// Rendering that always carries namespaces.
    pub fn canonical_form(&self) -> String {
        self.words
            .iter()
            .map(Word::canonical_form)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// True when every requested scope is matched by some contained
    /// word: AND across scopes, OR across words, substring containment
    /// per word (see [`Word::isin`]).
    pub fn isin<I, S>(&self, scopes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scopes
            .into_iter()
            .all(|scope| self.words.iter().any(|w| w.isin([scope.as_ref()])))
    }
}

impl fmt::Display for Descriptor {
    /// Plain-text form: words joined by `;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in &self.words {
            if !first {
                f.write_str(";")?;
            }
            write!(f, "{word}")?;
            first = false;
        }
        Ok(())
    }
}

/// Descriptors compare by their rendered plain-text form.
impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Descriptor {}

impl<'a> IntoIterator for &'a Descriptor {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Controlled-vocabulary check for one `;`-separated piece.
///
/// Yields zero or more `(namespace, path)` pairs. Default-namespace
/// pieces must resolve against the word list (their canonical casing is
/// returned); explicitly namespaced pieces are accepted on syntax alone.
fn recognize(piece: &str) -> Vec<(&str, &str)> {
    let (namespace, path) = match piece.split_once(':') {
        Some((namespace, path)) => (namespace.trim(), path.trim()),
        None => (namespaces::DEFAULT, piece),
    };
    if namespaces::is_default(namespace) {
        match words::canonical(path) {
            Some(canonical) => vec![(namespaces::DEFAULT, canonical)],
            None => Vec::new(),
        }
    } else if namespaces::is_valid(namespace) && words::is_syntactic_word(path) {
        vec![(namespace, path)]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_semicolons() {
        let descriptor = Descriptor::parse("meta.id;meta.main");
        assert_eq!(descriptor.len(), 2);
        assert_eq!(descriptor.to_string(), "meta.id;meta.main");
        assert_eq!(descriptor.canonical_form(), "ivoa:meta.id;ivoa:meta.main");
        assert_eq!(descriptor.family(), Some("meta"));
        assert_eq!(descriptor.scopes(), ["meta", "meta"]);
    }

    #[test]
    fn empty_and_garbage_input_yield_empty_descriptors() {
        assert!(Descriptor::parse("").is_empty());
        assert!(Descriptor::parse("   ").is_empty());
        assert!(Descriptor::parse("not a ucd at all").is_empty());
        assert!(Descriptor::parse(";;;").is_empty());
    }

    #[test]
    fn unrecognized_pieces_are_dropped_not_fatal() {
        // "a" and "b" are not controlled-vocabulary words; the pieces
        // are skipped and parsing still succeeds.
        let descriptor = Descriptor::parse("a;b");
        assert!(descriptor.is_empty());

        let partial = Descriptor::parse("meta.id;nope.nope;pos.eq.ra");
        assert_eq!(partial.to_string(), "meta.id;pos.eq.ra");
    }

    #[test]
    fn casing_is_normalized_to_the_vocabulary() {
        let descriptor = Descriptor::parse("POS.EQ.RA;em.x-ray");
        assert_eq!(descriptor.to_string(), "pos.eq.ra;em.X-ray");
    }

    #[test]
    fn namespaced_pieces_skip_the_vocabulary_check() {
        let descriptor = Descriptor::parse("custom:survey.field;meta.main");
        assert_eq!(descriptor.to_string(), "custom:survey.field;meta.main");
        // ...but still have to be syntactically well-formed.
        assert!(Descriptor::parse("custom:not a word").is_empty());
    }

    #[test]
    fn equality_is_by_rendered_form() {
        let a = Descriptor::parse("meta.id;meta.main");
        let b = Descriptor::parse(" meta.id ; meta.main ");
        assert_eq!(a, b);
        assert_ne!(a, Descriptor::parse("meta.main"));
    }

    #[test]
    fn isin_requires_every_scope() {
        let descriptor = Descriptor::parse("pos.eq.ra;meta.main");
        assert!(descriptor.isin(["pos"]));
        assert!(descriptor.isin(["pos", "meta.main"]));
        assert!(!descriptor.isin(["pos", "phot"]));
        assert!(!Descriptor::parse("").isin(["pos"]));
    }

    #[test]
    fn primary_is_the_first_word() {
        let descriptor = Descriptor::parse("pos.eq.ra;meta.main");
        assert_eq!(descriptor.primary().map(Word::to_string).as_deref(), Some("pos.eq.ra"));
        assert!(Descriptor::parse("").primary().is_none());
    }
}
