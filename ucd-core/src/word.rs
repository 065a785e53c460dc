//! Single UCD word: a namespaced, dot-separated classification path.

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use ucd_vocab::namespaces;

/// One classification path from a family root to a leaf, e.g.
/// `pos.eq.ra`, optionally qualified by a namespace (`custom:survey.id`).
///
/// The atom sequence is always non-empty; the first atom is the word's
/// family.
#[derive(Debug, Clone)]
pub struct Word {
    namespace: String,
    atoms: SmallVec<[String; 4]>,
}

impl Word {
    /// Parse a single word, strictly.
    ///
    /// Accepts an optional `namespace:` prefix and splits the remainder
    /// on `.`, dropping empty segments.
    ///
    /// # Errors
    ///
    /// - [`Error::MultiWord`] if the text contains `;` (that is a
    ///   descriptor, not a word)
    /// - [`Error::EmptyWord`] if no atoms remain after trimming
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.contains(';') {
            return Err(Error::multi_word(text));
        }
        if text.is_empty() {
            return Err(Error::EmptyWord);
        }
        match text.split_once(':') {
            Some((namespace, path)) => Self::in_namespace(namespace, path),
            None => Self::in_namespace(namespaces::DEFAULT, text),
        }
    }

    /// Build a word from an already-split namespace and dot-path.
    pub fn in_namespace(namespace: &str, path: &str) -> Result<Self> {
        let atoms: SmallVec<[String; 4]> = path
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();
        if atoms.is_empty() {
            return Err(Error::EmptyWord);
        }
        Ok(Self {
            namespace: namespace.trim().to_string(),
            atoms,
        })
    }

    /// The word's namespace (`ivoa` unless explicitly qualified).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Atom tokens in root-to-leaf order. Never empty.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Always false: a word has at least one atom.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The root token, naming the classification family.
    pub fn family(&self) -> &str {
        &self.atoms[0]
    }

    /// Alias for [`Word::family`].
    pub fn scope(&self) -> &str {
        self.family()
    }

    /// Rendering that always carries the namespace, `ns:a.b.c`.
    pub fn canonical_form(&self) -> String {
        format!("{}:{}", self.namespace, self.atoms.join("."))
    }

    /// True when any candidate scope is a substring of the plain-text
    /// rendering. Intentionally permissive: `"eq"` matches `pos.eq.ra`.
    pub fn isin<I, S>(&self, scopes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered = self.to_string();
        scopes.into_iter().any(|scope| rendered.contains(scope.as_ref()))
    }
}

impl fmt::Display for Word {
    /// Plain-text form: `a.b.c`, with a `ns:` prefix only when the
    /// namespace is not the default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !namespaces::is_default(&self.namespace) {
            write!(f, "{}:", self.namespace)?;
        }
        f.write_str(&self.atoms.join("."))
    }
}

/// Words compare by their rendered plain-text form.
impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Word {}
