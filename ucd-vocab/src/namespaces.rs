//! Namespace tokens for UCD words.
//!
//! A word is written `namespace:atom1.atom2`. The default namespace is
//! `ivoa` and is omitted from the plain-text rendering; words in the
//! default namespace are checked against the controlled vocabulary in
//! [`crate::words`], while explicitly namespaced words are accepted on
//! syntax alone (custom vocabularies are opaque to this crate).

/// Default namespace, omitted when rendering words in plain-text form.
pub const DEFAULT: &str = "ivoa";

/// Check whether `namespace` is a syntactically acceptable namespace
/// token: non-empty ASCII alphanumerics, `-` or `_`.
pub fn is_valid(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// True when `namespace` is the default (`ivoa`) namespace.
pub fn is_default(namespace: &str) -> bool {
    namespace == DEFAULT
}
