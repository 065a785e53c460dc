//! Hierarchy node for the index forest.
//!
//! Atoms form trees owned strictly top-down: every child lives in exactly
//! one parent's `children` vector and there are no parent back-references,
//! so navigation is root-to-leaf only and no reference cycles can form.

use std::fmt;

/// One dot-delimited token in the classification hierarchy.
///
/// Carries optional family metadata (filled in for root atoms from the
/// [`RootRegistry`](ucd_vocab::RootRegistry)), an insertion-ordered list
/// of child atoms unique by token, and the payloads attached when this
/// atom terminates an inserted word.
#[derive(Debug, Clone)]
pub struct Atom<P> {
    token: String,
    family: Option<String>,
    description: Option<String>,
    children: Vec<Atom<P>>,
    payloads: Vec<P>,
}

impl<P> Atom<P> {
    /// Create a node for `token`.
    ///
    /// # Panics
    ///
    /// Panics if `token` is empty. An empty token can only come from a
    /// parser bug, never from user input, so this is an invariant
    /// violation rather than a recoverable error.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        assert!(!token.is_empty(), "atom token must be non-empty");
        Self {
            token,
            family: None,
            description: None,
            children: Vec::new(),
            payloads: Vec::new(),
        }
    }

    /// The atom's token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Family name, if annotated from the root registry.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Family description, if annotated from the root registry.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Attach family metadata (advisory, does not affect matching).
    pub fn set_metadata(&mut self, family: impl Into<String>, description: impl Into<String>) {
        self.family = Some(family.into());
        self.description = Some(description.into());
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Atom<P>] {
        &self.children
    }

    /// Payloads attached at this atom, in insertion order.
    pub fn payloads(&self) -> &[P] {
        &self.payloads
    }

    /// True when the atom has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a payload at this atom. Repeated inserts are kept as-is;
    /// the index never deduplicates.
    pub fn push_payload(&mut self, payload: P) {
        self.payloads.push(payload);
    }

    /// Find the child matching `token`.
    ///
    /// This token comparison is the sibling-uniqueness rule: among one
    /// parent's children at most one atom carries a given token.
    pub fn child(&self, token: &str) -> Option<&Atom<P>> {
        self.children.iter().find(|c| c.token == token)
    }

    /// Walk-or-create step used by index insertion: returns the child
    /// matching `token`, creating it at the end of the child list if
    /// absent.
    pub fn child_or_insert(&mut self, token: &str) -> &mut Atom<P> {
        match self.children.iter().position(|c| c.token == token) {
            Some(i) => &mut self.children[i],
            None => {
                self.children.push(Atom::new(token));
                let last = self.children.len() - 1;
                &mut self.children[last]
            }
        }
    }
}

/// Token-only equality, inherited from the source semantics.
///
/// Two atoms with equal tokens compare equal regardless of ancestry,
/// family metadata or payloads. Inside the index this is only ever
/// applied among one parent's children (where tokens are unique); in
/// generic comparisons it can conflate same-named atoms from unrelated
/// branches.
impl<P> PartialEq for Atom<P> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<P> Eq for Atom<P> {}

impl<P> fmt::Display for Atom<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_matching_is_by_token() {
        let mut atom: Atom<&str> = Atom::new("meta");
        atom.child_or_insert("id");
        atom.child_or_insert("main");
        // Reuses the existing child instead of adding a sibling.
        atom.child_or_insert("id").push_payload("col1");

        assert_eq!(atom.children().len(), 2);
        assert_eq!(atom.child("id").unwrap().payloads(), &["col1"]);
        assert!(atom.child("missing").is_none());
    }

    #[test]
    fn equality_ignores_everything_but_token() {
        let mut a: Atom<&str> = Atom::new("pos");
        a.set_metadata("positional data", "sky positions");
        a.push_payload("col1");
        let b: Atom<&str> = Atom::new("pos");
        assert_eq!(a, b);
        assert_ne!(a, Atom::new("meta"));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut atom: Atom<u32> = Atom::new("root");
        for token in ["c", "a", "b"] {
            atom.child_or_insert(token);
        }
        let tokens: Vec<&str> = atom.children().iter().map(|c| c.token()).collect();
        assert_eq!(tokens, ["c", "a", "b"]);
    }

    #[test]
    #[should_panic(expected = "atom token must be non-empty")]
    fn empty_token_is_a_bug() {
        let _: Atom<()> = Atom::new("");
    }
}
