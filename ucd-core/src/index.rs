//! Owning forest of [`Atom`] trees with insert and ancestor search.
//!
//! One index holds the classification trees for one table: inserting a
//! `(descriptor, payload)` pair walks (and extends) one path per word
//! and parks the payload at each word's terminal atom; searching by a
//! word returns every payload classified at that point or any more
//! specific descendant classification.
//!
//! ## Invariants
//!
//! - Roots and children keep insertion order; siblings are unique by token
//! - Two words sharing a token prefix share the same atom chain for it
//! - Atoms are never deleted individually; teardown drops the forest
//! - Repeated inserts are kept: nothing is deduplicated
//!
//! Single-writer build phase, then read-only queries. The index has no
//! interior mutability (`UcdIndex<P>` is `Send + Sync` when `P` is);
//! callers that want readers while writing wrap it in their own lock.

use crate::atom::Atom;
use crate::descriptor::Descriptor;
use crate::word::Word;
use ucd_vocab::RootRegistry;

/// Forest of classification trees mapping words to caller payloads.
///
/// The payload type is opaque; the index stores it and hands references
/// back, nothing more. Typically a column name.
#[derive(Debug, Clone)]
pub struct UcdIndex<P> {
    roots: Vec<Atom<P>>,
}

impl<P> Default for UcdIndex<P> {
    fn default() -> Self {
        Self { roots: Vec::new() }
    }
}

impl<P: Clone> UcdIndex<P> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor with its payload.
    ///
    /// One walk per word: each word's path is created or reused token by
    /// token, and a clone of `payload` is appended at each word's
    /// terminal atom. A descriptor with `k` words therefore parks the
    /// payload at `k` distinct terminal atoms; an empty descriptor is a
    /// no-op.
    pub fn insert(&mut self, descriptor: &Descriptor, payload: P) {
        if descriptor.is_empty() {
            return;
        }
        tracing::debug!(descriptor = %descriptor, words = descriptor.len(), "indexing descriptor");
        for word in descriptor {
            self.insert_word(word, payload.clone());
        }
    }

    fn insert_word(&mut self, word: &Word, payload: P) {
        let tokens = word.atoms();
        let root = match self.roots.iter().position(|r| r.token() == tokens[0]) {
            Some(i) => &mut self.roots[i],
            None => {
                // Any first-seen token becomes a root, registered or not:
                // the root registry is advisory, not a gate.
                self.roots.push(Atom::new(tokens[0].as_str()));
                let last = self.roots.len() - 1;
                &mut self.roots[last]
            }
        };
        let mut node = root;
        for token in &tokens[1..] {
            node = node.child_or_insert(token);
        }
        node.push_payload(payload);
    }

    /// Bulk insert of `(descriptor, payload)` pairs.
    pub fn load<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Descriptor, P)>,
    {
        for (descriptor, payload) in pairs {
            self.insert(&descriptor, payload);
        }
    }
}

impl<P> UcdIndex<P> {
    /// All payloads classified at `word` or below.
    ///
    /// Walks the forest along the word's tokens; a missing step yields
    /// an empty result, never an error. When the path resolves, the
    /// result is the depth-first, children-in-insertion-order collection
    /// of the payloads of every leaf atom in the subtree (exactly the
    /// atom's own payloads when it has no children). Duplicates from
    /// repeated inserts are preserved.
    pub fn search(&self, word: &Word) -> Vec<&P> {
        let tokens = word.atoms();
        let mut node = match self.roots.iter().find(|r| r.token() == tokens[0]) {
            Some(root) => root,
            None => return Vec::new(),
        };
        for token in &tokens[1..] {
            node = match node.child(token) {
                Some(child) => child,
                None => return Vec::new(),
            };
        }
        let mut out = Vec::new();
        collect_leaf_payloads(node, &mut out);
        tracing::debug!(word = %word, hits = out.len(), "searched index");
        out
    }

    /// [`UcdIndex::search`] by plain text.
    ///
    /// Malformed text yields an empty result, indistinguishable from
    /// "no matches".
    pub fn search_text(&self, text: &str) -> Vec<&P> {
        match Word::parse(text) {
            Ok(word) => self.search(&word),
            Err(_) => Vec::new(),
        }
    }

    /// Every indexed payload: the per-root leaf collections concatenated
    /// in root insertion order, each traversed as in [`UcdIndex::search`].
    pub fn all(&self) -> Vec<&P> {
        let mut out = Vec::new();
        for root in &self.roots {
            collect_leaf_payloads(root, &mut out);
        }
        out
    }

    /// Root atoms in insertion order.
    pub fn roots(&self) -> &[Atom<P>] {
        &self.roots
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Annotate root atoms with family metadata from the registry.
    ///
    /// Advisory only: affects `render()` output, never matching.
    pub fn annotate_roots(&mut self, registry: &RootRegistry) {
        for root in &mut self.roots {
            if let Some(family) = registry.get(root.token()) {
                root.set_metadata(family.family_name, family.description);
            }
        }
    }

    /// Human-readable indented listing of every atom in the forest, one
    /// line per atom in depth-first pre-order. Debug output, not a
    /// stable format.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for root in &self.roots {
            render_atom(root, 1, &mut lines);
        }
        lines.join("\n")
    }
}

/// Depth-first, children-in-insertion-order collection of leaf payloads.
///
/// Interior atoms contribute nothing: only atoms with no children are
/// collected, so an ancestor query returns everything classified at a
/// more specific level beneath it.
fn collect_leaf_payloads<'a, P>(atom: &'a Atom<P>, out: &mut Vec<&'a P>) {
    if atom.is_leaf() {
        out.extend(atom.payloads());
        return;
    }
    for child in atom.children() {
        collect_leaf_payloads(child, out);
    }
}

fn render_atom<P>(atom: &Atom<P>, depth: usize, lines: &mut Vec<String>) {
    let mut line = " |".repeat(depth);
    line.push('-');
    line.push_str(atom.token());
    if let Some(family) = atom.family() {
        line.push_str(" (");
        line.push_str(family);
        line.push(')');
    }
    if !atom.payloads().is_empty() {
        line.push_str(&format!(" [{}]", atom.payloads().len()));
    }
    lines.push(line);
    for child in atom.children() {
        render_atom(child, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_descriptor;

    #[test]
    fn fresh_index_is_empty() {
        let index: UcdIndex<String> = UcdIndex::new();
        assert!(index.is_empty());
        assert!(index.all().is_empty());
    }

    #[test]
    fn insert_parks_payload_once_per_word() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("meta.id;meta.main"), "info");
        // Two words, so the payload appears at two terminal atoms.
        assert_eq!(index.all(), vec![&"info", &"info"]);
        assert_eq!(index.roots().len(), 1);
    }

    #[test]
    fn empty_descriptor_is_a_noop() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("free text, not a ucd"), "col1");
        assert!(index.is_empty());
    }

    #[test]
    fn search_collects_the_whole_subtree() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("pos.eq.ra"), "ra");
        index.insert(&parse_descriptor("pos.eq.dec"), "dec");
        index.insert(&parse_descriptor("pos.parallax"), "plx");

        let word = Word::parse("pos.eq").unwrap();
        assert_eq!(index.search(&word), vec![&"ra", &"dec"]);

        let word = Word::parse("pos").unwrap();
        assert_eq!(index.search(&word), vec![&"ra", &"dec", &"plx"]);
    }

    #[test]
    fn search_by_ancestor_spans_descriptors() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("meta.id;meta.main"), "col1");
        index.insert(&parse_descriptor("pos.eq.ra;meta.main"), "col2");

        let hits = index.search_text("meta.main");
        assert_eq!(hits, vec![&"col1", &"col2"]);
    }

    #[test]
    fn missing_paths_and_bad_text_yield_empty() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("meta.id"), "col1");

        assert!(index.search_text("nonexistent.path").is_empty());
        assert!(index.search_text("meta.id.deeper").is_empty());
        // Malformed search text is a miss, not an error.
        assert!(index.search_text("meta.id;meta.main").is_empty());
        assert!(index.search_text("").is_empty());
    }

    #[test]
    fn repeated_inserts_are_not_deduplicated() {
        let mut index = UcdIndex::new();
        let descriptor = parse_descriptor("meta.id");
        index.insert(&descriptor, "col1");
        index.insert(&descriptor, "col1");
        assert_eq!(index.all(), vec![&"col1", &"col1"]);
    }

    #[test]
    fn shared_prefixes_reuse_atom_chains() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("pos.eq.ra"), "ra");
        index.insert(&parse_descriptor("pos.eq.dec"), "dec");

        // One root, one shared "eq" child, diverging below it.
        assert_eq!(index.roots().len(), 1);
        let pos = &index.roots()[0];
        assert_eq!(pos.children().len(), 1);
        assert_eq!(pos.children()[0].children().len(), 2);
    }

    #[test]
    fn load_inserts_every_pair() {
        let mut index = UcdIndex::new();
        index.load([
            (parse_descriptor("meta.id"), "col1"),
            (parse_descriptor("pos.eq.ra"), "col2"),
        ]);
        assert_eq!(index.all().len(), 2);
    }

    #[test]
    fn render_lists_one_line_per_atom() {
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("pos.eq.ra;meta.main"), "col1");

        let rendered = index.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            [" |-pos", " | |-eq", " | | |-ra [1]", " |-meta", " | |-main [1]"]
        );
    }

    #[test]
    fn annotate_roots_attaches_registry_metadata() {
        let registry = RootRegistry::initialize();
        let mut index = UcdIndex::new();
        index.insert(&parse_descriptor("pos.eq.ra"), "col1");
        index.annotate_roots(&registry);

        assert_eq!(index.roots()[0].family(), Some("positional data"));
        assert!(index.render().contains(" |-pos (positional data)"));
    }
}
