//! TitleIndex - a character trie over lower-cased book titles.
//!
//! The index is a derived cache of the catalog: it is rebuilt from the book
//! list on load and updated on every addition, but never persisted.
//!
//! ## Example
//!
//! ```
//! use bookshelf::TitleIndex;
//!
//! let mut index = TitleIndex::new();
//! index.insert("Dune");
//! index.insert("Dune Messiah");
//! index.insert("Emma");
//!
//! assert_eq!(index.search("DU"), vec!["dune", "dune messiah"]);
//! assert!(index.search("z").is_empty());
//! ```

mod node;

pub use node::TrieNode;

/// Prefix index over book titles.
///
/// Both insertion and lookup lower-case their input, so matching is
/// case-insensitive and results come back lower-cased. Two books sharing a
/// title collapse onto one terminal path.
#[derive(Debug, Default, Clone)]
pub struct TitleIndex {
    root: TrieNode,
    len: usize,
}

impl TitleIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a sequence of titles.
    pub fn from_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut index = Self::new();
        for title in titles {
            index.insert(title.as_ref());
        }
        index
    }

    /// Index a title. Re-inserting a title already present is a no-op.
    pub fn insert(&mut self, title: &str) {
        let mut node = &mut self.root;
        for ch in title.to_lowercase().chars() {
            node = node.child_or_insert(ch);
        }
        if node.mark_terminal() {
            self.len += 1;
        }
    }

    /// Return every indexed title starting with `prefix`, lower-cased and in
    /// lexicographic order. An empty prefix returns every indexed title.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        match self.walk(&prefix) {
            Some(start) => collect_terminals(start, prefix),
            None => Vec::new(),
        }
    }

    /// Whether `title` (compared case-insensitively) is indexed exactly.
    pub fn contains(&self, title: &str) -> bool {
        self.walk(&title.to_lowercase())
            .map(TrieNode::is_terminal)
            .unwrap_or(false)
    }

    /// Number of distinct lower-cased titles indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    fn walk(&self, lowered: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in lowered.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}

impl<T: AsRef<str>> FromIterator<T> for TitleIndex {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_titles(iter)
    }
}

/// Depth-first, pre-order collection of terminal paths below `start`.
///
/// Children are pushed in reverse so the smallest character is popped first,
/// which yields titles in lexicographic order.
fn collect_terminals(start: &TrieNode, prefix: String) -> Vec<String> {
    let mut results = Vec::new();
    let mut stack = vec![(start, prefix)];

    while let Some((node, path)) = stack.pop() {
        if node.is_terminal() {
            results.push(path.clone());
        }
        for (ch, child) in node.children().rev() {
            let mut next = String::with_capacity(path.len() + ch.len_utf8());
            next.push_str(&path);
            next.push(ch);
            stack.push((child, next));
        }
    }

    results
}
