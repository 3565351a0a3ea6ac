use std::collections::BTreeMap;

/// A single trie node. Children are kept in a sorted map so traversal order is
/// lexicographic by character.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_terminal: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub(crate) fn mark_terminal(&mut self) -> bool {
        let newly_marked = !self.is_terminal;
        self.is_terminal = true;
        newly_marked
    }

    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
