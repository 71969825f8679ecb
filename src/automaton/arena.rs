//! Arena-based trie storage for the pattern set.
//!
//! All trie nodes live in a contiguous `Vec` and reference each other by
//! index, so the suffix-link relation (which is cyclic at the root and
//! freely cross-links subtrees) never fights the ownership model.
//!
//! Each node is one distinct prefix of the pattern set. Shared prefixes are
//! naturally deduplicated by the trie structure.

use smallvec::SmallVec;

use super::code_map::{CodeMap, SymbolCode};

/// A node identifier - just an index into the arena.
///
/// This can be freely copied. There is no "null" value; absent references
/// are `Option<NodeId>` throughout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

/// A node in the pattern trie.
///
/// Uses SmallVec for children since most nodes have few children; the row
/// is kept sorted by code for binary search.
#[derive(Clone, Debug)]
pub struct TrieNode {
    /// Length of the prefix this node represents (root = 0).
    pub depth: usize,
    /// Owning edge: (parent node, code on the parent -> self edge).
    /// The root has no parent edge.
    pub parent_edge: Option<(NodeId, SymbolCode)>,
    /// Pattern index, set iff this node's prefix is a full pattern.
    /// Duplicate patterns overwrite this in insertion order.
    pub leaf: Option<usize>,
    /// Literal trie edges as (code, child) pairs, sorted by code.
    children: SmallVec<[(SymbolCode, NodeId); 4]>,
}

impl TrieNode {
    fn root() -> Self {
        TrieNode {
            depth: 0,
            parent_edge: None,
            leaf: None,
            children: SmallVec::new(),
        }
    }

    /// Look up the literal trie edge for a code, if one exists.
    #[inline]
    pub fn child(&self, code: SymbolCode) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&code.index(), |&(c, _)| c.index())
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// Arena holding every trie node, root preallocated at index 0.
///
/// The arena owns all node memory; the rest of the automaton refers to
/// nodes only through `NodeId`.
#[derive(Clone, Debug)]
pub struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        let mut nodes = Vec::with_capacity(64);
        nodes.push(TrieNode::root());
        NodeArena { nodes }
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Find the child of `parent` along `code`, creating it if absent.
    ///
    /// A created node records its owning edge and `depth = parent.depth + 1`.
    fn get_or_create_child(&mut self, parent: NodeId, code: SymbolCode) -> NodeId {
        let children = &self.nodes[parent.index()].children;
        match children.binary_search_by_key(&code.index(), |&(c, _)| c.index()) {
            Ok(pos) => children[pos].1,
            Err(pos) => {
                let child = NodeId(self.nodes.len() as u32);
                let depth = self.nodes[parent.index()].depth + 1;
                self.nodes.push(TrieNode {
                    depth,
                    parent_edge: Some((parent, code)),
                    leaf: None,
                    children: SmallVec::new(),
                });
                self.nodes[parent.index()]
                    .children
                    .insert(pos, (code, child));
                child
            }
        }
    }

    /// Insert one pattern, marking the landing node as a leaf for
    /// `pattern_index`. Last write wins when patterns collide on a node.
    ///
    /// Every byte of `pattern` must already be present in `codes`.
    pub fn insert(&mut self, pattern_index: usize, pattern: &[u8], codes: &CodeMap) {
        let mut node = NodeId::ROOT;
        for &byte in pattern {
            // CodeMap::build scanned this same pattern set.
            let code = codes
                .get(byte)
                .unwrap_or_else(|| unreachable!("pattern byte missing from code map"));
            node = self.get_or_create_child(node, code);
        }
        self.nodes[node.index()].leaf = Some(pattern_index);
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = TrieNode;

    #[inline]
    fn index(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(patterns: &[&[u8]]) -> (NodeArena, CodeMap) {
        let codes = CodeMap::build(patterns.iter().copied());
        let mut arena = NodeArena::new();
        for (i, p) in patterns.iter().enumerate() {
            arena.insert(i, p, &codes);
        }
        (arena, codes)
    }

    #[test]
    fn shared_prefixes_are_deduplicated() {
        let (arena, _) = build(&[b"hello", b"help"]);
        // root + "hel" (3) + "lo" (2) + "p" (1)
        assert_eq!(arena.len(), 7);
    }

    #[test]
    fn depth_is_parent_depth_plus_one() {
        let (arena, _) = build(&[b"abc", b"abd", b"x"]);
        for idx in 1..arena.len() {
            let node = &arena[NodeId(idx as u32)];
            let (parent, _) = node.parent_edge.unwrap();
            assert_eq!(node.depth, arena[parent].depth + 1);
        }
        assert_eq!(arena[NodeId::ROOT].depth, 0);
        assert!(arena[NodeId::ROOT].parent_edge.is_none());
    }

    #[test]
    fn leaf_marks_full_patterns_only() {
        let (arena, codes) = build(&[b"ab"]);
        let a = arena[NodeId::ROOT].child(codes.get(b'a').unwrap()).unwrap();
        let ab = arena[a].child(codes.get(b'b').unwrap()).unwrap();
        assert!(arena[a].leaf.is_none());
        assert_eq!(arena[ab].leaf, Some(0));
    }

    #[test]
    fn duplicate_pattern_last_write_wins() {
        let (arena, codes) = build(&[b"dup", b"dup"]);
        let mut node = NodeId::ROOT;
        for &b in b"dup" {
            node = arena[node].child(codes.get(b).unwrap()).unwrap();
        }
        assert_eq!(arena[node].leaf, Some(1));
    }

    #[test]
    fn prefix_pattern_reuses_interior_node() {
        let (arena, codes) = build(&[b"abcd", b"ab"]);
        let a = arena[NodeId::ROOT].child(codes.get(b'a').unwrap()).unwrap();
        let ab = arena[a].child(codes.get(b'b').unwrap()).unwrap();
        assert_eq!(arena[ab].leaf, Some(1));
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn empty_pattern_marks_root() {
        let (arena, _) = build(&[b""]);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[NodeId::ROOT].leaf, Some(0));
    }

    #[test]
    fn missing_child_is_none() {
        let (arena, codes) = build(&[b"ab", b"cd"]);
        let c = codes.get(b'c').unwrap();
        let a = arena[NodeId::ROOT].child(codes.get(b'a').unwrap()).unwrap();
        assert!(arena[a].child(c).is_none());
    }
}
