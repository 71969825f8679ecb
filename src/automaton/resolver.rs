//! Lazy resolution of suffix links and the goto (transition) table.
//!
//! Nothing here is precomputed: the failure link of a node and each
//! (node, code) transition cell are resolved on first request and memoized
//! forever after. The two resolutions are mutually recursive:
//!
//! - `suffix_link(v) = goto(suffix_link(parent(v)), parent_code(v))`
//! - `goto(v, code)` falls back through `suffix_link(v)` when no literal
//!   trie edge exists
//!
//! Both recursions strictly decrease depth toward the root, and the root
//! resolves every code (self-loop when it has no literal edge), so every
//! chain bottoms out. Each cell is written at most once per pattern-set
//! lifetime, which bounds total work across all queries at
//! O(nodes x code width) amortized.

use super::arena::{NodeArena, NodeId};
use super::code_map::SymbolCode;

/// Memo tables for suffix links and resolved transitions.
///
/// Kept separate from the arena: the trie is immutable after construction,
/// while these tables fill in lazily during queries. Rows are allocated on
/// first write, one row per node that ever takes a fallback transition.
#[derive(Clone, Debug)]
pub struct TransitionMemo {
    suffix_links: Vec<Option<NodeId>>,
    goto_rows: Vec<Option<Box<[Option<NodeId>]>>>,
    /// Width of each goto row (the code map's length).
    code_size: usize,
}

impl TransitionMemo {
    pub fn new(node_count: usize, code_size: usize) -> Self {
        TransitionMemo {
            suffix_links: vec![None; node_count],
            goto_rows: vec![None; node_count],
            code_size,
        }
    }

    #[inline]
    fn goto_cell(&self, node: NodeId, code: SymbolCode) -> Option<NodeId> {
        self.goto_rows[node.index()]
            .as_ref()
            .and_then(|row| row[code.index()])
    }

    #[inline]
    fn set_goto_cell(&mut self, node: NodeId, code: SymbolCode, target: NodeId) {
        let row = self.goto_rows[node.index()]
            .get_or_insert_with(|| vec![None; self.code_size].into_boxed_slice());
        debug_assert!(row[code.index()].is_none() || row[code.index()] == Some(target));
        row[code.index()] = Some(target);
    }
}

/// One query's view of the automaton: the immutable trie plus exclusive
/// access to the memo tables.
///
/// Public query calls construct a `Resolver` once (under the automaton's
/// cache lock) and drive all traversal through it.
pub struct Resolver<'a> {
    arena: &'a NodeArena,
    memo: &'a mut TransitionMemo,
}

impl<'a> Resolver<'a> {
    pub fn new(arena: &'a NodeArena, memo: &'a mut TransitionMemo) -> Self {
        debug_assert_eq!(arena.len(), memo.suffix_links.len());
        Resolver { arena, memo }
    }

    /// The Aho-Corasick failure link: the node for the longest proper
    /// suffix of `v`'s prefix that is itself a trie prefix.
    pub fn suffix_link(&mut self, v: NodeId) -> NodeId {
        if let Some(link) = self.memo.suffix_links[v.index()] {
            return link;
        }
        let link = match self.arena[v].parent_edge {
            // Root links to itself; depth-1 nodes have only the empty
            // proper suffix.
            None => NodeId::ROOT,
            Some((parent, _)) if parent.is_root() => NodeId::ROOT,
            Some((parent, code)) => {
                let parent_link = self.suffix_link(parent);
                self.goto(parent_link, code)
            }
        };
        self.memo.suffix_links[v.index()] = Some(link);
        link
    }

    /// The total transition function: the state reached by consuming
    /// `code` from `v`.
    ///
    /// A literal trie edge wins outright; otherwise the lookup falls
    /// through the suffix-link chain, with the root absorbing any code it
    /// has no edge for.
    pub fn goto(&mut self, v: NodeId, code: SymbolCode) -> NodeId {
        if let Some(target) = self.memo.goto_cell(v, code) {
            return target;
        }
        let target = match self.arena[v].child(code) {
            Some(child) => child,
            None if v.is_root() => NodeId::ROOT,
            None => {
                let link = self.suffix_link(v);
                self.goto(link, code)
            }
        };
        self.memo.set_goto_cell(v, code, target);
        target
    }
}
