//! The automaton itself and its query surface.
//!
//! `AhoCorasick` owns the compacted alphabet, the trie arena, and the lazy
//! transition memo. Queries take `&self`: the memo tables mutate behind a
//! `parking_lot::Mutex`, taken once per public call, so a query is
//! logically read-only while still filling the caches in place.

use parking_lot::Mutex;

use super::arena::{NodeArena, NodeId};
use super::code_map::CodeMap;
use super::resolver::{Resolver, TransitionMemo};

/// A query cursor: an automaton state with its depth and leaf marker
/// snapshotted from the underlying trie node.
///
/// States are transient views and can be freely copied; they stay valid
/// until the automaton is reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct State {
    node: NodeId,
    depth: usize,
    leaf: Option<usize>,
}

impl State {
    /// Length of the pattern prefix this state represents.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.node.is_root()
    }

    /// Does this state's prefix equal a full pattern?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    /// Index of the matched pattern, if this state is a leaf.
    #[inline]
    pub fn pattern_index(&self) -> Option<usize> {
        self.leaf
    }

    /// True if this state is one literal trie step below `prev`, i.e. the
    /// last transition extended the prefix rather than falling back
    /// through a suffix link.
    #[inline]
    pub fn extends(&self, prev: &State) -> bool {
        self.depth == prev.depth + 1
    }
}

/// A single pattern occurrence found by [`AhoCorasick::search_in`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Match {
    /// 1-based position just past the occurrence's last byte.
    pub end: usize,
    /// Index of the matched pattern in insertion order.
    pub pattern: usize,
}

/// Multi-pattern matching automaton with lazily resolved transitions.
///
/// Built once from an ordered pattern collection; the pattern set is
/// immutable afterward (use [`AhoCorasick::reset`] to start over). All
/// queries run to completion without blocking on anything but the internal
/// cache lock.
pub struct AhoCorasick {
    codes: CodeMap,
    arena: NodeArena,
    memo: Mutex<TransitionMemo>,
    pattern_count: usize,
}

impl AhoCorasick {
    /// Build the automaton from an ordered collection of byte patterns.
    ///
    /// Pattern indices reported by queries are positions in this
    /// collection. Construction is infallible; it only allocates.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let patterns: Vec<P> = patterns.into_iter().collect();
        let codes = CodeMap::build(patterns.iter().map(|p| p.as_ref()));
        let mut arena = NodeArena::new();
        for (idx, pattern) in patterns.iter().enumerate() {
            arena.insert(idx, pattern.as_ref(), &codes);
        }
        let memo = TransitionMemo::new(arena.len(), codes.len());
        AhoCorasick {
            codes,
            arena,
            memo: Mutex::new(memo),
            pattern_count: patterns.len(),
        }
    }

    /// Discard all prior state and rebuild from a fresh pattern set.
    pub fn reset<I, P>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        *self = AhoCorasick::new(patterns);
    }

    /// The initial (root) state.
    #[inline]
    pub fn start(&self) -> State {
        self.state_at(NodeId::ROOT)
    }

    /// Consume one byte from `state`.
    ///
    /// A byte that appears in no pattern resets to the initial state;
    /// anything else takes one step of the total transition function.
    pub fn switch_state(&self, byte: u8, state: State) -> State {
        let Some(code) = self.codes.get(byte) else {
            return self.start();
        };
        let mut memo = self.memo.lock();
        let next = Resolver::new(&self.arena, &mut memo).goto(state.node, code);
        self.state_at(next)
    }

    /// The failure link of `state`: the longest proper suffix of its
    /// prefix that is itself a trie prefix. The root links to itself.
    pub fn suffix_link(&self, state: State) -> State {
        let mut memo = self.memo.lock();
        let link = Resolver::new(&self.arena, &mut memo).suffix_link(state.node);
        self.state_at(link)
    }

    /// Exact membership: is `s` one of the patterns?
    ///
    /// The walk must extend the prefix literally at every step; a single
    /// suffix-link fallback rejects immediately, even if the walk would
    /// land on a leaf. Landing on a leaf via literal steps only is a match.
    pub fn has_string(&self, s: &[u8]) -> bool {
        match self.literal_walk(s) {
            Some(state) => state.is_leaf(),
            None => false,
        }
    }

    /// Prefix-walk validity: does `s` follow literal trie edges all the
    /// way, without requiring a pattern to end there?
    pub fn has_prefix(&self, s: &[u8]) -> bool {
        self.literal_walk(s).is_some()
    }

    /// Scan `text` once, reporting every position where the automaton
    /// lands on a leaf as a `(end, pattern)` match, in end-position order.
    ///
    /// Failure transitions are followed freely, so overlapping occurrences
    /// are all found.
    pub fn search_in(&self, text: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut memo = self.memo.lock();
        let mut resolver = Resolver::new(&self.arena, &mut memo);
        let mut node = NodeId::ROOT;
        for (i, &byte) in text.iter().enumerate() {
            node = match self.codes.get(byte) {
                Some(code) => resolver.goto(node, code),
                None => NodeId::ROOT,
            };
            if let Some(pattern) = self.arena[node].leaf {
                matches.push(Match {
                    end: i + 1,
                    pattern,
                });
            }
        }
        matches
    }

    /// Number of patterns the automaton was built from.
    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Number of trie nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of distinct bytes across the pattern set (transition row width).
    #[inline]
    pub fn code_size(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    fn state_at(&self, node: NodeId) -> State {
        let n = &self.arena[node];
        State {
            node,
            depth: n.depth,
            leaf: n.leaf,
        }
    }

    /// Walk `s` through the automaton requiring a +1-depth literal
    /// extension at every step; `None` as soon as a step falls back.
    fn literal_walk(&self, s: &[u8]) -> Option<State> {
        let mut memo = self.memo.lock();
        let mut resolver = Resolver::new(&self.arena, &mut memo);
        let mut state = self.start();
        for &byte in s {
            let code = self.codes.get(byte)?;
            let next = self.state_at(resolver.goto(state.node, code));
            if !next.extends(&state) {
                return None;
            }
            state = next;
        }
        Some(state)
    }
}

impl std::fmt::Debug for AhoCorasick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AhoCorasick")
            .field("patterns", &self.pattern_count)
            .field("nodes", &self.arena.len())
            .field("code_size", &self.codes.len())
            .finish()
    }
}
