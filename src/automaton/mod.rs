//! Lazily-resolved Aho-Corasick matching automaton
//!
//! This module implements multi-pattern matching over a trie with
//! on-demand failure-link and transition resolution. The key components:
//!
//! - `CodeMap`: dense relabeling of the bytes the pattern set uses
//! - `NodeArena` / `TrieNode`: index-addressed trie over compacted codes
//! - `Resolver` / `TransitionMemo`: memoized suffix-link and goto resolution
//! - `AhoCorasick` / `State`: the automaton and its query cursor
//!
//! # Module Organization
//!
//! - `code_map`: alphabet compaction
//! - `arena`: trie construction and node storage
//! - `resolver`: the lazy mutual recursion between links and transitions
//! - `matcher`: the public query surface (`has_string`, `has_prefix`,
//!   `search_in`, single-step transitions)

mod arena;
mod code_map;
mod matcher;
mod resolver;

pub use arena::NodeId;
pub use code_map::{CodeMap, SymbolCode};
pub use matcher::{AhoCorasick, Match, State};
