//! needleset: multi-pattern substring search over a lazily-resolved
//! Aho-Corasick automaton.
//!
//! The automaton is built once from an ordered collection of byte
//! patterns. Failure links and the goto table are *not* precomputed with a
//! breadth-first pass; each link and each (state, byte) transition cell is
//! resolved on first use and memoized, so a query touches only the part of
//! the transition table it actually needs.
//!
//! Three query forms are provided:
//!
//! - exact membership ([`AhoCorasick::has_string`])
//! - prefix-walk validity ([`AhoCorasick::has_prefix`])
//! - streaming multi-pattern search ([`AhoCorasick::search_in`])
//!
//! ```
//! use needleset::AhoCorasick;
//!
//! let ac = AhoCorasick::new(["abcd", "bcde", "cdef"]);
//!
//! assert!(ac.has_string(b"abcd"));
//! assert!(!ac.has_string(b"abc"));
//! assert!(ac.has_prefix(b"abc"));
//!
//! // Overlapping occurrences are all reported, in end-position order.
//! let matches = ac.search_in(b"abcdef");
//! let found: Vec<(usize, usize)> = matches.iter().map(|m| (m.end, m.pattern)).collect();
//! assert_eq!(found, vec![(4, 0), (5, 1), (6, 2)]);
//! ```
//!
//! Lower-level stepping is available through [`State`] cursors:
//!
//! ```
//! use needleset::AhoCorasick;
//!
//! let ac = AhoCorasick::new(["he", "she"]);
//! let mut state = ac.start();
//! for &b in b"she" {
//!     state = ac.switch_state(b, state);
//! }
//! assert_eq!(state.pattern_index(), Some(1));
//! ```
//!
//! Queries take `&self` and are cheap to repeat; the internal memo tables
//! fill in behind a mutex, so results never depend on query order. The
//! pattern set itself is immutable after construction - rebuild with
//! [`AhoCorasick::reset`] or a fresh instance to change it.

mod automaton;

pub use automaton::{AhoCorasick, CodeMap, Match, NodeId, State, SymbolCode};
