//! Alphabet compaction: dense relabeling of the bytes a pattern set uses.
//!
//! Transition rows are sized by the number of *distinct* bytes appearing in
//! the pattern set, not by the full 256-value byte range. Codes are assigned
//! on first occurrence, scanning patterns in collection order and bytes
//! within each pattern left to right, so the same pattern set always yields
//! the same coding.

/// A dense symbol code in `[0, CodeMap::len())`.
///
/// This can be freely copied; it is only meaningful relative to the
/// `CodeMap` that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolCode(u32);

impl SymbolCode {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Mapping from raw byte values to dense symbol codes.
///
/// Bytes that never appear in any pattern map to `None`; the automaton
/// treats those as an immediate reset to the root state.
#[derive(Clone)]
pub struct CodeMap {
    codes: [Option<SymbolCode>; 256],
    len: usize,
}

impl CodeMap {
    /// Build the code map by scanning every pattern once.
    pub fn build<'a, I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut map = CodeMap {
            codes: [None; 256],
            len: 0,
        };
        for pattern in patterns {
            for &byte in pattern {
                let slot = &mut map.codes[byte as usize];
                if slot.is_none() {
                    *slot = Some(SymbolCode(map.len as u32));
                    map.len += 1;
                }
            }
        }
        map
    }

    /// Look up the code for a raw byte.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<SymbolCode> {
        self.codes[byte as usize]
    }

    /// Number of distinct bytes observed (the width of transition rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for CodeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeMap").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_assigned_in_first_occurrence_order() {
        let patterns: Vec<&[u8]> = vec![b"cab", b"bad"];
        let map = CodeMap::build(patterns);

        assert_eq!(map.len(), 4);
        assert_eq!(map.get(b'c').unwrap().index(), 0);
        assert_eq!(map.get(b'a').unwrap().index(), 1);
        assert_eq!(map.get(b'b').unwrap().index(), 2);
        assert_eq!(map.get(b'd').unwrap().index(), 3);
    }

    #[test]
    fn unseen_bytes_are_unmapped() {
        let map = CodeMap::build(vec![b"ab".as_slice()]);
        assert!(map.get(b'z').is_none());
        assert!(map.get(0).is_none());
        assert!(map.get(255).is_none());
    }

    #[test]
    fn empty_pattern_set() {
        let map = CodeMap::build(Vec::<&[u8]>::new());
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(map.get(b'a').is_none());
    }

    #[test]
    fn repeated_bytes_get_one_code() {
        let map = CodeMap::build(vec![b"aaaa".as_slice(), b"aa".as_slice()]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(b'a').unwrap().index(), 0);
    }
}
