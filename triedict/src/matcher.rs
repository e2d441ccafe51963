//! The Aho-Corasick scan over a text buffer, reporting every occurrence of every stored pattern.

use std::collections::HashMap;

use log::trace;

use crate::node_store::{NodeIndex, NodeStore, NO_VALUE};
use crate::topology::find_child;

/// One reported occurrence of a stored pattern in a matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    /// Index immediately after the last symbol of the match (i.e. `start + pattern.len()`).
    pub end_index: usize,
    /// The matched pattern's symbols.
    pub pattern: Vec<u32>,
    /// The value stored for the matched pattern.
    pub value: u32,
}

/// Lazily scans `text` against the trie in `store`, yielding a [`MatchHit`] for every
/// occurrence of every stored pattern, in the order the scan encounters them.
///
/// Suffix links in `store` must already be current; [`crate::Dict::match_text`] guarantees this
/// by rebuilding them before constructing a `Matches`.
#[derive(Debug)]
pub struct Matches<'a> {
    store: &'a NodeStore,
    patterns: &'a HashMap<NodeIndex, Vec<u32>>,
    text: &'a [u32],
    boundary: Option<&'a [u32]>,
    pos: usize,
    cur: NodeIndex,
    report: Option<NodeIndex>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(
        store: &'a NodeStore,
        patterns: &'a HashMap<NodeIndex, Vec<u32>>,
        text: &'a [u32],
        boundary: Option<&'a [u32]>,
    ) -> Self {
        Matches {
            store,
            patterns,
            text,
            boundary,
            pos: 0,
            cur: NodeStore::ROOT,
            report: None,
        }
    }

    fn boundary_ok(&self, end: usize, length: usize) -> bool {
        let Some(boundary) = self.boundary else {
            return true;
        };
        let start = end - length;
        let left_ok = start == 0 || boundary.contains(&self.text[start - 1]);
        let right_ok = end == self.text.len() || boundary.contains(&self.text[end]);
        left_ok && right_ok
    }
}

impl Iterator for Matches<'_> {
    type Item = MatchHit;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.report {
                let record = self.store.get(node);
                self.report = (record.suffix != NodeStore::ROOT).then_some(record.suffix);

                if record.value != NO_VALUE {
                    let pattern = self
                        .patterns
                        .get(&node)
                        .cloned()
                        .unwrap_or_default();
                    if self.boundary_ok(self.pos, pattern.len()) {
                        return Some(MatchHit {
                            end_index: self.pos,
                            pattern,
                            value: record.value,
                        });
                    }
                }
                continue;
            }

            if self.pos >= self.text.len() {
                return None;
            }
            let symbol = self.text[self.pos];
            self.pos += 1;

            while self.cur != NodeStore::ROOT && find_child(self.store, self.cur, symbol) == NodeStore::NULL {
                self.cur = self.store.get(self.cur).suffix;
            }
            let next = find_child(self.store, self.cur, symbol);
            self.cur = if next != NodeStore::NULL {
                next
            } else {
                NodeStore::ROOT
            };
            trace!("matched symbol {symbol} at position {}, now at node {}", self.pos - 1, self.cur);
            self.report = Some(self.cur);
        }
    }
}
