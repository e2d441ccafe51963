//! The public dictionary: insert/assign, lookup, prefix enumeration, matching and
//! (de)serialization built atop the lower-level trie components.

use std::collections::HashMap;

use bytes::{Buf, BufMut};
use log::debug;

use crate::error::{Error, Result};
use crate::matcher::{MatchHit, Matches};
use crate::node_store::{NodeIndex, NodeStore, NO_VALUE};
use crate::prefix::PrefixMatches;
use crate::{serde_format, suffix_links, topology};

/// The largest value that may be stored for a pattern; `u32::MAX` is reserved to mean
/// "no value" internally.
pub const MAX_VALUE: u32 = u32::MAX - 1;

/// A compressed, serializable dictionary from symbol sequences to small non-negative integers,
/// supporting exact lookup, prefix enumeration and Aho-Corasick multi-pattern matching.
///
/// `Dict` is not safe to mutate concurrently; see the crate-level documentation for the
/// concurrency model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dict {
    store: NodeStore,
    patterns: HashMap<NodeIndex, Vec<u32>>,
    links_stale: bool,
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

impl Dict {
    /// Creates an empty dictionary with just the root node.
    pub fn new() -> Self {
        Dict {
            store: NodeStore::new(),
            patterns: HashMap::new(),
            links_stale: false,
        }
    }

    /// Creates an empty dictionary, pre-reserving storage for approximately `nodes` node
    /// records. Use this ahead of a large bulk-insertion pass to avoid repeated reallocation.
    pub fn with_capacity(nodes: usize) -> Self {
        Dict {
            store: NodeStore::with_capacity(nodes),
            patterns: HashMap::new(),
            links_stale: false,
        }
    }

    /// Number of allocated nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Inserts or overwrites the value for `pattern`. The last call for a given pattern wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`] if `pattern` has no symbols, [`Error::ReservedSymbol`] if any
    /// symbol is `0`, [`Error::ValueOutOfRange`] if `value` exceeds [`MAX_VALUE`], or
    /// [`Error::CapacityExhausted`] if the node store cannot grow any further.
    pub fn assign(&mut self, pattern: impl IntoIterator<Item = u32>, value: u32) -> Result<()> {
        let mut symbols = pattern.into_iter().peekable();
        if symbols.peek().is_none() {
            return Err(Error::EmptyKey);
        }

        if value > MAX_VALUE {
            return Err(Error::ValueOutOfRange(value));
        }

        let mut collected = Vec::new();
        let mut node = NodeStore::ROOT;
        for symbol in symbols {
            if symbol == 0 {
                return Err(Error::ReservedSymbol);
            }
            collected.push(symbol);
            node = topology::insert_child(&mut self.store, node, symbol)?;
        }

        let symbols = collected;
        self.store.set_value(node, value);
        self.patterns.insert(node, symbols);
        self.links_stale = true;

        debug!("assigned value {value} to a pattern of {} symbols", self.patterns[&node].len());
        Ok(())
    }

    /// Looks up `pattern`, returning its stored value or `None` if it was never assigned (or was
    /// only ever a branching point with no value of its own).
    pub fn lookup(&self, pattern: impl IntoIterator<Item = u32>) -> Option<u32> {
        let node = topology::walk(&self.store, pattern)?;
        let value = self.store.get(node).value;
        (value != NO_VALUE).then_some(value)
    }

    /// Returns whether `pattern` has an assigned value. Derived from [`Dict::lookup`].
    pub fn contains(&self, pattern: impl IntoIterator<Item = u32>) -> bool {
        self.lookup(pattern).is_some()
    }

    /// Enumerates every `(suffix, value)` pair stored below `prefix`, including `prefix` itself
    /// (with an empty suffix) if it holds a value. Yields an empty sequence if `prefix` was
    /// never reached by an insertion.
    pub fn prefix_enumerate(&self, prefix: impl IntoIterator<Item = u32>) -> PrefixMatches<'_> {
        let start = topology::walk(&self.store, prefix);
        PrefixMatches::new(&self.store, start)
    }

    /// Rebuilds suffix (failure) links if they are currently stale. Called automatically by
    /// [`Dict::match_text`]; exposed so a caller can force an eager rebuild, e.g. before sharing
    /// a read-only view of a finished dictionary across multiple readers.
    pub fn prepare(&mut self) {
        if self.links_stale {
            suffix_links::rebuild(&mut self.store);
            self.links_stale = false;
        }
    }

    /// Whether suffix links need rebuilding before the next match.
    pub fn links_stale(&self) -> bool {
        self.links_stale
    }

    /// Scans `text` for every occurrence of every stored pattern, rebuilding suffix links first
    /// if they are stale. Occurrences are reported in scan order, overlapping occurrences
    /// included, with `end_index` immediately after the occurrence's last symbol.
    pub fn match_text<'a>(&'a mut self, text: &'a [u32]) -> Matches<'a> {
        self.prepare();
        Matches::new(&self.store, &self.patterns, text, None)
    }

    /// Like [`Dict::match_text`], but a hit is only reported if both of its neighbors in `text`
    /// are either absent (start/end of text) or members of `boundary_symbols`.
    pub fn match_text_with_boundary<'a>(
        &'a mut self,
        text: &'a [u32],
        boundary_symbols: &'a [u32],
    ) -> Matches<'a> {
        self.prepare();
        Matches::new(&self.store, &self.patterns, text, Some(boundary_symbols))
    }

    /// Like [`Dict::match_text`], but returns [`Error::StaleLinks`] instead of auto-rebuilding
    /// when suffix links are stale. For callers that want to control exactly when the O(node
    /// count) rebuild pass happens.
    pub fn match_text_strict<'a>(&'a self, text: &'a [u32]) -> Result<Matches<'a>> {
        if self.links_stale {
            return Err(Error::StaleLinks);
        }
        Ok(Matches::new(&self.store, &self.patterns, text, None))
    }

    /// Serializes this dictionary to `out`, per the binary format documented at the crate root.
    pub fn serialize(&self, out: &mut impl BufMut) {
        serde_format::write(&self.store, !self.links_stale, out);
    }

    /// Convenience wrapper around [`Dict::serialize`] that returns an owned byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.serialize(&mut buf);
        buf
    }

    /// Deserializes a dictionary previously produced by [`Dict::serialize`] or [`Dict::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptSerializedData`] if `input` is not a well-formed dictionary image.
    pub fn deserialize(input: impl Buf) -> Result<Self> {
        let (store, links_current) = serde_format::read(input)?;
        let patterns = collect_patterns(&store);
        Ok(Dict {
            store,
            patterns,
            links_stale: !links_current,
        })
    }
}

/// Rebuilds the `NodeIndex -> pattern` side table by walking every path from root, used after
/// deserializing (the table itself is not part of the wire format).
fn collect_patterns(store: &NodeStore) -> HashMap<NodeIndex, Vec<u32>> {
    let mut patterns = HashMap::new();
    let mut stack = vec![(NodeStore::ROOT, Vec::new())];

    while let Some((node, path)) = stack.pop() {
        let record = store.get(node);
        if node != NodeStore::ROOT && record.value != NO_VALUE {
            patterns.insert(node, path.clone());
        }

        let mut child = record.child;
        while child != NodeStore::NULL {
            let mut child_path = path.clone();
            child_path.push(store.get(child).symbol);
            stack.push((child, child_path));
            child = store.get(child).sibling;
        }
    }

    patterns
}
