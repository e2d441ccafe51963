//! Single-pass breadth-first construction of Aho-Corasick failure (suffix) links.
//!
//! Any insertion invalidates the links built here; [`crate::Dict`] tracks staleness and calls
//! [`rebuild`] again before the next match.

use std::collections::VecDeque;

use log::trace;

use crate::node_store::{NodeIndex, NodeStore};
use crate::topology::find_child;

/// Rebuilds `suffix` on every node in `store` via breadth-first traversal, per the construction
/// in the dictionary's design: each node's failure link is the longest proper suffix of its
/// path-from-root that is itself a path-from-root.
pub(crate) fn rebuild(store: &mut NodeStore) {
    trace!("rebuilding suffix links over {} nodes", store.len());

    store.set_suffix(NodeStore::ROOT, NodeStore::ROOT);

    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    // Direct children of the root fail back to the root: their longest proper suffix is empty.
    let mut child = store.get(NodeStore::ROOT).child;
    while child != NodeStore::NULL {
        store.set_suffix(child, NodeStore::ROOT);
        queue.push_back(child);
        child = store.get(child).sibling;
    }

    while let Some(parent) = queue.pop_front() {
        let mut child = store.get(parent).child;
        while child != NodeStore::NULL {
            let symbol = store.get(child).symbol;

            let mut fallback = store.get(parent).suffix;
            while fallback != NodeStore::ROOT && find_child(store, fallback, symbol) == NodeStore::NULL {
                fallback = store.get(fallback).suffix;
            }

            let target = find_child(store, fallback, symbol);
            let suffix = if target == NodeStore::NULL || target == child {
                NodeStore::ROOT
            } else {
                target
            };
            store.set_suffix(child, suffix);

            queue.push_back(child);
            child = store.get(child).sibling;
        }
    }
}
