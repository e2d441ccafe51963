//! Operations over a [`NodeStore`] that maintain the tree invariants (child/sibling chains).
//!
//! This module does not know about suffix links or matching; it only walks and grows the
//! child/sibling topology.

use crate::error::Result;
use crate::node_store::{NodeIndex, NodeStore};

/// Walks `parent`'s sibling chain looking for a child whose incoming edge carries `symbol`.
/// Returns [`NodeStore::NULL`] if no such child exists.
pub(crate) fn find_child(store: &NodeStore, parent: NodeIndex, symbol: u32) -> NodeIndex {
    let mut current = store.get(parent).child;
    while current != NodeStore::NULL {
        if store.get(current).symbol == symbol {
            return current;
        }
        current = store.get(current).sibling;
    }
    NodeStore::NULL
}

/// Returns the existing child of `parent` for `symbol`, or allocates and splices in a new one
/// at the head of the sibling chain.
pub(crate) fn insert_child(
    store: &mut NodeStore,
    parent: NodeIndex,
    symbol: u32,
) -> Result<NodeIndex> {
    let existing = find_child(store, parent, symbol);
    if existing != NodeStore::NULL {
        return Ok(existing);
    }

    let new_index = store.allocate(symbol)?;
    let previous_head = store.get(parent).child;
    store.set_sibling(new_index, previous_head);
    store.set_child(parent, new_index);
    Ok(new_index)
}

/// Walks the topology symbol by symbol starting at the root, returning the terminal node if the
/// full sequence is present.
pub(crate) fn walk(store: &NodeStore, seq: impl IntoIterator<Item = u32>) -> Option<NodeIndex> {
    let mut current = NodeStore::ROOT;
    for symbol in seq {
        let next = find_child(store, current, symbol);
        if next == NodeStore::NULL {
            return None;
        }
        current = next;
    }
    Some(current)
}
