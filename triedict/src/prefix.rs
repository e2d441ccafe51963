//! Depth-first enumeration of every stored pattern below a prefix node.

use crate::node_store::{NodeIndex, NodeStore, NO_VALUE};

enum Frame {
    Enter(NodeIndex),
    Leave,
}

/// Lazily yields `(suffix, value)` for every pattern stored below a prefix node, in
/// child-before-sibling order. Sibling lists are insertion-ordered (most recent child first),
/// so this gives a deterministic but **not lexicographic** enumeration.
#[derive(Debug)]
pub struct PrefixMatches<'a> {
    store: &'a NodeStore,
    start: NodeIndex,
    stack: Vec<Frame>,
    path: Vec<u32>,
}

impl<'a> PrefixMatches<'a> {
    pub(crate) fn new(store: &'a NodeStore, start: Option<NodeIndex>) -> Self {
        let stack = match start {
            Some(node) => vec![Frame::Enter(node)],
            None => Vec::new(),
        };
        PrefixMatches {
            store,
            start: start.unwrap_or(NodeStore::NULL),
            stack,
            path: Vec::new(),
        }
    }
}

impl Iterator for PrefixMatches<'_> {
    type Item = (Vec<u32>, u32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Leave => {
                    self.path.pop();
                }
                Frame::Enter(node) => {
                    if node != self.start {
                        self.path.push(self.store.get(node).symbol);
                        self.stack.push(Frame::Leave);
                    }

                    let mut child = self.store.get(node).child;
                    while child != NodeStore::NULL {
                        self.stack.push(Frame::Enter(child));
                        child = self.store.get(child).sibling;
                    }

                    let value = self.store.get(node).value;
                    if value != NO_VALUE {
                        return Some((self.path.clone(), value));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{insert_child, walk};

    fn symbols(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    fn assign(store: &mut NodeStore, pattern: &str, value: u32) {
        let mut node = NodeStore::ROOT;
        for symbol in symbols(pattern) {
            node = insert_child(store, node, symbol).unwrap();
        }
        store.set_value(node, value);
    }

    #[test]
    fn yields_suffixes_below_prefix_as_a_set() {
        let mut store = NodeStore::new();
        assign(&mut store, "key1", 0);
        assign(&mut store, "key2", 11);
        assign(&mut store, "key3nope", 99);

        let prefix_node = walk(&store, symbols("key"));
        let results: Vec<_> = PrefixMatches::new(&store, prefix_node).collect();
        let mut as_strings: Vec<(String, u32)> = results
            .into_iter()
            .map(|(suffix, value)| {
                let s: String = suffix.into_iter().map(|c| char::from_u32(c).unwrap()).collect();
                (s, value)
            })
            .collect();
        as_strings.sort();

        assert_eq!(
            as_strings,
            vec![
                ("1".to_string(), 0),
                ("2".to_string(), 11),
                ("3nope".to_string(), 99),
            ]
        );
    }

    #[test]
    fn prefix_itself_yielded_with_empty_suffix_when_it_holds_a_value() {
        let mut store = NodeStore::new();
        assign(&mut store, "a", 1);
        assign(&mut store, "ab", 2);

        let prefix_node = walk(&store, symbols("a"));
        let results: Vec<_> = PrefixMatches::new(&store, prefix_node).collect();
        assert!(results.contains(&(Vec::new(), 1)));
        assert!(results.contains(&(symbols("b"), 2)));
    }

    #[test]
    fn missing_prefix_yields_empty_sequence() {
        let store = NodeStore::new();
        let results: Vec<_> = PrefixMatches::new(&store, None).collect();
        assert!(results.is_empty());
    }
}
