//! A compressed, serializable symbol trie with exact lookup, prefix enumeration and
//! Aho-Corasick multi-pattern matching over text.
//!
//! # Data model
//!
//! A pattern is a non-empty sequence of symbols (`u32`), where symbol `0` is reserved and may
//! never appear in a pattern. Each pattern maps to a `u32` value; [`u32::MAX`] is reserved
//! internally to mean "this node has no value" and is rejected by [`Dict::assign`] (see
//! [`dict::MAX_VALUE`]).
//!
//! Nodes live in a single flat, append-only array (see [`node_store`]). Each node stores the
//! symbol on its incoming edge, an optional value, a pointer to its first child, a pointer to
//! its next sibling, and a failure (suffix) link used for matching. There are no parent
//! pointers: paths from the root are reconstructed on demand by the callers that need them
//! ([`prefix`], and the pattern side table kept by [`Dict`]).
//!
//! # Suffix links and staleness
//!
//! Failure links are rebuilt in a single breadth-first pass over the whole node array (see
//! [`suffix_links`]). Any call to [`Dict::assign`] invalidates them. [`Dict::match_text`] and
//! [`Dict::match_text_with_boundary`] rebuild automatically before scanning; [`Dict::prepare`]
//! lets a caller force the rebuild ahead of time, and [`Dict::match_text_strict`] refuses to
//! match at all while links are stale rather than pay for an implicit rebuild.
//!
//! # Symbols and text
//!
//! The core of this crate is symbol-agnostic: it never looks at `&str`. The [`symbols`] module
//! supplies the conversion for ordinary Unicode text (each `char` as its scalar value), which is
//! what every example in this documentation uses.
//!
//! # Example
//!
//! ```
//! use triedict::{symbols, Dict};
//!
//! let mut dict = Dict::new();
//! dict.assign(symbols::encode_str("key1"), 0).unwrap();
//! dict.assign(symbols::encode_str("key2"), 11).unwrap();
//!
//! assert_eq!(dict.lookup(symbols::encode_str("key1")), Some(0));
//!
//! let text: Vec<u32> = symbols::encode_str("this is key1 and key2key1 in a string").collect();
//! let ends: Vec<usize> = dict.match_text(&text).map(|hit| hit.end_index).collect();
//! assert_eq!(ends, vec![12, 20, 24]);
//! ```
//!
//! # Serialization
//!
//! [`Dict::serialize`] and [`Dict::deserialize`] exchange a compact binary image that exploits
//! the node array's flat layout directly; see [`serde_format`] for the wire format.
//!
//! # Concurrency
//!
//! `Dict` is `Send` but not internally synchronized: matching may trigger a suffix-link rebuild,
//! so even read-only-looking calls take `&mut self`. Share a `Dict` across threads behind your
//! own synchronization, or call [`Dict::prepare`] once up front and reach for
//! [`Dict::match_text_strict`] (which only needs `&self`) from each reader afterward.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dict;
mod error;
mod matcher;
mod node_store;
mod prefix;
pub mod symbols;
mod suffix_links;
mod serde_format;
mod topology;

pub use dict::{Dict, MAX_VALUE};
pub use error::{CorruptReason, Error, Result};
pub use matcher::{MatchHit, Matches};
pub use prefix::PrefixMatches;
