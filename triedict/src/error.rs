//! Errors returned by [`crate::Dict`] operations.

use std::fmt;

use thiserror::Error;

/// Reason a byte stream failed to deserialize into a [`crate::Dict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptReason {
    /// The stream ended before a complete header could be read.
    TruncatedHeader,
    /// The first four bytes did not match the expected magic tag.
    BadMagic,
    /// The format version in the header is not supported by this build.
    UnsupportedVersion,
    /// The header claimed more node records than the stream actually contains.
    TruncatedRecords,
    /// A node's `child`, `sibling` or `suffix` field referenced an index outside the node count.
    DanglingReference,
    /// The header claimed a node count that cannot be represented, or zero (every store must
    /// contain at least the root node).
    NodeCountOutOfRange,
}

impl fmt::Display for CorruptReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            CorruptReason::TruncatedHeader => "stream ended before the header was complete",
            CorruptReason::BadMagic => "magic tag does not match",
            CorruptReason::UnsupportedVersion => "format version is not supported",
            CorruptReason::TruncatedRecords => "stream ended before all node records were read",
            CorruptReason::DanglingReference => "node record references an out-of-bounds index",
            CorruptReason::NodeCountOutOfRange => "node count in header is out of range",
        };
        f.write_str(message)
    }
}

/// Errors that can occur while building, querying or (de)serializing a [`crate::Dict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `assign` was called with a pattern containing zero symbols.
    #[error("pattern must contain at least one symbol")]
    EmptyKey,

    /// A pattern contained the reserved symbol `0`.
    #[error("symbol 0 is reserved and cannot appear in a pattern")]
    ReservedSymbol,

    /// The value passed to `assign` exceeds the representable range.
    #[error("value {0} exceeds the maximum representable value")]
    ValueOutOfRange(u32),

    /// The node store cannot grow any further: its 32-bit index space is exhausted.
    #[error("node store exhausted its 32-bit index space")]
    CapacityExhausted,

    /// Matching was requested through an entry point that refuses to auto-rebuild, and the
    /// suffix links are currently stale.
    #[error("suffix links are stale and must be rebuilt before matching")]
    StaleLinks,

    /// The byte stream being deserialized is not a valid dictionary image.
    #[error("corrupt serialized data: {0}")]
    CorruptSerializedData(CorruptReason),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
