//! Conversion between the native symbol profile (Unicode scalar values) and `&str`.
//!
//! The core only assumes "a symbol is a `u32`, and `0` is reserved"; this module supplies the
//! conversion a caller needs to feed ordinary text through that interface.

/// Converts a string into the sequence of symbols the core expects: each `char` as its scalar
/// value.
pub fn encode_str(text: &str) -> impl Iterator<Item = u32> + '_ {
    text.chars().map(|c| c as u32)
}

/// Converts a sequence of symbols back into a `String`, for presenting values produced by
/// [`crate::Dict::prefix_enumerate`] or a [`crate::MatchHit`].
///
/// Returns `None` if any symbol is not a valid Unicode scalar value (which cannot happen for
/// symbols produced by [`encode_str`], but can for symbol sequences built by other means).
pub fn decode_to_string(symbols: &[u32]) -> Option<String> {
    symbols.iter().map(|&s| char::from_u32(s)).collect()
}
