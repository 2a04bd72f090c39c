//! Downstream encoding estimators
//!
//! Two illustrative byte layouts consume the match table to predict
//! compressed sizes: a varint layout with unbounded match distance
//! ([`pjlz`]) and a fixed two-byte-offset layout ([`lz4`]). Both walk
//! the buffer greedily, emitting a token per usable match and skipping
//! its length; neither feeds anything back into the match finder.

pub mod lz4;
pub mod pjlz;

/// Largest value a 4-bit token nibble can hold before spilling into
/// continuation bytes.
pub(crate) const NIBBLE_MAX: usize = 15;

/// Percentage of the raw size an estimate comes to.
pub(crate) fn ratio(encoded_len: usize, raw_len: usize) -> f64 {
    if raw_len == 0 {
        0.0
    } else {
        encoded_len as f64 / raw_len as f64 * 100.0
    }
}
