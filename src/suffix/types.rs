//! Types shared by the suffix-array builders.

/// Byte position in the input buffer.
pub type TextPos = usize;

/// Position of a suffix within the sorted suffix order.
pub type Rank = usize;
