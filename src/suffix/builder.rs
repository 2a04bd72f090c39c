//! Suffix array construction
//!
//! Sorts every suffix of the input buffer into lexicographic order by
//! comparing suffix start positions directly. Comparisons are unbounded
//! (worst case O(n) each), so the sort is O(n² log n) in the worst case.
//! That is fine at the scale this crate targets, and the downstream
//! stages only require that the order rule holds.
//!
//! TODO: switch to a linear-time construction (SA-IS) if inputs outgrow
//! the naive sort.

use super::types::{Rank, TextPos};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Inputs above this size use the parallel sort path.
const PARALLEL_SORT_THRESHOLD: usize = 100_000;

/// Build the suffix array of `text`.
///
/// The result is a permutation of `[0, n)`: entry `r` is the starting
/// position of the suffix ranked `r` in suffix order.
pub fn build_suffix_array(text: &[u8]) -> Vec<TextPos> {
    let n = text.len();

    let mut sa: Vec<TextPos> = (0..n).collect();

    // Stable sort, though the comparator never reports Equal for
    // distinct positions, so the order is fully determined either way.
    if n > PARALLEL_SORT_THRESHOLD {
        sa.par_sort_by(|&a, &b| compare_suffixes(text, a, b));
    } else {
        sa.sort_by(|&a, &b| compare_suffixes(text, a, b));
    }

    sa
}

/// Compare the suffixes starting at `a` and `b`.
///
/// Byte-wise comparison; when one suffix is a prefix of the other, the
/// shorter (later-starting) suffix orders first. Slice ordering on the
/// suffix tails encodes exactly that rule.
#[inline]
fn compare_suffixes(text: &[u8], a: TextPos, b: TextPos) -> Ordering {
    text[a..].cmp(&text[b..])
}

/// Invert the suffix array: the result maps position → rank.
pub fn invert_suffix_array(sa: &[TextPos]) -> Vec<Rank> {
    let mut isa = vec![0; sa.len()];
    for (rank, &pos) in sa.iter().enumerate() {
        isa[pos] = rank;
    }
    isa
}
