//! Rank-space nearest-prefix construction
//!
//! Solves the matching problem in two separated steps: first a plain
//! previous/next-smaller-element pass over the ranks (positions only, no
//! LCP bookkeeping), then direct byte scoring of the two surviving
//! candidates per position under the same longest-then-closest rule.
//! The rescans make it quadratic in the worst case, so the stack finder
//! is the production path; this construction is kept as an independent
//! reference the test suite compares against, since both must agree
//! exactly on every input.

use super::types::{MatchConfig, MatchTable};
use crate::suffix::{common_prefix_len, Rank, TextPos};

/// For each rank, the nearest higher rank holding a smaller position.
pub fn nearest_smaller_forward(sa: &[TextPos]) -> Vec<Option<Rank>> {
    let n = sa.len();
    let mut nearest = vec![None; n];
    let mut unmatched: Vec<Rank> = Vec::new();

    for rank in 0..n {
        let pos = sa[rank];
        while let Some(&top) = unmatched.last() {
            if pos >= sa[top] {
                break;
            }
            unmatched.pop();
            nearest[top] = Some(rank);
        }
        unmatched.push(rank);
    }

    nearest
}

/// For each rank, the nearest lower rank holding a smaller position.
pub fn nearest_smaller_backward(sa: &[TextPos]) -> Vec<Option<Rank>> {
    let n = sa.len();
    let mut nearest = vec![None; n];
    let mut unmatched: Vec<Rank> = Vec::new();

    for rank in (0..n).rev() {
        let pos = sa[rank];
        while let Some(&top) = unmatched.last() {
            if pos >= sa[top] {
                break;
            }
            unmatched.pop();
            nearest[top] = Some(rank);
        }
        unmatched.push(rank);
    }

    nearest
}

/// Build the match table from the two directional candidates per rank.
///
/// Must produce exactly the same table as the stack finder for any input
/// and threshold.
pub fn find_matches_by_rank(text: &[u8], sa: &[TextPos], config: &MatchConfig) -> MatchTable {
    let n = sa.len();
    let forward = nearest_smaller_forward(sa);
    let backward = nearest_smaller_backward(sa);
    let mut table = MatchTable::no_matches(n);

    for rank in 0..n {
        let pos = sa[rank];
        let fwd = forward[rank].map(|r| sa[r]);
        let bwd = backward[rank].map(|r| sa[r]);

        let best = match (fwd, bwd) {
            (None, None) => None,
            (Some(src), None) | (None, Some(src)) => {
                Some((src, common_prefix_len(text, pos, src)))
            }
            (Some(f), Some(b)) => {
                let f_len = common_prefix_len(text, pos, f);
                let b_len = common_prefix_len(text, pos, b);
                if f_len == b_len {
                    // Same length either way; the larger source position
                    // is the smaller offset.
                    Some((f.max(b), f_len))
                } else if f_len > b_len {
                    Some((f, f_len))
                } else {
                    Some((b, b_len))
                }
            }
        };

        if let Some((src, len)) = best {
            if len >= config.min_match_len {
                table.record(pos, pos - src, len);
            }
        }
    }

    table
}
