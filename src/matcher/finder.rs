//! Monotonic-stack match finder
//!
//! For every buffer position, finds the longest shared prefix with any
//! strictly earlier position, without pairwise scanning. The shared
//! prefix between two suffixes is the minimum LCP value across the rank
//! interval between them, so candidates worth considering sit near each
//! other in rank space. Each sweep resolves a nearest-smaller-position
//! query over the ranks with a stack whose entries carry that running
//! LCP minimum: when a position is popped by a smaller (earlier) one,
//! the entry's bound is exactly the shared-prefix length of the pair.
//!
//! The forward sweep catches candidates on the lower-rank side; the
//! backward sweep catches the higher-rank side and merges, preferring
//! the longer match, then the closer one.

use super::types::{MatchConfig, MatchTable, MatchTrace, NoTrace};
use crate::suffix::TextPos;

/// Stack entry: a position with no match recorded yet, and the minimum
/// LCP seen between its rank and the sweep's current rank.
#[derive(Clone, Copy)]
struct Unmatched {
    pos: TextPos,
    lcp: usize,
}

/// Build the match table for the buffer behind `sa` and `lcp`.
///
/// Matches shorter than `config.min_match_len` are never recorded; ties
/// in length resolve to the smaller offset.
pub fn find_matches(sa: &[TextPos], lcp: &[usize], config: &MatchConfig) -> MatchTable {
    find_matches_traced(sa, lcp, config, &mut NoTrace)
}

/// [`find_matches`] with an observer for candidate decisions.
pub fn find_matches_traced<T: MatchTrace>(
    sa: &[TextPos],
    lcp: &[usize],
    config: &MatchConfig,
    trace: &mut T,
) -> MatchTable {
    let n = sa.len();
    debug_assert_eq!(lcp.len(), n);

    // Every position starts at the no-match sentinel; the sweeps only
    // overwrite entries they actually pop.
    let mut table = MatchTable::no_matches(n);
    let mut stack: Vec<Unmatched> = Vec::new();

    // Forward sweep: a pop pairs the popped position with the current,
    // smaller one arriving from below in rank order.
    for rank in 0..n {
        let pos = sa[rank];

        // The stack is only non-empty once rank > 0, so rank - 1 cannot
        // underflow here.
        if let Some(top) = stack.last_mut() {
            top.lcp = top.lcp.min(lcp[rank - 1]);
        }

        while let Some(&Unmatched { pos: cand, lcp: shared }) = stack.last() {
            if pos >= cand {
                break;
            }
            stack.pop();

            // The popped bound also constrains everything deeper.
            if let Some(top) = stack.last_mut() {
                top.lcp = top.lcp.min(shared);
            }

            trace.on_candidate(cand, pos, shared);
            if shared >= config.min_match_len {
                table.record(cand, cand - pos, shared);
                trace.on_record(cand, cand - pos, shared);
            }
        }

        stack.push(Unmatched { pos, lcp: n });
    }

    // Backward sweep: same structure over reversed ranks, pairing each
    // popped position with a candidate from the other rank side.
    stack.clear();
    for rank in (0..n).rev() {
        let pos = sa[rank];

        if let Some(top) = stack.last_mut() {
            top.lcp = top.lcp.min(lcp[rank]);
        }

        while let Some(&Unmatched { pos: cand, lcp: shared }) = stack.last() {
            if pos >= cand {
                break;
            }
            stack.pop();

            if let Some(top) = stack.last_mut() {
                top.lcp = top.lcp.min(shared);
            }

            trace.on_candidate(cand, pos, shared);
            if shared >= config.min_match_len {
                let offset = cand - pos;
                // Keep the forward result unless this one is longer, or
                // as long and closer.
                if shared > table.match_len(cand)
                    || (shared == table.match_len(cand) && offset < table.offset(cand))
                {
                    table.record(cand, offset, shared);
                    trace.on_record(cand, offset, shared);
                }
            }
        }

        stack.push(Unmatched { pos, lcp: n });
    }

    table
}

#[cfg(test)]
mod tests {
    use super::super::types::Match;
    use super::*;
    use crate::suffix::{build_lcp_array, build_suffix_array, invert_suffix_array};

    fn matches_of(text: &[u8], min_match_len: usize) -> MatchTable {
        let sa = build_suffix_array(text);
        let isa = invert_suffix_array(&sa);
        let lcp = build_lcp_array(text, &sa, &isa);
        find_matches(&sa, &lcp, &MatchConfig { min_match_len })
    }

    #[test]
    fn test_banana() {
        let table = matches_of(b"banana", 2);

        // "ana" at 3 repeats "ana(na)" at 1; "na" at 4 repeats 2.
        assert_eq!(table.get(3), Some(Match { offset: 2, len: 3 }));
        assert_eq!(table.get(4), Some(Match { offset: 2, len: 2 }));
        for pos in [0, 1, 2, 5] {
            assert!(table.get(pos).is_none());
        }
    }

    #[test]
    fn test_repeated_bytes_self_overlap() {
        // Every position past the first matches its predecessor, with
        // the match running to the end of the buffer (source overlaps
        // the matched region).
        let table = matches_of(&[b'a'; 8], 1);

        assert!(table.get(0).is_none());
        for pos in 1..8 {
            assert_eq!(
                table.get(pos),
                Some(Match { offset: 1, len: 8 - pos })
            );
        }
    }

    #[test]
    fn test_no_repeats() {
        let table = matches_of(b"abcdefgh", 2);
        for pos in 0..8 {
            assert!(table.get(pos).is_none());
        }
    }

    #[test]
    fn test_empty_buffer() {
        let table = matches_of(b"", 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_threshold_filters_short_matches() {
        // Longest repeat in "banana" is 3 bytes.
        let table = matches_of(b"banana", 4);
        for pos in 0..6 {
            assert!(table.get(pos).is_none());
        }
    }

    #[test]
    fn test_equal_length_prefers_closer() {
        // Position 6 ("abn…") shares two bytes with both 0 ("abo…", the
        // forward side) and 3 ("abm…", the backward side); the closer
        // source at 3 must win.
        let table = matches_of(b"aboabmabn", 2);

        assert_eq!(table.get(6), Some(Match { offset: 3, len: 2 }));
        assert_eq!(table.get(3), Some(Match { offset: 3, len: 2 }));
        assert!(table.get(0).is_none());
    }

    #[test]
    fn test_offsets_point_backward() {
        let text = b"abcabcabcabc";
        let table = matches_of(text, 3);
        for pos in 0..text.len() {
            let offset = table.offset(pos);
            assert!(offset <= pos);
        }
    }

    #[test]
    fn test_trace_sees_recorded_matches() {
        struct Recorded(Vec<(usize, usize, usize)>);
        impl MatchTrace for Recorded {
            fn on_record(&mut self, pos: usize, offset: usize, len: usize) {
                self.0.push((pos, offset, len));
            }
        }

        let text = b"banana";
        let sa = build_suffix_array(text);
        let isa = invert_suffix_array(&sa);
        let lcp = build_lcp_array(text, &sa, &isa);

        let mut trace = Recorded(Vec::new());
        let table = find_matches_traced(
            &sa,
            &lcp,
            &MatchConfig { min_match_len: 2 },
            &mut trace,
        );

        for &(pos, offset, len) in &trace.0 {
            assert_eq!(table.offset(pos), offset);
            assert_eq!(table.match_len(pos), len);
        }
        assert_eq!(trace.0.len(), 2);
    }
}
