//! Brute-force re-derivation of every builder's defining property
//!
//! Each check recomputes a property by pairwise O(n²) comparison and
//! fails on the first violation. Nothing here runs on the production
//! path; the checks back the test suite and the CLI `--verify` flag,
//! and a failure always means a defect in the builder under test.

use crate::matcher::{MatchConfig, MatchTable};
use crate::suffix::{common_prefix_len, Rank, TextPos};
use anyhow::{ensure, Result};

/// The suffix array is a permutation of `[0, n)` in suffix order.
pub fn check_suffix_array(text: &[u8], sa: &[TextPos]) -> Result<()> {
    ensure!(
        sa.len() == text.len(),
        "suffix array has {} entries for a {}-byte buffer",
        sa.len(),
        text.len()
    );

    let mut seen = vec![false; sa.len()];
    for &pos in sa {
        ensure!(pos < text.len(), "suffix array entry {pos} is out of range");
        ensure!(!seen[pos], "position {pos} appears twice in the suffix array");
        seen[pos] = true;
    }

    for pair in sa.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        ensure!(
            text[a..] < text[b..],
            "suffixes at positions {a} and {b} are ranked out of order"
        );
    }

    Ok(())
}

/// The inverse array and the suffix array are mutual inverses.
pub fn check_inverse_suffix_array(sa: &[TextPos], isa: &[Rank]) -> Result<()> {
    ensure!(
        sa.len() == isa.len(),
        "inverse has {} entries, suffix array has {}",
        isa.len(),
        sa.len()
    );

    for (rank, &pos) in sa.iter().enumerate() {
        ensure!(pos < isa.len(), "suffix array entry {pos} is out of range");
        ensure!(
            isa[pos] == rank,
            "inverse maps position {pos} to rank {} instead of {rank}",
            isa[pos]
        );
    }

    for (pos, &rank) in isa.iter().enumerate() {
        ensure!(rank < sa.len(), "inverse entry {rank} is out of range");
        ensure!(
            sa[rank] == pos,
            "rank {rank} holds position {} instead of {pos}",
            sa[rank]
        );
    }

    Ok(())
}

/// Every LCP entry equals the pairwise shared-prefix length of the
/// rank-adjacent suffixes; the last rank has no successor and holds 0.
pub fn check_lcp_array(text: &[u8], sa: &[TextPos], lcp: &[usize]) -> Result<()> {
    ensure!(
        lcp.len() == sa.len(),
        "lcp array has {} entries, suffix array has {}",
        lcp.len(),
        sa.len()
    );

    if let Some(&last) = lcp.last() {
        ensure!(last == 0, "lcp of the last rank is {last}, expected 0");
    }

    for r in 0..sa.len().saturating_sub(1) {
        let expected = common_prefix_len(text, sa[r], sa[r + 1]);
        ensure!(
            lcp[r] == expected,
            "lcp[{r}] = {} but the suffixes at {} and {} share {expected} bytes",
            lcp[r],
            sa[r],
            sa[r + 1]
        );
    }

    Ok(())
}

/// Every table entry is internally consistent: sentinel pairing, offsets
/// pointing strictly backward, the threshold honored, and the recorded
/// length equal to the true shared-prefix length of the pair.
pub fn check_match_table(text: &[u8], table: &MatchTable, config: &MatchConfig) -> Result<()> {
    ensure!(
        table.len() == text.len(),
        "match table has {} entries for a {}-byte buffer",
        table.len(),
        text.len()
    );

    for pos in 0..table.len() {
        let offset = table.offset(pos);
        let len = table.match_len(pos);

        ensure!(
            (offset == 0) == (len == 0),
            "position {pos}: offset {offset} and length {len} disagree on the no-match sentinel"
        );

        if offset == 0 {
            continue;
        }

        ensure!(
            len >= config.min_match_len,
            "position {pos}: recorded length {len} is below the threshold {}",
            config.min_match_len
        );
        ensure!(
            offset <= pos,
            "position {pos}: offset {offset} points past the start of the buffer"
        );

        let src = pos - offset;
        let actual = common_prefix_len(text, pos, src);
        ensure!(
            len == actual,
            "position {pos}: recorded length {len} but positions {pos} and {src} share {actual} bytes"
        );
    }

    Ok(())
}

/// No earlier position shares a strictly longer prefix than the match
/// recorded for any position. O(n²); meant for small inputs.
pub fn check_match_lengths_maximal(
    text: &[u8],
    table: &MatchTable,
    config: &MatchConfig,
) -> Result<()> {
    for pos in 0..table.len() {
        let mut best = 0;
        for src in 0..pos {
            best = best.max(common_prefix_len(text, pos, src));
        }

        if best >= config.min_match_len {
            ensure!(
                table.match_len(pos) == best,
                "position {pos}: recorded length {} but an earlier position shares {best} bytes",
                table.match_len(pos)
            );
        } else {
            ensure!(
                table.get(pos).is_none(),
                "position {pos}: recorded a match but no earlier position reaches the threshold"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_matches;
    use crate::suffix::{build_lcp_array, build_suffix_array, invert_suffix_array};

    const TEXT: &[u8] = b"the quick brown fox jumps over the lazy dog, the end";

    fn built() -> (Vec<TextPos>, Vec<Rank>, Vec<usize>, MatchTable) {
        let sa = build_suffix_array(TEXT);
        let isa = invert_suffix_array(&sa);
        let lcp = build_lcp_array(TEXT, &sa, &isa);
        let table = find_matches(&sa, &lcp, &MatchConfig { min_match_len: 3 });
        (sa, isa, lcp, table)
    }

    #[test]
    fn test_accepts_correct_builders() {
        let (sa, isa, lcp, table) = built();
        let config = MatchConfig { min_match_len: 3 };

        check_suffix_array(TEXT, &sa).unwrap();
        check_inverse_suffix_array(&sa, &isa).unwrap();
        check_lcp_array(TEXT, &sa, &lcp).unwrap();
        check_match_table(TEXT, &table, &config).unwrap();
        check_match_lengths_maximal(TEXT, &table, &config).unwrap();
    }

    #[test]
    fn test_rejects_reordered_suffix_array() {
        let (mut sa, ..) = built();
        sa.swap(0, 1);
        assert!(check_suffix_array(TEXT, &sa).is_err());
    }

    #[test]
    fn test_rejects_duplicate_entry() {
        let (mut sa, ..) = built();
        sa[0] = sa[1];
        assert!(check_suffix_array(TEXT, &sa).is_err());
    }

    #[test]
    fn test_rejects_broken_inverse() {
        let (sa, mut isa, ..) = built();
        isa.swap(2, 3);
        assert!(check_inverse_suffix_array(&sa, &isa).is_err());
    }

    #[test]
    fn test_rejects_wrong_lcp() {
        let (sa, _, mut lcp, _) = built();
        lcp[0] += 1;
        assert!(check_lcp_array(TEXT, &sa, &lcp).is_err());
    }

    #[test]
    fn test_rejects_lying_match_length() {
        let (.., mut table) = built();
        let config = MatchConfig { min_match_len: 3 };

        let pos = (0..table.len())
            .find(|&p| table.get(p).is_some())
            .expect("sample text contains repeats");
        let offset = table.offset(pos);
        table.record(pos, offset, table.match_len(pos) + 1);

        assert!(check_match_table(TEXT, &table, &config).is_err());
    }

    #[test]
    fn test_rejects_forward_offset() {
        let (.., mut table) = built();
        let config = MatchConfig { min_match_len: 3 };

        // An offset larger than the position would point forward.
        table.record(1, 2, 5);
        assert!(check_match_table(TEXT, &table, &config).is_err());
    }
}
