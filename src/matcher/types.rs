//! Types for match finding
//!
//! The match table is the artifact handed to downstream consumers: for
//! every buffer position, the distance back to the best earlier position
//! sharing a prefix, and the length of that shared prefix.

use crate::suffix::TextPos;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Default minimum match length worth recording.
pub const DEFAULT_MIN_MATCH_LEN: usize = 4;

/// Configuration for match finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Shortest shared-prefix length recorded as a match (default: 4)
    pub min_match_len: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_match_len: DEFAULT_MIN_MATCH_LEN,
        }
    }
}

impl MatchConfig {
    /// Reject nonsensical settings before any builder runs.
    ///
    /// A zero threshold would record zero-length "matches" and break the
    /// `offset == 0 ⟺ length == 0` sentinel pairing.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_match_len >= 1,
            "minimum match length must be at least 1"
        );
        Ok(())
    }
}

/// A recorded match: `offset` bytes back, `len` bytes shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub offset: usize,
    pub len: usize,
}

/// Per-position match results, indexed by original buffer position.
///
/// Both arrays hold 0 at positions with no match; a nonzero entry always
/// has a nonzero partner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchTable {
    offsets: Vec<usize>,
    lens: Vec<usize>,
}

impl MatchTable {
    /// A table of `n` positions, all initialized to the no-match sentinel.
    pub fn no_matches(n: usize) -> Self {
        Self {
            offsets: vec![0; n],
            lens: vec![0; n],
        }
    }

    /// Number of positions covered (the buffer length).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Distance back to the matched position, or 0 when there is none.
    pub fn offset(&self, pos: TextPos) -> usize {
        self.offsets[pos]
    }

    /// Shared-prefix length of the match, or 0 when there is none.
    pub fn match_len(&self, pos: TextPos) -> usize {
        self.lens[pos]
    }

    /// The match at `pos`, if one was recorded.
    pub fn get(&self, pos: TextPos) -> Option<Match> {
        if self.lens[pos] == 0 {
            None
        } else {
            Some(Match {
                offset: self.offsets[pos],
                len: self.lens[pos],
            })
        }
    }

    pub(crate) fn record(&mut self, pos: TextPos, offset: usize, len: usize) {
        self.offsets[pos] = offset;
        self.lens[pos] = len;
    }

    /// Aggregate statistics for reporting.
    pub fn summary(&self) -> MatchSummary {
        let mut matched = 0;
        let mut total_match_len = 0;
        let mut longest = 0;
        let mut longest_at = 0;

        for (pos, &len) in self.lens.iter().enumerate() {
            if len == 0 {
                continue;
            }
            matched += 1;
            total_match_len += len;
            if len > longest {
                longest = len;
                longest_at = pos;
            }
        }

        MatchSummary {
            positions: self.len(),
            matched,
            total_match_len,
            longest,
            longest_at,
        }
    }
}

/// Aggregate match statistics, included in reports.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    /// Buffer length (number of table entries)
    pub positions: usize,
    /// Positions with a recorded match
    pub matched: usize,
    /// Sum of all recorded match lengths
    pub total_match_len: usize,
    /// Longest recorded match
    pub longest: usize,
    /// Position of the longest recorded match
    pub longest_at: TextPos,
}

/// Observer hook for match-finder decisions.
///
/// Injected via configuration by callers that want visibility into the
/// sweeps; the default implementations do nothing, so tracing costs
/// nothing unless a method is overridden.
pub trait MatchTrace {
    /// A candidate pairing between `pos` and the earlier `src` was
    /// evaluated with shared-prefix length `len`.
    fn on_candidate(&mut self, _pos: TextPos, _src: TextPos, _len: usize) {}

    /// A match was written to the table.
    fn on_record(&mut self, _pos: TextPos, _offset: usize, _len: usize) {}
}

/// Trace that ignores every event.
pub struct NoTrace;

impl MatchTrace for NoTrace {}

/// Prints every candidate decision for a single buffer position.
pub struct WatchTrace {
    watch: TextPos,
}

impl WatchTrace {
    pub fn new(watch: TextPos) -> Self {
        Self { watch }
    }
}

impl MatchTrace for WatchTrace {
    fn on_candidate(&mut self, pos: TextPos, src: TextPos, len: usize) {
        if pos == self.watch {
            eprintln!("watch {pos}: candidate at {src} shares {len} bytes");
        }
    }

    fn on_record(&mut self, pos: TextPos, offset: usize, len: usize) {
        if pos == self.watch {
            eprintln!("watch {pos}: recorded offset {offset} len {len}");
        }
    }
}
