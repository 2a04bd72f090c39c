//! # SAMF - Suffix-Array Match Finder
//!
//! SAMF computes, for every position of a byte buffer, the best earlier
//! position sharing a prefix - the core primitive behind dictionary/LZ
//! match finding - using a suffix array instead of a hash table. After
//! the suffix sort, the inverse permutation, Kasai's LCP array and two
//! monotonic-stack sweeps run in O(n) amortized, replacing the naive
//! O(n²) pairwise search.
//!
//! ## Architecture
//!
//! - [`suffix`] - suffix array, inverse permutation and LCP builders
//! - [`matcher`] - the monotonic-stack match finder and its rank-space
//!   cross-check
//! - [`verify`] - brute-force re-derivation of every builder's property
//! - [`encode`] - greedy size estimators for two illustrative layouts
//! - [`input`] / [`output`] - input mapping and report formatting
//!
//! ## Quick Start
//!
//! ```
//! use samf::matcher::{find_matches, MatchConfig};
//! use samf::suffix::{build_lcp_array, build_suffix_array, invert_suffix_array};
//!
//! let text = b"abracadabra";
//! let sa = build_suffix_array(text);
//! let isa = invert_suffix_array(&sa);
//! let lcp = build_lcp_array(text, &sa, &isa);
//!
//! let table = find_matches(&sa, &lcp, &MatchConfig { min_match_len: 4 });
//!
//! // "abra" at position 7 repeats position 0.
//! assert_eq!(table.offset(7), 7);
//! assert_eq!(table.match_len(7), 4);
//! ```

pub mod encode;
pub mod input;
pub mod matcher;
pub mod output;
pub mod progress;
pub mod suffix;
pub mod verify;
