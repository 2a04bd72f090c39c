pub mod builder;
pub mod lcp;
pub mod types;

pub use builder::{build_suffix_array, invert_suffix_array};
pub use lcp::{build_lcp_array, common_prefix_len};
pub use types::*;
