pub mod finder;
pub mod nearest;
pub mod types;

pub use finder::{find_matches, find_matches_traced};
pub use nearest::find_matches_by_rank;
pub use types::*;
