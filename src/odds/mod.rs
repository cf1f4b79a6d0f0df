pub mod extractor;
pub mod normalizer;

pub use extractor::{extract_match_winner_odds, MATCH_WINNER};
pub use normalizer::{normalize, Normalization};
