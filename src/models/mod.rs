pub mod fixture;
pub mod odds;
pub mod stored;

pub use fixture::{Fixture, FixturesResponse, MatchRecord};
pub use odds::{CanonicalOdds, MatchWinnerOdds, OddsResponse, StoredOdds};
pub use stored::StoredMatch;
