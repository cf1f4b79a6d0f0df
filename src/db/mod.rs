pub mod supabase;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{MatchRecord, StoredMatch, StoredOdds};

pub use supabase::{MatchQuery, StorageClient};

/// Record-oriented access to the `matches` table
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Filtered, column-selected read
    async fn fetch_matches(&self, query: &MatchQuery) -> Result<Vec<StoredMatch>, ApiError>;

    /// Insert a match, merging into the existing row on id conflict
    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), ApiError>;

    /// Replace only the odds field of one match
    async fn update_odds(&self, match_id: i64, odds: &StoredOdds) -> Result<(), ApiError>;
}
