use tracing::{error, info, warn};

use crate::db::{MatchQuery, MatchStore};
use crate::odds::{normalize, Normalization};

const COLUMNS: [&str; 4] = ["id", "home_team", "away_team", "odds"];

/// Outcome counts for one migration run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub migrated: usize,
    /// Already in the canonical shape
    pub skipped: usize,
    /// Unrecognized shapes plus rejected writes
    pub errors: usize,
}

/// Rewrites legacy `{home, draw, away}` odds as `{H, U, B}`
pub struct MigrateOddsJob<S> {
    store: S,
}

impl<S: MatchStore> MigrateOddsJob<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read every match with odds and migrate the legacy ones one by one
    pub async fn run(&self) -> anyhow::Result<MigrationSummary> {
        let query = MatchQuery::select(&COLUMNS).with_odds();
        let matches = self.store.fetch_matches(&query).await?;
        info!("Found {} matches with odds to check", matches.len());

        let mut summary = MigrationSummary::default();

        for stored in &matches {
            match normalize(&stored.odds) {
                Normalization::CanonicalAlready => {
                    info!("SKIP: {} (already migrated)", stored.label());
                    summary.skipped += 1;
                }
                Normalization::Unrecognized { keys } => {
                    error!(
                        "UNKNOWN FORMAT: {} (match {}) has keys {:?}, inspect manually",
                        stored.label(),
                        stored.id,
                        keys
                    );
                    summary.errors += 1;
                }
                Normalization::Migrated(new_odds) => {
                    match self.store.update_odds(stored.id, &new_odds).await {
                        Ok(()) => {
                            info!(
                                "Migrated {}: {} -> H={} U={} B={}",
                                stored.label(),
                                stored.odds,
                                new_odds.home,
                                new_odds.draw,
                                new_odds.away
                            );
                            summary.migrated += 1;
                        }
                        Err(e) => {
                            warn!("Failed to update match {}: {}", stored.id, e);
                            summary.errors += 1;
                        }
                    }
                }
            }
        }

        info!(
            "Migration complete: {} migrated, {} skipped (already migrated), {} errors",
            summary.migrated, summary.skipped, summary.errors
        );

        Ok(summary)
    }

    #[cfg(test)]
    pub(crate) fn into_store(self) -> S {
        self.store
    }
}
