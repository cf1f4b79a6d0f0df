use tracing::{info, warn};

use crate::db::{MatchQuery, MatchStore};
use crate::odds::{normalize, Normalization};

const COLUMNS: [&str; 5] = ["id", "home_team", "away_team", "odds", "commence_time"];
const SAMPLE_SIZE: usize = 10;

/// How many sampled records fell into each shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatReport {
    pub canonical: usize,
    pub legacy: usize,
    pub unrecognized: usize,
}

impl FormatReport {
    pub fn total(&self) -> usize {
        self.canonical + self.legacy + self.unrecognized
    }

    pub fn needs_migration(&self) -> bool {
        self.legacy > 0
    }
}

/// Samples the earliest matches with odds and reports their stored shape
pub async fn check_odds_format<S: MatchStore>(store: &S) -> anyhow::Result<FormatReport> {
    let query = MatchQuery::select(&COLUMNS)
        .with_odds()
        .order_asc("commence_time")
        .limit(SAMPLE_SIZE);

    let matches = store.fetch_matches(&query).await?;
    info!("Found {} matches with odds", matches.len());

    let mut report = FormatReport::default();

    for stored in &matches {
        info!("Match: {}\n  Odds: {:#}", stored.label(), stored.odds);

        match normalize(&stored.odds) {
            Normalization::CanonicalAlready => {
                info!("  Format: CORRECT (H/U/B)");
                report.canonical += 1;
            }
            Normalization::Migrated(_) => {
                warn!("  Format: WRONG (home/draw/away), needs migration");
                report.legacy += 1;
            }
            Normalization::Unrecognized { keys } => {
                warn!("  Format: UNKNOWN, keys are {:?}", keys);
                report.unrecognized += 1;
            }
        }
    }

    Ok(report)
}
