use chrono::{Duration, NaiveDate};
use tracing::{error, info, warn};

use crate::api::FixtureSource;
use crate::db::MatchStore;
use crate::models::{CanonicalOdds, MatchRecord};
use crate::odds::extract_match_winner_odds;

/// What to import
#[derive(Debug, Clone)]
pub struct PopulateSettings {
    pub leagues: Vec<u32>,
    pub season: i32,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl PopulateSettings {
    /// Window starting on `today` and spanning `days_ahead` days
    pub fn window(leagues: Vec<u32>, season: i32, today: NaiveDate, days_ahead: i64) -> Self {
        Self {
            leagues,
            season,
            from: today,
            to: today + Duration::days(days_ahead),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub fixtures: usize,
    pub with_odds: usize,
    pub without_odds: usize,
    /// Odds requests that failed or returned unparseable prices
    pub odds_errors: usize,
    /// Leagues whose fixture list could not be fetched
    pub league_errors: usize,
    pub saved: usize,
    pub save_errors: usize,
}

/// Imports upcoming fixtures with their Match Winner odds into storage
pub struct PopulateMatchesJob<F, S> {
    source: F,
    store: S,
    settings: PopulateSettings,
}

impl<F: FixtureSource, S: MatchStore> PopulateMatchesJob<F, S> {
    pub fn new(source: F, store: S, settings: PopulateSettings) -> Self {
        Self {
            source,
            store,
            settings,
        }
    }

    pub async fn run(&self) -> PopulateSummary {
        info!(
            "Fetching matches from {} to {} for leagues {:?}",
            self.settings.from, self.settings.to, self.settings.leagues
        );

        let mut summary = PopulateSummary::default();
        let records = self.collect_records(&mut summary).await;

        info!("Total matches to save: {}", records.len());
        if records.is_empty() {
            info!("No matches found, nothing to save");
            return summary;
        }

        self.save_records(&records, &mut summary).await;

        info!(
            "Done: {} saved, {} failed to save ({} fixtures, {} with odds, {} without, {} odds errors)",
            summary.saved,
            summary.save_errors,
            summary.fixtures,
            summary.with_odds,
            summary.without_odds,
            summary.odds_errors
        );

        summary
    }

    async fn collect_records(&self, summary: &mut PopulateSummary) -> Vec<MatchRecord> {
        let mut records = Vec::new();

        for &league_id in &self.settings.leagues {
            info!("Fetching league {}", league_id);

            let fixtures = match self
                .source
                .fetch_fixtures(
                    league_id,
                    self.settings.season,
                    self.settings.from,
                    self.settings.to,
                )
                .await
            {
                Ok(fixtures) => fixtures,
                Err(e) => {
                    error!("Failed to fetch fixtures for league {}: {}", league_id, e);
                    summary.league_errors += 1;
                    continue;
                }
            };

            info!("Found {} fixtures in league {}", fixtures.len(), league_id);

            for fixture in fixtures {
                summary.fixtures += 1;

                let odds = self.fixture_odds(fixture.id(), &fixture.label(), summary).await;
                match odds {
                    Some(_) => summary.with_odds += 1,
                    None => summary.without_odds += 1,
                }

                records.push(fixture.into_record(odds, self.settings.season));
            }
        }

        records
    }

    /// Odds for one fixture; any failure leaves the fixture without odds
    async fn fixture_odds(
        &self,
        fixture_id: i64,
        label: &str,
        summary: &mut PopulateSummary,
    ) -> Option<CanonicalOdds> {
        let payload = match self.source.fetch_odds(fixture_id).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Odds request failed for fixture {}: {}", fixture_id, e);
                summary.odds_errors += 1;
                return None;
            }
        };

        match extract_match_winner_odds(&payload) {
            Ok(Some(found)) => {
                info!(
                    "Odds for {} from {}: H{} U{} B{}",
                    label, found.bookmaker, found.odds.home, found.odds.draw, found.odds.away
                );
                Some(found.odds)
            }
            Ok(None) => {
                warn!("No Match Winner odds found for fixture {}", fixture_id);
                None
            }
            Err(e) => {
                warn!("Unusable odds for fixture {}: {}", fixture_id, e);
                summary.odds_errors += 1;
                None
            }
        }
    }

    async fn save_records(&self, records: &[MatchRecord], summary: &mut PopulateSummary) {
        for record in records {
            match self.store.upsert_match(record).await {
                Ok(()) => {
                    info!("Saved: {} - {}", record.home_team, record.away_team);
                    summary.saved += 1;
                }
                Err(e) => {
                    error!("Error saving match {}: {}", record.id, e);
                    summary.save_errors += 1;
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (F, S) {
        (self.source, self.store)
    }
}
