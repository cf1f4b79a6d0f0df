//! In-memory stand-ins for the provider and the storage backend.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::api::FixtureSource;
use crate::db::{MatchQuery, MatchStore};
use crate::error::ApiError;
use crate::models::{Fixture, MatchRecord, OddsResponse, StoredMatch, StoredOdds};

fn rejected(status: u16) -> ApiError {
    ApiError::Status {
        service: "test",
        status,
        body: "rejected".to_string(),
    }
}

#[derive(Default)]
pub struct MemoryStore {
    matches: Mutex<Vec<StoredMatch>>,
    upserts: Mutex<Vec<MatchRecord>>,
    updates: Mutex<Vec<(i64, StoredOdds)>>,
    reads: Mutex<Vec<MatchQuery>>,
    failing_updates: HashSet<i64>,
    failing_upserts: HashSet<i64>,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn with_matches(rows: Vec<(i64, Value)>) -> Self {
        let matches = rows
            .into_iter()
            .map(|(id, odds)| StoredMatch {
                id,
                home_team: Some(format!("Home {}", id)),
                away_team: Some(format!("Away {}", id)),
                odds,
                commence_time: None,
            })
            .collect();

        Self {
            matches: Mutex::new(matches),
            ..Default::default()
        }
    }

    pub fn failing_updates_for(mut self, id: i64) -> Self {
        self.failing_updates.insert(id);
        self
    }

    pub fn failing_upserts_for(mut self, id: i64) -> Self {
        self.failing_upserts.insert(id);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn updates(&self) -> Vec<(i64, StoredOdds)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn upserts(&self) -> Vec<MatchRecord> {
        self.upserts.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<MatchQuery> {
        self.reads.lock().unwrap().clone()
    }

    fn find<T>(&self, id: i64, f: impl Fn(&StoredMatch) -> T) -> T {
        let matches = self.matches.lock().unwrap();
        let stored = matches.iter().find(|m| m.id == id).expect("unknown match id");
        f(stored)
    }

    pub fn odds_of(&self, id: i64) -> Value {
        self.find(id, |m| m.odds.clone())
    }

    pub fn home_team_of(&self, id: i64) -> Option<String> {
        self.find(id, |m| m.home_team.clone())
    }
}

#[async_trait]
impl MatchStore for MemoryStore {
    async fn fetch_matches(&self, query: &MatchQuery) -> Result<Vec<StoredMatch>, ApiError> {
        self.reads.lock().unwrap().push(query.clone());
        if self.fail_reads {
            return Err(rejected(401));
        }

        let matches = self.matches.lock().unwrap();
        let rows = matches
            .iter()
            .filter(|m| !query.with_odds_only || !m.odds.is_null())
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(rows)
    }

    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), ApiError> {
        if self.failing_upserts.contains(&record.id) {
            return Err(rejected(409));
        }
        self.upserts.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn update_odds(&self, match_id: i64, odds: &StoredOdds) -> Result<(), ApiError> {
        if self.failing_updates.contains(&match_id) {
            return Err(rejected(403));
        }

        let mut matches = self.matches.lock().unwrap();
        if let Some(stored) = matches.iter_mut().find(|m| m.id == match_id) {
            stored.odds = serde_json::to_value(odds).expect("odds serialize");
        }
        self.updates.lock().unwrap().push((match_id, odds.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSource {
    fixtures: HashMap<u32, Vec<Fixture>>,
    odds: HashMap<i64, OddsResponse>,
    failing_leagues: HashSet<u32>,
    failing_odds: HashSet<i64>,
    odds_requests: Mutex<Vec<i64>>,
}

impl FakeSource {
    pub fn league(mut self, league_id: u32, fixtures: Vec<Fixture>) -> Self {
        self.fixtures.insert(league_id, fixtures);
        self
    }

    pub fn odds(mut self, fixture_id: i64, payload: Value) -> Self {
        let payload = serde_json::from_value(payload).expect("odds payload");
        self.odds.insert(fixture_id, payload);
        self
    }

    pub fn failing_league(mut self, league_id: u32) -> Self {
        self.failing_leagues.insert(league_id);
        self
    }

    pub fn failing_odds(mut self, fixture_id: i64) -> Self {
        self.failing_odds.insert(fixture_id);
        self
    }

    pub fn odds_requests(&self) -> Vec<i64> {
        self.odds_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FixtureSource for FakeSource {
    async fn fetch_fixtures(
        &self,
        league_id: u32,
        _season: i32,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<Fixture>, ApiError> {
        if self.failing_leagues.contains(&league_id) {
            return Err(rejected(500));
        }
        Ok(self.fixtures.get(&league_id).cloned().unwrap_or_default())
    }

    async fn fetch_odds(&self, fixture_id: i64) -> Result<OddsResponse, ApiError> {
        self.odds_requests.lock().unwrap().push(fixture_id);
        if self.failing_odds.contains(&fixture_id) {
            return Err(rejected(429));
        }
        Ok(self.odds.get(&fixture_id).cloned().unwrap_or_default())
    }
}

/// Minimal fixture in provider shape
pub fn fixture(id: i64, league_id: i64, home: &str, away: &str) -> Fixture {
    serde_json::from_value(serde_json::json!({
        "fixture": {"id": id, "date": "2025-11-22T15:00:00+00:00", "status": {"short": "NS"}},
        "league": {"id": league_id, "name": format!("League {}", league_id), "season": 2025},
        "teams": {"home": {"name": home, "logo": null}, "away": {"name": away, "logo": null}},
        "goals": {"home": null, "away": null}
    }))
    .expect("fixture json")
}

/// Odds payload with one bookmaker offering a Match Winner bet
pub fn match_winner_payload(home: &str, draw: &str, away: &str) -> Value {
    serde_json::json!({"response": [{"bookmakers": [{
        "id": 8,
        "name": "Bet365",
        "bets": [{"id": 1, "name": "Match Winner", "values": [
            {"value": "Home", "odd": home},
            {"value": "Draw", "odd": draw},
            {"value": "Away", "odd": away}
        ]}]
    }]}]})
}
