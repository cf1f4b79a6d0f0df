use serde::{Deserialize, Serialize};

use super::odds::CanonicalOdds;

/// Status codes API-Football uses for a finished match
const COMPLETED_STATUSES: [&str; 3] = ["FT", "AET", "PEN"];

/// Raw `/fixtures` response from API-Football
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixturesResponse {
    #[serde(default)]
    pub response: Vec<Fixture>,
}

/// A single scheduled or completed match
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub fixture: FixtureInfo,
    pub league: LeagueInfo,
    pub teams: Teams,
    #[serde(default)]
    pub goals: Goals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureInfo {
    pub id: i64,
    /// Kickoff as an ISO-8601 timestamp
    pub date: String,
    #[serde(default)]
    pub status: FixtureStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureStatus {
    pub short: Option<String>,
    pub elapsed: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInfo {
    pub id: i64,
    pub name: String,
    pub season: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Teams {
    pub home: TeamInfo,
    pub away: TeamInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Goals {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

/// Row written to the `matches` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_logo: Option<String>,
    pub away_logo: Option<String>,
    pub commence_time: String,
    pub league_id: i64,
    pub league_name: String,
    pub season: i32,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub odds: Option<CanonicalOdds>,
    pub completed: bool,
    pub elapsed: Option<i32>,
}

impl Fixture {
    pub fn id(&self) -> i64 {
        self.fixture.id
    }

    /// "Home - Away", for log lines
    pub fn label(&self) -> String {
        format!("{} - {}", self.teams.home.name, self.teams.away.name)
    }

    /// Convert to the stored row, attaching whatever odds were found
    pub fn into_record(self, odds: Option<CanonicalOdds>, default_season: i32) -> MatchRecord {
        let status = self
            .fixture
            .status
            .short
            .unwrap_or_else(|| "NS".to_string());
        let completed = COMPLETED_STATUSES.contains(&status.as_str());

        MatchRecord {
            id: self.fixture.id,
            home_team: self.teams.home.name,
            away_team: self.teams.away.name,
            home_logo: self.teams.home.logo,
            away_logo: self.teams.away.logo,
            commence_time: self.fixture.date,
            league_id: self.league.id,
            league_name: self.league.name,
            season: self.league.season.unwrap_or(default_season),
            status,
            home_score: self.goals.home,
            away_score: self.goals.away,
            odds,
            completed,
            elapsed: self.fixture.status.elapsed,
        }
    }
}
