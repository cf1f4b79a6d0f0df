pub mod football;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use crate::error::ApiError;
use crate::models::{Fixture, OddsResponse};

pub use football::ApiFootballClient;

/// Read-only source of fixtures and their bookmaker odds
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Fixtures for one league between two dates, inclusive
    async fn fetch_fixtures(
        &self,
        league_id: u32,
        season: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Fixture>, ApiError>;

    /// Raw odds payload for one fixture
    async fn fetch_odds(&self, fixture_id: i64) -> Result<OddsResponse, ApiError>;
}

/// Shared HTTP client with a per-request timeout
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}
