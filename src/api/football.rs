use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::FixtureSource;
use crate::error::ApiError;
use crate::models::{Fixture, FixturesResponse, OddsResponse};

const SERVICE: &str = "API-Football";
const AUTH_HEADER: &str = "x-apisports-key";

/// Client for the API-Football v3 REST API
pub struct ApiFootballClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiFootballClient {
    /// Create a new API-Football client
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn request(&self, path: &str, query: &[(&str, String)]) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        self.client
            .get(&url)
            .header(AUTH_HEADER, &self.api_key)
            .query(query)
    }

    fn fixtures_request(
        &self,
        league_id: u32,
        season: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RequestBuilder {
        let query = [
            ("league", league_id.to_string()),
            ("season", season.to_string()),
            ("from", from.format("%Y-%m-%d").to_string()),
            ("to", to.format("%Y-%m-%d").to_string()),
        ];
        self.request("fixtures", &query)
    }

    fn odds_request(&self, fixture_id: i64) -> RequestBuilder {
        self.request("odds", &[("fixture", fixture_id.to_string())])
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            service: SERVICE,
            source,
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(SERVICE, status, &text));
        }

        response.json().await.map_err(|source| ApiError::Decode {
            service: SERVICE,
            source,
        })
    }
}

#[async_trait]
impl FixtureSource for ApiFootballClient {
    async fn fetch_fixtures(
        &self,
        league_id: u32,
        season: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Fixture>, ApiError> {
        let request = self.fixtures_request(league_id, season, from, to);
        let fixtures: FixturesResponse = self.get_json(request).await?;
        Ok(fixtures.response)
    }

    async fn fetch_odds(&self, fixture_id: i64) -> Result<OddsResponse, ApiError> {
        self.get_json(self.odds_request(fixture_id)).await
    }
}
