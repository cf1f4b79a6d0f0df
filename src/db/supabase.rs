use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::json;
use tracing::debug;

use super::MatchStore;
use crate::error::ApiError;
use crate::models::{MatchRecord, StoredMatch, StoredOdds};

const SERVICE: &str = "storage";
const MATCHES_PATH: &str = "rest/v1/matches";

/// Row filter and projection for a `matches` read
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    pub columns: Vec<&'static str>,
    pub with_odds_only: bool,
    pub order_by: Option<&'static str>,
    pub limit: Option<usize>,
}

impl MatchQuery {
    pub fn select(columns: &[&'static str]) -> Self {
        Self {
            columns: columns.to_vec(),
            with_odds_only: false,
            order_by: None,
            limit: None,
        }
    }

    /// Only rows whose odds column is not null
    pub fn with_odds(mut self) -> Self {
        self.with_odds_only = true;
        self
    }

    /// Ascending order on a column
    pub fn order_asc(mut self, column: &'static str) -> Self {
        self.order_by = Some(column);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// PostgREST query parameters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", self.columns.join(","))];

        if self.with_odds_only {
            params.push(("odds", "not.is.null".to_string()));
        }
        if let Some(column) = self.order_by {
            params.push(("order", format!("{}.asc", column)));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}

/// Client for the PostgREST endpoint of the hosted database.
///
/// One client holds one credential; reads work with the restricted key,
/// writes need the elevated one.
pub struct StorageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StorageClient {
    /// Create a new storage client
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn matches_url(&self) -> String {
        format!("{}/{}", self.base_url, MATCHES_PATH)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    fn read_request(&self, query: &MatchQuery) -> RequestBuilder {
        self.authorized(self.client.get(self.matches_url()).query(&query.to_params()))
    }

    fn upsert_request(&self, record: &MatchRecord) -> RequestBuilder {
        self.authorized(
            self.client
                .post(self.matches_url())
                .header("Prefer", "resolution=merge-duplicates")
                .json(record),
        )
    }

    /// PATCH of the single row, body holding the odds column only
    fn update_odds_request(&self, match_id: i64, odds: &StoredOdds) -> RequestBuilder {
        self.authorized(
            self.client
                .patch(self.matches_url())
                .query(&[("id", format!("eq.{}", match_id))])
                .json(&json!({ "odds": odds })),
        )
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            service: SERVICE,
            source,
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(SERVICE, status, &text));
        }

        Ok(response)
    }
}

#[async_trait]
impl MatchStore for StorageClient {
    async fn fetch_matches(&self, query: &MatchQuery) -> Result<Vec<StoredMatch>, ApiError> {
        debug!("Reading matches: {:?}", query.to_params());

        let response = self.send(self.read_request(query)).await?;

        response.json().await.map_err(|source| ApiError::Decode {
            service: SERVICE,
            source,
        })
    }

    async fn upsert_match(&self, record: &MatchRecord) -> Result<(), ApiError> {
        self.send(self.upsert_request(record)).await?;
        Ok(())
    }

    async fn update_odds(&self, match_id: i64, odds: &StoredOdds) -> Result<(), ApiError> {
        self.send(self.update_odds_request(match_id, odds)).await?;
        Ok(())
    }
}
