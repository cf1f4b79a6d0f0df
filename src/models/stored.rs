use serde::Deserialize;

/// Projection of a `matches` row read back for inspection or migration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredMatch {
    pub id: i64,
    /// Nullable columns; one bad row must not sink the whole read
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    /// Stored odds in whatever shape they were written
    #[serde(default)]
    pub odds: serde_json::Value,
    pub commence_time: Option<String>,
}

impl StoredMatch {
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.home_team.as_deref().unwrap_or("?"),
            self.away_team.as_deref().unwrap_or("?")
        )
    }
}
