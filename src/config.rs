use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::error::ConfigError;

const DEFAULT_API_FOOTBALL_URL: &str = "https://v3.football.api-sports.io";

/// Premier League, Champions League, Europa League, Serie A, EFL Cup
const DEFAULT_LEAGUES: &str = "39,2,3,135,48";

/// Settings a command can insist on before it touches the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    StorageUrl,
    StorageAnonKey,
    StorageServiceKey,
    ApiFootballKey,
}

impl Setting {
    pub fn env_var(&self) -> &'static str {
        match self {
            Setting::StorageUrl => "SUPABASE_URL",
            Setting::StorageAnonKey => "SUPABASE_ANON_KEY",
            Setting::StorageServiceKey => "SUPABASE_SERVICE_KEY",
            Setting::ApiFootballKey => "API_FOOTBALL_KEY",
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage (PostgREST) project URL
    pub storage_url: Option<String>,

    /// Restricted credential used for reads
    pub storage_anon_key: Option<String>,

    /// Elevated credential used for writes
    pub storage_service_key: Option<String>,

    /// API-Football credential
    pub api_football_key: Option<String>,

    /// API-Football base URL
    pub api_football_url: String,

    /// Upper bound on any single request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Config {
            storage_url: non_empty("SUPABASE_URL").map(|u| u.trim_end_matches('/').to_string()),

            storage_anon_key: non_empty("SUPABASE_ANON_KEY"),

            storage_service_key: non_empty("SUPABASE_SERVICE_KEY"),

            api_football_key: non_empty("API_FOOTBALL_KEY"),

            api_football_url: non_empty("API_FOOTBALL_URL")
                .unwrap_or_else(|| DEFAULT_API_FOOTBALL_URL.to_string())
                .trim_end_matches('/')
                .to_string(),

            request_timeout: Duration::from_secs(
                non_empty("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
            ),
        })
    }

    /// Fail unless every listed setting is present, naming all missing ones
    pub fn require(&self, settings: &[Setting]) -> Result<(), ConfigError> {
        let missing: Vec<&'static str> = settings
            .iter()
            .filter(|s| self.value(**s).is_none())
            .map(|s| s.env_var())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// Value of a required setting
    pub fn get(&self, setting: Setting) -> Result<&str, ConfigError> {
        self.value(setting)
            .ok_or_else(|| ConfigError::Missing(vec![setting.env_var()]))
    }

    fn value(&self, setting: Setting) -> Option<&str> {
        match setting {
            Setting::StorageUrl => self.storage_url.as_deref(),
            Setting::StorageAnonKey => self.storage_anon_key.as_deref(),
            Setting::StorageServiceKey => self.storage_service_key.as_deref(),
            Setting::ApiFootballKey => self.api_football_key.as_deref(),
        }
    }
}

/// Import window settings, read only by populate_matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    /// League ids to import
    pub leagues: Vec<u32>,

    /// Season passed to the fixtures endpoint
    pub season: i32,

    /// Length of the fixture window starting today
    pub days_ahead: i64,
}

impl ImportConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(ImportConfig {
            leagues: parse_leagues(
                &non_empty("LEAGUES").unwrap_or_else(|| DEFAULT_LEAGUES.to_string()),
            )?,

            season: non_empty("SEASON")
                .unwrap_or_else(|| "2025".to_string())
                .parse()
                .context("SEASON must be a valid year")?,

            days_ahead: non_empty("DAYS_AHEAD")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .context("DAYS_AHEAD must be a valid number")?,
        })
    }
}

fn parse_leagues(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("LEAGUES entry {:?} is not a league id", s))
        })
        .collect()
}
