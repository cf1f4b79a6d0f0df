use serde::{Deserialize, Serialize};

/// Raw `/odds` response from API-Football
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OddsResponse {
    #[serde(default)]
    pub response: Vec<OddsResponseItem>,
}

/// One fixture's odds as returned by the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OddsResponseItem {
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bookmaker {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default)]
    pub bets: Vec<Bet>,
}

/// A named market offered by a bookmaker
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bet {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default)]
    pub values: Vec<BetValue>,
}

/// Outcome label and price pair
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BetValue {
    pub value: Option<serde_json::Value>,
    pub odd: Option<Price>,
}

/// Prices come back as strings ("1.50"), occasionally as bare numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    pub fn as_f64(&self) -> Option<f64> {
        let parsed = match self {
            Price::Number(n) => Some(*n),
            Price::Text(s) => s.trim().parse::<f64>().ok(),
        };
        parsed.filter(|n| n.is_finite())
    }

    pub fn raw(&self) -> String {
        match self {
            Price::Number(n) => n.to_string(),
            Price::Text(s) => s.clone(),
        }
    }
}

/// Three-way odds in the stored shape: H = home win, U = draw, B = away win
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOdds<T = f64> {
    #[serde(rename = "H")]
    pub home: T,
    #[serde(rename = "U")]
    pub draw: T,
    #[serde(rename = "B")]
    pub away: T,
}

/// Canonical keys over values copied as stored, for rewriting legacy records
pub type StoredOdds = CanonicalOdds<serde_json::Value>;

/// Extracted odds together with the bookmaker they came from
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWinnerOdds {
    pub bookmaker: String,
    pub odds: CanonicalOdds,
}
