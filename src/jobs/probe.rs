use anyhow::Context;
use tracing::{debug, info, warn};

use crate::api::FixtureSource;
use crate::models::MatchWinnerOdds;
use crate::odds::{extract_match_winner_odds, MATCH_WINNER};

/// Fetch one fixture's odds, log the bookmaker and bet layout, and extract.
///
/// A malformed price is an error; no Match Winner market is `Ok(None)`.
pub async fn probe_fixture_odds<F: FixtureSource>(
    source: &F,
    fixture_id: i64,
) -> anyhow::Result<Option<MatchWinnerOdds>> {
    info!("Testing odds fetch for fixture {}", fixture_id);

    let payload = source
        .fetch_odds(fixture_id)
        .await
        .with_context(|| format!("Failed to fetch odds for fixture {}", fixture_id))?;

    info!("Response items: {}", payload.response.len());

    for item in &payload.response {
        info!("Found {} bookmakers", item.bookmakers.len());

        for bookmaker in &item.bookmakers {
            info!(
                "Bookmaker: {} (ID: {:?}), {} bets",
                bookmaker.name.as_deref().unwrap_or("Unknown"),
                bookmaker.id,
                bookmaker.bets.len()
            );

            for bet in bookmaker.bets.iter().filter(|b| b.name.as_deref() == Some(MATCH_WINNER)) {
                info!("  Match Winner bet with {} values", bet.values.len());
                for value in &bet.values {
                    debug!(
                        "    {}: {}",
                        value
                            .value
                            .as_ref()
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "Unknown".to_string()),
                        value.odd.as_ref().map(|o| o.raw()).unwrap_or_else(|| "N/A".to_string())
                    );
                }
            }
        }
    }

    let found = extract_match_winner_odds(&payload)
        .with_context(|| format!("Unusable Match Winner prices for fixture {}", fixture_id))?;

    match &found {
        Some(odds) => info!(
            "EXTRACTED ODDS from {}: H{} U{} B{}",
            odds.bookmaker, odds.odds.home, odds.odds.draw, odds.odds.away
        ),
        None => warn!("No Match Winner odds found for fixture {}", fixture_id),
    }

    Ok(found)
}
