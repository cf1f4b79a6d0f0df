use tracing::debug;

use crate::error::ExtractError;
use crate::models::odds::{Bet, BetValue, CanonicalOdds, MatchWinnerOdds, OddsResponse};

/// Market name of the 1-X-2 bet, matched exactly
pub const MATCH_WINNER: &str = "Match Winner";

/// Find the first usable "Match Winner" bet and reduce it to three-way odds.
///
/// Walks response items, bookmakers and bets in payload order and stops at the
/// first bet named exactly [`MATCH_WINNER`] with at least three values. The
/// first three values are taken positionally as home, draw and away; their
/// labels are not consulted. Bets with fewer than three values are passed over.
///
/// Returns `Ok(None)` when no such bet exists. A price that does not parse is
/// an error for this payload only.
pub fn extract_match_winner_odds(
    payload: &OddsResponse,
) -> Result<Option<MatchWinnerOdds>, ExtractError> {
    for item in &payload.response {
        for bookmaker in &item.bookmakers {
            let bookmaker_name = bookmaker.name.as_deref().unwrap_or("Unknown");

            for bet in &bookmaker.bets {
                if !is_match_winner(bet) {
                    continue;
                }

                if bet.values.len() < 3 {
                    debug!(
                        "{} lists only {} Match Winner values, skipping",
                        bookmaker_name,
                        bet.values.len()
                    );
                    continue;
                }

                let odds = CanonicalOdds {
                    home: parse_price(bookmaker_name, &bet.values, 0)?,
                    draw: parse_price(bookmaker_name, &bet.values, 1)?,
                    away: parse_price(bookmaker_name, &bet.values, 2)?,
                };

                return Ok(Some(MatchWinnerOdds {
                    bookmaker: bookmaker_name.to_string(),
                    odds,
                }));
            }
        }
    }

    Ok(None)
}

fn is_match_winner(bet: &Bet) -> bool {
    bet.name.as_deref() == Some(MATCH_WINNER)
}

fn parse_price(bookmaker: &str, values: &[BetValue], position: usize) -> Result<f64, ExtractError> {
    let price = values
        .get(position)
        .and_then(|v| v.odd.as_ref())
        .ok_or_else(|| ExtractError::MissingPrice {
            bookmaker: bookmaker.to_string(),
            position,
        })?;

    price.as_f64().ok_or_else(|| ExtractError::InvalidPrice {
        bookmaker: bookmaker.to_string(),
        position,
        raw: price.raw(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: serde_json::Value) -> OddsResponse {
        serde_json::from_value(value).unwrap()
    }

    fn three_way(home: &str, draw: &str, away: &str) -> serde_json::Value {
        json!([
            {"value": "Home", "odd": home},
            {"value": "Draw", "odd": draw},
            {"value": "Away", "odd": away}
        ])
    }

    #[test]
    fn extracts_single_bookmaker_match_winner() {
        let payload = payload(json!({"response": [{"bookmakers": [{
            "name": "X",
            "bets": [{"name": "Match Winner", "values": [
                {"odd": "1.50"}, {"odd": "3.20"}, {"odd": "6.00"}
            ]}]
        }]}]}));

        let found = extract_match_winner_odds(&payload).unwrap().unwrap();
        assert_eq!(found.bookmaker, "X");
        assert_eq!(
            found.odds,
            CanonicalOdds {
                home: 1.50,
                draw: 3.20,
                away: 6.00
            }
        );
    }

    #[test]
    fn empty_payloads_are_absent() {
        assert_eq!(extract_match_winner_odds(&payload(json!({}))).unwrap(), None);
        assert_eq!(
            extract_match_winner_odds(&payload(json!({"response": []}))).unwrap(),
            None
        );
        assert_eq!(
            extract_match_winner_odds(&payload(json!({"response": [{"bookmakers": []}]}))).unwrap(),
            None
        );
    }

    #[test]
    fn other_markets_are_ignored() {
        let payload = payload(json!({"response": [{"bookmakers": [{
            "name": "Bet365",
            "bets": [
                {"name": "Goals Over/Under", "values": three_way("1.9", "1.9", "2.0")},
                {"name": "match winner", "values": three_way("2.0", "3.0", "4.0")},
                {"name": "Match Winner ", "values": three_way("2.0", "3.0", "4.0")}
            ]
        }]}]}));

        assert_eq!(extract_match_winner_odds(&payload).unwrap(), None);
    }

    #[test]
    fn values_are_mapped_by_position_not_label() {
        let payload = payload(json!({"response": [{"bookmakers": [{
            "name": "Unibet",
            "bets": [{"name": "Match Winner", "values": [
                {"value": "Away", "odd": "5.00"},
                {"value": "Home", "odd": "1.60"},
                {"value": "Draw", "odd": "3.90"},
                {"value": "Extra", "odd": "99"}
            ]}]
        }]}]}));

        let found = extract_match_winner_odds(&payload).unwrap().unwrap();
        assert_eq!(found.odds.home, 5.00);
        assert_eq!(found.odds.draw, 1.60);
        assert_eq!(found.odds.away, 3.90);
    }

    #[test]
    fn first_bookmaker_wins_over_better_prices() {
        let payload = payload(json!({"response": [{"bookmakers": [
            {"name": "First", "bets": [{"name": "Match Winner", "values": three_way("1.40", "4.00", "7.00")}]},
            {"name": "Second", "bets": [{"name": "Match Winner", "values": three_way("1.55", "4.50", "8.00")}]}
        ]}]}));

        let found = extract_match_winner_odds(&payload).unwrap().unwrap();
        assert_eq!(found.bookmaker, "First");
        assert_eq!(found.odds.home, 1.40);
    }

    #[test]
    fn short_match_winner_bet_is_passed_over() {
        let payload = payload(json!({"response": [
            {"bookmakers": [
                {"name": "Short", "bets": [{"name": "Match Winner", "values": [{"odd": "1.1"}, {"odd": "8.0"}]}]}
            ]},
            {"bookmakers": [
                {"name": "Full", "bets": [{"name": "Match Winner", "values": three_way("2.10", "3.30", "3.50")}]}
            ]}
        ]}));

        let found = extract_match_winner_odds(&payload).unwrap().unwrap();
        assert_eq!(found.bookmaker, "Full");
        assert_eq!(found.odds.away, 3.50);
    }

    #[test]
    fn only_short_bets_is_absent() {
        let payload = payload(json!({"response": [{"bookmakers": [
            {"name": "Short", "bets": [{"name": "Match Winner", "values": [{"odd": "1.1"}]}]}
        ]}]}));

        assert_eq!(extract_match_winner_odds(&payload).unwrap(), None);
    }

    #[test]
    fn unparseable_price_is_an_error() {
        let payload = payload(json!({"response": [{"bookmakers": [
            {"name": "Broken", "bets": [{"name": "Match Winner", "values": three_way("1.80", "n/a", "4.00")}]}
        ]}]}));

        let err = extract_match_winner_odds(&payload).unwrap_err();
        assert_eq!(
            err,
            ExtractError::InvalidPrice {
                bookmaker: "Broken".to_string(),
                position: 1,
                raw: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn missing_price_is_an_error() {
        let payload = payload(json!({"response": [{"bookmakers": [
            {"bets": [{"name": "Match Winner", "values": [{"odd": "1.8"}, {"odd": "3.1"}, {"value": "Away"}]}]}
        ]}]}));

        let err = extract_match_winner_odds(&payload).unwrap_err();
        assert_eq!(
            err,
            ExtractError::MissingPrice {
                bookmaker: "Unknown".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn numeric_prices_are_accepted() {
        let payload = payload(json!({"response": [{"bookmakers": [
            {"name": "Numeric", "bets": [{"name": "Match Winner", "values": [
                {"odd": 2.5}, {"odd": 3}, {"odd": "2.75"}
            ]}]}
        ]}]}));

        let found = extract_match_winner_odds(&payload).unwrap().unwrap();
        assert_eq!(found.odds.draw, 3.0);
    }
}
