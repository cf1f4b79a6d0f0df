use serde_json::Value;

use crate::models::odds::StoredOdds;

const CANONICAL_HOME_KEY: &str = "H";
const LEGACY_HOME_KEY: &str = "home";

/// How a stored odds record relates to the canonical H/U/B shape
#[derive(Debug, Clone, PartialEq)]
pub enum Normalization {
    /// Already `{H, U, B}`; nothing to write
    CanonicalAlready,
    /// Legacy `{home, draw, away}` moved onto the canonical keys
    Migrated(StoredOdds),
    /// Neither shape; needs a human to look at the keys
    Unrecognized { keys: Vec<String> },
}

/// Classify a stored odds record and convert legacy records.
///
/// The canonical home key is checked first, then the legacy one. Values are
/// carried over as stored.
pub fn normalize(record: &Value) -> Normalization {
    let Some(map) = record.as_object() else {
        return Normalization::Unrecognized { keys: Vec::new() };
    };

    if map.contains_key(CANONICAL_HOME_KEY) {
        return Normalization::CanonicalAlready;
    }

    if map.contains_key(LEGACY_HOME_KEY) {
        // Values move as stored; a missing companion key becomes null
        let value = |key: &str| map.get(key).cloned().unwrap_or(Value::Null);
        return Normalization::Migrated(StoredOdds {
            home: value("home"),
            draw: value("draw"),
            away: value("away"),
        });
    }

    Normalization::Unrecognized {
        keys: map.keys().cloned().collect(),
    }
}
