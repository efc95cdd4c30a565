//! Key-by-key overlay of imported game attributes
//!
//! Each attribute is decoded on its own before it is merged, so one bad
//! value costs only that setting. A leading `null` timeline start is read
//! back as the negative-infinity sentinel by the timeline decoder.

use crate::config::Configuration;
use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// What happened to each imported attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayReport {
    pub accepted: Vec<String>,
    /// Recognized keys whose value could not be decoded; defaults kept
    pub rejected: Vec<String>,
    /// Unknown keys, and `null` for settings that take no null
    pub ignored: Vec<String>,
}

impl OverlayReport {
    pub fn is_accepted(&self, key: &str) -> bool {
        self.accepted.iter().any(|k| k == key)
    }
}

/// Lay `attrs` over `base`, skipping the keys in `skip`
pub fn apply_overlay(
    base: &Configuration,
    attrs: &Map<String, Value>,
    skip: &[&str],
) -> Result<(Configuration, OverlayReport)> {
    let recognized: HashSet<String> = Configuration::recognized_keys().into_iter().collect();
    let mut merged = base.to_map()?;
    let mut report = OverlayReport::default();

    for (key, value) in attrs {
        if skip.contains(&key.as_str()) {
            continue;
        }
        if !recognized.contains(key) {
            log::debug!("Ignoring unrecognized game attribute '{}'", key);
            report.ignored.push(key.clone());
            continue;
        }

        let mut single = Map::new();
        single.insert(key.clone(), value.clone());
        match Configuration::from_map(single) {
            Ok(_) => {
                merged.insert(key.clone(), value.clone());
                report.accepted.push(key.clone());
            }
            Err(_) if value.is_null() => {
                log::debug!("Game attribute '{}' is null, keeping default", key);
                report.ignored.push(key.clone());
            }
            Err(err) => {
                log::warn!("Rejected game attribute '{}', keeping default: {}", key, err);
                report.rejected.push(key.clone());
            }
        }
    }

    Ok((Configuration::from_map(merged)?, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_overlay_accepts_valid_keys() {
        let (config, report) =
            apply_overlay(&Configuration::default(), &attrs(json!({"numGames": 60, "godMode": true})), &[])
                .unwrap();
        assert_eq!(config.num_games, 60);
        assert!(config.god_mode);
        assert_eq!(report.accepted.len(), 2);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_overlay_rejects_bad_values_individually() {
        let input = attrs(json!({
            "numGames": "many",
            "salaryCapType": "sometimes",
            "tiebreakers": [{"start": 2020, "value": ["coinFlip"]}],
            "pace": 95.5
        }));
        let (config, report) = apply_overlay(&Configuration::default(), &input, &[]).unwrap();
        assert_eq!(config.num_games, 82);
        assert_eq!(config.pace, 95.5);
        assert_eq!(report.rejected.len(), 3);
        assert!(report.rejected.iter().any(|k| k == "tiebreakers"));
    }

    #[test]
    fn test_overlay_skips_and_ignores() {
        let input = attrs(json!({"userTid": 5, "someFutureSetting": 1}));
        let (config, report) = apply_overlay(&Configuration::default(), &input, &["userTid"]).unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(report.ignored, vec!["someFutureSetting".to_string()]);
        assert!(!report.is_accepted("userTid"));
    }

    #[test]
    fn test_overlay_null_means_unset() {
        let input = attrs(json!({"numGames": null, "tiebreakers": null, "numGamesDiv": null}));
        let (config, report) = apply_overlay(&Configuration::default(), &input, &[]).unwrap();
        assert_eq!(config.num_games, 82);
        assert_eq!(config.tiebreakers, Configuration::default().tiebreakers);
        // Optional settings take null as a real value
        assert_eq!(config.num_games_div, None);
        assert!(report.rejected.is_empty());
        assert!(report.is_accepted("numGamesDiv"));
        assert_eq!(report.ignored.len(), 2);
    }

    #[test]
    fn test_overlay_reads_null_sentinel() {
        let input = attrs(json!({"numPlayoffByes": [{"start": null, "value": 2}, {"start": 2030, "value": 4}]}));
        let (config, _) = apply_overlay(&Configuration::default(), &input, &[]).unwrap();
        assert_eq!(config.num_playoff_byes.len(), 2);
        assert_eq!(*config.num_playoff_byes.resolve(2029), 2);
        assert_eq!(*config.num_playoff_byes.resolve(2030), 4);
    }
}
