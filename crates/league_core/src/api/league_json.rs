// League configuration JSON API
// String in, string out, for hosts that only speak JSON

use crate::config::{Configuration, SettingsView};
use crate::error::MergeError;
use crate::merge::{ConfigMerger, Notice};
use crate::models::{LeagueSnapshot, ScheduledEvent, TeamInfo};
use serde::{Deserialize, Serialize};

pub const API_SCHEMA_VERSION: u8 = 1;

mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNSUPPORTED_SCHEMA: &str = "UNSUPPORTED_SCHEMA";
    pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
    pub const SERIALIZATION: &str = "SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn merge_error(err: MergeError) -> String {
    match err {
        MergeError::InvalidConfiguration(message) => {
            err_code(error_codes::INVALID_CONFIGURATION, message)
        }
        MergeError::Serialization(e) => err_code(error_codes::SERIALIZATION, e),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueRequest {
    #[serde(default)]
    pub schema_version: Option<u8>,
    /// Imported league file; empty for a fresh league
    #[serde(default)]
    pub snapshot: LeagueSnapshot,
    pub teams: Vec<TeamInfo>,
    #[serde(default)]
    pub user_tid: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeagueResponse {
    pub schema_version: u8,
    pub config: Configuration,
    pub notices: Vec<Notice>,
    /// Team list after the merge, populations possibly equalized
    pub teams: Vec<TeamInfo>,
    pub scheduled_events: Vec<ScheduledEvent>,
    pub rejected_keys: Vec<String>,
    pub applied_migrations: Vec<&'static str>,
}

/// Merge a league file into a new league configuration
pub fn create_league_config_json(request_json: &str) -> Result<String, String> {
    let request: CreateLeagueRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Invalid JSON request: {}", e)))?;

    if let Some(version) = request.schema_version {
        if version != API_SCHEMA_VERSION {
            return Err(err_code(
                error_codes::UNSUPPORTED_SCHEMA,
                format!("Unsupported schema version: {}", version),
            ));
        }
    }

    let CreateLeagueRequest { mut snapshot, mut teams, user_tid, .. } = request;

    let outcome = ConfigMerger::new().merge(&mut snapshot, &mut teams, user_tid).map_err(merge_error)?;

    let response = CreateLeagueResponse {
        schema_version: API_SCHEMA_VERSION,
        config: outcome.config,
        notices: outcome.notices,
        teams,
        scheduled_events: snapshot.scheduled_events.unwrap_or_default(),
        rejected_keys: outcome.rejected_keys,
        applied_migrations: outcome.applied_migrations,
    };

    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

/// Settings form values for a stored configuration
pub fn settings_json(config_json: &str) -> Result<String, String> {
    let config: Configuration = serde_json::from_str(config_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Invalid configuration: {}", e)))?;

    serde_json::to_string(&SettingsView::from_config(&config))
        .map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

pub fn default_config_json() -> Result<String, String> {
    serde_json::to_string(&*crate::config::DEFAULT_CONFIG)
        .map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn teams_json(n: usize) -> Value {
        let teams: Vec<Value> = (0..n)
            .map(|i| {
                json!({
                    "abbrev": format!("T{}", i),
                    "region": "Region",
                    "name": "Team",
                    "pop": (i + 1) as f64,
                    "did": i % 6
                })
            })
            .collect();
        Value::Array(teams)
    }

    #[test]
    fn test_create_league_fresh() {
        let request = json!({"schemaVersion": 1, "teams": teams_json(30), "userTid": 3});
        let response = create_league_config_json(&request.to_string()).unwrap();
        let value: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(value["schemaVersion"], 1);
        assert_eq!(value["config"]["numTeams"], 30);
        assert_eq!(value["config"]["userTid"][0]["value"], 3);
        assert!(value["config"]["userTid"][0]["start"].is_null());
        assert_eq!(value["teams"].as_array().unwrap().len(), 30);
        assert!(value["notices"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_create_league_equalizes_returned_teams() {
        let request = json!({
            "teams": teams_json(4),
            "snapshot": {
                "version": 51,
                "gameAttributes": {"equalizeRegions": true},
                "scheduledEvents": [
                    {"type": "teamInfo", "season": 2026, "phase": 0, "info": {"tid": 1, "pop": 9.0}}
                ]
            }
        });
        let response = create_league_config_json(&request.to_string()).unwrap();
        let value: Value = serde_json::from_str(&response).unwrap();

        for team in value["teams"].as_array().unwrap() {
            assert_eq!(team["pop"], 2.5);
        }
        assert_eq!(value["scheduledEvents"][0]["info"]["pop"], 2.5);
    }

    #[test]
    fn test_create_league_errors() {
        let bad_json = create_league_config_json("{not json").unwrap_err();
        assert!(bad_json.starts_with("INVALID_REQUEST"));

        let schema = json!({"schemaVersion": 9, "teams": []});
        assert!(create_league_config_json(&schema.to_string()).unwrap_err().starts_with("UNSUPPORTED_SCHEMA"));

        let negative = json!({
            "teams": teams_json(30),
            "snapshot": {"gameAttributes": {"numDraftRounds": -2}}
        });
        let err = create_league_config_json(&negative.to_string()).unwrap_err();
        assert!(err.starts_with("INVALID_CONFIGURATION"));
        assert!(err.contains("numDraftRounds"));
    }

    #[test]
    fn test_settings_json_fills_tables() {
        let defaults = default_config_json().unwrap();
        let settings: Value = serde_json::from_str(&settings_json(&defaults).unwrap()).unwrap();
        assert_eq!(settings["realDraftRatings"], "rookie");
        assert!(!settings["injuries"].as_array().unwrap().is_empty());
        assert_eq!(settings["numActiveTeams"], 30);
    }

    #[test]
    fn test_settings_json_rejects_garbage() {
        assert!(settings_json("\"league\"").unwrap_err().starts_with("INVALID_REQUEST"));
    }
}
