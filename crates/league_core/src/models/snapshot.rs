//! Imported league file contents consumed by the merge engine.
//!
//! Every field is optional. `gameAttributes` stays a raw JSON map because its
//! vintage is unknown: each key is decoded individually during the merge.

use super::phase::Phase;
use super::team::TeamInfo;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    /// League file format version. Absent means "as old as it gets".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_season: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_attributes: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_events: Option<Vec<ScheduledEvent>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_picks: Option<Vec<DraftPick>>,
}

impl LeagueSnapshot {
    pub fn with_game_attributes(game_attributes: Map<String, Value>) -> Self {
        Self { game_attributes: Some(game_attributes), ..Self::default() }
    }

    /// Raw value of one game attribute, if the file carries it
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.game_attributes.as_ref().and_then(|attrs| attrs.get(key))
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attribute(key).is_some()
    }

    /// False for a fresh league that only names its starting season
    pub fn is_imported(&self) -> bool {
        self.version.is_some()
            || self.game_attributes.is_some()
            || self.scheduled_events.is_some()
            || self.draft_picks.is_some()
    }

    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(LeagueSnapshot)
    }
}

/// A league change queued for a future season and phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub season: i32,
    pub phase: Phase,
    #[serde(flatten)]
    pub kind: ScheduledEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "info", rename_all = "camelCase")]
pub enum ScheduledEventKind {
    ExpansionDraft(ExpansionDraftInfo),
    TeamInfo(TeamInfoChange),
    Contraction(ContractionInfo),
    GameAttributes(Map<String, Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionDraftInfo {
    pub teams: Vec<TeamInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_protected_players: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfoChange {
    pub tid: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbrev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContractionInfo {
    pub tid: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    pub season: i32,
    pub round: u32,
    pub pick: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_tid: Option<u32>,
}

impl DraftPick {
    pub fn new(season: i32, round: u32, pick: u32) -> Self {
        Self { season, round, pick, tid: None, original_tid: None }
    }
}
