use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Team metadata supplied by the caller when a league is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub abbrev: String,
    pub region: String,
    pub name: String,

    #[serde(rename = "imgURL", default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    #[serde(rename = "imgURLSmall", default, skip_serializing_if = "Option::is_none")]
    pub img_url_small: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    /// Market size in millions
    pub pop: f64,

    /// Division id
    #[serde(default)]
    pub did: u32,
}

impl TeamInfo {
    pub fn new(abbrev: &str, region: &str, name: &str, pop: f64, did: u32) -> Self {
        Self {
            abbrev: abbrev.to_string(),
            region: region.to_string(),
            name: name.to_string(),
            img_url: None,
            img_url_small: None,
            disabled: false,
            pop,
            did,
        }
    }
}

/// Display subset of `TeamInfo` kept inside the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfoCache {
    pub abbrev: String,
    pub region: String,
    pub name: String,

    #[serde(rename = "imgURL", default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    #[serde(rename = "imgURLSmall", default, skip_serializing_if = "Option::is_none")]
    pub img_url_small: Option<String>,

    #[serde(default)]
    pub disabled: bool,
}

impl From<&TeamInfo> for TeamInfoCache {
    fn from(team: &TeamInfo) -> Self {
        Self {
            abbrev: team.abbrev.clone(),
            region: team.region.clone(),
            name: team.name.clone(),
            img_url: team.img_url.clone(),
            img_url_small: team.img_url_small.clone(),
            disabled: team.disabled,
        }
    }
}

/// Count teams that take part in the season
pub fn count_active(teams: &[TeamInfo]) -> usize {
    teams.iter().filter(|t| !t.disabled).count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Conf {
    pub cid: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Div {
    pub did: u32,
    pub cid: u32,
    pub name: String,
}

impl Conf {
    pub fn new(cid: u32, name: &str) -> Self {
        Self { cid, name: name.to_string() }
    }
}

impl Div {
    pub fn new(did: u32, cid: u32, name: &str) -> Self {
        Self { did, cid, name: name.to_string() }
    }
}
