//! League configuration
//!
//! `Configuration` is the resolved set of league settings handed to the
//! simulation. Settings that may change between seasons are `Timeline`s;
//! everything else is a plain value.
//!
//! Field names serialize in the camelCase used by league files, so a
//! configuration written out by one merge can be fed back in as a snapshot.

pub mod defaults;
pub mod settings;

pub use defaults::{
    default_confs, default_divs, default_injuries, default_tiebreakers, default_tragic_deaths,
    DEFAULT_CONFIG, DEFAULT_GOAT_FORMULA, DEFAULT_SERIES_LENGTH, DEFAULT_STARTING_SEASON,
    DIFFICULTY_EASY, DIFFICULTY_HARD, DIFFICULTY_INSANE, DIFFICULTY_NORMAL, GRACE_PERIOD_SEASONS,
};
pub use settings::SettingsView;

use crate::models::{
    Conf, Div, DraftType, InjuryEntry, Phase, RealDraftRatings, SalaryCapType, TeamInfoCache,
    Tiebreaker, TragicDeath,
};
use crate::timeline::Timeline;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys that are absent from the defaults and only appear when set
const OPTIONAL_KEYS: &[&str] = &[
    "nextPhase",
    "numDraftPicksCurrent",
    "numPlayoffRounds",
    "realDraftRatings",
    "injuries",
    "tragicDeaths",
    "goatFormula",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    // League state
    pub season: i32,
    pub starting_season: i32,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_phase: Option<Phase>,
    pub user_tid: Timeline<i32>,
    /// Teams controlled by a user in multi-team mode
    pub user_tids: Vec<i32>,
    pub num_teams: usize,
    pub num_active_teams: usize,
    pub team_info_cache: Vec<TeamInfoCache>,
    /// Last season in which the user cannot be fired
    pub grace_period_end: i32,
    pub difficulty: f64,
    /// Sticky: once set it is never cleared
    pub easy_difficulty_in_past: bool,
    pub god_mode: bool,
    pub god_mode_in_past: bool,
    pub spectator: bool,
    pub equalize_regions: bool,
    pub hide_disabled_teams: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_draft_picks_current: Option<u32>,
    /// Superseded by `num_games_playoff_series`; only read from old files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_playoff_rounds: Option<u32>,

    // Schedule
    pub confs: Timeline<Vec<Conf>>,
    pub divs: Timeline<Vec<Div>>,
    pub num_games: u32,
    /// `None` means a balanced schedule
    pub num_games_div: Option<u32>,
    pub num_games_conf: Option<u32>,
    /// Fraction of the regular season, 0 to disable
    pub trade_deadline: f64,
    pub all_star_game: Option<f64>,

    // Playoffs
    /// Best-of-N length of each round, outermost round first
    pub num_games_playoff_series: Timeline<Vec<u32>>,
    pub num_playoff_byes: Timeline<u32>,
    pub play_in: bool,
    pub playoffs_by_conf: bool,
    pub playoffs_num_teams_div: u32,
    pub playoffs_reseed: bool,
    pub tiebreakers: Timeline<Vec<Tiebreaker>>,
    pub ties: Timeline<bool>,
    pub otl: Timeline<bool>,
    pub points_formula: Timeline<String>,

    // Finances, in thousands of dollars
    pub salary_cap: f64,
    pub min_payroll: f64,
    pub luxury_payroll: f64,
    pub luxury_tax: f64,
    pub min_contract: f64,
    pub max_contract: f64,
    pub min_contract_length: u32,
    pub max_contract_length: u32,
    pub salary_cap_type: SalaryCapType,
    pub budget: bool,
    pub inflation_avg: f64,
    pub inflation_max: f64,
    pub inflation_min: f64,
    pub inflation_std: f64,

    // Draft
    /// Signed so a negative value from a league file can be reported
    pub num_draft_rounds: i32,
    pub draft_type: DraftType,
    pub draft_ages: [u32; 2],
    pub num_seasons_future_draft_picks: u32,
    pub rookie_contract_lengths: Vec<u32>,
    pub rookies_can_refuse: bool,
    pub draft_pick_auto_contract: bool,
    pub draft_pick_auto_contract_percent: f64,
    pub draft_pick_auto_contract_rounds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_draft_ratings: Option<RealDraftRatings>,

    // Rosters and players
    pub max_roster_size: u32,
    pub min_roster_size: u32,
    pub force_retire_age: u32,
    pub brother_rate: f64,
    pub son_rate: f64,
    pub player_mood_traits: bool,
    pub players_refuse_to_negotiate: bool,
    pub ai_trades_factor: f64,
    pub ai_jersey_retirement: bool,
    pub hof_factor: f64,
    pub real_player_determinism: f64,

    // Injuries and deaths
    pub injury_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injuries: Option<Vec<InjuryEntry>>,
    pub tragic_death_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tragic_deaths: Option<Vec<TragicDeath>>,
    pub stop_on_injury: bool,
    pub stop_on_injury_games: u32,

    // Game simulation
    pub quarter_length: f64,
    pub num_periods: u32,
    pub num_players_on_court: u32,
    pub home_court_advantage: f64,
    pub three_pointers: bool,
    pub pace: f64,
    pub elam: bool,
    #[serde(rename = "elamASG")]
    pub elam_asg: bool,
    pub elam_minutes: f64,
    pub elam_overtime: bool,
    pub elam_points: u32,

    // Challenge modes
    pub challenge_no_draft_picks: bool,
    pub challenge_no_free_agents: bool,
    pub challenge_no_trades: bool,
    pub challenge_no_ratings: bool,
    pub challenge_lose_best_player: bool,
    pub challenge_fired_luxury_tax: bool,
    pub challenge_fired_miss_playoffs: bool,
    pub challenge_thanos_mode: bool,

    // Misc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goat_formula: Option<String>,
    pub auto_delete_old_box_scores: bool,
}

impl Configuration {
    /// Serialize into a key/value map, the shape league files use
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "configuration serialized to {} instead of an object",
                other
            ))),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(map))
    }

    /// Names of every recognized key
    pub fn recognized_keys() -> Vec<String> {
        let mut keys: Vec<String> = DEFAULT_CONFIG
            .to_map()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        keys.extend(OPTIONAL_KEYS.iter().map(|key| key.to_string()));
        keys
    }

    /// Number of playoff rounds currently configured
    pub fn num_playoff_rounds_current(&self) -> usize {
        self.num_games_playoff_series.latest().len()
    }

    /// Conference count used for by-conference bracket checks, `None` when
    /// playoffs are not split by conference
    pub fn playoff_conf_split(&self) -> Option<usize> {
        self.playoffs_by_conf.then(|| self.confs.latest().len())
    }

    /// Season that a change made right now would apply to
    pub fn next_configurable_season(&self) -> i32 {
        crate::timeline::next_configurable_season(self.season, self.phase)
    }

    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Configuration)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::SeasonStart;

    #[test]
    fn test_map_round_trip() {
        let config = Configuration::default();
        let map = config.to_map().unwrap();
        assert!(map.contains_key("numGamesPlayoffSeries"));
        assert!(map.contains_key("elamASG"));
        assert!(!map.contains_key("numPlayoffRounds"));

        let back = Configuration::from_map(map).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_map_uses_defaults() {
        let mut map = Map::new();
        map.insert("numGames".to_string(), Value::from(60));
        let config = Configuration::from_map(map).unwrap();
        assert_eq!(config.num_games, 60);
        assert_eq!(config.num_draft_rounds, DEFAULT_CONFIG.num_draft_rounds);
    }

    #[test]
    fn test_timelines_serialize_with_null_sentinel() {
        let config = Configuration::default();
        let value = serde_json::to_value(&config).unwrap();
        assert!(value["userTid"][0]["start"].is_null());
        assert_eq!(config.user_tid.entries()[0].start, SeasonStart::NegativeInfinity);
    }

    #[test]
    fn test_recognized_keys_include_optional_fields() {
        let keys = Configuration::recognized_keys();
        assert!(keys.iter().any(|k| k == "season"));
        assert!(keys.iter().any(|k| k == "numPlayoffRounds"));
        assert!(keys.iter().any(|k| k == "goatFormula"));
    }

    #[test]
    fn test_playoff_conf_split() {
        let mut config = Configuration::default();
        assert_eq!(config.playoff_conf_split(), Some(2));
        config.playoffs_by_conf = false;
        assert_eq!(config.playoff_conf_split(), None);
    }

    #[test]
    fn test_default_config_matches_schema() {
        let schema = serde_json::to_value(Configuration::json_schema()).unwrap();
        let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();
        let instance = serde_json::to_value(Configuration::default()).unwrap();
        assert!(compiled.is_valid(&instance));
    }
}
