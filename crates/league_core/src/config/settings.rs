//! Read-only settings form projection
//!
//! Flattens a `Configuration` into the values a settings screen shows:
//! every timeline resolved for the current season and every optional table
//! replaced by its default.

use super::defaults::{default_injuries, default_tragic_deaths, DEFAULT_CONFIG, DEFAULT_GOAT_FORMULA};
use super::Configuration;
use crate::models::{
    Conf, DraftType, InjuryEntry, RealDraftRatings, SalaryCapType, Tiebreaker, TragicDeath,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How real players are placed when a real-players league is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Randomization {
    #[default]
    None,
    Shuffle,
    Debuts,
    DebutsForever,
}

/// Which historical stats a real-players league imports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RealStats {
    #[default]
    None,
    LastSeason,
    AllActive,
    #[serde(rename = "allActiveHOF")]
    AllActiveHof,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub god_mode: bool,
    pub god_mode_in_past: bool,
    pub difficulty: f64,
    pub spectator: bool,
    pub equalize_regions: bool,
    pub hide_disabled_teams: bool,
    /// Unknown while a new league is still being set up
    pub num_active_teams: Option<usize>,
    pub repeat_season: bool,
    pub no_starting_injuries: bool,
    pub randomization: Randomization,
    pub real_stats: RealStats,

    pub confs: Vec<Conf>,
    pub num_games: u32,
    pub num_games_div: Option<u32>,
    pub num_games_conf: Option<u32>,
    pub trade_deadline: f64,
    pub all_star_game: Option<f64>,

    pub num_games_playoff_series: Vec<u32>,
    pub num_playoff_byes: u32,
    pub play_in: bool,
    pub playoffs_by_conf: bool,
    pub playoffs_num_teams_div: u32,
    pub playoffs_reseed: bool,
    pub tiebreakers: Vec<Tiebreaker>,
    pub ties: bool,
    pub otl: bool,
    pub points_formula: String,

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

    pub num_draft_rounds: i32,
    pub draft_type: DraftType,
    pub draft_ages: [u32; 2],
    pub num_seasons_future_draft_picks: u32,
    pub rookie_contract_lengths: Vec<u32>,
    pub rookies_can_refuse: bool,
    pub draft_pick_auto_contract: bool,
    pub draft_pick_auto_contract_percent: f64,
    pub draft_pick_auto_contract_rounds: u32,
    pub real_draft_ratings: RealDraftRatings,

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

    pub injury_rate: f64,
    pub injuries: Vec<InjuryEntry>,
    pub tragic_death_rate: f64,
    pub tragic_deaths: Vec<TragicDeath>,
    pub stop_on_injury: bool,
    pub stop_on_injury_games: u32,

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

    pub challenge_no_draft_picks: bool,
    pub challenge_no_free_agents: bool,
    pub challenge_no_trades: bool,
    pub challenge_no_ratings: bool,
    pub challenge_lose_best_player: bool,
    pub challenge_fired_luxury_tax: bool,
    pub challenge_fired_miss_playoffs: bool,
    pub challenge_thanos_mode: bool,

    pub goat_formula: String,
    pub auto_delete_old_box_scores: bool,
}

impl SettingsView {
    /// Settings of an existing league, resolved for its current season
    pub fn from_config(config: &Configuration) -> Self {
        let season = config.season;
        Self {
            god_mode: config.god_mode,
            god_mode_in_past: config.god_mode_in_past,
            difficulty: config.difficulty,
            spectator: config.spectator,
            equalize_regions: config.equalize_regions,
            hide_disabled_teams: config.hide_disabled_teams,
            num_active_teams: Some(config.num_active_teams),
            repeat_season: false,
            no_starting_injuries: false,
            randomization: Randomization::None,
            real_stats: RealStats::None,

            confs: config.confs.resolve(season).clone(),
            num_games: config.num_games,
            num_games_div: config.num_games_div,
            num_games_conf: config.num_games_conf,
            trade_deadline: config.trade_deadline,
            all_star_game: config.all_star_game,

            num_games_playoff_series: config.num_games_playoff_series.resolve(season).clone(),
            num_playoff_byes: *config.num_playoff_byes.resolve(season),
            play_in: config.play_in,
            playoffs_by_conf: config.playoffs_by_conf,
            playoffs_num_teams_div: config.playoffs_num_teams_div,
            playoffs_reseed: config.playoffs_reseed,
            tiebreakers: config.tiebreakers.resolve(season).clone(),
            ties: *config.ties.resolve(season),
            otl: *config.otl.resolve(season),
            points_formula: config.points_formula.resolve(season).clone(),

            salary_cap: config.salary_cap,
            min_payroll: config.min_payroll,
            luxury_payroll: config.luxury_payroll,
            luxury_tax: config.luxury_tax,
            min_contract: config.min_contract,
            max_contract: config.max_contract,
            min_contract_length: config.min_contract_length,
            max_contract_length: config.max_contract_length,
            salary_cap_type: config.salary_cap_type,
            budget: config.budget,
            inflation_avg: config.inflation_avg,
            inflation_max: config.inflation_max,
            inflation_min: config.inflation_min,
            inflation_std: config.inflation_std,

            num_draft_rounds: config.num_draft_rounds,
            draft_type: config.draft_type,
            draft_ages: config.draft_ages,
            num_seasons_future_draft_picks: config.num_seasons_future_draft_picks,
            rookie_contract_lengths: config.rookie_contract_lengths.clone(),
            rookies_can_refuse: config.rookies_can_refuse,
            draft_pick_auto_contract: config.draft_pick_auto_contract,
            draft_pick_auto_contract_percent: config.draft_pick_auto_contract_percent,
            draft_pick_auto_contract_rounds: config.draft_pick_auto_contract_rounds,
            real_draft_ratings: config.real_draft_ratings.unwrap_or(RealDraftRatings::Rookie),

            max_roster_size: config.max_roster_size,
            min_roster_size: config.min_roster_size,
            force_retire_age: config.force_retire_age,
            brother_rate: config.brother_rate,
            son_rate: config.son_rate,
            player_mood_traits: config.player_mood_traits,
            players_refuse_to_negotiate: config.players_refuse_to_negotiate,
            ai_trades_factor: config.ai_trades_factor,
            ai_jersey_retirement: config.ai_jersey_retirement,
            hof_factor: config.hof_factor,
            real_player_determinism: config.real_player_determinism,

            injury_rate: config.injury_rate,
            injuries: config.injuries.clone().unwrap_or_else(default_injuries),
            tragic_death_rate: config.tragic_death_rate,
            tragic_deaths: config.tragic_deaths.clone().unwrap_or_else(default_tragic_deaths),
            stop_on_injury: config.stop_on_injury,
            stop_on_injury_games: config.stop_on_injury_games,

            quarter_length: config.quarter_length,
            num_periods: config.num_periods,
            num_players_on_court: config.num_players_on_court,
            home_court_advantage: config.home_court_advantage,
            three_pointers: config.three_pointers,
            pace: config.pace,
            elam: config.elam,
            elam_asg: config.elam_asg,
            elam_minutes: config.elam_minutes,
            elam_overtime: config.elam_overtime,
            elam_points: config.elam_points,

            challenge_no_draft_picks: config.challenge_no_draft_picks,
            challenge_no_free_agents: config.challenge_no_free_agents,
            challenge_no_trades: config.challenge_no_trades,
            challenge_no_ratings: config.challenge_no_ratings,
            challenge_lose_best_player: config.challenge_lose_best_player,
            challenge_fired_luxury_tax: config.challenge_fired_luxury_tax,
            challenge_fired_miss_playoffs: config.challenge_fired_miss_playoffs,
            challenge_thanos_mode: config.challenge_thanos_mode,

            goat_formula: config
                .goat_formula
                .clone()
                .unwrap_or_else(|| DEFAULT_GOAT_FORMULA.to_string()),
            auto_delete_old_box_scores: config.auto_delete_old_box_scores,
        }
    }

    /// Settings shown before a league exists. Team count is not known yet.
    pub fn new_league() -> Self {
        Self { num_active_teams: None, ..Self::from_config(&DEFAULT_CONFIG) }
    }

    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SettingsView)
    }
}
