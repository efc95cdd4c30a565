//! Built-in league defaults
//!
//! Baseline for every recognized setting. Imported league files are laid on
//! top of these values.

use super::Configuration;
use crate::models::{
    Conf, Div, DraftType, InjuryEntry, Phase, SalaryCapType, Tiebreaker, TragicDeath,
};
use crate::timeline::Timeline;
use once_cell::sync::Lazy;

pub const DIFFICULTY_EASY: f64 = -0.25;
pub const DIFFICULTY_NORMAL: f64 = 0.0;
pub const DIFFICULTY_HARD: f64 = 0.25;
pub const DIFFICULTY_INSANE: f64 = 1.0;

/// Season used when a league file does not say when it starts
pub const DEFAULT_STARTING_SEASON: i32 = 2025;

/// Seasons during which the user cannot be fired
pub const GRACE_PERIOD_SEASONS: i32 = 2;

/// Best-of length used when a round has to be invented
pub const DEFAULT_SERIES_LENGTH: u32 = 7;

pub const DEFAULT_GOAT_FORMULA: &str =
    "ows + dws + 0.1 * (mvp * 5 + finalsMvp * 2 + allLeague * 1.5 + champ * 2)";

/// Shared copy of the defaults
pub static DEFAULT_CONFIG: Lazy<Configuration> = Lazy::new(Configuration::default);

pub fn default_tiebreakers() -> Vec<Tiebreaker> {
    vec![
        Tiebreaker::Head2head,
        Tiebreaker::DivWinner,
        Tiebreaker::DivRecordIfSame,
        Tiebreaker::CommonOpponentsRecord,
        Tiebreaker::ConfRecordIfSame,
        Tiebreaker::MarginOfVictory,
        Tiebreaker::CoinFlip,
    ]
}

pub fn default_confs() -> Vec<Conf> {
    vec![Conf::new(0, "Eastern Conference"), Conf::new(1, "Western Conference")]
}

pub fn default_divs() -> Vec<Div> {
    vec![
        Div::new(0, 0, "Atlantic"),
        Div::new(1, 0, "Central"),
        Div::new(2, 0, "Southeast"),
        Div::new(3, 1, "Southwest"),
        Div::new(4, 1, "Northwest"),
        Div::new(5, 1, "Pacific"),
    ]
}

pub fn default_injuries() -> Vec<InjuryEntry> {
    vec![
        InjuryEntry::new("Sprained Ankle", 2842.0, 2.7),
        InjuryEntry::new("Sore Knee", 1040.0, 2.4),
        InjuryEntry::new("Bruised Knee", 575.0, 1.8),
        InjuryEntry::new("Back Spasms", 521.0, 3.0),
        InjuryEntry::new("Strained Hamstring", 478.0, 4.6),
        InjuryEntry::new("Strained Groin", 349.0, 5.8),
        InjuryEntry::new("Concussion", 160.0, 5.3),
        InjuryEntry::new("Broken Hand", 70.0, 22.0),
        InjuryEntry::new("Torn Meniscus", 41.0, 29.0),
        InjuryEntry::new("Torn ACL", 14.0, 152.0),
        InjuryEntry::new("Torn Achilles Tendon", 8.0, 174.0),
    ]
}

pub fn default_tragic_deaths() -> Vec<TragicDeath> {
    vec![
        TragicDeath::new("Car accident", 45.0),
        TragicDeath::new("Heart attack", 20.0),
        TragicDeath::new("Plane crash", 5.0),
        TragicDeath::new("Illness", 25.0),
        TragicDeath::new("Drowning", 5.0),
    ]
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            season: DEFAULT_STARTING_SEASON,
            starting_season: DEFAULT_STARTING_SEASON,
            phase: Phase::Preseason,
            next_phase: None,
            user_tid: Timeline::new(0),
            user_tids: vec![0],
            num_teams: 30,
            num_active_teams: 30,
            team_info_cache: Vec::new(),
            grace_period_end: DEFAULT_STARTING_SEASON + GRACE_PERIOD_SEASONS,
            difficulty: DIFFICULTY_NORMAL,
            easy_difficulty_in_past: false,
            god_mode: false,
            god_mode_in_past: false,
            spectator: false,
            equalize_regions: false,
            hide_disabled_teams: false,
            num_draft_picks_current: None,
            num_playoff_rounds: None,

            confs: Timeline::new(default_confs()),
            divs: Timeline::new(default_divs()),
            num_games: 82,
            num_games_div: Some(16),
            num_games_conf: Some(36),
            trade_deadline: 0.6,
            all_star_game: Some(0.7),

            num_games_playoff_series: Timeline::new(vec![DEFAULT_SERIES_LENGTH; 4]),
            num_playoff_byes: Timeline::new(0),
            play_in: true,
            playoffs_by_conf: true,
            playoffs_num_teams_div: 0,
            playoffs_reseed: false,
            tiebreakers: Timeline::new(default_tiebreakers()),
            ties: Timeline::new(false),
            otl: Timeline::new(false),
            points_formula: Timeline::new(String::new()),

            salary_cap: 140000.0,
            min_payroll: 105000.0,
            luxury_payroll: 170000.0,
            luxury_tax: 1.5,
            min_contract: 1100.0,
            max_contract: 49000.0,
            min_contract_length: 1,
            max_contract_length: 5,
            salary_cap_type: SalaryCapType::Soft,
            budget: true,
            inflation_avg: 0.0,
            inflation_max: 0.0,
            inflation_min: 0.0,
            inflation_std: 0.0,

            num_draft_rounds: 2,
            draft_type: DraftType::Nba2019,
            draft_ages: [19, 22],
            num_seasons_future_draft_picks: 4,
            rookie_contract_lengths: vec![3, 2],
            rookies_can_refuse: true,
            draft_pick_auto_contract: true,
            draft_pick_auto_contract_percent: 25.0,
            draft_pick_auto_contract_rounds: 1,
            real_draft_ratings: None,

            max_roster_size: 15,
            min_roster_size: 13,
            force_retire_age: 0,
            brother_rate: 0.02,
            son_rate: 0.02,
            player_mood_traits: true,
            players_refuse_to_negotiate: true,
            ai_trades_factor: 1.0,
            ai_jersey_retirement: true,
            hof_factor: 1.0,
            real_player_determinism: 0.0,

            injury_rate: 0.0025,
            injuries: None,
            tragic_death_rate: 0.000001,
            tragic_deaths: None,
            stop_on_injury: false,
            stop_on_injury_games: 20,

            quarter_length: 12.0,
            num_periods: 4,
            num_players_on_court: 5,
            home_court_advantage: 1.0,
            three_pointers: true,
            pace: 100.0,
            elam: false,
            elam_asg: true,
            elam_minutes: 4.0,
            elam_overtime: false,
            elam_points: 8,

            challenge_no_draft_picks: false,
            challenge_no_free_agents: false,
            challenge_no_trades: false,
            challenge_no_ratings: false,
            challenge_lose_best_player: false,
            challenge_fired_luxury_tax: false,
            challenge_fired_miss_playoffs: false,
            challenge_thanos_mode: false,

            goat_formula: None,
            auto_delete_old_box_scores: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playoffs::{validate_playoff_settings, PlayoffCheck};

    #[test]
    fn test_defaults() {
        let defaults = Configuration::default();
        assert_eq!(defaults.season, DEFAULT_STARTING_SEASON);
        assert_eq!(defaults.grace_period_end, DEFAULT_STARTING_SEASON + 2);
        assert_eq!(defaults.num_games, 82);
        assert_eq!(defaults.num_games_playoff_series.latest(), &vec![7, 7, 7, 7]);
        assert_eq!(*defaults.num_playoff_byes.latest(), 0);
        assert!(defaults.play_in);
        assert_eq!(defaults.num_draft_rounds, 2);
        assert_eq!(defaults.tiebreakers.latest().last(), Some(&Tiebreaker::CoinFlip));
    }

    #[test]
    fn test_default_divisions_belong_to_default_conferences() {
        let confs = default_confs();
        for div in default_divs() {
            assert!(confs.iter().any(|c| c.cid == div.cid), "division {} has no conference", div.name);
        }
    }

    #[test]
    fn test_default_playoffs_are_valid_for_default_league() {
        let defaults = Configuration::default();
        let check = PlayoffCheck {
            num_rounds: defaults.num_playoff_rounds_current(),
            num_byes: *defaults.num_playoff_byes.latest(),
            num_active_teams: defaults.num_active_teams,
            play_in: defaults.play_in,
            by_conf: defaults.playoff_conf_split(),
        };
        assert!(validate_playoff_settings(&check).is_ok());
    }

    #[test]
    fn test_difficulty_tiers_ordered() {
        assert!(DIFFICULTY_EASY < DIFFICULTY_NORMAL);
        assert!(DIFFICULTY_NORMAL < DIFFICULTY_HARD);
        assert!(DIFFICULTY_HARD < DIFFICULTY_INSANE);
    }

    #[test]
    fn test_default_tables_not_empty() {
        assert!(!default_injuries().is_empty());
        assert!(!default_tragic_deaths().is_empty());
        assert!(default_injuries().iter().all(|i| i.frequency > 0.0 && i.games > 0.0));
    }
}
