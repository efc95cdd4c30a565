//! League configuration merge
//!
//! Builds the configuration of a new league from the built-in defaults, an
//! imported league file of any vintage and the caller's team list. The
//! configuration is owned by one `merge` call from start to finish and is
//! handed back by value.
//!
//! Every repair is local and logged. A negative draft round count is the only
//! thing that fails the merge.

mod notice;
mod overlay;


pub use notice::{Notice, Severity, SCHEDULE_RESET_MESSAGE};
pub use overlay::{apply_overlay, OverlayReport};

use crate::config::{
    Configuration, DEFAULT_CONFIG, DEFAULT_STARTING_SEASON, DIFFICULTY_EASY, GRACE_PERIOD_SEASONS,
};
use crate::error::{MergeError, Result};
use crate::migration::{run_migrations, MigrationContext};
use crate::models::{count_active, DraftPick, LeagueSnapshot, Phase, TeamInfo, TeamInfoCache};
use crate::playoffs::{
    legacy_round_sizes, prune_outer_rounds, validate_playoff_settings, ConfSplitRequest,
    ConferenceCountTopology, PlayoffCheck, PlayoffTopology,
};
use crate::population::equalize_populations;
use crate::schedule::conf_div_game_counts;
use crate::timeline::Timeline;
use serde::Serialize;
use serde_json::Value;

const USER_TID_KEY: &str = "userTid";
const ROUND_SIZES_KEY: &str = "numGamesPlayoffSeries";

static DEFAULT_TOPOLOGY: ConferenceCountTopology = ConferenceCountTopology;

/// Result of a successful merge
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    pub config: Configuration,
    pub notices: Vec<Notice>,
    /// Imported attributes that were dropped in favor of defaults
    pub rejected_keys: Vec<String>,
    /// Names of the league file migrations that changed something
    pub applied_migrations: Vec<&'static str>,
}

/// Builds new league configurations; see [`ConfigMerger::merge`]
pub struct ConfigMerger<'a> {
    topology: &'a dyn PlayoffTopology,
}

impl ConfigMerger<'static> {
    /// Merger using the built-in conference resolver
    pub fn new() -> Self {
        Self { topology: &DEFAULT_TOPOLOGY }
    }
}

impl Default for ConfigMerger<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConfigMerger<'a> {
    /// Swap the resolver consulted before keeping the play-in tournament
    pub fn with_topology<'b>(self, topology: &'b dyn PlayoffTopology) -> ConfigMerger<'b> {
        ConfigMerger { topology }
    }

    /// Merge an imported league file with the defaults.
    ///
    /// `teams` is the league's team list. Only team populations are written,
    /// and only when regions are equalized; the snapshot's scheduled events
    /// get the same treatment.
    pub fn merge(
        &self,
        snapshot: &mut LeagueSnapshot,
        teams: &mut [TeamInfo],
        user_tid: i32,
    ) -> Result<MergeOutcome> {
        let mut config = base_configuration(snapshot.starting_season, teams, user_tid);
        let mut notices = Vec::new();
        let mut rejected_keys = Vec::new();
        let mut explicit_rounds = false;

        if let Some(attrs) = snapshot.game_attributes.as_ref() {
            let (overlaid, report) = apply_overlay(&config, attrs, &[USER_TID_KEY])?;
            config = overlaid;
            apply_team_list(&mut config, teams);
            explicit_rounds = report.is_accepted(ROUND_SIZES_KEY);
            rejected_keys = report.rejected;

            // Needs the season and phase from the overlay
            if let Some(raw) = attrs.get(USER_TID_KEY) {
                if let Err(err) = resolve_user_tid(&mut config, raw, user_tid) {
                    log::warn!("Rejected game attribute '{}', keeping default: {}", USER_TID_KEY, err);
                    rejected_keys.push(USER_TID_KEY.to_string());
                }
            }

            if !config.user_tids.contains(&user_tid) {
                config.user_tids = vec![user_tid];
            }
        }

        if config.difficulty <= DIFFICULTY_EASY {
            config.easy_difficulty_in_past = true;
        }

        reconcile_playoff_rounds(&mut config, explicit_rounds);

        let applied_migrations = if snapshot.is_imported() {
            let mut ctx = MigrationContext { config: &mut config, snapshot: &*snapshot };
            run_migrations(snapshot.version, &mut ctx)
        } else {
            Vec::new()
        };

        self.gate_play_in(&mut config);

        if config.num_draft_rounds < 0 {
            return Err(MergeError::InvalidConfiguration(format!(
                "numDraftRounds must be a non-negative number, got {}",
                config.num_draft_rounds
            )));
        }

        if config.equalize_regions {
            let mut no_events = Vec::new();
            let events = snapshot.scheduled_events.as_mut().unwrap_or(&mut no_events);
            if let Some(mean) = equalize_populations(teams, events) {
                log::info!("Equalized team populations to {}", mean);
            }
        }

        if let Some(notice) = recompute_game_counts(&mut config, teams) {
            notices.push(notice);
        }

        carry_over_draft_picks(&mut config, snapshot.draft_picks.as_deref());

        Ok(MergeOutcome { config, notices, rejected_keys, applied_migrations })
    }

    /// Turn the play-in off when the bracket cannot hold it
    fn gate_play_in(&self, config: &mut Configuration) {
        if !config.play_in {
            return;
        }

        let request = ConfSplitRequest {
            playoffs_by_conf: config.playoffs_by_conf,
            confs: config.confs.latest(),
        };
        let by_conf = match self.topology.playoffs_by_conf(config.season, &request) {
            Ok(by_conf) => by_conf,
            Err(err) => {
                log::warn!("Disabling play-in tournament: {}", err);
                config.play_in = false;
                return;
            }
        };

        let check = PlayoffCheck {
            num_rounds: config.num_playoff_rounds_current(),
            num_byes: *config.num_playoff_byes.latest(),
            num_active_teams: config.num_active_teams,
            play_in: true,
            by_conf,
        };
        if let Err(err) = validate_playoff_settings(&check) {
            log::warn!("Disabling play-in tournament: {}", err);
            config.play_in = false;
        }
    }
}

fn base_configuration(starting_season: Option<i32>, teams: &[TeamInfo], user_tid: i32) -> Configuration {
    let starting_season = starting_season.unwrap_or(DEFAULT_STARTING_SEASON);
    let mut config = Configuration {
        season: starting_season,
        starting_season,
        grace_period_end: starting_season.saturating_add(GRACE_PERIOD_SEASONS),
        user_tid: Timeline::new(user_tid),
        user_tids: vec![user_tid],
        ..DEFAULT_CONFIG.clone()
    };
    apply_team_list(&mut config, teams);
    config
}

/// Team-derived fields always follow the team list, never the league file
fn apply_team_list(config: &mut Configuration, teams: &[TeamInfo]) {
    config.num_teams = teams.len();
    config.num_active_teams = count_active(teams);
    config.team_info_cache = teams.iter().map(TeamInfoCache::from).collect();
}

/// Bring over the league file's user team history.
///
/// A scalar `userTid` carries no history and leaves the seeded value alone.
fn resolve_user_tid(config: &mut Configuration, raw: &Value, user_tid: i32) -> Result<()> {
    if !raw.is_array() {
        return Ok(());
    }

    let mut history: Timeline<i32> = serde_json::from_value(raw.clone())?;
    if *history.latest() == user_tid {
        config.user_tid = history;
    } else if config.season == config.starting_season {
        // First season of the file, so the new team was always the user's
        config.user_tid = Timeline::new(user_tid);
    } else {
        history.set_effective_now(config.season, config.phase, user_tid);
        config.user_tid = history;
    }
    Ok(())
}

/// Make the playoff round sizes fit the league.
///
/// Invalid or legacy round settings are rebuilt from the round count. Unless
/// the file chose the round sizes itself, outer rounds are dropped until at
/// most `PLAYOFF_TEAM_SHARE` of the league makes the playoffs.
fn reconcile_playoff_rounds(config: &mut Configuration, explicit_rounds: bool) {
    let old_rounds = config.num_games_playoff_series.latest().clone();
    let check = PlayoffCheck {
        num_rounds: old_rounds.len(),
        num_byes: *config.num_playoff_byes.latest(),
        num_active_teams: config.num_active_teams,
        play_in: config.play_in,
        by_conf: config.playoff_conf_split(),
    };

    let mut legacy = config.num_playoff_rounds.is_some();
    if let Err(err) = validate_playoff_settings(&check) {
        log::warn!("Playoff settings do not fit the league ({}), rebuilding round sizes", err);
        legacy = true;
    }

    let mut new_rounds = if legacy {
        legacy_round_sizes(&old_rounds, config.num_playoff_rounds.take(), config.num_active_teams)
    } else {
        old_rounds.clone()
    };
    if new_rounds.is_empty() {
        new_rounds = DEFAULT_CONFIG.num_games_playoff_series.latest().clone();
    }
    if !explicit_rounds {
        prune_outer_rounds(&mut new_rounds, config.num_active_teams);
    }

    if new_rounds != old_rounds {
        log::info!(
            "Playoff rounds changed from {:?} to {:?}, resetting byes",
            old_rounds,
            new_rounds
        );
        let (season, phase) = (config.season, config.phase);
        config.num_playoff_byes.set_effective_now(season, phase, 0);
        config.num_games_playoff_series.set_effective_now(season, phase, new_rounds);
    }
}

/// Check division and conference game counts against the team list. Returns
/// a notice when a non-default request had to be dropped.
fn recompute_game_counts(config: &mut Configuration, teams: &[TeamInfo]) -> Option<Notice> {
    let requested_non_default = config.num_games_conf != DEFAULT_CONFIG.num_games_conf
        || config.num_games_div != DEFAULT_CONFIG.num_games_div;

    let outcome = conf_div_game_counts(
        teams,
        config.divs.latest(),
        config.num_games,
        config.num_games_conf,
        config.num_games_div,
    );
    config.num_games_div = outcome.num_games_div;
    config.num_games_conf = outcome.num_games_conf;

    (outcome.altered && requested_non_default).then(|| Notice::info(SCHEDULE_RESET_MESSAGE))
}

/// Resume a draft at the right size when the file was saved before the
/// first pick was made.
fn carry_over_draft_picks(config: &mut Configuration, draft_picks: Option<&[DraftPick]>) {
    let draft_picks = match draft_picks {
        Some(picks) if config.phase == Phase::Draft => picks,
        _ => return,
    };

    let current: Vec<&DraftPick> = draft_picks.iter().filter(|dp| dp.season == config.season).collect();
    let not_started = current.iter().all(|dp| dp.round == 0)
        || current.iter().any(|dp| dp.round == 1 && dp.pick == 1);

    if not_started && !current.is_empty() {
        config.num_draft_picks_current = u32::try_from(current.len()).ok();
    }
}
