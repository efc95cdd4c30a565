//! Playoff bracket feasibility checks
//!
//! A bracket with `r` rounds has `2^r` first-round slots. Every bye turns a
//! first-round pairing into a single seeded team, so it holds
//! `2^r - byes` teams.

use thiserror::Error;

/// Reasons a playoff shape cannot be realized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayoffShapeError {
    #[error("playoffs need at least one round")]
    NoRounds,

    #[error("{num_byes} byes is more than the {max_byes} first-round pairings of a {num_rounds} round bracket")]
    TooManyByes { num_rounds: usize, num_byes: u32, max_byes: u64 },

    #[error("{num_rounds} playoff rounds with {num_byes} byes means {num_playoff_teams} teams make the playoffs, but there are only {num_active_teams} teams in the league")]
    NotEnoughTeams {
        num_rounds: usize,
        num_byes: u32,
        num_playoff_teams: u64,
        num_active_teams: usize,
    },

    #[error("playoffs cannot be split across {num_confs} conferences")]
    UnsplittableConferences { num_confs: usize },

    #[error("{num_rounds} playoff rounds are not enough to give each of {num_confs} conferences its own bracket")]
    BracketTooSmallForConferences { num_rounds: usize, num_confs: usize },

    #[error("{num_byes} byes cannot be divided evenly between {num_confs} conferences")]
    ByesNotDivisible { num_byes: u32, num_confs: usize },

    #[error("play-in tournament needs {required} teams, but there are only {num_active_teams} teams in the league")]
    NotEnoughTeamsForPlayIn { required: u64, num_active_teams: usize },
}

/// Playoff settings to check against the league's team count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoffCheck {
    pub num_rounds: usize,
    pub num_byes: u32,
    pub num_active_teams: usize,
    pub play_in: bool,
    /// Number of conference brackets, `None` for a single league-wide bracket
    pub by_conf: Option<usize>,
}

/// Extra teams a play-in adds to each bracket
pub const PLAY_IN_TEAMS_PER_BRACKET: u64 = 2;

/// First-round slots of a bracket, saturating for absurd round counts
pub fn bracket_size(num_rounds: usize) -> u64 {
    u32::try_from(num_rounds)
        .ok()
        .and_then(|rounds| 1u64.checked_shl(rounds))
        .unwrap_or(u64::MAX)
}

/// Number of teams a bracket holds
pub fn bracket_capacity(num_rounds: usize, num_byes: u32) -> u64 {
    bracket_size(num_rounds).saturating_sub(u64::from(num_byes))
}

/// Check that the playoff shape can be realized.
///
/// Pure: callers decide the fallback on error.
pub fn validate_playoff_settings(check: &PlayoffCheck) -> Result<(), PlayoffShapeError> {
    let PlayoffCheck { num_rounds, num_byes, num_active_teams, play_in, by_conf } = *check;

    if num_rounds == 0 {
        return Err(PlayoffShapeError::NoRounds);
    }

    let max_byes = bracket_size(num_rounds - 1);
    if u64::from(num_byes) > max_byes {
        return Err(PlayoffShapeError::TooManyByes { num_rounds, num_byes, max_byes });
    }

    let num_playoff_teams = bracket_capacity(num_rounds, num_byes);
    if num_playoff_teams > num_active_teams as u64 {
        return Err(PlayoffShapeError::NotEnoughTeams {
            num_rounds,
            num_byes,
            num_playoff_teams,
            num_active_teams,
        });
    }

    if let Some(num_confs) = by_conf {
        if num_confs == 0 || !num_confs.is_power_of_two() {
            return Err(PlayoffShapeError::UnsplittableConferences { num_confs });
        }

        // Each conference bracket needs at least one pairing
        if bracket_size(num_rounds) < 2 * num_confs as u64 {
            return Err(PlayoffShapeError::BracketTooSmallForConferences { num_rounds, num_confs });
        }

        if num_byes as usize % num_confs != 0 {
            return Err(PlayoffShapeError::ByesNotDivisible { num_byes, num_confs });
        }
    }

    if play_in {
        let num_brackets = by_conf.unwrap_or(1) as u64;
        let required =
            num_playoff_teams.saturating_add(PLAY_IN_TEAMS_PER_BRACKET * num_brackets);
        if required > num_active_teams as u64 {
            return Err(PlayoffShapeError::NotEnoughTeamsForPlayIn { required, num_active_teams });
        }
    }

    Ok(())
}
