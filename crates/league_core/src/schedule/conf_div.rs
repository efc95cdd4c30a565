//! Division and conference game counts
//!
//! A league file can ask for a fixed number of games against division and
//! conference opponents. Whether that is schedulable depends on the teams
//! actually in the league, so the request is checked against the current
//! topology and dropped in favor of a balanced schedule when it cannot work.

use crate::models::{Div, TeamInfo};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCountOutcome {
    pub num_games_div: Option<u32>,
    pub num_games_conf: Option<u32>,
    /// The request was replaced by a balanced schedule
    pub altered: bool,
}

impl GameCountOutcome {
    fn kept(num_games_div: Option<u32>, num_games_conf: Option<u32>) -> Self {
        Self { num_games_div, num_games_conf, altered: false }
    }

    fn balanced() -> Self {
        Self { num_games_div: None, num_games_conf: None, altered: true }
    }
}

/// Active team counts per division and per conference
struct Topology<'a> {
    active: Vec<&'a TeamInfo>,
    conf_of_div: HashMap<u32, u32>,
    div_sizes: HashMap<u32, u64>,
    conf_sizes: HashMap<u32, u64>,
}

impl<'a> Topology<'a> {
    fn build(teams: &'a [TeamInfo], divs: &[Div]) -> Result<Self, String> {
        let conf_of_div: HashMap<u32, u32> = divs.iter().map(|d| (d.did, d.cid)).collect();
        let active: Vec<&TeamInfo> = teams.iter().filter(|t| !t.disabled).collect();
        if active.is_empty() {
            return Err("no active teams".to_string());
        }

        let mut div_sizes: HashMap<u32, u64> = HashMap::new();
        let mut conf_sizes: HashMap<u32, u64> = HashMap::new();
        for team in &active {
            let cid = conf_of_div.get(&team.did).ok_or_else(|| {
                format!("team {} is in unknown division {}", team.abbrev, team.did)
            })?;
            *div_sizes.entry(team.did).or_default() += 1;
            *conf_sizes.entry(*cid).or_default() += 1;
        }

        Ok(Self { active, conf_of_div, div_sizes, conf_sizes })
    }

    fn num_active(&self) -> u64 {
        self.active.len() as u64
    }

    fn div_size(&self, team: &TeamInfo) -> u64 {
        self.div_sizes.get(&team.did).copied().unwrap_or(0)
    }

    fn conf_size(&self, team: &TeamInfo) -> u64 {
        self.conf_of_div
            .get(&team.did)
            .and_then(|cid| self.conf_sizes.get(cid))
            .copied()
            .unwrap_or(0)
    }
}

/// Check requested division/conference game counts against the league.
///
/// `None` for both counts is already a balanced schedule and is returned
/// as is. Otherwise the counts are kept when every team can fill its
/// division, conference and out-of-conference games with real opponents,
/// and both are reset to `None` when any of those slices is impossible.
pub fn conf_div_game_counts(
    teams: &[TeamInfo],
    divs: &[Div],
    num_games: u32,
    num_games_conf: Option<u32>,
    num_games_div: Option<u32>,
) -> GameCountOutcome {
    if num_games_div.is_none() && num_games_conf.is_none() {
        return GameCountOutcome::kept(None, None);
    }

    match check_game_counts(teams, divs, num_games, num_games_conf, num_games_div) {
        Ok(()) => GameCountOutcome::kept(num_games_div, num_games_conf),
        Err(reason) => {
            log::debug!("falling back to a balanced schedule: {}", reason);
            GameCountOutcome::balanced()
        }
    }
}

fn check_game_counts(
    teams: &[TeamInfo],
    divs: &[Div],
    num_games: u32,
    num_games_conf: Option<u32>,
    num_games_div: Option<u32>,
) -> Result<(), String> {
    let topology = Topology::build(teams, divs)?;

    let num_games = u64::from(num_games);
    let div_games = u64::from(num_games_div.unwrap_or(0));
    let conf_games = u64::from(num_games_conf.unwrap_or(0));

    if div_games + conf_games > num_games {
        return Err(format!(
            "{} division and {} conference games exceed {} games",
            div_games, conf_games, num_games
        ));
    }

    if div_games > 0 {
        for (did, size) in &topology.div_sizes {
            if *size < 2 {
                return Err(format!("division {} has no opponents", did));
            }
            if size * div_games % 2 != 0 {
                return Err(format!("division {} cannot pair {} games", did, div_games));
            }
        }
    }

    if num_games_conf.is_none() {
        // Everything outside the division is unconstrained
        let rest = num_games - div_games;
        if rest == 0 {
            return Ok(());
        }
        for team in &topology.active {
            if topology.num_active() <= topology.div_size(team) {
                return Err(format!("team {} has no non-division opponents", team.abbrev));
            }
        }
        if topology.num_active() * rest % 2 != 0 {
            return Err(format!("cannot pair {} remaining games", rest));
        }
        return Ok(());
    }

    if conf_games > 0 {
        for team in &topology.active {
            let excluded = if num_games_div.is_some() { topology.div_size(team) } else { 1 };
            if topology.conf_size(team) <= excluded {
                return Err(format!("team {} has no conference opponents", team.abbrev));
            }
        }
        for (cid, size) in &topology.conf_sizes {
            if size * conf_games % 2 != 0 {
                return Err(format!("conference {} cannot pair {} games", cid, conf_games));
            }
        }
    }

    let other_games = num_games - div_games - conf_games;
    if topology.conf_sizes.len() < 2 {
        if other_games != 0 {
            return Err(format!(
                "{} out-of-conference games but only one conference",
                other_games
            ));
        }
        return Ok(());
    }

    if other_games > 0 {
        if topology.num_active() * other_games % 2 != 0 {
            return Err(format!("cannot pair {} out-of-conference games", other_games));
        }
        let largest = topology.conf_sizes.values().copied().max().unwrap_or(0);
        if largest * 2 > topology.num_active() {
            return Err(format!(
                "conference of {} teams outnumbers its {} possible opponents",
                largest,
                topology.num_active() - largest
            ));
        }
    }

    Ok(())
}
