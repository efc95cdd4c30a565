//! Version-gated fixups for old league files
//!
//! Each rule names the file versions it applies to. Rules run in table order
//! after the overlay, so a new rule is a new table row and never an edit to
//! an existing one.

use crate::config::{default_tiebreakers, Configuration};
use crate::models::{LeagueSnapshot, Phase, Tiebreaker};
use crate::timeline::{SeasonStart, Timeline, TimelineEntry};

/// Version written by this engine
pub const CURRENT_FORMAT_VERSION: u32 = 51;

/// Last version whose files predate configurable tiebreakers
pub const LAST_VERSION_WITHOUT_TIEBREAKERS: u32 = 42;

/// First version whose files know about the play-in tournament
pub const FIRST_VERSION_WITH_PLAY_IN: u32 = 46;

/// Inclusive range of league file versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl VersionRange {
    pub const fn up_to(max: u32) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// A file without a version is treated as the oldest possible file
    pub fn contains(&self, version: Option<u32>) -> bool {
        match version {
            None => true,
            Some(v) => self.min.map_or(true, |min| v >= min) && self.max.map_or(true, |max| v <= max),
        }
    }
}

/// State a rule may read and rewrite
pub struct MigrationContext<'a> {
    pub config: &'a mut Configuration,
    pub snapshot: &'a LeagueSnapshot,
}

pub struct Migration {
    pub name: &'static str,
    pub versions: VersionRange,
    /// Returns true when the rule changed something
    pub apply: fn(&mut MigrationContext<'_>) -> bool,
}

pub static MIGRATIONS: &[Migration] = &[
    Migration {
        name: "tiebreakers-coin-flip",
        versions: VersionRange::up_to(LAST_VERSION_WITHOUT_TIEBREAKERS),
        apply: backfill_coin_flip_tiebreakers,
    },
    Migration {
        name: "play-in-unsupported",
        versions: VersionRange::up_to(FIRST_VERSION_WITH_PLAY_IN - 1),
        apply: disable_play_in,
    },
];

/// Run every rule whose range covers `version`, in table order. Returns the
/// names of the rules that changed the configuration.
pub fn run_migrations(version: Option<u32>, ctx: &mut MigrationContext<'_>) -> Vec<&'static str> {
    let mut applied = Vec::new();
    for migration in MIGRATIONS.iter().filter(|m| m.versions.contains(version)) {
        if (migration.apply)(ctx) {
            log::info!("Applied league file migration '{}' (version {:?})", migration.name, version);
            applied.push(migration.name);
        }
    }
    applied
}

/// Old leagues broke ties with a coin flip until they were loaded here.
///
/// The switch season is taken from the raw file, not the merged
/// configuration, and counts the playoffs themselves as "after".
fn backfill_coin_flip_tiebreakers(ctx: &mut MigrationContext<'_>) -> bool {
    let attrs = match &ctx.snapshot.game_attributes {
        Some(attrs) => attrs,
        None => return false,
    };
    if attrs.get("tiebreakers").map_or(false, |v| !v.is_null()) {
        return false;
    }

    let season = attrs.get("season").and_then(|v| v.as_i64()).and_then(|s| i32::try_from(s).ok());
    let phase = attrs
        .get("nextPhase")
        .filter(|v| !v.is_null())
        .or_else(|| attrs.get("phase"))
        .and_then(|v| serde_json::from_value::<Phase>(v.clone()).ok());
    let (season, phase) = match (season, phase) {
        (Some(season), Some(phase)) => (season, phase),
        _ => {
            log::debug!("league file has no usable season/phase, tiebreakers left at default");
            return false;
        }
    };

    let switch_season = if phase.playoffs_started() { season.saturating_add(1) } else { season };

    let entries = vec![
        TimelineEntry::new(SeasonStart::NegativeInfinity, vec![Tiebreaker::CoinFlip]),
        TimelineEntry::new(SeasonStart::Season(switch_season), default_tiebreakers()),
    ];
    match Timeline::from_entries(entries) {
        Ok(timeline) => {
            ctx.config.tiebreakers = timeline;
            true
        }
        Err(err) => {
            log::warn!("could not build tiebreaker history: {}", err);
            false
        }
    }
}

fn disable_play_in(ctx: &mut MigrationContext<'_>) -> bool {
    if !ctx.config.play_in {
        return false;
    }
    ctx.config.play_in = false;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn snapshot(version: Option<u32>, attrs: Value) -> LeagueSnapshot {
        let attrs: Map<String, Value> = serde_json::from_value(attrs).unwrap();
        LeagueSnapshot { version, ..LeagueSnapshot::with_game_attributes(attrs) }
    }

    fn migrate(snapshot: &LeagueSnapshot) -> (Configuration, Vec<&'static str>) {
        let mut config = Configuration::default();
        let applied = {
            let mut ctx = MigrationContext { config: &mut config, snapshot };
            run_migrations(snapshot.version, &mut ctx)
        };
        (config, applied)
    }

    #[test]
    fn test_version_range() {
        let range = VersionRange::up_to(42);
        assert!(range.contains(None));
        assert!(range.contains(Some(0)));
        assert!(range.contains(Some(42)));
        assert!(!range.contains(Some(43)));

        let bounded = VersionRange { min: Some(10), max: Some(20) };
        assert!(!bounded.contains(Some(9)));
        assert!(bounded.contains(Some(15)));
    }

    #[test]
    fn test_coin_flip_backfill_regular_season() {
        let snap = snapshot(Some(40), json!({"season": 2030, "phase": 1}));
        let (config, applied) = migrate(&snap);
        assert!(applied.contains(&"tiebreakers-coin-flip"));

        let entries = config.tiebreakers.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, vec![Tiebreaker::CoinFlip]);
        assert_eq!(entries[1].start, SeasonStart::Season(2030));
        assert_eq!(entries[1].value, default_tiebreakers());
    }

    #[test]
    fn test_coin_flip_switch_counts_playoffs_as_after() {
        let snap = snapshot(Some(40), json!({"season": 2030, "phase": 3}));
        let (config, _) = migrate(&snap);
        assert_eq!(config.tiebreakers.latest_start(), SeasonStart::Season(2031));

        let next = snapshot(Some(40), json!({"season": 2030, "phase": 1, "nextPhase": 5}));
        let (config, _) = migrate(&next);
        assert_eq!(config.tiebreakers.latest_start(), SeasonStart::Season(2031));
    }

    #[test]
    fn test_coin_flip_skipped() {
        // Explicit tiebreakers
        let explicit = snapshot(Some(40), json!({"season": 2030, "phase": 1, "tiebreakers": ["coinFlip"]}));
        assert!(!migrate(&explicit).1.contains(&"tiebreakers-coin-flip"));

        // No phase
        let partial = snapshot(Some(40), json!({"season": 2030}));
        assert!(!migrate(&partial).1.contains(&"tiebreakers-coin-flip"));

        // Newer file
        let newer = snapshot(Some(43), json!({"season": 2030, "phase": 1}));
        let (config, applied) = migrate(&newer);
        assert!(!applied.contains(&"tiebreakers-coin-flip"));
        assert!(config.tiebreakers.is_constant());
    }

    #[test]
    fn test_play_in_gate() {
        let old = snapshot(Some(45), json!({}));
        let (config, applied) = migrate(&old);
        assert!(!config.play_in);
        assert_eq!(applied, vec!["play-in-unsupported"]);

        let current = snapshot(Some(FIRST_VERSION_WITH_PLAY_IN), json!({}));
        assert!(migrate(&current).0.play_in);
    }

    #[test]
    fn test_unversioned_file_runs_every_rule() {
        let snap = snapshot(None, json!({"season": 2030, "phase": 0}));
        let (config, applied) = migrate(&snap);
        assert_eq!(applied, vec!["tiebreakers-coin-flip", "play-in-unsupported"]);
        assert!(!config.play_in);
    }
}
