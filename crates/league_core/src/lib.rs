//! # league_core - League Configuration Merge & Migration Engine
//!
//! Turns an imported league file of any vintage, plus the team list chosen
//! for a new league, into a complete and consistent league configuration.
//!
//! ## Features
//! - Season-versioned settings (`Timeline`) with invariant-checked history
//! - Per-key overlay: one malformed setting never sinks the whole file
//! - Playoff bracket validation and repair against the actual team count
//! - Version-gated migrations for old league files
//! - JSON API and JSON Schemas for hosts that only speak JSON

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]
// Configuration literals are built from defaults then adjusted
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod config;
pub mod error;
pub mod merge;
pub mod migration;
pub mod models;
pub mod playoffs;
pub mod population;
pub mod schedule;
pub mod timeline;

pub use api::{create_league_config_json, default_config_json, settings_json};
pub use config::{Configuration, SettingsView, DEFAULT_CONFIG};
pub use error::{MergeError, Result};
pub use merge::{ConfigMerger, MergeOutcome, Notice, Severity};
pub use migration::{Migration, VersionRange, CURRENT_FORMAT_VERSION, MIGRATIONS};
pub use models::{LeagueSnapshot, Phase, TeamInfo};
pub use playoffs::{
    validate_playoff_settings, ConferenceCountTopology, PlayoffCheck, PlayoffShapeError,
    PlayoffTopology,
};
pub use timeline::{SeasonStart, Timeline, TimelineEntry, TimelineError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON Schema version for the API
pub const SCHEMA_VERSION: u8 = api::API_SCHEMA_VERSION;
