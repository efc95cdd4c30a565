//! Playoff bracket checks and repairs

pub mod series;
pub mod topology;
pub mod validation;

pub use series::{legacy_round_sizes, prune_outer_rounds, PLAYOFF_TEAM_SHARE};
pub use topology::{ConfSplitRequest, ConferenceCountTopology, PlayoffTopology, TopologyError};
pub use validation::{
    bracket_capacity, bracket_size, validate_playoff_settings, PlayoffCheck, PlayoffShapeError,
    PLAY_IN_TEAMS_PER_BRACKET,
};
