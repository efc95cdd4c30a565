//! League data model shared by the engine and its callers

pub mod phase;
pub mod rules;
pub mod snapshot;
pub mod team;

pub use phase::Phase;
pub use rules::{DraftType, InjuryEntry, RealDraftRatings, SalaryCapType, Tiebreaker, TragicDeath};
pub use snapshot::{
    ContractionInfo, DraftPick, ExpansionDraftInfo, LeagueSnapshot, ScheduledEvent,
    ScheduledEventKind, TeamInfoChange,
};
pub use team::{count_active, Conf, Div, TeamInfo, TeamInfoCache};
