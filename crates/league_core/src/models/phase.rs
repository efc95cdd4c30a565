//! Stages of a competition year.
//!
//! League files store the phase as a small integer, so the enum round-trips
//! through `i8` on the wire.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Phase {
    ExpansionDraft,
    FantasyDraft,
    Preseason,
    RegularSeason,
    AfterTradeDeadline,
    Playoffs,
    DraftLottery,
    Draft,
    AfterDraft,
    ResignPlayers,
    FreeAgency,
}

impl Phase {
    pub const ALL: [Phase; 11] = [
        Phase::ExpansionDraft,
        Phase::FantasyDraft,
        Phase::Preseason,
        Phase::RegularSeason,
        Phase::AfterTradeDeadline,
        Phase::Playoffs,
        Phase::DraftLottery,
        Phase::Draft,
        Phase::AfterDraft,
        Phase::ResignPlayers,
        Phase::FreeAgency,
    ];

    pub fn as_i8(self) -> i8 {
        match self {
            Phase::ExpansionDraft => -2,
            Phase::FantasyDraft => -1,
            Phase::Preseason => 0,
            Phase::RegularSeason => 1,
            Phase::AfterTradeDeadline => 2,
            Phase::Playoffs => 3,
            Phase::DraftLottery => 4,
            Phase::Draft => 5,
            Phase::AfterDraft => 6,
            Phase::ResignPlayers => 7,
            Phase::FreeAgency => 8,
        }
    }

    /// True once the playoffs have started, including the playoffs themselves.
    pub fn playoffs_started(self) -> bool {
        self >= Phase::Playoffs
    }

    /// True for every phase after the playoffs. Settings changed here take
    /// effect next season.
    pub fn after_playoffs(self) -> bool {
        self > Phase::Playoffs
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Preseason
    }
}

impl TryFrom<i8> for Phase {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Phase::ALL
            .iter()
            .copied()
            .find(|phase| phase.as_i8() == value)
            .ok_or_else(|| format!("unknown phase: {}", value))
    }
}

impl From<Phase> for i8 {
    fn from(phase: Phase) -> Self {
        phase.as_i8()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::ExpansionDraft => "expansion draft",
            Phase::FantasyDraft => "fantasy draft",
            Phase::Preseason => "preseason",
            Phase::RegularSeason => "regular season",
            Phase::AfterTradeDeadline => "after trade deadline",
            Phase::Playoffs => "playoffs",
            Phase::DraftLottery => "draft lottery",
            Phase::Draft => "draft",
            Phase::AfterDraft => "after draft",
            Phase::ResignPlayers => "re-sign players",
            Phase::FreeAgency => "free agency",
        };
        write!(f, "{}", name)
    }
}

impl JsonSchema for Phase {
    fn schema_name() -> String {
        "Phase".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        i8::json_schema(gen)
    }
}
