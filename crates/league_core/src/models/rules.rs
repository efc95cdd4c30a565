//! Enumerated and structured setting values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Standings tiebreaker, applied in list order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Tiebreaker {
    CoinFlip,
    CommonOpponentsRecord,
    ConfRecordIfSame,
    DivRecordIfSame,
    DivWinner,
    Head2head,
    MarginOfVictory,
    StrengthOfSchedule,
    StrengthOfVictory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SalaryCapType {
    Soft,
    Hard,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum DraftType {
    Nba2019,
    Nba1994,
    Nba1990,
    NoLottery,
    NoLotteryReverse,
    Random,
    RandomLottery,
    RandomLotteryFirst3,
    Coinflip,
    Freeform,
    NoDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RealDraftRatings {
    Rookie,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InjuryEntry {
    pub name: String,
    /// Relative weight among all injuries
    pub frequency: f64,
    /// Mean games missed
    pub games: f64,
}

impl InjuryEntry {
    pub fn new(name: &str, frequency: f64, games: f64) -> Self {
        Self { name: name.to_string(), frequency, games }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TragicDeath {
    pub reason: String,
    pub frequency: f64,
}

impl TragicDeath {
    pub fn new(reason: &str, frequency: f64) -> Self {
        Self { reason: reason.to_string(), frequency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiebreaker_wire_names() {
        assert_eq!(serde_json::to_string(&Tiebreaker::CoinFlip).unwrap(), "\"coinFlip\"");
        assert_eq!(serde_json::to_string(&Tiebreaker::Head2head).unwrap(), "\"head2head\"");
        let parsed: Tiebreaker = serde_json::from_str("\"divRecordIfSame\"").unwrap();
        assert_eq!(parsed, Tiebreaker::DivRecordIfSame);
    }

    #[test]
    fn test_draft_type_wire_names() {
        assert_eq!(serde_json::to_string(&DraftType::Nba2019).unwrap(), "\"nba2019\"");
        assert_eq!(serde_json::to_string(&DraftType::NoLotteryReverse).unwrap(), "\"noLotteryReverse\"");
        assert!(serde_json::from_str::<DraftType>("\"lottery\"").is_err());
    }
}
