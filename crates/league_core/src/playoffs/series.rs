//! Playoff round-size calculators
//!
//! Round sizes are listed outermost round first, so shrinking a bracket drops
//! from the front and the finals are always kept.

use super::validation::bracket_size;
use crate::config::DEFAULT_SERIES_LENGTH;

/// Largest share of the league allowed into an unconfigured bracket
pub const PLAYOFF_TEAM_SHARE: f64 = 0.75;

/// Round counts beyond this cannot describe a real bracket
const MAX_LEGACY_ROUNDS: u32 = 64;

/// Keep the innermost `keep` rounds
fn keep_inner_rounds(rounds: &mut Vec<u32>, keep: usize) {
    let drop = rounds.len().saturating_sub(keep);
    rounds.drain(..drop);
}

/// Rebuild round sizes from a file that only stored a round count.
///
/// Shrinking keeps the later rounds; growing repeats the outermost series
/// length. The result is then cut down until the bracket fits the league.
pub fn legacy_round_sizes(
    current: &[u32],
    legacy_rounds: Option<u32>,
    num_active_teams: usize,
) -> Vec<u32> {
    let mut rounds = current.to_vec();

    if let Some(target) = legacy_rounds {
        let target = target.clamp(1, MAX_LEGACY_ROUNDS) as usize;
        if target < rounds.len() {
            keep_inner_rounds(&mut rounds, target);
        } else {
            let fill = rounds.first().copied().unwrap_or(DEFAULT_SERIES_LENGTH);
            let mut grown = vec![fill; target - rounds.len()];
            grown.append(&mut rounds);
            rounds = grown;
        }
    }

    let mut keep = rounds.len();
    while keep > 1 && bracket_size(keep) > num_active_teams as u64 {
        keep -= 1;
    }
    keep_inner_rounds(&mut rounds, keep);

    rounds
}

/// Drop outer rounds while more than `PLAYOFF_TEAM_SHARE` of the league would
/// make the playoffs. At least one round is always kept.
pub fn prune_outer_rounds(rounds: &mut Vec<u32>, num_active_teams: usize) {
    let limit = PLAYOFF_TEAM_SHARE * num_active_teams as f64;
    let mut keep = rounds.len();
    while keep > 1 && bracket_size(keep) as f64 > limit {
        keep -= 1;
    }
    keep_inner_rounds(rounds, keep);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_legacy_rounds_shrink_keeps_finals() {
        let rounds = legacy_round_sizes(&[3, 5, 7, 7], Some(2), 30);
        assert_eq!(rounds, vec![7, 7]);
    }

    #[test]
    fn test_legacy_rounds_grow_repeats_first_round() {
        let rounds = legacy_round_sizes(&[5, 7], Some(4), 30);
        assert_eq!(rounds, vec![5, 5, 5, 7]);

        let from_nothing = legacy_round_sizes(&[], Some(3), 30);
        assert_eq!(from_nothing, vec![DEFAULT_SERIES_LENGTH; 3]);
    }

    #[test]
    fn test_legacy_rounds_fit_league() {
        // 5 rounds = 32 teams, only 20 in the league
        let rounds = legacy_round_sizes(&[7, 7, 7, 7], Some(5), 20);
        assert_eq!(rounds.len(), 4);

        let no_marker = legacy_round_sizes(&[7, 7, 7, 7], None, 10);
        assert_eq!(no_marker.len(), 3);
    }

    #[test]
    fn test_legacy_rounds_clamped() {
        assert_eq!(legacy_round_sizes(&[7], Some(0), 30), vec![7]);
        let huge = legacy_round_sizes(&[7], Some(u32::MAX), 30);
        assert_eq!(huge.len(), 4);
    }

    #[test]
    fn test_prune_outer_rounds() {
        let mut rounds = vec![7, 7, 7, 7];
        prune_outer_rounds(&mut rounds, 16);
        // 16 > 12, 8 <= 12
        assert_eq!(rounds, vec![7, 7, 7]);

        let mut fits = vec![7, 7, 7, 7];
        prune_outer_rounds(&mut fits, 30);
        assert_eq!(fits.len(), 4);

        let mut tiny = vec![1, 3, 5, 7];
        prune_outer_rounds(&mut tiny, 2);
        assert_eq!(tiny, vec![7]);
    }

    proptest! {
        /// Property: pruning always ends with a bracket within the share, or one round
        #[test]
        fn prop_prune_converges(
            num_active_teams in 2usize..5000,
            mut rounds in prop::collection::vec(1u32..9, 0..200)
        ) {
            let before = rounds.len();
            prune_outer_rounds(&mut rounds, num_active_teams);
            let within = (bracket_size(rounds.len()) as f64) <= PLAYOFF_TEAM_SHARE * num_active_teams as f64;
            prop_assert!(rounds.len() <= 1 || within);
            prop_assert!(rounds.len() <= before);
            if before > 0 {
                prop_assert!(!rounds.is_empty());
            }
        }
    }
}
