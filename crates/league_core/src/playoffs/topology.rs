//! Conference topology lookup used for playoff checks.
//!
//! Callers backed by a league database can answer from stored teams; the
//! built-in resolver decides from the conference list alone. The engine only
//! asks for the number of conference brackets, never for a full bracket.

use crate::models::Conf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("conference topology unavailable for season {season}: {reason}")]
    Unavailable { season: i32, reason: String },
}

/// What the engine wants split
#[derive(Debug, Clone, Copy)]
pub struct ConfSplitRequest<'a> {
    pub playoffs_by_conf: bool,
    pub confs: &'a [Conf],
}

pub trait PlayoffTopology {
    /// Number of conference brackets the playoffs would use in `season`,
    /// `None` for a single bracket.
    fn playoffs_by_conf(
        &self,
        season: i32,
        request: &ConfSplitRequest<'_>,
    ) -> Result<Option<usize>, TopologyError>;
}

/// Splits by conference when asked to and the conference count halves
/// cleanly down to one bracket per conference.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConferenceCountTopology;

impl PlayoffTopology for ConferenceCountTopology {
    fn playoffs_by_conf(
        &self,
        _season: i32,
        request: &ConfSplitRequest<'_>,
    ) -> Result<Option<usize>, TopologyError> {
        if !request.playoffs_by_conf {
            return Ok(None);
        }

        let num_confs = request.confs.len();
        if num_confs >= 2 && num_confs.is_power_of_two() {
            Ok(Some(num_confs))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confs(n: u32) -> Vec<Conf> {
        (0..n).map(|cid| Conf::new(cid, &format!("Conf {}", cid))).collect()
    }

    #[test]
    fn test_split_requires_request() {
        let confs = confs(2);
        let request = ConfSplitRequest { playoffs_by_conf: false, confs: &confs };
        assert_eq!(ConferenceCountTopology.playoffs_by_conf(2025, &request), Ok(None));
    }

    #[test]
    fn test_split_by_conference_count() {
        for (n, expected) in [(1, None), (2, Some(2)), (3, None), (4, Some(4))] {
            let confs = confs(n);
            let request = ConfSplitRequest { playoffs_by_conf: true, confs: &confs };
            assert_eq!(ConferenceCountTopology.playoffs_by_conf(2025, &request), Ok(expected));
        }
    }
}
