//! Population equalization
//!
//! With equalized regions every market is the same size. Scheduled events
//! carry their own populations, so they are rewritten too or a later
//! expansion would bring an unequal market back.

use crate::models::{ScheduledEvent, ScheduledEventKind, TeamInfo};

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Give every team, and every population carried by a scheduled event, the
/// league mean rounded to two decimals. Returns the mean, or `None` when
/// there are no teams.
pub fn equalize_populations(
    teams: &mut [TeamInfo],
    events: &mut [ScheduledEvent],
) -> Option<f64> {
    if teams.is_empty() {
        return None;
    }

    let total: f64 = teams.iter().map(|t| t.pop).sum();
    let mean = round_to_hundredths(total / teams.len() as f64);

    for team in teams.iter_mut() {
        team.pop = mean;
    }

    for event in events.iter_mut() {
        match &mut event.kind {
            ScheduledEventKind::ExpansionDraft(info) => {
                for team in &mut info.teams {
                    team.pop = mean;
                }
            }
            ScheduledEventKind::TeamInfo(change) => {
                if let Some(pop) = change.pop.as_mut() {
                    *pop = mean;
                }
            }
            ScheduledEventKind::Contraction(_) | ScheduledEventKind::GameAttributes(_) => {}
        }
    }

    Some(mean)
}
