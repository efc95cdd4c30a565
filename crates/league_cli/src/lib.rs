//! League Config CLI Library
//!
//! File-level wrappers around the merge engine: read a league file and a
//! team list, merge, write the configuration, and report what happened.

use anyhow::{Context, Result};
use league_core::models::TeamInfo;
use league_core::playoffs::{bracket_capacity, validate_playoff_settings, PlayoffCheck, PlayoffShapeError};
use league_core::{ConfigMerger, Configuration, LeagueSnapshot, Notice, SettingsView};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Summary of one merge run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// SHA256 of the league file as read (hex)
    pub snapshot_checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    pub format_version: Option<u32>,
    pub season: i32,
    pub num_teams: usize,
    pub num_active_teams: usize,
    pub applied_migrations: Vec<String>,
    pub rejected_keys: Vec<String>,
    pub notices: Vec<Notice>,
}

/// Which JSON Schema to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Config,
    Snapshot,
    Settings,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// Read a team list: a JSON array of team objects
pub fn load_teams(path: &Path) -> Result<Vec<TeamInfo>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read teams file: {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse teams file: {}", path.display()))
}

/// Merge a league file with a team list and write the configuration.
///
/// When `teams_out` is given the team list is written back as well, since
/// equalized regions change team populations.
pub fn merge_files(
    snapshot_path: &Path,
    teams_path: &Path,
    user_tid: i32,
    output: &Path,
    teams_out: Option<&Path>,
) -> Result<MergeReport> {
    let bytes = fs::read(snapshot_path)
        .with_context(|| format!("Failed to read league file: {}", snapshot_path.display()))?;
    let snapshot_checksum = sha256_hex(&bytes);

    let mut snapshot: LeagueSnapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse league file: {}", snapshot_path.display()))?;
    let mut teams = load_teams(teams_path)?;

    let outcome = ConfigMerger::new()
        .merge(&mut snapshot, &mut teams, user_tid)
        .context("League configuration merge failed")?;

    write_json(output, &outcome.config)?;
    if let Some(path) = teams_out {
        write_json(path, &teams)?;
    }

    Ok(MergeReport {
        snapshot_checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        format_version: snapshot.version,
        season: outcome.config.season,
        num_teams: outcome.config.num_teams,
        num_active_teams: outcome.config.num_active_teams,
        applied_migrations: outcome.applied_migrations.iter().map(|m| m.to_string()).collect(),
        rejected_keys: outcome.rejected_keys,
        notices: outcome.notices,
    })
}

pub fn save_report(path: &Path, report: &MergeReport) -> Result<()> {
    write_json(path, report)
}

pub fn defaults_json() -> Result<String> {
    league_core::DEFAULT_CONFIG.to_json_pretty().context("Failed to serialize defaults")
}

pub fn schema_json(kind: SchemaKind) -> Result<String> {
    let schema = match kind {
        SchemaKind::Config => Configuration::json_schema(),
        SchemaKind::Snapshot => LeagueSnapshot::json_schema(),
        SchemaKind::Settings => SettingsView::json_schema(),
    };
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}

/// Settings form values for a stored configuration file
pub fn settings_from_file(config_path: &Path) -> Result<SettingsView> {
    let json = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read configuration: {}", config_path.display()))?;
    let config: Configuration = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse configuration: {}", config_path.display()))?;
    Ok(SettingsView::from_config(&config))
}

/// Bracket capacity for `check`, or the reason the shape is impossible
pub fn check_playoffs(check: &PlayoffCheck) -> std::result::Result<u64, PlayoffShapeError> {
    validate_playoff_settings(check)?;
    Ok(bracket_capacity(check.num_rounds, check.num_byes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn write_temp(value: &serde_json::Value) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(value.to_string().as_bytes())?;
        Ok(file)
    }

    fn teams_value(n: usize) -> serde_json::Value {
        let teams: Vec<serde_json::Value> = (0..n)
            .map(|i| {
                serde_json::json!({
                    "abbrev": format!("T{}", i),
                    "region": "Region",
                    "name": "Team",
                    "pop": 2.0,
                    "did": i % 6
                })
            })
            .collect();
        serde_json::Value::Array(teams)
    }

    #[test]
    fn test_merge_files_round_trip() -> Result<()> {
        let league = serde_json::json!({
            "version": 40,
            "gameAttributes": {"season": 2030, "phase": 1, "numPlayoffRounds": 4, "numGames": "bad"},
            "players": []
        });
        let league_file = write_temp(&league)?;
        let teams_file = write_temp(&teams_value(30))?;
        let dir = tempdir()?;
        let output = dir.path().join("out").join("config.json");

        let report = merge_files(league_file.path(), teams_file.path(), 2, &output, None)?;

        assert_eq!(report.format_version, Some(40));
        assert_eq!(report.season, 2030);
        assert_eq!(report.num_teams, 30);
        assert_eq!(report.snapshot_checksum.len(), 64);
        assert!(report.applied_migrations.contains(&"tiebreakers-coin-flip".to_string()));
        assert_eq!(report.rejected_keys, vec!["numGames".to_string()]);

        let written: Configuration = serde_json::from_str(&fs::read_to_string(&output)?)?;
        assert_eq!(written.season, 2030);
        assert_eq!(written.num_playoff_rounds, None);
        assert!(!written.play_in);

        let report_path = dir.path().join("report.json");
        save_report(&report_path, &report)?;
        let saved: MergeReport = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
        assert_eq!(saved.snapshot_checksum, report.snapshot_checksum);

        Ok(())
    }

    #[test]
    fn test_checksum_tracks_file_bytes() -> Result<()> {
        let teams_file = write_temp(&teams_value(30))?;
        let dir = tempdir()?;
        let output = dir.path().join("config.json");

        let a = write_temp(&serde_json::json!({"version": 51}))?;
        let b = write_temp(&serde_json::json!({"version": 50}))?;
        let first = merge_files(a.path(), teams_file.path(), 0, &output, None)?;
        let again = merge_files(a.path(), teams_file.path(), 0, &output, None)?;
        let other = merge_files(b.path(), teams_file.path(), 0, &output, None)?;

        assert_eq!(first.snapshot_checksum, again.snapshot_checksum);
        assert_ne!(first.snapshot_checksum, other.snapshot_checksum);
        Ok(())
    }

    #[test]
    fn test_merge_files_writes_equalized_teams() -> Result<()> {
        let league = serde_json::json!({"version": 51, "gameAttributes": {"equalizeRegions": true}});
        let league_file = write_temp(&league)?;
        let teams_file = write_temp(&teams_value(30))?;
        let dir = tempdir()?;
        let teams_out = dir.path().join("teams.json");

        merge_files(
            league_file.path(),
            teams_file.path(),
            0,
            &dir.path().join("config.json"),
            Some(&teams_out),
        )?;

        let teams = load_teams(&teams_out)?;
        assert_eq!(teams.len(), 30);
        assert!(teams.iter().all(|t| t.pop == 2.0));
        Ok(())
    }

    #[test]
    fn test_merge_files_reports_fatal_error() -> Result<()> {
        let league = serde_json::json!({"gameAttributes": {"numDraftRounds": -1}});
        let league_file = write_temp(&league)?;
        let teams_file = write_temp(&teams_value(30))?;
        let dir = tempdir()?;

        let err = merge_files(league_file.path(), teams_file.path(), 0, &dir.path().join("c.json"), None)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("numDraftRounds"));
        Ok(())
    }

    #[test]
    fn test_missing_teams_file() {
        let err = load_teams(Path::new("/nonexistent/teams.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read teams file"));
    }

    #[test]
    fn test_schemas_and_defaults_are_json() -> Result<()> {
        for kind in [SchemaKind::Config, SchemaKind::Snapshot, SchemaKind::Settings] {
            let schema: serde_json::Value = serde_json::from_str(&schema_json(kind)?)?;
            assert!(schema.is_object());
        }
        let defaults: serde_json::Value = serde_json::from_str(&defaults_json()?)?;
        assert_eq!(defaults["numGames"], 82);
        Ok(())
    }

    #[test]
    fn test_settings_from_file() -> Result<()> {
        let config_file = write_temp(&serde_json::json!({"goatFormula": "ows"}))?;
        let settings = settings_from_file(config_file.path())?;
        assert_eq!(settings.goat_formula, "ows");
        assert!(!settings.injuries.is_empty());
        Ok(())
    }

    #[test]
    fn test_check_playoffs() {
        let ok = PlayoffCheck { num_rounds: 4, num_byes: 2, num_active_teams: 30, play_in: false, by_conf: Some(2) };
        assert_eq!(check_playoffs(&ok), Ok(14));

        let too_big = PlayoffCheck { num_rounds: 6, ..ok };
        assert!(matches!(check_playoffs(&too_big), Err(PlayoffShapeError::NotEnoughTeams { .. })));
    }
}
