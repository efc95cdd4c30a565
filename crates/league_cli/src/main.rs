//! League Config CLI
//!
//! League file + team list → merged league configuration

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "league-config")]
#[command(about = "Merge league files into league configurations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum SchemaArg {
    Config,
    Snapshot,
    Settings,
}

#[cfg(feature = "cli")]
impl From<SchemaArg> for league_cli::SchemaKind {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Config => league_cli::SchemaKind::Config,
            SchemaArg::Snapshot => league_cli::SchemaKind::Snapshot,
            SchemaArg::Settings => league_cli::SchemaKind::Settings,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Merge a league file with a team list
    Merge {
        /// League file (JSON)
        #[arg(long)]
        league: PathBuf,

        /// Team list (JSON array)
        #[arg(long)]
        teams: PathBuf,

        /// Team controlled by the user
        #[arg(long, default_value = "0")]
        user_tid: i32,

        /// Output configuration file path
        #[arg(long)]
        out: PathBuf,

        /// Write the team list after the merge
        #[arg(long)]
        teams_out: Option<PathBuf>,

        /// Output report JSON file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Print the default configuration
    Defaults,

    /// Print a JSON Schema
    Schema {
        #[arg(value_enum, default_value = "config")]
        kind: SchemaArg,
    },

    /// Print the settings form values of a configuration file
    Settings {
        /// Configuration file (JSON)
        config: PathBuf,
    },

    /// Check whether a playoff shape fits a league
    CheckPlayoffs {
        #[arg(long)]
        rounds: usize,

        #[arg(long, default_value = "0")]
        byes: u32,

        #[arg(long)]
        teams: usize,

        #[arg(long, default_value = "false")]
        play_in: bool,

        /// Number of conference brackets
        #[arg(long)]
        confs: Option<usize>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge { league, teams, user_tid, out, teams_out, report } => {
            println!("Merging league file...");
            println!("   League: {}", league.display());
            println!("   Teams:  {}", teams.display());
            println!("   Output: {}", out.display());

            let merge_report =
                league_cli::merge_files(&league, &teams, user_tid, &out, teams_out.as_deref())?;

            print_report(&merge_report);

            if let Some(report_path) = report {
                league_cli::save_report(&report_path, &merge_report)?;
                println!("\nReport saved to: {}", report_path.display());
            }
        }

        Commands::Defaults => {
            println!("{}", league_cli::defaults_json()?);
        }

        Commands::Schema { kind } => {
            println!("{}", league_cli::schema_json(kind.into())?);
        }

        Commands::Settings { config } => {
            let settings = league_cli::settings_from_file(&config)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }

        Commands::CheckPlayoffs { rounds, byes, teams, play_in, confs } => {
            let check = league_core::PlayoffCheck {
                num_rounds: rounds,
                num_byes: byes,
                num_active_teams: teams,
                play_in,
                by_conf: confs,
            };
            match league_cli::check_playoffs(&check) {
                Ok(capacity) => println!("Playoff shape is valid: {} teams in the bracket", capacity),
                Err(err) => anyhow::bail!("Invalid playoff shape: {}", err),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_report(report: &league_cli::MergeReport) {
    println!("\nMerge complete");
    match report.format_version {
        Some(version) => println!("   Format version:  {}", version),
        None => println!("   Format version:  (none, treated as oldest)"),
    }
    println!("   Season:          {}", report.season);
    println!("   Teams:           {} ({} active)", report.num_teams, report.num_active_teams);
    println!("   Checksum:        {}", report.snapshot_checksum);
    println!("   Created:         {}", report.created_at);

    for migration in &report.applied_migrations {
        println!("   Migration:       {}", migration);
    }
    for key in &report.rejected_keys {
        println!("   Rejected key:    {}", key);
    }
    for notice in &report.notices {
        println!("   Notice:          {}", notice.message);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("league-config CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
