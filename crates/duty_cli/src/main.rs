//! Duty CLI - Command Line Operations for EMS Duty Scheduling
//!
//! # Commands
//!
//! - `duty check --schedule <file> --date <YYYY-MM-DD>` - Is this a duty day?
//! - `duty days --schedule <file>` - List every duty day
//! - `duty roster --schedule <file> --cadets <file>` - Printable roster
//! - `duty calendar --schedule <file> --month <YYYY-MM>` - Month grid

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use duty_cli::commands;
use duty_cli::config::{build_config, CliArgs};
use duty_cli::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Duty-day calendar for EMS cadet training schedules
#[derive(Parser, Debug)]
#[command(name = "duty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format, defaults to ./duty.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "DUTY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, env = "DUTY_FORMAT")]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether a day is a duty day
    Check {
        /// Path to schedule file (JSON)
        #[arg(short, long)]
        schedule: String,

        /// Day to check (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Treat excluded days as if they were not excluded
        #[arg(long)]
        ignore_exclusions: bool,
    },

    /// List every duty day of a schedule
    Days {
        /// Path to schedule file (JSON)
        #[arg(short, long)]
        schedule: String,
    },

    /// Print the roster of cadets on duty
    Roster {
        /// Path to schedule file (JSON)
        #[arg(short, long)]
        schedule: String,

        /// Path to cadet list (JSON array)
        #[arg(long)]
        cadets: String,
    },

    /// Print a month grid marking duty days
    Calendar {
        /// Path to schedule file (JSON)
        #[arg(short, long)]
        schedule: String,

        /// Month to print (YYYY-MM)
        #[arg(short, long)]
        month: String,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        version = duty_cli::VERSION,
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Check {
            schedule,
            date,
            ignore_exclusions,
        } => commands::check::run(&schedule, &date, ignore_exclusions, config.format),
        Commands::Days { schedule } => commands::days::run(&schedule, config.format),
        Commands::Roster { schedule, cadets } => {
            commands::roster::run(&schedule, &cadets, config.format)
        }
        Commands::Calendar { schedule, month } => commands::calendar::run(&schedule, &month),
    }
}
