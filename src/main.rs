//! Defuse CLI - plays scripted round-based combat sessions.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Defuse - a round-based tactical combat rules engine
#[derive(Parser, Debug)]
#[command(name = "defuse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a session from a command script
    Play {
        /// Command script (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Rules file in JSON (default: built-in rules)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Weapon table in JSON (default: built-in weapons)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Report printed after the last round: none, text, or json
        #[arg(short, long, default_value = "none")]
        summary: cli::SummaryFormat,
    },

    /// List the weapons available for purchase
    Weapons {
        /// Weapon table in JSON (default: built-in weapons)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn setup_logging(verbosity: u8) -> Result<(), cli::CliError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S%.3f]"),
                record.target(),
                record.level(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| cli::CliError::new(format!("Failed to set up logging: {e}")))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = setup_logging(args.verbose).and_then(|()| match args.command {
        Commands::Play {
            input,
            config,
            catalog,
            summary,
        } => cli::play::execute(
            input.as_deref(),
            config.as_deref(),
            catalog.as_deref(),
            summary,
        ),

        Commands::Weapons { catalog } => cli::weapons::execute(catalog.as_deref()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
