use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cyberaware::quiz::QuizMode;
use cyberaware::timer::MAX_QUESTION_SECS;

mod cli;

#[derive(Parser)]
#[command(name = "cyberaware")]
#[command(about = "Cyber-awareness trainer - spot the scam, know the law, earn XP")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.cyberaware/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show total XP, rank and progress
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a timed quiz session
    Play {
        /// Which quiz to play
        #[arg(short, long, value_enum, default_value_t = QuizMode::Simulator)]
        mode: QuizMode,

        /// Maximum number of questions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Seconds per question (overrides config)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=MAX_QUESTION_SECS))]
        duration: Option<u64>,

        /// Keep XP in memory only for this run
        #[arg(long)]
        ephemeral: bool,
    },

    /// Delete the saved XP total
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
        Some(Commands::Status { json }) => {
            cli::status::status_command(config_path, json)?;
        }
        Some(Commands::Play {
            mode,
            limit,
            duration,
            ephemeral,
        }) => {
            let options = cli::play::PlayOptions {
                mode,
                limit,
                duration,
                ephemeral,
            };
            cli::play::play_command(config_path, options).await?;
        }
        Some(Commands::Reset) => {
            cli::reset::reset_command(config_path)?;
        }
        None => {
            // Default: show status
            cli::status::status_command(config_path, false)?;
        }
    }

    Ok(())
}
