//! flip - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use flip::cli::{Cli, Commands, ConfigCommands};

use commands::play::PlayArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = flip::logging::init()? {
        tracing::debug!(log = %path.display(), version = flip::cli::VERSION, "Logging enabled");
    }

    match cli.command {
        Commands::Play {
            sequence,
            frame_time_ms,
            redirect,
            background,
            dir,
            start,
            reverse,
        } => commands::play::handle(PlayArgs {
            sequence,
            frame_time_ms,
            redirect,
            background,
            dir,
            start,
            reverse,
        }),
        Commands::Check { sequence, json } => commands::check::handle(&sequence, json),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
