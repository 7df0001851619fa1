//! Play command handler

use anyhow::{Context, Result};
use std::path::PathBuf;

use flip::config::frame_time_from_ms;
use flip::player::{play_sequence, KeyBindings, SessionOptions};
use flip::{Config, Direction, Sequence, Target};

use super::load_sequence;

/// Options given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub sequence: PathBuf,
    pub frame_time_ms: Option<f64>,
    pub redirect: Option<String>,
    pub background: Option<String>,
    pub dir: Option<PathBuf>,
    pub start: Option<String>,
    pub reverse: bool,
}

/// Play a flip-book in the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let (sequence, options) = resolve(args, &config)?;
    let result = play_sequence(sequence, &options)?;
    println!("{}", result.message());
    Ok(())
}

/// Merge command line, sequence file and config, in that order of priority.
pub(crate) fn resolve(args: PlayArgs, config: &Config) -> Result<(Sequence, SessionOptions)> {
    let (file, sequence) = load_sequence(&args.sequence)?;

    let frame_time_ms = args
        .frame_time_ms
        .or(file.frame_time_ms)
        .unwrap_or(config.playback.frame_time_ms);
    let frame_time = frame_time_from_ms(frame_time_ms)
        .with_context(|| format!("Invalid frame time: {} ms", frame_time_ms))?;

    let start = match args.start {
        Some(name) => {
            let target: Target = name.parse().unwrap_or_else(|never| match never {});
            let target = if args.reverse {
                target.with_direction(Direction::Backward)
            } else {
                target
            };
            target
                .locate(&sequence)
                .with_context(|| format!("Invalid start: {}", target))?;
            Some(target)
        }
        None => None,
    };

    let options = SessionOptions {
        directory: args.dir.unwrap_or_else(|| file.frame_directory()),
        frame_time,
        redirect: args.redirect.or(file.redirect),
        background: args
            .background
            .or(file.background)
            .or_else(|| config.display.background.clone()),
        start,
        keys: KeyBindings::try_from(&config.keys)?,
    };
    Ok((sequence, options))
}
