//! CLI definitions for flip
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string; dev builds carry the commit hash.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "flip")]
#[command(about = "[ flip ] - play frame-by-frame flip-books in the terminal")]
#[command(
    long_about = "flip - play frame-by-frame flip-books in the terminal.

A flip-book is a sequence file listing text frames with durations, optionally
wrapped in repeat loops. Timed frames advance on their own; frames with a
duration of 0 wait for a key press. When the sequence ends it replays from
the start, or hands over to a redirect target.

QUICK START:
    flip play book.toml            Play a flip-book
    flip check book.toml           Validate it and print the playback plan
    flip config init               Write the default configuration

SEQUENCE FILE (TOML):
    frame_time_ms = 50
    frames = [
        [\"title.txt\", 0],
        [\"for\", 3],
        [\"walk1.txt\", 2],
        [\"walk2.txt\", 2],
        [\"next\"],
        [\"end.txt\", 0],
    ]"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a flip-book in the terminal
    #[command(long_about = "Play a flip-book in the terminal.

Frame files are read from the sequence file's `directory` setting, or from
the directory containing the sequence file. Command-line options override
the sequence file, which overrides the configuration.

KEYS (defaults, see `flip config show`):
    z, Space, Enter, Right    Next frame
    x                         Skip (repeats while held)
    Backspace, Left           Previous frame, then stop
    p, Down                   Stop auto-advance
    t, Esc, Up                Back to the first frame
    q, Ctrl+c                 Quit

EXAMPLES:
    flip play book.toml
    flip play book.toml --frame-time-ms 40
    flip play book.json --start walk1.txt
    flip play book.toml --redirect https://example.com")]
    Play {
        /// Sequence file (.toml or .json)
        #[arg(help = "Sequence file (.toml or .json)")]
        sequence: PathBuf,

        /// Milliseconds per duration unit
        #[arg(long, value_name = "MS", help = "Milliseconds per duration unit")]
        frame_time_ms: Option<f64>,

        /// Hand over to this target when the sequence ends
        #[arg(long, value_name = "TARGET", help = "Redirect target once the sequence ends")]
        redirect: Option<String>,

        /// Frame file drawn behind every frame
        #[arg(long, value_name = "FILE", help = "Frame file drawn behind every frame")]
        background: Option<String>,

        /// Directory holding the frame files
        #[arg(long, value_name = "DIR", help = "Directory holding the frame files")]
        dir: Option<PathBuf>,

        /// Frame to start at (index or identifier)
        #[arg(long, value_name = "TARGET", help = "Start at this index or frame")]
        start: Option<String>,

        /// Look up --start from the end of the sequence
        #[arg(long, requires = "start", help = "Search --start from the end")]
        reverse: bool,
    },

    /// Validate a flip-book and print its playback plan
    #[command(long_about = "Validate a flip-book and print its playback plan.

Checks the entries and loop markers, makes sure every frame file exists,
then plays the sequence once without a terminal and lists each rendered
frame with its delay (or `manual` when it waits for a key).

EXAMPLES:
    flip check book.toml
    flip check book.toml --json")]
    Check {
        /// Sequence file (.toml or .json)
        #[arg(help = "Sequence file (.toml or .json)")]
        sequence: PathBuf,

        /// Print the report as JSON
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Configuration management
    #[command(long_about = "Manage flip configuration.

Configuration is stored in ~/.config/flip/config.toml and holds the
default frame time, an optional background frame and the key bindings.

EXAMPLES:
    flip config show         Show current configuration
    flip config path         Print the configuration file path
    flip config init         Write the default configuration")]
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    #[command(long_about = "Write the default configuration file.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    flip config init --force")]
    Init {
        /// Overwrite an existing file
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },
}
