//! Defines the command-line arguments and subcommands for the cssel CLI.
//!
//! Uses the `clap` derive API for a declarative, type-safe argument structure.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use termcolor::ColorChoice;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "cssel",
    version,
    about = "Build CSS selector strings part by part, with ordering checks."
)]
pub struct CsselArgs {
    #[command(flatten)]
    pub output: OutputOptions,
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Raise log verbosity (-v for debug, -vv for trace). CSSEL_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// When to colour output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `auto` only colours when stdout is a terminal.
    pub fn resolve(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto | ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
        }
    }
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build one selector from `kind:value` parts, e.g. `element:div id:main`.
    Build {
        /// Parts in order. Kinds: element, id, class, attribute, pseudo-class, pseudo-element.
        #[arg(required = true)]
        parts: Vec<String>,
    },
    /// Build two selectors and join them with a combinator.
    Combine {
        /// Parts of the left-hand selector.
        #[arg(long, num_args = 1.., required = true)]
        left: Vec<String>,
        /// Combinator placed between the two selectors (" ", ">", "+" or "~").
        #[arg(short, long, default_value = ">")]
        combinator: String,
        /// Parts of the right-hand selector.
        #[arg(long, num_args = 1.., required = true)]
        right: Vec<String>,
    },
    /// Print the area of a rectangle, or its JSON form.
    Rect {
        width: f64,
        height: f64,
        /// Print the rectangle as JSON instead of its area.
        #[arg(long)]
        json: bool,
    },
    /// Read a rectangle from JSON (missing fields default to 1) and print its area.
    Area {
        #[arg(required = true)]
        json: String,
    },
}
