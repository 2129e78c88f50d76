//! The cssel command-line interface.
//!
//! Parses arguments, installs the tracing subscriber and dispatches to one
//! handler per subcommand. Every handler returns `miette::Result` so failures
//! are rendered as diagnostics by `main`.

use clap::Parser;
use miette::IntoDiagnostic;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, CsselArgs};
use crate::cli::output::Printer;
use crate::cli::part_spec::build_chain;
use crate::json::{from_json_onto, to_json};
use crate::selector::{Combinator, SelectorBuilder};
use crate::shapes::Rectangle;

pub mod args;
pub mod output;
pub mod part_spec;

/// Environment variable holding an `EnvFilter` directive, e.g. `cssel=trace`.
pub const LOG_ENV: &str = "CSSEL_LOG";

/// The main entry point for the CLI.
pub fn run() -> miette::Result<()> {
    let args = CsselArgs::parse();
    init_tracing(args.output.verbose);
    let mut printer = Printer::new(args.output.color.resolve());

    match args.command {
        Command::Build { parts } => handle_build(&parts, &mut printer),
        Command::Combine {
            left,
            combinator,
            right,
        } => handle_combine(&left, &combinator, &right, &mut printer),
        Command::Rect {
            width,
            height,
            json,
        } => handle_rect(Rectangle::new(width, height), json, &mut printer),
        Command::Area { json } => handle_area(&json, &mut printer),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "cssel=debug",
        _ => "cssel=trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when run from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// HANDLERS
// ============================================================================

fn handle_build(parts: &[String], printer: &mut Printer) -> miette::Result<()> {
    let selector = build_chain(parts)?;
    printer.selector(selector.as_str()).into_diagnostic()
}

fn handle_combine(
    left: &[String],
    combinator: &str,
    right: &[String],
    printer: &mut Printer,
) -> miette::Result<()> {
    if Combinator::from_symbol(combinator).is_none() {
        warn!(combinator, "not a CSS combinator; joining verbatim");
    }
    let left = build_chain(left)?;
    let right = build_chain(right)?;
    let combined = SelectorBuilder::combine(&left, combinator, &right);
    printer.selector(combined.as_str()).into_diagnostic()
}

fn handle_rect(rect: Rectangle, json: bool, printer: &mut Printer) -> miette::Result<()> {
    let text = if json {
        to_json(&rect)?
    } else {
        rect.area().to_string()
    };
    printer.value(&text).into_diagnostic()
}

fn handle_area(json: &str, printer: &mut Printer) -> miette::Result<()> {
    let rect = from_json_onto(&Rectangle::new(1.0, 1.0), json)?;
    printer.value(&rect.area().to_string()).into_diagnostic()
}
