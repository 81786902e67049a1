//! CLI entry point for frond

use std::io::IsTerminal;
use std::process;

use clap::{Parser, ValueEnum};
use frond::{Outcome, Policy, Printer, QuoteRule, SkipRule, WalkState, Walker};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "frond")]
#[command(about = "List the working directory recursively, one entry per line")]
#[command(version)]
struct Args {
    /// Do not descend into subdirectories
    #[arg(long = "no-rec")]
    no_rec: bool,

    /// Quote every entry name
    #[arg(long = "quote-all", conflicts_with = "no_quotes")]
    quote_all: bool,

    /// Never quote entry names (default quotes names containing spaces)
    #[arg(long = "no-quotes")]
    no_quotes: bool,

    /// Show all entries, including `.` and `..`
    #[arg(long = "all", conflicts_with = "almost_all")]
    all: bool,

    /// Show hidden entries but skip `.` and `..`
    #[arg(long = "almost-all")]
    almost_all: bool,

    /// Annotate each entry with its type
    #[arg(long = "types")]
    types: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version go to stdout with a clean exit; anything
            // else is an argument error and no traversal starts.
            let is_error = err.use_stderr();
            let _ = err.print();
            process::exit(if is_error { 1 } else { 0 });
        }
    };

    let policy = Policy {
        recurse: !args.no_rec,
        skip_rule: if args.all {
            SkipRule::ShowAll
        } else if args.almost_all {
            SkipRule::AlmostAll
        } else {
            SkipRule::SkipHidden
        },
        quote_rule: if args.quote_all {
            QuoteRule::Always
        } else if args.no_quotes {
            QuoteRule::Never
        } else {
            QuoteRule::WhenNeeded
        },
        annotate_types: args.types,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|err| {
        eprintln!("frond: cannot determine working directory: {}", err);
        process::exit(2);
    });

    let walker = Walker::new(&policy);
    let mut printer = Printer::stdout(should_use_color(args.color));
    let outcome = match walker.walk(cwd.as_os_str(), WalkState::root(), &mut printer) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("frond: error writing output: {}", err);
            process::exit(1);
        }
    };

    process::exit(if outcome.is_failure() { 1 } else { 0 });
}
