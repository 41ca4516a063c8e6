//! Bloxd CLI: command-line front end for the Bloxd script linter.
//!
//! Provides `bloxd lint` for checking script files or stdin, `bloxd normalize`
//! for converting third-party lint output into canonical diagnostics, and
//! `bloxd rules` for listing the built-in rules.

#![warn(missing_docs)]

mod lint;
mod normalize;
mod pipeline;
mod rules;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Lint checks for Bloxd scripting.
#[derive(Parser, Debug)]
#[command(name = "bloxd", version, about = "Bloxd script linter")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `bloxd.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run lint checks on script files or stdin.
    Lint(LintArgs),
    /// Convert lint results from any producer into canonical diagnostics.
    Normalize(NormalizeArgs),
    /// List the built-in lint rules.
    Rules,
}

/// Arguments for the `bloxd lint` subcommand.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// Files or directories to lint. Defaults to the project's script directory.
    pub paths: Vec<PathBuf>,

    /// Read the script from stdin instead of files.
    #[arg(long, conflicts_with = "paths")]
    pub stdin: bool,

    /// Rules to suppress, by name or code (e.g., `--allow no-var`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rules to promote to errors, by name or code (e.g., `--deny W101`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `bloxd normalize` subcommand.
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// JSON file holding one lint result or an array of them. Reads stdin if omitted.
    pub input: Option<PathBuf>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    init_logging(&global);

    let result = match cli.command {
        Command::Lint(ref args) => lint::run(args, &global),
        Command::Normalize(ref args) => normalize::run(args),
        Command::Rules => rules::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug`,
/// `--quiet` selects `error`, and the default is `warn`.
fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(global)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(global.color)
        .with_target(false)
        .try_init();
}

fn default_log_level(global: &GlobalArgs) -> &'static str {
    if global.verbose {
        "debug"
    } else if global.quiet {
        "error"
    } else {
        "warn"
    }
}
