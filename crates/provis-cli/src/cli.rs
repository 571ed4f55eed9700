use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "provis - A command-line tool for summarizing and viewing Protein Data Bank structure files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute summary statistics for a PDB structure file.
    Stats(StatsArgs),
    /// Generate a standalone viewer page for a PDB structure file.
    View(ViewArgs),
}

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Path to the input structure file (e.g., protein.pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Output format for the statistics report.
    /// Overrides the config file. One of: text, json.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `view` subcommand.
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Path to the input structure file (e.g., protein.pdb).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the generated HTML viewer page.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Visualization style, overriding the config file.
    /// One of: cartoon, stick, sphere, surface.
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Color scheme, overriding the config file.
    /// One of: chain, ssPyMol, element, hydrophobicity, bfactor, spectrum, rainbow.
    #[arg(long = "color-scheme", value_name = "SCHEME")]
    pub color_scheme: Option<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
