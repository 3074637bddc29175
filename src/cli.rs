use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::assembler::Cleaner;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "notify-offenses")]
#[command(author, version, about = "Scan source files for declarative inline code offenses")]
#[command(long_about = "Scans HTML, template and script files line by line with a configurable \
    set of offense detectors and reports every match with its file, line and column.\n\n\
    Exit codes:\n  \
    0 - No offenses found\n  \
    1 - Offenses found\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Paths to scan (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// File extensions to scan (comma-separated, e.g., html,cfm,js)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Run pre-defined rules alongside user rules (config default: on)
    #[arg(long, overrides_with = "no_force")]
    pub force: bool,

    /// Only run user rules; skip pre-defined rules when user rules are given
    #[arg(long)]
    pub no_force: bool,

    /// Let a user rule suppress the pre-defined rule of the same type
    #[arg(long = "override")]
    pub override_builtin: bool,

    /// Spaces per leading tab when computing columns
    #[arg(long)]
    pub tabwidth: Option<usize>,

    /// Whitespace cleaning of reported line text
    /// [possible values: none, trailing, all, all-tabs, all-spaces]
    #[arg(long)]
    pub cleaner: Option<Cleaner>,

    /// Console output format
    /// [possible values: plaintext, decoratedplaintext, minimalxml, json]
    #[arg(long)]
    pub stout: Option<OutputFormat>,

    /// File output format (used with --save)
    /// [possible values: plaintext, decoratedplaintext, minimalxml, json]
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Additionally write the rendered report to the destination file
    #[arg(long)]
    pub save: bool,

    /// Destination file for --save
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
