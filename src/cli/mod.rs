//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod generate;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// chart-harvest - component descriptors from Helm charts
///
/// Derive a component constructor from a Helm chart directory or archive.
#[derive(Parser, Debug)]
#[command(
    name = "chart-harvest",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Create a component version out of a Helm chart",
    long_about = "chart-harvest reads a Helm chart (directory or .tgz archive), records the chart \
                  itself as a local resource and adds one placeholder image resource for every \
                  'image:' line found in the chart's templates.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  chart-harvest generate -i ./mychart -c github.com/acme/mychart       \x1b[90m# Chart directory\x1b[0m\n   \
                  chart-harvest generate -i mychart-1.2.3.tgz -n mychart -c acme/app   \x1b[90m# Versioned archive\x1b[0m\n   \
                  chart-harvest generate -i ./mychart -c acme/app -o out --format json \x1b[90m# Also write out/\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a component constructor from a Helm chart
    Generate(GenerateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
