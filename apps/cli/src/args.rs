//! Command-line interface of the `plzmap` binary.

use clap::Parser;
use plzmap::domain::DisplayMode;
use std::path::PathBuf;

/// Renders the PLZ zone map and answers lookups against the reference tables.
#[derive(Debug, Parser)]
#[command(name = "plzmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Choropleth of postal code areas by delivery zone or Liefergebiet")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML). Defaults to ./plzmap.* if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display mode: `zone` or `gebiet`. Overrides the configured mode.
    #[arg(short, long)]
    pub mode: Option<DisplayMode>,

    /// Write the rendered map as SVG to this file.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the info box text for these postal codes.
    #[arg(short, long, num_args = 1..)]
    pub describe: Vec<String>,

    /// Print the legend of the active mode.
    #[arg(short, long)]
    pub legend: bool,
}
