//! # Zone map CLI
//!
//! Loads the configured reference tables and area geometry, renders the map as SVG and prints
//! legends and info box texts.
//!
//! ## Example
//! ```no_run
//! use clap::Parser;
//! use plzmap_cli::{Cli, run};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse_from(["plzmap", "--mode", "gebiet", "--legend"]);
//!     let config = plzmap::kernel::config::load_map_config(cli.config.as_deref())?;
//!     run(&cli, config, &mut std::io::stdout().lock()).await
//! }
//! ```

mod args;

pub use crate::args::Cli;

use anyhow::{Context, Result};
use plzmap::MapView;
use plzmap::domain::config::MapConfig;
use plzmap::domain::{Legend, PostalCode};
use plzmap::render::SvgSurface;
use std::io::Write;
use tracing::{info, warn};

/// Executes one CLI invocation against `config`, writing textual output to `out`.
///
/// # Errors
/// Fails if the area file or the reference tables cannot be loaded, or if an output cannot be
/// written.
pub async fn run(cli: &Cli, mut config: MapConfig, out: &mut impl Write) -> Result<()> {
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let view = MapView::open(&config).await.context("Failed to open the area features")?;
    let report = view.load().await.context("Failed to load the reference tables")?;
    if !report.is_clean() {
        warn!(issues = report.issue_count(), "Reference tables are inconsistent, affected areas stay unstyled");
    }

    if let Some(path) = &cli.out {
        let mut svg = SvgSurface::new(view.features(), view.style().svg_width);
        let rendered = view.render(&mut svg)?;
        tokio::fs::write(path, svg.to_string())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), styled = rendered.styled, fallback = rendered.fallback, "Map written");
    }

    if cli.legend {
        write_legend(out, &view.build_legend(view.mode())?)?;
    }

    for plz in &cli.describe {
        writeln!(out, "{}\n", view.describe_hover(&PostalCode::new(plz))?)?;
    }

    Ok(())
}

fn write_legend(out: &mut impl Write, legend: &Legend) -> std::io::Result<()> {
    writeln!(out, "{}", legend.title)?;
    for entry in legend {
        writeln!(out, "  {:<9} {}", entry.color.as_str(), entry.label)?;
    }
    writeln!(out)
}
