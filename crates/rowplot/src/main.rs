// File: crates/rowplot/src/main.rs
// Summary: Loads a delimited table and renders one of its rows against the reference row as SVG.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rowplot_core::{PlotConfig, RowRenderer, Table};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PlotConfig::parse().validated().context("bad arguments")?;

    let table = Table::from_path(&config.input, config.delimiter)
        .with_context(|| format!("failed to load table '{}'", config.input.display()))?;
    info!("Loaded {} rows from {}", table.len(), config.input.display());

    let renderer = RowRenderer::new(table, config.decimal_separator)
        .context("failed to read the reference row")?
        .with_options(config.render_options());

    renderer
        .render_row(config.row, &config.y_label, &config.output, config.scale_y)
        .with_context(|| format!("failed to render row {} to '{}'", config.row, config.output.display()))?;

    Ok(())
}
