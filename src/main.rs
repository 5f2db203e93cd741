use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use minegrid_rs::grid_scan::{GridScanPipeline, ScanConfig, TrailingEdge};
use minegrid_rs::logger;

use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "minegrid",
    about = "Find dark cells on a grid board image and print them as JSON",
    version
)]
struct Cli {
    /// Board image (PNG)
    image: PathBuf,

    /// Minimum darkness level to report, 0 (white) to 100 (black)
    #[arg(short = 'l', long = "min-level", default_value_t = 0,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    min_level: u8,

    /// Pixels sampled along each line when testing for whiteness
    #[arg(long = "sample-cap", default_value_t = 1000)]
    sample_cap: usize,

    /// Raster extent that closes the row boundary list
    #[arg(long = "row-edge", value_enum, default_value_t = RowEdge::Width)]
    row_edge: RowEdge,

    /// Pretty-print the JSON report
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RowEdge {
    Width,
    Height,
}

impl From<RowEdge> for TrailingEdge {
    fn from(edge: RowEdge) -> Self {
        match edge {
            RowEdge::Width => TrailingEdge::Width,
            RowEdge::Height => TrailingEdge::Height,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    let config = ScanConfig::builder()
        .min_level(cli.min_level)
        .sample_cap(cli.sample_cap)
        .row_trailing_edge(cli.row_edge.into())
        .build();
    let pipeline = GridScanPipeline::new(config);

    info!(
        min_level = pipeline.config().min_level,
        sample_cap = pipeline.config().sample_cap,
        row_edge = ?pipeline.config().row_trailing_edge,
        "Grid scan pipeline initialized"
    );

    let report = pipeline
        .report_file(&cli.image)
        .with_context(|| format!("scanning {}", cli.image.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
