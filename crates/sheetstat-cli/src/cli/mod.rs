//! CLI for the sheetstat listing aggregator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use sheetstat_core::config;
use sheetstat_core::status::{ListingKind, Product};

use commands::{run_completions, run_fetch, run_status};

/// Top-level CLI for the sheetstat listing aggregator.
#[derive(Debug, Parser)]
#[command(name = "sheetstat")]
#[command(about = "sheetstat: per-sheet availability from map-sheet listing files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Map product whose listings should be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProductArg {
    /// Open Series Map 1:50,000 (GeoTIFF + PDF + JPEG listings).
    #[value(name = "osm-50k")]
    Osm50k,
    /// CMPDI 1:5,000 (PDF listing only).
    #[value(name = "cmpdi-5k")]
    Cmpdi5k,
}

impl From<ProductArg> for Product {
    fn from(arg: ProductArg) -> Self {
        match arg {
            ProductArg::Osm50k => Product::Osm50k,
            ProductArg::Cmpdi5k => Product::Cmpdi5k,
        }
    }
}

/// Listing kind for single-listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Pdf,
    Gtiff,
    Jpg,
}

impl From<KindArg> for ListingKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Pdf => ListingKind::Pdf,
            KindArg::Gtiff => ListingKind::Gtiff,
            KindArg::Jpg => ListingKind::Jpg,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch all listings for a product and show per-sheet availability.
    Status {
        /// Which product's listings to aggregate.
        product: ProductArg,
        /// Print the status map as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Fetch and print one parsed listing (debugging aid).
    Fetch {
        /// Which product the listing belongs to.
        product: ProductArg,
        /// Which listing to fetch.
        kind: KindArg,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Status { product, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_status(&cfg, product.into(), json).await?;
            }
            CliCommand::Fetch { product, kind } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_fetch(&cfg, product.into(), kind.into()).await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
