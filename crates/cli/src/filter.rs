//! # sccm-filter
//!
//! Re-reads a curated export workbook and writes the subset of rows whose
//! marker columns all still read `"Y"`, with the markers dropped.

use anyhow::{Context, Result};
use clap::Parser;
use sccmkit_pipeline::filter_workbook;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filter a curated SCCM export workbook by its marker columns
#[derive(Parser)]
#[command(name = "sccm-filter")]
#[command(author, version, about = "Filter a curated SCCM export workbook", long_about = None)]
struct Cli {
    /// Input workbook (as produced by sccm-export)
    #[arg(short, long, default_value = "sccm_data.xlsx")]
    input: PathBuf,

    /// Output workbook
    #[arg(short, long, default_value = "filtered_sccm_data.xlsx")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    filter_workbook(&cli.input, &cli.output).with_context(|| {
        format!(
            "Failed to filter {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sccm-filter"]);
        assert_eq!(cli.input, PathBuf::from("sccm_data.xlsx"));
        assert_eq!(cli.output, PathBuf::from("filtered_sccm_data.xlsx"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["sccm-filter", "-i", "curated.xlsx", "-o", "subset.xlsx"]);
        assert_eq!(cli.input, PathBuf::from("curated.xlsx"));
        assert_eq!(cli.output, PathBuf::from("subset.xlsx"));
    }
}
