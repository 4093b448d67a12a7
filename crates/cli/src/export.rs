//! # sccm-export
//!
//! Pulls inventory tables out of the SCCM database and writes them to one
//! workbook, with a `"Y"` inclusion marker column beside every original
//! column for later manual curation.

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;
use odbc_api::Environment;
use sccmkit_db::{Credentials, OdbcDataSource};
use sccmkit_pipeline::export_inventory;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Export SCCM inventory to a curatable workbook
#[derive(Parser)]
#[command(name = "sccm-export")]
#[command(author, version, about = "Export SCCM inventory to a curatable workbook", long_about = None)]
struct Cli {
    /// Credentials file (key=value lines)
    #[arg(short, long, default_value = "credentials.txt")]
    credentials: PathBuf,

    /// Output workbook
    #[arg(short, long, default_value = "sccm_data.xlsx")]
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

    let credentials = Credentials::from_file(&cli.credentials).with_context(|| {
        format!(
            "Failed to read credentials from: {}",
            cli.credentials.display()
        )
    })?;

    let environment = Environment::new()?;
    let mut source = OdbcDataSource::connect(&environment, &credentials.connection_string())
        .context("Failed to connect to the database")?;

    export_inventory(&mut source, &inventory_queries(), &cli.output)
        .with_context(|| format!("Failed to export inventory to: {}", cli.output.display()))?;

    drop(source);
    info!("database connection closed");
    Ok(())
}

/// The default inventory query set; one workbook sheet per entry, in this
/// order.
fn inventory_queries() -> IndexMap<String, String> {
    IndexMap::from([
        (
            "Hardware Inventory".to_string(),
            r"
                SELECT
                    v_GS_COMPUTER_SYSTEM.Name0 AS ComputerName,
                    v_GS_PROCESSOR.Name0 AS ProcessorName,
                    v_GS_PROCESSOR.NumberOfCores0 AS NumberOfCores,
                    v_GS_X86_PC_MEMORY.TotalPhysicalMemory0 AS TotalPhysicalMemory
                FROM
                    v_GS_COMPUTER_SYSTEM
                JOIN
                    v_GS_PROCESSOR ON v_GS_COMPUTER_SYSTEM.ResourceID = v_GS_PROCESSOR.ResourceID
                JOIN
                    v_GS_X86_PC_MEMORY ON v_GS_COMPUTER_SYSTEM.ResourceID = v_GS_X86_PC_MEMORY.ResourceID
            "
            .to_string(),
        ),
        (
            "Software Inventory".to_string(),
            r"
                SELECT
                    v_GS_ADD_REMOVE_PROGRAMS.DisplayName0 AS SoftwareName,
                    v_GS_ADD_REMOVE_PROGRAMS.Version0 AS Version,
                    v_GS_ADD_REMOVE_PROGRAMS.Publisher0 AS Publisher,
                    v_GS_COMPUTER_SYSTEM.Name0 AS ComputerName
                FROM
                    v_GS_ADD_REMOVE_PROGRAMS
                JOIN
                    v_GS_COMPUTER_SYSTEM ON v_GS_ADD_REMOVE_PROGRAMS.ResourceID = v_GS_COMPUTER_SYSTEM.ResourceID
            "
            .to_string(),
        ),
        (
            "Backup Status".to_string(),
            r"
                SELECT
                    v_GS_BACKUPSTATUS.BackupDateTime0 AS BackupDateTime,
                    v_GS_BACKUPSTATUS.BackupStatus0 AS BackupStatus,
                    v_GS_COMPUTER_SYSTEM.Name0 AS ComputerName
                FROM
                    v_GS_BACKUPSTATUS
                JOIN
                    v_GS_COMPUTER_SYSTEM ON v_GS_BACKUPSTATUS.ResourceID = v_GS_COMPUTER_SYSTEM.ResourceID
            "
            .to_string(),
        ),
    ])
}
