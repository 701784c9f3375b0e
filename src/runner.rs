//! High-level runner API for the TPC-DS generator.
//!
//! This module provides the public interface that encapsulates session
//! setup and the generation/export workflow.
//!
//! This is the primary API for external users and for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use crate::db::DuckDbEngine;
use crate::error::TpcdsError;
use crate::export::{Compression, ExportConfig, Exporter};
use crate::telemetry::TableExport;

/// Arguments for running a generate-and-export operation
pub struct GenerateArgs {
    /// Validated positive scale factor (roughly the dataset size in GB)
    pub scale_factor: f64,

    /// Destination directory, created if absent
    pub output_dir: PathBuf,

    /// Parquet compression codec applied to every file
    pub compression: Compression,

    /// Suppress the progress bar
    pub quiet: bool,

    // Test-only: inject a fake engine instead of opening a DuckDB session
    #[cfg(test)]
    pub test_engine: Option<Box<dyn crate::db::TpcdsEngine>>,
}

/// Result of a completed generate-and-export operation
#[derive(Debug)]
pub struct GenerateReport {
    pub scale_factor: f64,
    pub output_dir: PathBuf,
    pub tables_exported: usize,
    pub total_rows: u64,
    pub total_bytes: u64,
    pub duration: Duration,
    pub table_exports: Vec<TableExport>,
}

impl GenerateReport {
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Run a generate-and-export operation with the specified arguments
///
/// This is the main entry point. It opens a fresh in-memory DuckDB session,
/// loads the `tpcds` extension, generates all 24 standard tables at
/// `scale_factor`, and exports each one to
/// `<output_dir>/<table>.parquet` using the configured codec.
///
/// # Example
///
/// ```no_run
/// use tpcds_datagen::runner::{run_generate, GenerateArgs};
/// use tpcds_datagen::Compression;
///
/// # fn example() -> Result<(), tpcds_datagen::TpcdsError> {
/// let report = run_generate(GenerateArgs {
///     scale_factor: 1.0,
///     output_dir: "tpcds_data".into(),
///     compression: Compression::Snappy,
///     quiet: true,
/// })?;
/// println!("{} tables, {} rows", report.tables_exported, report.total_rows);
/// # Ok(())
/// # }
/// ```
pub fn run_generate(args: GenerateArgs) -> Result<GenerateReport, TpcdsError> {
    let config = ExportConfig {
        scale_factor: args.scale_factor,
        output_dir: args.output_dir,
        compression: args.compression,
        quiet: args.quiet,
    };

    // Run against the injected engine in tests, a real session otherwise
    #[cfg(test)]
    let outcome = if let Some(engine) = args.test_engine {
        Exporter::new(engine).run(&config)?
    } else {
        Exporter::new(DuckDbEngine::open_in_memory()?).run(&config)?
    };

    #[cfg(not(test))]
    let outcome = Exporter::new(DuckDbEngine::open_in_memory()?).run(&config)?;

    Ok(GenerateReport {
        scale_factor: config.scale_factor,
        output_dir: config.output_dir,
        tables_exported: outcome.stats.tables_exported,
        total_rows: outcome.stats.total_rows,
        total_bytes: outcome.stats.total_bytes,
        duration: outcome.duration,
        table_exports: outcome.table_exports,
    })
}
