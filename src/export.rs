use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::TPCDS_TABLES;
use crate::db::TpcdsEngine;
use crate::error::TpcdsError;
use crate::telemetry::{RunStats, TableExport};

/// Parquet compression codec applied uniformly to every exported file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    Snappy,
    Gzip,
    Zstd,
}

impl Compression {
    /// Parse codec from string (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, TpcdsError> {
        match s.to_lowercase().as_str() {
            "snappy" => Ok(Compression::Snappy),
            "gzip" => Ok(Compression::Gzip),
            "zstd" => Ok(Compression::Zstd),
            _ => Err(TpcdsError::InvalidCompression {
                input: s.to_string(),
            }),
        }
    }

    /// Codec name as DuckDB's COPY statement expects it
    pub fn codec_name(self) -> &'static str {
        match self {
            Compression::Snappy => "snappy",
            Compression::Gzip => "gzip",
            Compression::Zstd => "zstd",
        }
    }
}

/// Configuration for one generate-and-export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub scale_factor: f64,
    pub output_dir: PathBuf,
    pub compression: Compression,
    pub quiet: bool,
}

/// Result of a completed generate-and-export run
#[derive(Debug)]
pub struct ExportOutcome {
    pub table_exports: Vec<TableExport>,
    pub stats: RunStats,
    pub duration: Duration,
}

/// The Exporter orchestrates the generation and export workflow.
pub struct Exporter<E> {
    engine: E,
}

impl<E: TpcdsEngine> Exporter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Run the complete workflow:
    /// 1. Create the output directory (idempotent)
    /// 2. Load TPC-DS generation support into the engine
    /// 3. Generate all tables at the configured scale factor
    /// 4. Export each table, in declared list order, to Parquet
    ///
    /// Generation fully completes before the first export begins. Exports
    /// are independent: a failure aborts the run but leaves files already
    /// written on disk.
    pub fn run(&self, config: &ExportConfig) -> Result<ExportOutcome, TpcdsError> {
        let start_time = Instant::now();

        fs::create_dir_all(&config.output_dir).map_err(|e| TpcdsError::Io {
            path: config.output_dir.clone(),
            source: e,
        })?;
        info!("output directory ready: {}", config.output_dir.display());

        self.engine.load_tpcds()?;
        info!("TPC-DS extension loaded");

        info!(
            "generating TPC-DS schema at scale factor {}",
            config.scale_factor
        );
        self.engine.generate(config.scale_factor)?;
        info!("schema generated: {} tables", TPCDS_TABLES.len());

        let progress = if config.quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(TPCDS_TABLES.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "[{elapsed_precise}] Tables: [{bar:30.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap()
                    .progress_chars("=>-"),
            );
            bar
        };

        let mut table_exports = Vec::with_capacity(TPCDS_TABLES.len());
        let mut stats = RunStats::new();

        for table in TPCDS_TABLES {
            progress.set_message(table);
            let export = self.export_one(table, config)?;
            info!(
                "exported '{}': {:.2} MB in {:.2}s ({} rows)",
                table,
                export.megabytes(),
                export.duration.as_secs_f64(),
                export.rows,
            );
            stats.update(&export);
            table_exports.push(export);
            progress.inc(1);
        }

        progress.finish_with_message("done");

        Ok(ExportOutcome {
            table_exports,
            stats,
            duration: start_time.elapsed(),
        })
    }

    fn export_one(
        &self,
        table: &'static str,
        config: &ExportConfig,
    ) -> Result<TableExport, TpcdsError> {
        let path = table_output_path(&config.output_dir, table);
        let rows = self.engine.table_row_count(table)?;

        let started = Instant::now();
        self.engine.export_table(table, &path, config.compression)?;
        let duration = started.elapsed();

        // File size is reporting-only; engines that don't write real files
        // (test fakes) simply show 0 bytes.
        let bytes = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Ok(TableExport {
            table,
            rows,
            bytes,
            duration,
        })
    }
}

/// Destination path for a table's Parquet file
pub fn table_output_path(output_dir: &Path, table: &str) -> PathBuf {
    output_dir.join(format!("{table}.parquet"))
}
