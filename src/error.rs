//! Error taxonomy for the generation and export workflow.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating and exporting TPC-DS data.
///
/// Engine-side messages are carried as strings so that the variants can be
/// produced by any [`crate::db::TpcdsEngine`] implementation, not just the
/// DuckDB-backed one.
#[derive(Debug, Error)]
pub enum TpcdsError {
    /// The scale-factor text was non-blank but not a positive number
    #[error("invalid scale factor '{input}': expected a positive number")]
    InvalidInput { input: String },

    /// The compression name is not one of the supported codecs
    #[error("unsupported compression '{input}': expected snappy, gzip or zstd")]
    InvalidCompression { input: String },

    /// The engine could not install or load the `tpcds` extension
    #[error("failed to load the TPC-DS extension: {message}")]
    ExtensionLoad { message: String },

    /// The engine rejected the scale factor or ran out of resources
    #[error("TPC-DS generation at scale factor {scale_factor} failed: {message}")]
    Generation { scale_factor: f64, message: String },

    /// A single table's export failed; earlier exports stay on disk
    #[error("failed to export table '{table}' to {path:?}: {message}")]
    Export {
        table: String,
        path: PathBuf,
        message: String,
    },

    /// Filesystem failure outside the engine (directory creation, stat)
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other engine failure (opening the session, catalog queries)
    #[error("database engine error: {source}")]
    Engine {
        #[from]
        source: duckdb::Error,
    },
}

impl TpcdsError {
    /// Name of the table whose export failed, if this is an export failure.
    pub fn failed_table(&self) -> Option<&str> {
        match self {
            TpcdsError::Export { table, .. } => Some(table),
            _ => None,
        }
    }
}
