// Public API - only expose the runner module
pub mod runner;

// Internal modules - organized by subsystem
mod config;
mod db;
mod error;
mod export;
mod telemetry;


pub use config::{CONFIRM_SCALE_THRESHOLD, DEFAULT_COMPRESSION, DEFAULT_OUTPUT_DIR, TPCDS_TABLES};
pub use error::TpcdsError;
pub use export::Compression;
pub use telemetry::{RunStats, TableExport};
