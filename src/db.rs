//! Engine seam between the export workflow and the embedded database.
//!
//! The workflow only needs four operations from the engine, so they live
//! behind a trait; integration tests drive the exporter with a recording
//! fake instead of a real DuckDB session.

use std::path::Path;

use duckdb::Connection;
use tracing::debug;

use crate::error::TpcdsError;
use crate::export::Compression;

/// The capabilities the export workflow requires from an analytical engine.
pub trait TpcdsEngine {
    /// Install and load TPC-DS generation support into the session.
    fn load_tpcds(&self) -> Result<(), TpcdsError>;

    /// Materialize all standard TPC-DS tables at the given scale factor.
    fn generate(&self, scale_factor: f64) -> Result<(), TpcdsError>;

    /// Row count of a generated table.
    fn table_row_count(&self, table: &str) -> Result<u64, TpcdsError>;

    /// Export a generated table to a Parquet file at `path`.
    fn export_table(
        &self,
        table: &str,
        path: &Path,
        compression: Compression,
    ) -> Result<(), TpcdsError>;
}

impl<E: TpcdsEngine + ?Sized> TpcdsEngine for &E {
    fn load_tpcds(&self) -> Result<(), TpcdsError> {
        (**self).load_tpcds()
    }

    fn generate(&self, scale_factor: f64) -> Result<(), TpcdsError> {
        (**self).generate(scale_factor)
    }

    fn table_row_count(&self, table: &str) -> Result<u64, TpcdsError> {
        (**self).table_row_count(table)
    }

    fn export_table(
        &self,
        table: &str,
        path: &Path,
        compression: Compression,
    ) -> Result<(), TpcdsError> {
        (**self).export_table(table, path, compression)
    }
}

impl<E: TpcdsEngine + ?Sized> TpcdsEngine for Box<E> {
    fn load_tpcds(&self) -> Result<(), TpcdsError> {
        (**self).load_tpcds()
    }

    fn generate(&self, scale_factor: f64) -> Result<(), TpcdsError> {
        (**self).generate(scale_factor)
    }

    fn table_row_count(&self, table: &str) -> Result<u64, TpcdsError> {
        (**self).table_row_count(table)
    }

    fn export_table(
        &self,
        table: &str,
        path: &Path,
        compression: Compression,
    ) -> Result<(), TpcdsError> {
        (**self).export_table(table, path, compression)
    }
}

/// Production engine: an in-memory DuckDB session owning the generated data
/// for the duration of the run.
pub struct DuckDbEngine {
    conn: Connection,
}

impl DuckDbEngine {
    pub fn open_in_memory() -> Result<Self, TpcdsError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }
}

impl TpcdsEngine for DuckDbEngine {
    fn load_tpcds(&self) -> Result<(), TpcdsError> {
        debug!("installing and loading the tpcds extension");
        self.conn
            .execute_batch("INSTALL tpcds; LOAD tpcds;")
            .map_err(|e| TpcdsError::ExtensionLoad {
                message: e.to_string(),
            })
    }

    fn generate(&self, scale_factor: f64) -> Result<(), TpcdsError> {
        debug!(scale_factor, "calling dsdgen");
        self.conn
            .execute("CALL dsdgen(sf = ?)", duckdb::params![scale_factor])
            .map(|_| ())
            .map_err(|e| TpcdsError::Generation {
                scale_factor,
                message: e.to_string(),
            })
    }

    fn table_row_count(&self, table: &str) -> Result<u64, TpcdsError> {
        // Table names come from the static TPCDS_TABLES list, never from
        // user input, so interpolating the identifier is safe.
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn export_table(
        &self,
        table: &str,
        path: &Path,
        compression: Compression,
    ) -> Result<(), TpcdsError> {
        let sql = format!(
            "COPY {table} TO '{dest}' (FORMAT PARQUET, COMPRESSION '{codec}');",
            dest = escape_sql_literal(&path.to_string_lossy()),
            codec = compression.codec_name(),
        );
        self.conn
            .execute_batch(&sql)
            .map_err(|e| TpcdsError::Export {
                table: table.to_string(),
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

/// Double single quotes so a filesystem path can be embedded in a SQL
/// string literal.
fn escape_sql_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_sql_literal_doubles_quotes() {
        assert_eq!(escape_sql_literal("plain/path"), "plain/path");
        assert_eq!(escape_sql_literal("o'brien/data"), "o''brien/data");
    }
}
