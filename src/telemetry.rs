use std::time::Duration;

/// Outcome of a single table's export
#[derive(Debug, Clone)]
pub struct TableExport {
    pub table: &'static str,
    pub rows: u64,
    pub bytes: u64,
    pub duration: Duration,
}

impl TableExport {
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Statistics aggregated across all exported tables
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub tables_exported: usize,
    pub total_rows: u64,
    pub total_bytes: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with a completed table export
    pub fn update(&mut self, export: &TableExport) {
        self.tables_exported += 1;
        self.total_rows += export.rows;
        self.total_bytes += export.bytes;
    }

    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / (1024.0 * 1024.0)
    }
}
