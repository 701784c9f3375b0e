//! Configuration constants for the TPC-DS generator
//!
//! This module centralizes the compiled-in defaults and the fixed table set
//! used throughout the application.

/// Default destination directory for exported Parquet files
pub const DEFAULT_OUTPUT_DIR: &str = "tpcds_data";

/// Default Parquet compression codec name
pub const DEFAULT_COMPRESSION: &str = "snappy";

/// Scale factor above which the interactive prompt asks for confirmation
///
/// TPC-DS output volume is roughly linear in the scale factor (sf 1 ~ 1 GB),
/// so anything past this threshold means terabytes of Parquet on local disk.
pub const CONFIRM_SCALE_THRESHOLD: f64 = 10_000.0;

/// The 24 tables of the standard TPC-DS schema, in export order.
///
/// This list is a static constant rather than a runtime query against the
/// engine's catalog so that output order stays deterministic and the export
/// loop is testable without a live engine. Alphabetical, matching the
/// ordering DuckDB's `information_schema.tables` reports after `dsdgen`.
pub const TPCDS_TABLES: [&str; 24] = [
    "call_center",
    "catalog_page",
    "catalog_returns",
    "catalog_sales",
    "customer",
    "customer_address",
    "customer_demographics",
    "date_dim",
    "household_demographics",
    "income_band",
    "inventory",
    "item",
    "promotion",
    "reason",
    "ship_mode",
    "store",
    "store_returns",
    "store_sales",
    "time_dim",
    "warehouse",
    "web_page",
    "web_returns",
    "web_sales",
    "web_site",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_list_has_24_unique_entries() {
        assert_eq!(TPCDS_TABLES.len(), 24);
        let unique: HashSet<_> = TPCDS_TABLES.iter().collect();
        assert_eq!(unique.len(), TPCDS_TABLES.len());
    }

    #[test]
    fn table_list_is_sorted() {
        let mut sorted = TPCDS_TABLES;
        sorted.sort_unstable();
        assert_eq!(sorted, TPCDS_TABLES);
    }

    #[test]
    fn table_list_covers_the_fact_tables() {
        for fact in [
            "store_sales",
            "store_returns",
            "catalog_sales",
            "catalog_returns",
            "web_sales",
            "web_returns",
            "inventory",
        ] {
            assert!(TPCDS_TABLES.contains(&fact), "missing fact table {fact}");
        }
    }
}
