//! Export of the experiment table.
//!
//! This module provides exporters for formats that downstream tools consume
//! read-only: delimited text for spreadsheets and pandas, JSON for anything
//! structured.

pub mod csv;
pub mod json;

use std::path::Path;

use crate::error::MetricsError;
use crate::experiment::ExperimentTable;

/// Trait for exporting an experiment table to a destination format.
pub trait TableExporter {
    /// Export the table to the configured destination.
    fn export(&self, table: &ExperimentTable) -> Result<(), MetricsError>;
}

/// Export the table to CSV.
///
/// # Example
/// ```no_run
/// use linksim_metrics::experiment::ExperimentTable;
/// use linksim_metrics::export::export_csv;
///
/// let table = ExperimentTable::default();
/// export_csv(&table, "results/sweep.csv").unwrap();
/// ```
pub fn export_csv(table: &ExperimentTable, path: impl AsRef<Path>) -> Result<(), MetricsError> {
    csv::CsvExporter::new(path.as_ref()).export(table)
}

/// Export the table to JSON.
///
/// # Example
/// ```no_run
/// use linksim_metrics::experiment::ExperimentTable;
/// use linksim_metrics::export::export_json;
///
/// let table = ExperimentTable::default();
/// export_json(&table, "results/sweep.json", true).unwrap();
/// ```
pub fn export_json(
    table: &ExperimentTable,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), MetricsError> {
    json::JsonExporter::new(path.as_ref(), pretty).export(table)
}
