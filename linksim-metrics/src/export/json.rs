//! JSON export for the experiment table.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::MetricsError;
use crate::experiment::ExperimentTable;
use crate::export::TableExporter;

/// JSON exporter for the experiment table.
#[derive(Debug)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter writing to `path`.
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
        }
    }
}

impl TableExporter for JsonExporter {
    fn export(&self, table: &ExperimentTable) -> Result<(), MetricsError> {
        let file = File::create(&self.path)?;
        if self.pretty {
            serde_json::to_writer_pretty(file, table)?;
        } else {
            serde_json::to_writer(file, table)?;
        }
        Ok(())
    }
}
