//! CSV export and import for the experiment table.
//!
//! The file carries one header row matching the [`ExperimentRow`] field
//! names, then one data row per utilization value in sweep order. Delay
//! columns use the textual form of [`Delay`] (`inf`, `undefined`, or a
//! decimal), so a written table parses back losslessly.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::MetricsError;
use crate::experiment::{ExperimentRow, ExperimentTable};
use crate::export::TableExporter;

/// The fixed header row, in the documented column order.
pub const CSV_HEADER: &str = "rho,arrival_rate_pkts_s,service_rate_pkts_s,tx_delay_s,\
sim_total_mm1_s,sim_queue_mm1_s,sim_total_md1_s,sim_queue_md1_s,\
analytic_mm1_total_s,analytic_mm1_queue_s";

/// CSV exporter for the experiment table.
#[derive(Debug)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Create a new CSV exporter writing to `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl TableExporter for CsvExporter {
    fn export(&self, table: &ExperimentTable) -> Result<(), MetricsError> {
        let mut file = File::create(&self.path)?;
        writeln!(file, "{CSV_HEADER}")?;
        for row in table.rows() {
            writeln!(file, "{}", format_row(row))?;
        }
        Ok(())
    }
}

fn format_row(row: &ExperimentRow) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{}",
        row.rho,
        row.arrival_rate_pkts_s,
        row.service_rate_pkts_s,
        row.tx_delay_s,
        row.sim_total_mm1_s,
        row.sim_queue_mm1_s,
        row.sim_total_md1_s,
        row.sim_queue_md1_s,
        row.analytic_mm1_total_s,
        row.analytic_mm1_queue_s,
    )
}

/// Parse one data row.
pub fn parse_row(line: &str) -> Result<ExperimentRow, MetricsError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 10 {
        return Err(MetricsError::ParseError(format!(
            "expected 10 fields, got {}",
            fields.len()
        )));
    }

    let number = |field: &str| {
        field
            .trim()
            .parse::<f64>()
            .map_err(|_| MetricsError::ParseError(format!("invalid number: {field:?}")))
    };

    Ok(ExperimentRow {
        rho: number(fields[0])?,
        arrival_rate_pkts_s: number(fields[1])?,
        service_rate_pkts_s: number(fields[2])?,
        tx_delay_s: number(fields[3])?,
        sim_total_mm1_s: fields[4].parse()?,
        sim_queue_mm1_s: fields[5].parse()?,
        sim_total_md1_s: fields[6].parse()?,
        sim_queue_md1_s: fields[7].parse()?,
        analytic_mm1_total_s: fields[8].parse()?,
        analytic_mm1_queue_s: fields[9].parse()?,
    })
}

/// Read a previously exported table back from disk.
pub fn read_csv(path: impl AsRef<Path>) -> Result<ExperimentTable, MetricsError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .ok_or_else(|| MetricsError::ParseError("empty file".to_string()))??;
    if header != CSV_HEADER {
        return Err(MetricsError::ParseError(format!(
            "unexpected header: {header:?}"
        )));
    }

    let mut table = ExperimentTable::default();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        table.push(parse_row(&line)?);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::Delay;

    fn sample_row() -> ExperimentRow {
        ExperimentRow {
            rho: 0.5,
            arrival_rate_pkts_s: 416.6666666666667,
            service_rate_pkts_s: 833.3333333333334,
            tx_delay_s: 0.0012,
            sim_total_mm1_s: Delay::Finite(0.0024371),
            sim_queue_mm1_s: Delay::Finite(0.0012105),
            sim_total_md1_s: Delay::Finite(0.0018002),
            sim_queue_md1_s: Delay::Finite(0.0006002),
            analytic_mm1_total_s: Delay::Finite(0.0024),
            analytic_mm1_queue_s: Delay::Finite(0.0012),
        }
    }

    #[test]
    fn test_row_round_trip() {
        let row = sample_row();
        let parsed = parse_row(&format_row(&row)).unwrap();
        assert_eq!(parsed, row);
    }

    #[test]
    fn test_row_round_trip_with_sentinels() {
        let mut row = sample_row();
        row.sim_total_mm1_s = Delay::Undefined;
        row.analytic_mm1_total_s = Delay::Infinite;
        row.analytic_mm1_queue_s = Delay::Infinite;

        let parsed = parse_row(&format_row(&row)).unwrap();
        assert_eq!(parsed, row);
    }

    #[test]
    fn test_parse_rejects_short_rows() {
        assert!(parse_row("0.5,1.0").is_err());
    }

    #[test]
    fn test_csv_file_round_trip() {
        let mut table = ExperimentTable::default();
        table.push(sample_row());
        let mut second = sample_row();
        second.rho = 0.95;
        second.analytic_mm1_total_s = Delay::Infinite;
        table.push(second);

        let path = std::env::temp_dir().join("linksim_test_sweep.csv");
        CsvExporter::new(&path).export(&table).unwrap();

        let back = read_csv(&path).unwrap();
        assert_eq!(back, table);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        let path = std::env::temp_dir().join("linksim_test_bad_header.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();

        assert!(read_csv(&path).is_err());

        std::fs::remove_file(&path).ok();
    }
}
