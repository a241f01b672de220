//! Report rendering for sweep results.
//!
//! [`CsvReport`] writes, for every table, a blank separator line, a label
//! line, the seven-column header and one comma-separated row per run.
//! [`JsonReport`] writes one JSON object per table on a single line.

use pricer_pricing::mc::{ReportSink, RunResult, SamplingStrategy, REPORT_COLUMNS};
use serde::Serialize;
use std::io::Write;

use crate::error::CliError;

/// Format-neutral title of a strategy's table.
pub fn table_title(strategy: SamplingStrategy) -> String {
    format!(
        "Stochastic BSM Simulation using {} Method.",
        strategy.title()
    )
}

/// Label line printed above a strategy's CSV table.
pub fn table_label(strategy: SamplingStrategy) -> String {
    format!("CSV Data table for {}", table_title(strategy))
}

/// Writes the closed-form price line.
pub fn write_deterministic_price<W: Write>(out: &mut W, price: f64) -> std::io::Result<()> {
    writeln!(out, "BSM Deterministic Call Price: {}", price)
}

/// Comma-separated report tables.
///
/// Free-form lines (price, blank separator, label) go straight to the
/// output; the header and rows go through a `csv::Writer` borrowed for
/// each record.
pub struct CsvReport<W: Write> {
    out: W,
}

impl<W: Write> CsvReport<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the closed-form price line.
    pub fn write_deterministic_price(&mut self, price: f64) -> Result<(), CliError> {
        write_deterministic_price(&mut self.out, price)?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, CliError> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn records(&mut self) -> csv::Writer<&mut W> {
        csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.out)
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    type Error = CliError;

    fn begin_table(&mut self, strategy: SamplingStrategy) -> Result<(), Self::Error> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", table_label(strategy))?;
        let mut records = self.records();
        records.write_record(REPORT_COLUMNS)?;
        records.flush()?;
        Ok(())
    }

    fn write_row(&mut self, result: &RunResult) -> Result<(), Self::Error> {
        let mut records = self.records();
        records.serialize(result)?;
        records.flush()?;
        Ok(())
    }

    fn end_table(&mut self) -> Result<(), Self::Error> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    label: String,
    rows: &'a [RunResult],
}

#[derive(Serialize)]
struct JsonPrice {
    bsm_deterministic_call_price: f64,
}

/// Line-delimited JSON report tables.
pub struct JsonReport<W: Write> {
    out: W,
    label: String,
    rows: Vec<RunResult>,
}

impl<W: Write> JsonReport<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            label: String::new(),
            rows: Vec::new(),
        }
    }

    /// Writes the closed-form price as a one-line JSON object.
    pub fn write_deterministic_price(&mut self, price: f64) -> Result<(), CliError> {
        serde_json::to_writer(
            &mut self.out,
            &JsonPrice {
                bsm_deterministic_call_price: price,
            },
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, CliError> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    type Error = CliError;

    fn begin_table(&mut self, strategy: SamplingStrategy) -> Result<(), Self::Error> {
        self.label = table_title(strategy);
        self.rows.clear();
        Ok(())
    }

    fn write_row(&mut self, result: &RunResult) -> Result<(), Self::Error> {
        self.rows.push(*result);
        Ok(())
    }

    fn end_table(&mut self) -> Result<(), Self::Error> {
        let table = JsonTable {
            label: std::mem::take(&mut self.label),
            rows: &self.rows,
        };
        serde_json::to_writer(&mut self.out, &table)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
