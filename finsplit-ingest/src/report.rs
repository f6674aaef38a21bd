//! CSV report reader.
//!
//! The first record is the header; every later record becomes a data row.
//! Ragged records are tolerated: short rows are padded with empty cells and
//! long rows truncated to the header width, so the pipeline decides what a
//! blank cell means instead of the reader dropping the row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use finsplit_core::RawTable;

/// Read a CSV report file into a [`RawTable`].
pub fn read_report(path: impl AsRef<Path>) -> Result<RawTable> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening report {}", path.display()))?;
    read_report_from_reader(file)
        .with_context(|| format!("reading report {}", path.display()))
}

/// Read a CSV report from any reader. A report with no header row is an
/// error; a header-only report is an empty table.
pub fn read_report_from_reader(reader: impl Read) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(record) => record?,
        None => bail!("report is empty: no header row"),
    };

    let columns: Vec<String> = header.iter().map(|c| c.trim().to_string()).collect();
    let mut table = RawTable::new(columns);

    for record in records {
        let record = record?;
        table.push_row(record.iter().map(|c| c.to_string()).collect());
    }

    Ok(table)
}
