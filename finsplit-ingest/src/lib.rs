//! finsplit-ingest: reading transaction reports from disk into a [`RawTable`].

pub mod report;

pub use finsplit_core::RawTable;
pub use report::{read_report, read_report_from_reader};
