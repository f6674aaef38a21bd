use thiserror::Error;

/// Errors raised while coercing report cells into typed values.
///
/// The pipeline fails on the first bad cell rather than skipping rows;
/// silently dropping financial rows would corrupt the totals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A date cell did not match any recognised format.
    #[error("row {row}: cannot parse {field} value {value:?} as a date")]
    Date {
        row: usize,
        field: String,
        value: String,
    },

    /// An amount cell is not a finite number.
    #[error("row {row}: cannot parse {field} value {value:?} as an amount")]
    Amount {
        row: usize,
        field: String,
        value: String,
    },

    /// A caller-selected column is absent from the report header.
    #[error("column {0:?} not found in report")]
    MissingColumn(String),
}
