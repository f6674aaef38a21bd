//! finsplit-core: channel categorization, daily aggregation, and totals
//! for tabular transaction reports.

pub mod channel;
pub mod coerce;
pub mod error;
pub mod pipeline;
pub mod summary;
pub mod table;
pub mod totals;

pub use channel::{Channel, categorize};
pub use error::ParseError;
pub use pipeline::{PipelineOutput, TransactionRow, run};
pub use summary::{DailySummary, SummaryCell};
pub use table::RawTable;
pub use totals::ChannelTotals;
