//! End-to-end report pipeline: coerce, categorize, aggregate, total.

use chrono::NaiveDate;
use serde::Serialize;

use crate::channel::{Channel, categorize};
use crate::coerce::{parse_amount, parse_date};
use crate::error::ParseError;
use crate::summary::DailySummary;
use crate::table::RawTable;
use crate::totals::ChannelTotals;

/// A report row after coercion and channel labeling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub channel: Channel,
}

/// Everything downstream consumers need from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub rows: Vec<TransactionRow>,
    pub summary: DailySummary,
    pub totals: ChannelTotals,
}

/// Run the full pipeline over a raw table.
///
/// The three field selectors name columns of `table`; an unknown selector
/// fails with [`ParseError::MissingColumn`]. Each row's date and amount
/// cells are coerced (1-based row numbers in errors, header excluded) and
/// its description categorized; the first bad cell aborts the run with no
/// partial output. An empty table yields an empty summary and all-zero
/// totals.
pub fn run(
    table: &RawTable,
    date_field: &str,
    description_field: &str,
    amount_field: &str,
) -> Result<PipelineOutput, ParseError> {
    let date_idx = table
        .column_index(date_field)
        .ok_or_else(|| ParseError::MissingColumn(date_field.to_string()))?;
    let desc_idx = table
        .column_index(description_field)
        .ok_or_else(|| ParseError::MissingColumn(description_field.to_string()))?;
    let amount_idx = table
        .column_index(amount_field)
        .ok_or_else(|| ParseError::MissingColumn(amount_field.to_string()))?;

    let mut rows = Vec::with_capacity(table.len());
    for (i, cells) in table.rows().iter().enumerate() {
        let row = i + 1;

        let date_cell = cells[date_idx].as_str();
        let date = parse_date(date_cell).ok_or_else(|| ParseError::Date {
            row,
            field: date_field.to_string(),
            value: date_cell.to_string(),
        })?;

        let amount_cell = cells[amount_idx].as_str();
        let amount = parse_amount(amount_cell).ok_or_else(|| ParseError::Amount {
            row,
            field: amount_field.to_string(),
            value: amount_cell.to_string(),
        })?;

        let description = cells[desc_idx].clone();
        let channel = categorize(&description);

        rows.push(TransactionRow {
            date,
            description,
            amount,
            channel,
        });
    }

    let summary = DailySummary::aggregate(rows.iter().map(|r| (r.date, r.channel, r.amount)));
    let totals = ChannelTotals::collect(rows.iter().map(|r| (r.channel, r.amount)));

    Ok(PipelineOutput {
        rows,
        summary,
        totals,
    })
}
