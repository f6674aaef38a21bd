//! Daily date × channel aggregation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::channel::Channel;

/// One (date, channel, amount) cell in long form, for charting consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryCell {
    pub date: NaiveDate,
    pub channel: Channel,
    pub amount: f64,
}

/// Dense date × channel table of summed amounts.
///
/// Every date present in the input gets a row; every channel observed
/// anywhere in the input gets a column; cells with no contributing rows are
/// exactly `0.0`. Dates ascend; columns follow [`Channel::ALL`] order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySummary {
    dates: Vec<NaiveDate>,
    channels: Vec<Channel>,
    cells: BTreeMap<(NaiveDate, Channel), f64>,
}

impl DailySummary {
    /// Group `(date, channel, amount)` tuples, sum within each group, and
    /// densify over observed dates × observed channels.
    ///
    /// Empty input yields an empty summary with no rows or columns.
    pub fn aggregate<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Channel, f64)>,
    {
        let mut sums: BTreeMap<(NaiveDate, Channel), f64> = BTreeMap::new();
        let mut seen = BTreeSet::new();
        for (date, channel, amount) in rows {
            *sums.entry((date, channel)).or_insert(0.0) += amount;
            seen.insert(channel);
        }

        let dates: Vec<NaiveDate> = sums
            .keys()
            .map(|&(date, _)| date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let channels: Vec<Channel> = Channel::ALL
            .iter()
            .copied()
            .filter(|c| seen.contains(c))
            .collect();

        let mut cells = BTreeMap::new();
        for &date in &dates {
            for &channel in &channels {
                let amount = sums.get(&(date, channel)).copied().unwrap_or(0.0);
                cells.insert((date, channel), amount);
            }
        }

        Self {
            dates,
            channels,
            cells,
        }
    }

    /// Dates with at least one transaction, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Channels observed anywhere in the input, in column order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Summed amount for a cell; absent cells read as zero.
    pub fn amount(&self, date: NaiveDate, channel: Channel) -> f64 {
        self.cells.get(&(date, channel)).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Sum of every cell in the table.
    pub fn grand_total(&self) -> f64 {
        self.cells.values().sum()
    }

    /// Long-form rows (one per cell, zero cells included), row-major.
    pub fn long_rows(&self) -> Vec<SummaryCell> {
        let mut out = Vec::with_capacity(self.dates.len() * self.channels.len());
        for &date in &self.dates {
            for &channel in &self.channels {
                out.push(SummaryCell {
                    date,
                    channel,
                    amount: self.amount(date, channel),
                });
            }
        }
        out
    }

    /// Render as CSV: header row of channel names with a leading `Date`
    /// column, one row per date. Amounts keep their raw float rendering.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["Date".to_string()];
        header.extend(self.channels.iter().map(|c| c.to_string()));
        wtr.write_record(&header)?;

        for &date in &self.dates {
            let mut record = vec![date.to_string()];
            record.extend(
                self.channels
                    .iter()
                    .map(|&c| self.amount(date, c).to_string()),
            );
            wtr.write_record(&record)?;
        }

        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
