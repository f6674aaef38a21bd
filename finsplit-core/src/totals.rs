//! Whole-report totals per payment channel.

use std::collections::BTreeMap;

use crate::channel::Channel;

/// Summed amount per channel across the entire dataset.
///
/// All four channels are always present; channels with no matching rows
/// total zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTotals {
    totals: BTreeMap<Channel, f64>,
}

impl ChannelTotals {
    /// Sum `(channel, amount)` pairs into per-channel totals.
    pub fn collect<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Channel, f64)>,
    {
        let mut totals: BTreeMap<Channel, f64> =
            Channel::ALL.iter().map(|&c| (c, 0.0)).collect();
        for (channel, amount) in rows {
            *totals.entry(channel).or_insert(0.0) += amount;
        }
        Self { totals }
    }

    /// Total for one channel.
    pub fn get(&self, channel: Channel) -> f64 {
        self.totals.get(&channel).copied().unwrap_or(0.0)
    }

    /// Sum over all channels.
    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Per-channel totals in [`Channel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

impl Default for ChannelTotals {
    fn default() -> Self {
        Self::collect(std::iter::empty())
    }
}
