//! Payment channel taxonomy and the keyword categorizer.
//!
//! Rules are a fixed, priority-ordered list of keyword sets. The first set
//! with any keyword appearing in the lower-cased description wins, so a
//! description mentioning both "paytm" and "card" still lands on UPI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment channel a transaction settles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Portal")]
    Portal,
    #[serde(rename = "Other")]
    Other,
}

impl Channel {
    /// All channels, in the fixed order used for table columns.
    pub const ALL: [Channel; 4] = [Channel::Cash, Channel::Upi, Channel::Portal, Channel::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Cash => "Cash",
            Channel::Upi => "UPI",
            Channel::Portal => "Portal",
            Channel::Other => "Other",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword rules in evaluation order. UPI outranks Portal outranks Cash.
const RULES: &[(Channel, &[&str])] = &[
    (Channel::Upi, &["upi", "gpay", "phonepe", "vpa", "paytm", "bhim"]),
    (Channel::Portal, &["portal", "razorpay", "stripe", "online", "card", "pos"]),
    (Channel::Cash, &["cash", "hand", "manual"]),
];

/// Categorize a free-text description into a payment channel.
///
/// Matching is case-insensitive substring containment; descriptions that hit
/// no rule fall through to [`Channel::Other`]. Total function, never fails.
pub fn categorize(description: &str) -> Channel {
    let desc = description.to_lowercase();
    for (channel, keywords) in RULES {
        if keywords.iter().any(|kw| desc.contains(kw)) {
            return *channel;
        }
    }
    Channel::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_upi_keywords() {
        assert_eq!(categorize("UPI/324411/payment"), Channel::Upi);
        assert_eq!(categorize("paid via GPay"), Channel::Upi);
        assert_eq!(categorize("PhonePe transfer"), Channel::Upi);
        assert_eq!(categorize("collect req vpa@okaxis"), Channel::Upi);
        assert_eq!(categorize("BHIM app"), Channel::Upi);
    }

    #[test]
    fn test_categorize_portal_keywords() {
        assert_eq!(categorize("Stripe Online Payment"), Channel::Portal);
        assert_eq!(categorize("razorpay settlement"), Channel::Portal);
        assert_eq!(categorize("POS terminal 4411"), Channel::Portal);
        assert_eq!(categorize("debit CARD swipe"), Channel::Portal);
    }

    #[test]
    fn test_categorize_cash_keywords() {
        assert_eq!(categorize("Cash in hand"), Channel::Cash);
        assert_eq!(categorize("manual entry"), Channel::Cash);
        assert_eq!(categorize("handed over at counter"), Channel::Cash);
    }

    #[test]
    fn test_categorize_default_other() {
        assert_eq!(categorize("Bank Transfer NEFT"), Channel::Other);
        assert_eq!(categorize(""), Channel::Other);
        assert_eq!(categorize("cheque #110292"), Channel::Other);
    }

    #[test]
    fn test_categorize_priority_upi_beats_portal_and_cash() {
        // All three keyword sets present; UPI rule runs first.
        assert_eq!(categorize("UPI-via-Paytm card txn"), Channel::Upi);
        assert_eq!(categorize("cash refund to paytm wallet"), Channel::Upi);
        // Portal vs Cash.
        assert_eq!(categorize("online order paid cash"), Channel::Portal);
    }

    #[test]
    fn test_categorize_case_insensitive() {
        assert_eq!(categorize("PAYTM"), Channel::Upi);
        assert_eq!(categorize("StRiPe"), Channel::Portal);
        assert_eq!(categorize("CASH"), Channel::Cash);
    }

    #[test]
    fn test_channel_serde_spelling() {
        assert_eq!(serde_json::to_string(&Channel::Upi).unwrap(), "\"UPI\"");
        assert_eq!(
            serde_json::from_str::<Channel>("\"Portal\"").unwrap(),
            Channel::Portal
        );
    }

    #[test]
    fn test_channel_display_matches_all_order() {
        let names: Vec<&str> = Channel::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Cash", "UPI", "Portal", "Other"]);
    }
}
