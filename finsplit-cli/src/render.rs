//! Terminal rendering: currency figures and the daily breakdown table.
//!
//! Formatting lives here on purpose; the core returns raw numbers.

use finsplit_core::DailySummary;

const AMOUNT_WIDTH: usize = 12;

/// Format an amount as a rupee figure: two decimals, comma grouping.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}₹{grouped}.{frac:02}")
}

/// Print the daily breakdown: one line per date, one column per channel.
pub fn print_summary(summary: &DailySummary) {
    if summary.is_empty() {
        println!("No transactions.");
        return;
    }

    print!("{:<12}", "Date");
    for channel in summary.channels() {
        print!("{:>AMOUNT_WIDTH$}", channel.as_str());
    }
    println!();

    for &date in summary.dates() {
        print!("{:<12}", date.to_string());
        for &channel in summary.channels() {
            print!("{:>AMOUNT_WIDTH$.2}", summary.amount(date, channel));
        }
        println!();
    }
}
