use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use finsplit_core::Channel;
use finsplit_ingest::read_report;

mod render;

#[derive(Parser, Debug)]
#[command(name = "finsplit", version, about = "Daily Cash/UPI/Portal split for transaction reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a CSV report: headline totals plus the daily breakdown
    Report {
        /// Path to the CSV report
        #[arg(long)]
        csv: PathBuf,

        /// Name of the date column
        #[arg(long, default_value = "Date")]
        date_col: String,

        /// Name of the description/mode column
        #[arg(long, default_value = "Description")]
        desc_col: String,

        /// Name of the amount column
        #[arg(long, default_value = "Amount")]
        amount_col: String,

        /// Write the daily summary CSV to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report {
            csv,
            date_col,
            desc_col,
            amount_col,
            export,
        } => report(&csv, &date_col, &desc_col, &amount_col, export.as_deref()),
    }
}

fn report(
    csv: &Path,
    date_col: &str,
    desc_col: &str,
    amount_col: &str,
    export: Option<&Path>,
) -> Result<()> {
    if !csv.exists() {
        bail!("report not found: {} (pass --csv <path>)", csv.display());
    }

    let table = read_report(csv)?;
    let out = finsplit_core::run(&table, date_col, desc_col, amount_col)
        .with_context(|| format!("processing {}", csv.display()))?;

    println!("Parsed {} transactions from {}\n", out.rows.len(), csv.display());

    for channel in [Channel::Cash, Channel::Upi, Channel::Portal] {
        println!(
            "Total {:<8} {}",
            channel,
            render::format_inr(out.totals.get(channel))
        );
    }

    println!();
    render::print_summary(&out.summary);

    if let Some(path) = export {
        let summary_csv = out.summary.to_csv()?;
        std::fs::write(path, summary_csv)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        println!("\nWrote daily summary to {}", path.display());
    }

    Ok(())
}
