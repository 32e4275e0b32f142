pub mod view;

use std::path::PathBuf;

use clap::Parser;

use crate::categorizer::KeywordTable;
use crate::error::Result;
use crate::exporter;
use crate::loader::load_statement;
use crate::models::Period;
use crate::reports;

#[derive(Parser)]
#[command(
    name = "spendlens",
    about = "Categorize a bank statement and summarize spending."
)]
pub struct Cli {
    /// Path to the bank statement (CSV or XLSX)
    pub file: PathBuf,

    /// Breakdown bucketing granularity
    #[arg(long, value_enum, default_value_t = Period::Monthly)]
    pub period: Period,

    /// Write the summary and breakdown to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Number of top expenses to show
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// JSON file with custom categorization rules
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Suppress the terminal report (useful with --export)
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let keywords = match &cli.rules {
        Some(path) => KeywordTable::from_json(path)?,
        None => KeywordTable::default(),
    };

    let table = load_statement(&cli.file, &keywords)?;
    let summary = reports::summarize(&table);
    let breakdown = reports::breakdown(&table, cli.period);

    if !cli.quiet {
        let (start, end) = reports::date_range(&table)?;
        println!("{}", view::format_overview(table.len(), &start, &end));
        println!();
        println!(
            "{}",
            view::format_summary(&summary, reports::savings_rate(&table))
        );
        println!();
        println!("{}", view::format_breakdown(&breakdown, cli.period));
        println!();
        println!(
            "{}",
            view::format_top_expenses(&reports::top_expenses(&table, cli.top))
        );
        println!();
        println!(
            "{}",
            view::format_monthly_totals(&reports::monthly_totals(&table))
        );
    }

    if let Some(dest) = &cli.export {
        exporter::export_summary(dest, &summary, Some(&breakdown))?;
        println!("Summary exported to {}", dest.display());
    }

    Ok(())
}
