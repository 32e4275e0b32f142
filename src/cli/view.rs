//! Pure formatting functions (report data → String) for the terminal.

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::money;
use crate::models::{Period, Transaction};
use crate::reports::{Breakdown, Summary};

pub fn format_overview(rows: usize, start: &str, end: &str) -> String {
    format!(
        "{} transactions from {} to {}",
        rows.to_string().bold(),
        start,
        end
    )
}

pub fn format_summary(summary: &Summary, savings_rate: f64) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount"]);

    if !summary.category_sums.is_empty() {
        table.add_row(vec![Cell::new("EXPENSES".red().bold()), Cell::new("")]);
        for (category, total) in &summary.category_sums {
            table.add_row(vec![
                Cell::new(format!("  {category}")),
                Cell::new(money(*total)),
            ]);
        }
        table.add_row(vec![Cell::new(""), Cell::new("")]);
    }

    table.add_row(vec![
        Cell::new("Total Income".bold()),
        Cell::new(money(summary.income)),
    ]);
    table.add_row(vec![
        Cell::new("Total Expenses".bold()),
        Cell::new(money(summary.expenses)),
    ]);
    let net_label = if summary.net >= 0.0 {
        "NET".green().bold()
    } else {
        "NET".red().bold()
    };
    table.add_row(vec![Cell::new(net_label), Cell::new(money(summary.net))]);

    format!(
        "Spending Summary\n{table}\nSavings rate: {savings_rate:.2}%"
    )
}

pub fn format_breakdown(breakdown: &Breakdown, period: Period) -> String {
    if breakdown.periods.is_empty() {
        return "No transactions to break down.".to_string();
    }
    let mut table = Table::new();
    let mut header = vec!["Period".to_string()];
    header.extend(breakdown.categories.iter().cloned());
    table.set_header(header);
    for (i, label) in breakdown.periods.iter().enumerate() {
        let mut row = vec![Cell::new(label)];
        for value in &breakdown.cells[i] {
            let cell = if *value < 0.0 {
                Cell::new(money(*value).red().to_string())
            } else {
                Cell::new(money(*value))
            };
            row.push(cell);
        }
        table.add_row(row);
    }
    format!("Breakdown ({period})\n{table}")
}

pub fn format_top_expenses(rows: &[Transaction]) -> String {
    if rows.is_empty() {
        return "No expenses found.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Category", "Amount"]);
    for txn in rows {
        table.add_row(vec![
            Cell::new(txn.date.format("%Y-%m-%d")),
            Cell::new(&txn.description),
            Cell::new(&txn.category),
            Cell::new(money(txn.amount.abs())),
        ]);
    }
    format!("Top Expenses\n{table}")
}

pub fn format_monthly_totals(totals: &[(String, f64)]) -> String {
    if totals.is_empty() {
        return "No monthly activity.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Month", "Net"]);
    for (month, total) in totals {
        let net_str = if *total >= 0.0 {
            money(*total).green().to_string()
        } else {
            money(*total).red().to_string()
        };
        table.add_row(vec![Cell::new(month), Cell::new(net_str)]);
    }
    format!("Monthly Totals\n{table}")
}
