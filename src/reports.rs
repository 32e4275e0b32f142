use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, StatementError};
use crate::models::{Period, Transaction};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

pub struct Summary {
    /// Absolute expense totals per category, largest first. Ties keep the
    /// category's first-appearance order in the table.
    pub category_sums: Vec<(String, f64)>,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

pub fn summarize(table: &[Transaction]) -> Summary {
    let mut category_sums: Vec<(String, f64)> = Vec::new();
    let mut income = 0.0;
    let mut expenses = 0.0;

    for txn in table {
        if txn.amount > 0.0 {
            income += txn.amount;
        } else if txn.amount < 0.0 {
            expenses += txn.amount.abs();
            match category_sums.iter_mut().find(|(c, _)| c == &txn.category) {
                Some((_, total)) => *total += txn.amount.abs(),
                None => category_sums.push((txn.category.clone(), txn.amount.abs())),
            }
        }
    }

    // Stable sort preserves first-appearance order for equal totals
    category_sums.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let net = income - expenses;
    Summary {
        category_sums,
        income,
        expenses,
        net,
    }
}

// ---------------------------------------------------------------------------
// Period breakdown
// ---------------------------------------------------------------------------

pub struct Breakdown {
    /// Period labels in ascending chronological order.
    pub periods: Vec<String>,
    /// Category labels in alphabetical order.
    pub categories: Vec<String>,
    /// `cells[p][c]` = signed sum for (periods[p], categories[c]); missing
    /// combinations are 0.
    pub cells: Vec<Vec<f64>>,
}

pub fn breakdown(table: &[Transaction], period: Period) -> Breakdown {
    let mut matrix: BTreeMap<String, BTreeMap<&str, f64>> = BTreeMap::new();
    let mut category_set: BTreeSet<&str> = BTreeSet::new();

    for txn in table {
        category_set.insert(&txn.category);
        *matrix
            .entry(period.key(txn.date))
            .or_default()
            .entry(&txn.category)
            .or_default() += txn.amount;
    }

    let categories: Vec<String> = category_set.into_iter().map(String::from).collect();
    let periods: Vec<String> = matrix.keys().cloned().collect();
    let cells = matrix
        .values()
        .map(|row| {
            categories
                .iter()
                .map(|c| row.get(c.as_str()).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    Breakdown {
        periods,
        categories,
        cells,
    }
}

// ---------------------------------------------------------------------------
// Smaller aggregates
// ---------------------------------------------------------------------------

/// The n largest expenses by absolute amount, descending. Equal amounts
/// keep their original row order.
pub fn top_expenses(table: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut expenses: Vec<Transaction> = table
        .iter()
        .filter(|t| t.amount < 0.0)
        .cloned()
        .collect();
    expenses.sort_by(|a, b| {
        b.amount
            .abs()
            .partial_cmp(&a.amount.abs())
            .unwrap_or(Ordering::Equal)
    });
    expenses.truncate(n);
    expenses
}

/// `(income - expenses) / income * 100`, rounded to two decimals.
/// Returns 0 when there is no income rather than dividing by zero.
pub fn savings_rate(table: &[Transaction]) -> f64 {
    let summary = summarize(table);
    if summary.income > 0.0 {
        let rate = (summary.income - summary.expenses) / summary.income * 100.0;
        (rate * 100.0).round() / 100.0
    } else {
        0.0
    }
}

/// Signed totals per calendar month, ascending.
pub fn monthly_totals(table: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for txn in table {
        *totals
            .entry(txn.date.format("%Y-%m").to_string())
            .or_default() += txn.amount;
    }
    totals.into_iter().collect()
}

/// First and last transaction dates as `YYYY-MM-DD`.
pub fn date_range(table: &[Transaction]) -> Result<(String, String)> {
    let min = table.iter().map(|t| t.date).min().ok_or(StatementError::EmptyTable)?;
    let max = table.iter().map(|t| t.date).max().ok_or(StatementError::EmptyTable)?;
    Ok((
        min.format("%Y-%m-%d").to_string(),
        max.format("%Y-%m-%d").to_string(),
    ))
}
