use std::path::Path;

use crate::error::Result;
use crate::reports::{Breakdown, Summary};

/// Write the category summary and, when given, the period breakdown as two
/// named sections of a single CSV file. Numeric values are written as-is.
pub fn export_summary(path: &Path, summary: &Summary, breakdown: Option<&Breakdown>) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(["Category Summary"])?;
    wtr.write_record(["Category", "Amount"])?;
    for (category, total) in &summary.category_sums {
        let amount = total.to_string();
        wtr.write_record([category.as_str(), amount.as_str()])?;
    }

    if let Some(b) = breakdown {
        wtr.write_record([""])?;
        wtr.write_record(["Period Breakdown"])?;
        let mut header = vec!["Period".to_string()];
        header.extend(b.categories.iter().cloned());
        wtr.write_record(&header)?;
        for (i, period) in b.periods.iter().enumerate() {
            let mut row = vec![period.clone()];
            row.extend(b.cells[i].iter().map(|v| v.to_string()));
            wtr.write_record(&row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Period, Transaction};
    use crate::reports;
    use chrono::NaiveDate;

    fn txn(date: &str, amount: f64, category: &str) -> Transaction {
        Transaction {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: String::new(),
            amount,
            txn_type: None,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_export_both_sections() {
        let table = vec![
            txn("2025-01-05", -20.0, "A"),
            txn("2025-02-01", -50.0, "A"),
            txn("2025-01-15", 100.0, "Income"),
        ];
        let summary = reports::summarize(&table);
        let b = reports::breakdown(&table, Period::Monthly);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("summary.csv");
        export_summary(&out, &summary, Some(&b)).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("Category Summary\n"));
        assert!(content.contains("Category,Amount\n"));
        assert!(content.contains("A,70\n"));
        assert!(content.contains("Period Breakdown\n"));
        assert!(content.contains("Period,A,Income\n"));
        assert!(content.contains("2025-01,-20,100\n"));
        assert!(content.contains("2025-02,-50,0\n"));
    }

    #[test]
    fn test_export_preserves_fractional_values() {
        let table = vec![txn("2025-01-05", -19.99, "A")];
        let summary = reports::summarize(&table);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("summary.csv");
        export_summary(&out, &summary, None).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("A,19.99\n"));
    }

    #[test]
    fn test_export_without_breakdown() {
        let table = vec![txn("2025-01-05", -20.0, "A")];
        let summary = reports::summarize(&table);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("summary.csv");
        export_summary(&out, &summary, None).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("A,20\n"));
        assert!(!content.contains("Period Breakdown"));
    }
}
