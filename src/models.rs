use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

/// A single normalized statement row. Negative amounts are expenses,
/// positive amounts are income; zero-amount rows count toward neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub txn_type: Option<String>,
    pub category: String,
}

/// Bucketing granularity for period breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Bucket label for a date: `YYYY-MM-DD`, ISO week `YYYY-Www`, or `YYYY-MM`.
    /// Labels sort lexicographically in chronological order.
    pub fn key(&self, date: NaiveDate) -> String {
        match self {
            Period::Daily => date.format("%Y-%m-%d").to_string(),
            Period::Weekly => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Period::Monthly => date.format("%Y-%m").to_string(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_keys() {
        let d = date(2025, 1, 15);
        assert_eq!(Period::Daily.key(d), "2025-01-15");
        assert_eq!(Period::Weekly.key(d), "2025-W03");
        assert_eq!(Period::Monthly.key(d), "2025-01");
    }

    #[test]
    fn test_weekly_key_uses_iso_year() {
        // Dec 29 2025 falls in ISO week 1 of 2026
        assert_eq!(Period::Weekly.key(date(2025, 12, 29)), "2026-W01");
    }
}
