//! Best-effort mapping of raw statement headers onto the canonical
//! Date / Description / Amount / Type schema.

use crate::error::{Result, StatementError};

const DATE_KEYS: &[&str] = &["date", "time"];
const DESC_KEYS: &[&str] = &["desc", "narration", "transaction", "particular"];
const AMOUNT_KEYS: &[&str] = &["amt", "amount", "value"];
const TYPE_KEYS: &[&str] = &["type", "transaction type", "debit/credit"];

/// Canonical name for a raw header, or None when no keyword group matches.
/// Groups are tested in a fixed precedence order, so an ambiguous header
/// like "Transaction Date" resolves to Date rather than Description.
pub fn canonical_header(raw: &str) -> Option<&'static str> {
    let lower = raw.to_lowercase();
    let groups: [(&[&str], &'static str); 4] = [
        (DATE_KEYS, "Date"),
        (DESC_KEYS, "Description"),
        (AMOUNT_KEYS, "Amount"),
        (TYPE_KEYS, "Type"),
    ];
    for (keys, canonical) in groups {
        if keys.iter().any(|k| lower.contains(k)) {
            return Some(canonical);
        }
    }
    None
}

/// Resolved column positions for a header row. Date, Description and
/// Amount are required; Type and Category are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub description: usize,
    pub amount: usize,
    pub txn_type: Option<usize>,
    pub category: Option<usize>,
}

/// Map a raw header row to column indices. When several headers normalize
/// to the same canonical name, the leftmost one wins.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap> {
    let mut date = None;
    let mut description = None;
    let mut amount = None;
    let mut txn_type = None;
    let mut category = None;

    for (i, raw) in headers.iter().enumerate() {
        match canonical_header(raw) {
            Some("Date") => {
                date.get_or_insert(i);
            }
            Some("Description") => {
                description.get_or_insert(i);
            }
            Some("Amount") => {
                amount.get_or_insert(i);
            }
            Some("Type") => {
                txn_type.get_or_insert(i);
            }
            _ => {
                if raw.trim().eq_ignore_ascii_case("category") {
                    category.get_or_insert(i);
                }
            }
        }
    }

    Ok(ColumnMap {
        date: date.ok_or(StatementError::MissingColumn("Date"))?,
        description: description.ok_or(StatementError::MissingColumn("Description"))?,
        amount: amount.ok_or(StatementError::MissingColumn("Amount"))?,
        txn_type,
        category,
    })
}
