use std::path::Path;

use chrono::NaiveDate;

use crate::categorizer::{KeywordTable, FALLBACK_CATEGORY};
use crate::error::{Result, StatementError};
use crate::models::Transaction;
use crate::schema;

// ---------------------------------------------------------------------------
// Value parsing helpers
// ---------------------------------------------------------------------------

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y", "%d %b %Y"];

/// Parse a date cell against the supported formats. `None` drops the row.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
}

/// Coerce an amount cell to a number. Strips currency symbols, thousands
/// separators and stray quotes; parenthesized values are negative.
/// Unparseable cells become 0.0 and the row is kept.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned = raw.replace([',', '"', '$'], "");
    let cleaned = cleaned.trim();
    if let Some(inner) = cleaned.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return -inner.trim().parse::<f64>().unwrap_or(0.0);
    }
    cleaned.parse().unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Statement formats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Csv,
    #[cfg(feature = "xlsx")]
    Sheet,
}

fn detect_format(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "csv" => Ok(Format::Csv),
        #[cfg(feature = "xlsx")]
        "xlsx" | "xls" => Ok(Format::Sheet),
        _ => Err(StatementError::UnsupportedFormat(ext)),
    }
}

fn read_csv(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    Ok((headers, rows))
}

#[cfg(feature = "xlsx")]
fn excel_serial_to_date(serial: f64) -> String {
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let date = base + chrono::Duration::days(serial as i64);
    date.format("%Y-%m-%d").to_string()
}

#[cfg(feature = "xlsx")]
fn cell_to_string(cell: &calamine::Data) -> String {
    use calamine::Data;
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

#[cfg(feature = "xlsx")]
fn read_sheet(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    use calamine::Reader;

    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| StatementError::Xlsx(e.to_string()))?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| StatementError::Xlsx("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| StatementError::Xlsx(e.to_string()))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>());
    let headers = rows
        .next()
        .ok_or_else(|| StatementError::Xlsx(format!("sheet '{name}' is empty")))?;
    Ok((headers, rows.collect()))
}

// ---------------------------------------------------------------------------
// load_statement
// ---------------------------------------------------------------------------

/// Read a statement file, normalize its columns and return the transaction
/// table. Rows with an unparseable date are dropped; rows with an
/// unparseable amount are kept with amount 0.
pub fn load_statement(path: &Path, keywords: &KeywordTable) -> Result<Vec<Transaction>> {
    let format = detect_format(path)?;
    if !path.exists() {
        return Err(StatementError::FileNotFound(path.display().to_string()));
    }
    let (headers, rows) = match format {
        Format::Csv => read_csv(path)?,
        #[cfg(feature = "xlsx")]
        Format::Sheet => read_sheet(path)?,
    };
    build_table(&headers, rows, keywords)
}

fn build_table(
    headers: &[String],
    rows: Vec<Vec<String>>,
    keywords: &KeywordTable,
) -> Result<Vec<Transaction>> {
    let cols = schema::resolve_columns(headers)?;
    let mut table = Vec::new();

    for row in rows {
        let Some(date) = row.get(cols.date).and_then(|raw| parse_date(raw)) else {
            continue;
        };
        let description = row
            .get(cols.description)
            .map(|d| d.trim().to_string())
            .unwrap_or_default();
        let amount = row.get(cols.amount).map(|a| parse_amount(a)).unwrap_or(0.0);
        let txn_type = cols
            .txn_type
            .and_then(|i| row.get(i))
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let category = match cols.category {
            Some(i) => {
                let cell = row.get(i).map(|c| c.trim()).unwrap_or("");
                if cell.is_empty() {
                    FALLBACK_CATEGORY.to_string()
                } else {
                    cell.to_string()
                }
            }
            None => keywords.infer(Some(description.as_str())).to_string(),
        };
        table.push(Transaction {
            date,
            description,
            amount,
            txn_type,
            category,
        });
    }
    Ok(table)
}
