use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("Spreadsheet error: {0}")]
    Xlsx(String),

    #[error("Unsupported file format '{0}'. Please use a CSV or Excel file.")]
    UnsupportedFormat(String),

    #[error("Required column '{0}' not found in the bank statement")]
    MissingColumn(&'static str),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Statement has no transactions")]
    EmptyTable,

    #[error("Rules file error: {0}")]
    Rules(String),
}

pub type Result<T> = std::result::Result<T, StatementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = StatementError::MissingColumn("Amount");
        assert_eq!(
            err.to_string(),
            "Required column 'Amount' not found in the bank statement"
        );
        let err = StatementError::UnsupportedFormat("pdf".to_string());
        assert!(err.to_string().contains("'pdf'"));
        let err = StatementError::FileNotFound("/tmp/x.csv".to_string());
        assert!(err.to_string().contains("/tmp/x.csv"));
        assert!(StatementError::EmptyTable.to_string().contains("no transactions"));
    }
}
