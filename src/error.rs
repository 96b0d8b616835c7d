use thiserror::Error;

/// Error returned when computing split statistics.
///
/// Every variant is a deterministic function of the input shape, so the error is `Clone` and
/// `PartialEq` and can be compared directly in tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Id3Error {
    /// Entropy and average information are undefined on zero rows.
    #[error("empty dataset: at least one row is required")]
    EmptyDataset,

    #[error("invalid attribute {attribute}: the dataset has {n_features} feature(s)")]
    InvalidAttributeIndex { attribute: usize, n_features: usize },

    /// Rows must hold at least one feature plus the label.
    #[error("no feature to select from: rows have {n_cols} column(s)")]
    NoFeatures { n_cols: usize },

    /// Gains are rounded to `0..=max` decimals.
    #[error("invalid number of decimals {decimals}: expected 0 to {max}")]
    InvalidDecimals { decimals: i32, max: i32 },

    #[error("row {row} has {actual} column(s), expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} is empty, the last column must be the label")]
    MissingLabel { row: usize },

    #[error("NaN value at row {row}, column {col}")]
    NanValue { row: usize, col: usize },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Id3Result<T> = Result<T, Id3Error>;
