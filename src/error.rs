use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTML parse error: {0}")]
    Parse(String),

    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Missing exchange rate for {0}")]
    MissingRate(String),

    #[error("Invalid exchange rate for {currency}: {rate}")]
    InvalidRate { currency: String, rate: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Query failed: {query}: {source}")]
    Query {
        query: String,
        #[source]
        source: rusqlite::Error,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// Pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    Transform,
    LoadCsv,
    ConnectDb,
    LoadDb,
    Query,
    CloseDb,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Extract => "extract",
            Stage::Transform => "transform",
            Stage::LoadCsv => "load_csv",
            Stage::ConnectDb => "connect_db",
            Stage::LoadDb => "load_db",
            Stage::Query => "query",
            Stage::CloseDb => "close_db",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: EtlError,
}

impl StageError {
    pub fn new(stage: Stage, source: EtlError) -> Self {
        Self { stage, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_message_is_tagged() {
        let err = StageError::new(Stage::Transform, EtlError::MissingRate("INR".into()));
        assert_eq!(err.to_string(), "transform failed: Missing exchange rate for INR");
    }
}
