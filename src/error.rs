use thiserror::Error;

#[derive(Error, Debug)]
pub enum TapwiseError {
    #[error("Unsupported symbol: {0:?}")]
    UnsupportedSymbol(char),

    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TwResult<T> = Result<T, TapwiseError>;
