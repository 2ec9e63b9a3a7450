//! Error types for the benchmark tool

use thiserror::Error;

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Main error type for the benchmark tool
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Result sets differ: unindexed query returned {unindexed} rows, CTE query returned {cte} rows")]
    ResultMismatch { unindexed: usize, cte: usize },
}
