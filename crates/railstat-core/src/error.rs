// crates/railstat-core/src/error.rs

use railstat_parser::ParserError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Travel log parsing failed: {0}")]
    Parser(#[from] ParserError),

    #[error("No journeys loaded yet; upload a travel history first")]
    MissingState,

    #[error("No journeys left to summarize")]
    EmptyResultSet,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
