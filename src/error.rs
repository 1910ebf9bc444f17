//! Error types for the PDF ingestion CLI.

use thiserror::Error;

/// Errors related to configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Errors related to loading and parsing source documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file read error: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("PDF parse error: {0}")]
    ParseError(String),
}

/// Errors related to embedding operations.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("failed to connect to embedding API: {0}")]
    ConnectionError(String),

    #[error("embedding API error: {0}")]
    ApiError(String),

    #[error("embedding request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),

    #[error("embedding timeout")]
    Timeout,
}

/// Errors related to vector store operations.
#[derive(Debug, Error)]
pub enum VectorStoreError {
    #[error("failed to connect to vector store: {0}")]
    ConnectionError(String),

    #[error("upsert error: {0}")]
    UpsertError(String),

    #[error("search error: {0}")]
    SearchError(String),

    #[error("vector store request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("invalid vector store response: {0}")]
    InvalidResponse(String),
}

/// Errors raised by the per-file ingest pipeline.
///
/// The driver loop catches these per file; one file's failure never
/// aborts the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("vector store error: {0}")]
    VectorStoreError(#[from] VectorStoreError),
}

/// Errors related to search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("vector store error: {0}")]
    VectorStoreError(#[from] VectorStoreError),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Application-level errors that wrap domain errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),

    #[error("{0}")]
    Other(String),
}
