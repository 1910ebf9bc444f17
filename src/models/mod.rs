mod config;
mod document;
mod range;
mod report;
mod search;

pub use config::{
    ChunkingConfig, Config, DEFAULT_BATCH_SIZE, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
    DEFAULT_EMBEDDING_DIMENSION, DEFAULT_EMBEDDING_MODEL, DEFAULT_EMBEDDING_URL,
    DEFAULT_QUERY_NAME, DEFAULT_TIMEOUT_SECS, DEFAULT_VECTOR_STORE_URL, EmbeddingConfig,
    VectorStoreConfig,
};
pub use document::{Document, DocumentChunk, DocumentMetadata};
pub use range::IndexRange;
pub use report::{FileOutcome, FileStatus, IngestReport};
pub use search::{OutputFormat, SearchMatch, SearchResults};
