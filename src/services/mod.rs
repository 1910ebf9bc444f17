mod batch;
mod chunker;
mod embedding;
mod loader;
mod sanitizer;
mod vector_store;

pub use batch::{batch_count, upload_in_batches};
pub use chunker::TextChunker;
pub use embedding::EmbeddingClient;
pub use loader::PdfLoader;
pub use sanitizer::{clean_bytes, clean_text, sanitize_documents};
pub use vector_store::{ChunkRow, VectorStoreClient};
