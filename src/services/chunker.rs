//! Fixed-size text chunking with overlap.

use crate::models::{ChunkingConfig, Document, DocumentChunk};

/// Splits document content into ordered, overlapping chunks.
///
/// Sizes are counted in characters. The stride is `chunk_size - overlap`,
/// so consecutive chunks from the same document share exactly `overlap`
/// characters and the final chunk absorbs the remainder.
#[derive(Debug, Clone)]
pub struct TextChunker {
    chunk_size: usize,
    overlap: usize,
}

impl TextChunker {
    /// Create a chunker; the config invariant `overlap < chunk_size` is
    /// enforced by `Config::validate`.
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            overlap: config.chunk_overlap,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&ChunkingConfig::default())
    }

    /// Chunk one document. Empty content yields no chunks; content of
    /// `chunk_size` or fewer characters yields a single chunk.
    pub fn chunk(&self, document: &Document) -> Vec<DocumentChunk> {
        let chars: Vec<char> = document.content.chars().collect();
        let total = chars.len();

        if total == 0 {
            return Vec::new();
        }

        if total <= self.chunk_size {
            return vec![DocumentChunk::from_document(
                document,
                document.content.clone(),
                0,
                1,
                0,
                total as u64,
            )];
        }

        let step = self.chunk_size - self.overlap;
        let mut pieces = Vec::new();
        let mut start = 0;

        while start < total {
            let end = (start + self.chunk_size).min(total);
            let content: String = chars[start..end].iter().collect();
            pieces.push((content, start as u64, end as u64));
            if end >= total {
                break;
            }
            start += step;
        }

        let chunk_count = pieces.len() as u32;
        pieces
            .into_iter()
            .enumerate()
            .map(|(idx, (content, start_offset, end_offset))| {
                DocumentChunk::from_document(
                    document,
                    content,
                    idx as u32,
                    chunk_count,
                    start_offset,
                    end_offset,
                )
            })
            .collect()
    }

    /// Chunk a sequence of documents, preserving source order.
    pub fn chunk_all(&self, documents: &[Document]) -> Vec<DocumentChunk> {
        documents.iter().flat_map(|doc| self.chunk(doc)).collect()
    }
}
