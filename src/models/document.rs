use serde::{Deserialize, Serialize};

/// One page of extracted document text.
///
/// The sanitizer rewrites `content` in place; everything downstream
/// treats the document as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

/// Origin of a page, carried verbatim into every chunk split from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Path the file was read from
    pub source: String,
    pub file_name: String,
    /// 1-based page number
    pub page: u32,
    pub total_pages: u32,
    /// SHA-256 of the raw page text
    pub checksum: String,
    /// RFC 3339 extraction timestamp
    pub loaded_at: String,
}

impl Document {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self { content, metadata }
    }
}

/// A bounded substring of a document, the unit of embedding and upload.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub content: String,
    pub chunk_index: u32,
    pub chunk_count: u32,
    /// Character offsets into the sanitized page content
    pub start_offset: u64,
    pub end_offset: u64,
    pub metadata: DocumentMetadata,
}

impl DocumentChunk {
    /// Deterministic chunk id so re-ingesting a file reproduces the same ids.
    pub fn generate_id(source: &str, page: u32, chunk_index: u32) -> String {
        use uuid::Uuid;
        let name = format!("{}:{}:{}", source, page, chunk_index);
        Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
    }

    pub fn from_document(
        document: &Document,
        content: String,
        chunk_index: u32,
        chunk_count: u32,
        start_offset: u64,
        end_offset: u64,
    ) -> Self {
        let id = Self::generate_id(&document.metadata.source, document.metadata.page, chunk_index);
        Self {
            id,
            content,
            chunk_index,
            chunk_count,
            start_offset,
            end_offset,
            metadata: document.metadata.clone(),
        }
    }

    /// Metadata JSON stored alongside the chunk in the vector table.
    pub fn metadata_json(&self) -> serde_json::Value {
        serde_json::json!({
            "source": self.metadata.source,
            "file_name": self.metadata.file_name,
            "page": self.metadata.page,
            "total_pages": self.metadata.total_pages,
            "checksum": self.metadata.checksum,
            "loaded_at": self.metadata.loaded_at,
            "chunk_id": self.id,
            "chunk_index": self.chunk_index,
            "chunk_count": self.chunk_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_document(content: &str) -> Document {
        Document::new(
            content.to_string(),
            DocumentMetadata {
                source: "/data/report.pdf".to_string(),
                file_name: "report.pdf".to_string(),
                page: 3,
                total_pages: 7,
                checksum: "abc".to_string(),
                loaded_at: "2026-01-01T00:00:00+00:00".to_string(),
            },
        )
    }

    #[test]
    fn test_generate_id_deterministic() {
        let id = DocumentChunk::generate_id("/data/report.pdf", 3, 5);
        assert_eq!(id.len(), 36);
        assert_eq!(id, DocumentChunk::generate_id("/data/report.pdf", 3, 5));
        assert_ne!(id, DocumentChunk::generate_id("/data/report.pdf", 3, 6));
        assert_ne!(id, DocumentChunk::generate_id("/data/report.pdf", 4, 5));
    }

    #[test]
    fn test_from_document_inherits_metadata() {
        let doc = test_document("hello world");
        let chunk = DocumentChunk::from_document(&doc, "hello".to_string(), 0, 2, 0, 5);
        assert_eq!(chunk.metadata.page, 3);
        assert_eq!(chunk.metadata.file_name, "report.pdf");
        assert_eq!(chunk.chunk_count, 2);
    }

    #[test]
    fn test_metadata_json_shape() {
        let doc = test_document("hello world");
        let chunk = DocumentChunk::from_document(&doc, "hello".to_string(), 1, 2, 5, 10);
        let value = chunk.metadata_json();
        assert_eq!(value["page"], 3);
        assert_eq!(value["chunk_index"], 1);
        assert_eq!(value["chunk_id"], serde_json::json!(chunk.id));
        assert_eq!(value["file_name"], "report.pdf");
    }
}
