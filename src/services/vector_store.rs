//! Client for a Supabase-style vector table behind a REST endpoint.
//!
//! Rows go to `POST {url}/rest/v1/{table}`; similarity search goes
//! through a named server-side function at `POST {url}/rest/v1/rpc/{fn}`.
//! Indexing and nearest-neighbor internals are owned by the service.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::error::VectorStoreError;
use crate::models::{DocumentChunk, SearchMatch, VectorStoreConfig};

/// One uploaded table row. The primary key is generated server-side;
/// ownership of the row transfers to the store on upload.
#[derive(Debug, Clone, Serialize)]
pub struct ChunkRow {
    pub content: String,
    pub metadata: serde_json::Value,
    pub embedding: Vec<f32>,
}

impl ChunkRow {
    /// Pair a chunk with its embedding vector.
    pub fn new(chunk: &DocumentChunk, embedding: Vec<f32>) -> Self {
        Self {
            content: chunk.content.clone(),
            metadata: chunk.metadata_json(),
            embedding,
        }
    }
}

/// Request body for the server-side match function.
#[derive(Debug, Serialize)]
struct MatchRequest<'a> {
    query_embedding: &'a [f32],
    match_count: u64,
}

/// Client for the vector store's REST interface.
#[derive(Debug, Clone)]
pub struct VectorStoreClient {
    client: Client,
    base_url: String,
}

impl VectorStoreClient {
    pub fn new(config: &VectorStoreConfig) -> Result<Self, VectorStoreError> {
        let key = config.service_key.trim();
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(key)
                .map_err(|e| VectorStoreError::ConnectionError(e.to_string()))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| VectorStoreError::ConnectionError(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| VectorStoreError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Insert a batch of rows into `table` in one network call.
    pub async fn upsert_rows(&self, table: &str, rows: &[ChunkRow]) -> Result<(), VectorStoreError> {
        if rows.is_empty() {
            return Ok(());
        }

        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let response = self
            .client
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorStoreError::UpsertError(format!(
                "status {}: {}",
                status, body
            )));
        }
        Ok(())
    }

    /// Invoke the named server-side match function for similarity search.
    pub async fn similarity_search(
        &self,
        query_name: &str,
        embedding: &[f32],
        limit: u64,
    ) -> Result<Vec<SearchMatch>, VectorStoreError> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, query_name);
        let request = MatchRequest {
            query_embedding: embedding,
            match_count: limit,
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorStoreError::SearchError(format!(
                "status {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| VectorStoreError::InvalidResponse(e.to_string()))
    }

    /// Probe the REST root with the configured key.
    pub async fn health_check(&self) -> Result<(), VectorStoreError> {
        let url = format!("{}/rest/v1/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| VectorStoreError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(VectorStoreError::ConnectionError(format!(
                "health check failed with status: {}",
                response.status()
            )));
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, DocumentMetadata};

    #[test]
    fn test_client_creation_and_url_trimming() {
        let config = VectorStoreConfig {
            url: "https://abc.supabase.co/".to_string(),
            service_key: "service-key".to_string(),
            ..Default::default()
        };
        let client = VectorStoreClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://abc.supabase.co");
    }

    #[test]
    fn test_chunk_row_wire_shape() {
        let doc = Document::new(
            "page text".to_string(),
            DocumentMetadata {
                source: "/data/a.pdf".to_string(),
                file_name: "a.pdf".to_string(),
                page: 1,
                total_pages: 2,
                checksum: "sum".to_string(),
                loaded_at: "2026-01-01T00:00:00+00:00".to_string(),
            },
        );
        let chunk = DocumentChunk::from_document(&doc, "page text".to_string(), 0, 1, 0, 9);
        let row = ChunkRow::new(&chunk, vec![0.1, 0.2]);

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["content"], "page text");
        assert_eq!(value["embedding"], serde_json::json!([0.1, 0.2]));
        assert_eq!(value["metadata"]["file_name"], "a.pdf");
        // The store generates the primary key
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_match_request_wire_shape() {
        let embedding = vec![0.5_f32, 0.25];
        let request = MatchRequest {
            query_embedding: &embedding,
            match_count: 10,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["match_count"], 10);
        assert_eq!(value["query_embedding"], serde_json::json!([0.5, 0.25]));
    }
}
