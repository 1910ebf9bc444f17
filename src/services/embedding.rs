//! Embedding client for an OpenAI-compatible embeddings API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::models::EmbeddingConfig;

/// Request body for the /embeddings endpoint.
#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

/// Response from the /embeddings endpoint.
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

/// Client for the remote embeddings endpoint.
#[derive(Debug, Clone)]
pub struct EmbeddingClient {
    client: Client,
    endpoint: String,
    models_endpoint: String,
    model: String,
    dimension: usize,
}

impl EmbeddingClient {
    pub fn new(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth)
                .map_err(|e| EmbeddingError::ConnectionError(e.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| EmbeddingError::ConnectionError(e.to_string()))?;

        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            endpoint: format!("{}/embeddings", base),
            models_endpoint: format!("{}/models", base),
            model: config.model.clone(),
            dimension: config.dimension as usize,
        })
    }

    /// Embed a batch of texts; returns one vector per input, in input order.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest {
            model: &self.model,
            input: texts,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmbeddingError::Timeout
                } else {
                    EmbeddingError::RequestError(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ApiError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let mut parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

        if parsed.data.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "{} embeddings for {} inputs",
                parsed.data.len(),
                texts.len()
            )));
        }

        // The API does not guarantee response order
        parsed.data.sort_by_key(|entry| entry.index);

        for entry in &parsed.data {
            if entry.embedding.len() != self.dimension {
                return Err(EmbeddingError::InvalidResponse(format!(
                    "expected dimension {}, got {}",
                    self.dimension,
                    entry.embedding.len()
                )));
            }
        }

        Ok(parsed.data.into_iter().map(|entry| entry.embedding).collect())
    }

    /// Embed a single query string.
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings.into_iter().next().ok_or_else(|| {
            EmbeddingError::InvalidResponse("empty embedding response".to_string())
        })
    }

    /// Probe the /models endpoint with the configured key.
    pub async fn health_check(&self) -> Result<(), EmbeddingError> {
        let response = self
            .client
            .get(&self.models_endpoint)
            .send()
            .await
            .map_err(|e| EmbeddingError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EmbeddingError::ApiError(format!(
                "health check failed with status: {}",
                response.status()
            )));
        }
        Ok(())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = EmbeddingConfig {
            api_key: "sk-test".to_string(),
            ..Default::default()
        };
        assert!(EmbeddingClient::new(&config).is_ok());
    }

    #[test]
    fn test_base_url_trimming() {
        let config = EmbeddingConfig {
            api_key: "sk-test".to_string(),
            base_url: "https://api.openai.com/v1/".to_string(),
            ..Default::default()
        };
        let client = EmbeddingClient::new(&config).unwrap();
        assert_eq!(client.endpoint, "https://api.openai.com/v1/embeddings");
        assert_eq!(client.models_endpoint, "https://api.openai.com/v1/models");
    }

    #[test]
    fn test_request_wire_shape() {
        let input = vec!["first".to_string(), "second".to_string()];
        let request = EmbeddingRequest {
            model: "text-embedding-3-small",
            input: &input,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "text-embedding-3-small");
        assert_eq!(value["input"], serde_json::json!(["first", "second"]));
    }

    #[test]
    fn test_response_parses_out_of_order() {
        let raw = r#"{
            "data": [
                {"embedding": [0.2, 0.2], "index": 1},
                {"embedding": [0.1, 0.1], "index": 0}
            ]
        }"#;
        let mut parsed: EmbeddingResponse = serde_json::from_str(raw).unwrap();
        parsed.data.sort_by_key(|entry| entry.index);
        assert_eq!(parsed.data[0].embedding, vec![0.1, 0.1]);
        assert_eq!(parsed.data[1].index, 1);
    }
}
