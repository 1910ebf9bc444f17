use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_EMBEDDING_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSION: u32 = 1536;
pub const DEFAULT_VECTOR_STORE_URL: &str = "http://localhost:54321";
pub const DEFAULT_QUERY_NAME: &str = "match_documents";
pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;
pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Immutable process configuration, assembled once at startup and passed
/// explicitly into every component constructor.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub vector_store: VectorStoreConfig,
    pub chunking: ChunkingConfig,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// A `.env` file is loaded first when present. Required variables are
    /// `SUPABASE_URL`, `SUPABASE_SERVICE_KEY` and `OPENAI_KEY`; a missing
    /// one is fatal. Optional variables override the embedding endpoint,
    /// model, dimension, chunk geometry, batch size and HTTP timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let timeout_secs = parse_or("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let config = Self {
            embedding: EmbeddingConfig {
                api_key: require("OPENAI_KEY")?,
                base_url: optional("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_URL.to_string()),
                model: optional("EMBEDDING_MODEL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
                dimension: parse_or("EMBEDDING_DIMENSION", DEFAULT_EMBEDDING_DIMENSION)?,
                timeout_secs,
            },
            vector_store: VectorStoreConfig {
                url: require("SUPABASE_URL")?,
                service_key: require("SUPABASE_SERVICE_KEY")?,
                batch_size: parse_or("UPLOAD_BATCH_SIZE", DEFAULT_BATCH_SIZE)?,
                timeout_secs,
            },
            chunking: ChunkingConfig {
                chunk_size: parse_or("CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?,
                chunk_overlap: parse_or("CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants that the per-variable parsers cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunking.chunk_size == 0 {
            return Err(ConfigError::ValidationError(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(ConfigError::ValidationError(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunking.chunk_overlap, self.chunking.chunk_size
            )));
        }
        if self.vector_store.batch_size == 0 {
            return Err(ConfigError::ValidationError(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.embedding.dimension == 0 {
            return Err(ConfigError::ValidationError(
                "embedding dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Bearer key for the embeddings endpoint
    pub api_key: String,

    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Embedding model name
    pub model: String,

    /// Vector dimension the model produces
    pub dimension: u32,

    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_EMBEDDING_URL.to_string(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            dimension: DEFAULT_EMBEDDING_DIMENSION,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VectorStoreConfig {
    /// Base URL of the vector store's REST endpoint
    pub url: String,

    /// Service key sent as `apikey` and bearer token
    pub service_key: String,

    /// Maximum chunks per upsert call
    pub batch_size: usize,

    pub timeout_secs: u64,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_VECTOR_STORE_URL.to_string(),
            service_key: String::new(),
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters
    pub chunk_size: usize,

    /// Characters shared between consecutive chunks
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(var))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.embedding.base_url, DEFAULT_EMBEDDING_URL);
        assert_eq!(config.embedding.model, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 50);
        assert_eq!(config.vector_store.batch_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap_at_least_chunk_size() {
        let mut config = Config::default();
        config.chunking.chunk_overlap = config.chunking.chunk_size;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_batch_size() {
        let mut config = Config::default();
        config.vector_store.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let mut config = Config::default();
        config.embedding.dimension = 0;
        assert!(config.validate().is_err());
    }
}
