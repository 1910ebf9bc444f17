//! Search-related models and the output format flag.

use serde::{Deserialize, Serialize};

/// Output format for reports and search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// Machine-parseable JSON format
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One row returned by the server-side match function.
///
/// The primary key type is owned by the store (integer or uuid), so it
/// is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub id: serde_json::Value,

    pub content: String,

    #[serde(default)]
    pub metadata: serde_json::Value,

    pub similarity: f32,
}

/// Collection of search matches for one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub matches: Vec<SearchMatch>,
    pub duration_ms: u64,
}

impl SearchResults {
    pub fn new(query: String, matches: Vec<SearchMatch>, duration_ms: u64) -> Self {
        Self {
            query,
            matches,
            duration_ms,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_search_match_deserializes_store_row() {
        let raw = r#"{
            "id": 42,
            "content": "chunk text",
            "metadata": {"page": 3, "file_name": "report.pdf"},
            "similarity": 0.83
        }"#;
        let row: SearchMatch = serde_json::from_str(raw).unwrap();
        assert_eq!(row.content, "chunk text");
        assert_eq!(row.metadata["page"], 3);
        assert!((row.similarity - 0.83).abs() < 1e-6);
    }

    #[test]
    fn test_search_results() {
        let results = SearchResults::new("test".to_string(), vec![], 50);
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
        assert_eq!(results.duration_ms, 50);
    }
}
