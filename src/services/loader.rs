//! Page-level PDF text extraction.

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::models::{Document, DocumentMetadata};
use crate::utils::{calculate_checksum, display_file_name};

/// Loads one text record per page from a PDF file.
///
/// Extraction itself is delegated to `pdf-extract`; anything it cannot
/// parse (including non-PDF input) surfaces as a `LoadError` for the
/// driver to catch.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfLoader;

impl PdfLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Document>, LoadError> {
        let bytes = fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| LoadError::ParseError(e.to_string()))?;

        let source = path.to_string_lossy().to_string();
        let file_name = display_file_name(path);
        let total_pages = pages.len() as u32;
        let loaded_at = chrono::Utc::now().to_rfc3339();

        let documents = pages
            .into_iter()
            .enumerate()
            .map(|(idx, content)| {
                let metadata = DocumentMetadata {
                    source: source.clone(),
                    file_name: file_name.clone(),
                    page: idx as u32 + 1,
                    total_pages,
                    checksum: calculate_checksum(&content),
                    loaded_at: loaded_at.clone(),
                };
                Document::new(content, metadata)
            })
            .collect();

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_read_error() {
        let loader = PdfLoader::new();
        let err = loader.load(Path::new("/no/such/file.pdf")).unwrap_err();
        assert!(matches!(err, LoadError::FileReadError(_)));
    }

    #[test]
    fn test_load_non_pdf_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "just some text, not a pdf").unwrap();

        let loader = PdfLoader::new();
        let err = loader.load(&path).unwrap_err();
        assert!(matches!(err, LoadError::ParseError(_)));
    }
}
