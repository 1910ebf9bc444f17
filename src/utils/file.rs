//! File utilities shared by the loader and the ingest driver.

use std::path::Path;

use sha2::{Digest, Sha256};

/// SHA-256 checksum of text content, hex-encoded.
pub fn calculate_checksum(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    hex::encode(hash)
}

/// File name component of a path, falling back to the full path display.
pub fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_calculate_checksum() {
        let checksum = calculate_checksum("hello world");
        assert_eq!(checksum.len(), 64);
        assert_eq!(checksum, calculate_checksum("hello world"));
        assert_ne!(checksum, calculate_checksum("hello worlds"));
    }

    #[test]
    fn test_display_file_name() {
        let path = PathBuf::from("/data/docs/report.pdf");
        assert_eq!(display_file_name(&path), "report.pdf");
    }
}
