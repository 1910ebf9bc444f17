//! Typed per-file outcomes aggregated by the ingest driver.

use serde::Serialize;

/// How one directory entry fared in the ingest loop.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    Loaded {
        pages: u32,
        chunks: u64,
        batches: u64,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub file_name: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, FileStatus::Loaded { .. })
    }
}

/// Aggregated result of one ingest run, in directory order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    pub outcomes: Vec<FileOutcome>,
    pub files_selected: u64,
    pub chunks_uploaded: u64,
    pub batches_sent: u64,
    pub duration_ms: u64,
    pub dry_run: bool,
}

impl IngestReport {
    pub fn record(&mut self, outcome: FileOutcome) {
        if let FileStatus::Loaded { chunks, batches, .. } = outcome.status {
            self.chunks_uploaded += chunks;
            self.batches_sent += batches;
        }
        self.outcomes.push(outcome);
    }

    pub fn loaded_count(&self) -> u64 {
        self.outcomes.iter().filter(|o| o.is_loaded()).count() as u64
    }

    pub fn failed_count(&self) -> u64 {
        self.outcomes.iter().filter(|o| !o.is_loaded()).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = IngestReport::default();
        report.record(FileOutcome {
            file_name: "a.pdf".to_string(),
            status: FileStatus::Loaded {
                pages: 2,
                chunks: 10,
                batches: 1,
            },
        });
        report.record(FileOutcome {
            file_name: "b.pdf".to_string(),
            status: FileStatus::Failed {
                reason: "PDF parse error: bad xref".to_string(),
            },
        });
        report.record(FileOutcome {
            file_name: "c.pdf".to_string(),
            status: FileStatus::Loaded {
                pages: 1,
                chunks: 3,
                batches: 1,
            },
        });

        assert_eq!(report.loaded_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.chunks_uploaded, 13);
        assert_eq!(report.batches_sent, 2);
        assert_eq!(report.outcomes[1].file_name, "b.pdf");
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = FileOutcome {
            file_name: "a.pdf".to_string(),
            status: FileStatus::Failed {
                reason: "boom".to_string(),
            },
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["reason"], "boom");
        assert_eq!(value["file_name"], "a.pdf");
    }
}
