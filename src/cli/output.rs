use std::fmt::Write as FmtWrite;

use serde::Serialize;

use crate::models::{FileStatus, IngestReport, OutputFormat, SearchResults};

pub trait Formatter {
    fn format_ingest_report(&self, report: &IngestReport) -> String;
    fn format_search_results(&self, results: &SearchResults) -> String;
    fn format_status(&self, status: &StatusInfo) -> String;
    fn format_message(&self, message: &str) -> String;
    fn format_error(&self, error: &str) -> String;
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusInfo {
    pub embedding_url: String,
    pub embedding_model: String,
    pub embedding_reachable: bool,
    pub vector_store_url: String,
    pub vector_store_reachable: bool,
}

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_ingest_report(&self, report: &IngestReport) -> String {
        let mut output = String::new();
        if report.dry_run {
            writeln!(output, "Ingest summary (dry run)").unwrap();
        } else {
            writeln!(output, "Ingest summary").unwrap();
        }
        writeln!(output, "--------------").unwrap();
        writeln!(output, "Files selected: {}", report.files_selected).unwrap();
        writeln!(output, "Loaded:         {}", report.loaded_count()).unwrap();
        writeln!(output, "Failed:         {}", report.failed_count()).unwrap();
        writeln!(output, "Chunks:         {}", report.chunks_uploaded).unwrap();
        writeln!(output, "Batches:        {}", report.batches_sent).unwrap();
        writeln!(output, "Duration:       {}ms", report.duration_ms).unwrap();

        if report.failed_count() > 0 {
            writeln!(output).unwrap();
            writeln!(output, "Failures:").unwrap();
            for outcome in &report.outcomes {
                if let FileStatus::Failed { ref reason } = outcome.status {
                    writeln!(output, "  {}: {}", outcome.file_name, reason).unwrap();
                }
            }
        }

        output
    }

    fn format_search_results(&self, results: &SearchResults) -> String {
        if results.is_empty() {
            return format!("No results found for: {}\n", results.query);
        }

        let mut output = String::new();
        writeln!(output, "Search results for: \"{}\"", results.query).unwrap();
        writeln!(
            output,
            "Found {} results in {}ms\n",
            results.len(),
            results.duration_ms
        )
        .unwrap();

        for (i, row) in results.matches.iter().enumerate() {
            writeln!(output, "{}. [Similarity: {:.3}]", i + 1, row.similarity).unwrap();
            if let Some(file_name) = row.metadata.get("file_name").and_then(|v| v.as_str()) {
                let page = row.metadata.get("page").and_then(|v| v.as_u64());
                match page {
                    Some(page) => {
                        writeln!(output, "   Source: {} (page {})", file_name, page).unwrap()
                    }
                    None => writeln!(output, "   Source: {}", file_name).unwrap(),
                }
            }
            writeln!(output, "   ---").unwrap();

            let preview: String = row.content.chars().take(200).collect();
            let preview = if row.content.chars().count() > 200 {
                format!("{}...", preview)
            } else {
                preview
            };
            for line in preview.lines() {
                writeln!(output, "   {}", line).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    fn format_status(&self, status: &StatusInfo) -> String {
        let mut output = String::new();
        writeln!(output, "Status").unwrap();
        writeln!(output, "------").unwrap();

        let embedding = if status.embedding_reachable {
            "[OK]"
        } else {
            "[UNREACHABLE]"
        };
        writeln!(output, "Embedding API: {}", embedding).unwrap();
        writeln!(output, "  URL:         {}", status.embedding_url).unwrap();
        writeln!(output, "  Model:       {}", status.embedding_model).unwrap();

        let store = if status.vector_store_reachable {
            "[OK]"
        } else {
            "[UNREACHABLE]"
        };
        writeln!(output, "Vector store:  {}", store).unwrap();
        writeln!(output, "  URL:         {}", status.vector_store_url).unwrap();

        output
    }

    fn format_message(&self, message: &str) -> String {
        format!("{}\n", message)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}\n", error)
    }
}

pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .map(|s| format!("{}\n", s))
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}\n", e))
    }
}

impl Formatter for JsonFormatter {
    fn format_ingest_report(&self, report: &IngestReport) -> String {
        Self::to_json(report)
    }

    fn format_search_results(&self, results: &SearchResults) -> String {
        Self::to_json(results)
    }

    fn format_status(&self, status: &StatusInfo) -> String {
        Self::to_json(status)
    }

    fn format_message(&self, message: &str) -> String {
        Self::to_json(&serde_json::json!({ "message": message }))
    }

    fn format_error(&self, error: &str) -> String {
        Self::to_json(&serde_json::json!({ "error": error }))
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileOutcome, SearchMatch};

    #[test]
    fn test_text_report_lists_failures() {
        let mut report = IngestReport {
            files_selected: 2,
            ..Default::default()
        };
        report.record(FileOutcome {
            file_name: "good.pdf".to_string(),
            status: FileStatus::Loaded {
                pages: 1,
                chunks: 4,
                batches: 1,
            },
        });
        report.record(FileOutcome {
            file_name: "bad.pdf".to_string(),
            status: FileStatus::Failed {
                reason: "PDF parse error".to_string(),
            },
        });

        let text = TextFormatter.format_ingest_report(&report);
        assert!(text.contains("Loaded:         1"));
        assert!(text.contains("Failed:         1"));
        assert!(text.contains("bad.pdf: PDF parse error"));
    }

    #[test]
    fn test_json_report_round_trips() {
        let report = IngestReport {
            files_selected: 3,
            dry_run: true,
            ..Default::default()
        };
        let json = JsonFormatter.format_ingest_report(&report);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["files_selected"], 3);
        assert_eq!(value["dry_run"], true);
    }

    #[test]
    fn test_text_search_results_with_page_source() {
        let results = SearchResults::new(
            "tax rules".to_string(),
            vec![SearchMatch {
                id: serde_json::json!(7),
                content: "some matched chunk".to_string(),
                metadata: serde_json::json!({"file_name": "rules.pdf", "page": 4}),
                similarity: 0.91,
            }],
            12,
        );
        let text = TextFormatter.format_search_results(&results);
        assert!(text.contains("rules.pdf (page 4)"));
        assert!(text.contains("[Similarity: 0.910]"));
    }

    #[test]
    fn test_empty_search_results() {
        let results = SearchResults::new("nothing".to_string(), vec![], 5);
        let text = TextFormatter.format_search_results(&results);
        assert!(text.contains("No results found"));
    }
}
