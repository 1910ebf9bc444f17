//! Ingest command: the per-file pipeline driver.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::output::get_formatter;
use crate::error::IngestError;
use crate::models::{
    Config, FileOutcome, FileStatus, IndexRange, IngestReport, OutputFormat,
};
use crate::services::{
    EmbeddingClient, PdfLoader, TextChunker, VectorStoreClient, batch_count, sanitize_documents,
    upload_in_batches,
};
use crate::utils::display_file_name;

#[derive(Debug, Args)]
pub struct IngestArgs {
    #[arg(required = true, help = "Directory containing the source documents")]
    pub dir: PathBuf,

    #[arg(
        long,
        short = 't',
        env = "VECTOR_TABLE",
        help = "Destination table in the vector store"
    )]
    pub table: String,

    #[arg(
        long,
        help = "Sub-range of the sorted directory listing to ingest, e.g. '11..15'"
    )]
    pub range: Option<IndexRange>,

    #[arg(long, help = "Chunk and report without embedding or uploading")]
    pub dry_run: bool,
}

pub async fn handle_ingest(args: IngestArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    let config = Config::from_env()?;
    let report = run_ingest(&config, &args, verbose).await?;

    let formatter = get_formatter(format);
    print!("{}", formatter.format_ingest_report(&report));
    println!("Completed");

    // Per-file failures are already in the report; only a run that could
    // not start at all exits non-zero.
    Ok(())
}

/// Everything a single file needs to flow through the pipeline.
struct IngestContext<'a> {
    loader: PdfLoader,
    chunker: TextChunker,
    embedding_client: &'a EmbeddingClient,
    vector_client: &'a VectorStoreClient,
    table: &'a str,
    batch_size: usize,
    dry_run: bool,
}

struct FileStats {
    pages: u32,
    chunks: u64,
    batches: u64,
}

/// Run the ingest pipeline over the selected directory entries.
///
/// Failures are isolated per file: any pipeline error becomes a `Failed`
/// outcome and the loop moves on to the next entry.
pub async fn run_ingest(config: &Config, args: &IngestArgs, verbose: bool) -> Result<IngestReport> {
    let start_time = Instant::now();

    let entries = list_entries(&args.dir)?;
    let selected: Vec<PathBuf> = match args.range {
        Some(range) => range.slice(&entries).to_vec(),
        None => entries.clone(),
    };

    if verbose {
        eprintln!(
            "Selected {} of {} directory entries",
            selected.len(),
            entries.len()
        );
    }

    let embedding_client = EmbeddingClient::new(&config.embedding)?;
    let vector_client = VectorStoreClient::new(&config.vector_store)?;

    let ctx = IngestContext {
        loader: PdfLoader::new(),
        chunker: TextChunker::new(&config.chunking),
        embedding_client: &embedding_client,
        vector_client: &vector_client,
        table: &args.table,
        batch_size: config.vector_store.batch_size,
        dry_run: args.dry_run,
    };

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut report = IngestReport {
        files_selected: selected.len() as u64,
        dry_run: args.dry_run,
        ..Default::default()
    };

    for path in &selected {
        pb.inc(1);
        let file_name = display_file_name(path);

        match process_file(&ctx, path).await {
            Ok(stats) => {
                pb.println(format!("[LOADED] file {} berhasil di-load.", file_name));
                report.record(FileOutcome {
                    file_name,
                    status: FileStatus::Loaded {
                        pages: stats.pages,
                        chunks: stats.chunks,
                        batches: stats.batches,
                    },
                });
            }
            Err(err) => {
                pb.println(format!("[FAIL] File {} gagal diload: {}", file_name, err));
                report.record(FileOutcome {
                    file_name,
                    status: FileStatus::Failed {
                        reason: err.to_string(),
                    },
                });
            }
        }
    }

    pb.finish_and_clear();
    report.duration_ms = start_time.elapsed().as_millis() as u64;
    Ok(report)
}

/// Load, sanitize, chunk and upload one file.
async fn process_file(ctx: &IngestContext<'_>, path: &Path) -> Result<FileStats, IngestError> {
    let mut documents = ctx.loader.load(path)?;
    sanitize_documents(&mut documents);
    let chunks = ctx.chunker.chunk_all(&documents);

    let batches = if ctx.dry_run {
        batch_count(chunks.len(), ctx.batch_size)
    } else {
        upload_in_batches(
            ctx.embedding_client,
            ctx.vector_client,
            ctx.table,
            &chunks,
            ctx.batch_size,
        )
        .await?
    };

    Ok(FileStats {
        pages: documents.len() as u32,
        chunks: chunks.len() as u64,
        batches,
    })
}

/// Flat listing of the source directory, sorted by path so `--range`
/// selections are reproducible across runs.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
    {
        let entry = entry.context("failed to read directory entry")?;
        if entry.path().is_file() {
            entries.push(entry.path());
        }
    }
    entries.sort();
    Ok(entries)
}
