//! CLI module for the PDF ingestion tool.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::models::OutputFormat;

/// PDF ingestion CLI: load, chunk, embed and upload documents to a
/// remote vector table.
#[derive(Debug, Parser)]
#[command(name = "pdfload")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(long, short = 'f', global = true, help = "Output format: text or json")]
    pub format: Option<OutputFormat>,

    #[arg(long, short = 'v', global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ingest PDF documents from a directory into the vector store
    Ingest(commands::IngestArgs),

    /// Search ingested content via the server-side match function
    Search(commands::SearchArgs),

    /// Check that the embedding API and vector store are reachable
    Status,
}
