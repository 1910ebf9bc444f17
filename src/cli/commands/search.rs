//! Search command: query the server-side match function.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::get_formatter;
use crate::error::SearchError;
use crate::models::{Config, DEFAULT_QUERY_NAME, OutputFormat, SearchResults};
use crate::services::{EmbeddingClient, VectorStoreClient};

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(required = true, help = "Search query text")]
    pub query: String,

    #[arg(
        long,
        env = "MATCH_QUERY_NAME",
        help = "Server-side match function to invoke"
    )]
    pub query_name: Option<String>,

    #[arg(long, short = 'n', help = "Maximum number of results to return")]
    pub limit: Option<u64>,
}

pub async fn handle_search(args: SearchArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(SearchError::InvalidQuery("search query cannot be empty".to_string()).into());
    }

    let limit = args.limit.unwrap_or(10);
    if limit == 0 {
        return Err(SearchError::InvalidQuery("limit must be at least 1".to_string()).into());
    }

    let query_name = args
        .query_name
        .clone()
        .unwrap_or_else(|| DEFAULT_QUERY_NAME.to_string());

    let config = Config::from_env()?;
    let formatter = get_formatter(format);
    let start_time = Instant::now();

    if verbose {
        eprintln!("Query: \"{}\"", query);
        eprintln!("  Match function: {}", query_name);
        eprintln!("  Limit: {}", limit);
    }

    let embedding_client = EmbeddingClient::new(&config.embedding)?;
    let vector_client = VectorStoreClient::new(&config.vector_store)?;

    let query_embedding = embedding_client
        .embed_query(query)
        .await
        .context("failed to generate query embedding")?;

    let matches = vector_client
        .similarity_search(&query_name, &query_embedding, limit)
        .await
        .context("search failed")?;

    let results = SearchResults::new(
        query.to_string(),
        matches,
        start_time.elapsed().as_millis() as u64,
    );

    print!("{}", formatter.format_search_results(&results));
    Ok(())
}
