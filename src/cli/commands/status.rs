use anyhow::Result;

use crate::cli::output::{StatusInfo, get_formatter};
use crate::models::{Config, OutputFormat};
use crate::services::{EmbeddingClient, VectorStoreClient};

pub async fn handle_status(format: OutputFormat, _verbose: bool) -> Result<()> {
    let config = Config::from_env()?;
    let formatter = get_formatter(format);

    let embedding_reachable = match EmbeddingClient::new(&config.embedding) {
        Ok(client) => client.health_check().await.is_ok(),
        Err(_) => false,
    };

    let vector_store_reachable = match VectorStoreClient::new(&config.vector_store) {
        Ok(client) => client.health_check().await.is_ok(),
        Err(_) => false,
    };

    let status = StatusInfo {
        embedding_url: config.embedding.base_url.clone(),
        embedding_model: config.embedding.model.clone(),
        embedding_reachable,
        vector_store_url: config.vector_store.url.clone(),
        vector_store_reachable,
    };

    print!("{}", formatter.format_status(&status));

    if !embedding_reachable || !vector_store_reachable {
        eprintln!();
        if !embedding_reachable {
            eprintln!("Warning: embedding API not reachable. Check OPENAI_KEY and OPENAI_BASE_URL.");
        }
        if !vector_store_reachable {
            eprintln!(
                "Warning: vector store not reachable. Check SUPABASE_URL and SUPABASE_SERVICE_KEY."
            );
        }
    }

    Ok(())
}
