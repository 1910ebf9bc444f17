//! Batched embedding and upload of document chunks.

use crate::error::IngestError;
use crate::models::DocumentChunk;
use crate::services::{ChunkRow, EmbeddingClient, VectorStoreClient};

/// Embed and upload `chunks` to `table` in contiguous batches of at most
/// `batch_size`, preserving order. Returns the number of batches sent.
///
/// Every chunk is processed exactly once; `ceil(N / batch_size)` upsert
/// calls are made and the final batch absorbs the remainder. A failure
/// propagates immediately: there is no per-batch catch and no retry, and
/// batches already sent for this file stay persisted.
pub async fn upload_in_batches(
    embedding_client: &EmbeddingClient,
    vector_client: &VectorStoreClient,
    table: &str,
    chunks: &[DocumentChunk],
    batch_size: usize,
) -> Result<u64, IngestError> {
    if chunks.is_empty() {
        return Ok(0);
    }

    let mut batches = 0u64;
    for (index, batch) in chunks.chunks(batch_size).enumerate() {
        let texts: Vec<String> = batch.iter().map(|chunk| chunk.content.clone()).collect();
        let embeddings = embedding_client.embed_batch(&texts).await?;

        let rows: Vec<ChunkRow> = batch
            .iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| ChunkRow::new(chunk, embedding))
            .collect();

        vector_client.upsert_rows(table, &rows).await?;
        println!("batch {} completed", index);
        batches += 1;
    }

    Ok(batches)
}

/// Number of upload calls needed for `total` chunks at `batch_size`.
pub fn batch_count(total: usize, batch_size: usize) -> u64 {
    if batch_size == 0 {
        return 0;
    }
    total.div_ceil(batch_size) as u64
}
