//! Async entry points for use inside a Tokio runtime.
//!
//! Parsing is CPU-bound and never blocks on I/O, but a large pasted list
//! can still take long enough to stall an event loop. These wrappers move
//! the work onto [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use mtg_ingest::async_import::parse_collection_text_async;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let text = std::fs::read_to_string("collection.txt").unwrap();
//!     let result = parse_collection_text_async(text, None).await.unwrap();
//!     println!("{} cards, {} errors", result.cards.len(), result.errors.len());
//! }
//! ```

use crate::error::{IngestError, Result};
use crate::models::{ImportFormat, ParseResult, SearchFilters};
use crate::CollectionImporter;

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| IngestError::InvalidArgument(format!("Task join error: {e}")))
}

/// [`parse_collection_text`](crate::parse_collection_text) on the blocking pool.
pub async fn parse_collection_text_async(
    text: String,
    format: Option<ImportFormat>,
) -> Result<ParseResult> {
    run_blocking(move || crate::parse_collection_text(&text, format)).await
}

/// [`CollectionImporter::parse`] on the blocking pool.
pub async fn import_async(importer: CollectionImporter, text: String) -> Result<ParseResult> {
    run_blocking(move || importer.parse(&text)).await
}

/// [`parse_search_query`](crate::parse_search_query) on the blocking pool.
pub async fn parse_search_query_async(query: String) -> Result<SearchFilters> {
    run_blocking(move || crate::parse_search_query(&query)).await
}
