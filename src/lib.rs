//! Text ingestion for Magic: The Gathering tooling.
//!
//! Two independent parsers turn free-form user input into typed records:
//!
//! * [`parse_search_query`] reads a search-bar string such as
//!   `t:creature c:RG cmc>2 "Llanowar Elves"` into [`SearchFilters`].
//! * [`parse_collection_text`] reads a pasted card list (plain, CSV, or MTG
//!   Arena export) into [`ParsedCard`]s plus a [`ParseError`] per bad line.
//!
//! Both are pure and total: they never fail and never touch shared state.
//!
//! # Quick start
//!
//! ```
//! use mtg_ingest::{import_stats, merge_cards, parse_collection_text, parse_search_query};
//!
//! let filters = parse_search_query("t:instant r:u Bolt");
//! assert_eq!(filters.rarity.as_deref(), Some("uncommon"));
//!
//! let result = parse_collection_text("4 Lightning Bolt\n1 Lightning Bolt\n2x Opt", None);
//! let cards = merge_cards(&result.cards);
//! let stats = import_stats(&cards);
//! assert_eq!(stats.unique_cards, 2);
//! assert_eq!(stats.total_quantity, 7);
//! ```

#[cfg(feature = "async")]
pub mod async_import;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod query;

pub use error::{IngestError, Result};
pub use import::{
    detect_format, import_stats, merge_cards, parse_collection_file, parse_collection_text,
    CollectionImporter, CollectionImporterBuilder,
};
pub use models::{ImportFormat, ImportStats, ParseError, ParseResult, ParsedCard, SearchFilters};
pub use query::{has_query_filters, parse_search_query};
