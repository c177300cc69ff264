//! Search-bar query parsing.
//!
//! [`parse_search_query`] turns a free-form query such as
//! `t:creature c:RG cmc>2 "Lightning Bolt"` into [`SearchFilters`](crate::models::SearchFilters).

pub mod parser;
pub mod tokenizer;

pub use parser::{has_query_filters, parse_search_query};
pub use tokenizer::tokenize;
