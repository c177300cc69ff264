//! Best-effort classification of pasted collection text.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ARENA_SNIFF_LINES;
use crate::models::ImportFormat;

fn arena_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9]+\s+.+\s+\([A-Za-z0-9]+\)\s+[0-9]+").expect("arena detection regex")
    })
}

/// Guess the layout of `text`. Never fails; anything unrecognized is
/// [`ImportFormat::Simple`].
///
/// ```
/// use mtg_ingest::{detect_format, ImportFormat};
///
/// assert_eq!(detect_format("4 Lightning Bolt (LEA) 161"), ImportFormat::Arena);
/// assert_eq!(detect_format("quantity,name\n4,Lightning Bolt"), ImportFormat::Csv);
/// assert_eq!(detect_format("4 Lightning Bolt"), ImportFormat::Simple);
/// ```
pub fn detect_format(text: &str) -> ImportFormat {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return ImportFormat::Simple;
    };

    let header = first.to_lowercase();
    let looks_like_header = header.contains("quantity")
        || header.contains("name")
        || (header.contains(',') && lines.len() > 1);
    if looks_like_header && header.contains(',') {
        return ImportFormat::Csv;
    }

    if lines
        .iter()
        .take(ARENA_SNIFF_LINES)
        .any(|l| arena_line_regex().is_match(l))
    {
        return ImportFormat::Arena;
    }

    ImportFormat::Simple
}
