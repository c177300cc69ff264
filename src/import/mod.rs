//! Collection list import.
//!
//! Raw text is classified by [`detect_format`] (unless the caller names a
//! format), every line runs through the matching [`LineParser`], and the
//! cards and per-line errors come back together in a [`ParseResult`].

pub mod arena;
pub mod csv;
pub mod detect;
pub mod line;
pub mod merge;
pub mod simple;

pub use detect::detect_format;
pub use line::{LineOutcome, LineParser};
pub use merge::{import_stats, merge_cards};

use std::path::Path;

use crate::error::Result;
use crate::models::{ImportFormat, ParseResult};

/// Run `parser` over `(line_number, line)` pairs, keeping input order.
pub(crate) fn collect_lines<'a, I>(parser: &mut LineParser, lines: I) -> ParseResult
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut result = ParseResult::default();
    for (line_number, line) in lines {
        match parser.parse_line(line, line_number) {
            LineOutcome::Card(card) => result.cards.push(card),
            LineOutcome::Error(err) => result.errors.push(err),
            LineOutcome::Skip => {}
        }
    }
    result
}

/// Parse pasted collection text into cards and per-line errors.
///
/// `format` overrides detection. Never fails: unreadable lines are reported
/// in [`ParseResult::errors`].
///
/// ```
/// use mtg_ingest::parse_collection_text;
///
/// let result = parse_collection_text("4 Lightning Bolt\n2x Counterspell\n# sideboard\n0 Opt", None);
/// assert_eq!(result.cards.len(), 2);
/// assert_eq!(result.errors[0].line, 4);
/// assert_eq!(result.errors[0].reason, "Invalid quantity: 0");
/// ```
pub fn parse_collection_text(text: &str, format: Option<ImportFormat>) -> ParseResult {
    let format = match format {
        Some(format) => {
            tracing::debug!(%format, "import format given by caller");
            format
        }
        None => {
            let format = detect_format(text);
            tracing::debug!(%format, "import format detected");
            format
        }
    };

    let result = match format {
        ImportFormat::Csv => self::csv::parse_csv(text),
        ImportFormat::Simple => parse_numbered(text, LineParser::Simple(simple::SimpleParser)),
        ImportFormat::Arena => parse_numbered(text, LineParser::Arena(arena::ArenaParser)),
    };

    tracing::debug!(
        %format,
        cards = result.cards.len(),
        errors = result.errors.len(),
        "collection text parsed"
    );
    result
}

/// Line numbers count every raw input line, blank ones included.
fn parse_numbered(text: &str, mut parser: LineParser) -> ParseResult {
    collect_lines(&mut parser, text.lines().enumerate().map(|(i, line)| (i + 1, line)))
}

/// Read a UTF-8 list file and parse it like [`parse_collection_text`].
pub fn parse_collection_file<P: AsRef<Path>>(
    path: P,
    format: Option<ImportFormat>,
) -> Result<ParseResult> {
    let text = read_list_file(path.as_ref())?;
    Ok(parse_collection_text(&text, format))
}

fn read_list_file(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read collection file");
    Ok(text)
}

// ---------------------------------------------------------------------------
// CollectionImporterBuilder
// ---------------------------------------------------------------------------

/// Builder for a reusable [`CollectionImporter`].
///
/// Use [`CollectionImporter::builder()`] to obtain one.
#[derive(Debug, Clone, Default)]
pub struct CollectionImporterBuilder {
    format: Option<ImportFormat>,
    merge_duplicates: bool,
}

impl CollectionImporterBuilder {
    /// Always parse as `format` instead of detecting it per input.
    pub fn format(mut self, format: ImportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Merge duplicate cards before returning. Defaults to `false`.
    pub fn merge_duplicates(mut self, merge: bool) -> Self {
        self.merge_duplicates = merge;
        self
    }

    pub fn build(self) -> CollectionImporter {
        CollectionImporter {
            format: self.format,
            merge_duplicates: self.merge_duplicates,
        }
    }
}

// ---------------------------------------------------------------------------
// CollectionImporter
// ---------------------------------------------------------------------------

/// Import settings applied to every text passed to [`parse`](Self::parse).
#[derive(Debug, Clone, Default)]
pub struct CollectionImporter {
    format: Option<ImportFormat>,
    merge_duplicates: bool,
}

impl CollectionImporter {
    pub fn builder() -> CollectionImporterBuilder {
        CollectionImporterBuilder::default()
    }

    pub fn parse(&self, text: &str) -> ParseResult {
        let mut result = parse_collection_text(text, self.format);
        if self.merge_duplicates {
            result.cards = merge_cards(&result.cards);
        }
        result
    }

    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParseResult> {
        let text = read_list_file(path.as_ref())?;
        Ok(self.parse(&text))
    }
}
