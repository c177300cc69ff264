//! The per-line contract shared by every import format.

use crate::config::{MAX_QUANTITY, MIN_QUANTITY};
use crate::import::arena::ArenaParser;
use crate::import::csv::CsvParser;
use crate::import::simple::SimpleParser;
use crate::models::{ParseError, ParsedCard};

/// What one input line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Card(ParsedCard),
    /// Blank or comment line: neither a card nor an error.
    Skip,
    Error(ParseError),
}

/// A line parser for one import format, chosen once per import.
///
/// Parsing takes `&mut self` so the CSV variant can reuse its row reader.
#[derive(Debug)]
pub enum LineParser {
    Simple(SimpleParser),
    Arena(ArenaParser),
    Csv(CsvParser),
}

impl LineParser {
    /// Parse `line`, reporting errors against 1-based `line_number`.
    pub fn parse_line(&mut self, line: &str, line_number: usize) -> LineOutcome {
        match self {
            LineParser::Simple(p) => p.parse_line(line, line_number),
            LineParser::Arena(p) => p.parse_line(line, line_number),
            LineParser::Csv(p) => p.parse_line(line, line_number),
        }
    }
}

/// Blank lines and `#` / `//` comments.
pub(crate) fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//")
}

/// Parse and range-check a quantity, echoing `raw` in the error reason.
pub(crate) fn parse_quantity(raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|q| (MIN_QUANTITY..=MAX_QUANTITY).contains(q))
        .ok_or_else(|| format!("Invalid quantity: {}", raw.trim()))
}

/// Build a card from already-captured pieces, validating quantity and name.
pub(crate) fn card_from_parts(
    line: &str,
    line_number: usize,
    quantity: &str,
    name: &str,
) -> Result<ParsedCard, ParseError> {
    let quantity =
        parse_quantity(quantity).map_err(|reason| ParseError::new(line_number, line, reason))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::new(line_number, line, "Card name is empty"));
    }
    Ok(ParsedCard::new(name, quantity))
}

impl From<Result<ParsedCard, ParseError>> for LineOutcome {
    fn from(result: Result<ParsedCard, ParseError>) -> Self {
        match result {
            Ok(card) => LineOutcome::Card(card),
            Err(err) => LineOutcome::Error(err),
        }
    }
}
