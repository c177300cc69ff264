//! Plain card lists: `4 Lightning Bolt`, `2x Counterspell`, `Island`.

use std::sync::OnceLock;

use regex::Regex;

use crate::import::line::{card_from_parts, is_skippable, LineOutcome};
use crate::models::{ParseError, ParsedCard};

fn quantity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^([0-9]+)x?\s+(.+)$").expect("simple line regex"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleParser;

impl SimpleParser {
    pub fn parse_line(&self, line: &str, line_number: usize) -> LineOutcome {
        if is_skippable(line) {
            return LineOutcome::Skip;
        }
        parse_simple(line, line_number).into()
    }
}

/// Parse a non-blank, non-comment line as `<qty>[x] <name>` or a bare name.
///
/// Also the last resort of the Arena parser.
pub(crate) fn parse_simple(line: &str, line_number: usize) -> Result<ParsedCard, ParseError> {
    let trimmed = line.trim();

    if let Some(caps) = quantity_regex().captures(trimmed) {
        return card_from_parts(line, line_number, &caps[1], &caps[2]);
    }

    if trimmed.is_empty() {
        return Err(ParseError::new(line_number, line, "Could not parse line"));
    }
    Ok(ParsedCard::new(trimmed, 1))
}
