//! MTG Arena exports: `4 Lightning Bolt (LEA) 161`, optionally tagged `*F*`.

use std::sync::OnceLock;

use regex::Regex;

use crate::import::line::{card_from_parts, is_skippable, LineOutcome};
use crate::import::simple::parse_simple;
use crate::models::{ParseError, ParsedCard};

/// Marks a foil copy anywhere on the line.
const FOIL_MARKER: &str = "*F*";

fn full_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\s+(.+?)\s+\(([A-Za-z0-9]+)\)\s+([0-9]+[A-Za-z]?)(?:\s+\*F\*)?\s*$")
            .expect("arena line regex")
    })
}

fn set_only_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+)\s+(.+?)\s+\(([A-Za-z0-9]+)\)").expect("arena set-only regex")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArenaParser;

impl ArenaParser {
    pub fn parse_line(&self, line: &str, line_number: usize) -> LineOutcome {
        if is_skippable(line) {
            return LineOutcome::Skip;
        }
        parse_arena(line, line_number).into()
    }
}

/// Try the full Arena layout, then the layout without a collector number,
/// then plain `<qty> <name>`.
fn parse_arena(line: &str, line_number: usize) -> Result<ParsedCard, ParseError> {
    let trimmed = line.trim();
    let foil = trimmed.contains(FOIL_MARKER);

    if let Some(caps) = full_regex().captures(trimmed) {
        let mut card = card_from_parts(line, line_number, &caps[1], &caps[2])?;
        card.set_code = Some(caps[3].to_uppercase());
        card.collector_number = Some(caps[4].to_string());
        card.foil = Some(foil);
        return Ok(card);
    }

    if let Some(caps) = set_only_regex().captures(trimmed) {
        let mut card = card_from_parts(line, line_number, &caps[1], &caps[2])?;
        card.set_code = Some(caps[3].to_uppercase());
        card.foil = Some(foil);
        return Ok(card);
    }

    parse_simple(line, line_number)
}
