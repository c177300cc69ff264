use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

// ---------------------------------------------------------------------------
// ParsedCard — One accepted import record
// ---------------------------------------------------------------------------

/// A card entry read from one line of an import.
///
/// `quantity` is within `MIN_QUANTITY..=MAX_QUANTITY` when produced by a line
/// parser and may grow up to `MERGED_QUANTITY_CAP` after merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCard {
    pub name: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foil: Option<bool>,
}

impl ParsedCard {
    /// A card with only a name and quantity.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            set_code: None,
            collector_number: None,
            foil: None,
        }
    }

    pub fn is_foil(&self) -> bool {
        self.foil.unwrap_or(false)
    }

    /// Key deciding whether two records describe the same collection entry.
    ///
    /// `name|SET|number` when both printing identifiers are known, otherwise
    /// the lowercased name alone.
    pub fn identity_key(&self) -> String {
        let name = self.name.to_lowercase();
        match (&self.set_code, &self.collector_number) {
            (Some(set), Some(number)) => format!("{name}|{set}|{number}"),
            _ => name,
        }
    }
}

// ---------------------------------------------------------------------------
// ParseError — One rejected import line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(line: usize, text: &str, reason: impl Into<String>) -> Self {
        Self {
            line,
            text: text.trim().to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.reason)
    }
}

// ---------------------------------------------------------------------------
// ParseResult — Cards and errors of one import, in input order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub cards: Vec<ParsedCard>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Serialize to JSON for handing across a process boundary.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ---------------------------------------------------------------------------
// ImportStats — Aggregate counters over a card list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStats {
    /// Number of records.
    pub unique_cards: usize,
    /// Sum of all quantities.
    pub total_quantity: u64,
    /// Records carrying a set code.
    pub with_set_code: usize,
    /// Records flagged foil.
    pub foil_count: usize,
}
