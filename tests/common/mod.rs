//! Shared fixtures for the ingestion integration tests.

#![allow(dead_code)]

use mtg_ingest::ParsedCard;

/// A plain list with a multiplier, a blank line, a comment and a bare name.
pub const SIMPLE_LIST: &str = "4 Lightning Bolt\n2x Counterspell\n\n# comment\nbad line: 0 ";

/// An MTG Arena export with a foil line and a line lacking a collector number.
pub const ARENA_EXPORT: &str = "\
4 Lightning Bolt (LEA) 161
2 Counterspell (7ED) 67 *F*
1 Opt (XLN)
// Sideboard
1 Fable of the Mirror-Breaker (NEO) 141a
";

/// A CSV export using the canonical header names.
pub const CSV_EXPORT: &str = "\
quantity,name,set_code,collector_number,foil
4,Lightning Bolt,lea,161,false
2,\"Borrowing 100,000 Arrows\",me3,25,yes

1,Opt,,,
";

/// Build a card with every field set.
pub fn card(
    name: &str,
    quantity: u32,
    set_code: Option<&str>,
    collector_number: Option<&str>,
    foil: Option<bool>,
) -> ParsedCard {
    ParsedCard {
        name: name.to_string(),
        quantity,
        set_code: set_code.map(str::to_string),
        collector_number: collector_number.map(str::to_string),
        foil,
    }
}
