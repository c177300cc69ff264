use std::collections::HashMap;

/// Smallest quantity accepted on a single import line.
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity accepted on a single import line.
pub const MAX_QUANTITY: u32 = 99;
/// Upper bound for a merged quantity after duplicates are combined.
pub const MERGED_QUANTITY_CAP: u32 = 9999;

/// Result page size used when a query does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Number of leading lines inspected when sniffing for an Arena export.
pub const ARENA_SNIFF_LINES: usize = 5;

/// Values of a CSV foil column that count as foil (compared case-insensitively).
pub const FOIL_TRUTHY: &[&str] = &["true", "1", "yes"];

/// Short rarity spellings accepted by the `r:`/`rarity:` filter.
pub const RARITY_ALIASES: &[(&str, &str)] = &[
    ("c", "common"),
    ("u", "uncommon"),
    ("r", "rare"),
    ("m", "mythic"),
    ("mythicrare", "mythic"),
];

const QUANTITY_HEADERS: &[&str] = &["quantity", "qty", "count"];
const NAME_HEADERS: &[&str] = &["name", "card", "card_name", "cardname"];
const SET_CODE_HEADERS: &[&str] = &["set_code", "set", "edition", "setcode"];
const COLLECTOR_NUMBER_HEADERS: &[&str] =
    &["collector_number", "number", "collectornumber", "cn"];
const FOIL_HEADERS: &[&str] = &["foil", "is_foil", "isfoil"];

/// Logical CSV columns, keyed to the lowercased header spellings that select them.
pub fn csv_header_aliases() -> HashMap<&'static str, &'static [&'static str]> {
    HashMap::from([
        ("quantity", QUANTITY_HEADERS),
        ("name", NAME_HEADERS),
        ("set_code", SET_CODE_HEADERS),
        ("collector_number", COLLECTOR_NUMBER_HEADERS),
        ("foil", FOIL_HEADERS),
    ])
}
