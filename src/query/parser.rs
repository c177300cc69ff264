//! Query string to [`SearchFilters`] translation.
//!
//! Each token is tried as a comparison (`cmc>=3`), then as a `key:value`
//! filter looked up in [`KEY_FILTERS`], and otherwise kept as part of the
//! free-text card name. Nothing is ever rejected: unknown keys, empty values
//! and malformed comparisons all degrade to name text.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::RARITY_ALIASES;
use crate::models::SearchFilters;
use crate::query::tokenizer::tokenize;

// ---------------------------------------------------------------------------
// Key dispatch table
// ---------------------------------------------------------------------------

/// A `key:value` filter: the keys that select it and how the value is stored.
struct KeyFilter {
    keys: &'static [&'static str],
    apply: fn(&mut SearchFilters, &str),
}

/// Recognized filter keys, in priority order. The first entry whose `keys`
/// contains the lowercased key wins.
const KEY_FILTERS: &[KeyFilter] = &[
    KeyFilter { keys: &["t", "type"], apply: apply_type },
    KeyFilter { keys: &["c", "color"], apply: apply_colors },
    KeyFilter { keys: &["ci", "id"], apply: apply_color_identity },
    KeyFilter { keys: &["cmc", "mv"], apply: apply_cmc },
    KeyFilter { keys: &["f", "format"], apply: apply_format },
    KeyFilter { keys: &["r", "rarity"], apply: apply_rarity },
    KeyFilter { keys: &["set", "s", "e"], apply: apply_set },
    KeyFilter { keys: &["text", "o"], apply: apply_text },
    KeyFilter { keys: &["kw", "keyword"], apply: apply_keyword },
    KeyFilter { keys: &["artist", "a"], apply: apply_artist },
    KeyFilter { keys: &["pow", "power"], apply: apply_power },
    KeyFilter { keys: &["tou", "toughness"], apply: apply_toughness },
];

fn apply_type(filters: &mut SearchFilters, value: &str) {
    filters.type_line = Some(value.to_string());
}

fn apply_colors(filters: &mut SearchFilters, value: &str) {
    filters.colors = Some(split_colors(value));
}

fn apply_color_identity(filters: &mut SearchFilters, value: &str) {
    filters.color_identity = Some(split_colors(value));
}

fn apply_cmc(filters: &mut SearchFilters, value: &str) {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return;
    }
    if let Ok(cmc) = value.parse::<i64>() {
        filters.cmc = Some(cmc);
    }
}

fn apply_format(filters: &mut SearchFilters, value: &str) {
    filters.format_legal = Some(value.to_lowercase());
}

fn apply_rarity(filters: &mut SearchFilters, value: &str) {
    filters.rarity = Some(normalize_rarity(value));
}

fn apply_set(filters: &mut SearchFilters, value: &str) {
    filters.set_code = Some(value.to_uppercase());
}

fn apply_text(filters: &mut SearchFilters, value: &str) {
    filters.text = Some(value.to_string());
}

fn apply_keyword(filters: &mut SearchFilters, value: &str) {
    filters.keywords = Some(vec![value.to_string()]);
}

fn apply_artist(filters: &mut SearchFilters, value: &str) {
    filters.artist = Some(value.to_string());
}

fn apply_power(filters: &mut SearchFilters, value: &str) {
    filters.power = Some(value.to_string());
}

fn apply_toughness(filters: &mut SearchFilters, value: &str) {
    filters.toughness = Some(value.to_string());
}

/// `"rg"` -> `["R", "G"]`, keeping the typed order.
fn split_colors(value: &str) -> Vec<String> {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect()
}

fn normalize_rarity(value: &str) -> String {
    let lower = value.to_lowercase();
    RARITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, rarity)| rarity.to_string())
        .unwrap_or(lower)
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

fn comparison_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(cmc|pow|tou)(>=|<=|>|<|=)([0-9]+)$").expect("comparison regex")
    })
}

/// Apply a `field<op><integer>` token. Returns false if `token` is not one.
fn apply_comparison(filters: &mut SearchFilters, token: &str) -> bool {
    let Some(caps) = comparison_regex().captures(token) else {
        return false;
    };
    let field = caps[1].to_lowercase();
    let op = &caps[2];
    let digits = &caps[3];
    let Ok(value) = digits.parse::<i64>() else {
        return false;
    };

    match field.as_str() {
        "cmc" => match op {
            "=" => filters.cmc = Some(value),
            ">" => filters.cmc_min = Some(value.saturating_add(1)),
            ">=" => filters.cmc_min = Some(value),
            "<" => filters.cmc_max = Some(value - 1),
            _ => filters.cmc_max = Some(value),
        },
        "pow" => filters.power = Some(format!("{op}{digits}")),
        _ => filters.toughness = Some(format!("{op}{digits}")),
    }
    true
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse a search-bar string into filter criteria.
///
/// Never fails. Later tokens overwrite earlier ones for the same field.
///
/// ```
/// use mtg_ingest::parse_search_query;
///
/// let filters = parse_search_query(r#"c:RG t:creature "Lightning Bolt""#);
/// assert_eq!(filters.colors, Some(vec!["R".to_string(), "G".to_string()]));
/// assert_eq!(filters.type_line.as_deref(), Some("creature"));
/// assert_eq!(filters.name.as_deref(), Some("Lightning Bolt"));
/// ```
pub fn parse_search_query(query: &str) -> SearchFilters {
    let mut filters = SearchFilters::default();
    let mut name_parts: Vec<String> = Vec::new();

    for token in tokenize(query) {
        if apply_comparison(&mut filters, &token) {
            tracing::trace!(token = %token, "comparison filter");
            continue;
        }

        if let Some((key, value)) = token.split_once(':') {
            if !value.is_empty() {
                let key = key.to_lowercase();
                if let Some(filter) = KEY_FILTERS.iter().find(|f| f.keys.contains(&key.as_str())) {
                    tracing::trace!(token = %token, key = %key, "key filter");
                    (filter.apply)(&mut filters, value);
                    continue;
                }
            }
        }

        tracing::trace!(token = %token, "name fragment");
        name_parts.push(token);
    }

    let name = name_parts.join(" ");
    if !name.is_empty() {
        filters.name = Some(name);
    }
    filters
}

fn filter_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let keys: Vec<String> = KEY_FILTERS
            .iter()
            .flat_map(|f| f.keys.iter())
            .map(|k| regex::escape(k))
            .collect();
        Regex::new(&format!(r"(?i)\b(?:{}):", keys.join("|"))).expect("filter key regex")
    })
}

/// Returns true if `query` contains a recognized `key:` filter prefix.
///
/// Matching is case-insensitive and anchored at a word boundary, so
/// `"T:land"` and `"foo c:r"` match but `"hat:x"` does not.
pub fn has_query_filters(query: &str) -> bool {
    filter_key_regex().is_match(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for filter in KEY_FILTERS {
            for key in filter.keys {
                assert!(seen.insert(*key), "duplicate filter key {key}");
            }
        }
    }

    #[test]
    fn split_colors_uppercases_in_order() {
        assert_eq!(split_colors("wUb"), vec!["W", "U", "B"]);
    }

    #[test]
    fn normalize_rarity_aliases() {
        assert_eq!(normalize_rarity("M"), "mythic");
        assert_eq!(normalize_rarity("mythicrare"), "mythic");
        assert_eq!(normalize_rarity("Uncommon"), "uncommon");
        assert_eq!(normalize_rarity("Special"), "special");
    }

    #[test]
    fn comparison_rejects_non_comparisons() {
        let mut filters = SearchFilters::default();
        assert!(!apply_comparison(&mut filters, "cmc:3"));
        assert!(!apply_comparison(&mut filters, "cmc>x"));
        assert!(!apply_comparison(&mut filters, "loy>3"));
        assert!(filters.is_empty());
    }

    #[test]
    fn stat_comparison_keeps_typed_digits() {
        let mut filters = SearchFilters::default();
        assert!(apply_comparison(&mut filters, "pow>=04"));
        assert!(apply_comparison(&mut filters, "TOU=007"));
        assert_eq!(filters.power.as_deref(), Some(">=04"));
        assert_eq!(filters.toughness.as_deref(), Some("=007"));
    }

    #[test]
    fn non_ascii_digits_are_not_comparisons() {
        let mut filters = SearchFilters::default();
        assert!(!apply_comparison(&mut filters, "cmc>٣"));
        assert!(filters.is_empty());
    }

    #[test]
    fn comparison_overflow_is_not_a_comparison() {
        let mut filters = SearchFilters::default();
        assert!(!apply_comparison(&mut filters, "cmc>99999999999999999999"));
    }
}
