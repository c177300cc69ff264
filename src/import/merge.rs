//! Duplicate merging and summary counters over parsed cards.

use std::collections::HashMap;

use crate::config::MERGED_QUANTITY_CAP;
use crate::models::{ImportStats, ParsedCard};

/// Combine records sharing an [identity key](ParsedCard::identity_key).
///
/// Quantities are summed up to `MERGED_QUANTITY_CAP`, foil flags are OR'd,
/// and the first occurrence of each key keeps its position and its other
/// fields. Merging an already merged list returns it unchanged.
pub fn merge_cards(cards: &[ParsedCard]) -> Vec<ParsedCard> {
    let mut merged: Vec<ParsedCard> = Vec::with_capacity(cards.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for card in cards {
        let key = card.identity_key();
        match index.get(&key) {
            Some(&i) => {
                let existing = &mut merged[i];
                existing.quantity = existing
                    .quantity
                    .saturating_add(card.quantity)
                    .min(MERGED_QUANTITY_CAP);
                existing.foil = match (existing.foil, card.foil) {
                    (None, None) => None,
                    (a, b) => Some(a.unwrap_or(false) || b.unwrap_or(false)),
                };
            }
            None => {
                index.insert(key, merged.len());
                let mut first = card.clone();
                first.quantity = first.quantity.min(MERGED_QUANTITY_CAP);
                merged.push(first);
            }
        }
    }

    merged
}

/// Summary counters for a card list.
pub fn import_stats(cards: &[ParsedCard]) -> ImportStats {
    ImportStats {
        unique_cards: cards.len(),
        total_quantity: cards.iter().map(|c| u64::from(c.quantity)).sum(),
        with_set_code: cards.iter().filter(|c| c.set_code.is_some()).count(),
        foil_count: cards.iter().filter(|c| c.is_foil()).count(),
    }
}
