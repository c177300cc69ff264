use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;

// ---------------------------------------------------------------------------
// SearchFilters — Typed criteria parsed from a search-bar string
// ---------------------------------------------------------------------------

/// Filter criteria produced by [`parse_search_query`](crate::parse_search_query).
///
/// Every field except `page_size` is optional; `None` means "no constraint".
/// `cmc` and the `cmc_min`/`cmc_max` bounds are written independently, so a
/// query mixing `cmc:3` with `cmc>2` leaves both populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_identity: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmc_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_legal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toughness: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            name: None,
            type_line: None,
            colors: None,
            color_identity: None,
            cmc: None,
            cmc_min: None,
            cmc_max: None,
            format_legal: None,
            rarity: None,
            set_code: None,
            text: None,
            keywords: None,
            artist: None,
            power: None,
            toughness: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchFilters {
    /// Returns true if no constraint is set (the page size is not a constraint).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.type_line.is_none()
            && self.colors.is_none()
            && self.color_identity.is_none()
            && self.cmc.is_none()
            && self.cmc_min.is_none()
            && self.cmc_max.is_none()
            && self.format_legal.is_none()
            && self.rarity.is_none()
            && self.set_code.is_none()
            && self.text.is_none()
            && self.keywords.is_none()
            && self.artist.is_none()
            && self.power.is_none()
            && self.toughness.is_none()
    }

    /// Serialize to a JSON object, omitting unset fields.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
