use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Layout of a pasted or uploaded collection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// One card per line: `4 Lightning Bolt`, `2x Counterspell`, `Island`.
    #[default]
    Simple,
    /// Header-driven comma separated values.
    Csv,
    /// MTG Arena export: `4 Lightning Bolt (LEA) 161`.
    Arena,
}

impl ImportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportFormat::Simple => "simple",
            ImportFormat::Csv => "csv",
            ImportFormat::Arena => "arena",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(ImportFormat::Simple),
            "csv" => Ok(ImportFormat::Csv),
            "arena" | "mtga" => Ok(ImportFormat::Arena),
            other => Err(IngestError::InvalidArgument(format!(
                "Unknown import format: {other}"
            ))),
        }
    }
}
