use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Last month (inclusive) counted as balita.
pub const BALITA_MAX_MONTHS: u32 = 60;

/// Last month (inclusive) counted as remaja.
pub const REMAJA_MAX_MONTHS: u32 = 216;

/// Age category a measurement is classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    /// Under five: 0–60 months.
    Balita,
    /// Adolescent: 61–216 months.
    Remaja,
    /// Adult: over 216 months.
    Dewasa,
}

impl Category {
    pub fn from_age_months(months: u32) -> Self {
        if months <= BALITA_MAX_MONTHS {
            Category::Balita
        } else if months <= REMAJA_MAX_MONTHS {
            Category::Remaja
        } else {
            Category::Dewasa
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Balita => "balita",
            Category::Remaja => "remaja",
            Category::Dewasa => "dewasa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balita" => Ok(Category::Balita),
            "remaja" => Ok(Category::Remaja),
            "dewasa" => Ok(Category::Dewasa),
            other => Err(CoreError::InvalidCategory(other.to_string())),
        }
    }
}
