use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::{BALITA_MAX_MONTHS, REMAJA_MAX_MONTHS};
use super::subject::Gender;
use crate::error::CoreError;

/// The four WHO/Kemenkes growth-standard tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReferenceTable {
    /// Weight-for-age, 0–60 months.
    BalitaBbu,
    /// Height-for-age, 0–60 months.
    BalitaTbu,
    /// Weight-for-height, keyed by height in 0.5 cm steps.
    BalitaBbtb,
    /// BMI-for-age, 61–216 months.
    RemajaImtu,
}

/// How rows of a table are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    AgeMonths,
    Height,
}

impl ReferenceTable {
    pub const ALL: [ReferenceTable; 4] = [
        ReferenceTable::BalitaBbu,
        ReferenceTable::BalitaTbu,
        ReferenceTable::BalitaBbtb,
        ReferenceTable::RemajaImtu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceTable::BalitaBbu => "balita_bbu",
            ReferenceTable::BalitaTbu => "balita_tbu",
            ReferenceTable::BalitaBbtb => "balita_bbtb",
            ReferenceTable::RemajaImtu => "remaja_imtu",
        }
    }

    pub fn key_kind(&self) -> KeyKind {
        match self {
            ReferenceTable::BalitaBbtb => KeyKind::Height,
            _ => KeyKind::AgeMonths,
        }
    }

    /// Inclusive age range the table covers. `None` for height-keyed tables.
    pub fn age_domain(&self) -> Option<(u32, u32)> {
        match self {
            ReferenceTable::BalitaBbu | ReferenceTable::BalitaTbu => Some((0, BALITA_MAX_MONTHS)),
            ReferenceTable::RemajaImtu => Some((BALITA_MAX_MONTHS + 1, REMAJA_MAX_MONTHS)),
            ReferenceTable::BalitaBbtb => None,
        }
    }

    /// Clamp an age to the table's domain before lookup.
    pub fn clamp_age(&self, age_months: u32) -> u32 {
        match self.age_domain() {
            Some((min, max)) => age_months.clamp(min, max),
            None => age_months,
        }
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceTable {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceTable::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::InvalidTable(s.to_string()))
    }
}

/// One row of a growth-standard table: the seven SD anchors for a
/// gender and an age (in months) or a height (in cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRow {
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub neg3sd: f64,
    pub neg2sd: f64,
    pub neg1sd: f64,
    pub median: f64,
    pub pos1sd: f64,
    pub pos2sd: f64,
    pub pos3sd: f64,
}

impl ReferenceRow {
    pub fn anchors(&self) -> [f64; 7] {
        [
            self.neg3sd,
            self.neg2sd,
            self.neg1sd,
            self.median,
            self.pos1sd,
            self.pos2sd,
            self.pos3sd,
        ]
    }

    /// Anchors never decrease from -3 SD to +3 SD.
    pub fn is_monotonic(&self) -> bool {
        self.anchors().windows(2).all(|w| w[0] <= w[1])
    }

    /// Either half of the skewed SD collapses to zero.
    pub fn is_degenerate(&self) -> bool {
        self.pos1sd == self.median || self.median == self.neg1sd
    }
}

/// Height rounded to the nearest 0.5 cm, the resolution of BB/TB rows.
pub fn round_to_half_cm(height: f64) -> f64 {
    (height * 2.0).round() / 2.0
}

/// Integer key for a height in tenths of a centimetre, so rows can be
/// matched exactly without comparing floats.
pub fn height_key(height: f64) -> i32 {
    (height * 10.0).round() as i32
}
