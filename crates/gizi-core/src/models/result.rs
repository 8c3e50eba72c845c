use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;
use super::status::{StatusTag, UNAVAILABLE_LABEL};
use crate::age::AgeAtMeasurement;

/// Outcome of one Z-score indicator (BB/U, TB/U, BB/TB, IMT/U).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorResult {
    /// Rounded to two decimals. `None` when no reference row was found.
    pub zscore: Option<f64>,
    pub status: String,
    pub tag: StatusTag,
    pub reason: Option<String>,
    /// The reference row had a zero-width SD half, so the Z-score was
    /// forced to 0 rather than computed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub degenerate_reference: bool,
}

impl IndicatorResult {
    pub fn unavailable() -> Self {
        Self {
            zscore: None,
            status: UNAVAILABLE_LABEL.to_string(),
            tag: StatusTag::Unavailable,
            reason: None,
            degenerate_reference: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.tag != StatusTag::Unavailable
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BalitaResult {
    /// Height after the posture correction, used for TB/U and BB/TB.
    pub adjusted_height: f64,
    pub bbu: IndicatorResult,
    pub tbu: IndicatorResult,
    pub bbtb: IndicatorResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RemajaResult {
    pub bmi: f64,
    pub imtu: IndicatorResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CentralObesity {
    pub status: String,
    pub tag: StatusTag,
    /// Absent when the check was skipped for pregnancy.
    pub has_central_obesity: Option<bool>,
    pub threshold: Option<f64>,
    pub actual: Option<f64>,
    pub difference: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LilaResult {
    pub status: String,
    pub tag: StatusTag,
    pub actual: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DewasaResult {
    pub bmi: f64,
    /// Prefixed "Ibu Hamil (...)" for pregnant subjects.
    pub status: String,
    pub tag: StatusTag,
    pub reason: String,
    pub is_pregnant: bool,
    pub central_obesity: Option<CentralObesity>,
    pub lila: Option<LilaResult>,
}

/// Category-specific part of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "category", rename_all = "snake_case")]
#[ts(export)]
pub enum CategoryResult {
    Balita(BalitaResult),
    Remaja(RemajaResult),
    Dewasa(DewasaResult),
}

impl CategoryResult {
    pub fn category(&self) -> Category {
        match self {
            CategoryResult::Balita(_) => Category::Balita,
            CategoryResult::Remaja(_) => Category::Remaja,
            CategoryResult::Dewasa(_) => Category::Dewasa,
        }
    }

    /// Rounded BMI, for the categories that compute one.
    pub fn bmi(&self) -> Option<f64> {
        match self {
            CategoryResult::Balita(_) => None,
            CategoryResult::Remaja(r) => Some(r.bmi),
            CategoryResult::Dewasa(d) => Some(d.bmi),
        }
    }

    /// Tag of the indicator used for population statistics: BB/TB for
    /// balita, IMT/U for remaja, BMI for dewasa.
    pub fn primary_tag(&self) -> StatusTag {
        match self {
            CategoryResult::Balita(b) => b.bbtb.tag,
            CategoryResult::Remaja(r) => r.imtu.tag,
            CategoryResult::Dewasa(d) => d.tag,
        }
    }
}

/// Standard range shown next to an indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceNote {
    pub indicator: String,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Meningkat,
    Menurun,
    Stabil,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Meningkat => "meningkat",
            TrendDirection::Menurun => "menurun",
            TrendDirection::Stabil => "stabil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Meningkat => "Meningkat",
            TrendDirection::Menurun => "Menurun",
            TrendDirection::Stabil => "Stabil",
        }
    }
}

/// BMI change against the subject's previous measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Trend {
    pub previous_bmi: f64,
    pub difference: f64,
    pub percentage: f64,
    pub status: TrendDirection,
    pub label: String,
    pub date: jiff::civil::Date,
}

/// Everything the engine returns for one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationResult {
    pub age: AgeAtMeasurement,
    pub result: CategoryResult,
    pub references: Vec<ReferenceNote>,
    pub recommendation: String,
    pub trend: Option<Trend>,
}

impl CalculationResult {
    pub fn category(&self) -> Category {
        self.result.category()
    }
}
