use gizi_core::models::reference::ReferenceRow;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A Z-score against a reference row, at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScore {
    pub value: f64,
    /// The SD half used was zero and `value` was forced to 0.
    pub degenerate: bool,
}

/// Z-score with the WHO skewed SD: distances above the median are scaled
/// by (+1 SD − median), distances below by (median − −1 SD).
pub fn z_score(value: f64, row: &ReferenceRow) -> ZScore {
    let sd = if value >= row.median {
        row.pos1sd - row.median
    } else {
        row.median - row.neg1sd
    };

    if sd == 0.0 {
        return ZScore {
            value: 0.0,
            degenerate: true,
        };
    }

    ZScore {
        value: (value - row.median) / sd,
        degenerate: false,
    }
}

/// Body mass index from kilograms and centimetres.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round half away from zero to `decimals` places.
///
/// The scaled value is first cut to 15 significant digits, so a decimal
/// half that binary floats store just below .5 (1.005 is 1.00499...) still
/// rounds up.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    let pre_rounded = format!("{scaled:.14e}").parse::<f64>().unwrap_or(scaled);
    pre_rounded.round() / factor
}

/// Inclusive range a measurement field must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A measurement field that failed input validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: Option<f64>,
    pub expected_range: Option<ValueRange>,
    pub message: String,
}
