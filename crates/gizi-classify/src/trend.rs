//! BMI trend against a subject's previous measurement.

use gizi_core::models::measurement::Measurement;
use gizi_core::models::result::{Trend, TrendDirection};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::scoring::round_to;

/// BMI change (absolute) beyond which the trend is not "stabil".
pub const STABLE_BAND: f64 = 0.1;

/// BMI of a subject's most recent earlier measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorBmi {
    pub bmi: f64,
    pub date: jiff::civil::Date,
}

/// Source of a subject's previous measurements.
pub trait MeasurementHistory: Send + Sync {
    /// BMI of the latest measurement for `subject_id`, skipping
    /// `exclude` (the measurement being recalculated, if any). `None` when
    /// there is no earlier measurement or it carries no BMI.
    fn latest_bmi(&self, subject_id: Uuid, exclude: Option<Uuid>) -> Option<PriorBmi>;
}

impl MeasurementHistory for [Measurement] {
    fn latest_bmi(&self, subject_id: Uuid, exclude: Option<Uuid>) -> Option<PriorBmi> {
        let latest = self
            .iter()
            .filter(|m| m.subject_id == subject_id && Some(m.id) != exclude)
            .max_by_key(|m| (m.measurement_date, m.created_at))?;

        latest.bmi.map(|bmi| PriorBmi {
            bmi,
            date: latest.measurement_date,
        })
    }
}

impl MeasurementHistory for Vec<Measurement> {
    fn latest_bmi(&self, subject_id: Uuid, exclude: Option<Uuid>) -> Option<PriorBmi> {
        self.as_slice().latest_bmi(subject_id, exclude)
    }
}

/// Compare the current BMI with a prior one. A non-positive prior BMI
/// yields no trend.
pub fn compare(current_bmi: f64, prior: PriorBmi) -> Option<Trend> {
    if prior.bmi <= 0.0 {
        return None;
    }

    let diff = current_bmi - prior.bmi;
    let percent = diff / prior.bmi * 100.0;

    let direction = if diff > STABLE_BAND {
        TrendDirection::Meningkat
    } else if diff < -STABLE_BAND {
        TrendDirection::Menurun
    } else {
        TrendDirection::Stabil
    };

    Some(Trend {
        previous_bmi: round_to(prior.bmi, 2),
        difference: round_to(diff, 2),
        percentage: round_to(percent, 1),
        status: direction,
        label: direction.label().to_string(),
        date: prior.date,
    })
}
