use gizi_core::age::AgeAtMeasurement;
use gizi_core::models::category::Category;
use gizi_core::models::measurement::{MeasurementInput, MeasurementPosture};
use gizi_core::models::reference::ReferenceTable;
use gizi_core::models::result::{BalitaResult, CategoryResult, ReferenceNote};
use gizi_core::models::status::StatusTag;
use gizi_core::models::subject::Gender;
use gizi_reference::lookup::{lookup_by_age, lookup_by_height};
use gizi_reference::provider::ReferenceProvider;

use super::{Band, score_indicator};
use crate::scoring::ValueRange;
use crate::{Classifier, InputLimits};

/// Difference between recumbent length and standing height.
pub const POSTURE_CORRECTION_CM: f64 = 0.7;

/// Below this age the tables assume recumbent length, from it standing height.
pub const STANDING_FROM_MONTHS: u32 = 24;

/// Balita: children 0–60 months. BB/U, TB/U and BB/TB Z-scores.
pub struct Balita;

/// Convert a measured height to the convention the tables use for the age.
pub fn adjust_height(height: f64, age_months: u32, posture: Option<MeasurementPosture>) -> f64 {
    match posture {
        Some(MeasurementPosture::Standing) if age_months < STANDING_FROM_MONTHS => {
            height + POSTURE_CORRECTION_CM
        }
        Some(MeasurementPosture::Lying) if age_months >= STANDING_FROM_MONTHS => {
            height - POSTURE_CORRECTION_CM
        }
        _ => height,
    }
}

/// BB/U bands.
pub fn weight_for_age_band(z: f64) -> Band {
    match z {
        z if z < -3.0 => Band::new("Gizi Buruk", StatusTag::SeverelyUnderweight, "Z-Score < -3 SD"),
        z if z < -2.0 => Band::new("Gizi Kurang", StatusTag::Underweight, "Z-Score -3 s/d < -2 SD"),
        z if z <= 1.0 => Band::new("Gizi Baik", StatusTag::Normal, "Z-Score -2 s/d +1 SD"),
        _ => Band::new("Berisiko Gizi Lebih", StatusTag::OverweightRisk, "Z-Score > +1 SD"),
    }
}

/// TB/U bands.
pub fn height_for_age_band(z: f64) -> Band {
    match z {
        z if z < -3.0 => Band::new("Sangat Pendek", StatusTag::SeverelyStunted, "Z-Score < -3 SD"),
        z if z < -2.0 => Band::new("Pendek", StatusTag::Stunted, "Z-Score -3 s/d < -2 SD"),
        z if z <= 3.0 => Band::new("Normal", StatusTag::Normal, "Z-Score -2 s/d +3 SD"),
        _ => Band::new("Tinggi", StatusTag::Tall, "Z-Score > +3 SD"),
    }
}

/// BB/TB bands.
pub fn weight_for_height_band(z: f64) -> Band {
    match z {
        z if z < -3.0 => Band::new("Gizi Buruk", StatusTag::SeverelyUnderweight, "Z-Score < -3 SD"),
        z if z < -2.0 => Band::new("Gizi Kurang", StatusTag::Underweight, "Z-Score -3 s/d < -2 SD"),
        z if z <= 1.0 => Band::new("Gizi Baik", StatusTag::Normal, "Z-Score -2 s/d +1 SD"),
        z if z <= 2.0 => Band::new("Berisiko Gizi Lebih", StatusTag::OverweightRisk, "Z-Score +1 s/d +2 SD"),
        z if z <= 3.0 => Band::new("Gizi Lebih", StatusTag::Overweight, "Z-Score +2 s/d +3 SD"),
        _ => Band::new("Obesitas", StatusTag::Obese, "Z-Score > +3 SD"),
    }
}

impl Classifier for Balita {
    fn category(&self) -> Category {
        Category::Balita
    }

    fn name(&self) -> &str {
        "Balita (0-60 bulan)"
    }

    fn classify(
        &self,
        gender: Gender,
        age: &AgeAtMeasurement,
        input: &MeasurementInput,
        refs: &dyn ReferenceProvider,
    ) -> CategoryResult {
        let height = adjust_height(input.height, age.months, input.posture);

        let bbu = score_indicator(
            ReferenceTable::BalitaBbu,
            lookup_by_age(refs, ReferenceTable::BalitaBbu, gender, age.months),
            input.weight,
            weight_for_age_band,
        );
        let tbu = score_indicator(
            ReferenceTable::BalitaTbu,
            lookup_by_age(refs, ReferenceTable::BalitaTbu, gender, age.months),
            height,
            height_for_age_band,
        );
        let bbtb = score_indicator(
            ReferenceTable::BalitaBbtb,
            lookup_by_height(refs, gender, height),
            input.weight,
            weight_for_height_band,
        );

        CategoryResult::Balita(BalitaResult {
            adjusted_height: height,
            bbu,
            tbu,
            bbtb,
        })
    }

    fn reference_notes(&self, _gender: Gender, _input: &MeasurementInput) -> Vec<ReferenceNote> {
        [
            ("BB/U", "Standar: -2 SD s/d +1 SD"),
            ("TB/U", "Standar: -2 SD s/d +3 SD"),
            ("BB/TB", "Standar: -2 SD s/d +1 SD"),
        ]
        .into_iter()
        .map(|(indicator, note)| ReferenceNote {
            indicator: indicator.to_string(),
            note: note.to_string(),
        })
        .collect()
    }

    fn input_limits(&self) -> InputLimits {
        InputLimits {
            weight: ValueRange::new(0.5, 50.0),
            height: ValueRange::new(30.0, 150.0),
            head_circumference: Some(ValueRange::new(10.0, 60.0)),
            waist_circumference: None,
        }
    }
}
