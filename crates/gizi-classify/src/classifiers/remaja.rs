use gizi_core::age::AgeAtMeasurement;
use gizi_core::models::category::Category;
use gizi_core::models::measurement::MeasurementInput;
use gizi_core::models::reference::ReferenceTable;
use gizi_core::models::result::{CategoryResult, ReferenceNote, RemajaResult};
use gizi_core::models::status::StatusTag;
use gizi_core::models::subject::Gender;
use gizi_reference::lookup::lookup_by_age;
use gizi_reference::provider::ReferenceProvider;

use super::{Band, score_indicator};
use crate::scoring::{ValueRange, bmi, round_to};
use crate::{Classifier, InputLimits};

/// Remaja: 61–216 months. IMT/U (BMI-for-age) Z-score.
pub struct Remaja;

/// IMT/U bands.
pub fn bmi_for_age_band(z: f64) -> Band {
    match z {
        z if z < -3.0 => Band::new("Gizi Buruk", StatusTag::SeverelyUnderweight, "Z-Score < -3 SD"),
        z if z < -2.0 => Band::new("Gizi Kurang", StatusTag::Underweight, "Z-Score -3 s/d < -2 SD"),
        z if z <= 1.0 => Band::new("Gizi Baik", StatusTag::Normal, "Z-Score -2 s/d +1 SD"),
        z if z <= 2.0 => Band::new("Gizi Lebih", StatusTag::Overweight, "Z-Score +1 s/d +2 SD"),
        _ => Band::new("Obesitas", StatusTag::Obese, "Z-Score > +2 SD"),
    }
}

impl Classifier for Remaja {
    fn category(&self) -> Category {
        Category::Remaja
    }

    fn name(&self) -> &str {
        "Remaja (61-216 bulan)"
    }

    fn classify(
        &self,
        gender: Gender,
        age: &AgeAtMeasurement,
        input: &MeasurementInput,
        refs: &dyn ReferenceProvider,
    ) -> CategoryResult {
        let value = bmi(input.weight, input.height);

        let imtu = score_indicator(
            ReferenceTable::RemajaImtu,
            lookup_by_age(refs, ReferenceTable::RemajaImtu, gender, age.months),
            value,
            bmi_for_age_band,
        );

        CategoryResult::Remaja(RemajaResult {
            bmi: round_to(value, 2),
            imtu,
        })
    }

    fn reference_notes(&self, _gender: Gender, _input: &MeasurementInput) -> Vec<ReferenceNote> {
        vec![ReferenceNote {
            indicator: "IMT/U".to_string(),
            note: "Standar: -2 SD s/d +1 SD".to_string(),
        }]
    }

    fn input_limits(&self) -> InputLimits {
        InputLimits {
            weight: ValueRange::new(5.0, 200.0),
            height: ValueRange::new(50.0, 250.0),
            head_circumference: None,
            waist_circumference: None,
        }
    }
}
