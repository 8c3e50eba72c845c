use gizi_core::age::AgeAtMeasurement;
use gizi_core::models::category::Category;
use gizi_core::models::measurement::MeasurementInput;
use gizi_core::models::result::{
    CategoryResult, CentralObesity, DewasaResult, LilaResult, ReferenceNote,
};
use gizi_core::models::status::StatusTag;
use gizi_core::models::subject::Gender;
use gizi_reference::provider::ReferenceProvider;

use super::Band;
use crate::scoring::{ValueRange, bmi, round_to};
use crate::{Classifier, InputLimits};

/// LILA below this (cm) flags chronic energy deficiency risk.
pub const LILA_THRESHOLD_CM: f64 = 23.5;

/// Dewasa: over 216 months. Kemenkes adult BMI bands, central obesity from
/// waist circumference, and LILA screening in pregnancy.
pub struct Dewasa;

/// Kemenkes adult BMI bands, on the unrounded BMI.
pub fn bmi_band(bmi: f64) -> Band {
    match bmi {
        b if b < 17.0 => Band::new("Sangat Kurus", StatusTag::SeverelyUnderweight, "IMT < 17.0"),
        b if b < 18.5 => Band::new("Kurus", StatusTag::Underweight, "IMT 17.0 - 18.4"),
        b if b <= 25.0 => Band::new("Normal", StatusTag::Normal, "IMT 18.5 - 25.0"),
        b if b <= 27.0 => Band::new("Gemuk", StatusTag::Overweight, "IMT 25.1 - 27.0"),
        _ => Band::new("Obesitas", StatusTag::Obese, "IMT > 27.0"),
    }
}

/// Waist circumference (cm) above which central obesity is flagged.
pub fn waist_threshold_cm(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 90.0,
        Gender::Female => 80.0,
    }
}

/// Central-obesity block. Pregnancy skips the waist check entirely.
pub fn central_obesity(
    gender: Gender,
    waist: Option<f64>,
    is_pregnant: bool,
) -> Option<CentralObesity> {
    if is_pregnant {
        return Some(CentralObesity {
            status: "Normal (Hamil)".to_string(),
            tag: StatusTag::Normal,
            has_central_obesity: None,
            threshold: None,
            actual: waist,
            difference: None,
        });
    }

    let waist = waist?;
    let threshold = waist_threshold_cm(gender);
    let has_obesity = waist > threshold;

    Some(CentralObesity {
        status: if has_obesity { "Obesitas Sentral" } else { "Normal" }.to_string(),
        tag: if has_obesity {
            StatusTag::CentralObesity
        } else {
            StatusTag::Normal
        },
        has_central_obesity: Some(has_obesity),
        threshold: Some(threshold),
        actual: Some(waist),
        difference: Some(round_to(waist - threshold, 2)),
    })
}

/// LILA screening against the fixed 23.5 cm threshold.
pub fn lila(arm_circumference: f64) -> LilaResult {
    let is_kek = arm_circumference < LILA_THRESHOLD_CM;
    LilaResult {
        status: if is_kek { "Risiko KEK" } else { "Normal" }.to_string(),
        tag: if is_kek {
            StatusTag::KekRisk
        } else {
            StatusTag::Normal
        },
        actual: arm_circumference,
        threshold: LILA_THRESHOLD_CM,
    }
}

impl Classifier for Dewasa {
    fn category(&self) -> Category {
        Category::Dewasa
    }

    fn name(&self) -> &str {
        "Dewasa (>18 tahun)"
    }

    fn classify(
        &self,
        gender: Gender,
        _age: &AgeAtMeasurement,
        input: &MeasurementInput,
        _refs: &dyn ReferenceProvider,
    ) -> CategoryResult {
        let value = bmi(input.weight, input.height);
        let band = bmi_band(value);

        let status = if input.is_pregnant {
            format!("Ibu Hamil ({})", band.label)
        } else {
            band.label.to_string()
        };

        let lila_result = match (input.is_pregnant, input.arm_circumference) {
            (true, Some(arm)) => Some(lila(arm)),
            _ => None,
        };

        CategoryResult::Dewasa(DewasaResult {
            bmi: round_to(value, 2),
            status,
            tag: band.tag,
            reason: band.reason.to_string(),
            is_pregnant: input.is_pregnant,
            central_obesity: central_obesity(gender, input.waist_circumference, input.is_pregnant),
            lila: lila_result,
        })
    }

    fn reference_notes(&self, gender: Gender, input: &MeasurementInput) -> Vec<ReferenceNote> {
        let mut notes = vec![ReferenceNote {
            indicator: "IMT".to_string(),
            note: "Ideal: 18.5 - 25.0".to_string(),
        }];

        if input.waist_circumference.is_some() {
            notes.push(ReferenceNote {
                indicator: "Lingkar Perut".to_string(),
                note: format!("Normal: ≤ {} cm", waist_threshold_cm(gender)),
            });
        }
        if input.arm_circumference.is_some() {
            notes.push(ReferenceNote {
                indicator: "LILA".to_string(),
                note: format!("Normal: ≥ {LILA_THRESHOLD_CM} cm"),
            });
        }

        notes
    }

    fn input_limits(&self) -> InputLimits {
        InputLimits {
            weight: ValueRange::new(20.0, 500.0),
            height: ValueRange::new(100.0, 300.0),
            head_circumference: None,
            waist_circumference: Some(ValueRange::new(30.0, 200.0)),
        }
    }
}
