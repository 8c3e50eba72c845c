//! gizi-classify
//!
//! Nutritional-status classification. Pure and synchronous: every call
//! takes the subject, the measurement and a reference provider explicitly
//! and reads nothing else.

pub mod classifiers;
pub mod engine;
pub mod error;
pub mod recommendation;
pub mod scoring;
pub mod summary;
pub mod trend;

use gizi_core::age::AgeAtMeasurement;
use gizi_core::models::category::Category;
use gizi_core::models::measurement::MeasurementInput;
use gizi_core::models::result::{CategoryResult, ReferenceNote};
use gizi_core::models::subject::Gender;
use gizi_reference::provider::ReferenceProvider;

use scoring::{ValidationError, ValueRange};

/// Accepted input ranges for a category. Circumferences that do not apply
/// to the category are `None` and never checked.
#[derive(Debug, Clone, Copy)]
pub struct InputLimits {
    pub weight: ValueRange,
    pub height: ValueRange,
    pub head_circumference: Option<ValueRange>,
    pub waist_circumference: Option<ValueRange>,
}

pub const ARM_CIRCUMFERENCE_RANGE: ValueRange = ValueRange::new(10.0, 60.0);
pub const NOTES_MAX_CHARS: usize = 1000;

/// Trait implemented by each age category's classifier.
pub trait Classifier: Send + Sync {
    fn category(&self) -> Category;

    /// Human-readable name (e.g., "Balita (0-60 bulan)").
    fn name(&self) -> &str;

    /// Classify one measurement. Missing reference rows degrade single
    /// indicators to "Data Tidak Tersedia"; this never fails.
    fn classify(
        &self,
        gender: Gender,
        age: &AgeAtMeasurement,
        input: &MeasurementInput,
        refs: &dyn ReferenceProvider,
    ) -> CategoryResult;

    /// Standard ranges to show next to this category's indicators.
    fn reference_notes(&self, gender: Gender, input: &MeasurementInput) -> Vec<ReferenceNote>;

    fn input_limits(&self) -> InputLimits;

    /// Check a measurement against this category's accepted ranges.
    /// Classification does not call this; callers validate first.
    fn validate(&self, input: &MeasurementInput, today: jiff::civil::Date) -> Vec<ValidationError> {
        let limits = self.input_limits();
        let mut errors = Vec::new();

        if input.measurement_date > today {
            errors.push(ValidationError {
                field: "measurement_date".to_string(),
                value: None,
                expected_range: None,
                message: "Tanggal pengukuran tidak boleh di masa depan".to_string(),
            });
        }

        check_range(&mut errors, "weight", "Berat badan", Some(input.weight), Some(limits.weight));
        check_range(&mut errors, "height", "Tinggi badan", Some(input.height), Some(limits.height));
        check_range(
            &mut errors,
            "head_circumference",
            "Lingkar kepala",
            input.head_circumference,
            limits.head_circumference,
        );
        check_range(
            &mut errors,
            "waist_circumference",
            "Lingkar perut",
            input.waist_circumference,
            limits.waist_circumference,
        );
        check_range(
            &mut errors,
            "arm_circumference",
            "Lingkar lengan atas",
            input.arm_circumference,
            Some(ARM_CIRCUMFERENCE_RANGE),
        );

        if let Some(notes) = &input.notes
            && notes.chars().count() > NOTES_MAX_CHARS
        {
            errors.push(ValidationError {
                field: "notes".to_string(),
                value: None,
                expected_range: None,
                message: format!("Catatan maksimal {NOTES_MAX_CHARS} karakter"),
            });
        }

        errors
    }
}

fn check_range(
    errors: &mut Vec<ValidationError>,
    field: &str,
    label: &str,
    value: Option<f64>,
    range: Option<ValueRange>,
) {
    let (Some(value), Some(range)) = (value, range) else {
        return;
    };
    if range.contains(value) {
        return;
    }

    let message = if !value.is_finite() {
        format!("{label} harus berupa angka")
    } else if value < range.min {
        format!("{label} terlalu kecil")
    } else {
        format!("{label} terlalu besar")
    };

    errors.push(ValidationError {
        field: field.to_string(),
        value: Some(value),
        expected_range: Some(range),
        message,
    });
}

/// Return all registered classifiers.
pub fn all_classifiers() -> Vec<Box<dyn Classifier>> {
    vec![
        Box::new(classifiers::balita::Balita),
        Box::new(classifiers::remaja::Remaja),
        Box::new(classifiers::dewasa::Dewasa),
    ]
}

/// The classifier for a category.
pub fn classifier_for(category: Category) -> Box<dyn Classifier> {
    match category {
        Category::Balita => Box::new(classifiers::balita::Balita),
        Category::Remaja => Box::new(classifiers::remaja::Remaja),
        Category::Dewasa => Box::new(classifiers::dewasa::Dewasa),
    }
}
