//! Single-measurement entry points.
//!
//! `classify` is the whole engine: age and category from the two dates,
//! the category's classifier, reference notes and the recommendation.
//! Trend and validation are layered on top and never change the
//! classification itself.

use gizi_core::age::AgeAtMeasurement;
use gizi_core::models::measurement::MeasurementInput;
use gizi_core::models::result::CalculationResult;
use gizi_core::models::subject::{Gender, Subject};
use gizi_reference::provider::ReferenceProvider;
use uuid::Uuid;

use crate::error::ClassifyError;
use crate::trend::{self, MeasurementHistory};
use crate::{classifier_for, recommendation};

/// Classify one measurement. Never fails: missing reference rows show up
/// as unavailable indicators.
pub fn classify(
    refs: &dyn ReferenceProvider,
    gender: Gender,
    date_of_birth: jiff::civil::Date,
    input: &MeasurementInput,
) -> CalculationResult {
    let age = AgeAtMeasurement::between(date_of_birth, input.measurement_date);
    let classifier = classifier_for(age.category);

    tracing::debug!(
        category = %age.category,
        age_months = age.months,
        %gender,
        "classifying measurement"
    );

    let result = classifier.classify(gender, &age, input, refs);
    let references = classifier.reference_notes(gender, input);
    let recommendation = recommendation::recommend(&result, input);

    CalculationResult {
        age,
        result,
        references,
        recommendation,
        trend: None,
    }
}

/// Classify and attach the BMI trend against the subject's latest earlier
/// measurement. `exclude` skips the measurement being recalculated.
pub fn classify_with_trend<H: MeasurementHistory + ?Sized>(
    refs: &dyn ReferenceProvider,
    history: &H,
    subject: &Subject,
    input: &MeasurementInput,
    exclude: Option<Uuid>,
) -> CalculationResult {
    let mut calculation = classify(refs, subject.gender, subject.date_of_birth, input);

    if let Some(current) = calculation.result.bmi()
        && let Some(prior) = history.latest_bmi(subject.id, exclude)
    {
        calculation.trend = trend::compare(current, prior);
    }

    calculation
}

/// Validate against the category's accepted ranges, then classify.
pub fn classify_validated(
    refs: &dyn ReferenceProvider,
    gender: Gender,
    date_of_birth: jiff::civil::Date,
    input: &MeasurementInput,
    today: jiff::civil::Date,
) -> Result<CalculationResult, ClassifyError> {
    validate(date_of_birth, input, today)?;
    Ok(classify(refs, gender, date_of_birth, input))
}

/// Range-check a measurement for the category the subject falls into on
/// the measurement date.
pub fn validate(
    date_of_birth: jiff::civil::Date,
    input: &MeasurementInput,
    today: jiff::civil::Date,
) -> Result<(), ClassifyError> {
    let age = AgeAtMeasurement::between(date_of_birth, input.measurement_date);
    let errors = classifier_for(age.category).validate(input, today);

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "measurement input rejected");
        Err(ClassifyError::Validation(errors))
    }
}
