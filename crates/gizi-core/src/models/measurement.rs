use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::Category;
use super::result::CalculationResult;
use super::subject::Subject;
use crate::error::CoreError;

/// How a child's length/height was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MeasurementPosture {
    #[serde(rename = "berdiri")]
    Standing,
    #[serde(rename = "berbaring")]
    Lying,
}

impl MeasurementPosture {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementPosture::Standing => "berdiri",
            MeasurementPosture::Lying => "berbaring",
        }
    }
}

impl fmt::Display for MeasurementPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementPosture {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "berdiri" => Ok(MeasurementPosture::Standing),
            "berbaring" => Ok(MeasurementPosture::Lying),
            other => Err(CoreError::InvalidPosture(other.to_string())),
        }
    }
}

/// Raw inputs of one measurement event. Weight in kg, lengths in cm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementInput {
    pub measurement_date: jiff::civil::Date,
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub head_circumference: Option<f64>,
    #[serde(default)]
    pub waist_circumference: Option<f64>,
    #[serde(default)]
    pub arm_circumference: Option<f64>,
    #[serde(default, rename = "measurement_type")]
    pub posture: Option<MeasurementPosture>,
    #[serde(default)]
    pub is_pregnant: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MeasurementInput {
    pub fn new(measurement_date: jiff::civil::Date, weight: f64, height: f64) -> Self {
        Self {
            measurement_date,
            weight,
            height,
            head_circumference: None,
            waist_circumference: None,
            arm_circumference: None,
            posture: None,
            is_pregnant: false,
            notes: None,
        }
    }
}

/// A stored measurement: the inputs plus everything derived from them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub measurement_date: jiff::civil::Date,
    pub category: Category,
    pub age_in_months: u32,
    pub age_in_years: u32,
    pub weight: f64,
    pub height: f64,
    pub head_circumference: Option<f64>,
    pub waist_circumference: Option<f64>,
    pub arm_circumference: Option<f64>,
    #[serde(rename = "measurement_type")]
    pub posture: Option<MeasurementPosture>,
    pub is_pregnant: bool,
    pub bmi: Option<f64>,
    pub notes: Option<String>,
    pub result: CalculationResult,
    pub created_at: jiff::Timestamp,
}

impl Measurement {
    /// Assemble the persisted record. The id and creation time come from
    /// the caller so the calculation itself stays clock-free.
    pub fn record(
        id: Uuid,
        subject: &Subject,
        input: MeasurementInput,
        result: CalculationResult,
        created_at: jiff::Timestamp,
    ) -> Self {
        Self {
            id,
            subject_id: subject.id,
            measurement_date: input.measurement_date,
            category: result.category(),
            age_in_months: result.age.months,
            age_in_years: result.age.years,
            weight: input.weight,
            height: input.height,
            head_circumference: input.head_circumference,
            waist_circumference: input.waist_circumference,
            arm_circumference: input.arm_circumference,
            posture: input.posture,
            is_pregnant: input.is_pregnant,
            bmi: result.result.bmi(),
            notes: input.notes,
            result,
            created_at,
        }
    }
}
