//! JSON request accepted by `gizi classify --input`.

use std::path::Path;

use gizi_classify::trend::{MeasurementHistory, PriorBmi};
use gizi_core::models::measurement::MeasurementInput;
use gizi_core::models::subject::{Gender, Subject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectInput {
    #[serde(default)]
    pub name: Option<String>,
    pub gender: Gender,
    pub date_of_birth: jiff::civil::Date,
}

impl SubjectInput {
    pub fn into_subject(self) -> Subject {
        let name = self.name.unwrap_or_default();
        Subject::new(name, self.date_of_birth, self.gender)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub subject: SubjectInput,
    pub measurement: MeasurementInput,
    /// BMI of the subject's previous measurement, for the trend.
    #[serde(default)]
    pub previous: Option<PriorBmi>,
}

pub fn read_request(path: &Path) -> eyre::Result<ClassifyRequest> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read request at {}: {e}", path.display()))?;
    let request = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid request in {}: {e}", path.display()))?;
    Ok(request)
}

/// History holding at most one prior BMI, supplied by the caller rather
/// than looked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuppliedPrevious(pub Option<PriorBmi>);

impl MeasurementHistory for SuppliedPrevious {
    fn latest_bmi(&self, _subject_id: Uuid, _exclude: Option<Uuid>) -> Option<PriorBmi> {
        self.0
    }
}
