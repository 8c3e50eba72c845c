use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown gender code: {0} (expected L or P)")]
    InvalidGender(String),

    #[error("unknown measurement posture: {0} (expected berdiri or berbaring)")]
    InvalidPosture(String),

    #[error("unknown category: {0}")]
    InvalidCategory(String),

    #[error("unknown reference table: {0}")]
    InvalidTable(String),
}
