use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid measurement input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
}

impl From<ValidationError> for ClassifyError {
    fn from(e: ValidationError) -> Self {
        ClassifyError::Validation(vec![e])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
