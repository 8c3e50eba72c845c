use gizi_core::models::reference::ReferenceTable;
use gizi_core::models::subject::Gender;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("reference directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {file}: {source}")]
    Serialize {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{table} row for gender {gender} has no {field} key")]
    MissingKey {
        table: ReferenceTable,
        gender: Gender,
        field: &'static str,
    },

    #[error("duplicate {table} row for gender {gender} at {key}")]
    DuplicateRow {
        table: ReferenceTable,
        gender: Gender,
        key: String,
    },

    #[error("{table} row for gender {gender} at {key} has decreasing SD anchors")]
    NonMonotonic {
        table: ReferenceTable,
        gender: Gender,
        key: String,
    },
}
