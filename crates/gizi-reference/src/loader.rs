use std::path::{Path, PathBuf};

use gizi_core::models::reference::{ReferenceRow, ReferenceTable};
use gizi_core::reference_keys;
use serde::{Deserialize, Serialize};

use crate::error::ReferenceError;
use crate::store::ReferenceStore;

/// Provenance of a reference directory, read from `manifest.json` if present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceManifest {
    /// e.g. "WHO Child Growth Standards 2006 / PMK No. 2 Tahun 2020"
    pub source: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug)]
pub struct LoadedReference {
    pub store: ReferenceStore,
    pub manifest: Option<ReferenceManifest>,
}

/// Load every table file found in `dir`.
///
/// A missing table file is not an error: lookups against it report the
/// indicator as unavailable. A missing directory is.
pub fn load_dir(dir: &Path) -> Result<LoadedReference, ReferenceError> {
    if !dir.is_dir() {
        return Err(ReferenceError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let manifest = read_json::<ReferenceManifest>(&dir.join(reference_keys::MANIFEST))?;
    if let Some(m) = &manifest {
        tracing::info!(source = %m.source, version = ?m.version, "reference manifest");
    }

    let mut store = ReferenceStore::new();
    for table in ReferenceTable::ALL {
        let path = dir.join(reference_keys::table_file(table));
        match read_json::<Vec<ReferenceRow>>(&path)? {
            Some(rows) => {
                let count = rows.len();
                store.extend(table, rows)?;
                tracing::info!(%table, rows = count, "reference table loaded");
            }
            None => {
                tracing::warn!(%table, path = %path.display(), "reference table file missing");
            }
        }
    }

    Ok(LoadedReference { store, manifest })
}

/// Write one table file into `dir` (tmp + rename).
pub fn write_table(
    dir: &Path,
    table: ReferenceTable,
    rows: &[ReferenceRow],
) -> Result<PathBuf, ReferenceError> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(reference_keys::table_file(table));
    let json = serde_json::to_vec_pretty(rows).map_err(|source| ReferenceError::Serialize {
        file: path.display().to_string(),
        source,
    })?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json)?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::debug!(%table, path = %path.display(), rows = rows.len(), "reference table written");
    Ok(path)
}

pub fn write_manifest(dir: &Path, manifest: &ReferenceManifest) -> Result<PathBuf, ReferenceError> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(reference_keys::MANIFEST);
    let json = serde_json::to_vec_pretty(manifest).map_err(|source| ReferenceError::Serialize {
        file: path.display().to_string(),
        source,
    })?;
    std::fs::write(&path, &json)?;
    Ok(path)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ReferenceError> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path)?;
    let value = serde_json::from_slice(&bytes).map_err(|source| ReferenceError::Parse {
        file: path.display().to_string(),
        source,
    })?;
    Ok(Some(value))
}
